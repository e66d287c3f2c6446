pub use search::*;

use {
    clap::Parser,
    memmap::Mmap,
    std::{
        any::type_name,
        fmt::Debug,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, Utf8Error},
    },
};

mod search;

#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The puzzle to run
    #[arg(short, long)]
    pub puzzle: String,

    #[command(flatten)]
    pub run_args: RunArgs,
}

impl Args {
    fn try_to_solution<S>(&self) -> Option<S>
    where
        S: for<'a> TryFrom<&'a str>,
        for<'a> <S as TryFrom<&'a str>>::Error: Debug,
    {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = format!("input/{}.txt", self.puzzle);

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe {
            open_utf8_file(file_path, |input| {
                input.try_into().map_or_else(
                    |error| {
                        eprintln!(
                            "Failed to convert file \"{file_path}\" to type {}:\n{error:#?}",
                            type_name::<S>()
                        );

                        None
                    },
                    Some,
                )
            })
        }
        .unwrap_or_else(|error| {
            eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

            None
        })
    }
}

pub trait RunSolution
where
    Self: Sized + for<'a> TryFrom<&'a str>,
    for<'a> <Self as TryFrom<&'a str>>::Error: Debug,
{
    fn run_internal(&mut self, args: &RunArgs);

    fn run(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            solution.run_internal(&args.run_args);
        }
    }
}

#[derive(Clone)]
pub struct Puzzle {
    pub name: &'static str,
    pub run: fn(&Args),
}

#[derive(Default)]
pub struct Puzzles(Vec<Puzzle>);

impl Puzzles {
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self(puzzles)
    }

    pub fn run(&self, args: &Args) {
        match self.0.iter().find(|puzzle| puzzle.name == args.puzzle) {
            Some(puzzle) => (puzzle.run)(args),
            None => panic!(
                "Queried puzzle \"{}\" has no registered solution.\n\
                Args:\n\
                {args:#?}",
                args.puzzle
            ),
        }
    }
}

#[macro_export]
macro_rules! puzzles {
    [ $( $puzzle:ident ),* $(,)? ] => {
        $(
            pub mod $puzzle;
        )*

        pub fn puzzles() -> &'static Puzzles {
            static ONCE_LOCK: std::sync::OnceLock<Puzzles> = std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| Puzzles::new(vec![ $(
                Puzzle {
                    name: stringify!($puzzle),
                    run: $puzzle::Solution::run,
                },
            )* ]))
        }
    };
}

#[macro_export]
macro_rules! pretty_assert_eq {
    ($left:expr, $right:expr) => {{
        let left = $left;
        let right = $right;

        if left != right {
            panic!(
                "pretty assertion failed: `(left == right)`\nleft: {left:#?}\nright: {right:#?}"
            );
        }
    }};
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str` over the file's
/// contents to a provided callback function, returning the callback's output
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function: there is no guarantee that an
/// external process won't modify the file while this function refers to it as an immutable string
/// slice, which would be UB.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> nom::IResult<&'i str, Self>;
}

#[macro_export]
macro_rules! define_cell {
    {
        #[repr(u8)]
        $(#[$attr:meta])*
        $pub:vis enum $cell:ident { $(
            $(#[$variant_attr:meta])*
            $variant:ident = $variant_const:ident = $variant_u8:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $(#[$attr])*
        $pub enum $cell { $(
            $(#[$variant_attr])*
            $variant = Self::$variant_const,
        )* }

        impl $cell {
            $(
                const $variant_const: u8 = $variant_u8;
            )*
            const STR: &'static str =
                // SAFETY: Trivial
                unsafe { ::std::str::from_utf8_unchecked(&[$(
                    $cell::$variant_const,
                )*]) };
        }

        impl Parse for $cell {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map(
                    ::nom::character::complete::one_of($cell::STR),
                    |value: char| { $cell::try_from(value).unwrap() }
                )(input)
            }
        }

        impl TryFrom<u8> for $cell {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        Self::$variant_const => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                (value as u8).try_into()
            }
        }
    }
}
