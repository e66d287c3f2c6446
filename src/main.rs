use {
    clap::Parser,
    puzzles::{puzzles, Args},
};

fn main() {
    puzzles().run(&Args::parse());
}
