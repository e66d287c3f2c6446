use {
    crate::*,
    bitvec::prelude::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many1, many_m_n},
        sequence::{delimited, terminated, tuple},
        Err, IResult,
    },
    static_assertions::const_assert_eq,
    std::{
        collections::{HashMap, VecDeque},
        fmt::{Display, Formatter, Result as FmtResult, Write},
    },
    strum::EnumCount,
};

define_cell! {
    #[repr(u8)]
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, EnumCount, Eq, Hash, PartialEq)]
    pub enum Cell {
        Empty = EMPTY = b'.',
        Amber = AMBER = b'A',
        Bronze = BRONZE = b'B',
        Copper = COPPER = b'C',
        Desert = DESERT = b'D',
    }
}

// `kind` and `from_kind` lean on the token variants being contiguous
const_assert_eq!(
    Cell::KINDS,
    (Cell::DESERT - Cell::AMBER) as usize + 1_usize
);

impl Cell {
    pub const KINDS: usize = Cell::COUNT - 1_usize;

    pub fn kind(self) -> Option<usize> {
        match self {
            Self::Empty => None,
            _ => Some((self as u8 - Self::AMBER) as usize),
        }
    }

    pub fn from_kind(kind: usize) -> Self {
        Self::try_from(kind as u8 + Self::AMBER).unwrap()
    }

    #[inline(always)]
    pub const fn unit_cost_for_kind(kind: usize) -> u32 {
        10_u32.pow(kind as u32)
    }
}

type CorridorBits = BitArr!(for Layout::MAX_CORRIDOR_LEN, in u32);

/// The corridor cells from `start` through `end`, inclusive, as a mask.
fn corridor_span(start: usize, end: usize) -> CorridorBits {
    let mut span: CorridorBits = CorridorBits::ZERO;

    span.as_mut_bitslice()[start..end + 1_usize].fill(true);

    span
}

/// The fixed topology of one puzzle: `kinds` rooms of a shared `depth`, joined by a corridor.
///
/// Room `r` houses tokens of kind `r`, behind the corridor cell `entrance(r)`. Everything else
/// about the shape is derived from the two fields.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
pub struct Layout {
    kinds: usize,
    depth: usize,
}

impl Layout {
    pub const MAX_CORRIDOR_LEN: usize = 32_usize;

    pub const fn new(kinds: usize, depth: usize) -> Self {
        assert!(kinds >= 1_usize && kinds <= Cell::KINDS);
        assert!(depth >= 1_usize);
        assert!(2_usize * kinds + 3_usize <= Self::MAX_CORRIDOR_LEN);

        Self { kinds, depth }
    }

    pub const fn kinds(self) -> usize {
        self.kinds
    }

    pub const fn depth(self) -> usize {
        self.depth
    }

    pub const fn corridor_len(self) -> usize {
        2_usize * self.kinds + 3_usize
    }

    pub const fn entrance(self, room: usize) -> usize {
        2_usize * (room + 1_usize)
    }

    /// Corridor cells a token stepping out of a room may come to rest on: every cell that isn't
    /// directly above a room entrance.
    fn stop_cells(self) -> CorridorBits {
        let mut stop_cells: CorridorBits = corridor_span(0_usize, self.corridor_len() - 1_usize);

        for room in 0_usize..self.kinds {
            stop_cells.set(self.entrance(room), false);
        }

        stop_cells
    }

    /// Cost of relocating a token of `kind` between corridor cell `corridor_index` and cell
    /// `depth_index` of `room`, identical in both directions.
    const fn move_cost(
        self,
        corridor_index: usize,
        room: usize,
        depth_index: usize,
        kind: usize,
    ) -> u32 {
        (corridor_index.abs_diff(self.entrance(room)) + depth_index + 1_usize) as u32
            * Cell::unit_cost_for_kind(kind)
    }

    /// Every legal single-token relocation from `burrow`, with its cost.
    pub fn successors(self, burrow: &Burrow, successors: &mut Vec<OpenSetElement<Burrow, u32>>) {
        successors.clear();

        let occupied: CorridorBits = burrow.occupied_corridor_cells();

        // Corridor to room. A token may enter its room once no foreign occupants remain inside,
        // and it always settles on the deepest empty cell.
        for corridor_index in occupied.iter_ones() {
            let cell: Cell = burrow.corridor[corridor_index];
            let kind: usize = cell.kind().expect("occupied corridor cells hold tokens");

            if kind >= self.kinds {
                // A token without a room of its own never re-enters one.
                continue;
            }

            let room_cells: &[Cell] = &burrow.rooms[kind];

            if !room_cells
                .iter()
                .all(|room_cell| *room_cell == Cell::Empty || *room_cell == cell)
            {
                continue;
            }

            let entrance: usize = self.entrance(kind);
            let mut path: CorridorBits =
                corridor_span(corridor_index.min(entrance), corridor_index.max(entrance));

            path.set(corridor_index, false);

            if (path & occupied).not_any() {
                if let Some(depth_index) = room_cells
                    .iter()
                    .rposition(|room_cell| *room_cell == Cell::Empty)
                {
                    successors.push(OpenSetElement(
                        burrow.swapped(corridor_index, kind, depth_index),
                        self.move_cost(corridor_index, kind, depth_index, kind),
                    ));
                }
            }
        }

        // Room to corridor. Only the shallowest occupant of a room still holding a foreign token
        // may step out, onto any reachable stop cell.
        let stops: CorridorBits = self.stop_cells();

        for room in 0_usize..self.kinds {
            let room_cells: &[Cell] = &burrow.rooms[room];
            let own_cell: Cell = Cell::from_kind(room);

            if room_cells
                .iter()
                .all(|room_cell| *room_cell == Cell::Empty || *room_cell == own_cell)
            {
                continue;
            }

            let (depth_index, cell): (usize, Cell) = room_cells
                .iter()
                .copied()
                .enumerate()
                .find(|(_, room_cell)| *room_cell != Cell::Empty)
                .expect("a room holding a foreign token has an occupant");
            let kind: usize = cell.kind().expect("occupied room cells hold tokens");
            let entrance: usize = self.entrance(room);

            for stop in stops.iter_ones() {
                if (corridor_span(stop.min(entrance), stop.max(entrance)) & occupied).not_any() {
                    successors.push(OpenSetElement(
                        burrow.swapped(stop, room, depth_index),
                        self.move_cost(stop, room, depth_index, kind),
                    ));
                }
            }
        }
    }

    /// Lower bound on the remaining cost to organize `burrow`.
    ///
    /// Each corridor token is charged its horizontal distance to its entrance plus one step in;
    /// each token in a foreign room is charged entrance to entrance plus its steps out and one
    /// step in. A token sitting anywhere in its own room is charged nothing, even when a foreign
    /// occupant below it will force it back out.
    pub fn estimated_remaining_cost(self, burrow: &Burrow) -> u32 {
        let mut total: u32 = 0_u32;

        for (corridor_index, cell) in burrow.corridor.iter().copied().enumerate() {
            if let Some(kind) = cell.kind() {
                total += (corridor_index.abs_diff(self.entrance(kind)) + 1_usize) as u32
                    * Cell::unit_cost_for_kind(kind);
            }
        }

        for (room, room_cells) in burrow.rooms.iter().enumerate() {
            for (depth_index, cell) in room_cells.iter().copied().enumerate() {
                if let Some(kind) = cell.kind() {
                    if kind != room {
                        total += (self.entrance(room).abs_diff(self.entrance(kind))
                            + depth_index
                            + 2_usize) as u32
                            * Cell::unit_cost_for_kind(kind);
                    }
                }
            }
        }

        total
    }
}

/// One arrangement of tokens across the corridor and the rooms.
///
/// A pure value: equality and hashing are structural over the cells, and a constructed `Burrow` is
/// never mutated. Successor arrangements are fresh snapshots differing in exactly the two swapped
/// cells.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Burrow {
    corridor: Box<[Cell]>,
    rooms: Box<[Box<[Cell]>]>,
}

impl Burrow {
    pub fn new(layout: Layout, corridor: Vec<Cell>, rooms: Vec<Vec<Cell>>) -> Self {
        assert!(corridor.len() == layout.corridor_len());
        assert!(rooms.len() == layout.kinds());
        assert!(rooms.iter().all(|room| room.len() == layout.depth()));

        Self {
            corridor: corridor.into(),
            rooms: rooms.into_iter().map(Vec::into_boxed_slice).collect(),
        }
    }

    pub fn organized(layout: Layout) -> Self {
        Self {
            corridor: vec![Cell::Empty; layout.corridor_len()].into(),
            rooms: (0_usize..layout.kinds())
                .map(|room| vec![Cell::from_kind(room); layout.depth()].into_boxed_slice())
                .collect(),
        }
    }

    /// Whether every room cell holds the room's own kind. The corridor is necessarily empty at
    /// that point and isn't checked separately.
    pub fn is_organized(&self) -> bool {
        self.rooms.iter().enumerate().all(|(room, room_cells)| {
            let own_cell: Cell = Cell::from_kind(room);

            room_cells.iter().all(|room_cell| *room_cell == own_cell)
        })
    }

    fn occupied_corridor_cells(&self) -> CorridorBits {
        let mut occupied: CorridorBits = CorridorBits::ZERO;

        for (corridor_index, cell) in self.corridor.iter().enumerate() {
            if *cell != Cell::Empty {
                occupied.set(corridor_index, true);
            }
        }

        occupied
    }

    /// The snapshot with corridor cell `corridor_index` and cell `depth_index` of `room` swapped.
    fn swapped(&self, corridor_index: usize, room: usize, depth_index: usize) -> Self {
        let mut swapped: Self = self.clone();
        let corridor_cell: Cell = swapped.corridor[corridor_index];

        swapped.corridor[corridor_index] = swapped.rooms[room][depth_index];
        swapped.rooms[room][depth_index] = corridor_cell;

        swapped
    }
}

impl Display for Burrow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let depth: usize = self.rooms.first().map_or(0_usize, |room| room.len());
        let full_width: usize = self.corridor.len() + 2_usize;
        let room_width: usize = 2_usize * self.rooms.len() + 3_usize;

        for _ in 0_usize..full_width {
            f.write_char('#')?;
        }

        f.write_str("\n#")?;

        for cell in self.corridor.iter() {
            f.write_char(*cell as u8 as char)?;
        }

        f.write_str("#\n")?;

        for depth_index in 0_usize..depth {
            let width: usize = if depth_index == 0_usize {
                full_width
            } else {
                room_width
            };

            for column in 0_usize..width {
                f.write_char(
                    if (3_usize..room_width).contains(&column) && column % 2_usize == 1_usize {
                        self.rooms[(column - 3_usize) / 2_usize][depth_index] as u8 as char
                    } else if depth_index == 0_usize || (2_usize..room_width).contains(&column) {
                        '#'
                    } else {
                        ' '
                    },
                )?;
            }

            f.write_char('\n')?;
        }

        for column in 0_usize..room_width {
            f.write_char(if column >= 2_usize { '#' } else { ' ' })?;
        }

        f.write_char('\n')
    }
}

/// The three distinguishable results of attempting a puzzle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The textual diagram didn't describe a starting arrangement.
    MalformedInput,
    /// Every reachable arrangement was explored without organizing the rooms.
    Unsolvable,
    /// The minimum total cost of organizing every token into its room.
    Solved(u32),
}

struct CostEntry {
    previous: Option<Burrow>,
    cost_from_start: u32,
}

#[derive(Default)]
struct OrganizeTable {
    entries: HashMap<Burrow, CostEntry>,
}

impl OrganizeTable {
    fn path_to(&self, organized: &Burrow) -> Vec<Burrow> {
        let mut path: VecDeque<Burrow> = VecDeque::new();
        let mut vertex: Option<&Burrow> = self.entries.contains_key(organized).then_some(organized);

        while let Some(current) = vertex {
            path.push_front(current.clone());
            vertex = self
                .entries
                .get(current)
                .and_then(|cost_entry| cost_entry.previous.as_ref());
        }

        path.into()
    }
}

struct Organize<'t> {
    layout: Layout,
    start: Burrow,
    table: &'t mut OrganizeTable,
}

impl<'t> BestFirstSearch for Organize<'t> {
    type Vertex = Burrow;
    type Cost = u32;

    fn start(&self) -> &Self::Vertex {
        &self.start
    }

    fn is_end(&self, vertex: &Self::Vertex) -> bool {
        vertex.is_organized()
    }

    fn cost_from_start(&self, vertex: &Self::Vertex) -> Option<Self::Cost> {
        self.table
            .entries
            .get(vertex)
            .map(|cost_entry| cost_entry.cost_from_start)
    }

    fn heuristic(&self, vertex: &Self::Vertex) -> Self::Cost {
        self.layout.estimated_remaining_cost(vertex)
    }

    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    ) {
        self.layout.successors(vertex, neighbors);
    }

    fn update_vertex(&mut self, from: &Self::Vertex, to: &Self::Vertex, cost: Self::Cost) {
        self.table.entries.insert(
            to.clone(),
            CostEntry {
                previous: Some(from.clone()),
                cost_from_start: cost,
            },
        );
    }

    fn reset(&mut self) {
        self.table.entries.clear();
        self.table.entries.insert(
            self.start.clone(),
            CostEntry {
                previous: None,
                cost_from_start: 0_u32,
            },
        );
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    layout: Layout,
    burrow: Burrow,
}

// The diagram rows only fit the full complement of rooms
const_assert_eq!(Solution::TOP_WALL.len(), 2_usize * Cell::KINDS + 5_usize);
const_assert_eq!(Solution::BOTTOM_WALL.len(), 2_usize * Cell::KINDS + 3_usize);

impl Solution {
    const TOP_WALL: &'static str = "#############";
    const BOTTOM_WALL: &'static str = "  #########";
    const CORRIDOR_LEN: usize = 2_usize * Cell::KINDS + 3_usize;

    fn try_organize(&self) -> Option<(Vec<Burrow>, u32)> {
        let mut table: OrganizeTable = OrganizeTable::default();
        let cost: u32 = Organize {
            layout: self.layout,
            start: self.burrow.clone(),
            table: &mut table,
        }
        .run_a_star()?;

        Some((table.path_to(&Burrow::organized(self.layout)), cost))
    }

    fn outcome(&self) -> Outcome {
        self.try_organize()
            .map_or(Outcome::Unsolvable, |(_, cost)| Outcome::Solved(cost))
    }

    fn parse_room_row<'i>(input: &'i str) -> IResult<&'i str, Vec<Cell>> {
        delimited(
            alt((tag("###"), tag("  #"))),
            many_m_n(
                Cell::KINDS,
                Cell::KINDS,
                terminated(Cell::parse, tag("#")),
            ),
            tuple((opt(tag("##")), line_ending)),
        )(input)
    }
}

/// Solves one diagram end to end, distinguishing diagrams that can't be parsed from arrangements
/// that can't be organized.
pub fn solve(input: &str) -> Outcome {
    Solution::try_from(input).map_or(Outcome::MalformedInput, |solution| solution.outcome())
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            delimited(
                tuple((tag(Self::TOP_WALL), line_ending)),
                tuple((
                    delimited(
                        tag("#"),
                        many_m_n(Self::CORRIDOR_LEN, Self::CORRIDOR_LEN, Cell::parse),
                        tuple((tag("#"), line_ending)),
                    ),
                    many1(Self::parse_room_row),
                )),
                tuple((tag(Self::BOTTOM_WALL), opt(line_ending))),
            ),
            |(corridor, room_rows)| {
                let layout: Layout = Layout::new(Cell::KINDS, room_rows.len());
                let rooms: Vec<Vec<Cell>> = (0_usize..layout.kinds())
                    .map(|room| room_rows.iter().map(|room_row| room_row[room]).collect())
                    .collect();

                Self {
                    layout,
                    burrow: Burrow::new(layout, corridor, rooms),
                }
            },
        )(input)
    }
}

impl RunSolution for Solution {
    fn run_internal(&mut self, args: &RunArgs) {
        if args.verbose {
            if let Some((path, cost)) = self.try_organize() {
                dbg!(cost);

                for (index, burrow) in path.into_iter().enumerate() {
                    println!("Step {index}:\n{burrow}");
                }
            } else {
                dbg!(Outcome::Unsolvable);
            }
        } else {
            dbg!(self.outcome());
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &[&str] = &[
        concat!(
            "#############\n",
            "#...........#\n",
            "###B#C#B#D###\n",
            "  #A#D#C#A#\n",
            "  #########\n",
        ),
        concat!(
            "#############\n",
            "#...........#\n",
            "###A#A#C#D###\n",
            "  #A#A#C#D#\n",
            "  #########\n",
        ),
        concat!(
            "#############\n",
            "#...B.......#\n",
            "###A#.#C#D###\n",
            "  #A#B#C#D#\n",
            "  #########\n",
        ),
    ];
    const MALFORMED_STR: &str = concat!("#############\n", "#...........#\n");

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .copied()
                .map(|solution_str| Solution::try_from(solution_str).unwrap())
                .collect()
        })[index]
    }

    fn small_swap_layout() -> Layout {
        Layout::new(2_usize, 1_usize)
    }

    fn small_swap_burrow() -> Burrow {
        Burrow::new(
            small_swap_layout(),
            vec![Cell::Empty; 7_usize],
            vec![vec![Cell::Bronze], vec![Cell::Amber]],
        )
    }

    fn try_minimum_cost(layout: Layout, burrow: &Burrow) -> Option<u32> {
        let mut table: OrganizeTable = OrganizeTable::default();

        Organize {
            layout,
            start: burrow.clone(),
            table: &mut table,
        }
        .run_a_star()
    }

    /// Best known cost to every arrangement reachable from `start`, by exhaustive enumeration of
    /// move sequences with best-cost pruning. Independent of the frontier-driven search.
    fn enumerate(layout: Layout, start: &Burrow) -> HashMap<Burrow, u32> {
        let mut best: HashMap<Burrow, u32> = HashMap::new();
        let mut stack: Vec<(Burrow, u32)> = vec![(start.clone(), 0_u32)];

        while let Some((burrow, cost)) = stack.pop() {
            match best.get(&burrow) {
                Some(best_cost) if *best_cost <= cost => continue,
                _ => (),
            }

            best.insert(burrow.clone(), cost);

            let mut successors: Vec<OpenSetElement<Burrow, u32>> = Vec::new();

            layout.successors(&burrow, &mut successors);

            for OpenSetElement(successor, successor_cost) in successors {
                stack.push((successor, cost + successor_cost));
            }
        }

        best
    }

    fn optimal_cost_by_enumeration(layout: Layout, start: &Burrow) -> Option<u32> {
        enumerate(layout, start)
            .into_iter()
            .find_map(|(burrow, cost)| burrow.is_organized().then_some(cost))
    }

    /// The `(corridor_index, room, depth_index, kind)` of the single relocation between two
    /// arrangements.
    fn single_move(from: &Burrow, to: &Burrow) -> (usize, usize, usize, usize) {
        let corridor_index: usize = (0_usize..from.corridor.len())
            .find(|corridor_index| from.corridor[*corridor_index] != to.corridor[*corridor_index])
            .unwrap();
        let (room, depth_index): (usize, usize) = (0_usize..from.rooms.len())
            .flat_map(|room| (0_usize..from.rooms[room].len()).map(move |depth| (room, depth)))
            .find(|(room, depth)| from.rooms[*room][*depth] != to.rooms[*room][*depth])
            .unwrap();
        let kind: usize = from.corridor[corridor_index]
            .kind()
            .or_else(|| from.rooms[room][depth_index].kind())
            .unwrap();

        (corridor_index, room, depth_index, kind)
    }

    fn token_counts(burrow: &Burrow) -> [usize; Cell::KINDS] {
        let mut counts: [usize; Cell::KINDS] = [0_usize; Cell::KINDS];

        for cell in burrow
            .corridor
            .iter()
            .chain(burrow.rooms.iter().flat_map(|room| room.iter()))
        {
            if let Some(kind) = cell.kind() {
                counts[kind] += 1_usize;
            }
        }

        counts
    }

    #[test]
    fn test_solution_try_from_str() {
        let layout: Layout = Layout::new(Cell::KINDS, 2_usize);

        assert_eq!(
            Solution::try_from(SOLUTION_STRS[0_usize]).as_ref(),
            Ok(&Solution {
                layout,
                burrow: Burrow::new(
                    layout,
                    vec![Cell::Empty; 11_usize],
                    vec![
                        vec![Cell::Bronze, Cell::Amber],
                        vec![Cell::Copper, Cell::Desert],
                        vec![Cell::Bronze, Cell::Copper],
                        vec![Cell::Desert, Cell::Amber],
                    ],
                ),
            })
        );
    }

    #[test]
    fn test_solution_try_from_short_str_fails() {
        assert!(Solution::try_from(MALFORMED_STR).is_err());
    }

    #[test]
    fn test_burrow_display() {
        pretty_assert_eq!(solution(0_usize).burrow.to_string(), SOLUTION_STRS[0_usize]);
        pretty_assert_eq!(solution(2_usize).burrow.to_string(), SOLUTION_STRS[2_usize]);
    }

    #[test]
    fn test_layout_stop_cells() {
        assert_eq!(
            Layout::new(Cell::KINDS, 2_usize)
                .stop_cells()
                .iter_ones()
                .collect::<Vec<usize>>(),
            vec![0_usize, 1_usize, 3_usize, 5_usize, 7_usize, 9_usize, 10_usize]
        );
        assert_eq!(
            small_swap_layout()
                .stop_cells()
                .iter_ones()
                .collect::<Vec<usize>>(),
            vec![0_usize, 1_usize, 3_usize, 5_usize, 6_usize]
        );
    }

    #[test]
    fn test_successors_from_start() {
        let solution: &Solution = solution(0_usize);
        let mut successors: Vec<OpenSetElement<Burrow, u32>> = Vec::new();

        solution.layout.successors(&solution.burrow, &mut successors);

        // Every room holds a foreign token and the corridor is empty, so each of the four
        // shallowest tokens can reach each of the seven stop cells.
        assert_eq!(successors.len(), 28_usize);
    }

    #[test]
    fn test_successors_into_room() {
        let solution: &Solution = solution(2_usize);
        let mut successors: Vec<OpenSetElement<Burrow, u32>> = Vec::new();

        solution.layout.successors(&solution.burrow, &mut successors);

        let organized: Burrow = Burrow::organized(solution.layout);
        let into_room: &OpenSetElement<Burrow, u32> = successors
            .iter()
            .find(|OpenSetElement(burrow, _)| *burrow == organized)
            .unwrap();

        assert_eq!(into_room.1, 20_u32);
    }

    #[test]
    fn test_successors_swap_back_at_matching_cost() {
        for index in [0_usize, 2_usize] {
            let solution: &Solution = solution(index);
            let mut successors: Vec<OpenSetElement<Burrow, u32>> = Vec::new();

            solution.layout.successors(&solution.burrow, &mut successors);

            for OpenSetElement(successor, cost) in successors {
                let (corridor_index, room, depth_index, kind): (usize, usize, usize, usize) =
                    single_move(&solution.burrow, &successor);

                assert_eq!(
                    successor.swapped(corridor_index, room, depth_index),
                    solution.burrow
                );
                assert_eq!(
                    cost,
                    solution
                        .layout
                        .move_cost(corridor_index, room, depth_index, kind)
                );
            }
        }
    }

    #[test]
    fn test_estimated_remaining_cost() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(
            solution.layout.estimated_remaining_cost(&solution.burrow),
            7489_u32
        );
        assert_eq!(
            solution
                .layout
                .estimated_remaining_cost(&Burrow::organized(solution.layout)),
            0_u32
        );
    }

    #[test]
    fn test_estimated_remaining_cost_is_admissible() {
        let layout: Layout = small_swap_layout();
        let start: Burrow = small_swap_burrow();

        for burrow in enumerate(layout, &start).into_keys() {
            if let Some(remaining) = optimal_cost_by_enumeration(layout, &burrow) {
                assert!(layout.estimated_remaining_cost(&burrow) <= remaining);
            }
        }
    }

    #[test]
    fn test_token_conservation() {
        let layout: Layout = small_swap_layout();
        let start: Burrow = small_swap_burrow();
        let counts: [usize; Cell::KINDS] = token_counts(&start);

        for burrow in enumerate(layout, &start).into_keys() {
            assert_eq!(token_counts(&burrow), counts);
        }
    }

    #[test]
    fn test_is_organized_is_idempotent() {
        let organized: Burrow = Burrow::organized(solution(0_usize).layout);

        assert!(organized.is_organized());
        assert!(organized.is_organized());
        assert!(!solution(0_usize).burrow.is_organized());
        assert!(!solution(0_usize).burrow.is_organized());
    }

    #[test]
    fn test_small_swap_minimum_cost() {
        let layout: Layout = small_swap_layout();
        let start: Burrow = small_swap_burrow();
        let mut table: OrganizeTable = OrganizeTable::default();
        let mut organize: Organize = Organize {
            layout,
            start: start.clone(),
            table: &mut table,
        };

        assert_eq!(organize.run_a_star(), Some(46_u32));
        assert_eq!(organize.run_dijkstra(), Some(46_u32));
        assert_eq!(optimal_cost_by_enumeration(layout, &start), Some(46_u32));
    }

    #[test]
    fn test_two_kind_two_depth_optimality() {
        let layout: Layout = Layout::new(2_usize, 2_usize);
        let start: Burrow = Burrow::new(
            layout,
            vec![Cell::Empty; 7_usize],
            vec![
                vec![Cell::Bronze, Cell::Amber],
                vec![Cell::Amber, Cell::Bronze],
            ],
        );

        assert_eq!(
            try_minimum_cost(layout, &start),
            optimal_cost_by_enumeration(layout, &start)
        );
    }

    #[test]
    fn test_blocked_single_room_is_unsolvable() {
        let layout: Layout = Layout::new(1_usize, 2_usize);
        let start: Burrow = Burrow::new(
            layout,
            vec![Cell::Empty; 5_usize],
            vec![vec![Cell::Amber, Cell::Bronze]],
        );

        assert_eq!(try_minimum_cost(layout, &start), None);
    }

    #[test]
    fn test_try_organize_path_costs_sum_to_total() {
        let solution: &Solution = solution(0_usize);
        let (path, cost): (Vec<Burrow>, u32) = solution.try_organize().unwrap();

        assert_eq!(path.first(), Some(&solution.burrow));
        assert!(path.last().unwrap().is_organized());
        assert_eq!(
            path.windows(2_usize)
                .map(|pair| {
                    let (corridor_index, room, depth_index, kind): (usize, usize, usize, usize) =
                        single_move(&pair[0_usize], &pair[1_usize]);

                    solution
                        .layout
                        .move_cost(corridor_index, room, depth_index, kind)
                })
                .sum::<u32>(),
            cost
        );
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(SOLUTION_STRS[0_usize]), Outcome::Solved(12521_u32));
        assert_eq!(solve(SOLUTION_STRS[1_usize]), Outcome::Unsolvable);
        assert_eq!(solve(MALFORMED_STR), Outcome::MalformedInput);
    }
}
