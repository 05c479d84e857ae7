//! Perfect maze generation
//!
//! A randomized depth-first backtracker carves passages over a `rows x cols`
//! grid of cells. Every carved passage joins a visited cell to a fresh one,
//! so the result is a spanning tree: exactly one path between any two cells.
//!
//! The traversal keeps its own stack of frames instead of recursing, so the
//! depth (up to `rows * cols`) never touches the call stack.

use serde::{Deserialize, Serialize};

use super::rng::{RandomSource, shuffle};
use crate::error::{MazeResult, require_cells};

/// A cell coordinate (row, column), 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Direction of a carving move from one cell to an adjacent one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

impl Move {
    /// Candidate order before shuffling
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Target of this move, or None when it would leave the grid
    pub fn target(self, from: Cell, rows: u32, cols: u32) -> Option<Cell> {
        let (row, col) = match self {
            Move::Up => (from.row.checked_sub(1)?, from.col),
            Move::Down => (from.row + 1, from.col),
            Move::Left => (from.row, from.col.checked_sub(1)?),
            Move::Right => (from.row, from.col + 1),
        };
        (row < rows && col < cols).then_some(Cell::new(row, col))
    }
}

/// Dense row-major boolean matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::filled(rows, cols, false)
    }

    pub fn filled(rows: u32, cols: u32, value: bool) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows as usize * cols as usize],
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    pub fn get(&self, row: u32, col: u32) -> bool {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: bool) {
        let i = self.index(row, col);
        self.cells[i] = value;
    }

    /// Number of true entries
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// Iterate `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, bool)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i as u32 / cols, i as u32 % cols, v))
    }
}

/// A generated maze: which walls between adjacent cells have been removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    rows: u32,
    cols: u32,
    /// `(rows - 1) x cols`: true = passage between (r, c) and (r + 1, c)
    horizontals: Grid,
    /// `rows x (cols - 1)`: true = passage between (r, c) and (r, c + 1)
    verticals: Grid,
}

impl Maze {
    /// Maze with every internal wall in place
    pub(crate) fn closed(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            horizontals: Grid::new(rows - 1, cols),
            verticals: Grid::new(rows, cols - 1),
        }
    }

    /// Maze with no internal walls at all (not a perfect maze)
    #[cfg(test)]
    pub(crate) fn open(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            horizontals: Grid::filled(rows - 1, cols, true),
            verticals: Grid::filled(rows, cols - 1, true),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn horizontals(&self) -> &Grid {
        &self.horizontals
    }

    pub fn verticals(&self) -> &Grid {
        &self.verticals
    }

    /// Total passages carved across both grids
    pub fn open_count(&self) -> usize {
        self.horizontals.count() + self.verticals.count()
    }

    /// Remove the wall crossed by `mv` out of `from`.
    /// The entry lives at the lower row/column of the two cells.
    fn carve(&mut self, from: Cell, mv: Move) {
        match mv {
            Move::Up => self.horizontals.set(from.row - 1, from.col, true),
            Move::Down => self.horizontals.set(from.row, from.col, true),
            Move::Left => self.verticals.set(from.row, from.col - 1, true),
            Move::Right => self.verticals.set(from.row, from.col, true),
        }
    }

    /// Whether a passage joins `from` to its neighbour in direction `mv`
    pub fn is_open(&self, from: Cell, mv: Move) -> bool {
        if mv.target(from, self.rows, self.cols).is_none() {
            return false;
        }
        match mv {
            Move::Up => self.horizontals.get(from.row - 1, from.col),
            Move::Down => self.horizontals.get(from.row, from.col),
            Move::Left => self.verticals.get(from.row, from.col - 1),
            Move::Right => self.verticals.get(from.row, from.col),
        }
    }

    /// Cells reachable from `cell` in one step
    pub fn passages(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Move::ALL.into_iter().filter_map(move |mv| {
            self.is_open(cell, mv)
                .then(|| mv.target(cell, self.rows, self.cols))
                .flatten()
        })
    }

    /// Text rendering, `#` for walls and spaces for floor
    pub fn to_ascii(&self) -> String {
        let width = self.cols as usize * 2 + 1;
        let mut out = String::with_capacity((width + 1) * (self.rows as usize * 2 + 1));

        out.push_str(&"#".repeat(width));
        out.push('\n');
        for row in 0..self.rows {
            // Cell row: floor plus the wall to the right of each cell
            out.push('#');
            for col in 0..self.cols {
                out.push(' ');
                let open = self.is_open(Cell::new(row, col), Move::Right);
                out.push(if open { ' ' } else { '#' });
            }
            out.push('\n');

            // Wall row below: the floor under each cell plus corner posts
            out.push('#');
            for col in 0..self.cols {
                let open = self.is_open(Cell::new(row, col), Move::Down);
                out.push(if open { ' ' } else { '#' });
                out.push('#');
            }
            out.push('\n');
        }
        out
    }
}

/// One pending cell on the backtracker's stack
#[derive(Debug)]
struct Frame {
    cell: Cell,
    moves: [Move; 4],
    next: usize,
}

/// Generate a perfect maze with a randomized depth-first backtracker.
///
/// The start cell is drawn uniformly (row first, then column). Each visited
/// cell shuffles its four candidate moves once, then tries them in order,
/// carving into and descending to every unvisited in-bounds neighbour.
///
/// The same sequence of draws from `rng` always yields the same maze.
pub fn generate(rows: u32, cols: u32, rng: &mut impl RandomSource) -> MazeResult<Maze> {
    require_cells("rows", rows)?;
    require_cells("cols", cols)?;

    let mut maze = Maze::closed(rows, cols);
    let mut visited = Grid::new(rows, cols);
    let mut stack: Vec<Frame> = Vec::new();

    let start = Cell::new(
        rng.next_index(rows as usize) as u32,
        rng.next_index(cols as usize) as u32,
    );
    visit(start, &mut visited, &mut stack, rng);

    while let Some(frame) = stack.last_mut() {
        let Some(&mv) = frame.moves.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let Some(target) = mv.target(cell, rows, cols) else {
            continue;
        };
        if visited.get(target.row, target.col) {
            continue;
        }

        maze.carve(cell, mv);
        visit(target, &mut visited, &mut stack, rng);
    }

    log::info!(
        "Generated {}x{} maze from ({}, {}) with {} passages",
        rows,
        cols,
        start.row,
        start.col,
        maze.open_count()
    );
    Ok(maze)
}

/// Mark `cell` visited and push its shuffled moves. Already-visited cells are a no-op.
fn visit(
    cell: Cell,
    visited: &mut Grid,
    stack: &mut Vec<Frame>,
    rng: &mut impl RandomSource,
) {
    if visited.get(cell.row, cell.col) {
        return;
    }
    visited.set(cell.row, cell.col, true);

    let mut moves = Move::ALL;
    shuffle(&mut moves, rng);
    stack.push(Frame {
        cell,
        moves,
        next: 0,
    });
}
