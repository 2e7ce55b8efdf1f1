pub mod cell;
pub use cell::{Cell, Way};

use std::fmt;

use crate::{array::Array2D, dims::Dims};

/// Rectangular grid of cells, the board every algorithm carves into.
///
/// Neighbor relations are implicit: every in-bounds cell next to another one is its neighbor.
/// Passages ("links") are stored on both cells, [`Grid::link`] keeps them symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a grid with no passages.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            cells: Array2D::from_fn(cols, rows, Cell::new),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Removes every passage, keeps dimensions.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    /// Position of the neighbor in the given direction, `None` at the border.
    pub fn neighbor(&self, pos: Dims, way: Way) -> Option<Dims> {
        let other = pos + way.offset();
        (self.is_in_bounds(pos) && self.is_in_bounds(other)).then_some(other)
    }

    pub fn north(&self, pos: Dims) -> Option<Dims> {
        self.neighbor(pos, Way::North)
    }

    pub fn south(&self, pos: Dims) -> Option<Dims> {
        self.neighbor(pos, Way::South)
    }

    pub fn east(&self, pos: Dims) -> Option<Dims> {
        self.neighbor(pos, Way::East)
    }

    pub fn west(&self, pos: Dims) -> Option<Dims> {
        self.neighbor(pos, Way::West)
    }

    pub fn get_neighbors_pos(&self, pos: Dims) -> impl Iterator<Item = Dims> + '_ {
        Way::ALL
            .into_iter()
            .filter_map(move |way| self.neighbor(pos, way))
    }

    /// Carves a passage from `pos` in direction `way`, on both cells.
    ///
    /// Returns `false` and does nothing, if there is no neighbor that way.
    pub fn link(&mut self, pos: Dims, way: Way) -> bool {
        let Some(other) = self.neighbor(pos, way) else {
            return false;
        };

        self.cells[pos].make_passage(way);
        self.cells[other].make_passage(way.reverse());
        true
    }

    pub fn is_linked(&self, pos: Dims, way: Way) -> bool {
        self.get_cell(pos).is_some_and(|cell| cell.is_open(way))
    }

    /// Number of passages in the grid, each counted once.
    pub fn link_count(&self) -> usize {
        self.cells.iter().map(Cell::link_count).sum::<usize>() / 2
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// Cells in row-major order, north row first.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Whether every cell can be reached from every other cell through passages.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.iter_pos().next() else {
            return true;
        };

        let mut visited = Array2D::new(false, self.cols(), self.rows());
        let mut stack = vec![start];
        visited[start] = true;
        let mut seen = 1;

        while let Some(pos) = stack.pop() {
            for way in self.cells[pos].open_ways() {
                let Some(next) = self.neighbor(pos, way) else {
                    continue;
                };

                if !visited[next] {
                    visited[next] = true;
                    seen += 1;
                    stack.push(next);
                }
            }
        }

        seen == self.len()
    }

    /// Whether the passages form a spanning tree, ie. a maze with exactly one path between any two
    /// cells.
    pub fn is_perfect(&self) -> bool {
        self.is_empty() || (self.link_count() == self.len() - 1 && self.is_connected())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = Box<dyn Iterator<Item = &'a Cell> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

const CORNER: char = '+';
const WALL_H: &str = "---";
const WALL_V: char = '|';
const BODY: &str = "   ";

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CORNER)?;
        for _ in 0..self.cols() {
            write!(f, "{}{}", WALL_H, CORNER)?;
        }
        writeln!(f)?;

        for row in self.cells.rows() {
            write!(f, "{}", WALL_V)?;
            for cell in row {
                let east = if cell.is_open(Way::East) { ' ' } else { WALL_V };
                write!(f, "{}{}", BODY, east)?;
            }
            writeln!(f)?;

            write!(f, "{}", CORNER)?;
            for cell in row {
                let south = if cell.is_open(Way::South) { BODY } else { WALL_H };
                write!(f, "{}{}", south, CORNER)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
