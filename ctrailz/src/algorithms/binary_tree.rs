use smallvec::SmallVec;

use crate::{
    dims::Dims,
    grid::{Grid, Way},
};

use super::{random_int, Algorithm, Random};

/// Binary tree maze algorithm.
///
/// Every cell carves a passage either north or east, picked at random. Cells on the north border
/// can only go east and cells on the east border can only go north, so both borders end up as
/// straight corridors. The north-east corner carves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTree;

impl Algorithm for BinaryTree {
    fn process(&self, grid: &mut Grid, rng: &mut Random) {
        for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
            let candidates = [Way::North, Way::East]
                .into_iter()
                .filter(|&way| grid.neighbor(pos, way).is_some())
                .collect::<SmallVec<[_; 2]>>();

            if candidates.is_empty() {
                continue;
            }

            let way = candidates[random_int(rng, 0, candidates.len())];
            grid.link(pos, way);
            log::trace!("carved {:?} from {:?}", way, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    fn carve(rows: usize, cols: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols);
        BinaryTree.process(&mut grid, &mut Random::seed_from_u64(seed));
        grid
    }

    #[test]
    fn spanning_tree() {
        for (rows, cols) in [(2, 2), (5, 7), (10, 10), (13, 3), (30, 41)] {
            for seed in 0..5 {
                let grid = carve(rows, cols, seed);
                assert_eq!(grid.link_count(), rows * cols - 1);
                assert!(grid.is_connected());
                assert!(grid.is_perfect());
            }
        }
    }

    #[test]
    fn every_cell_but_corner_goes_north_or_east() {
        let grid = carve(8, 9, 42);
        let corner = Dims(8, 0);

        for cell in grid.iter() {
            let up = cell.is_open(Way::North) as u8;
            let right = cell.is_open(Way::East) as u8;
            if cell.get_coord() == corner {
                assert_eq!(up + right, 0);
            } else {
                assert_eq!(up + right, 1, "cell {:?}", cell.get_coord());
            }
        }
    }

    #[test]
    fn borders_are_corridors() {
        let grid = carve(6, 6, 3);
        for x in 0..5 {
            assert!(grid.is_linked(Dims(x, 0), Way::East));
        }
        for y in 1..6 {
            assert!(grid.is_linked(Dims(5, y), Way::North));
        }
    }

    #[test]
    fn single_cell() {
        let grid = carve(1, 1, 0);
        assert_eq!(grid.link_count(), 0);
        assert!(grid.is_perfect());
    }

    #[test]
    fn single_row_and_column() {
        let row = carve(1, 6, 9);
        assert_eq!(row.link_count(), 5);
        for x in 0..5 {
            assert!(row.is_linked(Dims(x, 0), Way::East));
        }

        let column = carve(6, 1, 9);
        assert_eq!(column.link_count(), 5);
        for y in 1..6 {
            assert!(column.is_linked(Dims(0, y), Way::North));
        }
    }

    #[test]
    fn empty_grid_is_untouched() {
        let grid = carve(0, 4, 1);
        assert_eq!(grid, Grid::new(0, 4));
    }

    #[test]
    fn deterministic_for_same_seed() {
        assert_eq!(carve(12, 17, 1234), carve(12, 17, 1234));
    }
}
