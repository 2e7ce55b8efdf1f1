use crate::dims::Dims;

/// Single cell of the [`Grid`](super::Grid).
///
/// Cells don't know about their neighbors, the grid derives those from the position. A cell only
/// records in which directions a passage was carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            north: false,
            south: false,
            east: false,
            west: false,
            coord: pos,
        }
    }

    /// Opens the passage in the given direction on this cell only.
    ///
    /// Use [`Grid::link`](super::Grid::link) to keep both sides in sync.
    pub(crate) fn make_passage(&mut self, way: Way) {
        *self.passage_mut(way) = true;
    }

    pub(crate) fn clear(&mut self) {
        self.north = false;
        self.south = false;
        self.east = false;
        self.west = false;
    }

    fn passage_mut(&mut self, way: Way) -> &mut bool {
        match way {
            Way::North => &mut self.north,
            Way::South => &mut self.south,
            Way::East => &mut self.east,
            Way::West => &mut self.west,
        }
    }

    pub fn is_open(&self, way: Way) -> bool {
        match way {
            Way::North => self.north,
            Way::South => self.south,
            Way::East => self.east,
            Way::West => self.west,
        }
    }

    pub fn is_closed(&self, way: Way) -> bool {
        !self.is_open(way)
    }

    pub fn open_ways(&self) -> impl Iterator<Item = Way> + '_ {
        Way::ALL.into_iter().filter(|&way| self.is_open(way))
    }

    pub fn link_count(&self) -> usize {
        self.open_ways().count()
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Way {
    North,
    South,
    East,
    West,
}

impl Way {
    pub const ALL: [Way; 4] = [Way::North, Way::South, Way::East, Way::West];

    pub fn offset(&self) -> Dims {
        match self {
            Self::North => Dims(0, -1),
            Self::South => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::West => Dims(-1, 0),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the direction leading from `from` to `to`, if they are adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<Self> {
        Self::ALL.into_iter().find(|way| from + way.offset() == to)
    }
}
