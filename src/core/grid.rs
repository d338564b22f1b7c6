use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::{Tile, Vec2};

/// The tile layer. Dimensions are fixed once built; only goal flags change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    bounds: BoundsOriginRoot,
    cells: Vec<Tile>,
}

impl Grid {
    pub fn new(height: i32, width: i32, default: Tile) -> Self {
        let bounds = BoundsOriginRoot::new(height, width);
        let cells = vec![default; bounds.area().max(0) as usize];
        Grid { bounds, cells }
    }

    /// Builds a grid from rows of equal length. Returns `None` for ragged input.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Grid {
            bounds: BoundsOriginRoot::new(height as i32, width as i32),
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&Tile> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.bounds.width.max(1) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &Tile)> {
        let width = self.bounds.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, tile)| (Vec2::new(index as i32 / width, index as i32 % width), tile))
    }

    pub fn goals(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter(|tile| tile.is_goal())
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Tile;

    fn index(&self, index: &Vec2) -> &Self::Output {
        debug_assert!(self.bounds.contains(index), "{:?} outside {:?}", index, self.bounds);
        &self.cells[(index.i * self.bounds.width + index.j) as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        debug_assert!(self.bounds.contains(index), "{:?} outside {:?}", index, self.bounds);
        &mut self.cells[(index.i * self.bounds.width + index.j) as usize]
    }
}
