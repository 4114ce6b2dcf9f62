//! Grid of wall and floor cells

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{FormatError, PointParseError};

/// Location in the maze
///
/// `x` grows to the right, `y` grows downward, one unit per text row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parse `"x,y"`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PointParseError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        Ok(Point {
            x: x.trim().parse().map_err(|_| err())?,
            y: y.trim().parse().map_err(|_| err())?,
        })
    }
}

/// Whether a cell blocks movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Floor,
}

/// A single maze symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// `+`
    Corner,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// ` `
    Floor,
}

impl Cell {
    const S_CORNER: char = '+';
    const S_HORIZONTAL: char = '-';
    const S_VERTICAL: char = '|';
    const S_FLOOR: char = ' ';

    /// Classify a symbol, `None` for anything outside the maze alphabet
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::S_CORNER => Some(Cell::Corner),
            Self::S_HORIZONTAL => Some(Cell::Horizontal),
            Self::S_VERTICAL => Some(Cell::Vertical),
            Self::S_FLOOR => Some(Cell::Floor),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Corner => Self::S_CORNER,
            Cell::Horizontal => Self::S_HORIZONTAL,
            Cell::Vertical => Self::S_VERTICAL,
            Cell::Floor => Self::S_FLOOR,
        }
    }

    pub fn kind(self) -> CellKind {
        match self {
            Cell::Floor => CellKind::Floor,
            Cell::Corner | Cell::Horizontal | Cell::Vertical => CellKind::Wall,
        }
    }

    pub fn is_walkable(self) -> bool {
        self.kind() == CellKind::Floor
    }
}

/// Rectangular, row-major, immutable grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid, checking that `cells` fills exactly `width * height`.
    pub fn new(cells: Vec<Cell>, width: usize, height: usize) -> Result<Self, FormatError> {
        if width == 0 || height == 0 {
            return Err(FormatError::Empty);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(FormatError::Misaligned {
                width,
                height,
                expected,
                found: cells.len(),
            });
        }
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells, indexed by `x + width * y`
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn get(&self, point: Point) -> Option<Cell> {
        if self.contains(point) {
            Some(self.cells[point.x + self.width * point.y])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| row.iter().map(|c| c.symbol()).join(""))
            .join("\n");
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_symbols() {
        for symbol in ['+', '-', '|'] {
            let cell = Cell::from_symbol(symbol).unwrap();
            assert_eq!(cell.kind(), CellKind::Wall);
            assert_eq!(cell.symbol(), symbol);
        }
        assert_eq!(Cell::from_symbol(' '), Some(Cell::Floor));
        assert!(Cell::Floor.is_walkable());
        assert_eq!(Cell::from_symbol('#'), None);
    }

    #[test]
    fn grid_rejects_misaligned_cells() {
        let err = Grid::new(vec![Cell::Floor; 5], 3, 2).unwrap_err();
        assert_eq!(
            err,
            FormatError::Misaligned {
                width: 3,
                height: 2,
                expected: 6,
                found: 5
            }
        );
        assert_eq!(Grid::new(vec![], 0, 0).unwrap_err(), FormatError::Empty);
    }

    #[test]
    fn grid_lookup_and_display() {
        let cells = vec![
            Cell::Corner,
            Cell::Horizontal,
            Cell::Corner,
            Cell::Vertical,
            Cell::Floor,
            Cell::Vertical,
        ];
        let grid = Grid::new(cells, 3, 2).unwrap();
        assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::Floor));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.to_string(), "+-+\n| |");
    }

    #[test]
    fn parse_point() {
        assert_eq!("3,4".parse::<Point>(), Ok(Point::new(3, 4)));
        assert_eq!(" 0 , 12 ".parse::<Point>(), Ok(Point::new(0, 12)));
        assert!("3".parse::<Point>().is_err());
        assert!("-1,2".parse::<Point>().is_err());
    }
}
