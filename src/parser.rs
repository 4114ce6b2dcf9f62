//! Read ASCII-art maze text into a [Grid]
//!
//! Maze borders are drawn with two characters per horizontal wall segment,
//! e.g. `+--+--+`. Such redundant columns carry no meaning and are collapsed
//! so that every remaining column is one grid cell wide.

use log::debug;

use crate::error::FormatError;
use crate::grid::{Cell, Grid};

/// Which repeated header symbols mark a column as redundant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapsePolicy {
    /// Collapse on `--` only
    #[default]
    Dashes,
    /// Collapse on `--` and on two adjacent spaces
    ///
    /// Changes floor topology for mazes with openings in the header row.
    DashesAndSpaces,
}

impl CollapsePolicy {
    fn collapses(self, previous: char, current: char) -> bool {
        match (self, previous, current) {
            (_, '-', '-') => true,
            (CollapsePolicy::DashesAndSpaces, ' ', ' ') => true,
            _ => false,
        }
    }
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub collapse: CollapsePolicy,
}

/// Converts maze text into a grid
#[derive(Debug, Clone, Default)]
pub struct MazeParser {
    options: ParseOptions,
}

impl MazeParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse maze text
    ///
    /// Trailing empty lines, and trailing whitespace-only lines shorter than
    /// the line above them, are ignored. The column count is taken from the
    /// last remaining line. Collapsed columns are
    /// decided on the first line only and then skipped on every row.
    ///
    /// Returns error if the text is empty, a row is shorter than the last
    /// line, or a symbol other than `+`, `-`, `|` or space is found.
    ///
    /// # Examples
    /// ```
    /// use ascii_maze::MazeParser;
    ///
    /// let grid = MazeParser::default().parse("+--+\n|  |\n+--+").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 3));
    /// assert_eq!(grid.to_string(), "+-+\n| |\n+-+");
    /// ```
    pub fn parse(&self, text: &str) -> Result<Grid, FormatError> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|row| row.chars().collect()).collect();
        while Self::is_trailing_blank(&rows) {
            rows.pop();
        }
        let height = rows.len();
        let columns = rows.last().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(FormatError::Empty);
        }

        let mut collapsed = vec![false; columns];
        let mut cells = Vec::with_capacity(columns * height);

        for (y, row) in rows.iter().enumerate() {
            if row.len() < columns {
                return Err(FormatError::RowTooShort {
                    row: y,
                    expected: columns,
                    found: row.len(),
                });
            }
            for (x, &symbol) in row.iter().take(columns).enumerate() {
                if y == 0 {
                    if x > 0 && self.options.collapse.collapses(row[x - 1], symbol) {
                        collapsed[x] = true;
                        continue;
                    }
                } else if collapsed[x] {
                    continue;
                }
                let cell = Cell::from_symbol(symbol)
                    .ok_or(FormatError::UnexpectedSymbol { symbol, x, y })?;
                cells.push(cell);
            }
        }

        let width = columns - collapsed.iter().filter(|c| **c).count();
        debug!("parsed maze of {width}x{height} ({columns} text columns)");
        Grid::new(cells, width, height)
    }

    /// Whether the last row is padding after the maze
    ///
    /// A whitespace-only row as wide as the one above is a row of floor.
    fn is_trailing_blank(rows: &[Vec<char>]) -> bool {
        match rows {
            [.., last] if last.is_empty() => true,
            [.., above, last] => {
                last.len() < above.len() && last.iter().all(|c| c.is_whitespace())
            }
            _ => false,
        }
    }
}
