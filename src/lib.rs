//! Find the way through an ASCII-art maze
//!
//! Maze text is drawn with `+`, `-` and `|` for walls and spaces for floor.
//! Two floor cells on the outer border mark the way in and the way out.
//! [MazeParser] turns the text into a [Grid], [PathFinder] locates the two
//! openings and runs A* between any two cells.
//!
//! # Examples
//! ## Walking through a simple maze
//! ```
//! use ascii_maze::{MazeParser, PathFinder, Point};
//!
//! let maze_text = "
//! +--+--+--+
//!       |  |
//! +--+  +  +
//! |        |
//! +  +--+--+";
//! let grid = MazeParser::default().parse(&maze_text[1..]).unwrap();
//! assert_eq!((grid.width(), grid.height()), (7, 5));
//!
//! let finder = PathFinder::load_maze(&grid);
//! assert_eq!(finder.start(), Some(Point::new(1, 4)));
//! assert_eq!(finder.end(), Some(Point::new(0, 1)));
//!
//! let path = finder.solve().unwrap().unwrap();
//! assert_eq!(path.len(), 8);
//! assert_eq!(path.last(), Some(&Point::new(0, 1)));
//! ```
//!
//! ## Inspecting search costs
//! ```
//! use ascii_maze::{CostTable, MazeParser, PathFinder, Point};
//!
//! let grid = MazeParser::default().parse("+ +\n| |\n+ +").unwrap();
//! let finder = PathFinder::load_maze(&grid);
//!
//! let mut table = CostTable::new();
//! let path = finder.solve_observed(&mut table).unwrap();
//! assert_eq!(path, Some(vec![Point::new(1, 1), Point::new(1, 2)]));
//! assert_eq!(table.costs(Point::new(1, 1)).unwrap().f_cost, 2);
//! ```

pub mod error;
pub mod grid;
#[cfg(feature = "mapgen")]
pub mod maze_generator;
pub mod parser;
pub mod solver;

pub use error::{FormatError, PathError, PointParseError};
pub use grid::{Cell, CellKind, Grid, Point};
pub use parser::{CollapsePolicy, MazeParser, ParseOptions};
pub use solver::{heuristic, CostTable, Costs, Endpoints, PathFinder, SearchObserver};

#[cfg(test)]
mod tests {
    use crate::{CellKind, MazeParser, PathFinder, Point};

    #[test]
    fn parse_and_solve_open_room() {
        let text = [
            "+--+--+",
            "       ",
            "+--+--+",
        ]
        .join("\n");
        let grid = MazeParser::default().parse(&text).unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert!((0..5).all(|x| grid.get(Point::new(x, 1)).unwrap().kind() == CellKind::Floor));

        let finder = PathFinder::load_maze(&grid);
        assert_eq!(finder.start(), Some(Point::new(0, 1)));
        assert_eq!(finder.end(), Some(Point::new(4, 1)));

        let path = finder.solve().unwrap().unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(4, 1)
            ]
        );
    }

    #[test]
    fn walled_room_has_no_openings() {
        let grid = MazeParser::default()
            .parse("+--+--+\n|     |\n+--+--+")
            .unwrap();
        assert_eq!(grid.to_string(), "+-+-+\n|   |\n+-+-+");

        let finder = PathFinder::load_maze(&grid);
        assert_eq!(finder.start(), None);
        assert_eq!(finder.end(), None);
    }

    #[test]
    fn one_finder_many_queries() {
        let grid = MazeParser::default()
            .parse("+--+--+\n|     |\n|  |  |\n+--+--+")
            .unwrap();
        let finder = PathFinder::load_maze(&grid);

        let there = finder.find_path(Point::new(1, 2), Point::new(3, 2)).unwrap();
        let back = finder.find_path(Point::new(3, 2), Point::new(1, 2)).unwrap();
        assert_eq!(there.map(|p| p.len()), Some(4));
        assert_eq!(back.map(|p| p.len()), Some(4));
    }
}
