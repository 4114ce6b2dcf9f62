//! Map generation

use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Maze generator for additional levels.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];
    /// Chance to carve into an already open room, creating a loop
    const LOOP_CHANCE: f64 = 0.05;

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate maze text with `rows` x `cols` rooms
    ///
    /// Rooms are two characters wide and separated by `+--+` style walls.
    /// One opening is placed on the left border and one on the right
    /// border, so the text parses into a `(2 * cols + 1) x (2 * rows + 1)`
    /// grid with both endpoints set.
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> String {
        let (rows, cols) = (rows.max(1), cols.max(1));
        let height = 2 * rows + 1;
        let width = 2 * cols + 1;
        let mut open: Vec<Vec<bool>> = (0..height)
            .map(|_| (0..width).map(|_| false).collect())
            .collect();

        // Start from a random room; rooms sit on odd coordinates
        let start_x = 1 + self.random.gen_range(0..cols) * 2;
        let start_y = 1 + self.random.gen_range(0..rows) * 2;
        open[start_y][start_x] = true;

        self.build_maze(&mut open, start_x, start_y);

        open[1 + self.random.gen_range(0..rows) * 2][0] = true;
        open[1 + self.random.gen_range(0..rows) * 2][width - 1] = true;

        Self::render(&open)
    }

    /// Build maze with a depth-first walk
    ///
    /// From current room, go into random directions. Carve out the wall
    /// if the room behind it is still closed (or at random, skip this check).
    /// This randomness allows creation of imperfect mazes. Each stack entry
    /// holds a room and the directions it has yet to try.
    fn build_maze(&mut self, open: &mut [Vec<bool>], x: usize, y: usize) {
        let (height, width) = (open.len(), open[0].len());
        let mut stack = vec![(x, y, self.shuffled_directions())];

        while let Some((x, y, directions)) = stack.last_mut() {
            let Some((dx, dy)) = directions.pop() else {
                stack.pop();
                continue;
            };
            let (x, y) = (*x, *y);
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };

            if nx < width
                && ny < height
                && (!open[ny][nx] || self.random.gen_bool(Self::LOOP_CHANCE))
            {
                // Remove wall between current room and neighbor
                open[(y + ny) / 2][(x + nx) / 2] = true;
                open[ny][nx] = true;

                stack.push((nx, ny, self.shuffled_directions()));
            }
        }
    }

    fn shuffled_directions(&mut self) -> Vec<(isize, isize)> {
        let mut directions = Self::DIRECTIONS.to_vec();
        directions.shuffle(&mut self.random);
        directions
    }

    /// Draw the carved layout with doubled horizontal segments
    fn render(open: &[Vec<bool>]) -> String {
        open.iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &is_open)| match (x % 2 == 0, y % 2 == 0, is_open) {
                        (true, true, _) => "+",
                        (true, false, true) => " ",
                        (true, false, false) => "|",
                        (false, _, true) => "  ",
                        (false, _, false) => "--",
                    })
                    .join("")
            })
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::maze_generator::MazeGenerator;
    use crate::{CollapsePolicy, MazeParser, ParseOptions, PathFinder};

    #[test]
    fn generate_parseable_maze() {
        let mut gen = MazeGenerator::new(Some(0));
        let text = gen.generate_maze(6, 8);

        assert!(text.starts_with("+--+--+"));
        let grid = MazeParser::default().parse(&text).unwrap();
        assert_eq!(grid.width(), 17);
        assert_eq!(grid.height(), 13);
    }

    #[test]
    fn generated_maze_is_solvable() {
        for seed in 0..5 {
            let mut gen = MazeGenerator::new(Some(seed));
            let grid = MazeParser::default()
                .parse(&gen.generate_maze(7, 5))
                .unwrap();
            let finder = PathFinder::load_maze(&grid);

            let start = finder.start().unwrap();
            let end = finder.end().unwrap();
            assert_eq!(start.x, 0);
            assert_eq!(end.x, grid.width() - 1);
            let path = finder.solve().unwrap().unwrap();
            assert_eq!(path.last(), Some(&end));
        }
    }

    #[test]
    fn large_maze_is_generated_and_solved() {
        let text = MazeGenerator::new(Some(1)).generate_maze(200, 200);
        let grid = MazeParser::default().parse(&text).unwrap();
        assert_eq!((grid.width(), grid.height()), (401, 401));

        let finder = PathFinder::load_maze(&grid);
        let path = finder.solve().unwrap().unwrap();
        assert_eq!(path.last(), finder.end().as_ref());
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::new(Some(42)).generate_maze(4, 4);
        let b = MazeGenerator::new(Some(42)).generate_maze(4, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn collapse_policy_does_not_matter_for_generated_mazes() {
        let text = MazeGenerator::new(Some(3)).generate_maze(5, 5);
        let spaces = ParseOptions {
            collapse: CollapsePolicy::DashesAndSpaces,
        };
        assert_eq!(
            MazeParser::default().parse(&text).unwrap(),
            MazeParser::new(spaces).parse(&text).unwrap()
        );
    }
}
