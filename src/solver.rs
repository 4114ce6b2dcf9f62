//! Shortest paths through a parsed maze
//!
//! [PathFinder] keeps the walkability of every cell and the two border
//! openings of the maze. Each query runs A* over a freshly allocated node
//! arena, so a loaded maze can be queried any number of times.

use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::error::PathError;
use crate::grid::{Grid, Point};

/// Cost bookkeeping of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Costs {
    /// Known cost from the start
    pub g_cost: u32,
    /// Estimated cost to the goal
    pub h_cost: u32,
    /// `g_cost + h_cost`
    pub f_cost: u32,
}

/// Diagnostics sink for a path search
///
/// Any `FnMut(Point, Costs)` closure is an observer that ignores node
/// initialization.
pub trait SearchObserver {
    /// Called once at the beginning of every query.
    fn search_started(&mut self, _start: Point, _end: Point) {}

    /// Called once per grid cell while the node arena is built.
    fn node_initialized(&mut self, _point: Point, _walkable: bool) {}

    /// Called when a node receives new costs: the start node, and every
    /// neighbor whose cost improves.
    fn costs_updated(&mut self, point: Point, costs: Costs);
}

impl<F: FnMut(Point, Costs)> SearchObserver for F {
    fn costs_updated(&mut self, point: Point, costs: Costs) {
        self(point, costs)
    }
}

struct NoObserver;

impl SearchObserver for NoObserver {
    fn costs_updated(&mut self, _point: Point, _costs: Costs) {}
}

/// Latest costs seen for each coordinate
///
/// Used to draw cost annotations over the maze. A table holds the most
/// recent query only; it is cleared when a new search starts.
#[derive(Debug, Default, Clone)]
pub struct CostTable {
    walkable: HashMap<Point, bool>,
    costs: HashMap<Point, Costs>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn costs(&self, point: Point) -> Option<Costs> {
        self.costs.get(&point).copied()
    }

    pub fn walkable(&self, point: Point) -> Option<bool> {
        self.walkable.get(&point).copied()
    }

    /// Costed nodes in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Point, Costs)> + '_ {
        self.costs
            .iter()
            .map(|(p, c)| (*p, *c))
            .sorted_by_key(|(p, _)| (p.y, p.x))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl SearchObserver for CostTable {
    fn search_started(&mut self, _start: Point, _end: Point) {
        self.walkable.clear();
        self.costs.clear();
    }

    fn node_initialized(&mut self, point: Point, walkable: bool) {
        self.walkable.insert(point, walkable);
    }

    fn costs_updated(&mut self, point: Point, costs: Costs) {
        self.costs.insert(point, costs);
    }
}

/// Start and end openings of a maze, if found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Endpoints {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Endpoints {
    /// First opening becomes the start, second the end, the rest are ignored.
    fn record(&mut self, point: Point) {
        if self.start.is_none() {
            self.start = Some(point);
        } else if self.end.is_none() {
            self.end = Some(point);
        }
    }
}

/// Manhattan distance between two points
pub fn heuristic(a: Point, b: Point) -> u32 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u32
}

/// Search-time state of one grid coordinate
#[derive(Debug, Clone)]
struct Node {
    point: Point,
    walkable: bool,
    g_cost: u32,
    h_cost: u32,
    f_cost: u32,
    /// Arena index of the predecessor on the best known path
    previous: Option<usize>,
}

impl Node {
    fn calculate_f_cost(&mut self) {
        self.f_cost = self.g_cost.saturating_add(self.h_cost);
    }

    fn costs(&self) -> Costs {
        Costs {
            g_cost: self.g_cost,
            h_cost: self.h_cost,
            f_cost: self.f_cost,
        }
    }
}

/// A* path finder over a loaded maze
#[derive(Debug, Clone)]
pub struct PathFinder {
    width: usize,
    height: usize,
    /// Walkability indexed by `x + width * y`, read-only after loading
    walkable: Vec<bool>,
    endpoints: Endpoints,
}

impl PathFinder {
    /// Load maze and locate its openings
    ///
    /// Border cells, corners excluded, are scanned in order: top row left to
    /// right, bottom row left to right, left column top to bottom, right
    /// column top to bottom. The first floor cell found is the start, the
    /// second the end.
    pub fn load_maze(grid: &Grid) -> Self {
        let mut finder = PathFinder {
            width: grid.width(),
            height: grid.height(),
            walkable: grid.cells().iter().map(|c| c.is_walkable()).collect(),
            endpoints: Endpoints::default(),
        };
        finder.endpoints = finder.find_endpoints();
        debug!(
            "loaded {}x{} maze, start {:?}, end {:?}",
            finder.width, finder.height, finder.endpoints.start, finder.endpoints.end
        );
        finder
    }

    fn find_endpoints(&self) -> Endpoints {
        let (w, h) = (self.width, self.height);
        let inner_columns = 1..w.saturating_sub(1);
        let inner_rows = 1..h.saturating_sub(1);

        let top = inner_columns.clone().map(|x| Point::new(x, 0));
        // A single row or column is scanned once
        let bottom = inner_columns
            .filter(|_| h > 1)
            .map(|x| Point::new(x, h - 1));
        let left = inner_rows.clone().map(|y| Point::new(0, y));
        let right = inner_rows.filter(|_| w > 1).map(|y| Point::new(w - 1, y));

        let mut endpoints = Endpoints::default();
        for point in top.chain(bottom).chain(left).chain(right) {
            if self.is_walkable(point) {
                endpoints.record(point);
            }
        }
        endpoints
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    pub fn start(&self) -> Option<Point> {
        self.endpoints.start
    }

    pub fn end(&self) -> Option<Point> {
        self.endpoints.end
    }

    /// Whether `point` is a floor cell; `false` outside the grid
    pub fn is_walkable(&self, point: Point) -> bool {
        self.contains(point) && self.walkable[self.index(point)]
    }

    fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    fn index(&self, point: Point) -> usize {
        point.x + self.width * point.y
    }

    fn check_bounds(&self, point: Point) -> Result<(), PathError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Find path between the maze openings
    pub fn solve(&self) -> Result<Option<Vec<Point>>, PathError> {
        self.solve_observed(&mut NoObserver)
    }

    /// [Self::solve], reporting search progress to `observer`
    pub fn solve_observed(
        &self,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Vec<Point>>, PathError> {
        let start = self.endpoints.start.ok_or(PathError::MissingStart)?;
        let end = self.endpoints.end.ok_or(PathError::MissingEnd)?;
        self.find_path_observed(start, end, observer)
    }

    /// Find the shortest walkable path from `start` to `end`
    ///
    /// The returned waypoints begin at the cell after `start` and finish at
    /// `end`. When `start == end` the path is just `[start]`.
    ///
    /// Returns `Ok(None)` if `end` cannot be reached, error if either point
    /// is outside the grid.
    pub fn find_path(&self, start: Point, end: Point) -> Result<Option<Vec<Point>>, PathError> {
        self.find_path_observed(start, end, &mut NoObserver)
    }

    /// [Self::find_path], reporting search progress to `observer`
    pub fn find_path_observed(
        &self,
        start: Point,
        end: Point,
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Vec<Point>>, PathError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        observer.search_started(start, end);

        let mut graph = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Point::new(x, y);
                let walkable = self.walkable[self.index(point)];
                observer.node_initialized(point, walkable);
                let mut node = Node {
                    point,
                    walkable,
                    g_cost: u32::MAX,
                    h_cost: 0,
                    f_cost: 0,
                    previous: None,
                };
                node.calculate_f_cost();
                graph.push(node);
            }
        }

        let start_index = self.index(start);
        let start_node = &mut graph[start_index];
        start_node.g_cost = 0;
        start_node.h_cost = heuristic(start, end);
        start_node.calculate_f_cost();
        observer.costs_updated(start, start_node.costs());

        let mut open = vec![start_index];
        let mut in_open = vec![false; graph.len()];
        let mut closed = vec![false; graph.len()];
        in_open[start_index] = true;

        while !open.is_empty() {
            let (position, current) = Self::cheapest(&open, &graph);
            let current_point = graph[current].point;
            if current_point == end {
                return Ok(Some(Self::calculate_path(&graph, current)));
            }

            open.remove(position);
            in_open[current] = false;
            closed[current] = true;
            trace!("expanding {current_point}, costs {:?}", graph[current].costs());

            for neighbor_point in self.neighbors(current_point) {
                let neighbor = self.index(neighbor_point);
                if closed[neighbor] {
                    continue;
                }
                if !graph[neighbor].walkable {
                    closed[neighbor] = true;
                    continue;
                }

                let cost = graph[current].g_cost + heuristic(current_point, neighbor_point);
                if cost < graph[neighbor].g_cost {
                    let node = &mut graph[neighbor];
                    node.previous = Some(current);
                    node.g_cost = cost;
                    node.h_cost = heuristic(neighbor_point, end);
                    node.calculate_f_cost();
                    observer.costs_updated(neighbor_point, node.costs());

                    if !in_open[neighbor] {
                        open.push(neighbor);
                        in_open[neighbor] = true;
                    }
                }
            }
        }

        warn!("no more nodes to check, {end} is not reachable from {start}");
        Ok(None)
    }

    /// First node with the lowest f cost, in open set insertion order.
    ///
    /// Returns (position in `open`, arena index).
    fn cheapest(open: &[usize], graph: &[Node]) -> (usize, usize) {
        let mut best = 0;
        for (i, &index) in open.iter().enumerate().skip(1) {
            if graph[index].f_cost < graph[open[best]].f_cost {
                best = i;
            }
        }
        (best, open[best])
    }

    /// Axis-aligned neighbors in order left, right, down, up
    fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
        let left = point.x.checked_sub(1).map(|x| Point::new(x, point.y));
        let right = (point.x + 1 < self.width).then(|| Point::new(point.x + 1, point.y));
        let down = (point.y + 1 < self.height).then(|| Point::new(point.x, point.y + 1));
        let up = point.y.checked_sub(1).map(|y| Point::new(point.x, y));
        [left, right, down, up].into_iter().flatten()
    }

    /// Walk `previous` links back from the goal, then drop the start cell
    /// unless it is the only one.
    fn calculate_path(graph: &[Node], goal: usize) -> Vec<Point> {
        let mut path = vec![graph[goal].point];
        let mut current = goal;
        while let Some(previous) = graph[current].previous {
            path.push(graph[previous].point);
            current = previous;
        }
        path.reverse();
        if path.len() > 1 {
            path.remove(0);
        }
        path
    }
}
