use smallvec::SmallVec;

use crate::cells::Cell;
use crate::maze::Maze;
use crate::utils;
use crate::utils::FnvHashMap;

/// Steps along open passages from an origin cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    origin: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill from `origin`. None if `origin` is outside the maze.
    pub fn new(maze: &Maze, origin: Cell) -> Option<Distances> {
        if !maze.dimensions().is_valid_cell(origin) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(origin, 0);

        // Passages carry no weights, so the first time a cell is reached is also by its
        // shortest route: the map doubles as the visited set.
        let mut frontier = vec![origin];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell in &frontier {
                let distance_to_cell = distances[cell];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links = maze.links(*cell).unwrap_or_default();
                for linked in links.iter() {
                    if !distances.contains_key(linked) {
                        distances.insert(*linked, distance_to_cell + 1);
                        new_frontier.push(*linked);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            origin,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None when `cell` cannot be reached from the origin.
    #[inline(always)]
    pub fn distance_to(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance, in row-major order.
    pub fn furthest_cells(&self) -> SmallVec<[Cell; 8]> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, &distance)| distance == self.max_distance)
            .map(|(cell, _)| *cell)
            .collect::<SmallVec<[Cell; 8]>>();
        furthest.sort();
        furthest
    }

    /// The first of `furthest_cells`. The origin itself when nothing else is reachable.
    pub fn furthest_cell(&self) -> Cell {
        self.distances
            .iter()
            .filter(|&(_, &distance)| distance == self.max_distance)
            .map(|(cell, _)| *cell)
            .min()
            .unwrap_or(self.origin)
    }
}

/// The route from the distances' origin to `to`, both ends included.
/// None if `to` is unreachable.
pub fn shortest_path(maze: &Maze, distances: &Distances, to: Cell) -> Option<Vec<Cell>> {
    let mut current = to;
    let mut current_distance = distances.distance_to(to)?;
    let mut path = vec![to];

    // Step back along any link that is one closer to the origin until the origin is reached.
    while current_distance > 0 {
        let links = maze.links(current)?;
        let previous = links.iter()
            .cloned()
            .find(|linked| distances.distance_to(*linked) == Some(current_distance - 1))?;
        path.push(previous);
        current = previous;
        current_distance -= 1;
    }

    path.reverse();
    Some(path)
}

/// Works only as long as we are looking at a perfect maze, otherwise you get back some
/// arbitrary long path.
pub fn longest_path(maze: &Maze) -> Option<Vec<Cell>> {
    // The furthest cell from anywhere is one end of the longest path.
    let first_distances = Distances::new(maze, maze.start())?;
    let path_start = first_distances.furthest_cell();

    let distances_from_start = Distances::new(maze, path_start)?;
    let path_end = distances_from_start.furthest_cell();

    shortest_path(maze, &distances_from_start, path_end)
}
