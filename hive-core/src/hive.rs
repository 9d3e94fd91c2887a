//! Hive connectivity: contour discovery, contour tracing and the one-hive rule

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::game::Board;
use crate::hex::Hex;

/// All empty cells adjacent to the hive.
///
/// Tiles at `exclude` are not used as sources, which simulates lifting them
/// off the board. They still count as occupied.
pub fn find_contour(board: &Board, exclude: &[Hex]) -> FxHashSet<Hex> {
    let mut contour = FxHashSet::default();
    for &coordinate in board.keys() {
        if exclude.contains(&coordinate) {
            continue;
        }
        contour.extend(coordinate.neighbours());
    }
    contour.retain(|c| !board.contains_key(c));
    contour
}

/// Contour cells exactly `steps` slides away from `origin`.
///
/// Breadth-first over the contour of the hive with `origin` lifted, starting
/// from `origin` itself. Every cell is expanded at most once, so the result is
/// the set of cells whose shortest traced distance equals `steps`.
pub fn trace_contour(board: &Board, origin: Hex, steps: usize) -> FxHashSet<Hex> {
    let contour = find_contour(board, &[origin]);
    let mut visited = FxHashSet::default();
    visited.insert(origin);

    let mut reached = FxHashSet::default();
    let mut frontier = VecDeque::new();
    frontier.push_back((origin, 0usize));

    while let Some((c, n)) = frontier.pop_front() {
        if n == steps {
            if c != origin {
                reached.insert(c);
            }
            continue;
        }
        for neighbour in c.neighbours() {
            if contour.contains(&neighbour) && visited.insert(neighbour) {
                frontier.push_back((neighbour, n + 1));
            }
        }
    }

    reached
}

/// Whether `coordinates` form a single connected group
pub fn one_hive(coordinates: &FxHashSet<Hex>) -> bool {
    let mut unvisited = coordinates.clone();
    let start = match coordinates.iter().next() {
        Some(&c) => c,
        None => return true,
    };
    unvisited.remove(&start);

    let mut todo = vec![start];
    while let Some(node) = todo.pop() {
        for neighbour in node.neighbours() {
            if unvisited.remove(&neighbour) {
                todo.push(neighbour);
            }
        }
    }

    unvisited.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Piece, Player};
    use crate::hex::DIRECTIONS;
    use crate::pieces::TileKind;

    fn line(len: i32) -> Vec<Hex> {
        (0..len).map(|i| Hex::new(i, -i, 0)).collect()
    }

    fn board_at(cells: &[Hex]) -> Board {
        cells
            .iter()
            .map(|&c| (c, Piece { kind: TileKind::Ant, owner: Player::White }))
            .collect()
    }

    #[test]
    fn test_contour_of_single_tile() {
        let board = board_at(&[Hex::ORIGIN]);
        let contour = find_contour(&board, &[]);
        assert_eq!(contour.len(), 6);
        assert!(!contour.contains(&Hex::ORIGIN));
    }

    #[test]
    fn test_contour_excludes_lifted_tile() {
        let cells = line(2);
        let board = board_at(&cells);
        let contour = find_contour(&board, &[cells[1]]);
        // Only the origin tile is a source; cells[1] stays occupied.
        assert_eq!(contour.len(), 5);
        assert!(!contour.contains(&cells[1]));
    }

    #[test]
    fn test_trace_contour_one_step() {
        let cells = line(2);
        let board = board_at(&cells);
        let reached = trace_contour(&board, cells[1], 1);
        assert_eq!(reached.len(), 2);
        for c in &reached {
            assert_eq!(c.distance_to(cells[0]), 1);
            assert_eq!(c.distance_to(cells[1]), 1);
        }
    }

    #[test]
    fn test_trace_contour_three_steps_around_single_tile() {
        // Around one tile the contour is a ring of six cells, one of them taken
        // by the mover. Three slides either way meet at the opposite cell.
        let anchor = Hex::ORIGIN;
        let mover = anchor + DIRECTIONS[0];
        let board = board_at(&[anchor, mover]);

        let reached = trace_contour(&board, mover, 3);
        let expected: FxHashSet<Hex> = [anchor + DIRECTIONS[3]].into_iter().collect();
        assert_eq!(reached, expected);

        let two: FxHashSet<Hex> = [anchor + DIRECTIONS[2], anchor + DIRECTIONS[4]].into_iter().collect();
        assert_eq!(trace_contour(&board, mover, 2), two);
    }

    #[test]
    fn test_trace_contour_zero_steps() {
        let board = board_at(&line(2));
        assert!(trace_contour(&board, Hex::ORIGIN, 0).is_empty());
    }

    #[test]
    fn test_one_hive_connected_line() {
        let cells: FxHashSet<Hex> = line(4).into_iter().collect();
        assert!(one_hive(&cells));
    }

    #[test]
    fn test_one_hive_split() {
        let mut cells: FxHashSet<Hex> = line(4).into_iter().collect();
        cells.remove(&Hex::new(1, -1, 0));
        assert!(!one_hive(&cells));
    }

    #[test]
    fn test_one_hive_trivial_sets() {
        assert!(one_hive(&FxHashSet::default()));
        let single: FxHashSet<Hex> = [Hex::ORIGIN].into_iter().collect();
        assert!(one_hive(&single));
    }
}
