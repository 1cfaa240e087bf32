//! Square-spiral addressing for the tower chain.
//!
//! Towers are laid out on an outward square spiral. Each tower's sequence
//! number maps to the cardinal direction in which the *next* tower is
//! attached; directions cycle Up→Left→Down→Right with run lengths
//! 1,1,2,2,3,3,… (each length used for two consecutive runs).

use serde::{Deserialize, Serialize};

/// Cardinal direction of a spiral step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Face reserved for the outgoing gangway of a tower stepping this way.
    pub fn forward_face(self) -> usize {
        match self {
            Direction::Up => 2,
            Direction::Left => 3,
            Direction::Down => 0,
            Direction::Right => 1,
        }
    }

    /// Face reserved for the incoming gangway from a predecessor that
    /// stepped this way.
    pub fn backward_face(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }
}

const CYCLE: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

/// Direction of the spiral step for tower `sequence` (1-based).
///
/// Walks the run-length sequence; sequence numbers are small (one per
/// tower), so the walk is cheap and keeps the enumeration obvious.
pub fn spiral_direction(sequence: u32) -> Direction {
    debug_assert!(sequence >= 1, "tower sequence numbers start at 1");
    let mut run_len = 1u32;
    let mut run_start = 1u32;
    let mut dir = 0usize;
    loop {
        // each run length is used for two consecutive runs
        for _ in 0..2 {
            if sequence < run_start + run_len {
                return CYCLE[dir];
            }
            run_start += run_len;
            dir = (dir + 1) % 4;
        }
        run_len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn first_eight_steps() {
        let expected = [Up, Left, Down, Down, Right, Right, Up, Up];
        for (i, &dir) in expected.iter().enumerate() {
            assert_eq!(spiral_direction(i as u32 + 1), dir, "n = {}", i + 1);
        }
    }

    #[test]
    fn run_lengths_keep_growing() {
        // after the 2×2 runs come the 3-runs: 9,10 Left then 11..13 Down
        assert_eq!(spiral_direction(9), Left);
        assert_eq!(spiral_direction(10), Left);
        assert_eq!(spiral_direction(11), Down);
        assert_eq!(spiral_direction(12), Down);
        assert_eq!(spiral_direction(13), Down);
        assert_eq!(spiral_direction(14), Right);
    }

    #[test]
    fn forward_and_backward_faces_differ_per_direction() {
        for dir in [Up, Left, Down, Right] {
            assert_ne!(dir.forward_face(), dir.backward_face());
        }
    }
}
