//! Heuristic cell scoring.
//!
//! Scores a *legal* cell for a candidate module. Higher is better; the
//! result can go negative when lower levels are still incomplete. Like the
//! legality rules, only horizontal neighbors participate.

use crate::catalog::{Catalog, ModuleCode};
use crate::tower::{Tower, FACES};

/// Bonus per satisfied priority direction with a present neighbor.
pub const PRIORITY_BONUS: i32 = 10;
/// Bonus for landing on one of the module's preferred levels.
pub const PREFERRED_LEVEL_BONUS: i32 = 15;
/// Penalty per lower level that still has an empty cell — steers the
/// placer toward bottom-up completion.
pub const INCOMPLETE_LEVEL_PENALTY: i32 = 5;
/// Bonus per empty horizontal neighbor, keeping future options open.
pub const OPEN_NEIGHBOR_BONUS: i32 = 1;

/// Desirability of placing `code` at `(level, face)`.
///
/// Priority pairs are checked in both directions, so a single neighbor can
/// contribute 0, 10, or 20 points.
pub fn score_cell(
    catalog: &Catalog,
    tower: &Tower,
    level: usize,
    face: usize,
    code: ModuleCode,
) -> i32 {
    let mut score = 0;

    let left = (face + FACES - 1) % FACES;
    let right = (face + 1) % FACES;
    for neighbor_face in [left, right] {
        match tower.module_at(level, neighbor_face) {
            Some(neighbor) => {
                if catalog.is_priority(code, neighbor) {
                    score += PRIORITY_BONUS;
                }
                if catalog.is_priority(neighbor, code) {
                    score += PRIORITY_BONUS;
                }
            }
            None => score += OPEN_NEIGHBOR_BONUS,
        }
    }

    if catalog.preferred_levels(code).contains(&level) {
        score += PREFERRED_LEVEL_BONUS;
    }

    for lower in 0..level {
        if tower.level_has_gap(lower) {
            score -= INCOMPLETE_LEVEL_PENALTY;
        }
    }

    score
}
