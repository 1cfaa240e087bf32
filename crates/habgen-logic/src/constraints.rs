//! Cell legality — the rules a placement must never violate.
//!
//! Only horizontal neighbors are checked (faces `(f ± 1) mod 4` on the
//! same level); vertical and diagonal neighbors carry no prohibitions.
//! Prohibitions are directional: only pairs with the candidate module as
//! the first element matter here.

use crate::catalog::{Catalog, ModuleCode};
use crate::tower::{Tower, FACES};

/// May `code` legally occupy `(level, face)` of this tower right now?
pub fn is_legal(
    catalog: &Catalog,
    tower: &Tower,
    level: usize,
    face: usize,
    code: ModuleCode,
) -> bool {
    if tower.module_at(level, face).is_some() {
        return false;
    }

    let left = tower.module_at(level, (face + FACES - 1) % FACES);
    if let Some(neighbor) = left {
        if catalog.is_prohibited(code, neighbor) {
            return false;
        }
    }
    let right = tower.module_at(level, (face + 1) % FACES);
    if let Some(neighbor) = right {
        if catalog.is_prohibited(code, neighbor) {
            return false;
        }
    }

    // sanitary bays above the bottom level need plumbing continuity: a
    // sanitary module directly beneath
    if catalog.is_sanitary(code) && level > 0 {
        match tower.module_at(level - 1, face) {
            Some(below) if catalog.is_sanitary(below) => {}
            _ => return false,
        }
    }

    true
}
