//! Greedy multi-tower placement.
//!
//! The placer works through the demand one unit at a time: restrictive
//! types first, then everything else, each tranche in its fixed catalog
//! order. For each unit it takes the *first* tower (creation order) that
//! has any legal cell and commits to the best-scoring cell inside that
//! tower — scores are never compared across towers. When no existing tower
//! accepts the module, a fresh tower is created. There is no backtracking:
//! a committed module never moves.
//!
//! All mutable state (tower list, sequence counter) lives in a run-scoped
//! [`LayoutRun`], created and dropped inside [`place_demand`].

use log::{debug, info};

use crate::catalog::{Catalog, ModuleCode};
use crate::constraints::is_legal;
use crate::demand::Demand;
use crate::error::{LayoutError, Result};
use crate::finalize::finalize;
use crate::scoring::score_cell;
use crate::tower::{Tower, FACES, LEVELS};

/// A scored cell choice inside one tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChoice {
    pub level: usize,
    pub face: usize,
    pub score: i32,
}

/// Best legal cell for `code` in this tower, or `None` if no cell is legal.
///
/// Cells are scanned level 0→3, face 0→3; the first cell achieving the
/// strict running maximum wins, so ties resolve to the lowest level, then
/// the lowest face. A lone legal cell is returned even when its score is
/// negative.
pub fn best_cell(catalog: &Catalog, tower: &Tower, code: ModuleCode) -> Option<CellChoice> {
    let mut best: Option<CellChoice> = None;
    for level in 0..LEVELS {
        for face in 0..FACES {
            if !is_legal(catalog, tower, level, face, code) {
                continue;
            }
            let score = score_cell(catalog, tower, level, face, code);
            if best.map_or(true, |b| score > b.score) {
                best = Some(CellChoice { level, face, score });
            }
        }
    }
    best
}

/// Order the demand for placement: restrictive types first, then the
/// standard tranche, both in fixed catalog order; zero quantities skipped.
pub fn order_demand(catalog: &Catalog, demand: &Demand) -> Vec<(ModuleCode, u32)> {
    catalog
        .restrictive
        .iter()
        .chain(catalog.standard.iter())
        .filter_map(|&code| {
            let quantity = demand.quantity(code);
            (quantity > 0).then_some((code, quantity))
        })
        .collect()
}

/// Mutable state of one placement run.
struct LayoutRun {
    next_sequence: u32,
    towers: Vec<Tower>,
}

impl LayoutRun {
    fn new() -> Self {
        Self {
            next_sequence: 0,
            towers: Vec::new(),
        }
    }

    fn new_tower(&mut self, catalog: &Catalog) -> Tower {
        self.next_sequence += 1;
        debug!("creating tower {}", self.next_sequence);
        Tower::with_gangways(self.next_sequence, catalog.gangway)
    }

    /// Place one unit of `code`. Returns false only when even a brand-new
    /// tower rejects the module — a catalog defect.
    fn place_one(&mut self, catalog: &Catalog, code: ModuleCode) -> Result<bool> {
        for tower in &mut self.towers {
            if let Some(cell) = best_cell(catalog, tower, code) {
                commit(catalog, tower, cell, code)?;
                return Ok(true);
            }
        }

        let mut tower = self.new_tower(catalog);
        match best_cell(catalog, &tower, code) {
            Some(cell) => {
                commit(catalog, &mut tower, cell, code)?;
                self.towers.push(tower);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Commit `code` to a chosen cell. Legality is re-checked immediately
/// before the write so a stale choice can never corrupt the grid.
fn commit(catalog: &Catalog, tower: &mut Tower, cell: CellChoice, code: ModuleCode) -> Result<()> {
    if !is_legal(catalog, tower, cell.level, cell.face, code) {
        return Err(LayoutError::IllegalWrite {
            sequence: tower.sequence,
            level: cell.level,
            face: cell.face,
        });
    }
    tower.set_module(cell.level, cell.face, code)?;
    debug!(
        "placed {} in tower {} level {} face {} (score {})",
        code, tower.sequence, cell.level, cell.face, cell.score
    );
    Ok(())
}

/// Place the whole demand and finalize the resulting tower chain.
///
/// Deterministic: identical demand and catalog produce identical tower
/// lists. On a placement failure the run aborts immediately and the error
/// carries the failing module, its remaining quantity, and the partial
/// tower list.
pub fn place_demand(catalog: &Catalog, demand: &Demand) -> Result<Vec<Tower>> {
    demand.validate(catalog)?;

    let ordered = order_demand(catalog, demand);
    info!(
        "placing {} unit(s) across {} module type(s)",
        demand.total_units(),
        ordered.len()
    );

    let mut run = LayoutRun::new();
    for (code, quantity) in ordered {
        for placed in 0..quantity {
            if !run.place_one(catalog, code)? {
                return Err(LayoutError::PlacementExhausted {
                    module: code,
                    remaining: quantity - placed,
                    towers: run.towers,
                });
            }
        }
    }

    let mut towers = run.towers;
    finalize(catalog, &mut towers);
    info!("placement complete: {} tower(s)", towers.len());
    Ok(towers)
}
