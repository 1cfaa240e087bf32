//! Error taxonomy for the layout pipeline.

use thiserror::Error;

use crate::catalog::ModuleCode;
use crate::tower::Tower;

/// Unified result type for the habgen logic crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the layout pipeline.
///
/// Configuration problems (`UnknownModule`, `StructuralModule`,
/// `InvalidQuantity`) are rejected before placement starts.
/// `PlacementExhausted` aborts the run and carries the partial tower list —
/// no requested unit is ever silently dropped or substituted.
/// `IllegalWrite` guards the single-assignment grid invariant and should be
/// unreachable: every commit re-checks legality immediately before writing.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("demand references unknown module code `{0}`")]
    UnknownModule(String),

    #[error("module {0} is structural and cannot be placed on the grid")]
    StructuralModule(ModuleCode),

    #[error("invalid quantity {quantity} for module `{module}`")]
    InvalidQuantity { module: String, quantity: i64 },

    #[error("no legal cell for module {module}; {remaining} unit(s) left unplaced")]
    PlacementExhausted {
        module: ModuleCode,
        remaining: u32,
        /// Towers committed before the abort.
        towers: Vec<Tower>,
    },

    #[error("illegal write to tower {sequence} cell (level {level}, face {face})")]
    IllegalWrite {
        sequence: u32,
        level: usize,
        face: usize,
    },
}
