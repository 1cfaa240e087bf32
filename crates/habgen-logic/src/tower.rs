//! The tower entity — a 4-level, 4-face ring stack of habitat modules.
//!
//! A tower is a vertical stack of 4 levels; each level is a ring of 4
//! faces. Face `f` is horizontally adjacent to faces `(f ± 1) mod 4` only —
//! opposite faces never touch. Cells are single-assignment: once a module
//! is committed it is never overwritten.
//!
//! ```text
//! level 3:  [face 0] [face 1] [face 2] [face 3]   ← top
//! level 2:  [face 0] [face 1] [face 2] [face 3]
//! level 1:  [face 0] [face 1] [face 2] [face 3]   ← gangway level
//! level 0:  [face 0] [face 1] [face 2] [face 3]   ← bottom
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::ModuleCode;
use crate::error::LayoutError;
use crate::spiral::{spiral_direction, Direction};

/// Levels per tower, bottom (0) to top.
pub const LEVELS: usize = 4;
/// Faces per level, cyclic.
pub const FACES: usize = 4;
/// The level holding the inter-tower gangway cells.
pub const GANGWAY_LEVEL: usize = 1;

/// One ring-stack in the tower chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    /// Creation-order sequence number, starting at 1.
    pub sequence: u32,
    /// Spiral direction of the predecessor's step into this tower.
    /// `None` for tower 1.
    pub direction_in: Option<Direction>,
    /// Spiral direction of this tower's own step. Cleared on the last
    /// tower when the layout is finalized.
    pub direction_out: Option<Direction>,
    grid: [[Option<ModuleCode>; FACES]; LEVELS],
}

impl Tower {
    /// Create tower `sequence` with its gangway cells pre-reserved.
    ///
    /// The outgoing gangway sits at the forward face of this tower's own
    /// spiral direction; the incoming one (towers 2+) at the backward face
    /// of the predecessor's direction. The two faces never coincide.
    pub fn with_gangways(sequence: u32, gangway: ModuleCode) -> Self {
        let direction_out = spiral_direction(sequence);
        let direction_in = (sequence > 1).then(|| spiral_direction(sequence - 1));

        let mut grid = [[None; FACES]; LEVELS];
        grid[GANGWAY_LEVEL][direction_out.forward_face()] = Some(gangway);
        if let Some(incoming) = direction_in {
            grid[GANGWAY_LEVEL][incoming.backward_face()] = Some(gangway);
        }

        Self {
            sequence,
            direction_in,
            direction_out: Some(direction_out),
            grid,
        }
    }

    /// Module occupying `(level, face)`, if any.
    pub fn module_at(&self, level: usize, face: usize) -> Option<ModuleCode> {
        self.grid[level][face]
    }

    /// Commit a module to an empty cell. Writing into an occupied cell is
    /// an invariant violation and leaves the grid untouched.
    pub(crate) fn set_module(
        &mut self,
        level: usize,
        face: usize,
        code: ModuleCode,
    ) -> Result<(), LayoutError> {
        if self.grid[level][face].is_some() {
            return Err(LayoutError::IllegalWrite {
                sequence: self.sequence,
                level,
                face,
            });
        }
        self.grid[level][face] = Some(code);
        Ok(())
    }

    /// Fill the cell only if it is still empty; true if a write happened.
    pub(crate) fn fill_if_empty(&mut self, level: usize, face: usize, code: ModuleCode) -> bool {
        if self.grid[level][face].is_none() {
            self.grid[level][face] = Some(code);
            true
        } else {
            false
        }
    }

    /// Release a cell back to empty. Only the finalize pass does this, for
    /// the last tower's dangling outward gangway.
    pub(crate) fn clear_module(&mut self, level: usize, face: usize) {
        self.grid[level][face] = None;
    }

    /// True if `level` still has at least one empty cell.
    pub fn level_has_gap(&self, level: usize) -> bool {
        self.grid[level].iter().any(Option::is_none)
    }

    /// Number of empty cells across the whole grid.
    pub fn empty_cells(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Iterate every cell as `(level, face, contents)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<ModuleCode>)> + '_ {
        self.grid.iter().enumerate().flat_map(|(level, faces)| {
            faces
                .iter()
                .enumerate()
                .map(move |(face, cell)| (level, face, *cell))
        })
    }
}
