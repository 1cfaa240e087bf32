//! Post-placement cleanup of a finished tower chain.
//!
//! Two steps, in this order: the last tower's outward gangway was reserved
//! for a successor that never came, so its cell is released (and the
//! tower's `direction_out` cleared); then every cell still empty anywhere
//! is closed with the filler type. Because the release happens before the
//! sweep, the released cell itself ends up holding filler. After this pass
//! the chain is terminal — nothing mutates it again.

use log::debug;

use crate::catalog::Catalog;
use crate::tower::{Tower, FACES, GANGWAY_LEVEL, LEVELS};

/// Finalize the chain in place.
pub fn finalize(catalog: &Catalog, towers: &mut [Tower]) {
    let Some(last) = towers.last_mut() else {
        return;
    };
    if let Some(direction) = last.direction_out.take() {
        last.clear_module(GANGWAY_LEVEL, direction.forward_face());
        debug!("released outward gangway on tower {}", last.sequence);
    }

    let mut filled = 0;
    for tower in towers.iter_mut() {
        for level in 0..LEVELS {
            for face in 0..FACES {
                if tower.fill_if_empty(level, face, catalog.filler) {
                    filled += 1;
                }
            }
        }
    }
    debug!("closed {filled} empty cell(s) with {}", catalog.filler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::codes;

    #[test]
    fn empty_chain_is_a_no_op() {
        let catalog = Catalog::standard();
        let mut towers: Vec<Tower> = Vec::new();
        finalize(&catalog, &mut towers);
        assert!(towers.is_empty());
    }

    #[test]
    fn last_tower_outward_gangway_becomes_filler() {
        let catalog = Catalog::standard();
        let mut towers = vec![
            Tower::with_gangways(1, catalog.gangway),
            Tower::with_gangways(2, catalog.gangway),
        ];
        finalize(&catalog, &mut towers);

        // tower 1 keeps its outward gangway (Up → face 2)
        assert!(towers[0].direction_out.is_some());
        assert_eq!(
            towers[0].module_at(GANGWAY_LEVEL, 2),
            Some(catalog.gangway)
        );

        // tower 2's outward reservation (Left → face 3) was released and
        // then closed by the sweep, so it holds filler now
        assert_eq!(towers[1].direction_out, None);
        assert_eq!(
            towers[1].module_at(GANGWAY_LEVEL, 3),
            Some(catalog.filler)
        );
        // its incoming gangway (from Up → face 0) survives
        assert_eq!(
            towers[1].module_at(GANGWAY_LEVEL, 0),
            Some(catalog.gangway)
        );
    }

    #[test]
    fn every_cell_is_occupied_afterwards() {
        let catalog = Catalog::standard();
        let mut towers = vec![
            Tower::with_gangways(1, catalog.gangway),
            Tower::with_gangways(2, catalog.gangway),
            Tower::with_gangways(3, catalog.gangway),
        ];
        towers[0].set_module(0, 0, codes::LAB).unwrap();
        finalize(&catalog, &mut towers);
        for tower in &towers {
            assert_eq!(tower.empty_cells(), 0, "tower {}", tower.sequence);
        }
        // committed modules survive the sweep
        assert_eq!(towers[0].module_at(0, 0), Some(codes::LAB));
    }
}
