//! Scene export — world-space transforms for a finalized tower chain.
//!
//! Turns the abstract grid into renderable module instances. Each tower
//! contributes its structural stack (base platform, four transit-core
//! segments, power-core roof, plus an access core on the first few towers)
//! and one wall instance per occupied grid cell, rotated to its face.
//! Non-last towers also emit the free-standing gangway bridging to their
//! successor. Positions chain from tower to tower along the incoming
//! spiral direction.
//!
//! The exporter is deterministic; timestamping a generated scene is left
//! to whatever service wraps the pipeline.

use serde::{Deserialize, Serialize};

use crate::catalog::{codes, Catalog, ModuleCode};
use crate::inventory::access_core_count;
use crate::mission::MissionParams;
use crate::spiral::Direction;
use crate::tower::{Tower, GANGWAY_LEVEL, LEVELS};

/// Module stack height per level, meters.
pub const MODULE_HEIGHT: f64 = 3.1;
/// Footprint width of a standard wall module, meters.
pub const MODULE_WIDTH: f64 = 3.5;
/// Footprint width of the central hub column, meters.
pub const HUB_WIDTH: f64 = 3.25;
/// Footprint width of a gangway module, meters.
pub const GANGWAY_WIDTH: f64 = 3.9;

/// Estimated cost per placed module, in credits.
const COST_PER_MODULE: u64 = 3500;

const YAW_0: [f64; 3] = [0.0, 0.0, 0.0];
const YAW_90: [f64; 3] = [0.0, std::f64::consts::FRAC_PI_2, 0.0];
const YAW_180: [f64; 3] = [0.0, std::f64::consts::PI, 0.0];
const YAW_270: [f64; 3] = [0.0, 3.0 * std::f64::consts::FRAC_PI_2, 0.0];

/// One renderable module instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    /// Asset id from the catalog.
    pub id: String,
    pub position: [f64; 3],
    /// Euler angles in radians.
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

/// Scene-level bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub algorithm_version: String,
    pub estimated_cost: u64,
    pub currency: String,
    pub total_towers: u32,
}

/// A complete exported scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub parameters: MissionParams,
    pub total_modules: usize,
    pub modules: Vec<ModuleInstance>,
    pub metadata: SceneMetadata,
}

fn asset_id(catalog: &Catalog, code: ModuleCode) -> String {
    catalog
        .info(code)
        .map(|info| info.asset.to_string())
        .unwrap_or_else(|| format!("unknown_module_{code}"))
}

fn instance(catalog: &Catalog, code: ModuleCode, position: [f64; 3], rotation: [f64; 3]) -> ModuleInstance {
    ModuleInstance {
        id: asset_id(catalog, code),
        position,
        rotation,
        scale: [1.0, 1.0, 1.0],
    }
}

/// Offset from one tower base to the next along the spiral.
fn chain_step(direction: Direction) -> [f64; 3] {
    let step = HUB_WIDTH + 3.0 * GANGWAY_WIDTH;
    match direction {
        Direction::Up => [0.0, 0.0, step],
        Direction::Left => [step, 0.0, 0.0],
        Direction::Down => [0.0, 0.0, -step],
        Direction::Right => [-step, 0.0, 0.0],
    }
}

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Export the world-space scene for a finalized tower chain.
pub fn export_scene(catalog: &Catalog, towers: &[Tower], params: &MissionParams) -> Scene {
    let mut modules = Vec::new();
    let access_cores = access_core_count(params.passengers, params.duration_days);
    let mut base = [0.0, 0.0, 0.0];

    for (index, tower) in towers.iter().enumerate() {
        if let Some(incoming) = tower.direction_in {
            base = add(base, chain_step(incoming));
        }
        let is_last = index == towers.len() - 1;

        // structural stack: base platform, transit cores, roof
        modules.push(instance(catalog, codes::BASE, base, YAW_0));
        if (index as u32) < access_cores {
            modules.push(instance(catalog, codes::ACCESS_CORE, base, YAW_0));
        }
        for level in 0..LEVELS {
            let position = add(base, [0.0, (level as f64 + 1.0) * MODULE_HEIGHT, 0.0]);
            modules.push(instance(catalog, codes::TRANS_CORE, position, YAW_0));
        }
        let roof = add(base, [0.0, (LEVELS as f64 + 1.0) * MODULE_HEIGHT, 0.0]);
        modules.push(instance(catalog, codes::POWER_CORE, roof, YAW_0));

        // wall modules, one per occupied cell, rotated to their face
        for (level, face, cell) in tower.cells() {
            let Some(code) = cell else { continue };
            let center = add(base, [0.0, (level as f64 + 1.0) * MODULE_HEIGHT, 0.0]);
            // gangway cells sit tighter against the hub
            let special = if code == catalog.gangway {
                HUB_WIDTH
            } else {
                MODULE_WIDTH
            };
            let offset = special / 2.0 + MODULE_WIDTH / 2.0;
            let (position, rotation) = match face {
                0 => (add(center, [0.0, 0.0, -offset]), YAW_0),
                1 => (add(center, [-offset, 0.0, 0.0]), YAW_90),
                2 => (add(center, [0.0, 0.0, offset]), YAW_180),
                _ => (add(center, [offset, 0.0, 0.0]), YAW_270),
            };
            modules.push(instance(catalog, code, position, rotation));
        }

        // the bridge to the next tower
        if !is_last {
            if let Some(outgoing) = tower.direction_out {
                let center = add(
                    base,
                    [0.0, (GANGWAY_LEVEL as f64 + 1.0) * MODULE_HEIGHT, 0.0],
                );
                let reach = 1.5 * GANGWAY_WIDTH + 0.5 * MODULE_WIDTH;
                let (position, rotation) = match outgoing {
                    Direction::Up => (add(center, [0.0, 0.0, reach]), YAW_0),
                    Direction::Left => (add(center, [reach, 0.0, 0.0]), YAW_270),
                    Direction::Down => (add(center, [0.0, 0.0, -reach]), YAW_180),
                    Direction::Right => (add(center, [-reach, 0.0, 0.0]), YAW_90),
                };
                modules.push(instance(catalog, catalog.gangway, position, rotation));
            }
        }
    }

    let total_modules = modules.len();
    Scene {
        parameters: *params,
        total_modules,
        modules,
        metadata: SceneMetadata {
            algorithm_version: format!("v{}", env!("CARGO_PKG_VERSION")),
            estimated_cost: total_modules as u64 * COST_PER_MODULE,
            currency: "credits".to_string(),
            total_towers: towers.len() as u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::Demand;
    use crate::mission::Terrain;
    use crate::placer::place_demand;

    fn params(passengers: u32, duration_days: u32) -> MissionParams {
        MissionParams {
            passengers,
            duration_days,
            terrain: Terrain::Moon,
            scientific: false,
        }
    }

    fn single_tower_chain(catalog: &Catalog) -> Vec<Tower> {
        let mut demand = Demand::new();
        demand.set(codes::LAB, 1);
        place_demand(catalog, &demand).unwrap()
    }

    #[test]
    fn single_tower_module_count() {
        let catalog = Catalog::standard();
        let towers = single_tower_chain(&catalog);
        assert_eq!(towers.len(), 1);
        let scene = export_scene(&catalog, &towers, &params(4, 100));

        // base + access core + 4 transit cores + roof + 16 walls, no bridge
        assert_eq!(scene.total_modules, 1 + 1 + 4 + 1 + 16);
        assert_eq!(scene.metadata.total_towers, 1);
        assert_eq!(
            scene.metadata.estimated_cost,
            scene.total_modules as u64 * 3500
        );
    }

    #[test]
    fn first_tower_base_is_at_origin() {
        let catalog = Catalog::standard();
        let towers = single_tower_chain(&catalog);
        let scene = export_scene(&catalog, &towers, &params(4, 100));
        assert_eq!(scene.modules[0].id, "base_l1_v1");
        assert_eq!(scene.modules[0].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn successor_bases_chain_along_the_spiral() {
        let catalog = Catalog::standard();
        // enough filler demand to force two towers
        let mut demand = Demand::new();
        demand.set(codes::RECREATION, 20);
        let towers = place_demand(&catalog, &demand).unwrap();
        assert!(towers.len() >= 2);

        let scene = export_scene(&catalog, &towers, &params(4, 100));
        let step = HUB_WIDTH + 3.0 * GANGWAY_WIDTH;
        let bases: Vec<&ModuleInstance> = scene
            .modules
            .iter()
            .filter(|m| m.id == "base_l1_v1")
            .collect();
        assert_eq!(bases.len(), towers.len());
        // tower 2 hangs off tower 1 in the Up direction (+z)
        assert_eq!(bases[1].position, [0.0, 0.0, step]);
    }

    #[test]
    fn only_non_last_towers_emit_a_bridge_gangway() {
        let catalog = Catalog::standard();
        let mut demand = Demand::new();
        demand.set(codes::RECREATION, 20);
        let towers = place_demand(&catalog, &demand).unwrap();
        let tower_count = towers.len();

        let scene = export_scene(&catalog, &towers, &params(4, 100));
        // every grid gangway cell renders as a wall instance too, so the
        // scene holds exactly one extra gangway per inter-tower bridge
        let grid_gangways: usize = towers
            .iter()
            .map(|t| {
                t.cells()
                    .filter(|&(_, _, m)| m == Some(catalog.gangway))
                    .count()
            })
            .sum();
        let all_gangways = scene
            .modules
            .iter()
            .filter(|m| m.id == "gangway_l1_v1")
            .count();
        assert_eq!(all_gangways, grid_gangways + tower_count - 1);
    }

    #[test]
    fn wall_instances_rotate_with_their_face() {
        let catalog = Catalog::standard();
        let towers = single_tower_chain(&catalog);
        let scene = export_scene(&catalog, &towers, &params(4, 100));

        // the placed lab sits at level 0 face 0: in front of the hub (-z),
        // unrotated, one level up from the base platform
        let lab = scene
            .modules
            .iter()
            .find(|m| m.id == "lab_l2_v1")
            .expect("lab instance");
        assert_eq!(lab.rotation, YAW_0);
        assert_eq!(lab.position[1], MODULE_HEIGHT);
        assert!(lab.position[2] < 0.0);
    }

    #[test]
    fn access_cores_follow_the_inventory_rule() {
        let catalog = Catalog::standard();
        let mut demand = Demand::new();
        demand.set(codes::RECREATION, 20);
        let towers = place_demand(&catalog, &demand).unwrap();
        assert!(towers.len() >= 2);

        // 12 passengers, short mission → 2 access cores
        let scene = export_scene(&catalog, &towers, &params(12, 100));
        let cores = scene
            .modules
            .iter()
            .filter(|m| m.id == "access_core_l1_v1")
            .count();
        assert_eq!(cores, 2);
    }
}
