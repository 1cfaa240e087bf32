//! habgen Headless Layout Harness
//!
//! Validates the placement pipeline and its invariants without any service
//! layer or rendering. Runs entirely in-process: a sweep of mission
//! profiles goes through inventory → placement → finalize → export, and
//! every grid invariant is checked on the way out.
//!
//! Usage:
//!   cargo run -p habgen-simtest
//!   cargo run -p habgen-simtest -- --verbose

use habgen_logic::catalog::Catalog;
use habgen_logic::inventory::demand_for_mission;
use habgen_logic::mission::{validate_params, MissionParams, Terrain};
use habgen_logic::placer::place_demand;
use habgen_logic::scene::export_scene;
use habgen_logic::spiral::{spiral_direction, Direction};
use habgen_logic::tower::{Tower, FACES, LEVELS};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn result(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== habgen Layout Harness ===\n");

    let catalog = Catalog::standard();
    let mut results = Vec::new();

    // 1. Spiral addressing
    results.extend(validate_spiral(verbose));

    // 2. Mission sweep: placement invariants for every profile
    results.extend(validate_mission_sweep(&catalog, verbose));

    // 3. Determinism across repeated runs
    results.extend(validate_determinism(&catalog, verbose));

    // 4. Scene export coherence
    results.extend(validate_scene_export(&catalog, verbose));

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;
    println!("\n=== Summary: {passed} passed, {failed} failed ===");
    for r in &results {
        if !r.passed {
            println!("FAIL {} — {}", r.name, r.detail);
        } else if verbose {
            println!("ok   {} — {}", r.name, r.detail);
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Spiral addressing ───────────────────────────────────────────────────

fn validate_spiral(verbose: bool) -> Vec<TestResult> {
    use Direction::*;
    let expected = [Up, Left, Down, Down, Right, Right, Up, Up];
    let actual: Vec<Direction> = (1..=8).map(spiral_direction).collect();
    let passed = actual == expected;
    if verbose {
        println!("spiral 1..8: {actual:?}");
    }
    vec![result(
        "spiral_first_eight",
        passed,
        format!("{actual:?}"),
    )]
}

// ── Mission sweep ───────────────────────────────────────────────────────

fn sweep_profiles() -> Vec<MissionParams> {
    let mut profiles = Vec::new();
    for passengers in 1..=16 {
        for duration_days in [30, 90, 200, 400, 600, 900, 1500] {
            profiles.push(MissionParams {
                passengers,
                duration_days,
                terrain: Terrain::Moon,
                scientific: false,
            });
        }
    }
    profiles
}

fn check_towers(catalog: &Catalog, towers: &[Tower]) -> Result<(), String> {
    for (index, tower) in towers.iter().enumerate() {
        if tower.sequence != index as u32 + 1 {
            return Err(format!(
                "tower {} has sequence {}",
                index + 1,
                tower.sequence
            ));
        }
        if tower.empty_cells() != 0 {
            return Err(format!(
                "tower {} still has {} empty cell(s)",
                tower.sequence,
                tower.empty_cells()
            ));
        }
        for (level, face, cell) in tower.cells() {
            let Some(module) = cell else { continue };
            // sanitary support rule
            if catalog.is_sanitary(module) && level > 0 {
                let supported = tower
                    .module_at(level - 1, face)
                    .is_some_and(|below| catalog.is_sanitary(below));
                if !supported {
                    return Err(format!(
                        "tower {} level {level} face {face}: unsupported sanitary bay",
                        tower.sequence
                    ));
                }
            }
        }
    }
    // last tower's outward direction must be released, all others kept
    if let Some((last, rest)) = towers.split_last() {
        if last.direction_out.is_some() {
            return Err("last tower kept its outward direction".to_string());
        }
        if rest.iter().any(|t| t.direction_out.is_none()) {
            return Err("inner tower lost its outward direction".to_string());
        }
    }
    Ok(())
}

fn validate_mission_sweep(catalog: &Catalog, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();
    let mut checked = 0usize;
    let mut tower_total = 0usize;

    for params in sweep_profiles() {
        if !validate_params(&params).is_empty() {
            results.push(result(
                "sweep_params",
                false,
                format!("profile rejected: {params:?}"),
            ));
            continue;
        }
        let demand = demand_for_mission(&params);
        let towers = match place_demand(catalog, &demand) {
            Ok(towers) => towers,
            Err(err) => {
                results.push(result(
                    "sweep_placement",
                    false,
                    format!(
                        "p={} t={}: {err}",
                        params.passengers, params.duration_days
                    ),
                ));
                continue;
            }
        };
        if demand.total_units() > 0 && towers.is_empty() {
            results.push(result(
                "sweep_placement",
                false,
                format!(
                    "p={} t={}: demand but no towers",
                    params.passengers, params.duration_days
                ),
            ));
            continue;
        }
        if let Err(detail) = check_towers(catalog, &towers) {
            results.push(result(
                "sweep_invariants",
                false,
                format!(
                    "p={} t={}: {detail}",
                    params.passengers, params.duration_days
                ),
            ));
            continue;
        }
        if verbose {
            println!(
                "p={:2} t={:4}: {} unit(s) → {} tower(s)",
                params.passengers,
                params.duration_days,
                demand.total_units(),
                towers.len()
            );
        }
        checked += 1;
        tower_total += towers.len();
    }

    results.push(result(
        "sweep_profiles",
        true,
        format!("{checked} profile(s) clean, {tower_total} tower(s) built"),
    ));
    results
}

// ── Determinism ─────────────────────────────────────────────────────────

fn validate_determinism(catalog: &Catalog, _verbose: bool) -> Vec<TestResult> {
    let params = MissionParams {
        passengers: 14,
        duration_days: 200,
        terrain: Terrain::Mars,
        scientific: true,
    };
    let demand = demand_for_mission(&params);
    let runs: Vec<Vec<Tower>> = (0..3)
        .filter_map(|_| place_demand(catalog, &demand).ok())
        .collect();
    let passed = runs.len() == 3 && runs[0] == runs[1] && runs[1] == runs[2];
    vec![result(
        "determinism_three_runs",
        passed,
        format!("{} run(s) compared", runs.len()),
    )]
}

// ── Scene export ────────────────────────────────────────────────────────

fn validate_scene_export(catalog: &Catalog, verbose: bool) -> Vec<TestResult> {
    let params = MissionParams {
        passengers: 12,
        duration_days: 700,
        terrain: Terrain::Asteroid,
        scientific: true,
    };
    let demand = demand_for_mission(&params);
    let towers = match place_demand(catalog, &demand) {
        Ok(towers) => towers,
        Err(err) => {
            return vec![result("scene_placement", false, err.to_string())];
        }
    };
    let scene = export_scene(catalog, &towers, &params);

    let mut results = Vec::new();
    results.push(result(
        "scene_counts",
        scene.total_modules == scene.modules.len() && scene.total_modules > 0,
        format!("{} module instance(s)", scene.total_modules),
    ));

    // one wall instance per grid cell
    let wall_minimum = towers.len() * LEVELS * FACES;
    results.push(result(
        "scene_covers_grid",
        scene.total_modules >= wall_minimum,
        format!("{} ≥ {wall_minimum}", scene.total_modules),
    ));

    // the scene document serializes
    match serde_json::to_string_pretty(&scene) {
        Ok(json) => {
            if verbose {
                println!("scene document: {} bytes", json.len());
            }
            results.push(result(
                "scene_serializes",
                true,
                format!("{} bytes", json.len()),
            ));
        }
        Err(err) => results.push(result("scene_serializes", false, err.to_string())),
    }
    results
}
