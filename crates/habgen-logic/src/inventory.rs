//! Inventory rules — mission parameters to module demand.
//!
//! Each module family has its own sizing table over passenger count `p`
//! and mission duration `t` (days). The tables are configuration encoded
//! as code: they are intentionally literal, branch for branch, including
//! their gaps (several families simply have no rule beyond a passenger
//! threshold). Tri variants are the larger builds, generally selected for
//! longer missions.
//!
//! Access cores (`010`) are structural — they attach to tower bases during
//! export rather than occupying grid cells — so they are *not* part of the
//! returned demand; the exporter asks [`access_core_count`] directly.

use crate::catalog::codes;
use crate::demand::Demand;
use crate::mission::MissionParams;

/// Compute the grid-placement demand for a mission.
pub fn demand_for_mission(params: &MissionParams) -> Demand {
    let p = params.passengers;
    let t = params.duration_days;
    let mut demand = Demand::new();

    // Laboratories
    match p {
        1..=4 => {
            if t <= 500 {
                demand.add(codes::LAB, 1);
            } else if t < 1000 {
                demand.add(codes::LAB_TRI, 1);
            } else {
                demand.add(codes::LAB, 2);
            }
        }
        5..=8 => {
            if t <= 500 {
                demand.add(codes::LAB, 2);
            } else if t < 1000 {
                demand.add(codes::LAB_TRI, 2);
            } else {
                demand.add(codes::LAB, 3);
            }
        }
        9..=12 => {
            if t <= 500 {
                demand.add(codes::LAB, 3);
            } else if t < 1000 {
                demand.add(codes::LAB_TRI, 1);
                demand.add(codes::LAB, 2);
            } else {
                demand.add(codes::LAB, 4);
            }
        }
        13..=16 => {
            if t <= 500 {
                demand.add(codes::LAB, 4);
            } else if t < 1000 {
                demand.add(codes::LAB_TRI, 1);
                demand.add(codes::LAB, 3);
            } else {
                demand.add(codes::LAB_TRI, 4);
            }
        }
        _ => {}
    }

    // Recreation
    match p {
        1..=4 => {
            if t > 180 && t <= 500 {
                demand.add(codes::RECREATION, 1);
            } else if t > 500 {
                demand.add(codes::RECREATION_TRI, 1);
            }
        }
        5..=8 => {
            if t <= 180 {
                demand.add(codes::RECREATION, 1);
            } else if t <= 500 {
                demand.add(codes::RECREATION_TRI, 1);
            } else {
                demand.add(codes::RECREATION_TRI, 1);
                demand.add(codes::RECREATION, 1);
            }
        }
        9..=12 => {
            if t <= 180 {
                demand.add(codes::RECREATION_TRI, 1);
            } else if t <= 500 {
                demand.add(codes::RECREATION_TRI, 1);
                demand.add(codes::RECREATION, 1);
            } else {
                demand.add(codes::RECREATION_TRI, 2);
            }
        }
        _ => {}
    }

    // Gardens: 4 growth units per passenger, 16 units per tri bay; a
    // remainder above 10 rounds up to another tri, otherwise it is served
    // by single bays one unit each
    let growth_units = p * 4;
    demand.add(codes::GARDEN_TRI, growth_units / 16);
    let remainder = growth_units % 16;
    if remainder > 10 {
        demand.add(codes::GARDEN_TRI, 1);
    } else if remainder != 0 {
        demand.add(codes::GARDEN, remainder);
    }

    // Sanitary bays (no rule beyond 6 passengers)
    match p {
        1..=2 => {
            if t < 500 {
                demand.add(codes::SANITARY, 1);
            } else {
                demand.add(codes::SANITARY_TRI, 1);
            }
        }
        3..=5 => {
            if t <= 180 {
                demand.add(codes::SANITARY, 1);
            } else {
                demand.add(codes::SANITARY_TRI, 1);
            }
        }
        6 => {
            if t <= 60 {
                demand.add(codes::SANITARY, 1);
            } else if t < 500 {
                demand.add(codes::SANITARY_TRI, 1);
            } else {
                demand.add(codes::SANITARY, 1);
                demand.add(codes::SANITARY_TRI, 1);
            }
        }
        _ => {}
    }

    // Exercise bays
    match p {
        1..=4 => {
            if t < 500 {
                demand.add(codes::EXERCISE, 1);
            } else {
                demand.add(codes::EXERCISE_TRI, 1);
            }
        }
        5..=8 => {
            demand.add(codes::EXERCISE_TRI, 1);
            if t >= 500 {
                demand.add(codes::EXERCISE, 1);
            }
        }
        9..=12 => {
            if t <= 30 {
                demand.add(codes::EXERCISE, 2);
            } else if t < 500 {
                demand.add(codes::EXERCISE, 1);
                demand.add(codes::EXERCISE_TRI, 1);
            } else {
                demand.add(codes::EXERCISE_TRI, 2);
            }
        }
        _ => {}
    }

    // Systems bays
    match p {
        1..=4 => {
            if t <= 180 {
                demand.add(codes::SYSTEMS, 1);
            } else if t < 500 {
                demand.add(codes::SYSTEMS_TRI, 1);
            } else {
                demand.add(codes::SYSTEMS_TRI, 1);
                demand.add(codes::SYSTEMS, 1);
            }
        }
        5..=6 => {
            if t <= 180 {
                demand.add(codes::SYSTEMS, 1);
            } else if t < 500 {
                demand.add(codes::SYSTEMS, 2);
            } else {
                demand.add(codes::SYSTEMS, 1);
                demand.add(codes::SYSTEMS_TRI, 1);
            }
        }
        7..=8 => {
            if t <= 180 {
                demand.add(codes::SYSTEMS_TRI, 1);
            } else if t < 500 {
                demand.add(codes::SYSTEMS, 2);
            } else {
                demand.add(codes::SYSTEMS, 1);
                demand.add(codes::SYSTEMS_TRI, 1);
            }
        }
        9..=10 => {
            if t <= 180 {
                demand.add(codes::SYSTEMS, 1);
                demand.add(codes::SYSTEMS_TRI, 1);
            } else if t < 500 {
                demand.add(codes::SYSTEMS, 3);
            } else {
                demand.add(codes::SYSTEMS, 2);
                demand.add(codes::SYSTEMS_TRI, 1);
            }
        }
        11..=12 => {
            if t <= 180 {
                demand.add(codes::SYSTEMS_TRI, 2);
            } else if t < 500 {
                demand.add(codes::SYSTEMS, 3);
            } else {
                demand.add(codes::SYSTEMS, 2);
                demand.add(codes::SYSTEMS_TRI, 1);
            }
        }
        _ => {}
    }

    // Galley computer bays
    match p {
        1..=8 => {
            if t <= 180 {
                demand.add(codes::GALLEY_COMPUTER, 1);
            } else {
                demand.add(codes::GALLEY_COMPUTER_TRI, 1);
            }
        }
        9..=12 => {
            demand.add(codes::GALLEY_COMPUTER_TRI, 1);
        }
        13..=16 => {
            if t <= 180 {
                demand.add(codes::GALLEY_COMPUTER, 2);
            } else {
                demand.add(codes::GALLEY_COMPUTER_TRI, 2);
            }
        }
        _ => {}
    }

    // Meal prep bays
    match p {
        1..=4 => {
            if t <= 180 {
                demand.add(codes::MEAL_PREP, 1);
            } else {
                demand.add(codes::MEAL_PREP_TRI, 1);
            }
        }
        5..=6 => {
            if t <= 60 {
                demand.add(codes::MEAL_PREP, 1);
            } else {
                demand.add(codes::MEAL_PREP_TRI, 1);
            }
        }
        7..=10 => {
            if t < 500 {
                demand.add(codes::MEAL_PREP_TRI, 1);
            } else {
                demand.add(codes::MEAL_PREP, 2);
            }
        }
        p if p > 10 => {
            if t < 500 {
                demand.add(codes::MEAL_PREP, 2);
            } else {
                demand.add(codes::MEAL_PREP_TRI, 2);
            }
        }
        _ => {}
    }

    // Med bays
    match p {
        1..=4 => {
            if t <= 180 {
                demand.add(codes::MED_BAY, 1);
            } else {
                demand.add(codes::MED_BAY_TRI, 1);
            }
        }
        5..=6 => {
            if t <= 60 {
                demand.add(codes::MED_BAY, 1);
            } else if t < 500 {
                demand.add(codes::MED_BAY_TRI, 1);
            } else {
                demand.add(codes::MED_BAY, 2);
            }
        }
        7..=8 => {
            if t <= 180 {
                demand.add(codes::MED_BAY_TRI, 1);
            } else if t < 500 {
                demand.add(codes::MED_BAY_TRI, 2);
            } else {
                demand.add(codes::MED_BAY, 1);
                demand.add(codes::MED_BAY_TRI, 1);
            }
        }
        9..=12 => {
            if t <= 180 {
                demand.add(codes::MED_BAY_TRI, 2);
            } else {
                demand.add(codes::MED_BAY, 2);
            }
        }
        _ => {}
    }

    // Sleep wards (no rule beyond 4 passengers)
    match p {
        1..=2 => demand.add(codes::SLEEP_WARD, 1),
        3..=4 => demand.add(codes::SLEEP_WARD_TRI, 1),
        _ => {}
    }

    demand
}

/// Number of access cores to attach to tower bases: one per 6 passengers,
/// doubled for missions longer than 600 days.
pub fn access_core_count(passengers: u32, duration_days: u32) -> u32 {
    let base = passengers.div_ceil(6);
    if duration_days <= 600 {
        base
    } else {
        base * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::Terrain;

    fn params(passengers: u32, duration_days: u32) -> MissionParams {
        MissionParams {
            passengers,
            duration_days,
            terrain: Terrain::Moon,
            scientific: false,
        }
    }

    #[test]
    fn small_short_mission() {
        let demand = demand_for_mission(&params(4, 200));
        assert_eq!(demand.quantity(codes::LAB), 1);
        assert_eq!(demand.quantity(codes::LAB_TRI), 0);
        assert_eq!(demand.quantity(codes::RECREATION), 1);
        // 16 growth units → exactly one garden tri
        assert_eq!(demand.quantity(codes::GARDEN_TRI), 1);
        assert_eq!(demand.quantity(codes::GARDEN), 0);
        assert_eq!(demand.quantity(codes::SANITARY_TRI), 1);
        assert_eq!(demand.quantity(codes::EXERCISE), 1);
        assert_eq!(demand.quantity(codes::SYSTEMS_TRI), 1);
        assert_eq!(demand.quantity(codes::GALLEY_COMPUTER_TRI), 1);
        assert_eq!(demand.quantity(codes::MEAL_PREP_TRI), 1);
        assert_eq!(demand.quantity(codes::MED_BAY_TRI), 1);
        assert_eq!(demand.quantity(codes::SLEEP_WARD_TRI), 1);
    }

    #[test]
    fn garden_remainder_quirk() {
        // one passenger: 4 growth units, remainder 4 → four single bays
        let demand = demand_for_mission(&params(1, 100));
        assert_eq!(demand.quantity(codes::GARDEN_TRI), 0);
        assert_eq!(demand.quantity(codes::GARDEN), 4);

        // three passengers: 12 units, remainder 12 > 10 → rounds up to a tri
        let demand = demand_for_mission(&params(3, 100));
        assert_eq!(demand.quantity(codes::GARDEN_TRI), 1);
        assert_eq!(demand.quantity(codes::GARDEN), 0);
    }

    #[test]
    fn long_mission_prefers_tri_builds() {
        let demand = demand_for_mission(&params(8, 700));
        assert_eq!(demand.quantity(codes::LAB_TRI), 2);
        assert_eq!(demand.quantity(codes::RECREATION_TRI), 1);
        assert_eq!(demand.quantity(codes::RECREATION), 1);
        assert_eq!(demand.quantity(codes::EXERCISE_TRI), 1);
        assert_eq!(demand.quantity(codes::EXERCISE), 1);
    }

    #[test]
    fn sanitary_rule_stops_at_six_passengers() {
        let demand = demand_for_mission(&params(7, 300));
        assert_eq!(demand.quantity(codes::SANITARY), 0);
        assert_eq!(demand.quantity(codes::SANITARY_TRI), 0);

        let demand = demand_for_mission(&params(6, 300));
        assert_eq!(demand.quantity(codes::SANITARY_TRI), 1);
    }

    #[test]
    fn sleep_rule_stops_at_four_passengers() {
        assert_eq!(
            demand_for_mission(&params(2, 90)).quantity(codes::SLEEP_WARD),
            1
        );
        assert_eq!(
            demand_for_mission(&params(4, 90)).quantity(codes::SLEEP_WARD_TRI),
            1
        );
        let demand = demand_for_mission(&params(5, 90));
        assert_eq!(demand.quantity(codes::SLEEP_WARD), 0);
        assert_eq!(demand.quantity(codes::SLEEP_WARD_TRI), 0);
    }

    #[test]
    fn meal_prep_scales_with_crew() {
        assert_eq!(
            demand_for_mission(&params(12, 300)).quantity(codes::MEAL_PREP),
            2
        );
        assert_eq!(
            demand_for_mission(&params(12, 600)).quantity(codes::MEAL_PREP_TRI),
            2
        );
    }

    #[test]
    fn access_cores_double_on_long_missions() {
        assert_eq!(access_core_count(6, 600), 1);
        assert_eq!(access_core_count(7, 600), 2);
        assert_eq!(access_core_count(6, 601), 2);
        assert_eq!(access_core_count(30, 500), 5);
    }

    #[test]
    fn demand_is_deterministic() {
        let a = demand_for_mission(&params(14, 200));
        let b = demand_for_mission(&params(14, 200));
        assert_eq!(a, b);
    }
}
