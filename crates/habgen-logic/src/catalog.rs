//! Static placement catalog — module codes, adjacency rules, level
//! preferences.
//!
//! The catalog is configuration data, not computation: it is built once
//! (usually via [`Catalog::standard`]) and shared read-only across a
//! placement run. Adjacency prohibitions are *directional*: `(a, b)` means
//! "a must never have b as a horizontal neighbor", and only the listed
//! direction is ever checked. Priority affinities are listed as ordered
//! pairs but scoring checks both directions, so they behave
//! bidirectionally. The listed sets are preserved exactly as configured —
//! no symmetry is inferred.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 3-character numeric module type code, e.g. `"013"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCode([u8; 3]);

impl ModuleCode {
    /// Const constructor for the code table below.
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Parse a code from its string form. Exactly 3 ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() == 3 && bytes.iter().all(|b| b.is_ascii_digit()) {
            Some(Self([bytes[0], bytes[1], bytes[2]]))
        } else {
            None
        }
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleCode({self})")
    }
}

impl Serialize for ModuleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ModuleCode::parse(&s).ok_or_else(|| D::Error::custom(format!("invalid module code `{s}`")))
    }
}

/// Module type codes for the standard habitat kit.
///
/// `_TRI` variants are the triple-berth build of the same bay; they carry
/// most of the adjacency prohibitions.
pub mod codes {
    use super::ModuleCode;

    pub const BASE: ModuleCode = ModuleCode::from_bytes(*b"001");
    pub const LAB_TRI: ModuleCode = ModuleCode::from_bytes(*b"002");
    pub const LAB: ModuleCode = ModuleCode::from_bytes(*b"003");
    pub const POWER_CORE: ModuleCode = ModuleCode::from_bytes(*b"004");
    pub const RECREATION_TRI: ModuleCode = ModuleCode::from_bytes(*b"005");
    pub const RECREATION: ModuleCode = ModuleCode::from_bytes(*b"006");
    pub const GARDEN_TRI: ModuleCode = ModuleCode::from_bytes(*b"007");
    pub const GARDEN: ModuleCode = ModuleCode::from_bytes(*b"008");
    pub const GANGWAY: ModuleCode = ModuleCode::from_bytes(*b"009");
    pub const ACCESS_CORE: ModuleCode = ModuleCode::from_bytes(*b"010");
    pub const TRANS_CORE: ModuleCode = ModuleCode::from_bytes(*b"011");
    pub const SANITARY: ModuleCode = ModuleCode::from_bytes(*b"012");
    pub const SANITARY_TRI: ModuleCode = ModuleCode::from_bytes(*b"013");
    pub const EXERCISE: ModuleCode = ModuleCode::from_bytes(*b"014");
    pub const EXERCISE_TRI: ModuleCode = ModuleCode::from_bytes(*b"015");
    pub const SYSTEMS: ModuleCode = ModuleCode::from_bytes(*b"016");
    pub const SYSTEMS_TRI: ModuleCode = ModuleCode::from_bytes(*b"017");
    pub const STORAGE: ModuleCode = ModuleCode::from_bytes(*b"018");
    pub const STORAGE_TRI: ModuleCode = ModuleCode::from_bytes(*b"019");
    pub const GALLEY_COMPUTER: ModuleCode = ModuleCode::from_bytes(*b"020");
    pub const GALLEY_COMPUTER_TRI: ModuleCode = ModuleCode::from_bytes(*b"021");
    pub const MEAL_PREP: ModuleCode = ModuleCode::from_bytes(*b"022");
    pub const MEAL_PREP_TRI: ModuleCode = ModuleCode::from_bytes(*b"023");
    pub const MED_BAY: ModuleCode = ModuleCode::from_bytes(*b"024");
    pub const MED_BAY_TRI: ModuleCode = ModuleCode::from_bytes(*b"025");
    pub const SLEEP_WARD: ModuleCode = ModuleCode::from_bytes(*b"026");
    pub const SLEEP_WARD_TRI: ModuleCode = ModuleCode::from_bytes(*b"027");
}

/// Display name and exporter asset id for one module type.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    pub code: ModuleCode,
    pub name: &'static str,
    /// Asset id emitted by the scene exporter.
    pub asset: &'static str,
}

use codes::*;

const MODULE_TABLE: &[(ModuleCode, &str, &str)] = &[
    (BASE, "Base platform", "base_l1_v1"),
    (LAB_TRI, "Laboratory (tri)", "lab_tri_l2_v1"),
    (LAB, "Laboratory", "lab_l2_v1"),
    (POWER_CORE, "Power core", "powercore_l1_v1"),
    (RECREATION_TRI, "Recreation bay (tri)", "recreation_tri_l1_v1"),
    (RECREATION, "Recreation bay", "recreation_l1_v1"),
    (GARDEN_TRI, "Garden bay (tri)", "garden_tri_l1_v1"),
    (GARDEN, "Garden bay", "garden_l1_v1"),
    (GANGWAY, "Gangway", "gangway_l1_v1"),
    (ACCESS_CORE, "Access core", "access_core_l1_v1"),
    (TRANS_CORE, "Transit core", "transcore_l2_v1"),
    (SANITARY, "Sanitary bay", "sanitarybay_l2_v1"),
    (SANITARY_TRI, "Sanitary bay (tri)", "sanitarybay_tri_l2_v1"),
    (EXERCISE, "Exercise bay", "l2_exercisebay_v1"),
    (EXERCISE_TRI, "Exercise bay (tri)", "l2_exercisebay_tri_v1"),
    (SYSTEMS, "Systems bay", "l2_systemsbay_v1"),
    (SYSTEMS_TRI, "Systems bay (tri)", "l2_systemsbay_tri_v1"),
    (STORAGE, "Storage bay", "l2_storagebay_v1"),
    (STORAGE_TRI, "Storage bay (tri)", "l2_storagebay_tri_v1"),
    (GALLEY_COMPUTER, "Galley computer bay", "l3_galleycomputerbay_v1"),
    (
        GALLEY_COMPUTER_TRI,
        "Galley computer bay (tri)",
        "l3_galleycomputerbay_tri_v1",
    ),
    (MEAL_PREP, "Meal prep bay", "l3_mealprepbay_v1"),
    (MEAL_PREP_TRI, "Meal prep bay (tri)", "l3_mealprepbay_tri_v1"),
    (MED_BAY, "Med bay", "l3_medbay_v1"),
    (MED_BAY_TRI, "Med bay (tri)", "l3_medbay_tri_v1"),
    (SLEEP_WARD, "Sleep ward", "l2_sleepwardbay_v1"),
    (SLEEP_WARD_TRI, "Sleep ward (tri)", "l2_sleepwardbay_tri_v1"),
];

// Directional: (a, b) = a refuses b as a horizontal neighbor. The reverse
// direction is a separate entry where intended.
const PROHIBITED_TABLE: &[(ModuleCode, ModuleCode)] = &[
    // lab tri avoids sanitary and sleep wards
    (LAB_TRI, SANITARY),
    (LAB_TRI, SANITARY_TRI),
    (LAB_TRI, SLEEP_WARD),
    (LAB_TRI, SLEEP_WARD_TRI),
    // sanitary tri avoids labs
    (SANITARY_TRI, LAB),
    (SANITARY_TRI, LAB_TRI),
    // sleep ward tri avoids labs
    (SLEEP_WARD_TRI, LAB),
    (SLEEP_WARD_TRI, LAB_TRI),
    // sanitary tri avoids meal prep
    (SANITARY_TRI, MEAL_PREP),
    (SANITARY_TRI, MEAL_PREP_TRI),
    // meal prep tri avoids sanitary
    (MEAL_PREP_TRI, SANITARY),
    (MEAL_PREP_TRI, SANITARY_TRI),
    // exercise tri avoids sleep wards and med bays
    (EXERCISE_TRI, SLEEP_WARD),
    (EXERCISE_TRI, SLEEP_WARD_TRI),
    (EXERCISE_TRI, MED_BAY),
    (EXERCISE_TRI, MED_BAY_TRI),
    // sleep ward tri avoids exercise
    (SLEEP_WARD_TRI, EXERCISE),
    (SLEEP_WARD_TRI, EXERCISE_TRI),
    // med bay tri avoids exercise
    (MED_BAY_TRI, EXERCISE),
    (MED_BAY_TRI, EXERCISE_TRI),
    // systems tri avoids sleep wards and med bays
    (SYSTEMS_TRI, SLEEP_WARD),
    (SYSTEMS_TRI, SLEEP_WARD_TRI),
    (SYSTEMS_TRI, MED_BAY),
    (SYSTEMS_TRI, MED_BAY_TRI),
    // sleep ward tri avoids systems
    (SLEEP_WARD_TRI, SYSTEMS),
    (SLEEP_WARD_TRI, SYSTEMS_TRI),
    // med bay tri avoids systems
    (MED_BAY_TRI, SYSTEMS),
    (MED_BAY_TRI, SYSTEMS_TRI),
    // storage tri avoids sleep wards
    (STORAGE_TRI, SLEEP_WARD),
    (STORAGE_TRI, SLEEP_WARD_TRI),
    // sleep ward tri avoids storage
    (SLEEP_WARD_TRI, STORAGE),
    (SLEEP_WARD_TRI, STORAGE_TRI),
    // galley computer tri avoids sanitary
    (GALLEY_COMPUTER_TRI, SANITARY),
    (GALLEY_COMPUTER_TRI, SANITARY_TRI),
    // sanitary tri avoids galley computer
    (SANITARY_TRI, GALLEY_COMPUTER),
    (SANITARY_TRI, GALLEY_COMPUTER_TRI),
    // med bay tri avoids exercise, sanitary, meal prep
    (MED_BAY_TRI, EXERCISE),
    (MED_BAY_TRI, EXERCISE_TRI),
    (MED_BAY_TRI, SANITARY),
    (MED_BAY_TRI, SANITARY_TRI),
    (MED_BAY_TRI, MEAL_PREP),
    (MED_BAY_TRI, MEAL_PREP_TRI),
    // exercise tri avoids med bays
    (EXERCISE_TRI, MED_BAY),
    (EXERCISE_TRI, MED_BAY_TRI),
    // sanitary tri avoids med bays
    (SANITARY_TRI, MED_BAY),
    (SANITARY_TRI, MED_BAY_TRI),
    // meal prep tri avoids med bays
    (MEAL_PREP_TRI, MED_BAY),
    (MEAL_PREP_TRI, MED_BAY_TRI),
];

// Listed as ordered pairs; scoring checks both directions.
const PRIORITY_TABLE: &[(ModuleCode, ModuleCode)] = &[
    // lab tri near workstations, systems, med bays, other labs
    (LAB_TRI, EXERCISE),
    (LAB_TRI, EXERCISE_TRI),
    (LAB_TRI, SYSTEMS),
    (LAB_TRI, SYSTEMS_TRI),
    (LAB_TRI, MED_BAY),
    (LAB_TRI, MED_BAY_TRI),
    (LAB_TRI, LAB),
    (LAB_TRI, LAB_TRI),
    (EXERCISE_TRI, LAB_TRI),
    (SYSTEMS_TRI, LAB_TRI),
    (MED_BAY_TRI, LAB_TRI),
    (EXERCISE_TRI, LAB),
    (SYSTEMS_TRI, LAB),
    (MED_BAY_TRI, LAB),
    // recreation tri near recreation, meal prep, sleep wards
    (RECREATION_TRI, RECREATION),
    (RECREATION_TRI, RECREATION_TRI),
    (RECREATION_TRI, MEAL_PREP),
    (RECREATION_TRI, MEAL_PREP_TRI),
    (RECREATION_TRI, SLEEP_WARD),
    (RECREATION_TRI, SLEEP_WARD_TRI),
    (MEAL_PREP_TRI, RECREATION_TRI),
    (SLEEP_WARD_TRI, RECREATION_TRI),
    (MEAL_PREP_TRI, RECREATION),
    (SLEEP_WARD_TRI, RECREATION),
    // garden tri near gardens and storage
    (GARDEN_TRI, GARDEN),
    (GARDEN_TRI, GARDEN_TRI),
    (GARDEN_TRI, STORAGE),
    (GARDEN_TRI, STORAGE_TRI),
    (STORAGE_TRI, GARDEN_TRI),
    (STORAGE_TRI, GARDEN),
    // sanitary tri near exercise
    (SANITARY_TRI, EXERCISE),
    (SANITARY_TRI, EXERCISE_TRI),
    (EXERCISE_TRI, SANITARY_TRI),
    (EXERCISE_TRI, SANITARY),
    // galley computer tri near galley, meal prep, sleep wards
    (GALLEY_COMPUTER_TRI, GALLEY_COMPUTER),
    (GALLEY_COMPUTER_TRI, GALLEY_COMPUTER_TRI),
    (GALLEY_COMPUTER_TRI, MEAL_PREP),
    (GALLEY_COMPUTER_TRI, MEAL_PREP_TRI),
    (GALLEY_COMPUTER_TRI, SLEEP_WARD),
    (GALLEY_COMPUTER_TRI, SLEEP_WARD_TRI),
    (MEAL_PREP_TRI, GALLEY_COMPUTER_TRI),
    (SLEEP_WARD_TRI, GALLEY_COMPUTER_TRI),
    (MEAL_PREP_TRI, GALLEY_COMPUTER),
    (SLEEP_WARD_TRI, GALLEY_COMPUTER),
    // meal prep tri near meal prep, storage, galley, gardens
    (MEAL_PREP_TRI, MEAL_PREP),
    (MEAL_PREP_TRI, MEAL_PREP_TRI),
    (MEAL_PREP_TRI, STORAGE),
    (MEAL_PREP_TRI, STORAGE_TRI),
    (MEAL_PREP_TRI, GALLEY_COMPUTER),
    (MEAL_PREP_TRI, GALLEY_COMPUTER_TRI),
    (MEAL_PREP_TRI, GARDEN),
    (MEAL_PREP_TRI, GARDEN_TRI),
    (STORAGE_TRI, MEAL_PREP_TRI),
    (GALLEY_COMPUTER_TRI, MEAL_PREP_TRI),
    (GARDEN_TRI, MEAL_PREP_TRI),
    (STORAGE_TRI, MEAL_PREP),
    (GALLEY_COMPUTER_TRI, MEAL_PREP),
    (GARDEN_TRI, MEAL_PREP),
    // med bay tri near med bays, systems, storage
    (MED_BAY_TRI, MED_BAY),
    (MED_BAY_TRI, MED_BAY_TRI),
    (MED_BAY_TRI, SYSTEMS),
    (MED_BAY_TRI, SYSTEMS_TRI),
    (MED_BAY_TRI, STORAGE),
    (MED_BAY_TRI, STORAGE_TRI),
    (SYSTEMS_TRI, MED_BAY_TRI),
    (STORAGE_TRI, MED_BAY_TRI),
    (SYSTEMS_TRI, MED_BAY),
    (STORAGE_TRI, MED_BAY),
];

const PREFERRED_LEVEL_TABLE: &[(ModuleCode, &[usize])] = &[
    (RECREATION_TRI, &[1, 2, 3]),
    (RECREATION, &[1, 2, 3]),
    (GARDEN_TRI, &[0, 1]),
    (GARDEN, &[0, 1]),
    (SANITARY, &[1]),
    (SANITARY_TRI, &[1]),
    (EXERCISE, &[0]),
    (EXERCISE_TRI, &[0]),
    (SYSTEMS, &[0]),
    (SYSTEMS_TRI, &[0]),
    (STORAGE, &[0]),
    (STORAGE_TRI, &[0]),
    (MEAL_PREP, &[1]),
    (MEAL_PREP_TRI, &[1]),
    (SLEEP_WARD, &[3]),
    (SLEEP_WARD_TRI, &[3]),
];

// Heavily-prohibited types go first so they still have open cells to pick
// from; relative order within each list is fixed.
const RESTRICTIVE_ORDER: &[ModuleCode] = &[
    LAB_TRI,
    SANITARY_TRI,
    EXERCISE_TRI,
    SYSTEMS_TRI,
    STORAGE_TRI,
    GALLEY_COMPUTER_TRI,
    MEAL_PREP_TRI,
    MED_BAY_TRI,
    SLEEP_WARD_TRI,
];

const STANDARD_ORDER: &[ModuleCode] = &[
    BASE,
    LAB,
    POWER_CORE,
    RECREATION_TRI,
    RECREATION,
    GARDEN_TRI,
    GARDEN,
    GANGWAY,
    TRANS_CORE,
    SANITARY,
    EXERCISE,
    SYSTEMS,
    STORAGE,
    GALLEY_COMPUTER,
    MEAL_PREP,
    MED_BAY,
    SLEEP_WARD,
];

/// Immutable placement configuration shared read-only across a run.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Known module types, keyed by code.
    pub modules: HashMap<ModuleCode, ModuleInfo>,
    /// Directional adjacency prohibitions.
    pub prohibited: HashSet<(ModuleCode, ModuleCode)>,
    /// Priority affinities (checked both ways at scoring time).
    pub priority: HashSet<(ModuleCode, ModuleCode)>,
    /// Preferred levels per module type.
    pub preferred_levels: HashMap<ModuleCode, Vec<usize>>,
    /// Placement order, first tranche: heavily-prohibited types.
    pub restrictive: Vec<ModuleCode>,
    /// Placement order, second tranche: everything else placeable.
    pub standard: Vec<ModuleCode>,
    /// Types subject to the vertical stacking rule.
    pub sanitary: HashSet<ModuleCode>,
    /// Types placed by the exporter, never on the grid.
    pub structural: HashSet<ModuleCode>,
    /// Type used to close every cell left empty after placement.
    pub filler: ModuleCode,
    /// Type reserved for the inter-tower connector cells.
    pub gangway: ModuleCode,
}

impl Catalog {
    /// The standard habitat kit catalog.
    pub fn standard() -> Self {
        Self {
            modules: MODULE_TABLE
                .iter()
                .map(|&(code, name, asset)| (code, ModuleInfo { code, name, asset }))
                .collect(),
            prohibited: PROHIBITED_TABLE.iter().copied().collect(),
            priority: PRIORITY_TABLE.iter().copied().collect(),
            preferred_levels: PREFERRED_LEVEL_TABLE
                .iter()
                .map(|&(code, levels)| (code, levels.to_vec()))
                .collect(),
            restrictive: RESTRICTIVE_ORDER.to_vec(),
            standard: STANDARD_ORDER.to_vec(),
            sanitary: [SANITARY, SANITARY_TRI].into_iter().collect(),
            structural: [ACCESS_CORE].into_iter().collect(),
            filler: RECREATION,
            gangway: GANGWAY,
        }
    }

    pub fn contains(&self, code: ModuleCode) -> bool {
        self.modules.contains_key(&code)
    }

    pub fn info(&self, code: ModuleCode) -> Option<&ModuleInfo> {
        self.modules.get(&code)
    }

    /// True if `a` refuses `b` as a horizontal neighbor (directional).
    pub fn is_prohibited(&self, a: ModuleCode, b: ModuleCode) -> bool {
        self.prohibited.contains(&(a, b))
    }

    /// True if `(a, b)` is a listed priority pair (one direction only;
    /// scoring checks both orders itself).
    pub fn is_priority(&self, a: ModuleCode, b: ModuleCode) -> bool {
        self.priority.contains(&(a, b))
    }

    pub fn preferred_levels(&self, code: ModuleCode) -> &[usize] {
        self.preferred_levels
            .get(&code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_sanitary(&self, code: ModuleCode) -> bool {
        self.sanitary.contains(&code)
    }

    pub fn is_structural(&self, code: ModuleCode) -> bool {
        self.structural.contains(&code)
    }

    /// True if the code participates in grid placement.
    pub fn is_placeable(&self, code: ModuleCode) -> bool {
        self.restrictive.contains(&code) || self.standard.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        let code = ModuleCode::parse("013").unwrap();
        assert_eq!(code, SANITARY_TRI);
        assert_eq!(code.to_string(), "013");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(ModuleCode::parse("13").is_none());
        assert!(ModuleCode::parse("0013").is_none());
        assert!(ModuleCode::parse("01x").is_none());
        assert!(ModuleCode::parse("").is_none());
    }

    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&SLEEP_WARD).unwrap();
        assert_eq!(json, "\"026\"");
        let back: ModuleCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SLEEP_WARD);
    }

    #[test]
    fn standard_catalog_has_27_modules() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.modules.len(), 27);
    }

    #[test]
    fn prohibitions_are_directional() {
        let catalog = Catalog::standard();
        // lab tri refuses sanitary, but plain sanitary does not refuse lab tri
        assert!(catalog.is_prohibited(LAB_TRI, SANITARY));
        assert!(!catalog.is_prohibited(SANITARY, LAB_TRI));
        // the tri sanitary direction IS listed separately
        assert!(catalog.is_prohibited(SANITARY_TRI, LAB_TRI));
    }

    #[test]
    fn listed_asymmetry_is_preserved() {
        let catalog = Catalog::standard();
        // storage tri refuses sleep wards, but plain storage never refuses
        // anything — only the listed directions exist
        assert!(catalog.is_prohibited(STORAGE_TRI, SLEEP_WARD));
        assert!(!catalog.is_prohibited(STORAGE, SLEEP_WARD));
    }

    #[test]
    fn placement_order_covers_all_but_structural() {
        let catalog = Catalog::standard();
        for &code in catalog.modules.keys() {
            if catalog.is_structural(code) {
                assert!(!catalog.is_placeable(code), "{code} should not be placeable");
            } else {
                assert!(catalog.is_placeable(code), "{code} missing from order");
            }
        }
        assert_eq!(
            catalog.restrictive.len() + catalog.standard.len(),
            catalog.modules.len() - catalog.structural.len()
        );
    }

    #[test]
    fn gangway_is_never_prohibited() {
        // a fresh tower must always accept any placeable module next to its
        // reserved gangway cells
        let catalog = Catalog::standard();
        for &code in catalog.modules.keys() {
            assert!(!catalog.is_prohibited(code, GANGWAY), "{code} vs gangway");
            assert!(!catalog.is_prohibited(GANGWAY, code), "gangway vs {code}");
        }
    }

    #[test]
    fn preferred_levels_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.preferred_levels(SLEEP_WARD), &[3]);
        assert_eq!(catalog.preferred_levels(RECREATION), &[1, 2, 3]);
        assert!(catalog.preferred_levels(BASE).is_empty());
    }

    #[test]
    fn filler_and_gangway_are_placeable() {
        let catalog = Catalog::standard();
        assert!(catalog.is_placeable(catalog.filler));
        assert!(catalog.is_placeable(catalog.gangway));
    }
}
