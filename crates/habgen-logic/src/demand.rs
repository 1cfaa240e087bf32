//! Typed module demand and its boundary validation.
//!
//! A demand maps module codes to required unit counts. Raw input (e.g. a
//! decoded request body) is validated here, before the placer ever runs:
//! unknown codes, structural codes, and out-of-range quantities are
//! configuration errors, not placement failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ModuleCode};
use crate::error::{LayoutError, Result};

/// Required unit count per module type. Entry order is irrelevant — the
/// placer imposes its own ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    counts: BTreeMap<ModuleCode, u32>,
}

impl Demand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validated demand from raw string-keyed input.
    pub fn from_raw(catalog: &Catalog, raw: &BTreeMap<String, i64>) -> Result<Self> {
        let mut demand = Demand::new();
        for (key, &quantity) in raw {
            let code = ModuleCode::parse(key)
                .filter(|&c| catalog.contains(c))
                .ok_or_else(|| LayoutError::UnknownModule(key.clone()))?;
            if catalog.is_structural(code) {
                return Err(LayoutError::StructuralModule(code));
            }
            if quantity < 0 || quantity > u32::MAX as i64 {
                return Err(LayoutError::InvalidQuantity {
                    module: key.clone(),
                    quantity,
                });
            }
            demand.add(code, quantity as u32);
        }
        Ok(demand)
    }

    /// Check every entry against the catalog's placeable set.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        for (&code, _) in &self.counts {
            if catalog.is_structural(code) {
                return Err(LayoutError::StructuralModule(code));
            }
            if !catalog.is_placeable(code) {
                return Err(LayoutError::UnknownModule(code.to_string()));
            }
        }
        Ok(())
    }

    pub fn set(&mut self, code: ModuleCode, quantity: u32) {
        self.counts.insert(code, quantity);
    }

    pub fn add(&mut self, code: ModuleCode, quantity: u32) {
        *self.counts.entry(code).or_insert(0) += quantity;
    }

    pub fn quantity(&self, code: ModuleCode) -> u32 {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    /// Total units across all types.
    pub fn total_units(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModuleCode, u32)> + '_ {
        self.counts.iter().map(|(&code, &quantity)| (code, quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::codes;

    #[test]
    fn from_raw_accepts_known_codes() {
        let catalog = Catalog::standard();
        let raw = BTreeMap::from([("003".to_string(), 2i64), ("026".to_string(), 1i64)]);
        let demand = Demand::from_raw(&catalog, &raw).unwrap();
        assert_eq!(demand.quantity(codes::LAB), 2);
        assert_eq!(demand.quantity(codes::SLEEP_WARD), 1);
        assert_eq!(demand.total_units(), 3);
    }

    #[test]
    fn from_raw_rejects_unknown_code() {
        let catalog = Catalog::standard();
        let raw = BTreeMap::from([("099".to_string(), 1i64)]);
        assert!(matches!(
            Demand::from_raw(&catalog, &raw),
            Err(LayoutError::UnknownModule(code)) if code == "099"
        ));
    }

    #[test]
    fn from_raw_rejects_negative_quantity() {
        let catalog = Catalog::standard();
        let raw = BTreeMap::from([("003".to_string(), -1i64)]);
        assert!(matches!(
            Demand::from_raw(&catalog, &raw),
            Err(LayoutError::InvalidQuantity { quantity: -1, .. })
        ));
    }

    #[test]
    fn from_raw_rejects_structural_code() {
        let catalog = Catalog::standard();
        let raw = BTreeMap::from([("010".to_string(), 1i64)]);
        assert!(matches!(
            Demand::from_raw(&catalog, &raw),
            Err(LayoutError::StructuralModule(code)) if code == codes::ACCESS_CORE
        ));
    }

    #[test]
    fn zero_quantities_are_allowed() {
        let catalog = Catalog::standard();
        let raw = BTreeMap::from([("003".to_string(), 0i64)]);
        let demand = Demand::from_raw(&catalog, &raw).unwrap();
        assert_eq!(demand.total_units(), 0);
        demand.validate(&catalog).unwrap();
    }
}
