use serde::{Deserialize, Serialize};

use gudang_core::{DomainError, DomainResult, PartId};

use crate::category::PartCategory;

/// A stock-keeping unit.
///
/// Field names serialize in camelCase: that is the shape the JSON store
/// persists and the API speaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub quantity: u32,
    /// Unit price in whole rupiah.
    pub price: u64,
    pub storage_location: String,
    pub category: PartCategory,
    pub min_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

impl Part {
    /// Build a part from validated input, assigning a fresh id.
    pub fn create(input: PartInput) -> DomainResult<Self> {
        input.validate()?;
        Ok(Self {
            id: PartId::new(),
            name: input.name.trim().to_string(),
            quantity: input.quantity,
            price: input.price,
            storage_location: input.storage_location.trim().to_string(),
            category: input.category,
            min_stock: input.min_stock,
            barcode: input.normalized_barcode(),
        })
    }

    /// Quantity at or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Duplicate-detection key: trimmed, case-insensitive name.
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }
}

/// Caller-supplied fields for creating or updating a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartInput {
    pub name: String,
    pub quantity: u32,
    pub price: u64,
    pub storage_location: String,
    pub category: PartCategory,
    pub min_stock: u32,
    #[serde(default)]
    pub barcode: Option<String>,
}

impl PartInput {
    /// Reject malformed input before any state is touched.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().chars().count() < 2 {
            return Err(DomainError::validation("name must be at least 2 characters"));
        }
        if self.storage_location.trim().is_empty() {
            return Err(DomainError::validation("storage location cannot be empty"));
        }
        Ok(())
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Trimmed barcode; empty input counts as "no barcode".
    pub fn normalized_barcode(&self) -> Option<String> {
        self.barcode
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
    }
}

/// Trimmed, lowercased form used wherever names are compared.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> PartInput {
        PartInput {
            name: name.to_string(),
            quantity: 10,
            price: 52_500,
            storage_location: "Shelf A-1".to_string(),
            category: PartCategory::EngineParts,
            min_stock: 5,
            barcode: None,
        }
    }

    #[test]
    fn create_assigns_id_and_trims_fields() {
        let part = Part::create(PartInput {
            name: "  Spark Plug NGK CR7HSA ".to_string(),
            storage_location: " Shelf A-1 ".to_string(),
            ..input("x")
        })
        .unwrap();
        assert_eq!(part.name, "Spark Plug NGK CR7HSA");
        assert_eq!(part.storage_location, "Shelf A-1");
        assert_eq!(part.quantity, 10);
    }

    #[test]
    fn one_character_names_are_rejected() {
        let err = Part::create(input("x")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_location_is_rejected() {
        let err = Part::create(PartInput {
            storage_location: "  ".to_string(),
            ..input("Oil Filter")
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn blank_barcode_normalizes_to_none() {
        let part = Part::create(PartInput {
            barcode: Some("   ".to_string()),
            ..input("Oil Filter")
        })
        .unwrap();
        assert_eq!(part.barcode, None);
    }

    #[test]
    fn name_match_is_trimmed_and_case_insensitive() {
        let part = Part::create(input("Oil Filter")).unwrap();
        assert!(part.matches_name("  oil filter "));
        assert!(!part.matches_name("Oil Filter Honda OEM"));
    }

    #[test]
    fn low_stock_includes_the_threshold_itself() {
        let mut part = Part::create(input("Oil Filter")).unwrap();
        part.quantity = 5;
        assert!(part.is_low_stock());
        part.quantity = 6;
        assert!(!part.is_low_stock());
    }

    #[test]
    fn serde_shape_is_camel_case() {
        let part = Part::create(input("Oil Filter")).unwrap();
        let json = serde_json::to_value(&part).unwrap();
        assert!(json.get("storageLocation").is_some());
        assert!(json.get("minStock").is_some());
        assert!(json.get("storage_location").is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The restock-matching key must not care about surrounding
            // whitespace or letter case, and normalizing twice must be a
            // no-op.
            #[test]
            fn normalize_name_is_idempotent_and_case_blind(name in "[ a-zA-Z0-9+.-]{0,40}") {
                let once = normalize_name(&name);
                prop_assert_eq!(&normalize_name(&once), &once);
                prop_assert_eq!(&normalize_name(&name.to_uppercase()), &once);
                prop_assert_eq!(&normalize_name(&format!("  {name} ")), &once);
            }
        }
    }
}
