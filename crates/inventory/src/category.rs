use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gudang_core::DomainError;

/// Closed set of part categories carried over from the shop's catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    #[serde(rename = "Engine Parts")]
    EngineParts,
    #[serde(rename = "Electrical Components")]
    ElectricalComponents,
    #[serde(rename = "Body & Frame")]
    BodyAndFrame,
    #[serde(rename = "Wheels & Tires")]
    WheelsAndTires,
    #[serde(rename = "Braking System")]
    BrakingSystem,
    #[serde(rename = "Suspension")]
    Suspension,
    #[serde(rename = "Accessories")]
    Accessories,
    #[serde(rename = "Fluids & Chemicals")]
    FluidsAndChemicals,
    #[serde(rename = "Other")]
    Other,
}

impl PartCategory {
    pub const ALL: [PartCategory; 9] = [
        PartCategory::EngineParts,
        PartCategory::ElectricalComponents,
        PartCategory::BodyAndFrame,
        PartCategory::WheelsAndTires,
        PartCategory::BrakingSystem,
        PartCategory::Suspension,
        PartCategory::Accessories,
        PartCategory::FluidsAndChemicals,
        PartCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartCategory::EngineParts => "Engine Parts",
            PartCategory::ElectricalComponents => "Electrical Components",
            PartCategory::BodyAndFrame => "Body & Frame",
            PartCategory::WheelsAndTires => "Wheels & Tires",
            PartCategory::BrakingSystem => "Braking System",
            PartCategory::Suspension => "Suspension",
            PartCategory::Accessories => "Accessories",
            PartCategory::FluidsAndChemicals => "Fluids & Chemicals",
            PartCategory::Other => "Other",
        }
    }
}

impl core::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        for category in PartCategory::ALL {
            let parsed: PartCategory = category.as_str().parse().unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Exhaust".parse::<PartCategory>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn serde_uses_catalog_labels() {
        let json = serde_json::to_string(&PartCategory::BodyAndFrame).unwrap();
        assert_eq!(json, "\"Body & Frame\"");
    }
}
