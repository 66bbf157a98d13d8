use serde::Deserialize;

use crate::category::PartCategory;
use crate::part::Part;

/// Inventory list filter: name search, category and location narrowing.
///
/// All criteria are optional and conjunctive; an empty filter matches
/// everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartFilter {
    pub search: Option<String>,
    pub category: Option<PartCategory>,
    pub location: Option<String>,
}

impl PartFilter {
    pub fn matches(&self, part: &Part) -> bool {
        let name_match = self
            .search
            .as_deref()
            .map(|term| part.name.to_lowercase().contains(&term.to_lowercase()))
            .unwrap_or(true);
        let category_match = self.category.map(|c| part.category == c).unwrap_or(true);
        let location_match = self
            .location
            .as_deref()
            .map(|l| part.storage_location == l)
            .unwrap_or(true);
        name_match && category_match && location_match
    }

    pub fn apply(&self, parts: Vec<Part>) -> Vec<Part> {
        parts.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct storage locations, sorted, for filter dropdowns.
pub fn available_locations(parts: &[Part]) -> Vec<String> {
    let mut locations: Vec<String> = parts.iter().map(|p| p.storage_location.clone()).collect();
    locations.sort();
    locations.dedup();
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::PartInput;

    fn part(name: &str, category: PartCategory, location: &str) -> Part {
        Part::create(PartInput {
            name: name.to_string(),
            quantity: 1,
            price: 1000,
            storage_location: location.to_string(),
            category,
            min_stock: 0,
            barcode: None,
        })
        .unwrap()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = PartFilter {
            search: Some("ngk".to_string()),
            ..PartFilter::default()
        };
        assert!(filter.matches(&part("Spark Plug NGK CR7HSA", PartCategory::EngineParts, "A-1")));
        assert!(!filter.matches(&part("Oil Filter", PartCategory::EngineParts, "A-1")));
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let filter = PartFilter {
            search: Some("brake".to_string()),
            category: Some(PartCategory::BrakingSystem),
            location: Some("Shelf C-5".to_string()),
        };
        assert!(filter.matches(&part("Brake Pads Front Set", PartCategory::BrakingSystem, "Shelf C-5")));
        assert!(!filter.matches(&part("Brake Pads Front Set", PartCategory::BrakingSystem, "Shelf C-6")));
    }

    #[test]
    fn locations_are_distinct_and_sorted() {
        let parts = vec![
            part("A part", PartCategory::Other, "Rak Oli"),
            part("B part", PartCategory::Other, "Electrical A-1"),
            part("C part", PartCategory::Other, "Rak Oli"),
        ];
        assert_eq!(
            available_locations(&parts),
            vec!["Electrical A-1".to_string(), "Rak Oli".to_string()]
        );
    }
}
