//! Destination catalog with stable filtering, quick stats and CSV export
//!
//! The catalog is a fixed, read-only collection. Searches return references
//! in catalog order; an empty result is a normal outcome and never an error.

use crate::models::{CatalogStats, DestinationRecord, FilterCriteria, TravelCategory};

/// Advisory shown when a search matches nothing
pub const NO_MATCH_ADVISORY: &str =
    "No destinations match these preferences. Try a higher budget, a longer duration, or a different travel type.";

/// The agency's destination collection
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    records: Vec<DestinationRecord>,
}

impl DestinationCatalog {
    /// The built-in destination lineup
    #[must_use]
    pub fn built_in() -> Self {
        Self::from_records(vec![
            DestinationRecord::new(
                "Paris, France",
                1800.0,
                4.8,
                7,
                TravelCategory::Cultural,
                "Eiffel Tower, Louvre Museum, Seine River",
            ),
            DestinationRecord::new(
                "Tokyo, Japan",
                2200.0,
                4.9,
                10,
                TravelCategory::Cultural,
                "Cherry Blossoms, Temples, Modern Culture",
            ),
            DestinationRecord::new(
                "Bali, Indonesia",
                1200.0,
                4.7,
                8,
                TravelCategory::Relaxation,
                "Beaches, Temples, Rice Terraces",
            ),
            DestinationRecord::new(
                "New York, USA",
                1600.0,
                4.6,
                5,
                TravelCategory::Business,
                "Statue of Liberty, Times Square, Central Park",
            ),
            DestinationRecord::new(
                "Rome, Italy",
                1500.0,
                4.8,
                6,
                TravelCategory::Cultural,
                "Colosseum, Vatican City, Roman Forum",
            ),
            DestinationRecord::new(
                "Santorini, Greece",
                2000.0,
                4.9,
                7,
                TravelCategory::Romantic,
                "Sunset Views, White Architecture, Volcanic Beaches",
            ),
            DestinationRecord::new(
                "Dubai, UAE",
                1900.0,
                4.5,
                6,
                TravelCategory::Adventure,
                "Burj Khalifa, Desert Safari, Luxury Shopping",
            ),
            DestinationRecord::new(
                "Barcelona, Spain",
                1400.0,
                4.7,
                7,
                TravelCategory::Cultural,
                "Sagrada Familia, Park Güell, Gothic Quarter",
            ),
        ])
    }

    /// Build a catalog from an explicit record list, keeping its order
    #[must_use]
    pub fn from_records(records: Vec<DestinationRecord>) -> Self {
        Self { records }
    }

    /// All records in catalog order
    #[must_use]
    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    /// Number of destinations on offer
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a destination by name, ignoring case and surrounding spaces
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DestinationRecord> {
        let wanted = name.trim();
        self.records
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(wanted))
    }

    /// Records matching every criterion, in catalog order
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&DestinationRecord> {
        self.records
            .iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// Aggregate numbers over the whole catalog
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        if self.records.is_empty() {
            return CatalogStats {
                total_destinations: 0,
                average_price: 0.0,
                average_rating: 0.0,
            };
        }
        let count = self.records.len() as f64;
        let price_sum: f64 = self.records.iter().map(|record| record.price).sum();
        let rating_sum: f64 = self
            .records
            .iter()
            .map(|record| f64::from(record.rating))
            .sum();
        CatalogStats {
            total_destinations: self.records.len(),
            average_price: price_sum / count,
            average_rating: rating_sum / count,
        }
    }

    /// Render the catalog as CSV, one row per record in catalog order
    #[must_use]
    pub fn export_csv(&self) -> String {
        let mut out = String::from("name,price,rating,days,category,highlights\n");
        for record in &self.records {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                csv_field(&record.name),
                record.price,
                record.rating,
                record.days,
                record.category,
                csv_field(&record.highlights),
            ));
        }
        out
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Quote a CSV field only when it needs it, doubling embedded quotes
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_lineup() {
        let catalog = DestinationCatalog::built_in();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.records()[0].name, "Paris, France");
        assert_eq!(catalog.records()[7].name, "Barcelona, Spain");
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let catalog = DestinationCatalog::built_in();
        let criteria = FilterCriteria::new(TravelCategory::Cultural, 2000.0, 7);
        let names: Vec<&str> = catalog
            .filter(&criteria)
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        // Rome is cheaper than Paris; catalog order, not price order
        assert_eq!(names, vec!["Paris, France", "Rome, Italy", "Barcelona, Spain"]);
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let catalog = DestinationCatalog::built_in();
        let criteria = FilterCriteria::new(TravelCategory::Cultural, 1800.0, 7);
        let names: Vec<&str> = catalog
            .filter(&criteria)
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert!(names.contains(&"Paris, France"));
    }

    #[test]
    fn test_filter_no_cultural_match_under_tight_budget() {
        let catalog = DestinationCatalog::built_in();
        let criteria = FilterCriteria::new(TravelCategory::Cultural, 1000.0, 30);
        assert!(catalog.filter(&criteria).is_empty());
    }

    #[test]
    fn test_filter_single_adventure_match() {
        let catalog = DestinationCatalog::built_in();
        let criteria = FilterCriteria::new(TravelCategory::Adventure, 2000.0, 10);
        let matches = catalog.filter(&criteria);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Dubai, UAE");
    }

    #[test]
    fn test_filter_agrees_with_predicate() {
        let catalog = DestinationCatalog::built_in();
        let criteria = FilterCriteria::new(TravelCategory::Cultural, 1900.0, 8);
        let matched: Vec<&DestinationRecord> = catalog.filter(&criteria);
        for record in catalog.records() {
            let included = matched.iter().any(|m| m.name == record.name);
            assert_eq!(included, criteria.matches(record), "record {}", record.name);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = DestinationCatalog::from_records(Vec::new());
        let criteria = FilterCriteria::new(TravelCategory::Cultural, 5000.0, 30);
        assert!(catalog.filter(&criteria).is_empty());
        assert_eq!(catalog.stats().total_destinations, 0);
        assert_eq!(catalog.stats().average_price, 0.0);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = DestinationCatalog::built_in();
        assert!(catalog.find("paris, france").is_some());
        assert!(catalog.find("  Dubai, UAE  ").is_some());
        assert!(catalog.find("Atlantis").is_none());
    }

    #[test]
    fn test_stats_over_built_in_catalog() {
        let stats = DestinationCatalog::built_in().stats();
        assert_eq!(stats.total_destinations, 8);
        assert_eq!(stats.average_price, 1700.0);
        assert!((stats.average_rating - 4.7375).abs() < 1e-4);
    }

    #[test]
    fn test_csv_export_quotes_embedded_commas() {
        let csv = DestinationCatalog::built_in().export_csv();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("name,price,rating,days,category,highlights")
        );
        assert_eq!(
            lines.next(),
            Some("\"Paris, France\",1800,4.8,7,Cultural,\"Eiffel Tower, Louvre Museum, Seine River\"")
        );
        assert_eq!(csv.lines().count(), 9);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_field_escaping() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
