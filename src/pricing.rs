//! Trip cost estimation against the published rate tables
//!
//! Pricing is deterministic: `total = base price x flight multiplier x hotel
//! multiplier x travelers`, rounded to whole cents. Tiers without a published
//! rate are rejected rather than silently priced at par.

use std::collections::HashMap;

use crate::error::TravelEaseError;
use crate::models::{CostBreakdown, DestinationRecord, FlightClass, HotelTier};

/// Round a dollar amount to whole cents, half away from zero
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Multiplier tables for flight cabins and hotel tiers
#[derive(Debug, Clone)]
pub struct PricingTable {
    flight: HashMap<FlightClass, f64>,
    hotel: HashMap<HotelTier, f64>,
}

impl PricingTable {
    /// The published rates
    ///
    /// 1-Star, 2-Star and Customized stays carry no published rate and are
    /// deliberately absent.
    #[must_use]
    pub fn published() -> Self {
        let flight = HashMap::from([
            (FlightClass::Economy, 1.0),
            (FlightClass::PremiumEconomy, 1.3),
            (FlightClass::Business, 1.8),
            (FlightClass::FirstClass, 2.5),
        ]);
        let hotel = HashMap::from([
            (HotelTier::ThreeStar, 1.0),
            (HotelTier::FourStar, 1.2),
            (HotelTier::FiveStar, 1.5),
            (HotelTier::LuxuryResort, 2.0),
        ]);
        Self { flight, hotel }
    }

    /// Published rates with configured overrides applied on top
    ///
    /// Keys are parsed leniently ("first class", "luxury-resort"); unknown
    /// keys and non-finite or negative multipliers are configuration errors.
    pub fn with_overrides(
        flight_overrides: &HashMap<String, f64>,
        hotel_overrides: &HashMap<String, f64>,
    ) -> crate::Result<Self> {
        let mut table = Self::published();
        for (key, &multiplier) in flight_overrides {
            let class: FlightClass = key.parse().map_err(|_| {
                TravelEaseError::config(format!("unknown flight class '{key}' in pricing overrides"))
            })?;
            check_multiplier(key, multiplier)?;
            table.flight.insert(class, multiplier);
        }
        for (key, &multiplier) in hotel_overrides {
            let tier: HotelTier = key.parse().map_err(|_| {
                TravelEaseError::config(format!("unknown hotel tier '{key}' in pricing overrides"))
            })?;
            check_multiplier(key, multiplier)?;
            table.hotel.insert(tier, multiplier);
        }
        Ok(table)
    }

    /// Multiplier for a flight cabin, if one is published
    #[must_use]
    pub fn flight_multiplier(&self, class: FlightClass) -> Option<f64> {
        self.flight.get(&class).copied()
    }

    /// Multiplier for a hotel tier, if one is published
    #[must_use]
    pub fn hotel_multiplier(&self, tier: HotelTier) -> Option<f64> {
        self.hotel.get(&tier).copied()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::published()
    }
}

fn check_multiplier(key: &str, multiplier: f64) -> crate::Result<()> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(TravelEaseError::config(format!(
            "pricing multiplier for '{key}' must be a non-negative number"
        )));
    }
    Ok(())
}

/// Computes trip costs from a destination's base price and the booking choices
#[derive(Debug, Clone, Default)]
pub struct TripCostEstimator {
    table: PricingTable,
}

impl TripCostEstimator {
    /// Create an estimator over the given rate table
    #[must_use]
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    /// Estimate the total and per-person cost of a booking
    ///
    /// The base price already covers the two-person reference package; the
    /// traveler count scales it linearly. Fails for tiers without a published
    /// rate and for a traveler count of zero, where the per-person share is
    /// undefined.
    pub fn compute(
        &self,
        destination: &DestinationRecord,
        flight_class: FlightClass,
        hotel_tier: HotelTier,
        travelers: u32,
    ) -> crate::Result<CostBreakdown> {
        if travelers == 0 {
            return Err(TravelEaseError::pricing(
                "cost per person is undefined for zero travelers",
            ));
        }
        let flight_multiplier = self.table.flight_multiplier(flight_class).ok_or_else(|| {
            TravelEaseError::pricing(format!("no published rate for {flight_class} flights"))
        })?;
        let hotel_multiplier = self.table.hotel_multiplier(hotel_tier).ok_or_else(|| {
            TravelEaseError::pricing(format!("no published rate for {hotel_tier} stays"))
        })?;

        let total = round_to_cents(
            destination.price * flight_multiplier * hotel_multiplier * f64::from(travelers),
        );
        let per_person = round_to_cents(total / f64::from(travelers));
        Ok(CostBreakdown {
            total_cost: total,
            cost_per_person: per_person,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TravelCategory;
    use rstest::rstest;

    fn record(name: &str, price: f64) -> DestinationRecord {
        DestinationRecord::new(name, price, 4.5, 7, TravelCategory::Cultural, "Things")
    }

    #[rstest]
    #[case(FlightClass::Economy, 1000.0)]
    #[case(FlightClass::PremiumEconomy, 1300.0)]
    #[case(FlightClass::Business, 1800.0)]
    #[case(FlightClass::FirstClass, 2500.0)]
    fn test_flight_multipliers(#[case] class: FlightClass, #[case] expected_total: f64) {
        let estimator = TripCostEstimator::default();
        let costs = estimator
            .compute(&record("Test", 1000.0), class, HotelTier::ThreeStar, 1)
            .unwrap();
        assert_eq!(costs.total_cost, expected_total);
    }

    #[rstest]
    #[case(HotelTier::ThreeStar, 1000.0)]
    #[case(HotelTier::FourStar, 1200.0)]
    #[case(HotelTier::FiveStar, 1500.0)]
    #[case(HotelTier::LuxuryResort, 2000.0)]
    fn test_hotel_multipliers(#[case] tier: HotelTier, #[case] expected_total: f64) {
        let estimator = TripCostEstimator::default();
        let costs = estimator
            .compute(&record("Test", 1000.0), FlightClass::Economy, tier, 1)
            .unwrap();
        assert_eq!(costs.total_cost, expected_total);
    }

    #[test]
    fn test_paris_business_five_star_for_two() {
        let estimator = TripCostEstimator::default();
        let costs = estimator
            .compute(
                &record("Paris, France", 1800.0),
                FlightClass::Business,
                HotelTier::FiveStar,
                2,
            )
            .unwrap();
        assert_eq!(costs.total_cost, 9720.0);
        assert_eq!(costs.cost_per_person, 4860.0);
    }

    #[test]
    fn test_bali_economy_three_star_solo() {
        let estimator = TripCostEstimator::default();
        let costs = estimator
            .compute(
                &record("Bali, Indonesia", 1200.0),
                FlightClass::Economy,
                HotelTier::ThreeStar,
                1,
            )
            .unwrap();
        assert_eq!(costs.total_cost, 1200.0);
        assert_eq!(costs.cost_per_person, 1200.0);
    }

    #[rstest]
    #[case(HotelTier::OneStar)]
    #[case(HotelTier::TwoStar)]
    #[case(HotelTier::Customized)]
    fn test_unpriced_tiers_are_rejected(#[case] tier: HotelTier) {
        let estimator = TripCostEstimator::default();
        let result = estimator.compute(&record("Test", 1000.0), FlightClass::Economy, tier, 2);
        assert!(matches!(result, Err(TravelEaseError::Pricing { .. })));
    }

    #[test]
    fn test_zero_travelers_is_rejected() {
        let estimator = TripCostEstimator::default();
        let result = estimator.compute(
            &record("Test", 1000.0),
            FlightClass::Economy,
            HotelTier::ThreeStar,
            0,
        );
        assert!(matches!(result, Err(TravelEaseError::Pricing { .. })));
    }

    #[test]
    fn test_total_scales_linearly_with_travelers() {
        let estimator = TripCostEstimator::default();
        let dubai = record("Dubai, UAE", 1900.0);
        let single = estimator
            .compute(&dubai, FlightClass::PremiumEconomy, HotelTier::FourStar, 1)
            .unwrap();
        for travelers in 1..=10 {
            let costs = estimator
                .compute(&dubai, FlightClass::PremiumEconomy, HotelTier::FourStar, travelers)
                .unwrap();
            assert_eq!(costs.total_cost, single.total_cost * f64::from(travelers));
            assert_eq!(
                costs.cost_per_person,
                round_to_cents(costs.total_cost / f64::from(travelers))
            );
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let estimator = TripCostEstimator::default();
        let santorini = record("Santorini, Greece", 2000.0);
        let first = estimator
            .compute(&santorini, FlightClass::FirstClass, HotelTier::LuxuryResort, 4)
            .unwrap();
        let second = estimator
            .compute(&santorini, FlightClass::FirstClass, HotelTier::LuxuryResort, 4)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overrides_replace_published_rates() {
        let flight = HashMap::from([("first class".to_string(), 3.0)]);
        let hotel = HashMap::from([("1-star".to_string(), 0.8)]);
        let table = PricingTable::with_overrides(&flight, &hotel).unwrap();
        assert_eq!(table.flight_multiplier(FlightClass::FirstClass), Some(3.0));
        assert_eq!(table.hotel_multiplier(HotelTier::OneStar), Some(0.8));
        // untouched entries keep the published rate
        assert_eq!(table.flight_multiplier(FlightClass::Economy), Some(1.0));
        assert_eq!(table.hotel_multiplier(HotelTier::Customized), None);
    }

    #[rstest]
    #[case("economyy", 1.0)]
    #[case("economy", -0.5)]
    #[case("economy", f64::NAN)]
    fn test_bad_overrides_are_config_errors(#[case] key: &str, #[case] multiplier: f64) {
        let flight = HashMap::from([(key.to_string(), multiplier)]);
        let result = PricingTable::with_overrides(&flight, &HashMap::new());
        assert!(matches!(result, Err(TravelEaseError::Config { .. })));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_to_cents(2.344), 2.34);
        assert_eq!(round_to_cents(2.346), 2.35);
        assert_eq!(round_to_cents(9720.000000000002), 9720.0);
    }
}
