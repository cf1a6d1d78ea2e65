//! Emission factors (kg CO₂e per unit).
//! Sources: CEA India grid averages, IPCC, Indian Railways sustainability reports.

use std::collections::HashMap;

use crate::{DietType, TransportMode, WasteDisposal};

/// Annual diet base applied when a diet has no entry in the table.
pub const DIET_BASE_DEFAULT: f64 = 1400.0;

/// Per-kg factor applied when a disposal method has no entry in the table.
pub const WASTE_FACTOR_DEFAULT: f64 = 0.6;

/// kg CO₂e per capita per year.
pub const INDIAN_AVERAGE_FOOTPRINT: f64 = 1900.0;
pub const GLOBAL_AVERAGE_FOOTPRINT: f64 = 4700.0;

/// Process-wide read-only coefficient table. Constructed once (usually via
/// `Default`) and passed by reference into the footprint math.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    /// Per kWh. India's grid is coal-heavy.
    pub electricity: f64,
    /// Per kg of LPG/PNG burned.
    pub gas_per_kg: f64,
    /// Per km, keyed by mode.
    pub transport: HashMap<TransportMode, f64>,
    /// Per km, India average for electrified rail.
    pub rail: f64,
    /// Per hour in the air.
    pub flight_domestic: f64,
    pub flight_intl: f64,
    /// Annual base in kg CO₂e, keyed by diet.
    pub diet: HashMap<DietType, f64>,
    /// Per kg of trash, keyed by disposal method.
    pub waste: HashMap<WasteDisposal, f64>,
    /// Per 1000 INR spent.
    pub clothing: f64,
    pub electronics: f64,
}

impl EmissionFactors {
    /// Look up a transport mode; an unmapped mode counts as zero-emission
    /// rather than an error.
    pub fn transport_factor(&self, mode: TransportMode) -> f64 {
        self.transport.get(&mode).copied().unwrap_or(0.0)
    }

    /// Look up a diet's annual base; unmapped diets fall back to the
    /// vegetarian-level default.
    pub fn diet_base(&self, diet: DietType) -> f64 {
        self.diet.get(&diet).copied().unwrap_or(DIET_BASE_DEFAULT)
    }

    /// Look up a disposal method; unmapped methods fall back to the
    /// landfill-level default.
    pub fn waste_factor(&self, disposal: WasteDisposal) -> f64 {
        self.waste
            .get(&disposal)
            .copied()
            .unwrap_or(WASTE_FACTOR_DEFAULT)
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EmissionFactors {
            electricity: 0.82,
            gas_per_kg: 3.0,
            transport: HashMap::from([
                (TransportMode::Metro, 0.02),
                (TransportMode::TwoWheeler, 0.08),
                (TransportMode::EvTwoWheeler, 0.025),
                (TransportMode::CarPetrol, 0.19),
                (TransportMode::CarDiesel, 0.17),
                (TransportMode::CarEv, 0.05),
                (TransportMode::AutoRickshaw, 0.09),
            ]),
            rail: 0.008,
            flight_domestic: 150.0,
            flight_intl: 200.0,
            diet: HashMap::from([
                (DietType::Vegan, 1000.0),
                (DietType::Vegetarian, 1400.0),
                (DietType::Eggetarian, 1600.0),
                (DietType::NonVegLow, 2200.0),
                (DietType::NonVegHigh, 3500.0),
            ]),
            waste: HashMap::from([
                (WasteDisposal::Landfill, 0.6),
                (WasteDisposal::PartialRecycle, 0.3),
                (WasteDisposal::CompostRecycle, 0.05),
            ]),
            clothing: 12.0,
            electronics: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_variant() {
        let f = EmissionFactors::default();
        assert_eq!(f.transport.len(), 7);
        assert_eq!(f.diet.len(), 5);
        assert_eq!(f.waste.len(), 3);
        assert_eq!(f.transport_factor(TransportMode::CarPetrol), 0.19);
        assert_eq!(f.diet_base(DietType::Vegan), 1000.0);
        assert_eq!(f.waste_factor(WasteDisposal::CompostRecycle), 0.05);
    }

    #[test]
    fn unmapped_keys_degrade_silently() {
        let sparse = EmissionFactors {
            transport: HashMap::new(),
            diet: HashMap::new(),
            waste: HashMap::new(),
            ..EmissionFactors::default()
        };
        assert_eq!(sparse.transport_factor(TransportMode::Metro), 0.0);
        assert_eq!(sparse.diet_base(DietType::NonVegHigh), DIET_BASE_DEFAULT);
        assert_eq!(
            sparse.waste_factor(WasteDisposal::PartialRecycle),
            WASTE_FACTOR_DEFAULT
        );
    }
}
