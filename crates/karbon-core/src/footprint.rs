//! Annual footprint math. One pure function, no validation: garbage in,
//! garbage out, and out-of-range inputs (e.g. zero household members)
//! produce degenerate numbers instead of errors.

use crate::factors::EmissionFactors;
use crate::{ConsumptionData, EmissionBreakdown};

/// Commuting days per year assumed for the daily round trip.
const COMMUTE_DAYS_PER_YEAR: f64 = 300.0;

/// Compute the annual per-person emission breakdown for one consumption
/// record. Deterministic and side-effect-free; the same inputs always give
/// the same breakdown.
pub fn compute(data: &ConsumptionData, factors: &EmissionFactors) -> EmissionBreakdown {
    // Household mode divides shared resources by member count to get an
    // individual share. The form guarantees members ≥ 1.
    let scale = if data.is_household {
        data.household_members as f64
    } else {
        1.0
    };

    // 1. Energy use: shared, divided by scale. Inputs are monthly totals.
    let energy = (data.electricity_kwh * 12.0 * factors.electricity
        + data.gas_consumption_kg * 12.0 * factors.gas_per_kg)
        / scale;

    // 2. Transportation: individual, never scaled.
    let transportation = data.commute_distance_km
        * COMMUTE_DAYS_PER_YEAR
        * factors.transport_factor(data.transport_mode)
        + data.flights_domestic_hours * factors.flight_domestic
        + data.flights_intl_hours * factors.flight_intl
        + data.rail_travel_km * factors.rail;

    // 3. Food habits: individual. Waste percentage inflates the diet base.
    let food = factors.diet_base(data.diet_type) * (1.0 + data.food_waste_percentage / 100.0);

    // 4. Waste management: shared, divided by scale.
    let waste =
        data.waste_kgs_per_day * 365.0 * factors.waste_factor(data.waste_disposal) / scale;

    // 5. Lifestyle: individual. Clothing is monthly (×12), electronics is yearly.
    let lifestyle = (data.clothing_spending * 12.0 / 1000.0) * factors.clothing
        + (data.electronics_spending / 1000.0) * factors.electronics;

    let total = energy + transportation + food + waste + lifestyle;

    EmissionBreakdown {
        energy,
        transportation,
        food,
        waste,
        lifestyle,
        total,
        is_household: data.is_household,
        household_members: data.household_members,
    }
}
