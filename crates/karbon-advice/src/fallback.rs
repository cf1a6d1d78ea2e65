use karbon_core::{ConsumptionData, EmissionBreakdown};

use crate::{AiAdvice, Impact, Recommendation};

/// Deterministic advice derived from the inputs alone. Terminal error
/// boundary for the advisor: must always succeed.
pub fn static_advice(data: &ConsumptionData, breakdown: &EmissionBreakdown) -> AiAdvice {
    AiAdvice {
        summary: format!(
            "Your yearly footprint is estimated at {:.2} tons of CO₂e. \
This is based on your lifestyle patterns in India.",
            breakdown.total_tons()
        ),
        recommendations: vec![
            Recommendation {
                title: "Optimize Household Energy".to_string(),
                description: format!(
                    "With {} units of monthly usage, consider BEE 5-star rated \
appliances to lower energy emissions.",
                    data.electricity_kwh
                ),
                impact: Impact::High,
            },
            Recommendation {
                title: "Eco-friendly Commute".to_string(),
                description: format!(
                    "Since you commute {} km via {}, consider EV options under FAME-II.",
                    data.commute_distance_km,
                    data.transport_mode.as_str()
                ),
                impact: Impact::High,
            },
        ],
    }
}
