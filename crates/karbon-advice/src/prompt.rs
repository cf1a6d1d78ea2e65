use llm::chat::StructuredOutputFormat;

use karbon_core::factors::INDIAN_AVERAGE_FOOTPRINT;
use karbon_core::{ConsumptionData, EmissionBreakdown};

/// Render the consumption profile and computed breakdown as compact text for
/// LLM consumption. Breakdown figures are rounded to whole kg here; the
/// underlying breakdown keeps full precision.
pub fn serialize_profile(data: &ConsumptionData, breakdown: &EmissionBreakdown) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str("USER PROFILE & CONSUMPTION DATA:\n");
    out.push_str(&format!(
        "1. Energy: consumes {} units (kWh) of electricity and {} kg of LPG/PNG monthly.\n",
        data.electricity_kwh, data.gas_consumption_kg
    ));
    out.push_str(&format!(
        "2. Transport: primary mode is {} with a daily commute of {} km.\n",
        data.transport_mode.as_str(),
        data.commute_distance_km
    ));
    out.push_str(&format!(
        "   - Annual rail travel: {} km.\n",
        data.rail_travel_km
    ));
    out.push_str(&format!(
        "   - Annual flights: {}h domestic, {}h international.\n",
        data.flights_domestic_hours, data.flights_intl_hours
    ));
    out.push_str(&format!(
        "3. Food: follows a {} diet with {}% reported food waste.\n",
        data.diet_type.as_str(),
        data.food_waste_percentage
    ));
    out.push_str(&format!(
        "4. Waste: generates {} kg trash daily, disposed via: {}.\n",
        data.waste_kgs_per_day,
        data.waste_disposal.as_str()
    ));
    out.push_str(&format!(
        "5. Lifestyle: spends ₹{} monthly on clothes and ₹{} annually on electronics.\n",
        data.clothing_spending, data.electronics_spending
    ));

    if breakdown.is_household {
        out.push_str(&format!(
            "Reported for a household of {} members; figures below are the per-person share.\n",
            breakdown.household_members
        ));
    }

    out.push_str("\nCALCULATED EMISSIONS (kg CO₂e/year):\n");
    out.push_str(&format!("- Total: {:.0} kg\n", breakdown.total));
    out.push_str(&format!("- Energy: {:.0} kg\n", breakdown.energy));
    out.push_str(&format!(
        "- Transportation: {:.0} kg\n",
        breakdown.transportation
    ));
    out.push_str(&format!("- Food habits: {:.0} kg\n", breakdown.food));
    out.push_str(&format!("- Waste management: {:.0} kg\n", breakdown.waste));
    out.push_str(&format!("- Lifestyle: {:.0} kg\n", breakdown.lifestyle));

    out
}

pub fn system_prompt() -> String {
    format!(
        "Act as a professional Indian sustainability consultant and senior climate scientist. \
Analyze the annual carbon footprint data you are given for an individual living in India.\n\n\
- Provide a short, encouraging summary of their current impact compared to the Indian \
average of ~{INDIAN_AVERAGE_FOOTPRINT:.0} kg CO₂e.\n\
- Give 4 highly specific, actionable recommendations.\n\
- Mention specific Indian context: BEE star labels, the PM-KUSUM solar scheme, FAME-II \
for EVs, IRCTC sustainability, local composting, or traditional low-waste practices.\n\
- Be realistic for the Indian socioeconomic context.\n\n\
Output ONLY a JSON object, nothing else. \
Shape: {{\"summary\":\"<2-3 sentence overview>\",\"recommendations\":[{{\"title\":\"<short>\",\
\"description\":\"<actionable>\",\"impact\":\"High\"|\"Medium\"|\"Low\"}}]}}."
    )
}

/// JSON schema for the advice response, for providers with structured-output
/// support. Providers without it still get the shape via the system prompt.
pub fn output_schema() -> Option<StructuredOutputFormat> {
    serde_json::from_value(serde_json::json!({
        "name": "AiAdvice",
        "schema": schemars::schema_for!(crate::AiAdvice),
        "strict": true,
    }))
    .ok()
}

pub fn user_message(data: &ConsumptionData, breakdown: &EmissionBreakdown) -> String {
    serialize_profile(data, breakdown)
}
