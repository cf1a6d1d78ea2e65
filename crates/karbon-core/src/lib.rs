pub mod factors;
pub mod footprint;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- Types (matching the form frontend's records) ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransportMode {
    #[serde(rename = "Metro/Public Bus")]
    Metro,
    #[serde(rename = "Two Wheeler (Petrol)")]
    TwoWheeler,
    #[serde(rename = "EV Two Wheeler")]
    EvTwoWheeler,
    #[serde(rename = "Car (Petrol)")]
    CarPetrol,
    #[serde(rename = "Car (Diesel)")]
    CarDiesel,
    #[serde(rename = "Car (EV)")]
    CarEv,
    #[serde(rename = "Auto Rickshaw/CNG")]
    AutoRickshaw,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Metro => "Metro/Public Bus",
            TransportMode::TwoWheeler => "Two Wheeler (Petrol)",
            TransportMode::EvTwoWheeler => "EV Two Wheeler",
            TransportMode::CarPetrol => "Car (Petrol)",
            TransportMode::CarDiesel => "Car (Diesel)",
            TransportMode::CarEv => "Car (EV)",
            TransportMode::AutoRickshaw => "Auto Rickshaw/CNG",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietType {
    Vegan,
    Vegetarian,
    Eggetarian,
    #[serde(rename = "Occasional Non-Veg")]
    NonVegLow,
    #[serde(rename = "Regular Non-Veg")]
    NonVegHigh,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegan => "Vegan",
            DietType::Vegetarian => "Vegetarian",
            DietType::Eggetarian => "Eggetarian",
            DietType::NonVegLow => "Occasional Non-Veg",
            DietType::NonVegHigh => "Regular Non-Veg",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WasteDisposal {
    #[serde(rename = "All to Landfill/Dustbin")]
    Landfill,
    #[serde(rename = "Partially Recycled")]
    PartialRecycle,
    #[serde(rename = "Compost & Recycle (Eco-friendly)")]
    CompostRecycle,
}

impl WasteDisposal {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteDisposal::Landfill => "All to Landfill/Dustbin",
            WasteDisposal::PartialRecycle => "Partially Recycled",
            WasteDisposal::CompostRecycle => "Compost & Recycle (Eco-friendly)",
        }
    }
}

/// One calculation cycle's worth of self-reported consumption. Built by the
/// form frontend and handed over fully populated; no field validation
/// happens on this side of the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionData {
    pub is_household: bool,
    /// Clamped to 1..20 by the form. A zero here makes the shared-resource
    /// division degenerate; that is the caller's bug, not ours.
    pub household_members: u32,

    /// Monthly grid units (kWh).
    pub electricity_kwh: f64,
    /// Monthly LPG/PNG in kg.
    pub gas_consumption_kg: f64,

    /// Daily round trip in km.
    pub commute_distance_km: f64,
    pub transport_mode: TransportMode,
    /// Annual hours in the air.
    pub flights_domestic_hours: f64,
    pub flights_intl_hours: f64,
    /// Annual rail travel in km.
    pub rail_travel_km: f64,

    pub diet_type: DietType,
    /// 0..50, as a percentage.
    pub food_waste_percentage: f64,

    pub waste_kgs_per_day: f64,
    pub waste_disposal: WasteDisposal,

    /// Monthly INR.
    pub clothing_spending: f64,
    /// Annual INR. The form label still says monthly; the arithmetic has
    /// always treated it as annual, so we keep that.
    pub electronics_spending: f64,
}

/// Annual kg CO₂e per person, by category. Always a per-person figure:
/// household mode divides shared resources during computation and the
/// display layer multiplies back up, never the other way around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmissionBreakdown {
    pub energy: f64,
    pub transportation: f64,
    pub food: f64,
    pub waste: f64,
    pub lifestyle: f64,
    pub total: f64,
    pub is_household: bool,
    pub household_members: u32,
}

impl EmissionBreakdown {
    /// Whole-household figure for display. The stored totals stay per person.
    pub fn household_total(&self) -> f64 {
        if self.is_household {
            self.total * self.household_members as f64
        } else {
            self.total
        }
    }

    /// Headline figure in tons.
    pub fn total_tons(&self) -> f64 {
        self.total / 1000.0
    }
}

// --- AI Settings ---

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

/// Resolve the global config directory (~/.karbon/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".karbon")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = config_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_form_strings() {
        let json = serde_json::to_string(&TransportMode::Metro).unwrap();
        assert_eq!(json, "\"Metro/Public Bus\"");
        let json = serde_json::to_string(&DietType::NonVegLow).unwrap();
        assert_eq!(json, "\"Occasional Non-Veg\"");
        let json = serde_json::to_string(&WasteDisposal::CompostRecycle).unwrap();
        assert_eq!(json, "\"Compost & Recycle (Eco-friendly)\"");
    }

    #[test]
    fn consumption_data_round_trips_camel_case() {
        let data = ConsumptionData {
            is_household: true,
            household_members: 4,
            electricity_kwh: 150.0,
            gas_consumption_kg: 14.2,
            commute_distance_km: 10.0,
            transport_mode: TransportMode::CarPetrol,
            flights_domestic_hours: 2.0,
            flights_intl_hours: 0.0,
            rail_travel_km: 500.0,
            diet_type: DietType::Vegetarian,
            food_waste_percentage: 20.0,
            waste_kgs_per_day: 0.5,
            waste_disposal: WasteDisposal::PartialRecycle,
            clothing_spending: 2000.0,
            electronics_spending: 30000.0,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"isHousehold\":true"));
        assert!(json.contains("\"electricityKwh\":150.0"));
        let back: ConsumptionData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn household_total_multiplies_back_up() {
        let breakdown = EmissionBreakdown {
            energy: 100.0,
            transportation: 200.0,
            food: 300.0,
            waste: 50.0,
            lifestyle: 150.0,
            total: 800.0,
            is_household: true,
            household_members: 4,
        };
        assert_eq!(breakdown.household_total(), 3200.0);
        assert_eq!(breakdown.total_tons(), 0.8);

        let individual = EmissionBreakdown {
            is_household: false,
            household_members: 1,
            ..breakdown
        };
        assert_eq!(individual.household_total(), 800.0);
    }

    #[test]
    fn ai_configured_requires_key_except_ollama() {
        let mut s = AiSettings {
            provider: "google".into(),
            api_key: String::new(),
            model: "gemini-3-flash-preview".into(),
        };
        assert!(!ai_configured(&s));
        s.api_key = "k".into();
        assert!(ai_configured(&s));
        s.provider = "ollama".into();
        s.api_key = String::new();
        assert!(ai_configured(&s));
        s.model = String::new();
        assert!(!ai_configured(&s));
    }
}
