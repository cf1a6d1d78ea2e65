pub mod engine;
mod fallback;
mod parse;
mod prompt;

use serde::{Deserialize, Serialize};

use karbon_core::{AiSettings, ConsumptionData, EmissionBreakdown};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiAdvice {
    /// 2-3 sentence overview of the user's footprint.
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema)]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// Ask the configured LLM for reduction advice on a computed footprint.
/// Never fails: any transport or parse problem degrades to a canned
/// response derived from the inputs. One attempt per call, no retry, no
/// caching across calls.
pub async fn get_advice(
    data: &ConsumptionData,
    breakdown: &EmissionBreakdown,
    settings: &AiSettings,
) -> AiAdvice {
    let system = prompt::system_prompt();
    let user_msg = prompt::user_message(data, breakdown);

    eprintln!("[karbon-advice] sending to {} ({})", settings.provider, settings.model);

    match engine::generate(settings, &system, &user_msg, prompt::output_schema()).await {
        Ok(raw) => match parse::parse_llm_output(&raw) {
            Some(advice) => {
                eprintln!(
                    "[karbon-advice] parsed {} recommendations",
                    advice.recommendations.len()
                );
                advice
            }
            None => {
                eprintln!("[karbon-advice] unparseable LLM output, using fallback");
                fallback::static_advice(data, breakdown)
            }
        },
        Err(e) => {
            eprintln!("[karbon-advice] generate error: {}", e);
            fallback::static_advice(data, breakdown)
        }
    }
}
