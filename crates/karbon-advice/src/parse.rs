use crate::AiAdvice;

/// Parse raw LLM output into an AiAdvice. Returns None on parse failure
/// (graceful degradation; the caller substitutes the fallback). A
/// successful parse is passed through verbatim. Schema conformance beyond
/// what serde enforces is the service's responsibility.
pub fn parse_llm_output(raw: &str) -> Option<AiAdvice> {
    let json_str = extract_json_object(raw)?;
    serde_json::from_str(&json_str).ok()
}

/// Extract the outermost JSON object from raw LLM output. Tolerates
/// markdown fences and prose around the JSON.
fn extract_json_object(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Impact;

    const CLEAN: &str = r#"{
        "summary": "You are below the national average.",
        "recommendations": [
            {"title": "Go solar", "description": "Rooftop panels under PM-KUSUM.", "impact": "High"},
            {"title": "Compost", "description": "Divert wet waste.", "impact": "Medium"}
        ]
    }"#;

    #[test]
    fn parses_clean_json() {
        let advice = parse_llm_output(CLEAN).unwrap();
        assert_eq!(advice.recommendations.len(), 2);
        assert_eq!(advice.recommendations[0].impact, Impact::High);
        assert_eq!(advice.recommendations[1].title, "Compost");
    }

    #[test]
    fn parses_json_inside_markdown_fences() {
        let fenced = format!("```json\n{CLEAN}\n```");
        let advice = parse_llm_output(&fenced).unwrap();
        assert_eq!(advice.summary, "You are below the national average.");
    }

    #[test]
    fn parses_json_wrapped_in_prose() {
        let wrapped = format!("Here is your advice:\n{CLEAN}\nHope that helps!");
        assert!(parse_llm_output(&wrapped).is_some());
    }

    #[test]
    fn rejects_output_without_json() {
        assert!(parse_llm_output("").is_none());
        assert!(parse_llm_output("I cannot help with that.").is_none());
        assert!(parse_llm_output("}{").is_none());
    }

    #[test]
    fn rejects_schema_violations() {
        // Unknown impact level fails deserialization and degrades to None.
        let bad = r#"{"summary": "s", "recommendations": [
            {"title": "t", "description": "d", "impact": "Colossal"}
        ]}"#;
        assert!(parse_llm_output(bad).is_none());
        // Missing required field.
        let missing = r#"{"recommendations": []}"#;
        assert!(parse_llm_output(missing).is_none());
    }
}
