//! Serde roundtrip and JsonSchema validation tests for the persisted shapes.

use chrono::Utc;
use schemars::schema_for;
use vera_core::entities::*;
use vera_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    assessment_roundtrip,
    Assessment,
    Assessment {
        confidence: 74,
        verdict: Verdict::Verified,
        sources: vec![
            "Reuters".into(),
            "Associated Press".into(),
            "Encyclopaedia Britannica".into(),
        ],
        sentiment: Sentiment::Neutral,
        sentiment_score: 0,
        ai_score: 81,
        ai_insights: vec!["Factual claims detected requiring verification".into()],
    }
);

roundtrip_and_validate!(
    analysis_result_roundtrip,
    AnalysisResult,
    AnalysisResult {
        id: "1767225600000".into(),
        text: "Maybe it will rain...".into(),
        confidence: 33,
        verdict: Verdict::Warning,
        sources: vec!["Social media posts".into(), "Personal blogs".into()],
        sentiment: Sentiment::Negative,
        sentiment_score: -2,
        ai_score: 40,
        ai_insights: vec![
            "Text too short for full analysis".into(),
            "Text contains subjective assessments".into(),
        ],
        timestamp: Utc::now(),
    }
);

roundtrip_and_validate!(
    insufficient_data_result_roundtrip,
    AnalysisResult,
    AnalysisResult {
        id: "1767225600001".into(),
        text: "hello".into(),
        confidence: 40,
        verdict: Verdict::Warning,
        sources: vec!["Insufficient Data".into()],
        sentiment: Sentiment::Neutral,
        sentiment_score: 0,
        ai_score: 40,
        ai_insights: vec!["Text too short for full analysis".into()],
        timestamp: Utc::now(),
    }
);

#[test]
fn result_without_timestamp_is_rejected() {
    let json = r#"{"id":"1","text":"t","confidence":1,"verdict":"warning","sources":[],
        "sentiment":"neutral","sentimentScore":0,"aiScore":1,"aiInsights":["x"]}"#;
    assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
}
