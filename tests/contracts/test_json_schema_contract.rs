/// Contract tests for JSON schema compliance.
///
/// These tests verify that the serialized output from CheckResult and
/// ExplainResult matches the JSON schemas defined in tests/schemas/.
use crate::common::{decl, documented, spec};
use bindlint_core::types::CallableContract;
use bindlint_validate::catalog;
use bindlint_validate::engine::Validator;
use bindlint_validate::types::ExplainResult;

fn validate_against_schema(json_value: &serde_json::Value, schema_str: &str) {
    let schema: serde_json::Value = serde_json::from_str(schema_str).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("Failed to compile JSON schema");
    let errors: Vec<_> = validator.iter_errors(json_value).collect();
    if !errors.is_empty() {
        let msgs: Vec<String> = errors
            .iter()
            .map(|e| format!("  - {} (at {})", e, e.instance_path))
            .collect();
        panic!("JSON schema validation failed:\n{}", msgs.join("\n"));
    }
}

// ---------------------------------------------------------------------------
// Check output schema
// ---------------------------------------------------------------------------

#[test]
fn clean_check_output_matches_schema() {
    let validator = Validator::new();
    let result = validator.check(
        &[decl("f", documented(), vec![])],
        vec!["bindings.json".to_string()],
    );

    let json_value = serde_json::to_value(&result).unwrap();
    let schema_str = include_str!("../schemas/check_output.schema.json");
    validate_against_schema(&json_value, schema_str);
}

#[test]
fn failing_check_output_matches_schema() {
    let validator = Validator::new();
    let broken = decl(
        "wrong_arity",
        CallableContract {
            params: vec![spec("x", true, false)],
            ..Default::default()
        },
        vec![],
    );
    let result = validator.check(&[broken], vec!["bindings.json".to_string()]);
    assert_eq!(result.status, "error");

    let json_value = serde_json::to_value(&result).unwrap();
    let schema_str = include_str!("../schemas/check_output.schema.json");
    validate_against_schema(&json_value, schema_str);
}

#[test]
fn suppressed_check_output_matches_schema() {
    let mut validator = Validator::new();
    validator.suppress("B002");
    let result = validator.check(
        &[decl("no_doc", CallableContract::default(), vec![])],
        vec![],
    );

    let json_value = serde_json::to_value(&result).unwrap();
    let schema_str = include_str!("../schemas/check_output.schema.json");
    validate_against_schema(&json_value, schema_str);
}

// ---------------------------------------------------------------------------
// Explain output schema
// ---------------------------------------------------------------------------

#[test]
fn explain_output_matches_schema_for_every_rule() {
    for doc in &catalog::RULES {
        let result = ExplainResult {
            version: "0.2.0".to_string(),
            command: "explain".to_string(),
            code: doc.code.to_string(),
            title: doc.title.to_string(),
            summary: doc.summary.to_string(),
            details: doc.details.iter().map(|d| d.to_string()).collect(),
            fix: doc.fix.to_string(),
        };
        let json_value = serde_json::to_value(&result).unwrap();
        let schema_str = include_str!("../schemas/explain_output.schema.json");
        validate_against_schema(&json_value, schema_str);
    }
}
