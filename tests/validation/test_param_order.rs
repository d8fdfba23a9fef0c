// Tests for B004 parameter shape and ordering.

use crate::common::{decl, formal, spec, spec_with_default};
use bindlint_core::types::CallableContract;
use bindlint_validate::engine::Validator;

fn contract_with(params: Vec<bindlint_core::types::ParamSpec>) -> CallableContract {
    CallableContract {
        params,
        doc: "Takes parameters.".to_string(),
        ..Default::default()
    }
}

#[test]
fn unreachable_parameter_fires_b004_regardless_of_position() {
    let validator = Validator::new();
    for params in [
        vec![spec("ghost", false, false)],
        vec![spec("a", true, false), spec("ghost", false, false)],
        vec![spec("ghost", false, false), spec("a", true, false)],
    ] {
        let n = params.len();
        let physical = (0..n).map(|i| formal(&format!("p{i}"), "runtime.Object")).collect();
        let diagnostics = validator.validate(&decl("f", contract_with(params), physical));
        assert!(
            diagnostics
                .iter()
                .any(|d| d.code == "B004" && d.category == "param_not_invocable"),
            "expected param_not_invocable, got {:?}",
            diagnostics
        );
    }
}

#[test]
fn positional_moved_after_non_positional_fires_then_passes_when_reordered() {
    let validator = Validator::new();

    let bad = contract_with(vec![spec("kw", false, true), spec("pos", true, false)]);
    let physical = vec![
        formal("kw", "runtime.Object"),
        formal("pos", "runtime.Object"),
    ];
    let diagnostics = validator.validate(&decl("f", bad, physical.clone()));
    assert!(diagnostics
        .iter()
        .any(|d| d.category == "positional_after_non_positional"));

    let good = contract_with(vec![spec("pos", true, false), spec("kw", false, true)]);
    assert!(validator.validate(&decl("f", good, physical)).is_empty());
}

#[test]
fn mandatory_after_optional_fires_then_passes_when_swapped() {
    let validator = Validator::new();
    let physical = vec![
        formal("a", "runtime.Object"),
        formal("b", "runtime.Object"),
    ];

    let bad = contract_with(vec![
        spec_with_default("opt", true, false, "1"),
        spec("req", true, false),
    ]);
    let diagnostics = validator.validate(&decl("f", bad, physical.clone()));
    assert!(diagnostics
        .iter()
        .any(|d| d.category == "mandatory_after_optional"));

    let good = contract_with(vec![
        spec("req", true, false),
        spec_with_default("opt", true, false, "1"),
    ]);
    assert!(validator.validate(&decl("f", good, physical)).is_empty());
}

#[test]
fn none_default_requires_noneable() {
    let validator = Validator::new();
    let physical = vec![formal("opt", "runtime.Object")];

    let bad = contract_with(vec![spec_with_default("opt", true, true, "None")]);
    let diagnostics = validator.validate(&decl("f", bad, physical.clone()));
    assert!(diagnostics
        .iter()
        .any(|d| d.category == "none_default_not_noneable"));

    let mut fixed = spec_with_default("opt", true, true, "None");
    fixed.noneable = true;
    let good = contract_with(vec![fixed]);
    assert!(validator.validate(&decl("f", good, physical)).is_empty());
}

#[test]
fn shape_diagnostic_names_the_offending_parameter() {
    let validator = Validator::new();
    let bad = contract_with(vec![spec("kw", false, true), spec("stray", true, false)]);
    let physical = vec![
        formal("kw", "runtime.Object"),
        formal("stray", "runtime.Object"),
    ];
    let diagnostics = validator.validate(&decl("f", bad, physical));
    let shape = diagnostics.iter().find(|d| d.code == "B004").unwrap();
    assert!(shape.message.contains("'stray'"));
}
