// Tests for B005 parameter count: physical list vs declared + injected.

use crate::common::{decl, formal, spec, spec_with_default};
use bindlint_core::types::CallableContract;
use bindlint_validate::engine::Validator;

fn two_param_location_contract() -> CallableContract {
    CallableContract {
        params: vec![
            spec("p1", true, false),
            spec_with_default("p2", true, false, "1"),
        ],
        mandatory_positionals: None,
        use_caller_location: true,
        doc: "Takes two parameters and the caller span.".to_string(),
        ..Default::default()
    }
}

#[test]
fn declared_plus_injected_count_passes() {
    let validator = Validator::new();
    let d = decl(
        "f",
        two_param_location_contract(),
        vec![
            formal("p1", "runtime.Object"),
            formal("p2", "runtime.Object"),
            formal("loc", "runtime.CallerSpan"),
        ],
    );
    assert!(validator.validate(&d).is_empty());
}

#[test]
fn missing_injected_parameter_fires_b005() {
    let validator = Validator::new();
    let d = decl(
        "f",
        two_param_location_contract(),
        vec![formal("p1", "runtime.Object"), formal("p2", "runtime.Object")],
    );
    let diagnostics = validator.validate(&d);
    // The count family reports the mismatch; the injected-type walk still
    // runs and flags the slot where the caller span should have been.
    assert!(diagnostics
        .iter()
        .any(|d| d.code == "B005" && d.category == "param_count"));
}

#[test]
fn struct_field_with_injected_context_passes_with_exact_arity() {
    let validator = Validator::new();
    let contract = CallableContract {
        struct_field: true,
        use_execution_context: true,
        doc: "A computed property.".to_string(),
        ..Default::default()
    };
    let d = decl("prop", contract, vec![formal("ctx", "runtime.EvalContext")]);
    assert!(validator.validate(&d).is_empty());
}

#[test]
fn struct_field_missing_injected_context_fires_b005() {
    let validator = Validator::new();
    let contract = CallableContract {
        struct_field: true,
        use_execution_context: true,
        doc: "A computed property.".to_string(),
        ..Default::default()
    };
    let d = decl("prop", contract, vec![]);
    let diagnostics = validator.validate(&d);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "B005");
    assert_eq!(diagnostics[0].category, "struct_field_param_count");
}

#[test]
fn contract_that_declares_nothing_accepts_any_arity() {
    let validator = Validator::new();
    let contract = CallableContract {
        doc: "Legacy callable with an undeclared parameter list.".to_string(),
        ..Default::default()
    };
    let d = decl(
        "f",
        contract,
        vec![formal("a", "runtime.Object"), formal("b", "runtime.Object")],
    );
    assert!(validator.validate(&d).is_empty());
}

#[test]
fn legacy_mandatory_positionals_add_to_declared_count() {
    let validator = Validator::new();
    let contract = CallableContract {
        mandatory_positionals: Some(2),
        use_execution_context: true,
        doc: "Legacy positional-count contract.".to_string(),
        ..Default::default()
    };
    let d = decl(
        "f",
        contract.clone(),
        vec![
            formal("a", "runtime.Object"),
            formal("b", "runtime.Object"),
            formal("ctx", "runtime.EvalContext"),
        ],
    );
    assert!(validator.validate(&d).is_empty());

    let short = decl("f", contract, vec![formal("a", "runtime.Object")]);
    let diagnostics = validator.validate(&short);
    assert!(diagnostics.iter().any(|d| d.code == "B005"));
}
