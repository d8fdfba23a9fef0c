//! The six contract checks, grouped in five rule families.
//!
//! Each family is a function returning `Result<(), RuleViolation>`: the first
//! violation found short-circuits the rest of that family, but never the
//! following families. The engine converts each `Err` into one diagnostic.

use bindlint_core::types::{
    CallableContract, CallableDecl, InjectedSlot, InjectedTypes, TypeRef,
};

/// Injected slots a struct-field callable may not request. A struct field is
/// read as a property access: there is no call expression, so nothing can
/// supply argument captures, a caller span, or a call-site node. Evaluation
/// still happens inside an execution context with semantics, so those two
/// slots stay legal.
pub const STRUCT_FIELD_CONFLICTS: [InjectedSlot; 4] = [
    InjectedSlot::ExtraPositionals,
    InjectedSlot::ExtraKeywords,
    InjectedSlot::CallerLocation,
    InjectedSlot::CallSiteNode,
];

/// One rule violation, prior to conversion into a reportable diagnostic.
/// Each variant maps to exactly one diagnostic code and category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("callable must be public to be exposed to the scripting layer")]
    NotPublic,

    #[error("the 'doc' string must be non-empty if 'documented' is true")]
    Undocumented,

    #[error("struct-field callables may not also request {flags}")]
    StructFieldConflict { flags: String },

    #[error("parameter '{param}' must be either positional or named")]
    NotPositionalOrNamed { param: String },

    #[error(
        "parameter '{param}' has a 'None' default value but is not noneable \
         (if this is intended as a mandatory parameter, leave default_value empty)"
    )]
    NoneDefaultNotNoneable { param: String },

    #[error("parameter '{param}' has both a type and allowed_types specified; only one may be specified")]
    TypeConflict { param: String },

    #[error("positional parameter '{param}' is specified after one or more non-positional parameters")]
    PositionalAfterNonPositional { param: String },

    #[error("positional-only parameter '{param}' is specified after one or more named parameters")]
    PositionalOnlyAfterNamed { param: String },

    #[error(
        "positional parameter '{param}' has no default value but is specified \
         after one or more positional parameters with default values"
    )]
    MandatoryAfterOptional { param: String },

    #[error(
        "callable has {actual} physical parameters, but the contract declared \
         {declared} logical parameters and {injected} injected parameters"
    )]
    ParamCountMismatch {
        actual: usize,
        declared: usize,
        injected: usize,
    },

    #[error(
        "struct-field callables take no user-supplied parameters; expected \
         {injected} injected parameters but found {actual} total"
    )]
    StructFieldParamCount { actual: usize, injected: usize },

    #[error("expected physical parameter {index} to have type {expected}, matching {flag}, but found {actual}")]
    InjectedTypeMismatch {
        index: usize,
        flag: &'static str,
        expected: String,
        actual: String,
    },
}

impl RuleViolation {
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::NotPublic => "B001",
            RuleViolation::Undocumented => "B002",
            RuleViolation::StructFieldConflict { .. } => "B003",
            RuleViolation::NotPositionalOrNamed { .. }
            | RuleViolation::NoneDefaultNotNoneable { .. }
            | RuleViolation::TypeConflict { .. }
            | RuleViolation::PositionalAfterNonPositional { .. }
            | RuleViolation::PositionalOnlyAfterNamed { .. }
            | RuleViolation::MandatoryAfterOptional { .. } => "B004",
            RuleViolation::ParamCountMismatch { .. }
            | RuleViolation::StructFieldParamCount { .. } => "B005",
            RuleViolation::InjectedTypeMismatch { .. } => "B006",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            RuleViolation::NotPublic => "not_public",
            RuleViolation::Undocumented => "undocumented",
            RuleViolation::StructFieldConflict { .. } => "struct_field_conflict",
            RuleViolation::NotPositionalOrNamed { .. } => "param_not_invocable",
            RuleViolation::NoneDefaultNotNoneable { .. } => "none_default_not_noneable",
            RuleViolation::TypeConflict { .. } => "type_conflict",
            RuleViolation::PositionalAfterNonPositional { .. } => "positional_after_non_positional",
            RuleViolation::PositionalOnlyAfterNamed { .. } => "positional_only_after_named",
            RuleViolation::MandatoryAfterOptional { .. } => "mandatory_after_optional",
            RuleViolation::ParamCountMismatch { .. } => "param_count",
            RuleViolation::StructFieldParamCount { .. } => "struct_field_param_count",
            RuleViolation::InjectedTypeMismatch { .. } => "injected_type",
        }
    }

    pub fn fix_hint(&self) -> Option<String> {
        match self {
            RuleViolation::NotPublic => {
                Some("Make the callable public or remove it from the exported binding surface".to_string())
            }
            RuleViolation::Undocumented => {
                Some("Add a doc string or set documented to false".to_string())
            }
            RuleViolation::StructFieldConflict { .. } => {
                Some("Drop the conflicting flags or expose the callable as a regular function".to_string())
            }
            RuleViolation::NotPositionalOrNamed { param } => {
                Some(format!("Mark '{}' positional, named, or both", param))
            }
            RuleViolation::NoneDefaultNotNoneable { param } => {
                Some(format!("Mark '{}' noneable or leave its default_value empty", param))
            }
            RuleViolation::TypeConflict { param } => {
                Some(format!("Drop either type or allowed_types on '{}'", param))
            }
            RuleViolation::PositionalAfterNonPositional { param } => {
                Some(format!("Move '{}' before the first non-positional parameter", param))
            }
            RuleViolation::PositionalOnlyAfterNamed { param } => {
                Some(format!("Move '{}' before the first named parameter", param))
            }
            RuleViolation::MandatoryAfterOptional { param } => Some(format!(
                "Move '{}' before the first positional parameter with a default value",
                param
            )),
            RuleViolation::ParamCountMismatch { .. } | RuleViolation::StructFieldParamCount { .. } => {
                Some("Align the physical parameter list with the declared contract".to_string())
            }
            RuleViolation::InjectedTypeMismatch { expected, .. } => {
                Some(format!("Change the parameter type to {}", expected))
            }
        }
    }
}

/// B001: the callable must be externally visible.
pub fn check_visibility(decl: &CallableDecl) -> Result<(), RuleViolation> {
    if !decl.public {
        return Err(RuleViolation::NotPublic);
    }
    Ok(())
}

/// B002: the doc string must be non-empty when the contract is documented.
pub fn check_documented(contract: &CallableContract) -> Result<(), RuleViolation> {
    if contract.documented && contract.doc.is_empty() {
        return Err(RuleViolation::Undocumented);
    }
    Ok(())
}

/// B003: struct-field callables may not request call-shaped extras.
pub fn check_struct_field(contract: &CallableContract) -> Result<(), RuleViolation> {
    if !contract.struct_field {
        return Ok(());
    }
    let requested: Vec<&'static str> = STRUCT_FIELD_CONFLICTS
        .iter()
        .filter(|slot| contract.wants(**slot))
        .map(|slot| slot.flag_name())
        .collect();
    if !requested.is_empty() {
        return Err(RuleViolation::StructFieldConflict {
            flags: requested.join(", "),
        });
    }
    Ok(())
}

/// B004: per-parameter shape and ordering, in declared order.
///
/// Three gates start open and close as the fold walks the list: once a
/// non-positional parameter appears no positional may follow, once a named
/// parameter appears no positional-only may follow, and once a positional
/// parameter has a default no mandatory positional may follow. The first
/// violation wins.
pub fn check_param_order(contract: &CallableContract) -> Result<(), RuleViolation> {
    let mut positional_allowed = true;
    let mut positional_only_allowed = true;
    let mut non_default_positional_allowed = true;

    for spec in &contract.params {
        if !spec.positional && !spec.is_named() {
            return Err(RuleViolation::NotPositionalOrNamed {
                param: spec.name.clone(),
            });
        }
        if spec.default_value == "None" && !spec.noneable {
            return Err(RuleViolation::NoneDefaultNotNoneable {
                param: spec.name.clone(),
            });
        }
        if !spec.allowed_types.is_empty() && spec.ty != TypeRef::object() {
            return Err(RuleViolation::TypeConflict {
                param: spec.name.clone(),
            });
        }

        if spec.positional {
            if !positional_allowed {
                return Err(RuleViolation::PositionalAfterNonPositional {
                    param: spec.name.clone(),
                });
            }
            if !spec.is_named() && !positional_only_allowed {
                return Err(RuleViolation::PositionalOnlyAfterNamed {
                    param: spec.name.clone(),
                });
            }
            if !spec.has_default() {
                if !non_default_positional_allowed {
                    return Err(RuleViolation::MandatoryAfterOptional {
                        param: spec.name.clone(),
                    });
                }
            } else {
                // No mandatory positional may follow this parameter.
                non_default_positional_allowed = false;
            }
        } else {
            // No positional parameter may follow this parameter.
            positional_allowed = false;
        }
        if spec.is_named() {
            // No positional-only parameter may follow this parameter.
            positional_only_allowed = false;
        }
    }
    Ok(())
}

/// B005: the physical parameter count must match the contract.
///
/// The declared+injected comparison applies only when the contract says
/// anything about its parameters; the struct-field comparison applies
/// whenever `struct_field` is set.
pub fn check_param_count(decl: &CallableDecl) -> Result<(), RuleViolation> {
    let contract = &decl.contract;
    let injected = contract.injected_count();
    let actual = decl.params.len();

    if contract.declares_params() {
        let declared = contract.declared_count();
        if actual != declared + injected {
            return Err(RuleViolation::ParamCountMismatch {
                actual,
                declared,
                injected,
            });
        }
    }
    if contract.struct_field && actual != injected {
        return Err(RuleViolation::StructFieldParamCount { actual, injected });
    }
    Ok(())
}

/// B006: trailing injected parameters must carry their expected types, in
/// canonical slot order.
///
/// All index arithmetic is bounds-checked: a physical list shorter than the
/// requested injected count already failed the count check, so this family
/// reports nothing rather than reading out of range.
pub fn check_injected_types(
    decl: &CallableDecl,
    expected: &InjectedTypes,
) -> Result<(), RuleViolation> {
    let contract = &decl.contract;
    let Some(mut index) = decl.params.len().checked_sub(contract.injected_count()) else {
        return Ok(());
    };

    for slot in InjectedSlot::ORDER {
        if !contract.wants(slot) {
            continue;
        }
        let Some(param) = decl.params.get(index) else {
            return Ok(());
        };
        let want = expected.expected(slot);
        if &param.ty != want {
            return Err(RuleViolation::InjectedTypeMismatch {
                index,
                flag: slot.flag_name(),
                expected: want.to_string(),
                actual: param.ty.to_string(),
            });
        }
        index += 1;
    }
    Ok(())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
