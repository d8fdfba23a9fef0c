//! Static rule catalog backing `bindlint explain`.

/// Documentation for one diagnostic code.
#[derive(Debug, Clone, Copy)]
pub struct RuleDoc {
    pub code: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
    pub fix: &'static str,
}

pub const RULES: [RuleDoc; 7] = [
    RuleDoc {
        code: "B001",
        title: "not public",
        summary: "Exported callables must be publicly visible.",
        details: &[
            "The scripting runtime invokes bindings through their public surface.",
            "A private callable in the manifest is unreachable at runtime and almost always a scanner or annotation mistake.",
        ],
        fix: "Make the callable public or remove it from the exported binding surface.",
    },
    RuleDoc {
        code: "B002",
        title: "undocumented",
        summary: "The doc string must be non-empty when the callable is documented.",
        details: &[
            "Documented callables appear in the generated API reference; an empty doc string renders as a blank entry.",
            "Callables that should stay out of the reference must set documented to false explicitly.",
        ],
        fix: "Add a doc string or set documented to false.",
    },
    RuleDoc {
        code: "B003",
        title: "struct-field conflict",
        summary: "Property-style callables may not request call-shaped extras.",
        details: &[
            "A struct-field callable is read as a property access, so no call expression exists.",
            "Argument captures (extra_positionals, extra_keywords), the caller span, and the call-site node can only come from a call expression.",
            "The execution context and semantics context are still available to struct fields.",
        ],
        fix: "Drop the conflicting flags or expose the callable as a regular function.",
    },
    RuleDoc {
        code: "B004",
        title: "parameter shape",
        summary: "A declared parameter violates the shape or ordering rules.",
        details: &[
            "Every parameter must be positional or named (or both).",
            "A 'None' default requires the parameter to be noneable.",
            "A parameter may declare a type or allowed_types, not both.",
            "Positional parameters precede non-positional ones; positional-only parameters precede named ones; mandatory positionals precede positionals with defaults.",
        ],
        fix: "Reorder or re-flag the parameter named in the diagnostic.",
    },
    RuleDoc {
        code: "B005",
        title: "parameter count",
        summary: "The physical parameter count must match declared plus injected.",
        details: &[
            "The runtime maps arguments by position, so the physical list must hold exactly the declared logical parameters followed by the requested injected parameters.",
            "Struct-field callables take no user-supplied parameters; their physical list holds only the injected ones.",
        ],
        fix: "Align the physical parameter list with the declared contract.",
    },
    RuleDoc {
        code: "B006",
        title: "injected type",
        summary: "A trailing injected parameter has the wrong type.",
        details: &[
            "Requested injected parameters trail the physical list in a fixed order: extra positionals, extra keywords, caller location, call-site node, execution context, semantics context.",
            "Each slot expects one specific type, configured once for the repository in .bindlint/bindlint.json.",
        ],
        fix: "Change the parameter type to the slot's expected type.",
    },
    RuleDoc {
        code: "S001",
        title: "suppressed",
        summary: "A diagnostic was suppressed via config or --suppress.",
        details: &[
            "Suppressed diagnostics keep their category and message but are downgraded to INFO and never fail the pass.",
        ],
        fix: "Remove the code from the suppress list to re-enable it.",
    },
];

/// Look up the catalog entry for a diagnostic code.
pub fn lookup(code: &str) -> Option<&'static RuleDoc> {
    RULES.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}
