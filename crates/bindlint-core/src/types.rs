use serde::{Deserialize, Serialize};

/// A resolved, fully-qualified type name as reported by the scanner.
///
/// Compared by value, never by substring. The scanner resolves aliases
/// before emitting the manifest, so equal names mean equal types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef(name.into())
    }

    /// The sentinel "any object" type a parameter carries when its contract
    /// declares no explicit type.
    pub fn object() -> Self {
        TypeRef("runtime.Object".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef(name.to_string())
    }
}

/// The six framework-injected trailing parameter slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectedSlot {
    ExtraPositionals,
    ExtraKeywords,
    CallerLocation,
    CallSiteNode,
    ExecutionContext,
    SemanticsContext,
}

impl InjectedSlot {
    /// Canonical order in which injected parameters trail the physical list.
    /// The runtime supplies them in exactly this order, so the validator
    /// checks them in exactly this order.
    pub const ORDER: [InjectedSlot; 6] = [
        InjectedSlot::ExtraPositionals,
        InjectedSlot::ExtraKeywords,
        InjectedSlot::CallerLocation,
        InjectedSlot::CallSiteNode,
        InjectedSlot::ExecutionContext,
        InjectedSlot::SemanticsContext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InjectedSlot::ExtraPositionals => "extra_positionals",
            InjectedSlot::ExtraKeywords => "extra_keywords",
            InjectedSlot::CallerLocation => "caller_location",
            InjectedSlot::CallSiteNode => "call_site_node",
            InjectedSlot::ExecutionContext => "execution_context",
            InjectedSlot::SemanticsContext => "semantics_context",
        }
    }

    /// The contract field that requests this slot, for diagnostics.
    pub fn flag_name(&self) -> &'static str {
        match self {
            InjectedSlot::ExtraPositionals => "extra_positionals",
            InjectedSlot::ExtraKeywords => "extra_keywords",
            InjectedSlot::CallerLocation => "use_caller_location",
            InjectedSlot::CallSiteNode => "use_call_site_node",
            InjectedSlot::ExecutionContext => "use_execution_context",
            InjectedSlot::SemanticsContext => "use_semantics_context",
        }
    }
}

impl std::fmt::Display for InjectedSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected types for the injected slots. Configured once for the whole
/// validator, not per callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectedTypes {
    #[serde(default = "default_arg_tuple")]
    pub extra_positionals: TypeRef,
    #[serde(default = "default_kwarg_dict")]
    pub extra_keywords: TypeRef,
    #[serde(default = "default_caller_span")]
    pub caller_location: TypeRef,
    #[serde(default = "default_call_node")]
    pub call_site_node: TypeRef,
    #[serde(default = "default_eval_context")]
    pub execution_context: TypeRef,
    #[serde(default = "default_semantics")]
    pub semantics_context: TypeRef,
}

fn default_arg_tuple() -> TypeRef {
    TypeRef::new("runtime.ArgTuple")
}
fn default_kwarg_dict() -> TypeRef {
    TypeRef::new("runtime.KwargDict")
}
fn default_caller_span() -> TypeRef {
    TypeRef::new("runtime.CallerSpan")
}
fn default_call_node() -> TypeRef {
    TypeRef::new("runtime.CallNode")
}
fn default_eval_context() -> TypeRef {
    TypeRef::new("runtime.EvalContext")
}
fn default_semantics() -> TypeRef {
    TypeRef::new("runtime.Semantics")
}

impl Default for InjectedTypes {
    fn default() -> Self {
        Self {
            extra_positionals: default_arg_tuple(),
            extra_keywords: default_kwarg_dict(),
            caller_location: default_caller_span(),
            call_site_node: default_call_node(),
            execution_context: default_eval_context(),
            semantics_context: default_semantics(),
        }
    }
}

impl InjectedTypes {
    /// The one expected type for the given slot.
    pub fn expected(&self, slot: InjectedSlot) -> &TypeRef {
        match slot {
            InjectedSlot::ExtraPositionals => &self.extra_positionals,
            InjectedSlot::ExtraKeywords => &self.extra_keywords,
            InjectedSlot::CallerLocation => &self.caller_location,
            InjectedSlot::CallSiteNode => &self.call_site_node,
            InjectedSlot::ExecutionContext => &self.execution_context,
            InjectedSlot::SemanticsContext => &self.semantics_context,
        }
    }
}

/// One declared logical parameter of a callable contract.
///
/// Field defaults mirror the scanner's annotation defaults: parameters are
/// positional unless declared otherwise, untyped parameters carry the
/// `runtime.Object` sentinel, and an empty `default_value` means mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(default = "default_true")]
    pub positional: bool,
    #[serde(default)]
    pub named: bool,
    #[serde(default)]
    pub legacy_named: bool,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub noneable: bool,
    #[serde(rename = "type", default = "TypeRef::object")]
    pub ty: TypeRef,
    #[serde(default)]
    pub allowed_types: Vec<TypeRef>,
}

impl ParamSpec {
    /// Callable by keyword name, under either the current or the legacy flag.
    pub fn is_named(&self) -> bool {
        self.named || self.legacy_named
    }

    /// Whether the parameter carries a default value (empty string = mandatory).
    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }
}

/// Declared contract metadata for one callable exposed to the scripting layer.
///
/// Defaults mirror the scanner's annotation defaults; in particular a
/// callable is `documented` unless it opts out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallableContract {
    pub struct_field: bool,
    pub documented: bool,
    pub doc: String,
    pub params: Vec<ParamSpec>,
    /// Legacy count of mandatory positionals declared without specs.
    /// `None` means the field is unused.
    pub mandatory_positionals: Option<u32>,
    /// Collector name for surplus positional arguments; `Some` requests the capture.
    pub extra_positionals: Option<String>,
    /// Collector name for surplus keyword arguments; `Some` requests the capture.
    pub extra_keywords: Option<String>,
    pub use_caller_location: bool,
    pub use_call_site_node: bool,
    pub use_execution_context: bool,
    pub use_semantics_context: bool,
}

impl Default for CallableContract {
    fn default() -> Self {
        Self {
            struct_field: false,
            documented: true,
            doc: String::new(),
            params: vec![],
            mandatory_positionals: None,
            extra_positionals: None,
            extra_keywords: None,
            use_caller_location: false,
            use_call_site_node: false,
            use_execution_context: false,
            use_semantics_context: false,
        }
    }
}

impl CallableContract {
    /// Whether the contract requests the given injected slot.
    pub fn wants(&self, slot: InjectedSlot) -> bool {
        match slot {
            InjectedSlot::ExtraPositionals => {
                self.extra_positionals.as_deref().is_some_and(|n| !n.is_empty())
            }
            InjectedSlot::ExtraKeywords => {
                self.extra_keywords.as_deref().is_some_and(|n| !n.is_empty())
            }
            InjectedSlot::CallerLocation => self.use_caller_location,
            InjectedSlot::CallSiteNode => self.use_call_site_node,
            InjectedSlot::ExecutionContext => self.use_execution_context,
            InjectedSlot::SemanticsContext => self.use_semantics_context,
        }
    }

    /// Number of framework-injected trailing parameters the contract requests.
    pub fn injected_count(&self) -> usize {
        InjectedSlot::ORDER.iter().filter(|s| self.wants(**s)).count()
    }

    /// Declared logical parameter count, including legacy mandatory positionals.
    pub fn declared_count(&self) -> usize {
        self.params.len() + self.mandatory_positionals.unwrap_or(0) as usize
    }

    /// Whether the contract says anything about its parameter list.
    /// When false, the declared-count comparison does not apply.
    pub fn declares_params(&self) -> bool {
        !self.params.is_empty() || self.mandatory_positionals.is_some()
    }
}

fn default_true() -> bool {
    true
}

/// One physical formal parameter with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormalParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// One callable declaration discovered by the external scanner: the declared
/// contract plus an immutable snapshot of the physical parameter list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallableDecl {
    pub name: String,
    pub file: String,
    pub line: u32,
    #[serde(default = "default_true")]
    pub public: bool,
    pub contract: CallableContract,
    #[serde(default)]
    pub params: Vec<FormalParam>,
}

impl CallableDecl {
    /// Render the physical parameter list as `(a: T, b: U)` for fingerprinting
    /// and human output.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }

    /// Stable fingerprint identifying this callable across runs.
    pub fn fingerprint(&self) -> String {
        crate::fingerprint::fingerprint(&self.name, &self.file, &self.signature())
    }
}

/// A scanner-emitted manifest: one file of callable declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    #[serde(default)]
    pub callables: Vec<CallableDecl>,
}
