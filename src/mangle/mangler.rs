//! Assembly of decorated names.
//!
//! A decorated name has the layout
//!
//! ```text
//! ? <name> [@ <owner>] [@ <scope>...] @@ <access> A <return> <parameters> Z
//! ```
//!
//! where `<parameters>` is the concatenated parameter type codes followed by `@`, or a single
//! `X` if the function takes no parameters.

use std::fmt;

use rayon::prelude::*;
use strum::{Display, EnumIter};

use crate::{
    mangle::{
        namespace::resolve_namespace,
        types::{encode_type, CharSet, SemanticType},
    },
    signature::TypeSignature,
    Result,
};

/// Suffix marking a managed instance method as binding to a `const` member function
pub const CONST_SUFFIX: &str = "_const";

/// Classification of the native function a method binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display)]
pub enum FunctionKind {
    /// Namespace-level function
    #[default]
    Free,
    /// `static` member function
    StaticMember,
    /// Instance member function, receiving `this` as its first parameter
    VirtualMember,
}

#[allow(non_snake_case)]
/// COM `FUNCKIND` values, as found in type library function descriptions
pub mod FUNCKIND {
    /// Function accessed through the virtual function table
    pub const FUNC_VIRTUAL: i32 = 0;
    /// Pure virtual function
    pub const FUNC_PUREVIRTUAL: i32 = 1;
    /// Non-virtual function, accessed by static address
    pub const FUNC_NONVIRTUAL: i32 = 2;
    /// Static function
    pub const FUNC_STATIC: i32 = 3;
    /// Dispatch-only function
    pub const FUNC_DISPATCH: i32 = 4;
}

impl FunctionKind {
    /// Maps a COM `FUNCKIND` to the function kind used for mangling.
    ///
    /// `FUNC_NONVIRTUAL` denotes a static member and `FUNC_VIRTUAL` an instance member;
    /// every other value is treated as a free function.
    #[must_use]
    pub fn from_funckind(kind: i32) -> Self {
        match kind {
            FUNCKIND::FUNC_VIRTUAL => FunctionKind::VirtualMember,
            FUNCKIND::FUNC_NONVIRTUAL => FunctionKind::StaticMember,
            _ => FunctionKind::Free,
        }
    }
}

/// Description of a method to bind, as provided by the host's metadata facility.
///
/// For [`FunctionKind::VirtualMember`] the first entry of `parameters` is the implicit
/// receiver and does not take part in the decorated name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodDescriptor {
    /// Method name, for const instance methods including the `_const` suffix
    pub name: String,
    /// Simple name of the declaring type
    pub owning_type: String,
    /// Namespace of the declaring type, possibly carrying a native namespace marker
    pub namespace: String,
    /// Return type
    pub return_type: TypeSignature,
    /// Parameter types, in declaration order
    pub parameters: Vec<TypeSignature>,
    /// Kind of the native function
    pub kind: FunctionKind,
}

impl MethodDescriptor {
    /// Creates a descriptor for a method returning `void` without parameters
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        MethodDescriptor {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Creates a descriptor for a namespace-level function
    pub fn free(name: impl Into<String>) -> Self {
        Self::new(name, FunctionKind::Free)
    }

    /// Creates a descriptor for a `static` member function
    pub fn static_member(name: impl Into<String>) -> Self {
        Self::new(name, FunctionKind::StaticMember)
    }

    /// Creates a descriptor for an instance member function; add the receiver as first parameter
    pub fn virtual_member(name: impl Into<String>) -> Self {
        Self::new(name, FunctionKind::VirtualMember)
    }

    /// Sets the declaring type name
    #[must_use]
    pub fn owner(mut self, owning_type: impl Into<String>) -> Self {
        self.owning_type = owning_type.into();
        self
    }

    /// Sets the declaring type's namespace
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the return type
    #[must_use]
    pub fn returns(mut self, return_type: TypeSignature) -> Self {
        self.return_type = return_type;
        self
    }

    /// Appends a parameter
    #[must_use]
    pub fn param(mut self, parameter: TypeSignature) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends several parameters
    #[must_use]
    pub fn params(mut self, parameters: impl IntoIterator<Item = TypeSignature>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// The parameters that are part of the decorated name, i.e. without the receiver
    #[must_use]
    pub fn encoded_parameters(&self) -> &[TypeSignature] {
        match self.kind {
            FunctionKind::VirtualMember => self.parameters.get(1..).unwrap_or_default(),
            FunctionKind::Free | FunctionKind::StaticMember => &self.parameters,
        }
    }
}

/// A decorated symbol name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MangledName(String);

impl MangledName {
    /// Returns the decorated name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes `self`, returning the decorated name
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MangledName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MangledName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<MangledName> for String {
    fn from(name: MangledName) -> Self {
        name.0
    }
}

impl PartialEq<str> for MangledName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MangledName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Produces the symbol name a native toolchain emits for a method
pub trait EntrypointMangler {
    /// Computes the symbol name of `method`.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedType`] if the signature uses a type the scheme
    /// cannot encode.
    fn mangle(&self, method: &MethodDescriptor, char_set: CharSet) -> Result<MangledName>;
}

/// Visual C++ decorated names for x64 targets (`__ptr64`, `__cdecl`)
#[derive(Debug, Clone, Copy, Default)]
pub struct VcEntrypointMangler;

impl VcEntrypointMangler {
    /// Creates a new mangler
    #[must_use]
    pub fn new() -> Self {
        VcEntrypointMangler
    }

    /// Mangles `method` using the default [`CharSet::Wide`]
    ///
    /// # Errors
    /// See [`EntrypointMangler::mangle`].
    pub fn mangle_default(&self, method: &MethodDescriptor) -> Result<MangledName> {
        self.mangle(method, CharSet::default())
    }

    /// Mangles independent methods in parallel, preserving the input order
    pub fn mangle_all(
        &self,
        methods: &[MethodDescriptor],
        char_set: CharSet,
    ) -> Vec<Result<MangledName>> {
        methods
            .par_iter()
            .map(|method| self.mangle(method, char_set))
            .collect()
    }
}

impl EntrypointMangler for VcEntrypointMangler {
    fn mangle(&self, method: &MethodDescriptor, char_set: CharSet) -> Result<MangledName> {
        let access = access_code(method.kind, &method.name);
        let return_type = format!("A{}", encode_type(&method.return_type, char_set)?);
        let parameters = parameter_list(method.encoded_parameters(), char_set)?;

        let mangled = MangledName(format!(
            "?{}@@{}{}{}Z",
            qualified_name(method),
            access,
            return_type,
            parameters
        ));

        tracing::trace!(method = %method.name, kind = %method.kind, %char_set, %mangled, "mangled");
        Ok(mangled)
    }
}

/// Returns the access and calling-convention code of a function.
///
/// `Y` marks a free function, `S` a public static member and `QE` a public instance member
/// with a `__ptr64` `this`, followed by `B` for const and `A` for non-const members.
#[must_use]
pub fn access_code(kind: FunctionKind, name: &str) -> &'static str {
    match kind {
        FunctionKind::Free => "Y",
        FunctionKind::StaticMember => "S",
        FunctionKind::VirtualMember if name.ends_with(CONST_SUFFIX) => "QEB",
        FunctionKind::VirtualMember => "QEA",
    }
}

/// Returns `name[@owner][@scope...]` for `method`, without the `_const` suffix of const
/// instance members.
#[must_use]
pub fn qualified_name(method: &MethodDescriptor) -> String {
    let scope = resolve_namespace(&method.namespace);
    match method.kind {
        FunctionKind::Free => format!("{}{}", method.name, scope),
        FunctionKind::StaticMember => {
            format!("{}@{}{}", method.name, method.owning_type, scope)
        }
        FunctionKind::VirtualMember => {
            let name = method
                .name
                .strip_suffix(CONST_SUFFIX)
                .unwrap_or(&method.name);
            format!("{}@{}{}", name, method.owning_type, scope)
        }
    }
}

fn parameter_list(parameters: &[TypeSignature], char_set: CharSet) -> Result<String> {
    let mut encoded = String::new();
    for parameter in parameters {
        encoded.push_str(&encode_type(parameter, char_set)?);
    }

    if encoded.is_empty() {
        Ok(SemanticType::Void.code(char_set).into_owned())
    } else {
        encoded.push('@');
        Ok(encoded)
    }
}
