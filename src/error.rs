use thiserror::Error;

use crate::signature::TypeSignature;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Mangling is a pure, deterministic transformation, so none of these errors are transient:
/// retrying the same call yields the same error. They indicate that a signature outside the
/// supported set was requested and have to be fixed at the call site.
///
/// # Examples
///
/// ```rust
/// use vcmangle::{Error, MethodDescriptor, TypeSignature, VcEntrypointMangler};
///
/// let method = MethodDescriptor::free("Describe")
///     .param(TypeSignature::Object)
///     .returns(TypeSignature::Void);
///
/// match VcEntrypointMangler::new().mangle_default(&method) {
///     Ok(name) => println!("{}", name),
///     Err(Error::UnsupportedType(ty)) => eprintln!("cannot mangle a parameter of type {}", ty),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter or return type has no encoding in the decorated-name type table.
    ///
    /// Only the fixed set of primitives, `System.String` and `System.Int32&` can be encoded.
    /// The associated [`TypeSignature`] is the first type that was rejected.
    #[error("Type '{0}' is not supported by the decorated-name encoder")]
    UnsupportedType(TypeSignature),

    /// A CLR type name could not be turned into a [`TypeSignature`].
    #[error("Invalid type name - '{0}'")]
    InvalidTypeName(String),
}
