//! Visual C++ decorated names for P/Invoke entry points.
//!
//! This module computes the symbol name the Microsoft C++ toolchain emits for a function, so
//! that a managed declaration can bind to a C++ export without spelling out the decorated name
//! by hand. Only x64 targets are covered (`__ptr64` pointers, `__cdecl`).
//!
//! # Key Components
//!
//! - [`SemanticType`] / [`encode_type`] - The fixed type-code table
//! - [`resolve_namespace`] - Native scope derived from a marked managed namespace
//! - [`VcEntrypointMangler`] - Assembly of the complete decorated name
//!
//! # Supported Signatures
//!
//! Parameters and return values are limited to the integer and floating-point primitives,
//! `char`/`wchar_t`, `void`, `const char*`/`const wchar_t*` (from `System.String`) and
//! `int&` (from `System.Int32&`). Templates, operators, exception specifications and thunks
//! are not supported.
//!
//! # Examples
//!
//! ```rust
//! use vcmangle::{
//!     mangle::{CharSet, EntrypointMangler, MethodDescriptor, VcEntrypointMangler},
//!     TypeSignature,
//! };
//!
//! // namespace Math { struct Calculator { static int Add(int, int); }; }
//! let add = MethodDescriptor::static_member("Add")
//!     .owner("Calculator")
//!     .namespace("DllImport.Math")
//!     .params([TypeSignature::I4, TypeSignature::I4])
//!     .returns(TypeSignature::I4);
//!
//! let name = VcEntrypointMangler::new().mangle(&add, CharSet::Wide)?;
//! assert_eq!(name.as_str(), "?Add@Calculator@Math@@SAHHH@Z");
//! # Ok::<(), vcmangle::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Mangling is a pure function of its inputs. The type table is a `match` over a closed enum,
//! so there is no shared state and any number of threads may mangle concurrently.

mod mangler;
mod namespace;
mod types;

pub use mangler::*;
pub use namespace::resolve_namespace;
pub use types::*;
