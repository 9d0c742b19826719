// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # vcmangle
//!
//! Computes the Microsoft Visual C++ decorated ("mangled") name of a function, so that
//! P/Invoke-style bindings can locate C++ exports at link or load time without hand-derived
//! symbol names.
//!
//! ## Features
//!
//! - **🔤 Fixed type table** - Integer and floating-point primitives, characters, strings and `int&`
//! - **🧭 Namespace markers** - Native scopes derived from `DllImport.` / `._.` marked namespaces
//! - **🏷️ Member functions** - Free, static and (const) instance member functions
//! - **🔧 Character sets** - Narrow (`char`) and wide (`wchar_t`) string and character encodings
//!
//! ## Quick Start
//!
//! ```rust
//! use vcmangle::prelude::*;
//!
//! // int f_wcslen(const wchar_t* s);
//! let method = MethodDescriptor::free("f_wcslen")
//!     .param(TypeSignature::String)
//!     .returns(TypeSignature::I4);
//!
//! let name = VcEntrypointMangler::new().mangle(&method, CharSet::Wide)?;
//! assert_eq!(name.as_str(), "?f_wcslen@@YAHPEB_W@Z");
//! # Ok::<(), vcmangle::Error>(())
//! ```
//!
//! ## Instance Members
//!
//! The first parameter of an instance member is its receiver and is not encoded. A trailing
//! `_const` on the method name binds to the `const` overload:
//!
//! ```rust
//! use vcmangle::prelude::*;
//!
//! // struct Shape { void Compute() const; };
//! let method = MethodDescriptor::virtual_member("Compute_const")
//!     .owner("Shape")
//!     .param(TypeSignature::I);
//!
//! let name = VcEntrypointMangler::new().mangle_default(&method)?;
//! assert_eq!(name.as_str(), "?Compute@Shape@@QEBAXXZ");
//! # Ok::<(), vcmangle::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result`]. A signature containing a type outside the fixed
//! table fails with [`Error::UnsupportedType`] and produces no partial name.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]: every decorated name at `TRACE` level and every
//! rejected type at `DEBUG` level. No subscriber is installed by this crate.

pub(crate) mod error;

/// Decorated-name computation
pub mod mangle;

/// Convenient re-exports of the most commonly used types
pub mod prelude;

/// Host-side type model
pub mod signature;

/// `vcmangle` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `vcmangle` Error type
///
/// Covers unsupported signature types and malformed type names.
pub use error::Error;

pub use mangle::{
    CharSet, EntrypointMangler, FunctionKind, MangledName, MethodDescriptor, SemanticType,
    VcEntrypointMangler,
};
pub use signature::TypeSignature;

/// Computes the decorated name of `method` with the Visual C++ x64 scheme.
///
/// # Errors
/// Returns [`Error::UnsupportedType`] if a parameter or the return type cannot be encoded.
pub fn mangle(method: &MethodDescriptor, char_set: CharSet) -> Result<MangledName> {
    VcEntrypointMangler::new().mangle(method, char_set)
}
