//! # vcmangle Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! of the vcmangle library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all vcmangle operations
pub use crate::Error;

/// The result type used throughout vcmangle
pub use crate::Result;

// ================================================================================================
// Method Descriptions
// ================================================================================================

/// Host-side parameter and return types
pub use crate::signature::TypeSignature;

/// Description of the method to bind
pub use crate::mangle::{FunctionKind, MethodDescriptor};

// ================================================================================================
// Mangling
// ================================================================================================

/// Character set, type table and the mangler itself
pub use crate::mangle::{
    CharSet, EntrypointMangler, MangledName, SemanticType, VcEntrypointMangler,
};
