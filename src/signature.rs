//! Host-side type model for method descriptions.
//!
//! A metadata reader (reflection, an ECMA-335 signature blob, a binding generator) describes
//! parameter and return types as [`TypeSignature`] values. The set is intentionally wider than
//! what can be mangled: classification into the encodable subset happens in
//! [`crate::mangle::SemanticType`], which is where unsupported types are rejected.
//!
//! Types can also be obtained from reflection-style CLR type names:
//!
//! ```rust
//! use vcmangle::TypeSignature;
//!
//! let by_ref: TypeSignature = "System.Int32&".parse()?;
//! assert_eq!(by_ref, TypeSignature::ByRef(Box::new(TypeSignature::I4)));
//! assert_eq!(by_ref.to_string(), "System.Int32&");
//! # Ok::<(), vcmangle::Error>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Represents a parameter or return type of a method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeSignature {
    /// void
    #[default]
    Void,
    /// bool
    Boolean,
    /// char, a UTF-16 code unit on the managed side
    Char,
    /// signed 8bit integer
    I1,
    /// unsigned 8bit integer
    U1,
    /// signed 16bit integer
    I2,
    /// unsigned 16bit integer
    U2,
    /// signed 32bit integer
    I4,
    /// unsigned 32bit integer
    U4,
    /// signed 64bit integer
    I8,
    /// unsigned 64bit integer
    U8,
    /// 32bit floating-point
    R4,
    /// 64bit floating-point
    R8,
    /// signed integer, sized to executing platform
    I,
    /// unsigned integer, sized to executing platform
    U,
    /// System.String
    String,
    /// System.Object
    Object,
    /// A pointer to a type
    Ptr(Box<TypeSignature>),
    /// Type by reference
    ByRef(Box<TypeSignature>),
    /// Single dimension array
    SzArray(Box<TypeSignature>),
    /// Reference type, by full name
    Class(String),
    /// Value type, by full name
    ValueType(String),
}

impl TypeSignature {
    /// Wraps `self` into a by-reference type (`T&`)
    #[must_use]
    pub fn by_ref(self) -> Self {
        TypeSignature::ByRef(Box::new(self))
    }

    /// Wraps `self` into an unmanaged pointer type (`T*`)
    #[must_use]
    pub fn pointer(self) -> Self {
        TypeSignature::Ptr(Box::new(self))
    }

    /// Returns the CLR full name of a primitive, or `None` for composite and named types
    #[must_use]
    pub fn primitive_name(&self) -> Option<&'static str> {
        let name = match self {
            TypeSignature::Void => "System.Void",
            TypeSignature::Boolean => "System.Boolean",
            TypeSignature::Char => "System.Char",
            TypeSignature::I1 => "System.SByte",
            TypeSignature::U1 => "System.Byte",
            TypeSignature::I2 => "System.Int16",
            TypeSignature::U2 => "System.UInt16",
            TypeSignature::I4 => "System.Int32",
            TypeSignature::U4 => "System.UInt32",
            TypeSignature::I8 => "System.Int64",
            TypeSignature::U8 => "System.UInt64",
            TypeSignature::R4 => "System.Single",
            TypeSignature::R8 => "System.Double",
            TypeSignature::I => "System.IntPtr",
            TypeSignature::U => "System.UIntPtr",
            TypeSignature::String => "System.String",
            TypeSignature::Object => "System.Object",
            TypeSignature::Ptr(_)
            | TypeSignature::ByRef(_)
            | TypeSignature::SzArray(_)
            | TypeSignature::Class(_)
            | TypeSignature::ValueType(_) => return None,
        };

        Some(name)
    }

    fn from_element_name(name: &str) -> Self {
        match name {
            "System.Void" | "void" => TypeSignature::Void,
            "System.Boolean" | "bool" => TypeSignature::Boolean,
            "System.Char" | "char" => TypeSignature::Char,
            "System.SByte" | "sbyte" => TypeSignature::I1,
            "System.Byte" | "byte" => TypeSignature::U1,
            "System.Int16" | "short" => TypeSignature::I2,
            "System.UInt16" | "ushort" => TypeSignature::U2,
            "System.Int32" | "int" => TypeSignature::I4,
            "System.UInt32" | "uint" => TypeSignature::U4,
            "System.Int64" | "long" => TypeSignature::I8,
            "System.UInt64" | "ulong" => TypeSignature::U8,
            "System.Single" | "float" => TypeSignature::R4,
            "System.Double" | "double" => TypeSignature::R8,
            "System.IntPtr" | "nint" => TypeSignature::I,
            "System.UIntPtr" | "nuint" => TypeSignature::U,
            "System.String" | "string" => TypeSignature::String,
            "System.Object" | "object" => TypeSignature::Object,
            other => TypeSignature::Class(other.to_string()),
        }
    }
}

impl FromStr for TypeSignature {
    type Err = Error;

    /// Parses a reflection-style type name such as `System.Int32&`, `string` or `byte*[]`.
    ///
    /// Suffixes are applied left to right, so `System.Int32*&` is a reference to a pointer.
    ///
    /// Bracketed suffixes other than `[]`, such as generic arguments (``List`1[[System.Int32]]``)
    /// or multi-dimensional ranks (`[,]`), yield an opaque [`TypeSignature::Class`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidTypeName`] if the element name is empty or contains whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let split = name.find(['&', '*', '[']).unwrap_or(name.len());
        let (element, mut suffixes) = name.split_at(split);
        if element.is_empty() || element.contains(char::is_whitespace) {
            return Err(Error::InvalidTypeName(s.to_string()));
        }

        let mut signature = TypeSignature::from_element_name(element);
        while !suffixes.is_empty() {
            if let Some(rest) = suffixes.strip_prefix('&') {
                signature = TypeSignature::ByRef(Box::new(signature));
                suffixes = rest;
            } else if let Some(rest) = suffixes.strip_prefix('*') {
                signature = TypeSignature::Ptr(Box::new(signature));
                suffixes = rest;
            } else if let Some(rest) = suffixes.strip_prefix("[]") {
                signature = TypeSignature::SzArray(Box::new(signature));
                suffixes = rest;
            } else if suffixes.starts_with('[') {
                // generic instantiations and multi-dimensional arrays stay opaque
                return Ok(TypeSignature::Class(name.to_string()));
            } else {
                return Err(Error::InvalidTypeName(s.to_string()));
            }
        }

        Ok(signature)
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Ptr(inner) => write!(f, "{}*", inner),
            TypeSignature::ByRef(inner) => write!(f, "{}&", inner),
            TypeSignature::SzArray(inner) => write!(f, "{}[]", inner),
            TypeSignature::Class(name) | TypeSignature::ValueType(name) => f.write_str(name),
            primitive => f.write_str(primitive.primitive_name().unwrap_or_default()),
        }
    }
}
