//! Type codes of the decorated-name scheme.
//!
//! Encodes the fixed set of supported parameter and return types into their Visual C++ x64
//! type-code fragments. Composite codes follow the layout `<modifier><cv-prefix><cv>` +
//! `<pointee>`:
//!
//! - modifier: `P` pointer (references are passed as pointers here)
//! - cv-prefix: `E` `__ptr64`
//! - cv: `A` none, `B` const
//!
//! so that `const wchar_t*` becomes `PEB_W` and `int&` becomes `PEAH`.

use std::borrow::Cow;

use strum::{Display, EnumCount, EnumIter};

use crate::{signature::TypeSignature, Error, Result};

#[allow(non_snake_case)]
/// Character set bits of `PInvokeAttributes` (ECMA-335 II.23.1.8)
pub mod PInvokeAttributes {
    /// `PInvoke` is to use the member name as specified
    pub const NO_MANGLE: u32 = 0x0001;
    /// No character set was specified
    pub const CHAR_SET_NOT_SPEC: u32 = 0x0000;
    /// Strings are marshalled as ANSI
    pub const CHAR_SET_ANSI: u32 = 0x0002;
    /// Strings are marshalled as UTF-16
    pub const CHAR_SET_UNICODE: u32 = 0x0004;
    /// The runtime picks the character set
    pub const CHAR_SET_AUTO: u32 = 0x0006;
    /// Character set mask
    pub const CHAR_SET_MASK: u32 = 0x0006;
}

/// Selects the native character type used for `char` and string parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display)]
pub enum CharSet {
    /// `char`
    Narrow,
    /// `wchar_t`
    #[default]
    Wide,
}

impl CharSet {
    /// Derives the character set from the flags of an `ImplMap` row.
    ///
    /// The runtime marshals an unspecified character set as ANSI, so both
    /// `CHAR_SET_NOT_SPEC` and `CHAR_SET_ANSI` select [`CharSet::Narrow`]. Unicode and Auto
    /// (UTF-16 on Windows) select [`CharSet::Wide`].
    #[must_use]
    pub fn from_pinvoke_flags(flags: u32) -> Self {
        match flags & PInvokeAttributes::CHAR_SET_MASK {
            PInvokeAttributes::CHAR_SET_UNICODE | PInvokeAttributes::CHAR_SET_AUTO => {
                CharSet::Wide
            }
            _ => CharSet::Narrow,
        }
    }

    /// Type code of a single character in this character set
    #[must_use]
    pub fn char_code(self) -> &'static str {
        match self {
            CharSet::Narrow => "D",
            CharSet::Wide => "_W",
        }
    }
}

/// The closed set of types that have a decorated-name encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum SemanticType {
    /// `int8_t`
    Int8,
    /// `uint8_t`, `unsigned char`
    UInt8,
    /// `int16_t`
    Int16,
    /// `uint16_t`
    UInt16,
    /// `int`
    Int32,
    /// `unsigned int`
    UInt32,
    /// `__int64`
    Int64,
    /// `unsigned __int64`
    UInt64,
    /// `float`
    Float32,
    /// `double`
    Float64,
    /// `char` or `wchar_t`, depending on the [`CharSet`]
    Char,
    /// `wchar_t`, regardless of the [`CharSet`]
    WideChar,
    /// `void`
    Void,
    /// `const char*` or `const wchar_t*`, depending on the [`CharSet`]
    StringPointer,
    /// `int&`
    Int32Reference,
}

impl SemanticType {
    /// Returns the type code of this type.
    ///
    /// Only [`SemanticType::Char`] and [`SemanticType::StringPointer`] depend on `char_set`.
    #[must_use]
    pub fn code(self, char_set: CharSet) -> Cow<'static, str> {
        let code = match self {
            SemanticType::Int8 => "C",
            SemanticType::UInt8 => "E",
            SemanticType::Int16 => "F",
            SemanticType::UInt16 => "G",
            SemanticType::Int32 => "H",
            SemanticType::UInt32 => "I",
            SemanticType::Int64 => "_J",
            SemanticType::UInt64 => "_K",
            SemanticType::Float32 => "M",
            SemanticType::Float64 => "N",
            SemanticType::Char => char_set.char_code(),
            SemanticType::WideChar => "_W",
            SemanticType::Void => "X",
            SemanticType::StringPointer => {
                return Cow::Owned(format!("PEB{}", char_set.char_code()));
            }
            SemanticType::Int32Reference => {
                return Cow::Owned(format!("PEA{}", SemanticType::Int32.code(char_set)));
            }
        };

        Cow::Borrowed(code)
    }
}

impl TryFrom<&TypeSignature> for SemanticType {
    type Error = Error;

    fn try_from(signature: &TypeSignature) -> Result<Self> {
        let semantic = match signature {
            TypeSignature::I1 => SemanticType::Int8,
            TypeSignature::U1 => SemanticType::UInt8,
            TypeSignature::I2 => SemanticType::Int16,
            TypeSignature::U2 => SemanticType::UInt16,
            TypeSignature::I4 => SemanticType::Int32,
            TypeSignature::U4 => SemanticType::UInt32,
            TypeSignature::I8 => SemanticType::Int64,
            TypeSignature::U8 => SemanticType::UInt64,
            TypeSignature::R4 => SemanticType::Float32,
            TypeSignature::R8 => SemanticType::Float64,
            TypeSignature::Char => SemanticType::Char,
            TypeSignature::Void => SemanticType::Void,
            TypeSignature::String => SemanticType::StringPointer,
            TypeSignature::ByRef(inner) if **inner == TypeSignature::I4 => {
                SemanticType::Int32Reference
            }
            unsupported => {
                tracing::debug!(ty = %unsupported, "rejecting type without a type code");
                return Err(Error::UnsupportedType(unsupported.clone()));
            }
        };

        Ok(semantic)
    }
}

/// Encodes a single host type into its type code.
///
/// # Errors
/// Returns [`Error::UnsupportedType`] if `signature` has no [`SemanticType`] counterpart.
pub fn encode_type(signature: &TypeSignature, char_set: CharSet) -> Result<String> {
    Ok(SemanticType::try_from(signature)?
        .code(char_set)
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn fixed_table() {
        let expected = [
            (SemanticType::Int8, "C"),
            (SemanticType::UInt8, "E"),
            (SemanticType::Int16, "F"),
            (SemanticType::UInt16, "G"),
            (SemanticType::Int32, "H"),
            (SemanticType::UInt32, "I"),
            (SemanticType::Int64, "_J"),
            (SemanticType::UInt64, "_K"),
            (SemanticType::Float32, "M"),
            (SemanticType::Float64, "N"),
            (SemanticType::WideChar, "_W"),
            (SemanticType::Void, "X"),
            (SemanticType::Int32Reference, "PEAH"),
        ];

        for (semantic, code) in expected {
            for char_set in CharSet::iter() {
                assert_eq!(semantic.code(char_set), code, "{semantic} / {char_set}");
            }
        }

        // Char and StringPointer are covered by char_set_dependent_codes
        assert_eq!(expected.len() + 2, SemanticType::COUNT);
    }

    #[test]
    fn char_set_dependent_codes() {
        assert_eq!(SemanticType::Char.code(CharSet::Narrow), "D");
        assert_eq!(SemanticType::Char.code(CharSet::Wide), "_W");
        assert_eq!(SemanticType::StringPointer.code(CharSet::Narrow), "PEBD");
        assert_eq!(SemanticType::StringPointer.code(CharSet::Wide), "PEB_W");
    }

    #[test]
    fn only_char_types_depend_on_char_set() {
        let dependent: Vec<_> = SemanticType::iter()
            .filter(|ty| ty.code(CharSet::Narrow) != ty.code(CharSet::Wide))
            .collect();

        assert_eq!(
            dependent,
            vec![SemanticType::Char, SemanticType::StringPointer]
        );
    }

    #[test]
    fn classify_signatures() {
        assert_eq!(
            SemanticType::try_from(&TypeSignature::String),
            Ok(SemanticType::StringPointer)
        );
        assert_eq!(
            SemanticType::try_from(&TypeSignature::I4.by_ref()),
            Ok(SemanticType::Int32Reference)
        );
        assert_eq!(
            SemanticType::try_from(&TypeSignature::Char),
            Ok(SemanticType::Char)
        );
    }

    #[test]
    fn reject_unsupported() {
        for signature in [
            TypeSignature::Boolean,
            TypeSignature::Object,
            TypeSignature::I,
            TypeSignature::R8.by_ref(),
            TypeSignature::I4.pointer(),
            TypeSignature::I4.by_ref().by_ref(),
            TypeSignature::SzArray(Box::new(TypeSignature::I4)),
            TypeSignature::Class("System.Guid".to_string()),
        ] {
            assert_eq!(
                encode_type(&signature, CharSet::Wide),
                Err(Error::UnsupportedType(signature.clone()))
            );
        }
    }

    #[test]
    fn char_set_from_flags() {
        assert_eq!(
            CharSet::from_pinvoke_flags(PInvokeAttributes::CHAR_SET_ANSI),
            CharSet::Narrow
        );
        assert_eq!(
            CharSet::from_pinvoke_flags(
                PInvokeAttributes::CHAR_SET_ANSI | PInvokeAttributes::NO_MANGLE
            ),
            CharSet::Narrow
        );
        assert_eq!(
            CharSet::from_pinvoke_flags(PInvokeAttributes::CHAR_SET_UNICODE),
            CharSet::Wide
        );
        assert_eq!(
            CharSet::from_pinvoke_flags(PInvokeAttributes::CHAR_SET_AUTO),
            CharSet::Wide
        );
        assert_eq!(
            CharSet::from_pinvoke_flags(PInvokeAttributes::CHAR_SET_NOT_SPEC),
            CharSet::Narrow
        );
        assert_eq!(
            CharSet::from_pinvoke_flags(PInvokeAttributes::NO_MANGLE),
            CharSet::Narrow
        );
    }
}
