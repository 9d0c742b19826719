//! Native namespace qualification.
//!
//! A managed declaration marks where its native C++ namespace starts inside its own namespace.
//! Three markers are recognised, first match wins:
//!
//! 1. a leading `DllImport.` segment
//! 2. an embedded `.DllImport.` segment
//! 3. an embedded `._.` segment, a short form of the previous one
//!
//! Everything after the marker is the C++ namespace, outermost first. Decorated names list
//! scopes innermost first, so the segments are emitted in reverse, each one prefixed by `@`.
//!
//! ```rust
//! use vcmangle::mangle::resolve_namespace;
//!
//! assert_eq!(resolve_namespace("DllImport.Outer.Inner"), "@Inner@Outer");
//! assert_eq!(resolve_namespace("Company.Product._.my.ns"), "@ns@my");
//! assert_eq!(resolve_namespace("Company.Product"), "");
//! ```

const LEADING_MARKER: &str = "DllImport.";
const EMBEDDED_MARKER: &str = ".DllImport.";
const SHORT_MARKER: &str = "._.";

/// Locates the native namespace marker, returning its byte offset and the number of `.`
/// separated segments it occupies.
fn find_marker(hint: &str) -> Option<(usize, usize)> {
    if hint.starts_with(LEADING_MARKER) {
        return Some((0, 1));
    }

    hint.find(EMBEDDED_MARKER)
        .or_else(|| hint.find(SHORT_MARKER))
        .map(|start| (start, 2))
}

/// Derives the `@`-delimited, innermost-first native scope from a managed namespace.
///
/// Returns an empty string if `hint` carries none of the markers.
#[must_use]
pub fn resolve_namespace(hint: &str) -> String {
    let Some((start, skip)) = find_marker(hint) else {
        return String::new();
    };

    let segments: Vec<&str> = hint[start..].split('.').skip(skip).collect();
    segments
        .iter()
        .rev()
        .fold(String::new(), |mut scope, segment| {
            scope.push('@');
            scope.push_str(segment);
            scope
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_marker() {
        assert_eq!(resolve_namespace("DllImport.Math"), "@Math");
        assert_eq!(resolve_namespace("DllImport.Outer.Inner"), "@Inner@Outer");
    }

    #[test]
    fn embedded_marker() {
        assert_eq!(resolve_namespace("A.DllImport.B"), "@B");
        assert_eq!(
            resolve_namespace("UnitTests.DllImport.my.ns"),
            "@ns@my"
        );
    }

    #[test]
    fn short_marker() {
        assert_eq!(resolve_namespace("A._.B"), "@B");
        assert_eq!(resolve_namespace("A.B._.my.ns"), "@ns@my");
    }

    #[test]
    fn embedded_marker_wins_over_short_marker() {
        assert_eq!(resolve_namespace("A._.B.DllImport.C"), "@C");
    }

    #[test]
    fn leading_marker_wins_over_embedded() {
        assert_eq!(
            resolve_namespace("DllImport.X.DllImport.Y"),
            "@Y@DllImport@X"
        );
    }

    #[test]
    fn no_marker() {
        assert_eq!(resolve_namespace(""), "");
        assert_eq!(resolve_namespace("Company.Product"), "");
        assert_eq!(resolve_namespace("DllImport"), "");
        assert_eq!(resolve_namespace("A.DllImport"), "");
        assert_eq!(resolve_namespace("NotDllImport.X"), "");
    }

    #[test]
    fn marker_without_namespace() {
        assert_eq!(resolve_namespace("DllImport."), "@");
    }
}
