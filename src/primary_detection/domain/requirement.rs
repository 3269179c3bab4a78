use super::PackageName;
use crate::shared::Result;

/// Characters that terminate the bare name inside a requirement specifier.
///
/// Covers comparison operators (`>=`, `==`, `<`, `<=`, `>`, `!=`, `~=`,
/// `===`), extras brackets, parenthesized constraints, environment-marker
/// semicolons, and whitespace. Matching on the first character of each
/// operator is sufficient since we only need the boundary position.
fn is_name_terminator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '<' | '>' | '=' | '!' | '~' | ';' | '(' | '[' | ',')
}

/// Returns the bare (unparsed, unnormalized) name portion of a requirement
/// specifier, with version constraints, extras and markers stripped.
///
/// `"requests>=2.0,<3"` → `"requests"`, `"package[extra]==1.0"` → `"package"`.
pub fn strip_version_constraint(specifier: &str) -> &str {
    let trimmed = specifier.trim();
    match trimmed.find(is_name_terminator) {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

/// Parses a requirement specifier string into a normalized package name.
///
/// # Errors
/// Returns an error when no name remains after stripping, e.g. for a bare
/// constraint like `">=1.0"` or an empty string. Callers building the
/// dependency graph skip such edges rather than aborting.
pub fn parse_requirement(specifier: &str) -> Result<PackageName> {
    let bare = strip_version_constraint(specifier);
    PackageName::normalized(bare)
}
