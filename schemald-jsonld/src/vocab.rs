//! Vocabulary enumerations written as member IRIs.

/// Strips the vocabulary base from an enumeration member reference.
///
/// Accepts the full IRI (`https://schema.org/EventScheduled`), the same IRI
/// with an `http` scheme, or the bare member name. Anything else comes
/// back unchanged and will not match a member.
#[must_use]
pub fn member_name<'a>(text: &'a str, base: &str) -> &'a str {
    if let Some(name) = text.strip_prefix(base) {
        return name;
    }
    if let Some(authority) = base.strip_prefix("https://") {
        if let Some(name) = text
            .strip_prefix("http://")
            .and_then(|rest| rest.strip_prefix(authority))
        {
            return name;
        }
    }
    text
}
