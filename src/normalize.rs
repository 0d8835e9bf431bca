//! County-name canonicalization.
//!
//! Every county comparison in the pipeline routes through [`county_key`];
//! two names refer to the same county iff their keys are equal. Matching is
//! exact string equality on the key, never fuzzy.

/// Canonical matching key for a county name.
///
/// Lower-cases, strips every occurrence of the literal word "county",
/// collapses whitespace runs to a single space, and trims. Total over all
/// inputs and idempotent.
pub fn county_key(name: &str) -> String {
    let stripped = name.to_lowercase().replace("county", "");
    let mut key = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            pending_space = !key.is_empty();
        } else {
            if pending_space {
                key.push(' ');
                pending_space = false;
            }
            key.push(ch);
        }
    }
    key
}
