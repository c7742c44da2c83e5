//! Ellipsis-compressing renderer for composite mismatches
//!
//! Mismatching members are printed in full, in declaration order. Every run
//! of one or more matching members between, before or after them collapses
//! into a single `...` line.

use crate::description::Description;
use crate::matcher::SelfDescribing;

use super::collector::MismatchCollector;

/// Marker line standing in for a run of elided, matching members
pub const ELLIPSIS_LINE: &str = "  ...\n";

/// Append `inner` to `description`, indenting every line after the first by
/// two spaces and terminating it with exactly one newline.
///
/// Surrounding whitespace of `inner` is trimmed first, so `"a\nb"` and
/// `"a\nb\n"` both render as `"a\n  b\n"`.
pub fn indent_description(description: &mut Description, inner: &Description) {
    let mut lines = inner.as_str().trim().split('\n');
    if let Some(first) = lines.next() {
        description.append_text(first);
    }
    for line in lines {
        description.append_text("\n  ").append_text(line);
    }
    description.append_text("\n");
}

/// Render the mismatch block for a composite.
///
/// `all_keys` is the full declared member order; `mismatches` holds the
/// failing subset. `describe_key` prints a member name in the binding's key
/// style. Writes nothing when `mismatches` is empty.
///
/// # Arguments
///
/// * `all_keys` - Every declared member name, in declaration order
/// * `mismatches` - The members that failed during this evaluation
/// * `description` - Sink receiving the rendered block
/// * `describe_key` - Key printer (bare, quoted, ...)
pub fn describe_nested_mismatches<'k, I, K>(
    all_keys: I,
    mismatches: &MismatchCollector<'_>,
    description: &mut Description,
    describe_key: K,
) where
    I: IntoIterator<Item = &'k str>,
    K: Fn(&str, &mut Description),
{
    if mismatches.is_empty() {
        return;
    }

    let mut previous_key: Option<&str> = None;
    let mut previous_mismatch_key: Option<&str> = None;

    description.append_text("{\n");
    for key in all_keys {
        if mismatches.has(key) {
            if previous_key.is_some() && previous_mismatch_key != previous_key {
                description.append_text(ELLIPSIS_LINE);
            }

            description.append_text("  ");
            describe_key(key, description);
            description.append_text(": ");

            let mut inner = Description::new();
            mismatches.render(key, &mut inner);
            indent_description(description, &inner);

            previous_mismatch_key = Some(key);
        }
        previous_key = Some(key);
    }
    if previous_mismatch_key != previous_key {
        description.append_text(ELLIPSIS_LINE);
    }
    description.append_text("}");
}

/// Render the expectation block for a composite: every member, in order,
/// with its sub-matcher's self-description indented beneath the key.
pub fn describe_members<'m, I, S, K>(members: I, description: &mut Description, describe_key: K)
where
    I: IntoIterator<Item = (&'m str, &'m S)>,
    S: SelfDescribing + ?Sized + 'm,
    K: Fn(&str, &mut Description),
{
    description.append_text("{\n");
    for (key, matcher) in members {
        description.append_text("  ");
        describe_key(key, description);
        description.append_text(": ");

        let mut inner = Description::new();
        matcher.describe_to(&mut inner);
        indent_description(description, &inner);
    }
    description.append_text("}");
}

/// Key printer that writes the member name as-is
pub fn bare_key(key: &str, description: &mut Description) {
    description.append_text(key);
}
