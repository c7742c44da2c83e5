//! Per-evaluation record of which members failed

use std::borrow::Cow;
use std::fmt;

use crate::description::Description;

/// A mismatch description that has not been rendered yet.
///
/// Captures the failing sub-matcher and the member's actual value; only
/// invoked if someone actually asks for the text.
pub type DeferredMismatch<'a> = Box<dyn Fn(&mut Description) + 'a>;

/// Insertion-ordered set of failing members, each paired with its deferred
/// mismatch description.
///
/// A collector lives for a single evaluation and is never cached.
#[derive(Default)]
pub struct MismatchCollector<'a> {
    entries: Vec<(Cow<'a, str>, DeferredMismatch<'a>)>,
}

impl<'a> MismatchCollector<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record that member `name` failed.
    pub fn record(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        render: impl Fn(&mut Description) + 'a,
    ) {
        self.entries.push((name.into(), Box::new(render)));
    }

    /// Record a failure whose deferred description is already boxed.
    pub fn record_deferred(&mut self, name: impl Into<Cow<'a, str>>, render: DeferredMismatch<'a>) {
        self.entries.push((name.into(), render));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Names of the failing members, in the order they were recorded
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_ref())
    }

    /// Render the mismatch recorded for `name` into `description`.
    ///
    /// Returns `false` if no mismatch was recorded under that name.
    pub fn render(&self, name: &str, description: &mut Description) -> bool {
        match self.entries.iter().find(|(key, _)| key == name) {
            Some((_, render)) => {
                render(description);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for MismatchCollector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
