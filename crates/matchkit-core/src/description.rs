//! Append-only text sink for expectation and mismatch renderings

use std::fmt;

use crate::matcher::SelfDescribing;

/// Append-only text buffer that matchers write their descriptions into.
///
/// A *discarding* description drops every append. `Matcher::matches` runs
/// the diagnosing check against one, and composite matchers consult
/// [`Description::is_discarding`] to skip rendering work nobody will read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
    discard: bool,
}

impl Description {
    /// Create an empty description that records appended text
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a description that drops everything appended to it
    pub fn discard() -> Self {
        Self {
            text: String::new(),
            discard: true,
        }
    }

    /// A fresh, empty description with the same discard mode as this one.
    ///
    /// Wrapping matchers render an inner mismatch here first and only copy it
    /// into the outer description once they know the check failed.
    pub fn scratch(&self) -> Self {
        Self {
            text: String::new(),
            discard: self.discard,
        }
    }

    pub fn is_discarding(&self) -> bool {
        self.discard
    }

    /// Append literal text
    pub fn append_text(&mut self, text: impl AsRef<str>) -> &mut Self {
        if !self.discard {
            self.text.push_str(text.as_ref());
        }
        self
    }

    /// Append the printed form of a value.
    ///
    /// Strings and chars print as their quoted `Debug` form; everything else
    /// is wrapped in angle brackets, e.g. `<42>`.
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        if self.discard {
            return self;
        }
        let printed = format!("{:?}", value);
        if printed.starts_with('"') || printed.starts_with('\'') {
            self.text.push_str(&printed);
        } else {
            self.text.push('<');
            self.text.push_str(&printed);
            self.text.push('>');
        }
        self
    }

    /// Append a list of values, each in its printed form
    pub fn append_value_list<V: fmt::Debug>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: &[V],
    ) -> &mut Self {
        self.append_text(start);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            self.append_value(value);
        }
        self.append_text(end)
    }

    /// Append another item's self-description
    pub fn append_description_of<S: SelfDescribing + ?Sized>(&mut self, item: &S) -> &mut Self {
        if !self.discard {
            item.describe_to(self);
        }
        self
    }

    /// Append the self-descriptions of several items
    pub fn append_list<'i, S, I>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        items: I,
    ) -> &mut Self
    where
        S: SelfDescribing + ?Sized + 'i,
        I: IntoIterator<Item = &'i S>,
    {
        self.append_text(start);
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            self.append_description_of(item);
        }
        self.append_text(end)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_value_wraps_non_strings() {
        let mut d = Description::new();
        d.append_value(&42).append_text(" ").append_value(&true);
        assert_eq!(d.as_str(), "<42> <true>");
    }

    #[test]
    fn test_append_value_quotes_strings() {
        let mut d = Description::new();
        d.append_value("bar").append_text(" ").append_value(&'x');
        assert_eq!(d.as_str(), "\"bar\" 'x'");
    }

    #[test]
    fn test_discard_drops_everything() {
        let mut d = Description::discard();
        d.append_text("a").append_value(&1);
        assert!(d.is_empty());
        assert!(d.is_discarding());
        assert!(d.scratch().is_discarding());
    }

    #[test]
    fn test_value_list() {
        let mut d = Description::new();
        d.append_value_list("[", ", ", "]", &[1, 2, 3]);
        assert_eq!(d.to_string(), "[<1>, <2>, <3>]");
    }
}
