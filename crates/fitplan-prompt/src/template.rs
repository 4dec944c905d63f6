//! Fixed text templates with named `{slot}` placeholders.
//!
//! ```rust
//! use fitplan_prompt::template::TextTemplate;
//!
//! const GREETING: TextTemplate = TextTemplate::new("Hello {name}, ready for {activity}?");
//!
//! assert_eq!(GREETING.slots(), vec!["name", "activity"]);
//! assert_eq!(
//!     GREETING.fill([("name", "Ada"), ("activity", "leg day")]),
//!     "Hello Ada, ready for leg day?",
//! );
//! ```
//!
//! Substitution happens in a single pass: values are inserted verbatim, never
//! escaped, and never re-scanned for placeholders. A placeholder without a
//! value is left in the output untouched, so filling is infallible.

use std::{collections::HashMap, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTemplate {
    source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Slot(&'a str),
}

impl TextTemplate {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// The raw template text.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Slot names in order of first appearance, without duplicates.
    pub fn slots(&self) -> Vec<&'static str> {
        let mut slots: Vec<&'static str> = Vec::new();
        for segment in tokenize(self.source) {
            if let Segment::Slot(name) = segment {
                if !slots.contains(&name) {
                    slots.push(name);
                }
            }
        }
        slots
    }

    /// Substitute every slot that has a value in `values`.
    pub fn fill<'k, I, V>(&self, values: I) -> String
    where
        I: IntoIterator<Item = (&'k str, V)>,
        V: Display,
    {
        let values: HashMap<&str, String> = values
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();

        let mut out = String::with_capacity(self.source.len());
        for segment in tokenize(self.source) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(name) => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

fn is_slot_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn tokenize(source: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = source;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_slot_name(&after[..close]) => {
                if open > 0 {
                    segments.push(Segment::Text(&rest[..open]));
                }
                segments.push(Segment::Slot(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                segments.push(Segment::Text(&rest[..=open]));
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}
