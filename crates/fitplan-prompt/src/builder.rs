//! Builder‐style helper for constructing **Markdown** text.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use fitplan_prompt::builder::MarkdownBuilder;
//!
//! let md = MarkdownBuilder::new()
//!     .add_section_h1("Personalized Workout Plan")
//!     .add_blank_line()
//!     .add_key_value("Goal", "Endurance")
//!     .finalize();
//!
//! assert_eq!(md, "# Personalized Workout Plan\n\n**Goal**: Endurance\n");
//! ```
//!
//! The builder performs **no validation** and no smart formatting: newlines
//! and whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default)]
pub struct MarkdownBuilder {
    buffer: String,
}

impl MarkdownBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(self, line: impl Display) -> Self {
        self.add_line(format_args!("# {line}"))
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(self, line: impl Display) -> Self {
        self.add_line(format_args!("## {line}"))
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        // Writing into a String is infallible.
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Add a key–value pair with a **bold** key: `**Key**: Value`
    pub fn add_key_value(self, key: impl Display, value: impl Display) -> Self {
        self.add_line(format_args!("**{key}**: {value}"))
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_exactly_what_was_requested() {
        let md = MarkdownBuilder::new()
            .add_section_h2("Workout 1")
            .add_key_value("Duration", "45 minutes")
            .add_delimiter()
            .add_line("Squats 3x10")
            .finalize();

        assert_eq!(
            md,
            "## Workout 1\n**Duration**: 45 minutes\n---\nSquats 3x10\n"
        );
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(MarkdownBuilder::new().finalize().is_empty());
    }
}
