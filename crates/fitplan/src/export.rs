//! PDF export of a generated plan.
//!
//! Layout is a single A4 column: centred title, the four request lines and
//! then the plan, word-wrapped. Text that does not fit on a page continues
//! on the next one.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use fitplan_types::{WorkoutRequest, WorkoutResult};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use thiserror::Error;
use tracing::{debug, info};

pub const DOCUMENT_TITLE: &str = "Personalized Workout Plan";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const META_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;
const META_STEP: f32 = 10.0;
const BODY_STEP: f32 = 6.0;

const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const PT_TO_MM: f32 = 0.352_778;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render PDF: {0}")]
    Render(String),

    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `Workout_Plan_<YYYYMMDDHHMMSS>.pdf` for the given local time.
pub fn file_name_for(timestamp: DateTime<Local>) -> String {
    format!("Workout_Plan_{}.pdf", timestamp.format("%Y%m%d%H%M%S"))
}

#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render `result` into PDF bytes without touching the filesystem.
    pub fn render(&self, result: &WorkoutResult) -> Result<Vec<u8>, ExportError> {
        render_document(&result.request, &result.plan)
    }

    /// Write `result` to the output directory, named after the current time.
    pub fn export(&self, result: &WorkoutResult) -> Result<PathBuf, ExportError> {
        self.export_at(result, Local::now())
    }

    /// Like [`export`](Self::export) with an explicit timestamp. An existing
    /// file of the same name is overwritten.
    pub fn export_at(
        &self,
        result: &WorkoutResult,
        timestamp: DateTime<Local>,
    ) -> Result<PathBuf, ExportError> {
        let bytes = self.render(result)?;
        let path = self.output_dir.join(file_name_for(timestamp));

        fs::write(&path, &bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = bytes.len(), "workout plan exported");
        Ok(path)
    }
}

fn render_document(request: &WorkoutRequest, plan: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Render(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| ExportError::Render(err.to_string()))?;

    let layer = doc.get_page(page).get_layer(layer);
    let mut cursor = Cursor {
        doc: &doc,
        layer,
        y: PAGE_HEIGHT - MARGIN - TITLE_SIZE * PT_TO_MM,
        pages: 1,
    };

    let title_x = ((PAGE_WIDTH - text_width(DOCUMENT_TITLE, TITLE_SIZE)) / 2.0).max(MARGIN);
    cursor.write(DOCUMENT_TITLE, TITLE_SIZE, title_x, &bold, META_STEP);
    cursor.advance(META_STEP / 2.0);

    for (label, value) in request.metadata_lines() {
        let text = to_latin1(&format!("{label}: {value}"));
        for line in wrap_text(&text, TEXT_WIDTH, |s| text_width(s, META_SIZE)) {
            cursor.write(&line, META_SIZE, MARGIN, &font, META_STEP);
        }
    }
    cursor.advance(BODY_STEP);

    for line in wrap_text(&to_latin1(plan), TEXT_WIDTH, |s| text_width(s, BODY_SIZE)) {
        cursor.write(&line, BODY_SIZE, MARGIN, &font, BODY_STEP);
    }

    debug!(pages = cursor.pages, "pdf rendered");
    doc.save_to_bytes()
        .map_err(|err| ExportError::Render(err.to_string()))
}

struct Cursor<'d> {
    doc: &'d PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl Cursor<'_> {
    fn write(&mut self, text: &str, size: f32, x: f32, font: &IndirectFontRef, step: f32) {
        if self.y < MARGIN {
            self.new_page();
        }
        if !text.is_empty() {
            self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        }
        self.y -= step;
    }

    fn advance(&mut self, step: f32) {
        self.y -= step;
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), format!("Layer {}", self.pages + 1));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN - BODY_SIZE * PT_TO_MM;
        self.pages += 1;
    }
}

/// Rendered width in mm of `text` set in Helvetica at `size` points.
fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(helvetica_advance(c))).sum();
    units as f32 / 1000.0 * size * PT_TO_MM
}

/// Helvetica advance widths in 1/1000 em (standard AFM metrics). Characters
/// above ASCII are given the widest Latin-1 advance.
fn helvetica_advance(c: char) -> u16 {
    const ASCII: [u16; 95] = [
        278, 278, 355, 556, 556, 889, 667, 222, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
    ];

    match c as u32 {
        code @ 0x20..=0x7E => ASCII[(code - 0x20) as usize],
        _ => 1000,
    }
}

/// Greedy word wrap by rendered width. Paragraph breaks are kept as empty
/// lines and words wider than `max_width` are split.
fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_owned()
            } else {
                format!("{current} {word}")
            };
            if measure(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for c in word.chars() {
                current.push(c);
                if measure(&current) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Map text onto what the built-in Helvetica can show.
fn to_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2212}' => out.push('-'),
            '\u{2014}' | '\u{2015}' => out.push_str("--"),
            '\u{2022}' | '\u{2023}' | '\u{25CF}' | '\u{25E6}' | '\u{2043}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' | '\u{202F}' => out.push(' '),
            '\u{2192}' => out.push_str("->"),
            '\u{00D7}' => out.push('x'),
            '\t' => out.push_str("    "),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c if (c as u32) < 0x100 => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn file_name_uses_fourteen_digit_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 5, 7).unwrap();
        assert_eq!(file_name_for(at), "Workout_Plan_20260314090507.pdf");
    }

    fn chars(text: &str) -> f32 {
        text.chars().count() as f32
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("one two three four", 9.0, chars);
        assert_eq!(lines, ["one two", "three", "four"]);
    }

    #[test]
    fn keeps_blank_lines_and_splits_long_words() {
        let lines = wrap_text("abcdefghij\n\nxy", 4.0, chars);
        assert_eq!(lines, ["abcd", "efgh", "ij", "", "xy"]);
    }

    #[test]
    fn wide_glyphs_stay_inside_the_margins() {
        let measure = |s: &str| text_width(s, BODY_SIZE);
        let text = format!("{} {}", "W".repeat(200), "MMMM WWWW @@@@ ".repeat(30));

        let lines = wrap_text(&text, TEXT_WIDTH, measure);

        assert!(lines.len() > 5);
        for line in &lines {
            assert!(measure(line) <= TEXT_WIDTH, "{line} overflows");
        }
        // About 47 `W` fit on one line at 12pt.
        assert!(lines[0].len() < 50);
    }

    #[test]
    fn narrow_text_uses_the_full_width() {
        let lines = wrap_text(&"il ".repeat(200), TEXT_WIDTH, |s| text_width(s, BODY_SIZE));
        assert!(lines[0].len() > 85);
    }

    #[test]
    fn transliterates_typography() {
        assert_eq!(
            to_latin1("\u{201C}Squat\u{201D} \u{2013} 3\u{00D7}10 \u{2022} caf\u{e9} \u{1F4AA}"),
            "\"Squat\" - 3x10 - caf\u{e9} ?"
        );
    }

    #[test]
    fn renders_a_pdf() {
        let request = WorkoutRequest::new("Beginner", "Endurance", 30, "Bodyweight");
        let plan = "Warm-up\n".repeat(120);
        let bytes = render_document(&request, &plan).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
