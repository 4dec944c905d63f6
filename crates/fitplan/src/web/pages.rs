//! Server-rendered HTML. Every user or model supplied string goes through
//! `html_escape`.

use std::fmt::Write as _;

use fitplan_types::{
    Equipment, FitnessLevel, Goal, WorkoutResult,
    request::{DURATION_DEFAULT, DURATION_MAX, DURATION_MIN, DURATION_STEP},
};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::history::History;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin:.5rem 0}\
pre{white-space:pre-wrap;background:#f6f6f6;padding:1rem}\
details{margin:.5rem 0}\
.error{color:#a00}";

/// Form plus the session history. `current` is the attempt just made, shown
/// above the history with a download link when a PDF exists.
pub fn index(history: &History, current: Option<&WorkoutResult>, can_download: bool) -> String {
    let mut body = String::new();
    body.push_str("<h1>AI Personalized Workout Planner</h1>\n");
    body.push_str(&form());

    if let Some(result) = current {
        body.push_str("<h2>Your Workout Plan</h2>\n");
        let _ = writeln!(body, "<pre>{}</pre>", encode_text(&result.plan));
        if can_download {
            body.push_str("<p><a href=\"/download\">Download as PDF</a></p>\n");
        }
    }

    body.push_str(&history_section(history));
    layout(&body)
}

pub fn invalid_request(message: &str) -> String {
    let body = format!(
        "<h1>Invalid request</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to the form</a></p>\n",
        encode_text(message)
    );
    layout(&body)
}

pub fn not_found(message: &str) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the form</a></p>\n",
        encode_text(message)
    );
    layout(&body)
}

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI Personalized Workout Planner</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n"
    )
}

fn form() -> String {
    let mut html = String::from("<form method=\"post\" action=\"/generate\">\n");
    html.push_str(&select("fitness_level", "Select your fitness level", FitnessLevel::LABELS));
    html.push_str(&select("goal", "Select your goal", Goal::LABELS));
    let _ = writeln!(
        html,
        "<label>Workout duration (minutes) <input type=\"number\" name=\"duration\" \
         min=\"{DURATION_MIN}\" max=\"{DURATION_MAX}\" step=\"{DURATION_STEP}\" \
         value=\"{DURATION_DEFAULT}\" required></label>"
    );
    html.push_str(&select("equipment", "Available equipment", Equipment::LABELS));
    html.push_str("<button type=\"submit\">Generate Workout Plan</button>\n</form>\n");
    html
}

fn select(name: &str, label: &str, options: &[&str]) -> String {
    let mut html = format!("<label>{label} <select name=\"{name}\">");
    for option in options {
        let _ = write!(
            html,
            "<option value=\"{}\">{}</option>",
            encode_double_quoted_attribute(option),
            encode_text(option)
        );
    }
    html.push_str("</select></label>\n");
    html
}

fn history_section(history: &History) -> String {
    if history.is_empty() {
        return String::new();
    }

    let mut html = String::from("<h2>Workout History</h2>\n");
    for (n, result) in history.entries().enumerate() {
        let _ = writeln!(
            html,
            "<details><summary>Workout {} - {}</summary>",
            n + 1,
            result.date_label()
        );
        html.push_str("<ul>");
        for (label, value) in result.request.metadata_lines() {
            let _ = write!(html, "<li><strong>{label}:</strong> {}</li>", encode_text(&value));
        }
        html.push_str("</ul>\n");
        let _ = writeln!(html, "<pre>{}</pre>\n</details>", encode_text(&result.plan));
    }
    html
}
