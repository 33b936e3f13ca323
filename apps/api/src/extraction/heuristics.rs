//! Field heuristics — derive resume fields from plain extracted text.
//!
//! Every function here is pure and stateless: regexes and keyword scans over an
//! immutable buffer, no NLP model, no shared state.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

pub const FALLBACK_NAME: &str = "Your Name";
pub const FALLBACK_CONTACT: &str = "email@example.com | +91-1234567890";

/// Header synonyms per section, searched in this order.
pub const EDUCATION_HEADERS: &[&str] = &["EDUCATION", "ACADEMIC BACKGROUND"];
pub const SKILLS_HEADERS: &[&str] = &["SKILLS", "TECHNICAL SKILLS", "CORE COMPETENCIES"];
pub const EXPERIENCE_HEADERS: &[&str] = &[
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "PROFESSIONAL EXPERIENCE",
    "PROJECTS",
];

/// Headings that terminate a section body.
const SECTION_BOUNDARIES: &[&str] = &[
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "AWARDS",
];

/// Lines containing any of these (uppercased) are never taken as the name.
const NAME_SKIP_MARKERS: &[&str] = &["EMAIL", "PHONE", "LINKEDIN", "GITHUB", "@", "HTTP", "WWW"];

const NAME_SCAN_LINES: usize = 8;
const MAX_NAME_CHARS: usize = 50;
/// Hard cap on a section body when no following heading is found.
const MAX_SECTION_SPAN: usize = 800;
const MAX_SECTION_LINES: usize = 10;
const MIN_LINE_CHARS: usize = 4;
const BULLET_GLYPHS: &[char] = &['•', '·', '*'];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\+\(]?[\d\s\-\(\)]{10,}").unwrap());
static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w\-]+").unwrap());

/// Returns the candidate's name: the first short, capitalised, keyword-free line
/// among the first 8 non-empty lines, title-cased. Falls back to `"Your Name"`.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .filter(|line| {
            let upper = line.to_uppercase();
            !NAME_SKIP_MARKERS.iter().any(|m| upper.contains(m))
        })
        .find(|line| looks_like_name(line))
        .map(title_case)
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn looks_like_name(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len())
        && line.chars().count() < MAX_NAME_CHARS
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_alpha = false;
    for c in line.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Returns `email | phone | linkedin` for whichever parts are found, in that order.
pub fn extract_contact(text: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);

    if let Some(m) = EMAIL_RE.find(text) {
        parts.push(m.as_str());
    }
    // The phone class also matches runs of whitespace; require a digit.
    if let Some(phone) = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|s| s.chars().any(|c| c.is_ascii_digit()))
    {
        parts.push(phone);
    }
    if let Some(m) = LINKEDIN_RE.find(text) {
        parts.push(m.as_str());
    }

    if parts.is_empty() {
        FALLBACK_CONTACT.to_string()
    } else {
        parts.join(" | ")
    }
}

/// Extracts the body of the first section whose header matches one of `headers`,
/// as hyphen-bulleted lines in document order.
///
/// Returns no lines when no header matches or the body has no usable lines;
/// callers supply their own fallback text.
pub fn extract_section(text: &str, headers: &[&str]) -> Vec<String> {
    // ASCII uppercasing keeps byte offsets aligned with `text`.
    let upper = text.to_ascii_uppercase();

    for header in headers {
        let Some(span) = find_section_span(&upper, header) else {
            continue;
        };
        let lines: Vec<&str> = text[span]
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            continue;
        }

        return lines
            .into_iter()
            .take(MAX_SECTION_LINES)
            .filter(|l| l.chars().count() >= MIN_LINE_CHARS)
            .map(format_bullet)
            .collect();
    }

    Vec::new()
}

/// Locates the body following the first occurrence of `header` in `upper`.
///
/// The body ends at the nearest boundary heading that starts strictly after the
/// body start, or `MAX_SECTION_SPAN` characters later.
pub fn find_section_span(upper: &str, header: &str) -> Option<Range<usize>> {
    let start = upper.find(header)? + header.len();
    let rest = &upper[start..];

    let end = SECTION_BOUNDARIES
        .iter()
        .filter_map(|boundary| rest.find(boundary))
        .filter(|&pos| pos > 0)
        .min()
        .unwrap_or_else(|| {
            rest.char_indices()
                .nth(MAX_SECTION_SPAN)
                .map_or(rest.len(), |(offset, _)| offset)
        });

    Some(start..start + end)
}

fn format_bullet(line: &str) -> String {
    if line.starts_with('-') || line.starts_with(BULLET_GLYPHS) {
        line.replace(BULLET_GLYPHS, "-")
    } else {
        format!("- {line}")
    }
}
