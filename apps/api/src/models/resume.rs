use crate::extraction::heuristics::{
    extract_contact, extract_name, extract_section, EDUCATION_HEADERS, EXPERIENCE_HEADERS,
    SKILLS_HEADERS,
};
use crate::extraction::render::escape_latex;

/// Structural fields pulled out of a resume's plain text.
///
/// Section fields hold bulleted lines and are empty when nothing was found;
/// the renderer substitutes example text for them. `name` and `contact` always
/// carry a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFields {
    pub name: String,
    /// `email | phone | linkedin`, each part optional.
    pub contact: String,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
}

impl ResumeFields {
    /// Runs every field heuristic independently over `text`.
    pub fn extract(text: &str) -> Self {
        Self {
            name: extract_name(text),
            contact: extract_contact(text),
            education: extract_section(text, EDUCATION_HEADERS),
            skills: extract_section(text, SKILLS_HEADERS),
            experience: extract_section(text, EXPERIENCE_HEADERS),
        }
    }

    /// Returns a copy with every field escaped for LaTeX, line by line.
    pub fn escaped(&self) -> Self {
        Self {
            name: escape_latex(&self.name),
            contact: escape_latex(&self.contact),
            education: escape_lines(&self.education),
            skills: escape_lines(&self.skills),
            experience: escape_lines(&self.experience),
        }
    }
}

fn escape_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| escape_latex(line)).collect()
}
