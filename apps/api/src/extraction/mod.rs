// Extractor flow: Document Loader → Field Heuristics → Template Renderer.
// Parse failures never surface to the client; they degrade to the default template.

pub mod handlers;
pub mod heuristics;
pub mod loader;
pub mod render;
#[cfg(test)]
pub mod test_pdf;

use tracing::info;

use crate::models::resume::ResumeFields;
use render::{render_document, DEFAULT_TEMPLATE};

/// Turns extracted resume text into a LaTeX document.
///
/// Empty or whitespace-only text returns [`DEFAULT_TEMPLATE`] verbatim.
pub fn build_document(text: &str) -> String {
    if text.trim().is_empty() {
        info!("No extractable text; returning default template");
        return DEFAULT_TEMPLATE.to_string();
    }

    let fields = ResumeFields::extract(text);
    info!(
        "Extracted fields: name={:?}, education={} lines, skills={} lines, experience={} lines",
        fields.name,
        fields.education.len(),
        fields.skills.len(),
        fields.experience.len()
    );

    render_document(&fields.escaped())
}
