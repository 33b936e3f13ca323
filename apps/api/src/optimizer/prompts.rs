// All LLM prompt constants for the optimizer, plus the prompt builder.

/// Job descriptions are cut to this many characters before prompting.
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 1200;
/// Documents are cut to this many characters before prompting.
pub const MAX_DOCUMENT_CHARS: usize = 3000;

/// System prompt for resume optimization.
pub const OPTIMIZE_SYSTEM: &str = "You are a professional resume optimizer. \
    You preserve LaTeX structure perfectly while enhancing content with job-relevant keywords. \
    Always return valid, compilable LaTeX code in JSON format.";

/// Used when the caller asks to keep the document layout untouched.
pub const PRESERVE_FORMAT_INSTRUCTION: &str = r"CRITICAL RULES FOR FORMAT PRESERVATION:
1. Keep the EXACT SAME \documentclass line
2. Keep ALL \usepackage commands unchanged
3. Keep ALL margin/spacing settings (\geometry, \setlength, etc.)
4. Keep section order exactly the same
5. Keep ALL LaTeX commands intact (\textbf, \section*, \item, etc.)
6. ONLY modify the text content within sections
7. Do NOT add new sections or remove existing ones";

/// Used when layout changes are allowed.
pub const FREE_FORMAT_INSTRUCTION: &str =
    "You can suggest improved formatting but keep it professional and ATS-friendly.";

/// Task description, worked example and output schema. Appended after the inputs.
pub const TASK_AND_SCHEMA: &str = r#"YOUR TASK:
1. Analyze job requirements and extract keywords
2. Enhance ONLY the content of existing bullet points/descriptions
3. Naturally integrate job keywords into current text
4. Make content more impactful with action verbs and metrics
5. Return COMPLETE, COMPILABLE LaTeX code

EXAMPLE TRANSFORMATION:
Original: "- Developed web application"
Enhanced: "- Developed responsive web application using React and TypeScript, implementing RESTful APIs to serve 10K+ daily users"

OUTPUT FORMAT (valid JSON):
{
  "keywords_added": ["React", "TypeScript", "REST API", "PostgreSQL"],
  "modified_latex": "COMPLETE LaTeX code here",
  "match_score": 87,
  "suggestions": ["Add quantifiable metrics to achievements", "Include specific technologies from job posting"]
}

IMPORTANT:
- Escape every backslash for JSON: write \\textbf for \textbf and \\\\ for a \\ line break
- Return COMPLETE LaTeX from \documentclass to \end{document}
- Score should be 70-95
- Ensure code compiles in Overleaf without errors"#;

/// Builds the user prompt: format instruction, truncated job description,
/// truncated document, then the task and output schema.
pub fn build_optimize_prompt(document: &str, job_description: &str, preserve_format: bool) -> String {
    let format_instruction = if preserve_format {
        PRESERVE_FORMAT_INSTRUCTION
    } else {
        FREE_FORMAT_INSTRUCTION
    };

    format!(
        "{format_instruction}\n\n\
        JOB DESCRIPTION (extract key skills/requirements):\n{jd}\n\n\
        CURRENT RESUME LaTeX CODE:\n{doc}\n\n\
        {TASK_AND_SCHEMA}",
        jd = truncate_chars(job_description, MAX_JOB_DESCRIPTION_CHARS),
        doc = truncate_chars(document, MAX_DOCUMENT_CHARS),
    )
}

/// Returns at most `max` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
