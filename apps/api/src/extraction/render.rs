//! Template renderer — substitutes resume fields into the fixed LaTeX skeleton.
//!
//! The renderer never escapes: callers pass fields through [`escape_latex`] first.
//! Section lines are joined with explicit LaTeX line breaks here, after escaping.

use crate::models::resume::ResumeFields;

const EDUCATION_FALLBACK: &str = r"Bachelor of Technology in Computer Science\\University Name, 2023";
const SKILLS_FALLBACK: &str = "Python, JavaScript, React, Django, PostgreSQL, Docker, Git";
const EXPERIENCE_FALLBACK: &str =
    r"Software Developer Intern - Company Name (2023)\\- Developed web applications using modern frameworks";

/// LaTeX explicit line break between section lines.
const LINE_BREAK: &str = r"\\";

const PREAMBLE: &str = r"\documentclass[a4paper,11pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[margin=0.75in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}

\pagestyle{empty}

\begin{document}

";

/// Returned verbatim when no text could be extracted from the upload.
pub const DEFAULT_TEMPLATE: &str = r"\documentclass[a4paper,11pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[margin=0.75in]{geometry}

\pagestyle{empty}

\begin{document}

\begin{center}
{\Large \textbf{Your Name}}\\[0.2cm]
email@example.com | +91-1234567890 | linkedin.com/in/yourname
\end{center}

\vspace{0.3cm}

\section*{Education}
Bachelor of Technology in Computer Science\\
University Name, Graduated 2023\\
GPA: 8.5/10

\section*{Skills}
\textbf{Languages:} Python, JavaScript, Java, C++\\
\textbf{Frameworks:} Django, React, Node.js, Flask\\
\textbf{Tools:} Git, Docker, PostgreSQL, MongoDB

\section*{Experience}
\textbf{Software Developer Intern} - Company Name (June 2023 - Dec 2023)
\begin{itemize}
\item Developed web applications using Django and React
\item Implemented REST APIs serving 5000+ requests per day
\item Collaborated with team of 5 developers using Agile methodology
\end{itemize}

\section*{Projects}
\textbf{E-commerce Platform}
\begin{itemize}
\item Built full-stack application with React frontend and Django backend
\item Integrated payment gateway and user authentication
\end{itemize}

\end{document}";

/// Escapes the LaTeX special characters `\ & % $ # _ { } ~ ^`.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            other => out.push(other),
        }
    }
    out
}

/// Renders already-escaped fields into the document skeleton.
pub fn render_document(fields: &ResumeFields) -> String {
    let mut doc = String::from(PREAMBLE);

    doc.push_str(&format!(
        "\\begin{{center}}\n{{\\Large \\textbf{{{name}}}}}\\\\[0.2cm]\n{contact}\n\\end{{center}}\n\n\\vspace{{0.3cm}}\n\n",
        name = fields.name,
        contact = fields.contact,
    ));

    push_section(&mut doc, "Education", &fields.education, EDUCATION_FALLBACK);
    push_section(&mut doc, "Skills", &fields.skills, SKILLS_FALLBACK);
    push_section(&mut doc, "Experience", &fields.experience, EXPERIENCE_FALLBACK);

    doc.push_str("\\end{document}");
    doc
}

fn push_section(doc: &mut String, title: &str, lines: &[String], fallback: &str) {
    let body = if lines.is_empty() {
        fallback.to_string()
    } else {
        lines.join(LINE_BREAK)
    };
    doc.push_str(&format!("\\section*{{{title}}}\n{body}\n\n"));
}
