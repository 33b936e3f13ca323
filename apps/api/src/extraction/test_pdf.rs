//! Builds small, valid text PDFs for loader and upload tests.

/// Assembles a PDF with one page per entry in `pages`, each line drawn
/// top-down in Helvetica. The cross-reference table carries exact offsets.
pub fn text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let page_count = pages.len();
    // 1 catalog, 2 page tree, then a page + content pair per page, then the font.
    let font_id = 3 + 2 * page_count;
    let mut objects: Vec<String> = Vec::with_capacity(font_id);

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 3 + 2 * i))
        .collect();
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
        kids.join(" ")
    ));

    for (i, lines) in pages.iter().enumerate() {
        let content_id = 4 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {content_id} 0 R >>"
        ));

        let mut stream = String::from("BT\n/F1 12 Tf\n72 720 Td\n");
        for (n, line) in lines.iter().enumerate() {
            if n > 0 {
                stream.push_str("0 -16 Td\n");
            }
            stream.push_str(&format!("({line}) Tj\n"));
        }
        stream.push_str("ET");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_at = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));

    pdf.into_bytes()
}

/// Two-page resume: header and education on page one, skills on page two.
pub fn two_page_resume() -> Vec<u8> {
    text_pdf(&[
        &[
            "Jane Marie Doe",
            "jane@example.com",
            "EDUCATION",
            "BSc Computer Science 2021",
        ],
        &["SKILLS", "Rust and Go programming"],
    ])
}
