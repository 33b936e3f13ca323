//! Document loader — scratch-file handling and PDF text extraction.
//!
//! The loader never reports a parse failure: a corrupt or unsupported PDF
//! yields an empty string and the pipeline falls back to the default template.
//! Only failing to write the scratch file is an error.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::AppError;

/// Writes the upload to a request-owned scratch file.
///
/// The path is `upload_<pid>_<random>_<filename>`; the file is deleted when the
/// returned handle is dropped, on every exit path.
pub fn write_scratch_file(dir: &Path, filename: &str, data: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(&format!("upload_{}_", std::process::id()))
        .suffix(&format!("_{}", sanitize_filename(filename)))
        .tempfile_in(dir)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}

/// Extracts the text of every page in order, newline separated.
/// Returns an empty string if the file cannot be opened or parsed.
pub fn extract_text(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => text.replace('\u{c}', "\n"),
        Err(e) => {
            warn!("PDF text extraction failed for {}: {e}", path.display());
            String::new()
        }
    }
}

/// Loads an uploaded PDF and returns its text.
///
/// Runs on the blocking pool: the PDF parser is CPU-bound and may panic on
/// malformed input, which is treated the same as a parse error.
pub async fn load_document(
    data: Bytes,
    filename: String,
    scratch_dir: PathBuf,
) -> Result<String, AppError> {
    let task = tokio::task::spawn_blocking(move || -> std::io::Result<String> {
        let scratch = write_scratch_file(&scratch_dir, &filename, &data)?;
        debug!("Wrote upload to {}", scratch.path().display());
        let text = extract_text(scratch.path());
        if let Err(e) = scratch.close() {
            warn!("Failed to remove scratch file: {e}");
        }
        Ok(text)
    });

    match task.await {
        Ok(result) => Ok(result.context("Failed to write upload to scratch file")?),
        Err(join_err) => {
            warn!("PDF extraction task aborted: {join_err}");
            Ok(String::new())
        }
    }
}

/// Keeps the final path component, restricted to a safe character set.
fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.pdf");
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
