//! Document access for the CLI: reading the current line and inserting the
//! rendered block after it. Lines are 1-based.

use std::path::Path;

use yomi_core::AnalysisError;

/// Text of line `line`, without its line ending
pub fn current_line(document: &str, line: usize) -> Option<&str> {
    let index = line.checked_sub(1)?;
    document
        .lines()
        .nth(index)
        .map(|l| l.trim_end_matches('\r'))
}

/// `document` with `block` inserted after line `line`.
///
/// Line 0 inserts at the very start.
pub fn insert_after_line(document: &str, line: usize, block: &str) -> Result<String, AnalysisError> {
    let offset = if line == 0 {
        0
    } else {
        line_end(document, line).ok_or_else(|| {
            AnalysisError::InsertionFailure(format!(
                "line {line} is past the end of the document"
            ))
        })?
    };

    let (before, after) = document.split_at(offset);
    let mut out = String::with_capacity(document.len() + block.len() + 1);
    out.push_str(before);
    if !before.is_empty() && !before.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(block);
    out.push_str(after);
    Ok(out)
}

pub fn insert_into_file(path: &Path, line: usize, block: &str) -> Result<(), AnalysisError> {
    let document = read_document(path)?;
    let updated = insert_after_line(&document, line, block)?;
    std::fs::write(path, updated).map_err(|e| {
        AnalysisError::InsertionFailure(format!("failed to write {}: {}", path.display(), e))
    })?;
    tracing::info!("Inserted analysis after line {} of {}", line, path.display());
    Ok(())
}

pub fn read_document(path: &Path) -> Result<String, AnalysisError> {
    std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::InsertionFailure(format!("failed to read {}: {}", path.display(), e))
    })
}

// byte offset just past line `line`, including its newline
fn line_end(document: &str, line: usize) -> Option<usize> {
    let mut offset = 0;
    for (index, text) in document.split_inclusive('\n').enumerate() {
        offset += text.len();
        if index + 1 == line {
            return Some(offset);
        }
    }
    None
}
