use std::path::PathBuf;

use crate::cli::Cli;

pub mod text_input;

pub use text_input::handle_text_input;

/// One analysis request from the command line
#[derive(Debug, Clone)]
pub struct TextRequest {
    /// Explicitly given text, takes precedence over the current line
    pub selection: Option<String>,
    pub document: Option<DocumentTarget>,
    pub json: bool,
}

/// A document position: text is read from and inserted after `line`
#[derive(Debug, Clone)]
pub struct DocumentTarget {
    pub path: PathBuf,
    pub line: usize,
}

impl From<Cli> for TextRequest {
    fn from(cli: Cli) -> Self {
        Self {
            selection: cli.text,
            document: cli.file.map(|path| DocumentTarget {
                path,
                line: cli.line,
            }),
            json: cli.json,
        }
    }
}
