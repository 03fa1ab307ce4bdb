use std::path::PathBuf;

use clap::Parser;

/// Analyze Japanese text and write it out as an annotated markdown callout
#[derive(Parser, Debug)]
#[command(name = "yomi", author, version, about, long_about = None)]
pub struct Cli {
    /// Text to analyze. When absent, the current line of --file is used.
    pub text: Option<String>,
    /// Markdown document to read the current line from and insert into
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Current line of --file, 1-based. The analysis is inserted after it.
    #[arg(short, long, default_value_t = 1, requires = "file")]
    pub line: usize,
    /// JmdictFurigana JSON file, overrides the configured one
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,
    /// JSON config file, replaces the environment based config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Print the analysis as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
    /// Log in JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_and_line() {
        let cli = Cli::try_parse_from(["yomi", "--file", "notes.md", "--line", "3"]).unwrap();
        assert_eq!(cli.text, None);
        assert_eq!(cli.file, Some(PathBuf::from("notes.md")));
        assert_eq!(cli.line, 3);
        assert!(!cli.json);
    }

    #[test]
    fn line_needs_a_file() {
        assert!(Cli::try_parse_from(["yomi", "--line", "3", "日本語"]).is_err());
    }
}
