use serde::{Deserialize, Serialize};

/// Result of analyzing one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// The exact text that was submitted for analysis
    pub original: String,
    /// Whole-sentence romanization, if the service provided one
    pub romanization: Option<String>,
    /// Words in sentence order, empty when nothing could be matched
    pub words: Vec<WordAnalysis>,
}

impl SentenceAnalysis {
    pub fn empty(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            romanization: None,
            words: Vec::new(),
        }
    }
}

/// One segmented unit of the analyzed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub readings: Readings,
}

impl WordAnalysis {
    pub fn single(word: impl Into<String>, reading: Option<String>, definitions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            readings: Readings::Single {
                reading,
                definitions,
            },
        }
    }

    pub fn alternatives(word: impl Into<String>, alternatives: Vec<Alternative>) -> Self {
        Self {
            word: word.into(),
            readings: Readings::Alternatives(alternatives),
        }
    }

    /// Reading of a single-reading word
    pub fn reading(&self) -> Option<&str> {
        match &self.readings {
            Readings::Single { reading, .. } => reading.as_deref(),
            Readings::Alternatives(_) => None,
        }
    }
}

/// Either one reading with its definitions, or several homograph alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readings {
    Single {
        reading: Option<String>,
        definitions: Vec<String>,
    },
    Alternatives(Vec<Alternative>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    /// Display label combining the headword and its reading, e.g. `中 【ちゅう】`
    pub reading: String,
    pub definitions: Vec<String>,
}

/// How annotated runs are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RubyStyle {
    /// `<ruby>日本<rt>にほん</rt></ruby>`
    #[default]
    Html,
    /// `{日本|にほん}`
    Markdown,
}

impl RubyStyle {
    pub fn write(&self, out: &mut String, text: &str, reading: &str) {
        match self {
            RubyStyle::Html => {
                out.push_str("<ruby>");
                out.push_str(text);
                out.push_str("<rt>");
                out.push_str(reading);
                out.push_str("</rt></ruby>");
            }
            RubyStyle::Markdown => {
                out.push('{');
                out.push_str(text);
                out.push('|');
                out.push_str(reading);
                out.push('}');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_ruby_styles() {
        let mut html = String::new();
        RubyStyle::Html.write(&mut html, "日本", "にほん");
        assert_eq!(html, "<ruby>日本<rt>にほん</rt></ruby>");

        let mut md = String::new();
        RubyStyle::Markdown.write(&mut md, "日本", "にほん");
        assert_eq!(md, "{日本|にほん}");
    }

    #[test]
    fn alternatives_have_no_single_reading() {
        let word = WordAnalysis::alternatives(
            "中",
            vec![
                Alternative {
                    reading: "中 【ちゅう】".to_string(),
                    definitions: vec!["(n) middle".to_string(), "(n) inside".to_string()],
                },
                Alternative {
                    reading: "中 【じゅう】".to_string(),
                    definitions: vec!["(suf) throughout".to_string()],
                },
            ],
        );
        assert_eq!(word.reading(), None);

        let word = WordAnalysis::single("中", Some("なか".to_string()), vec![]);
        assert_eq!(word.reading(), Some("なか"));
    }
}
