//! Markdown callout output.
//!
//! ```text
//! > [!note]- {日本|にほん}{語|ご}の勉強
//! > - {日本|にほん}{語|ご}
//! >   - (n) Japanese language
//! > - 中
//! >   - 中 【ちゅう】
//! >     - (n) medium; average
//! ```
//!
//! The block is followed by one blank line.

use yomi_config::render::RenderConfig;
use yomi_core::{Readings, SentenceAnalysis, WordAnalysis};

use crate::ruby::Annotations;

pub const EMPTY_PLACEHOLDER: &str = "*No words could be analyzed.*";

const WORD: &str = "> - ";
const NESTED: &str = ">   - ";
const DOUBLE_NESTED: &str = ">     - ";

pub fn render(
    analysis: &SentenceAnalysis,
    annotations: &Annotations,
    config: &RenderConfig,
) -> String {
    let mut out = String::new();
    let fold = if config.folded { '-' } else { '+' };
    let header = format!("> [!{}]{} ", config.callout, fold);
    line(&mut out, &header, &annotations.sentence);

    if config.show_romanization {
        if let Some(romanization) = &analysis.romanization {
            line(&mut out, "> ", &format!("*{romanization}*"));
        }
    }

    if analysis.words.is_empty() {
        line(&mut out, "> ", EMPTY_PLACEHOLDER);
    }

    for (index, word) in analysis.words.iter().enumerate() {
        let annotated = annotations.words.get(index).and_then(Option::as_deref);
        render_word(&mut out, word, annotated);
    }

    out.push('\n');
    out
}

fn render_word(out: &mut String, word: &WordAnalysis, annotated: Option<&str>) {
    match &word.readings {
        Readings::Single {
            reading,
            definitions,
        } => {
            match (annotated, reading) {
                (Some(annotated), _) => line(out, WORD, annotated),
                (None, Some(reading)) => line(out, WORD, &format!("{} 【{}】", word.word, reading)),
                (None, None) => line(out, WORD, &word.word),
            }
            for definition in definitions {
                line(out, NESTED, definition);
            }
        }
        Readings::Alternatives(alternatives) => {
            line(out, WORD, &word.word);
            for alternative in alternatives {
                line(out, NESTED, &alternative.reading);
                for definition in &alternative.definitions {
                    line(out, DOUBLE_NESTED, definition);
                }
            }
        }
    }
}

fn line(out: &mut String, prefix: &str, text: &str) {
    out.push_str(prefix);
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use yomi_core::{Alternative, RubyStyle};

    fn analysis(words: Vec<WordAnalysis>) -> SentenceAnalysis {
        SentenceAnalysis {
            original: "日本語の中".to_string(),
            romanization: Some("nihongo no naka".to_string()),
            words,
        }
    }

    fn plain(analysis: &SentenceAnalysis) -> Annotations {
        Annotations {
            sentence: analysis.original.clone(),
            words: vec![None; analysis.words.len()],
        }
    }

    #[test]
    fn renders_single_and_alternative_words() {
        let analysis = analysis(vec![
            WordAnalysis::single(
                "日本語",
                Some("にほんご".to_string()),
                vec!["(n) Japanese language".to_string()],
            ),
            WordAnalysis::single("の", None, vec!["(prt) of".to_string(), "(prt) 's".to_string()]),
            WordAnalysis::alternatives(
                "中",
                vec![
                    Alternative {
                        reading: "中 【なか】".to_string(),
                        definitions: vec!["(n) inside".to_string()],
                    },
                    Alternative {
                        reading: "中 【ちゅう】".to_string(),
                        definitions: vec![
                            "(n) medium".to_string(),
                            "(n) average".to_string(),
                        ],
                    },
                ],
            ),
        ]);

        let markdown = render(&analysis, &plain(&analysis), &RenderConfig::default());
        let expected = "\
> [!note]- 日本語の中
> - 日本語 【にほんご】
>   - (n) Japanese language
> - の
>   - (prt) of
>   - (prt) 's
> - 中
>   - 中 【なか】
>     - (n) inside
>   - 中 【ちゅう】
>     - (n) medium
>     - (n) average

";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn uses_annotated_forms_when_present() {
        let analysis = analysis(vec![WordAnalysis::single(
            "日本語",
            Some("にほんご".to_string()),
            vec!["(n) Japanese language".to_string()],
        )]);
        let annotations = Annotations {
            sentence: "{日本|にほん}{語|ご}の中".to_string(),
            words: vec![Some("{日本|にほん}{語|ご}".to_string())],
        };
        let config = RenderConfig {
            callout: "abstract".to_string(),
            folded: false,
            ruby_style: RubyStyle::Markdown,
            show_romanization: true,
        };

        let markdown = render(&analysis, &annotations, &config);
        let expected = "\
> [!abstract]+ {日本|にほん}{語|ご}の中
> *nihongo no naka*
> - {日本|にほん}{語|ご}
>   - (n) Japanese language

";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn empty_analysis_renders_placeholder() {
        let analysis = SentenceAnalysis::empty("ほげ");
        let markdown = render(&analysis, &plain(&analysis), &RenderConfig::default());
        assert_eq!(
            markdown,
            format!("> [!note]- ほげ\n> {EMPTY_PLACEHOLDER}\n\n")
        );
    }

    #[test]
    fn every_line_is_quoted() {
        let analysis = analysis(vec![WordAnalysis::single(
            "中",
            None,
            vec!["(n) inside".to_string()],
        )]);
        let markdown = render(&analysis, &plain(&analysis), &RenderConfig::default());
        let mut lines = markdown.lines().collect::<Vec<_>>();
        assert_eq!(lines.pop(), Some(""));
        assert!(lines.iter().all(|line| line.starts_with('>')));
    }
}
