//! Places furigana onto the words of a sentence.
//!
//! Entries are matched against the sentence by the literal text of their core
//! (see [`FuriganaEntry::core`]), longest core first so that a compound is
//! never split up by one of its own characters.

use yomi_core::{FuriganaDictionary, FuriganaEntry, FuriganaSegment, RubyStyle, SentenceAnalysis};

/// Part of an annotated sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'e> {
    Literal(String),
    Annotated(&'e [FuriganaSegment]),
}

/// Annotations for a whole analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// The original sentence with ruby markup applied
    pub sentence: String,
    /// Ruby form of each word, `None` where no furigana was found
    pub words: Vec<Option<String>>,
}

/// Splits `sentence` into literal and annotated pieces
pub fn annotate_pieces<'e, I>(sentence: &str, entries: I) -> Vec<Piece<'e>>
where
    I: IntoIterator<Item = &'e FuriganaEntry>,
{
    let mut cores: Vec<(&'e [FuriganaSegment], String)> = entries
        .into_iter()
        .map(|entry| (entry.core(), entry.base()))
        // kana-only entries have nothing to annotate
        .filter(|(_, base)| !base.is_empty())
        .collect();
    // stable, equal lengths keep their given order
    cores.sort_by_key(|(_, base)| std::cmp::Reverse(base.chars().count()));

    let mut pieces = Vec::new();
    push_literal(&mut pieces, sentence);
    for &(core, ref base) in &cores {
        pieces = splice(pieces, core, base);
    }
    pieces
}

/// Annotates `sentence` and renders it in `style`
pub fn annotate<'e, I>(sentence: &str, entries: I, style: RubyStyle) -> String
where
    I: IntoIterator<Item = &'e FuriganaEntry>,
{
    render_pieces(&annotate_pieces(sentence, entries), style)
}

pub fn render_pieces(pieces: &[Piece<'_>], style: RubyStyle) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Annotated(segments) => {
                for segment in segments.iter() {
                    match segment.reading.as_deref() {
                        Some(reading) if !reading.is_empty() => {
                            style.write(&mut out, &segment.text, reading)
                        }
                        _ => out.push_str(&segment.text),
                    }
                }
            }
        }
    }
    out
}

/// Annotates the sentence and each single-reading word of `analysis`.
///
/// Words without a reading, or whose `(word, reading)` is not in the
/// dictionary, stay plain. Without a dictionary nothing is annotated.
pub fn annotate_analysis(
    analysis: &SentenceAnalysis,
    dictionary: Option<&dyn FuriganaDictionary>,
    style: RubyStyle,
) -> Annotations {
    let Some(dictionary) = dictionary else {
        return Annotations {
            sentence: analysis.original.clone(),
            words: vec![None; analysis.words.len()],
        };
    };

    let found: Vec<Option<&FuriganaEntry>> = analysis
        .words
        .iter()
        .map(|word| {
            word.reading()
                .and_then(|reading| dictionary.lookup(&word.word, reading))
        })
        .collect();

    let words = analysis
        .words
        .iter()
        .zip(&found)
        .map(|(word, entry)| {
            let pieces = annotate_pieces(&word.word, entry.iter().copied());
            pieces
                .iter()
                .any(|p| matches!(p, Piece::Annotated(_)))
                .then(|| render_pieces(&pieces, style))
        })
        .collect();

    let entries = found.iter().flatten().copied();
    let sentence = annotate(&analysis.original, entries, style);
    tracing::debug!(
        "Annotated {} of {} words",
        found.iter().filter(|e| e.is_some()).count(),
        found.len()
    );

    Annotations { sentence, words }
}

fn splice<'e>(pieces: Vec<Piece<'e>>, core: &'e [FuriganaSegment], base: &str) -> Vec<Piece<'e>> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let Piece::Literal(text) = piece else {
            out.push(piece);
            continue;
        };
        let mut copied_until = 0;
        for (start, matched) in text.match_indices(base) {
            push_literal(&mut out, &text[copied_until..start]);
            out.push(Piece::Annotated(core));
            copied_until = start + matched.len();
        }
        push_literal(&mut out, &text[copied_until..]);
    }
    out
}

fn push_literal(pieces: &mut Vec<Piece<'_>>, text: &str) {
    if text.is_empty() {
        return;
    }
    match pieces.last_mut() {
        Some(Piece::Literal(previous)) => previous.push_str(text),
        _ => pieces.push(Piece::Literal(text.to_string())),
    }
}
