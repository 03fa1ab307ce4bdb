//! Turns an ichi.moe analysis page into a [`SentenceAnalysis`].
//!
//! The page groups its segmentations into rows; hidden rows are alternate
//! parses and only the first visible one is used. Every word block in that row
//! carries one or more `dt` labels (`1. 日本語 【にほんご】`), each followed by a
//! `dd` with the definition list for that reading.
//!
//! Parsing never fails. Markup that cannot be mapped is skipped and an
//! analysis without words is a valid result.

use std::collections::HashSet;

use yomi_core::{Alternative, SentenceAnalysis, WordAnalysis};

use crate::markup::{Document, Element};

const ROMANIZATION: &str = ".ds-text";
const ROMANIZED_TOKEN: &str = ".ds-word";
const VISIBLE_ROW: &str = ".gloss-row:not(.hidden)";
const WORD_BLOCK: &str = ".gloss";
const BLOCK_ROMANIZED: &str = ".gloss-rtext";
const ALTERNATIVES: &str = "dl.alternatives";
const DEFINITION_LIST: &str = ".gloss-definitions";
const PART_OF_SPEECH: &str = ".pos-desc";
const GLOSS: &str = ".gloss-desc";
const NOTE: &str = ".sense-info-note";

const ROW_CLASS: &str = "gloss-row";
const HIDDEN_CLASS: &str = "hidden";
const WORD_BLOCK_CLASS: &str = "gloss";

const NOTE_MARKER: &str = "☝️";

pub fn parse(html: &str, original: &str) -> SentenceAnalysis {
    let document = Document::parse(html);
    let romanization = parse_romanization(&document);

    let mut words = match document.select_first(VISIBLE_ROW) {
        Some(row) => word_blocks(&row)
            .iter()
            .filter_map(parse_word_block)
            .collect(),
        None => {
            tracing::debug!("No visible analysis row in response");
            Vec::new()
        }
    };

    if words.is_empty() {
        words = fallback_scan(&document);
        if !words.is_empty() {
            tracing::debug!("Recovered {} words outside the analysis row", words.len());
        }
    }

    tracing::debug!("Parsed {} words for '{}'", words.len(), original);

    SentenceAnalysis {
        original: original.to_string(),
        romanization,
        words,
    }
}

fn parse_romanization(document: &Document) -> Option<String> {
    let tokens = match document.select_first(ROMANIZATION) {
        Some(scope) => scope.select(ROMANIZED_TOKEN),
        None => document.select(ROMANIZED_TOKEN),
    };

    let tokens: Vec<String> = tokens
        .iter()
        .map(|token| clean(&token.text()))
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

// word blocks of `scope`, leaving out blocks nested in other blocks
fn word_blocks(scope: &Element) -> Vec<Element> {
    scope
        .select(WORD_BLOCK)
        .into_iter()
        .filter(|block| !block.ancestors().any(|a| a.has_class(WORD_BLOCK_CLASS)))
        .collect()
}

// best effort for pages whose rows could not be used: every block outside
// hidden rows, first occurrence of a word wins
fn fallback_scan(document: &Document) -> Vec<WordAnalysis> {
    let mut seen = HashSet::new();
    word_blocks(&document.root())
        .iter()
        .filter(|block| {
            !block
                .ancestors()
                .any(|a| a.has_class(ROW_CLASS) && a.has_class(HIDDEN_CLASS))
        })
        .filter_map(parse_word_block)
        .filter(|word| seen.insert(word.word.clone()))
        .collect()
}

fn parse_word_block(block: &Element) -> Option<WordAnalysis> {
    let romanized = block
        .select_first(BLOCK_ROMANIZED)
        .map(|e| clean(&e.text()))
        .filter(|s| !s.is_empty());

    let labels: Vec<Element> = match block.select_first(ALTERNATIVES) {
        Some(list) => list.children().filter(|c| c.name() == "dt").collect(),
        None => block.select("dt"),
    };

    let word = if labels.len() > 1 {
        parse_alternatives(&labels, romanized)
    } else {
        parse_single(block, labels.first(), romanized)
    };

    if word.is_none() {
        tracing::trace!("Dropping word block without definitions");
    }
    word
}

fn parse_single(
    block: &Element,
    label: Option<&Element>,
    romanized: Option<String>,
) -> Option<WordAnalysis> {
    let (word, reading) = match label.map(|dt| parse_label(&clean(&dt.text()))) {
        Some((word, reading)) if !word.is_empty() => (word, reading),
        _ => (romanized?, None),
    };

    let definitions = match label.and_then(definition_scope) {
        Some(scope) => collect_definitions(&scope),
        None => collect_definitions(block),
    };
    if definitions.is_empty() {
        return None;
    }

    Some(WordAnalysis::single(word, reading, definitions))
}

fn parse_alternatives(labels: &[Element], romanized: Option<String>) -> Option<WordAnalysis> {
    let mut word = None;
    let mut alternatives = Vec::new();

    for dt in labels {
        let label = clean(&dt.text());
        let label = strip_ordinal(&label);
        if word.is_none() {
            word = Some(parse_label(label).0).filter(|w| !w.is_empty());
        }

        let definitions = definition_scope(dt)
            .map(|dd| collect_definitions(&dd))
            .unwrap_or_default();
        if definitions.is_empty() {
            tracing::trace!("Dropping alternative '{label}' without definitions");
            continue;
        }

        alternatives.push(Alternative {
            reading: label.to_string(),
            definitions,
        });
    }

    if alternatives.is_empty() {
        return None;
    }
    let word = word.or(romanized)?;
    Some(WordAnalysis::alternatives(word, alternatives))
}

// the `dd` directly following a `dt` label
fn definition_scope(label: &Element) -> Option<Element> {
    label
        .next_sibling_element()
        .filter(|sibling| sibling.name() == "dd")
}

fn collect_definitions(scope: &Element) -> Vec<String> {
    scope
        .select(DEFINITION_LIST)
        .iter()
        .flat_map(|list| list.children().filter(|item| item.name() == "li"))
        .filter_map(|item| parse_definition(&item))
        .collect()
}

fn parse_definition(item: &Element) -> Option<String> {
    let gloss = item
        .select_first(GLOSS)
        .map(|g| clean(&g.text()))
        .filter(|g| !g.is_empty())?;

    let mut definition = String::new();
    if let Some(pos) = item
        .select_first(PART_OF_SPEECH)
        .map(|p| clean_part_of_speech(&p.text()))
        .filter(|p| !p.is_empty())
    {
        definition.push('(');
        definition.push_str(&pos);
        definition.push_str(") ");
    }
    definition.push_str(&gloss);

    let note = item
        .attr("title")
        .or_else(|| item.select_first(NOTE).and_then(|n| n.attr("title")))
        .map(|n| clean(&n))
        .filter(|n| !n.is_empty());
    if let Some(note) = note {
        definition.push_str(&format!(" ({NOTE_MARKER} {note})"));
    }

    Some(definition)
}

/// Splits a label such as `1. 日本語 【にほんご】` into word and reading.
pub fn parse_label(label: &str) -> (String, Option<String>) {
    let label = strip_ordinal(label.trim());
    match label.split_once('【') {
        Some((word, rest)) => {
            let reading = rest.split('】').next().unwrap_or_default().trim();
            let reading = (!reading.is_empty()).then(|| reading.to_string());
            (word.trim().to_string(), reading)
        }
        None => (label.trim().to_string(), None),
    }
}

/// Removes a leading `12. ` style ordinal.
///
/// The dot must be followed by whitespace, so `1.5倍` is left alone.
pub fn strip_ordinal(label: &str) -> &str {
    let label = label.trim_start();
    let digits = label.len() - label.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return label;
    }
    match label[digits..].strip_prefix('.') {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => label,
    }
}

// collapses whitespace runs and drops the zero-width characters the service
// puts between kana
fn clean(text: &str) -> String {
    text.replace(['\u{200b}', '\u{200c}'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_part_of_speech(text: &str) -> String {
    let text = clean(text);
    text.trim_start_matches('[')
        .trim_end_matches(']')
        .trim()
        .to_string()
}
