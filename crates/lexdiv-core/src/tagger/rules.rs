//! Deterministic rule-based Penn Treebank tagger.
//!
//! Tagging runs in two passes. The first assigns each token a tag from, in
//! order: punctuation shape, numerals, the lexicon, capitalization, and
//! suffix heuristics. The second pass repairs common ambiguities using the
//! neighbouring tags (base verbs after `to`/modals, nouns after determiners,
//! present-tense verbs after subject pronouns, participles after
//! auxiliaries, existential `there`).

use super::TaggedToken;
use super::lexicon::{
    self, is_be_form, is_perfect_or_passive_auxiliary, is_plural_subject,
    is_third_person_singular,
};

/// Noun suffixes.
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ism", "ship", "hood", "dom", "ure",
    "age", "ery", "ogy", "ist", "eer",
];

/// Adjective suffixes.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "ic", "less", "ish", "ary", "al",
];

/// Verb suffixes.
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Endings that look plural but are not.
const FALSE_PLURALS: &[&str] = &["ss", "us", "is"];

/// Rule-based part-of-speech tagger.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a tagger.
    pub const fn new() -> Self {
        Self
    }

    /// Tag every token. The output has the same length and order as `tokens`.
    #[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut tags: Vec<&'static str> = Vec::with_capacity(tokens.len());
        let mut from_lexicon: Vec<bool> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let (tag, known) = initial_tag(token, &lower[i], starts_sentence(&tags, i));
            tags.push(tag);
            from_lexicon.push(known);
        }

        for i in 0..tags.len() {
            tags[i] = contextual_tag(i, &lower, &tags, &from_lexicon);
        }

        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken::new(token.as_str(), tag))
            .collect()
    }
}

fn starts_sentence(tags: &[&str], i: usize) -> bool {
    match i {
        0 => true,
        _ if tags[i - 1] == "." => true,
        1 => tags[0] == "``",
        _ => tags[i - 1] == "``" && tags[i - 2] == ".",
    }
}

/// First-pass tag and whether it came from the lexicon.
fn initial_tag(token: &str, lower: &str, sentence_start: bool) -> (&'static str, bool) {
    if let Some(tag) = punctuation_tag(token) {
        return (tag, true);
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return ("CD", true);
    }
    if let Some(tag) = lexicon::lookup(lower) {
        return (tag, true);
    }
    if !sentence_start && token.starts_with(char::is_uppercase) {
        return ("NNP", false);
    }
    if lower.contains('-') {
        let last = lower.rsplit('-').next().unwrap_or(lower);
        return match suffix_tag(last) {
            "NN" | "NNS" if !last.is_empty() => ("JJ", false),
            tag => (tag, false),
        };
    }
    (suffix_tag(lower), false)
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ";" | ":" | "..." | "…" | "--" | "-" => ":",
        "(" | "[" | "{" | "<" => "(",
        ")" | "]" | "}" | ">" => ")",
        "``" | "“" | "`" | "‘" => "``",
        "''" | "”" => "''",
        "$" => "$",
        "#" => "#",
        "%" => "NN",
        _ if !token.chars().any(char::is_alphanumeric) && token != "'" && token != "&" => {
            "SYM"
        }
        _ => return None,
    };
    Some(tag)
}

fn suffix_tag(word: &str) -> &'static str {
    let len = word.chars().count();
    if len <= 2 {
        return "NN";
    }
    if len > 4 && word.ends_with("ly") {
        return "RB";
    }
    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        return "VBD";
    }
    if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "NN";
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "JJ";
    }
    if VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "VB";
    }
    if word.ends_with('s') && !FALSE_PLURALS.iter().any(|s| word.ends_with(s)) {
        return "NNS";
    }
    "NN"
}

/// Index of the nearest preceding token that is not an adverb.
fn previous_non_adverb(i: usize, tags: &[&str]) -> Option<usize> {
    (0..i).rev().find(|&j| !tags[j].starts_with("RB"))
}

fn contextual_tag(i: usize, lower: &[String], tags: &[&'static str], known: &[bool]) -> &'static str {
    let tag = tags[i];
    let word = lower[i].as_str();

    if word == "there" && lower.get(i + 1).is_some_and(|next| is_be_form(next)) {
        return "EX";
    }

    let Some(prev) = i.checked_sub(1) else {
        return tag;
    };
    let prev_tag = tags[prev];

    if word == "'s" && prev_tag == "PRP" {
        return "VBZ";
    }

    // to run / will run
    if matches!(prev_tag, "TO" | "MD") {
        return match tag {
            "VBP" | "VB" => "VB",
            "NN" if !known[i] => "VB",
            other => other,
        };
    }

    // the use / their work / a limited number
    if matches!(prev_tag, "DT" | "PRP$" | "JJ" | "JJR" | "JJS" | "POS" | "CD") {
        return match tag {
            "VB" | "VBP" | "VBG" => "NN",
            "VBZ" => "NNS",
            "VBD" if matches!(prev_tag, "DT" | "PRP$") => "JJ",
            other => other,
        };
    }

    let subject = previous_non_adverb(i, tags);

    // they analyze / she works / researchers analyze
    if let Some(s) = subject {
        let subject_word = lower[s].as_str();
        let subject_tag = tags[s];
        if is_plural_subject(subject_word) && matches!(tag, "VB" | "NN") {
            return "VBP";
        }
        if is_third_person_singular(subject_word) && tag == "NNS" {
            return "VBZ";
        }
        if matches!(subject_tag, "NNS" | "NN" | "NNP") && tag == "VB" && known[i] {
            return "VBP";
        }
        // was collected / has been approved / were not completed
        if tag == "VBD" && is_perfect_or_passive_auxiliary(subject_word) {
            return "VBN";
        }
    }

    tag
}
