//! Penn-Treebank-style word segmentation.
//!
//! Splits on whitespace, then peels punctuation off each chunk: opening
//! brackets and quotes from the front, closing punctuation from the back.
//! Clitics become their own tokens (`don't` → `do` `n't`, `she's` → `she`
//! `'s`). Internal hyphens, apostrophes and decimal points stay attached,
//! as do periods that belong to abbreviations (`Dr.`, `e.g.`, `U.S.`).
//!
//! Double quotes are rewritten the Treebank way: ``` `` ``` when opening,
//! `''` when closing.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations whose trailing period is part of the token.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "jr", "sr", "vs", "etc", "inc", "ltd", "corp", "dept",
        "fig", "figs", "vol", "vols", "pp", "cf", "approx", "univ", "gov", "rev", "hon", "capt",
        "col", "gen", "lt", "sgt", "al", "eq", "eds",
    ]
    .into_iter()
    .collect()
});

/// Clitic endings split off after the apostrophe.
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Whitespace- and punctuation-aware word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    /// Create a tokenizer.
    pub const fn new() -> Self {
        Self
    }

    /// Segment `text` into ordered surface tokens.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            split_chunk(chunk, &mut tokens);
        }
        tokens
    }
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    if matches!(chunk, "..." | "--" | "…") {
        out.push(chunk.to_string());
        return;
    }

    let mut rest = chunk;

    while let Some(c) = rest.chars().next() {
        let Some(token) = leading_token(c) else {
            break;
        };
        out.push(token.to_string());
        rest = &rest[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    loop {
        if let Some(stripped) = rest.strip_suffix("...") {
            trailing.push("...".to_string());
            rest = stripped;
            continue;
        }
        let Some(c) = rest.chars().next_back() else {
            break;
        };
        if c == '.' && keeps_period(rest) {
            break;
        }
        let Some(token) = trailing_token(c) else {
            break;
        };
        trailing.push(token.to_string());
        rest = &rest[..rest.len() - c.len_utf8()];
    }

    if !rest.is_empty() {
        split_clitic(rest, out);
    }
    out.extend(trailing.into_iter().rev());
}

const fn leading_token(c: char) -> Option<&'static str> {
    match c {
        '"' | '“' => Some("``"),
        '\'' | '‘' | '`' => Some("`"),
        '(' => Some("("),
        '[' => Some("["),
        '{' => Some("{"),
        '<' => Some("<"),
        '«' => Some("«"),
        '$' => Some("$"),
        '#' => Some("#"),
        '¿' => Some("¿"),
        '¡' => Some("¡"),
        _ => None,
    }
}

const fn trailing_token(c: char) -> Option<&'static str> {
    match c {
        '"' | '”' => Some("''"),
        '\'' | '’' => Some("'"),
        ')' => Some(")"),
        ']' => Some("]"),
        '}' => Some("}"),
        '>' => Some(">"),
        '»' => Some("»"),
        ',' => Some(","),
        ';' => Some(";"),
        ':' => Some(":"),
        '!' => Some("!"),
        '?' => Some("?"),
        '%' => Some("%"),
        '.' => Some("."),
        '…' => Some("..."),
        _ => None,
    }
}

/// Whether the final period of `word` belongs to it.
fn keeps_period(word: &str) -> bool {
    let stem = &word[..word.len() - 1];
    if stem.is_empty() {
        return false;
    }

    // Dotted forms: e.g. / i.e. / U.S. / Ph.D.
    if stem.contains('.') {
        return stem
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic));
    }

    // Initials: J.
    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_uppercase()
    {
        return true;
    }

    ABBREVIATIONS.contains(stem.to_lowercase().as_str())
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    if let Some(pos) = word.rfind(['\'', '’']) {
        let (head, tail) = word.split_at(pos);
        let tail_norm = tail.replace('’', "'").to_lowercase();

        if tail_norm == "'t" && head.len() > 1 && head.ends_with(['n', 'N']) {
            let split = head.len() - 1;
            out.push(word[..split].to_string());
            out.push(word[split..].to_string());
            return;
        }

        if !head.is_empty() && CLITICS.contains(&tail_norm.as_str()) {
            out.push(head.to_string());
            out.push(tail.to_string());
            return;
        }
    }
    out.push(word.to_string());
}
