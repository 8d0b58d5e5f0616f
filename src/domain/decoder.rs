//! Morse to English translation over a built code tree.

use tracing::{debug, instrument};

use crate::domain::error::DomainResult;
use crate::domain::table::STANDARD_TABLE;
use crate::domain::tree::CodeTree;

/// Separates words in a message.
pub const WORD_DELIMITER: char = '/';
/// Separates letters within a word.
pub const LETTER_DELIMITER: char = ' ';

/// Translates Morse messages using a tree that is read-only after construction.
#[derive(Debug, Clone)]
pub struct Decoder {
    tree: CodeTree,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Build the decoder from the standard a-z table.
    ///
    /// Cannot fail: every entry of `STANDARD_TABLE` is a valid code.
    pub fn new() -> Self {
        Self::from_table(&STANDARD_TABLE).expect("standard table contains only valid codes")
    }

    /// Build the decoder from an arbitrary (code, letter) table in any order.
    #[instrument(level = "debug", skip(table), fields(entries = table.len()))]
    pub fn from_table(table: &[(&str, char)]) -> DomainResult<Self> {
        let mut tree = CodeTree::new();
        for &(code, letter) in table {
            tree.insert_code(code, letter)?;
        }
        debug!("built code tree: {} symbols, depth {}", tree.len(), tree.depth());
        Ok(Self { tree })
    }

    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    pub fn fingerprint(&self) -> String {
        self.tree.fingerprint()
    }

    /// Translate `message`, dropping letters whose code does not resolve.
    ///
    /// Unknown and malformed tokens contribute an empty string at their
    /// position; the rest of the message is still translated.
    pub fn translate(&self, message: &str) -> String {
        split_message(message)
            .into_iter()
            .map(|tokens| {
                tokens
                    .into_iter()
                    .filter_map(|token| match self.tree.fetch_code(token) {
                        Ok(letter) => Some(letter),
                        Err(e) => {
                            debug!("skipping letter: {}", e);
                            None
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Translate `message`, failing with `LookupMiss` on the first token that
    /// does not resolve.
    pub fn translate_strict(&self, message: &str) -> DomainResult<String> {
        let words = split_message(message)
            .into_iter()
            .map(|tokens| {
                tokens
                    .into_iter()
                    .map(|token| self.tree.fetch_code(token))
                    .collect::<DomainResult<String>>()
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(words.join(" "))
    }
}

/// Split into word-groups of code tokens.
///
/// Empty tokens come from delimiter padding (`" / "`, doubled spaces) and are
/// dropped here, so they never count as misses. Trailing word-groups without
/// tokens are dropped too, so a message ending in `/` gets no trailing space.
/// Empty groups between words are kept.
fn split_message(message: &str) -> Vec<Vec<&str>> {
    let mut groups: Vec<Vec<&str>> = message
        .split(WORD_DELIMITER)
        .map(|group| {
            group
                .split(LETTER_DELIMITER)
                .filter(|token| !token.is_empty())
                .collect()
        })
        .collect();
    while groups.last().is_some_and(|group| group.is_empty()) {
        groups.pop();
    }
    groups
}
