use crate::constants::{DEFAULT_SLICE_LENGTH, STOP_WORDS};
use crate::types::Token;
use crate::utils::slice_words;
use crate::TokenizerKind;

/// Turns raw report text into a lowercase lemma sequence.
///
/// Implementors only lemmatize a bounded slice of words; normalization and slicing are shared.
pub trait LemmaTokenizer {
    /// Technology the tokens are filed under.
    fn tokenizer_kind(&self) -> TokenizerKind;

    /// Maximum number of words passed to [`LemmaTokenizer::lemmatize_slice`] at once.
    fn slice_length(&self) -> usize {
        DEFAULT_SLICE_LENGTH
    }

    fn lemmatize_slice(&self, slice: &str) -> Vec<Token>;

    fn tokenize_and_lemmatize(&self, text: &str) -> Vec<Token> {
        self.tokenize_in_slices(text, self.slice_length())
    }

    /// Like [`LemmaTokenizer::tokenize_and_lemmatize`], with an explicit slice length.
    fn tokenize_in_slices(&self, text: &str, slice_length: usize) -> Vec<Token> {
        let preprocessed = preprocess_text(text);

        slice_words(&preprocessed, slice_length)
            .iter()
            .flat_map(|slice| self.lemmatize_slice(slice))
            .collect()
    }
}

/// Lowercases the text, merges words hyphenated across line breaks, removes ASCII punctuation
/// and collapses all whitespace to single spaces.
pub fn preprocess_text(text: &str) -> String {
    text.replace("-\n", "") // Merge hyphenated words across lines
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits on whitespace, drops stop words and keeps every remaining word as its own lemma.
///
/// Stands in for a model-backed lemmatizer; the tokens are filed under `kind`.
#[derive(Copy, Clone)]
pub struct RuleBasedTokenizer {
    pub kind: TokenizerKind,
    pub filter_stop_words: bool,
    pub slice_length: usize,
}

impl RuleBasedTokenizer {
    pub fn new(kind: TokenizerKind) -> Self {
        Self {
            kind,
            filter_stop_words: true,
            slice_length: DEFAULT_SLICE_LENGTH,
        }
    }

    pub fn with_slice_length(mut self, slice_length: usize) -> Self {
        self.slice_length = slice_length;
        self
    }
}

impl LemmaTokenizer for RuleBasedTokenizer {
    fn tokenizer_kind(&self) -> TokenizerKind {
        self.kind
    }

    fn slice_length(&self) -> usize {
        self.slice_length
    }

    fn lemmatize_slice(&self, slice: &str) -> Vec<Token> {
        slice
            .split_whitespace()
            .filter(|word| !self.filter_stop_words || !STOP_WORDS.contains(word))
            .map(|word| word.to_string())
            .collect()
    }
}
