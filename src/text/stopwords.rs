//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Kite.
//! The Kite project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Stopword Lexicon
//!
//! Two word categories merged into one lookup set: airline domain terms that
//! appear in nearly every post, and general English function words. Negations
//! are never stopwords, whatever the injected lists contain, because they carry
//! the polarity of a complaint.
//!
//! Entries are normalized the same way the tokenizer normalizes text
//! (lowercase, apostrophes removed), so `"you're"` in a list matches the token
//! `"youre"`.

use std::collections::HashSet;

/// Terms that appear in nearly every airline post and say nothing about it.
pub const KITE_DOMAIN_STOPWORDS: &[&str] = &[
    "flight", "airline", "plane", "trip", "customer", "service", "thank", "thanks", "get", "got",
];

/// General English function words: pronouns, auxiliaries, prepositions,
/// conjunctions, adverbs, and question words. Contains no negations.
pub const KITE_GENERAL_STOPWORDS: &[&str] = &[
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "this", "that", "that'll", "these", "those",
    // auxiliaries
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "can", "will", "should", "should've",
    // articles, prepositions, conjunctions
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under",
    // adverbs, determiners, question words
    "what", "which", "who", "whom", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "only", "own", "same", "so", "than", "too", "very", "just", "now",
    // contraction fragments left behind by tokenization
    "s", "t", "d", "ll", "m", "o", "re", "ve", "y", "ma",
];

/// Negation words and contracted negations, in apostrophe and fragment form.
pub const KITE_NEGATIONS: &[&str] = &[
    "no", "not", "nor", "never", "cannot", "ain", "ain't", "aren", "aren't", "can't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "don", "don't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "mightn", "mightn't", "mustn", "mustn't",
    "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren",
    "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Lowercases and drops apostrophes, mirroring the tokenizer.
pub(crate) fn normalize_word(word: &str) -> String {
    word.trim()
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Immutable stopword set consulted by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KiteStopwords {
    words: HashSet<String>,
    negations: HashSet<String>,
}

impl KiteStopwords {
    /// Merges a domain list and a general list into one set.
    ///
    /// Negations are removed from both lists.
    pub fn new<D, G, S, T>(domain: D, general: G) -> Self
    where
        D: IntoIterator<Item = S>,
        G: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let negations: HashSet<String> = KITE_NEGATIONS.iter().map(|w| normalize_word(w)).collect();
        let words = domain
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .chain(general.into_iter().map(|w| normalize_word(w.as_ref())))
            .filter(|w| !w.is_empty() && !negations.contains(w))
            .collect();
        KiteStopwords { words, negations }
    }

    /// The built-in airline lexicon.
    pub fn airline_default() -> Self {
        Self::new(KITE_DOMAIN_STOPWORDS, KITE_GENERAL_STOPWORDS)
    }

    /// Returns a copy extended with additional words. Negations are still refused.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            let word = normalize_word(word.as_ref());
            if !word.is_empty() && !self.negations.contains(&word) {
                self.words.insert(word);
            }
        }
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token) || self.words.contains(&normalize_word(token))
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || self.negations.contains(&normalize_word(token))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KiteStopwords {
    fn default() -> Self {
        Self::airline_default()
    }
}
