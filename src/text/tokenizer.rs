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

//! # Post Tokenizer
//!
//! Turns raw post text into filtered tokens:
//!
//! 1. lowercase
//! 2. strip URLs and @-mentions
//! 3. delete apostrophes, so `don't` becomes `dont`
//! 4. replace every remaining non-letter with a space
//! 5. split on whitespace, then drop short tokens and stopwords

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::record::KiteRecord;
use crate::text::stopwords::KiteStopwords;

/// Shortest token kept by default.
pub const KITE_DEFAULT_MIN_TOKEN_LEN: usize = 2;

static URL_RE: OnceLock<Regex> = OnceLock::new();
static MENTION_RE: OnceLock<Regex> = OnceLock::new();
static APOSTROPHE_RE: OnceLock<Regex> = OnceLock::new();
static NON_ALPHA_RE: OnceLock<Regex> = OnceLock::new();

fn url_re() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(r"(?:https?://|www\.)\S+").expect("url pattern"))
}

fn mention_re() -> &'static Regex {
    MENTION_RE.get_or_init(|| Regex::new(r"@\w+").expect("mention pattern"))
}

fn apostrophe_re() -> &'static Regex {
    APOSTROPHE_RE.get_or_init(|| Regex::new(r"['\u{2019}]").expect("apostrophe pattern"))
}

fn non_alpha_re() -> &'static Regex {
    NON_ALPHA_RE.get_or_init(|| Regex::new(r"[^a-z\s]+").expect("non-alpha pattern"))
}

/// Stateless text cleaner. Cloning is cheap; the stopword set is shared.
#[derive(Clone, Debug)]
pub struct KiteTokenizer {
    stopwords: Arc<KiteStopwords>,
    min_token_len: usize,
}

impl KiteTokenizer {
    pub fn new(stopwords: Arc<KiteStopwords>) -> Self {
        Self {
            stopwords,
            min_token_len: KITE_DEFAULT_MIN_TOKEN_LEN,
        }
    }

    /// Sets the minimum token length; values below 1 are treated as 1.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len.max(1);
        self
    }

    pub fn min_token_len(&self) -> usize {
        self.min_token_len
    }

    pub fn stopwords(&self) -> &KiteStopwords {
        &self.stopwords
    }

    /// Lowercased text with URLs, mentions, and non-letters removed and
    /// whitespace collapsed. Stopwords are kept.
    ///
    /// Non-letters become word breaks rather than being deleted, so
    /// `"bag/luggage"` yields two words instead of `"bagluggage"`.
    /// Apostrophes are the exception and are deleted: `"don't"` -> `"dont"`.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = url_re().replace_all(&lowered, " ");
        let stripped = mention_re().replace_all(&stripped, " ");
        let stripped = apostrophe_re().replace_all(&stripped, "");
        let stripped = non_alpha_re().replace_all(&stripped, " ");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Cleans `text` into tokens that are long enough and not stopwords.
    pub fn clean(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|token| self.keeps(token))
            .map(str::to_string)
            .collect()
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_len && !self.stopwords.is_stopword(token)
    }

    /// All cleaned tokens of `records`, joined by single spaces. This is the
    /// blob handed to the word-cloud renderer.
    pub fn word_cloud_text<'a, I>(&self, records: I) -> String
    where
        I: IntoIterator<Item = &'a KiteRecord>,
    {
        records
            .into_iter()
            .flat_map(|record| self.clean(&record.text))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for KiteTokenizer {
    fn default() -> Self {
        Self::new(Arc::new(KiteStopwords::airline_default()))
    }
}
