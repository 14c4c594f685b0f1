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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::KiteRecord;
use crate::text::tokenizer::KiteTokenizer;

/// Number of keywords shown in the keyword table.
pub const KITE_DEFAULT_KEYWORD_LIMIT: usize = 20;

/// One ranked keyword.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiteKeyword {
    pub token: String,
    pub count: usize,
}

/// Token counts over a collection of posts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiteFrequencyTable {
    counts: HashMap<String, usize>,
}

impl KiteFrequencyTable {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Every token, count descending then token ascending.
    pub fn ranked(&self) -> Vec<KiteKeyword> {
        let mut ranked: Vec<KiteKeyword> = self
            .counts
            .iter()
            .map(|(token, count)| KiteKeyword {
                token: token.clone(),
                count: *count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
        ranked
    }

    /// The first `limit` entries of [`KiteFrequencyTable::ranked`].
    pub fn top(&self, limit: usize) -> Vec<KiteKeyword> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }
}

/// Counts cleaned tokens across posts and ranks them.
#[derive(Clone, Debug, Default)]
pub struct KiteFrequencyAnalyzer {
    tokenizer: KiteTokenizer,
}

impl KiteFrequencyAnalyzer {
    pub fn new(tokenizer: KiteTokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &KiteTokenizer {
        &self.tokenizer
    }

    pub fn frequency_table<'a, I>(&self, records: I) -> KiteFrequencyTable
    where
        I: IntoIterator<Item = &'a KiteRecord>,
    {
        KiteFrequencyTable::from_tokens(
            records
                .into_iter()
                .flat_map(|record| self.tokenizer.clean(&record.text)),
        )
    }

    /// Top `limit` keywords over `records`, usually the negative posts of the
    /// current filter.
    pub fn top_keywords<'a, I>(&self, records: I, limit: usize) -> Vec<KiteKeyword>
    where
        I: IntoIterator<Item = &'a KiteRecord>,
    {
        if limit == 0 {
            return Vec::new();
        }
        self.frequency_table(records).top(limit)
    }
}
