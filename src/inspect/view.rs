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

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::record::{KiteCategoryFilter, KiteDataset, KiteRecord, KiteSentiment};
use crate::text::tokenizer::KiteTokenizer;

/// One row of the raw data table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KiteRawRow {
    pub id: String,
    pub sentiment: KiteSentiment,
    pub category: String,
    pub text: String,
    pub reason: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Normalized text, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,
}

impl KiteRawRow {
    fn from_record(record: &KiteRecord, cleaned_text: Option<String>) -> Self {
        Self {
            id: record.id.clone(),
            sentiment: record.sentiment,
            category: record.category.clone(),
            text: record.text.clone(),
            reason: record.reason.clone(),
            created_at: record.created_at,
            cleaned_text,
        }
    }
}

/// Filtered records, newest first. Rows without a timestamp go last in
/// dataset order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KiteRawView {
    pub filter: KiteCategoryFilter,
    pub rows: Vec<KiteRawRow>,
}

impl KiteRawView {
    pub fn build(
        dataset: &KiteDataset,
        filter: &KiteCategoryFilter,
        include_cleaned: bool,
        tokenizer: &KiteTokenizer,
    ) -> Self {
        let mut rows: Vec<KiteRawRow> = dataset
            .filtered(filter)
            .into_iter()
            .map(|record| {
                let cleaned = include_cleaned.then(|| tokenizer.normalize(&record.text));
                KiteRawRow::from_record(record, cleaned)
            })
            .collect();
        // stable: equal timestamps keep dataset order
        rows.sort_by(|a, b| match (&a.created_at, &b.created_at) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Self {
            filter: filter.clone(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
