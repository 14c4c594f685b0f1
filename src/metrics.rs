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
use serde_json::Value;

use crate::errors::{KiteError, Result};
use crate::record::{KiteCategoryFilter, KiteDataset, KiteSentiment};

/// Decimal places of KPI percentages.
pub const KITE_DEFAULT_PERCENT_PRECISION: u32 = 1;

const MAX_PERCENT_PRECISION: u32 = 6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KiteSentimentShare {
    pub sentiment: KiteSentiment,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiteReasonCount {
    pub reason: String,
    pub count: usize,
}

/// KPI and chart inputs for one category filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KiteMetricsSnapshot {
    pub filter: KiteCategoryFilter,
    pub total: usize,
    /// One entry per sentiment, positive / neutral / negative, zeros included.
    pub sentiments: Vec<KiteSentimentShare>,
    /// Reasons of negative posts, count descending then reason ascending.
    pub reasons: Vec<KiteReasonCount>,
    /// Negative posts without a usable reason; not part of `reasons`.
    pub negatives_without_reason: usize,
}

impl KiteMetricsSnapshot {
    fn share(&self, sentiment: KiteSentiment) -> Option<&KiteSentimentShare> {
        self.sentiments.iter().find(|s| s.sentiment == sentiment)
    }

    pub fn count(&self, sentiment: KiteSentiment) -> usize {
        self.share(sentiment).map(|s| s.count).unwrap_or(0)
    }

    pub fn percentage(&self, sentiment: KiteSentiment) -> f64 {
        self.share(sentiment).map(|s| s.percentage).unwrap_or(0.0)
    }

    pub fn negative_count(&self) -> usize {
        self.count(KiteSentiment::Negative)
    }

    /// Sum of the reason distribution.
    pub fn reason_total(&self) -> usize {
        self.reasons.iter().map(|r| r.count).sum()
    }

    pub fn reason_count(&self, reason: &str) -> usize {
        self.reasons
            .iter()
            .find(|r| r.reason == reason)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    pub fn as_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Computes [`KiteMetricsSnapshot`]s. Holds only the rounding precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KiteMetricsAggregator {
    precision: u32,
}

impl Default for KiteMetricsAggregator {
    fn default() -> Self {
        Self {
            precision: KITE_DEFAULT_PERCENT_PRECISION,
        }
    }
}

impl KiteMetricsAggregator {
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.min(MAX_PERCENT_PRECISION),
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Aggregates the records selected by `filter`.
    ///
    /// Returns [`KiteError::EmptyResult`] when nothing matches, since
    /// percentages over zero records are undefined.
    pub fn aggregate(
        &self,
        dataset: &KiteDataset,
        filter: &KiteCategoryFilter,
    ) -> Result<KiteMetricsSnapshot> {
        let records = dataset.filtered(filter);
        if records.is_empty() {
            return Err(KiteError::empty_result(filter.label()));
        }
        let total = records.len();

        let mut sentiment_counts: HashMap<KiteSentiment, usize> = HashMap::new();
        let mut reason_counts: HashMap<&str, usize> = HashMap::new();
        let mut negatives_without_reason = 0usize;

        for record in &records {
            *sentiment_counts.entry(record.sentiment).or_insert(0) += 1;
            if !record.is_negative() {
                continue;
            }
            match record.reason_label() {
                Some(reason) => *reason_counts.entry(reason).or_insert(0) += 1,
                None => negatives_without_reason += 1,
            }
        }

        let sentiments = KiteSentiment::ALL
            .iter()
            .map(|sentiment| {
                let count = sentiment_counts.get(sentiment).copied().unwrap_or(0);
                KiteSentimentShare {
                    sentiment: *sentiment,
                    count,
                    percentage: round_to(count as f64 / total as f64 * 100.0, self.precision),
                }
            })
            .collect();

        let mut reasons: Vec<KiteReasonCount> = reason_counts
            .into_iter()
            .map(|(reason, count)| KiteReasonCount {
                reason: reason.to_string(),
                count,
            })
            .collect();
        reasons.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.reason.cmp(&b.reason)));

        Ok(KiteMetricsSnapshot {
            filter: filter.clone(),
            total,
            sentiments,
            reasons,
            negatives_without_reason,
        })
    }
}
