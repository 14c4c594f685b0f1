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

//! # Kite Record Module
//!
//! This module provides the data structures for individual posts and the
//! loaded dataset. A [`KiteRecord`] is one labeled post; a [`KiteDataset`] is
//! the ordered, read-only collection built once per session together with a
//! tag saying where it came from.
//!
//! ## Usage Example
//!
//! ```rust
//! use kite::record::{KiteRecord, KiteSentiment};
//!
//! let record = KiteRecord::new("1", "Delta", KiteSentiment::Negative, "bags lost again")
//!     .with_reason("Lost Luggage");
//! assert!(record.is_negative());
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::{KiteError, Result};

/// Label shown by the shell for the "no category filter" sentinel.
pub const KITE_ALL_CATEGORIES_LABEL: &str = "All Airlines";

/// Sentiment label attached to every post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KiteSentiment {
    Positive,
    Neutral,
    Negative,
}

impl KiteSentiment {
    /// All sentiment values in display order.
    pub const ALL: [KiteSentiment; 3] = [
        KiteSentiment::Positive,
        KiteSentiment::Neutral,
        KiteSentiment::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KiteSentiment::Positive => "positive",
            KiteSentiment::Neutral => "neutral",
            KiteSentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for KiteSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KiteSentiment {
    type Err = KiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(KiteSentiment::Positive),
            "neutral" => Ok(KiteSentiment::Neutral),
            "negative" => Ok(KiteSentiment::Negative),
            other => Err(KiteError::validation(format!(
                "unknown sentiment label '{other}'"
            ))),
        }
    }
}

/// One labeled post.
///
/// `reason` is expected to be present exactly when the sentiment is negative.
/// Synthetic data always honors this; source data is kept as-is even when it
/// does not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KiteRecord {
    /// Unique identifier (the post id, or the row index when the source has none).
    pub id: String,
    /// Category the post belongs to, i.e. the airline name.
    pub category: String,
    pub sentiment: KiteSentiment,
    /// Complaint reason, only meaningful for negative posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Raw post text.
    pub text: String,
    /// When the post was created, if the source provided a parsable timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl KiteRecord {
    /// Constructs a record without reason or timestamp.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        sentiment: KiteSentiment,
        text: impl Into<String>,
    ) -> Self {
        KiteRecord {
            id: id.into(),
            category: category.into(),
            sentiment,
            reason: None,
            text: text.into(),
            created_at: None,
        }
    }

    /// Attaches a complaint reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<FixedOffset>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_negative(&self) -> bool {
        self.sentiment == KiteSentiment::Negative
    }

    /// The reason, treating empty or whitespace-only strings as absent.
    pub fn reason_label(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
    }
}

/// Where a dataset came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KiteDatasetOrigin {
    /// Parsed from the primary source file.
    Primary,
    /// Produced by the synthetic generator after the primary source failed.
    Synthetic,
}

impl KiteDatasetOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            KiteDatasetOrigin::Primary => "primary",
            KiteDatasetOrigin::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for KiteDatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category scope applied to metrics, keywords, and the raw view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KiteCategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exact match on `KiteRecord::category`.
    Category(String),
}

impl KiteCategoryFilter {
    /// Maps a shell selection to a filter; the sentinel label selects everything.
    pub fn parse(selection: &str) -> Self {
        if selection == KITE_ALL_CATEGORIES_LABEL {
            KiteCategoryFilter::All
        } else {
            KiteCategoryFilter::Category(selection.to_string())
        }
    }

    pub fn matches(&self, record: &KiteRecord) -> bool {
        match self {
            KiteCategoryFilter::All => true,
            KiteCategoryFilter::Category(category) => record.category == *category,
        }
    }

    /// Human-readable label, the inverse of [`KiteCategoryFilter::parse`].
    pub fn label(&self) -> &str {
        match self {
            KiteCategoryFilter::All => KITE_ALL_CATEGORIES_LABEL,
            KiteCategoryFilter::Category(category) => category,
        }
    }
}

impl From<Option<&str>> for KiteCategoryFilter {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(category) => KiteCategoryFilter::Category(category.to_string()),
            None => KiteCategoryFilter::All,
        }
    }
}

/// Convenience alias for working on batches of records.
pub type KiteRecordBatch = Vec<KiteRecord>;

/// The working dataset of a session. Read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KiteDataset {
    records: KiteRecordBatch,
    origin: KiteDatasetOrigin,
}

impl KiteDataset {
    pub fn new(records: KiteRecordBatch, origin: KiteDatasetOrigin) -> Self {
        KiteDataset { records, origin }
    }

    pub fn records(&self) -> &[KiteRecord] {
        &self.records
    }

    pub fn origin(&self) -> KiteDatasetOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories present in the dataset, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records in scope of `filter`, in dataset order.
    pub fn filtered(&self, filter: &KiteCategoryFilter) -> Vec<&KiteRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Negative records in scope of `filter`, in dataset order.
    pub fn negatives(&self, filter: &KiteCategoryFilter) -> Vec<&KiteRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record) && record.is_negative())
            .collect()
    }
}
