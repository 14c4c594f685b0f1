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

//! # Synthetic Dataset Module
//!
//! Builds a demonstration dataset with the same shape as the primary source:
//! airline categories, weighted sentiments, and complaint reasons attached to
//! negative posts only. Generation is pure in-memory construction and cannot
//! fail; empty or degenerate configuration falls back to the built-in values.
//!
//! With `seed` set, every call to [`KiteSyntheticGenerator::generate`] returns
//! the same records. Without it, each call draws fresh entropy.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::{KiteError, Result};
use crate::record::{KiteDataset, KiteDatasetOrigin, KiteRecord, KiteSentiment};

/// Airlines used when the configuration lists none.
pub const KITE_SYNTHETIC_CATEGORIES: &[&str] = &[
    "United",
    "Delta",
    "US Airways",
    "American",
    "Southwest",
    "Virgin America",
];

/// Complaint reasons used when the configuration lists none.
pub const KITE_SYNTHETIC_REASONS: &[&str] = &[
    "Late Flight",
    "Lost Luggage",
    "Customer Service Issue",
    "Cancelled Flight",
    "Flight Booking Problems",
];

/// Sample posts cycled through the generated records.
pub const KITE_SYNTHETIC_TEXTS: &[&str] = &[
    "@VirginAmerica What @dhepburn said.",
    "@United car broke down on way to airport, can I change flight?",
    "@SouthwestAir lost my bag again!",
    "@USAirways thanks for the great service today.",
    "@JetBlue flight was delayed 3 hours. #frustrated",
    "@AmericanAir worst customer service ever.",
    "@Delta love the new seats!",
    "@United luggage was damaged.",
    "@VirginAmerica you guys rock!",
    "@SouthwestAir on hold for 40 mins...",
];

/// Default number of synthetic records.
pub const KITE_DEFAULT_SYNTHETIC_SIZE: usize = 100;

/// Relative sentiment frequencies of generated posts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteSentimentWeights {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Default for KiteSentimentWeights {
    fn default() -> Self {
        Self {
            positive: 0.2,
            neutral: 0.3,
            negative: 0.5,
        }
    }
}

impl KiteSentimentWeights {
    fn as_array(&self) -> [f64; 3] {
        [self.positive, self.neutral, self.negative]
    }

    fn is_valid(&self) -> bool {
        let weights = self.as_array();
        weights.iter().all(|w| w.is_finite() && *w >= 0.0) && weights.iter().sum::<f64>() > 0.0
    }
}

/// Configuration for synthetic dataset generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteSynthesisConfig {
    /// Number of records generated by the loader fallback.
    pub size: usize,
    /// Random seed for reproducible generation.
    pub seed: Option<u64>,
    pub categories: Vec<String>,
    pub reasons: Vec<String>,
    pub sentiment_weights: KiteSentimentWeights,
    /// Post texts, assigned round-robin.
    pub texts: Vec<String>,
    /// Date of the first post; each following post is one day later.
    pub start_date: NaiveDate,
    /// Prefix for generated record IDs.
    pub id_prefix: String,
}

impl Default for KiteSynthesisConfig {
    fn default() -> Self {
        Self {
            size: KITE_DEFAULT_SYNTHETIC_SIZE,
            seed: None,
            categories: to_strings(KITE_SYNTHETIC_CATEGORIES),
            reasons: to_strings(KITE_SYNTHETIC_REASONS),
            sentiment_weights: KiteSentimentWeights::default(),
            texts: to_strings(KITE_SYNTHETIC_TEXTS),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            id_prefix: "synth_".to_string(),
        }
    }
}

impl KiteSynthesisConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reasons<I, S>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reasons = reasons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sentiment_weights(mut self, weights: KiteSentimentWeights) -> Self {
        self.sentiment_weights = weights;
        self
    }

    /// Rejects configurations the generator would silently repair.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(KiteError::validation("synthesis.size must be positive"));
        }
        if self.categories.is_empty() {
            return Err(KiteError::validation("synthesis.categories must not be empty"));
        }
        if self.reasons.is_empty() {
            return Err(KiteError::validation("synthesis.reasons must not be empty"));
        }
        if self.texts.is_empty() {
            return Err(KiteError::validation("synthesis.texts must not be empty"));
        }
        if !self.sentiment_weights.is_valid() {
            return Err(KiteError::validation(
                "synthesis.sentiment_weights must be finite, non-negative, and not all zero",
            ));
        }
        Ok(())
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn or_builtin(values: &[String], builtin: &[&str]) -> Vec<String> {
    if values.is_empty() {
        to_strings(builtin)
    } else {
        values.to_vec()
    }
}

/// Generator for fallback datasets.
#[derive(Clone, Debug, Default)]
pub struct KiteSyntheticGenerator {
    config: KiteSynthesisConfig,
}

impl KiteSyntheticGenerator {
    pub fn new(config: KiteSynthesisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KiteSynthesisConfig {
        &self.config
    }

    /// Generates `size` records (at least one) tagged as synthetic.
    pub fn generate(&self, size: usize) -> KiteDataset {
        let size = size.max(1);
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let categories = or_builtin(&self.config.categories, KITE_SYNTHETIC_CATEGORIES);
        let reasons = or_builtin(&self.config.reasons, KITE_SYNTHETIC_REASONS);
        let texts = or_builtin(&self.config.texts, KITE_SYNTHETIC_TEXTS);
        let sentiment_index = if self.config.sentiment_weights.is_valid() {
            WeightedIndex::new(self.config.sentiment_weights.as_array()).ok()
        } else {
            log::warn!("invalid synthetic sentiment weights, sampling uniformly");
            None
        };
        let start = self.config.start_date.and_time(NaiveTime::MIN).and_utc().fixed_offset();

        let records = (0..size)
            .map(|idx| {
                let sentiment_idx = match &sentiment_index {
                    Some(dist) => dist.sample(&mut rng),
                    None => rng.gen_range(0..KiteSentiment::ALL.len()),
                };
                let sentiment = KiteSentiment::ALL[sentiment_idx];
                let category = &categories[rng.gen_range(0..categories.len())];
                let reason = &reasons[rng.gen_range(0..reasons.len())];
                let text = &texts[idx % texts.len()];

                let mut record = KiteRecord::new(
                    format!("{}{}", self.config.id_prefix, idx),
                    category.clone(),
                    sentiment,
                    text.clone(),
                );
                if sentiment == KiteSentiment::Negative {
                    record = record.with_reason(reason.clone());
                }
                if let Some(created_at) = start.checked_add_signed(Duration::days(idx as i64)) {
                    record = record.with_created_at(created_at);
                }
                record
            })
            .collect();

        log::debug!(
            "generated {} synthetic records (seeded: {})",
            size,
            self.config.seed.is_some()
        );
        KiteDataset::new(records, KiteDatasetOrigin::Synthetic)
    }

    /// Generates the configured number of records.
    pub fn generate_default(&self) -> KiteDataset {
        self.generate(self.config.size)
    }
}
