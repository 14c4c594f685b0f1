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

//! # Kite Session
//!
//! Entry point for a dashboard shell. A session loads the dataset once and
//! answers every filter change from that immutable snapshot.
//!
//! ```rust,ignore
//! use kite::{KiteCategoryFilter, KiteConfig, KiteSession};
//!
//! let session = KiteSession::open(KiteConfig::default())?;
//! let filter = KiteCategoryFilter::parse("United");
//! let view = session.refresh(&filter);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::KiteConfig;
use crate::errors::{KiteError, Result};
use crate::ingest::loader::KiteDatasetLoader;
use crate::inspect::view::KiteRawView;
use crate::logging::core::KiteLogger;
use crate::metrics::{KiteMetricsAggregator, KiteMetricsSnapshot};
use crate::record::{KiteCategoryFilter, KiteDataset, KiteDatasetOrigin, KiteRecord, KITE_ALL_CATEGORIES_LABEL};
use crate::text::frequency::{KiteFrequencyAnalyzer, KiteKeyword};

/// Everything the dashboard redraws after a filter change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KiteDashboardView {
    pub filter: KiteCategoryFilter,
    /// `Err(EmptyResult)` when the filter selects nothing; the shell shows
    /// "no data" instead of charts.
    pub metrics: Result<KiteMetricsSnapshot>,
    pub keywords: Vec<KiteKeyword>,
    pub word_cloud_text: String,
    pub raw: KiteRawView,
}

impl KiteDashboardView {
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

pub struct KiteSession {
    dataset: Arc<KiteDataset>,
    fallback_cause: Option<KiteError>,
    analyzer: KiteFrequencyAnalyzer,
    aggregator: KiteMetricsAggregator,
    keyword_limit: usize,
}

impl KiteSession {
    /// Installs the logger, then loads the configured source. The load
    /// itself never fails; a broken source yields synthetic data.
    pub fn open(config: KiteConfig) -> Result<Self> {
        config.validate()?;
        KiteLogger::init(config.log.clone())?;
        let loader = KiteDatasetLoader::new(config.source.clone(), config.synthesis.clone());
        let report = loader.load_with_report(&config.source.primary_path);
        let mut session = Self::from_dataset(report.dataset, &config);
        session.fallback_cause = report.fallback_cause;
        Ok(session)
    }

    /// Builds a session over an already loaded dataset.
    pub fn from_dataset(dataset: KiteDataset, config: &KiteConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            fallback_cause: None,
            analyzer: KiteFrequencyAnalyzer::new(config.text.tokenizer()),
            aggregator: config.metrics.aggregator(),
            keyword_limit: config.text.keyword_limit,
        }
    }

    pub fn dataset(&self) -> Arc<KiteDataset> {
        Arc::clone(&self.dataset)
    }

    pub fn origin(&self) -> KiteDatasetOrigin {
        self.dataset.origin()
    }

    /// Why the primary source was rejected, if it was.
    pub fn fallback_cause(&self) -> Option<&KiteError> {
        self.fallback_cause.as_ref()
    }

    /// Selector entries: the all-categories label, then sorted categories.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(KITE_ALL_CATEGORIES_LABEL.to_string())
            .chain(self.dataset.categories())
            .collect()
    }

    pub fn metrics(&self, filter: &KiteCategoryFilter) -> Result<KiteMetricsSnapshot> {
        self.aggregator.aggregate(&self.dataset, filter)
    }

    pub fn negative_records(&self, filter: &KiteCategoryFilter) -> Vec<&KiteRecord> {
        self.dataset.negatives(filter)
    }

    /// Most frequent words of the negative posts under `filter`.
    pub fn top_keywords(&self, filter: &KiteCategoryFilter) -> Vec<KiteKeyword> {
        self.analyzer
            .top_keywords(self.negative_records(filter), self.keyword_limit)
    }

    pub fn word_cloud_text(&self, filter: &KiteCategoryFilter) -> String {
        self.analyzer
            .tokenizer()
            .word_cloud_text(self.negative_records(filter))
    }

    pub fn raw_view(&self, filter: &KiteCategoryFilter, include_cleaned: bool) -> KiteRawView {
        KiteRawView::build(&self.dataset, filter, include_cleaned, self.analyzer.tokenizer())
    }

    pub fn refresh(&self, filter: &KiteCategoryFilter) -> KiteDashboardView {
        let metrics = self.metrics(filter);
        if let Err(err) = &metrics {
            log::debug!("no metrics for filter {}: {}", filter.label(), err);
        }
        KiteDashboardView {
            filter: filter.clone(),
            metrics,
            keywords: self.top_keywords(filter),
            word_cloud_text: self.word_cloud_text(filter),
            raw: self.raw_view(filter, false),
        }
    }
}
