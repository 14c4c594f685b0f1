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

//! # Kite Core Library
//!
//! Kite turns a dataset of airline customer posts into the numbers behind a
//! sentiment dashboard: sentiment KPIs, the distribution of complaint
//! reasons, and the most frequent words of negative posts.
//!
//! ## Module Overview
//!
//! - **record**: KiteRecord, KiteDataset and the category filter
//! - **ingest**: CSV reading and the loader with synthetic fallback
//! - **enrich**: Seeded synthetic dataset generation
//! - **text**: Stopwords, text cleaning and keyword frequency
//! - **metrics**: Sentiment and reason aggregation
//! - **inspect**: Raw data table view
//! - **config**: Serde configuration (JSON or YAML)
//! - **logging**: JSON logger backend for the `log` facade
//! - **session**: Facade consumed by a dashboard shell
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kite::{KiteCategoryFilter, KiteConfig, KiteSession};
//!
//! let session = KiteSession::open(KiteConfig::default().with_primary_path("Tweets.csv"))?;
//! for option in session.category_options() {
//!     let view = session.refresh(&KiteCategoryFilter::parse(&option));
//!     println!("{}: {:?}", option, view.keywords);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Operations return `Result<T, KiteError>`. Source errors never escape the
//! loader; an empty filter selection is reported as `KiteError::EmptyResult`.

pub mod errors;

pub mod record;
pub mod ingest;
pub mod enrich;
pub mod text;
pub mod metrics;
pub mod inspect;
pub mod config;
pub mod logging;
pub mod session;

pub use errors::{KiteError, Result};
pub use record::{
    KiteCategoryFilter, KiteDataset, KiteDatasetOrigin, KiteRecord, KiteRecordBatch,
    KiteSentiment, KITE_ALL_CATEGORIES_LABEL,
};
pub use ingest::{
    KiteColumnMap, KiteCsvReader, KiteDatasetLoader, KiteLoadReport, KiteLoadState,
    KiteLoaderConfig, KiteReaderConfig,
};
pub use enrich::{KiteSentimentWeights, KiteSynthesisConfig, KiteSyntheticGenerator};
pub use text::{
    KiteFrequencyAnalyzer, KiteFrequencyTable, KiteKeyword, KiteStopwords, KiteTokenizer,
};
pub use metrics::{KiteMetricsAggregator, KiteMetricsSnapshot, KiteReasonCount, KiteSentimentShare};
pub use inspect::{KiteRawRow, KiteRawView};
pub use config::{KiteConfig, KiteMetricsConfig, KiteTextConfig};
pub use logging::{KiteLogConfig, KiteLogger};
pub use session::{KiteDashboardView, KiteSession};
