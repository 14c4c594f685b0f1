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

//! # Data Ingestion Module
//!
//! This module loads the working dataset for a session.
//!
//! ## Module Components
//!
//! - **Reader** ([reader.rs](reader/index.html)): Headered CSV parsing with bad-row tolerance
//! - **Loader** ([loader.rs](loader/index.html)): Primary source with synthetic fallback
//!
//! ## Expected Columns
//!
//! | Column              | Required | Meaning                          |
//! |---------------------|----------|----------------------------------|
//! | `tweet_id`          | no       | unique post id (row index if absent) |
//! | `airline`           | yes      | category                         |
//! | `airline_sentiment` | yes      | positive / neutral / negative    |
//! | `negativereason`    | no       | complaint reason                 |
//! | `text`              | yes      | raw post text                    |
//! | `tweet_created`     | no       | post timestamp                   |
//!
//! Column names are configurable through [`KiteColumnMap`].
//!
//! ## Usage Patterns
//!
//! ```rust
//! use kite::ingest::KiteDatasetLoader;
//!
//! let dataset = KiteDatasetLoader::default().load("Tweets.csv");
//! println!("{} records from {}", dataset.len(), dataset.origin());
//! ```

pub mod loader;
pub mod reader;

pub use loader::{KiteDatasetLoader, KiteLoadReport, KiteLoadState, KiteLoaderConfig, KITE_DEFAULT_PRIMARY_PATH};
pub use reader::{parse_timestamp, KiteColumnMap, KiteCsvReader, KiteReaderConfig};
