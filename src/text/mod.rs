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

//! # Text Analysis Module
//!
//! This module turns post text into keyword statistics.
//!
//! ## Module Components
//!
//! - **Stopwords** ([stopwords.rs](stopwords/index.html)): Domain and general-English lexicon, negations excluded
//! - **Tokenizer** ([tokenizer.rs](tokenizer/index.html)): Lowercasing, URL/mention/punctuation stripping, filtering
//! - **Frequency** ([frequency.rs](frequency/index.html)): Token counting and top-N ranking
//!
//! ## Usage Patterns
//!
//! ```rust
//! use std::sync::Arc;
//! use kite::text::{KiteStopwords, KiteTokenizer, KiteFrequencyAnalyzer};
//!
//! let tokenizer = KiteTokenizer::new(Arc::new(KiteStopwords::airline_default()));
//! let analyzer = KiteFrequencyAnalyzer::new(tokenizer);
//! let keywords = analyzer.top_keywords(dataset.negatives(&filter), 20);
//! ```

pub mod frequency;
pub mod stopwords;
pub mod tokenizer;

pub use frequency::{KiteFrequencyAnalyzer, KiteFrequencyTable, KiteKeyword, KITE_DEFAULT_KEYWORD_LIMIT};
pub use stopwords::{KiteStopwords, KITE_DOMAIN_STOPWORDS, KITE_GENERAL_STOPWORDS, KITE_NEGATIONS};
pub use tokenizer::{KiteTokenizer, KITE_DEFAULT_MIN_TOKEN_LEN};
