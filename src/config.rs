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

//! # Kite Configuration
//!
//! One serde document with a section per component. Every section and
//! every field has a default, so an empty document is a valid configuration.
//!
//! ```yaml
//! source:
//!   primary_path: data/Tweets.csv
//!   max_row_errors: 10
//! synthesis:
//!   size: 200
//!   seed: 42
//! text:
//!   extra_stopwords: [jetblue]
//! metrics:
//!   precision: 2
//! log:
//!   default_level: DEBUG
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::enrich::synthesis::KiteSynthesisConfig;
use crate::errors::{KiteError, Result};
use crate::ingest::loader::KiteLoaderConfig;
use crate::logging::config::KiteLogConfig;
use crate::metrics::{KiteMetricsAggregator, KITE_DEFAULT_PERCENT_PRECISION};
use crate::text::frequency::KITE_DEFAULT_KEYWORD_LIMIT;
use crate::text::stopwords::KiteStopwords;
use crate::text::tokenizer::{KiteTokenizer, KITE_DEFAULT_MIN_TOKEN_LEN};

/// Text cleaning and keyword ranking settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteTextConfig {
    pub min_token_len: usize,
    /// Number of keywords returned by top-keyword queries.
    pub keyword_limit: usize,
    /// Added to the airline stopword list. Negations are ignored here.
    pub extra_stopwords: Vec<String>,
}

impl Default for KiteTextConfig {
    fn default() -> Self {
        Self {
            min_token_len: KITE_DEFAULT_MIN_TOKEN_LEN,
            keyword_limit: KITE_DEFAULT_KEYWORD_LIMIT,
            extra_stopwords: Vec::new(),
        }
    }
}

impl KiteTextConfig {
    pub fn tokenizer(&self) -> KiteTokenizer {
        let stopwords = KiteStopwords::airline_default().with_extra(self.extra_stopwords.iter());
        KiteTokenizer::new(Arc::new(stopwords)).with_min_token_len(self.min_token_len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteMetricsConfig {
    /// Decimal places of sentiment percentages.
    pub precision: u32,
}

impl Default for KiteMetricsConfig {
    fn default() -> Self {
        Self {
            precision: KITE_DEFAULT_PERCENT_PRECISION,
        }
    }
}

impl KiteMetricsConfig {
    pub fn aggregator(&self) -> KiteMetricsAggregator {
        KiteMetricsAggregator::new(self.precision)
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteConfig {
    pub source: KiteLoaderConfig,
    pub synthesis: KiteSynthesisConfig,
    pub text: KiteTextConfig,
    pub metrics: KiteMetricsConfig,
    pub log: KiteLogConfig,
}

impl KiteConfig {
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: KiteConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let config: KiteConfig = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(KiteError::validation(format!(
                    "unsupported config format: {}",
                    path.display()
                )))
            }
        };
        let contents = std::fs::read_to_string(path)?;
        parse(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        let columns = &self.source.reader.columns;
        for (name, value) in [
            ("category", &columns.category),
            ("sentiment", &columns.sentiment),
            ("text", &columns.text),
        ] {
            if value.trim().is_empty() {
                return Err(KiteError::validation(format!(
                    "source.columns.{name} must not be empty"
                )));
            }
        }
        if !self.source.reader.delimiter.is_ascii() {
            return Err(KiteError::validation("source.delimiter must be an ASCII character"));
        }
        self.synthesis.validate()?;
        if self.text.min_token_len == 0 {
            return Err(KiteError::validation("text.min_token_len must be at least 1"));
        }
        if self.metrics.precision > 6 {
            return Err(KiteError::validation("metrics.precision must be at most 6"));
        }
        Ok(())
    }

    pub fn with_primary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source.primary_path = path.into();
        self
    }

    pub fn with_synthesis(mut self, synthesis: KiteSynthesisConfig) -> Self {
        self.synthesis = synthesis;
        self
    }

    pub fn with_text(mut self, text: KiteTextConfig) -> Self {
        self.text = text;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.metrics.precision = precision;
        self
    }

    pub fn with_log(mut self, log: KiteLogConfig) -> Self {
        self.log = log;
        self
    }
}
