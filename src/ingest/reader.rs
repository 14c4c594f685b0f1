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

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::errors::{KiteError, Result};
use crate::record::{KiteRecord, KiteRecordBatch, KiteSentiment};

/// Header names of the source columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteColumnMap {
    /// Optional; the row index is used when the column is absent.
    pub id: String,
    pub category: String,
    pub sentiment: String,
    /// Optional; every reason is `None` when the column is absent.
    pub reason: String,
    pub text: String,
    /// Optional; every timestamp is `None` when the column is absent.
    pub created_at: String,
}

impl Default for KiteColumnMap {
    fn default() -> Self {
        Self {
            id: "tweet_id".to_string(),
            category: "airline".to_string(),
            sentiment: "airline_sentiment".to_string(),
            reason: "negativereason".to_string(),
            text: "text".to_string(),
            created_at: "tweet_created".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteReaderConfig {
    pub columns: KiteColumnMap,
    /// Malformed rows tolerated before the whole source counts as malformed.
    pub max_row_errors: usize,
    pub delimiter: char,
}

impl Default for KiteReaderConfig {
    fn default() -> Self {
        Self {
            columns: KiteColumnMap::default(),
            max_row_errors: 100,
            delimiter: ',',
        }
    }
}

/// Resolved column positions for one source.
struct ColumnIndex {
    id: Option<usize>,
    category: usize,
    sentiment: usize,
    reason: Option<usize>,
    text: usize,
    created_at: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &KiteColumnMap, source: &str) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                KiteError::source_malformed(source, format!("missing required column '{name}'"))
            })
        };
        Ok(Self {
            id: find(&columns.id),
            category: require(&columns.category)?,
            sentiment: require(&columns.sentiment)?,
            reason: find(&columns.reason),
            text: require(&columns.text)?,
            created_at: find(&columns.created_at),
        })
    }
}

/// Parses the formats seen in post exports: `2015-02-24 11:35:52 -0800`,
/// RFC 3339, and naive `YYYY-MM-DD HH:MM:SS` taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

/// CSV reader producing [`KiteRecord`]s.
///
/// Open failures map to `SourceUnavailable`. A missing required column, more
/// than `max_row_errors` bad rows, or zero valid rows map to `SourceMalformed`.
#[derive(Clone, Debug, Default)]
pub struct KiteCsvReader {
    config: KiteReaderConfig,
}

impl KiteCsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: KiteReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &KiteReaderConfig {
        &self.config
    }

    pub fn read_path(&self, path: &Path) -> Result<KiteRecordBatch> {
        let source = path.display().to_string();
        let file = File::open(path)
            .map_err(|err| KiteError::source_unavailable(&source, err.to_string()))?;
        self.read_from(BufReader::new(file), &source)
    }

    /// Reads records from any reader; `source` names it in errors and logs.
    pub fn read_from<R: Read>(&self, reader: R, source: &str) -> Result<KiteRecordBatch> {
        let delimiter = u8::try_from(self.config.delimiter).map_err(|_| {
            KiteError::validation(format!(
                "csv delimiter '{}' is not a single-byte character",
                self.config.delimiter
            ))
        })?;
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|err| KiteError::source_malformed(source, format!("csv headers error: {err}")))?
            .clone();
        let index = ColumnIndex::resolve(&headers, &self.config.columns, source)?;

        let mut batch = Vec::new();
        let mut error_count = 0usize;

        for (idx, row) in csv_reader.records().enumerate() {
            let parsed = row
                .map_err(|err| err.to_string())
                .and_then(|row| Self::parse_row(&row, &index, idx));
            match parsed {
                Ok(record) => batch.push(record),
                Err(message) => {
                    error_count += 1;
                    if error_count > self.config.max_row_errors {
                        return Err(KiteError::source_malformed(
                            source,
                            format!(
                                "too many errors ({error_count}): last error at row {idx}: {message}"
                            ),
                        ));
                    }
                    log::warn!("skipping invalid csv row {} in {}: {}", idx, source, message);
                }
            }
        }

        if batch.is_empty() {
            return Err(KiteError::source_malformed(source, "no valid records"));
        }
        log::debug!(
            "read {} records from {} ({} rows skipped)",
            batch.len(),
            source,
            error_count
        );
        Ok(batch)
    }

    fn parse_row(
        row: &StringRecord,
        index: &ColumnIndex,
        idx: usize,
    ) -> std::result::Result<KiteRecord, String> {
        let field = |pos: usize| row.get(pos).map(str::trim);
        let optional = |pos: Option<usize>| {
            pos.and_then(|p| row.get(p))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let category = field(index.category)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| "missing category".to_string())?;
        let sentiment: KiteSentiment = field(index.sentiment)
            .ok_or_else(|| "missing sentiment".to_string())?
            .parse()
            .map_err(|err: KiteError| err.to_string())?;
        let text = row
            .get(index.text)
            .ok_or_else(|| "missing text".to_string())?;
        let id = optional(index.id)
            .map(str::to_string)
            .unwrap_or_else(|| idx.to_string());

        let mut record = KiteRecord::new(id, category, sentiment, text);
        record.reason = optional(index.reason).map(str::to_string);
        record.created_at = optional(index.created_at).and_then(parse_timestamp);
        Ok(record)
    }
}
