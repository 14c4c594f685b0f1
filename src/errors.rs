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

//! # Kite Error Module
//!
//! This module defines the error types used throughout Kite.
//!
//! ## Error Categories
//!
//! - **SourceUnavailable**: The primary dataset file is missing or unreadable
//! - **SourceMalformed**: The primary dataset could not be parsed into records
//! - **EmptyResult**: A category filter matched zero records
//! - **Validation**: Invalid configuration or parameters
//! - **Io**: Filesystem errors outside of dataset loading (e.g. config files)
//! - **Serde**: Serialization/deserialization errors
//!
//! The two source variants never escape [`crate::ingest::KiteDatasetLoader`]:
//! they are recorded as the fallback cause and replaced by a synthetic dataset.
//! `EmptyResult` is returned to callers so the shell can show "no data"
//! instead of dividing by zero.
//!
//! ## Usage
//!
//! ```rust
//! use kite::errors::{Result, KiteError};
//!
//! fn example(limit: usize) -> Result<usize> {
//!     if limit == 0 {
//!         return Err(KiteError::validation("limit must be positive"));
//!     }
//!     Ok(limit)
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Kite.
pub type Result<T> = std::result::Result<T, KiteError>;

/// Canonical error enumeration for Kite.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum KiteError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// The primary dataset file is missing or cannot be opened.
    #[error("source '{path}' unavailable: {message}")]
    SourceUnavailable { path: String, message: String },

    /// The primary dataset was readable but violated the expected schema.
    #[error("source '{path}' malformed: {message}")]
    SourceMalformed { path: String, message: String },

    /// A category filter selected zero records.
    #[error("no records match filter '{filter}'")]
    EmptyResult { filter: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for KiteError {
    fn from(err: io::Error) -> Self {
        KiteError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KiteError {
    fn from(err: serde_json::Error) -> Self {
        KiteError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for KiteError {
    fn from(err: serde_yaml::Error) -> Self {
        KiteError::Serde(err.to_string())
    }
}

impl From<csv::Error> for KiteError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            KiteError::Io(err.to_string())
        } else {
            KiteError::Serde(err.to_string())
        }
    }
}

impl KiteError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        KiteError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct source-unavailable errors.
    pub fn source_unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        KiteError::SourceUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Helper to construct source-malformed errors.
    pub fn source_malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        KiteError::SourceMalformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Helper to construct empty-result errors.
    pub fn empty_result<T: Into<String>>(filter: T) -> Self {
        KiteError::EmptyResult {
            filter: filter.into(),
        }
    }

    /// Whether this error belongs to the load-time taxonomy that triggers the
    /// synthetic fallback.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            KiteError::SourceUnavailable { .. } | KiteError::SourceMalformed { .. }
        )
    }
}
