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

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Configuration for [`super::KiteLogger`]: console/file enablement, default
/// level, and JSON formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteLogConfig {
    pub default_level: String,
    pub console_enabled: bool,
    pub json_format_console: bool,
    /// Whether file logging is enabled.
    pub file_enabled: bool,
    /// Log file path when file logging is enabled. Lines are appended.
    pub file_path: Option<String>,
}

impl Default for KiteLogConfig {
    fn default() -> Self {
        KiteLogConfig {
            default_level: "INFO".to_string(),
            console_enabled: true,
            json_format_console: true,
            file_enabled: false,
            file_path: None,
        }
    }
}

impl KiteLogConfig {
    /// Threshold parsed from `default_level`; unknown names mean INFO.
    pub fn level_filter(&self) -> LevelFilter {
        match self.default_level.to_ascii_uppercase().as_str() {
            "OFF" => LevelFilter::Off,
            "ERROR" => LevelFilter::Error,
            "WARN" | "WARNING" => LevelFilter::Warn,
            "DEBUG" => LevelFilter::Debug,
            "TRACE" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.default_level = level.to_string();
        self
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file_enabled = true;
        self.file_path = Some(path.into());
        self
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }
}
