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

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use serde_json::{json, Map, Value};

use crate::errors::Result;
use crate::logging::config::KiteLogConfig;

/// Structured view of one log line.
pub fn record_to_json(level: log::Level, target: &str, message: &str, timestamp: SystemTime) -> Value {
    let ts = timestamp
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let mut data = Map::new();
    data.insert("level".into(), json!(level.as_str()));
    data.insert("target".into(), json!(target));
    data.insert("message".into(), json!(message));
    data.insert("timestamp_ms".into(), json!(ts));
    Value::Object(data)
}

fn format_line(json_format: bool, level: log::Level, target: &str, message: &str) -> String {
    let now = SystemTime::now();
    if json_format {
        record_to_json(level, target, message, now).to_string()
    } else {
        let ts = now.duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        format!("{ts} {:<5} {target}: {message}", level.as_str())
    }
}

/// `log` backend writing JSON (or plain) lines to stdout and/or a file.
pub struct KiteLogger {
    config: KiteLogConfig,
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

static LOGGER: OnceLock<KiteLogger> = OnceLock::new();

impl KiteLogger {
    pub fn new(config: KiteLogConfig) -> Result<Self> {
        let file = match (&config.file_enabled, &config.file_path) {
            (true, Some(path)) => Some(Mutex::new(
                OpenOptions::new().create(true).append(true).open(path)?,
            )),
            _ => None,
        };
        Ok(Self {
            level: config.level_filter(),
            config,
            file,
        })
    }

    /// Installs the global logger. Safe to call multiple times; the first
    /// call wins and later calls return `Ok(())` without changes.
    pub fn init(config: KiteLogConfig) -> Result<()> {
        if LOGGER.get().is_some() {
            return Ok(());
        }
        let configured = KiteLogger::new(config)?;
        let logger = LOGGER.get_or_init(|| configured);
        // another `log` backend may already be installed by the host
        if log::set_logger(logger).is_ok() {
            log::set_max_level(logger.level);
        }
        Ok(())
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for KiteLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        if self.config.console_enabled {
            println!(
                "{}",
                format_line(self.config.json_format_console, record.level(), record.target(), &message)
            );
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let line = format_line(true, record.level(), record.target(), &message);
                let _ = writeln!(file, "{line}");
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}
