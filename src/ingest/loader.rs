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

//! # Dataset Loader
//!
//! Loading is a two-state transition:
//!
//! ```text
//! Attempting(primary) --ok--> Loaded(primary)
//!          |
//!        error
//!          v
//! Attempting(synthetic) ----> Loaded(synthetic)
//! ```
//!
//! The synthetic branch cannot fail, so [`KiteDatasetLoader::load`] always
//! returns a non-empty dataset. Source errors are logged and kept in the
//! [`KiteLoadReport`], never returned.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::enrich::synthesis::{KiteSynthesisConfig, KiteSyntheticGenerator};
use crate::errors::KiteError;
use crate::ingest::reader::{KiteCsvReader, KiteReaderConfig};
use crate::record::{KiteDataset, KiteDatasetOrigin};

/// Default location of the primary source.
pub const KITE_DEFAULT_PRIMARY_PATH: &str = "Tweets.csv";

/// Loader configuration: where the primary source lives and how to read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiteLoaderConfig {
    pub primary_path: PathBuf,
    #[serde(flatten)]
    pub reader: KiteReaderConfig,
}

impl Default for KiteLoaderConfig {
    fn default() -> Self {
        Self {
            primary_path: PathBuf::from(KITE_DEFAULT_PRIMARY_PATH),
            reader: KiteReaderConfig::default(),
        }
    }
}

/// A step of the load state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "origin", rename_all = "snake_case")]
pub enum KiteLoadState {
    Attempting(KiteDatasetOrigin),
    Loaded(KiteDatasetOrigin),
}

/// What happened during a load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KiteLoadReport {
    pub dataset: KiteDataset,
    /// Every state visited, in order, ending with `Loaded`.
    pub transitions: Vec<KiteLoadState>,
    /// The source error that triggered the synthetic fallback.
    pub fallback_cause: Option<KiteError>,
}

impl KiteLoadReport {
    pub fn origin(&self) -> KiteDatasetOrigin {
        self.dataset.origin()
    }
}

#[derive(Clone, Debug)]
pub struct KiteDatasetLoader {
    reader: KiteCsvReader,
    generator: KiteSyntheticGenerator,
    primary_path: PathBuf,
}

impl KiteDatasetLoader {
    pub fn new(config: KiteLoaderConfig, synthesis: KiteSynthesisConfig) -> Self {
        Self {
            reader: KiteCsvReader::new().with_config(config.reader),
            generator: KiteSyntheticGenerator::new(synthesis),
            primary_path: config.primary_path,
        }
    }

    /// Loads the configured primary source, falling back to synthetic data.
    pub fn load_configured(&self) -> KiteDataset {
        self.load(&self.primary_path)
    }

    /// Loads `primary`, falling back to synthetic data on any source error.
    pub fn load(&self, primary: impl AsRef<Path>) -> KiteDataset {
        self.load_with_report(primary).dataset
    }

    pub fn load_with_report(&self, primary: impl AsRef<Path>) -> KiteLoadReport {
        let primary = primary.as_ref();
        let mut transitions = vec![KiteLoadState::Attempting(KiteDatasetOrigin::Primary)];

        let cause = match self.reader.read_path(primary) {
            Ok(records) => {
                transitions.push(KiteLoadState::Loaded(KiteDatasetOrigin::Primary));
                log::info!(
                    "loaded {} records from primary source {}",
                    records.len(),
                    primary.display()
                );
                return KiteLoadReport {
                    dataset: KiteDataset::new(records, KiteDatasetOrigin::Primary),
                    transitions,
                    fallback_cause: None,
                };
            }
            Err(err) if err.is_source_error() => err,
            Err(err) => KiteError::source_malformed(primary.display().to_string(), err.to_string()),
        };

        log::warn!(
            "primary source {} not usable ({}), using generated sample data",
            primary.display(),
            cause
        );
        transitions.push(KiteLoadState::Attempting(KiteDatasetOrigin::Synthetic));
        let dataset = self.generator.generate_default();
        transitions.push(KiteLoadState::Loaded(KiteDatasetOrigin::Synthetic));
        log::info!("loaded {} synthetic records", dataset.len());

        KiteLoadReport {
            dataset,
            transitions,
            fallback_cause: Some(cause),
        }
    }
}

impl Default for KiteDatasetLoader {
    fn default() -> Self {
        Self::new(KiteLoaderConfig::default(), KiteSynthesisConfig::default())
    }
}
