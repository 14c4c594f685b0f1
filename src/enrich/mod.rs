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

//! # Data Enrichment Module
//!
//! This module produces data when the primary source cannot.
//!
//! ## Module Components
//!
//! - **Synthesis** ([synthesis.rs](synthesis/index.html)): Generate a synthetic airline
//!   post dataset with the same structure as the primary source
//!
//! ## Usage Patterns
//!
//! ```rust
//! use kite::enrich::{KiteSyntheticGenerator, KiteSynthesisConfig};
//!
//! let generator = KiteSyntheticGenerator::new(KiteSynthesisConfig::default().with_seed(42));
//! let dataset = generator.generate(100);
//! ```

pub mod synthesis;

pub use synthesis::{
    KiteSentimentWeights, KiteSynthesisConfig, KiteSyntheticGenerator,
    KITE_DEFAULT_SYNTHETIC_SIZE, KITE_SYNTHETIC_CATEGORIES, KITE_SYNTHETIC_REASONS,
    KITE_SYNTHETIC_TEXTS,
};
