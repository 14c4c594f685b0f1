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

//! # Kite Ingest Tests
//!
//! Primary CSV loading and the synthetic fallback.
//!
//! ```bash
//! cargo test --test loader
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use kite::{
    KiteDatasetLoader, KiteDatasetOrigin, KiteError, KiteLoadState, KiteLoaderConfig,
    KiteReaderConfig, KiteSentiment, KiteSynthesisConfig,
};
use tempfile::TempDir;

const TWEETS: &str = "\
tweet_id,airline_sentiment,negativereason,airline,text,tweet_created
570306133677760513,neutral,,Virgin America,@VirginAmerica What @dhepburn said.,2015-02-24 11:35:52 -0800
570301130888122368,positive,,Virgin America,\"@VirginAmerica plus you've added commercials, tacky.\",2015-02-24 11:15:59 -0800
570301083672813571,negative,Late Flight,United,@united late again,2015-02-24 11:15:48 -0800
570301031407624196,negative,,United,@united why,
";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn loader() -> KiteDatasetLoader {
    KiteDatasetLoader::new(
        KiteLoaderConfig::default(),
        KiteSynthesisConfig::default().with_seed(7).with_size(25),
    )
}

fn assert_synthetic_fallback(loader: &KiteDatasetLoader, path: &Path) -> KiteError {
    let report = loader.load_with_report(path);
    assert_eq!(report.origin(), KiteDatasetOrigin::Synthetic);
    assert_eq!(report.dataset.len(), 25);
    assert_eq!(
        report.transitions,
        vec![
            KiteLoadState::Attempting(KiteDatasetOrigin::Primary),
            KiteLoadState::Attempting(KiteDatasetOrigin::Synthetic),
            KiteLoadState::Loaded(KiteDatasetOrigin::Synthetic),
        ]
    );
    report.fallback_cause.expect("fallback records its cause")
}

#[test]
fn test_valid_csv_loads_as_primary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "Tweets.csv", TWEETS);

    let report = loader().load_with_report(&path);
    assert_eq!(report.origin(), KiteDatasetOrigin::Primary);
    assert!(report.fallback_cause.is_none());
    assert_eq!(
        report.transitions,
        vec![
            KiteLoadState::Attempting(KiteDatasetOrigin::Primary),
            KiteLoadState::Loaded(KiteDatasetOrigin::Primary),
        ]
    );

    let records = report.dataset.records();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].id, "570306133677760513");
    assert_eq!(records[0].reason, None);
    assert_eq!(records[1].text, "@VirginAmerica plus you've added commercials, tacky.");
    assert_eq!(records[2].sentiment, KiteSentiment::Negative);
    assert_eq!(records[2].reason.as_deref(), Some("Late Flight"));
    assert!(records[2].created_at.is_some());
    assert!(records[3].created_at.is_none());
    assert_eq!(report.dataset.categories(), vec!["United", "Virgin America"]);
}

#[test]
fn test_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let cause = assert_synthetic_fallback(&loader(), &dir.path().join("absent.csv"));
    assert!(matches!(cause, KiteError::SourceUnavailable { .. }));
}

#[test]
fn test_missing_column_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "bad.csv", "id,mood,words\n1,happy,hello\n");
    let cause = assert_synthetic_fallback(&loader(), &path);
    assert!(matches!(cause, KiteError::SourceMalformed { .. }));
}

#[test]
fn test_empty_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", "");
    let cause = assert_synthetic_fallback(&loader(), &path);
    assert!(matches!(cause, KiteError::SourceMalformed { .. }));
}

#[test]
fn test_header_only_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "header.csv",
        "tweet_id,airline_sentiment,negativereason,airline,text,tweet_created\n",
    );
    let cause = assert_synthetic_fallback(&loader(), &path);
    assert!(matches!(cause, KiteError::SourceMalformed { .. }));
}

/// A few bad rows are skipped; past the threshold the file is rejected.
#[test]
fn test_bad_rows_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!("{TWEETS}9,furious,,United,@united argh,\n");
    let path = write_csv(&dir, "mixed.csv", &contents);

    let lenient = loader().load_with_report(&path);
    assert_eq!(lenient.origin(), KiteDatasetOrigin::Primary);
    assert_eq!(lenient.dataset.len(), 4);

    let strict = KiteDatasetLoader::new(
        KiteLoaderConfig {
            primary_path: path.clone(),
            reader: KiteReaderConfig {
                max_row_errors: 0,
                ..KiteReaderConfig::default()
            },
        },
        KiteSynthesisConfig::default().with_seed(7).with_size(25),
    );
    let cause = assert_synthetic_fallback(&strict, &path);
    assert!(matches!(cause, KiteError::SourceMalformed { .. }));
}

#[test]
fn test_load_configured_uses_primary_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "Tweets.csv", TWEETS);
    let loader = KiteDatasetLoader::new(
        KiteLoaderConfig {
            primary_path: path,
            ..KiteLoaderConfig::default()
        },
        KiteSynthesisConfig::default(),
    );
    assert_eq!(loader.load_configured().origin(), KiteDatasetOrigin::Primary);
}

/// Seeded fallbacks are reproducible and keep reasons on negatives only.
#[test]
fn test_synthetic_fallback_is_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    let first = loader().load(&missing);
    let second = loader().load(&missing);
    assert_eq!(first, second);
    for record in first.records() {
        assert_eq!(record.reason.is_some(), record.sentiment == KiteSentiment::Negative);
        assert!(record.id.starts_with("synth_"));
    }
}
