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

//! # Kite Session Tests
//!
//! The dashboard facade over a loaded dataset.
//!
//! ```bash
//! cargo test --test session
//! ```

use kite::{
    KiteCategoryFilter, KiteConfig, KiteDatasetOrigin, KiteError, KiteLogConfig, KiteSentiment,
    KiteSession, KiteSynthesisConfig, KITE_ALL_CATEGORIES_LABEL,
};

const TWEETS: &str = "\
tweet_id,airline_sentiment,negativereason,airline,text,tweet_created
1,negative,Late Flight,United,@united my flight was late and late again,2015-02-20 09:00:00 -0800
2,negative,Lost Luggage,United,@united lost my bags. Not happy,2015-02-22 09:00:00 -0800
3,positive,,Delta,@delta great crew!,2015-02-21 09:00:00 -0800
4,neutral,,Delta,@delta is the lounge open?,2015-02-23 09:00:00 -0800
";

fn quiet() -> KiteLogConfig {
    KiteLogConfig::default().with_console(false)
}

fn open_with_csv(dir: &tempfile::TempDir) -> KiteSession {
    let path = dir.path().join("Tweets.csv");
    std::fs::write(&path, TWEETS).unwrap();
    KiteSession::open(KiteConfig::default().with_primary_path(path).with_log(quiet())).unwrap()
}

#[test]
fn test_open_primary_source() {
    let dir = tempfile::tempdir().unwrap();
    let session = open_with_csv(&dir);
    assert_eq!(session.origin(), KiteDatasetOrigin::Primary);
    assert!(session.fallback_cause().is_none());
    assert_eq!(session.dataset().len(), 4);
    assert_eq!(
        session.category_options(),
        vec![KITE_ALL_CATEGORIES_LABEL, "Delta", "United"]
    );
}

#[test]
fn test_open_missing_source_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = KiteConfig::default()
        .with_primary_path(dir.path().join("absent.csv"))
        .with_synthesis(KiteSynthesisConfig::default().with_seed(11).with_size(40))
        .with_log(quiet());
    let session = KiteSession::open(config).unwrap();
    assert_eq!(session.origin(), KiteDatasetOrigin::Synthetic);
    assert_eq!(session.dataset().len(), 40);
    assert!(matches!(
        session.fallback_cause(),
        Some(KiteError::SourceUnavailable { .. })
    ));
    assert!(session.category_options().len() > 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = KiteConfig::default()
        .with_precision(12)
        .with_log(quiet());
    assert!(matches!(
        KiteSession::open(config),
        Err(KiteError::Validation { .. })
    ));
}

#[test]
fn test_refresh_for_category() {
    let dir = tempfile::tempdir().unwrap();
    let session = open_with_csv(&dir);
    let view = session.refresh(&KiteCategoryFilter::parse("United"));

    let metrics = view.metrics.as_ref().unwrap();
    assert_eq!(metrics.total, 2);
    assert_eq!(metrics.percentage(KiteSentiment::Negative), 100.0);
    assert_eq!(metrics.reason_count("Late Flight"), 1);
    assert_eq!(metrics.reason_count("Lost Luggage"), 1);

    assert_eq!(view.keywords[0].token, "late");
    assert_eq!(view.keywords[0].count, 2);
    assert!(view.keywords.iter().any(|k| k.token == "not"));
    assert_eq!(view.word_cloud_text, "late late lost bags not happy");

    let ids: Vec<_> = view.raw.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn test_all_airlines_selection() {
    let dir = tempfile::tempdir().unwrap();
    let session = open_with_csv(&dir);
    let filter = KiteCategoryFilter::parse(KITE_ALL_CATEGORIES_LABEL);
    assert_eq!(filter, KiteCategoryFilter::All);

    let metrics = session.metrics(&filter).unwrap();
    assert_eq!(metrics.total, 4);
    assert_eq!(metrics.percentage(KiteSentiment::Negative), 50.0);
    assert_eq!(session.negative_records(&filter).len(), 2);

    let raw = session.raw_view(&filter, true);
    assert_eq!(raw.rows[0].id, "4");
    assert_eq!(raw.rows[0].cleaned_text.as_deref(), Some("is the lounge open"));
}

#[test]
fn test_refresh_without_negatives() {
    let dir = tempfile::tempdir().unwrap();
    let session = open_with_csv(&dir);
    let view = session.refresh(&KiteCategoryFilter::parse("Delta"));
    assert!(view.metrics.is_ok());
    assert!(view.keywords.is_empty());
    assert!(view.word_cloud_text.is_empty());
    assert_eq!(view.raw.len(), 2);
}
