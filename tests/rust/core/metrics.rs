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

//! # Kite Metrics Tests
//!
//! ```bash
//! cargo test --test metrics
//! ```

use kite::{
    KiteCategoryFilter, KiteDataset, KiteDatasetOrigin, KiteError, KiteFrequencyAnalyzer,
    KiteMetricsAggregator, KiteRecord, KiteSentiment, KiteSynthesisConfig,
    KiteSyntheticGenerator, KiteTokenizer,
};
use proptest::prelude::*;

/// Two posts of one airline, one complaint and one compliment.
#[test]
fn test_end_to_end_example() {
    let dataset = KiteDataset::new(
        vec![
            KiteRecord::new("1", "A", KiteSentiment::Negative, "My flight was late and late again")
                .with_reason("Late Flight"),
            KiteRecord::new("2", "A", KiteSentiment::Positive, "Great service"),
        ],
        KiteDatasetOrigin::Primary,
    );
    let filter = KiteCategoryFilter::parse("A");

    let snapshot = KiteMetricsAggregator::default()
        .aggregate(&dataset, &filter)
        .unwrap();
    assert_eq!(snapshot.total, 2);
    assert_eq!(snapshot.percentage(KiteSentiment::Negative), 50.0);
    assert_eq!(snapshot.percentage(KiteSentiment::Positive), 50.0);
    assert_eq!(snapshot.percentage(KiteSentiment::Neutral), 0.0);
    assert_eq!(snapshot.reasons.len(), 1);
    assert_eq!(snapshot.reason_count("Late Flight"), 1);

    let keywords = KiteFrequencyAnalyzer::new(KiteTokenizer::default())
        .top_keywords(dataset.negatives(&filter), 20);
    let pairs: Vec<_> = keywords.iter().map(|k| (k.token.as_str(), k.count)).collect();
    assert_eq!(pairs, vec![("late", 2)]);
}

#[test]
fn test_all_filter_spans_categories() {
    let dataset = KiteSyntheticGenerator::new(KiteSynthesisConfig::default().with_seed(3))
        .generate(60);
    let snapshot = KiteMetricsAggregator::default()
        .aggregate(&dataset, &KiteCategoryFilter::All)
        .unwrap();
    assert_eq!(snapshot.total, 60);
    assert_eq!(snapshot.reason_total(), snapshot.negative_count());
    assert_eq!(snapshot.negatives_without_reason, 0);
}

#[test]
fn test_unknown_category_is_empty_result() {
    let dataset = KiteSyntheticGenerator::new(KiteSynthesisConfig::default().with_seed(3))
        .generate(10);
    let result = KiteMetricsAggregator::default()
        .aggregate(&dataset, &KiteCategoryFilter::parse("Air Nowhere"));
    assert_eq!(result.unwrap_err(), KiteError::empty_result("Air Nowhere"));
}

/// Negatives with a blank reason are counted apart from the distribution.
#[test]
fn test_blank_reason_counted_separately() {
    let dataset = KiteDataset::new(
        vec![
            KiteRecord::new("1", "A", KiteSentiment::Negative, "x").with_reason("  "),
            KiteRecord::new("2", "A", KiteSentiment::Negative, "y").with_reason("Lost Luggage"),
        ],
        KiteDatasetOrigin::Primary,
    );
    let snapshot = KiteMetricsAggregator::default()
        .aggregate(&dataset, &KiteCategoryFilter::All)
        .unwrap();
    assert_eq!(snapshot.reason_total(), 1);
    assert_eq!(snapshot.negatives_without_reason, 1);
    assert_eq!(
        snapshot.reason_total() + snapshot.negatives_without_reason,
        snapshot.negative_count()
    );
}

fn record_strategy() -> impl Strategy<Value = KiteRecord> {
    (0usize..3, 0usize..3, prop::option::of(0usize..4)).prop_map(|(cat, sent, reason)| {
        let sentiment = KiteSentiment::ALL[sent];
        let record = KiteRecord::new("p", ["A", "B", "C"][cat], sentiment, "text");
        match (sentiment, reason) {
            (KiteSentiment::Negative, Some(r)) => {
                record.with_reason(["Late Flight", "Lost Luggage", "Bad Flight", "Other"][r])
            }
            _ => record,
        }
    })
}

proptest! {
    #[test]
    fn prop_percentages_sum_to_hundred(
        records in prop::collection::vec(record_strategy(), 1..80),
        precision in 0u32..4,
    ) {
        let dataset = KiteDataset::new(records, KiteDatasetOrigin::Primary);
        let aggregator = KiteMetricsAggregator::new(precision);
        for category in dataset.categories() {
            let filter = KiteCategoryFilter::Category(category);
            let snapshot = aggregator.aggregate(&dataset, &filter).unwrap();
            let sum: f64 = snapshot.sentiments.iter().map(|s| s.percentage).sum();
            let tolerance = 1.5 * 10_f64.powi(-(precision as i32)) + 1e-9;
            prop_assert!((sum - 100.0).abs() <= tolerance, "sum {} at precision {}", sum, precision);
            prop_assert_eq!(
                snapshot.reason_total() + snapshot.negatives_without_reason,
                snapshot.negative_count()
            );
            prop_assert_eq!(snapshot.sentiments.iter().map(|s| s.count).sum::<usize>(), snapshot.total);
        }
    }

    #[test]
    fn prop_reason_total_matches_negatives_when_all_labeled(seed in any::<u64>(), size in 1usize..120) {
        let dataset = KiteSyntheticGenerator::new(KiteSynthesisConfig::default().with_seed(seed))
            .generate(size);
        let snapshot = KiteMetricsAggregator::default()
            .aggregate(&dataset, &KiteCategoryFilter::All)
            .unwrap();
        prop_assert_eq!(snapshot.reason_total(), snapshot.negative_count());
        for pair in snapshot.reasons.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }
}
