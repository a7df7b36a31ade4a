// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Scalar value generators

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use super::random::RandomSource;
use super::value::GeneratedValue;

const LOREM_WORDS: [&str; 48] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
];

const TEXT_WORD_COUNT: usize = 3;
const MAX_INT: i64 = 99_999;
const MAX_PAST_MILLIS: i64 = 365 * 24 * 60 * 60 * 1000;

/// Generation strategy for a scalar type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Text,
    Id,
    Int,
    Float,
    Boolean,
    Date,
}

impl ScalarKind {
    /// Kind for a known scalar name
    pub fn known(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ScalarKind::Text),
            "ID" => Some(ScalarKind::Id),
            "Int" => Some(ScalarKind::Int),
            "Float" => Some(ScalarKind::Float),
            "Boolean" => Some(ScalarKind::Boolean),
            "Date" | "DateTime" => Some(ScalarKind::Date),
            _ => None,
        }
    }

    /// Kind for any scalar name; unknown scalars fall back to text
    pub fn classify(name: &str) -> Self {
        Self::known(name).unwrap_or_else(|| {
            log::debug!("Unsupported scalar {}, generating text", name);
            ScalarKind::Text
        })
    }

    /// Generate one value of this kind
    ///
    /// Dates lie within the year before `reference_time`.
    pub fn generate(self, source: &mut RandomSource, reference_time: DateTime<Utc>) -> GeneratedValue {
        match self {
            ScalarKind::Text => GeneratedValue::String(lorem_words(source, TEXT_WORD_COUNT)),
            ScalarKind::Id => {
                let id = uuid::Builder::from_random_bytes(source.bytes16()).into_uuid();
                GeneratedValue::String(id.to_string())
            }
            ScalarKind::Int => GeneratedValue::Int(source.i64_in(0..=MAX_INT)),
            ScalarKind::Float => GeneratedValue::Float(source.f64()),
            ScalarKind::Boolean => GeneratedValue::Boolean(source.bool()),
            ScalarKind::Date => {
                let back = Duration::milliseconds(source.i64_in(1..=MAX_PAST_MILLIS));
                let instant = reference_time - back;
                GeneratedValue::String(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

fn lorem_words(source: &mut RandomSource, count: usize) -> String {
    (0..count)
        .filter_map(|_| source.pick(&LOREM_WORDS).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_classify_known_and_unknown() {
        assert_eq!(ScalarKind::classify("String"), ScalarKind::Text);
        assert_eq!(ScalarKind::classify("ID"), ScalarKind::Id);
        assert_eq!(ScalarKind::classify("DateTime"), ScalarKind::Date);
        assert_eq!(ScalarKind::classify("Url"), ScalarKind::Text);
        assert_eq!(ScalarKind::known("Url"), None);
    }

    #[test]
    fn test_text_has_three_words() {
        let mut source = RandomSource::with_seed(11);
        let value = ScalarKind::Text.generate(&mut source, reference());
        let text = value.as_str().unwrap();
        assert_eq!(text.split(' ').count(), 3);
    }

    #[test]
    fn test_date_is_in_the_past_year() {
        let mut source = RandomSource::with_seed(5);
        for _ in 0..100 {
            let value = ScalarKind::Date.generate(&mut source, reference());
            let parsed = DateTime::parse_from_rfc3339(value.as_str().unwrap()).unwrap();
            let parsed = parsed.with_timezone(&Utc);
            assert!(parsed < reference());
            assert!(parsed >= reference() - Duration::days(365));
        }
    }

    #[test]
    fn test_id_is_uuid() {
        let mut source = RandomSource::with_seed(9);
        let value = ScalarKind::Id.generate(&mut source, reference());
        assert!(uuid::Uuid::parse_str(value.as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_numbers_in_range() {
        let mut source = RandomSource::with_seed(2);
        for _ in 0..200 {
            match ScalarKind::Int.generate(&mut source, reference()) {
                GeneratedValue::Int(i) => assert!((0..=MAX_INT).contains(&i)),
                other => panic!("unexpected {:?}", other),
            }
            match ScalarKind::Float.generate(&mut source, reference()) {
                GeneratedValue::Float(f) => assert!((0.0..1.0).contains(&f)),
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
