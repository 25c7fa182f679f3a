// src/core/sanitizer.rs
//! Final gate before a response leaves the process: no NaN, no infinities,
//! no provider "missing" markers.

use crate::types::{JobRecord, ScrapeResponse, Value};

pub fn sanitize(value: Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(map.into_iter().map(|(k, v)| (k, sanitize(v))).collect()),
        Value::List(items) => Value::List(items.into_iter().map(sanitize).collect()),
        Value::Missing => Value::Null,
        Value::Float(f) if !f.is_finite() => Value::Null,
        other => other,
    }
}

/// In-place sanitization for containers of [`Value`]s.
pub trait Sanitize {
    fn sanitize(&mut self);
}

impl Sanitize for Value {
    fn sanitize(&mut self) {
        *self = sanitize(std::mem::take(self));
    }
}

impl Sanitize for JobRecord {
    fn sanitize(&mut self) {
        self.extra.values_mut().for_each(|value| value.sanitize());
    }
}

impl Sanitize for ScrapeResponse {
    fn sanitize(&mut self) {
        self.jobs_mut().iter_mut().for_each(|job| job.sanitize());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn nested() -> Value {
        let mut inner = BTreeMap::new();
        inner.insert("min".to_string(), Value::Float(f64::NAN));
        inner.insert("max".to_string(), Value::Float(f64::INFINITY));
        inner.insert("currency".to_string(), Value::from("USD"));

        let mut outer = BTreeMap::new();
        outer.insert("salary".to_string(), Value::Map(inner));
        outer.insert(
            "history".to_string(),
            Value::List(vec![Value::Float(-f64::INFINITY), Value::Missing, Value::Float(1.5)]),
        );
        outer.insert("remote".to_string(), Value::Bool(true));
        Value::Map(outer)
    }

    fn contains_non_finite(value: &Value) -> bool {
        match value {
            Value::Float(f) => !f.is_finite(),
            Value::Missing => true,
            Value::List(items) => items.iter().any(contains_non_finite),
            Value::Map(map) => map.values().any(contains_non_finite),
            _ => false,
        }
    }

    #[test]
    fn test_strips_non_finite_recursively() {
        let clean = sanitize(nested());
        assert!(!contains_non_finite(&clean));

        let Value::Map(map) = &clean else {
            panic!("expected map");
        };
        assert_eq!(
            map["history"],
            Value::List(vec![Value::Null, Value::Null, Value::Float(1.5)])
        );
        assert_eq!(map["remote"], Value::Bool(true));
        let Value::Map(salary) = &map["salary"] else {
            panic!("expected nested map");
        };
        assert_eq!(salary["min"], Value::Null);
        assert_eq!(salary["currency"], Value::from("USD"));
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize(nested());
        let twice = sanitize(once.clone());
        assert_eq!(once, twice);

        for scalar in [Value::Int(3), Value::from("x"), Value::Null, Value::Float(0.0)] {
            assert_eq!(sanitize(sanitize(scalar.clone())), sanitize(scalar));
        }
    }

    #[test]
    fn test_job_record_extra_is_sanitized() {
        let mut job = JobRecord::default();
        job.extra.insert("min_amount".to_string(), Value::Float(f64::NAN));
        job.extra.insert("company_url".to_string(), Value::Missing);
        job.sanitize();

        assert_eq!(job.extra["min_amount"], Value::Null);
        assert_eq!(job.extra["company_url"], Value::Null);
        let json = serde_json::to_string(&job).unwrap();
        assert!(!json.contains("NaN"));
    }
}
