//! Filter query assembly.
//!
//! This module turns the full set of active filter controls into one query
//! string. Control state is ephemeral: the host reads it fresh from the UI on
//! every search trigger and hands it over as a sequence of [`ControlState`]
//! values; nothing here is persisted.
//!
//! Controls are visited in declaration order and dispatched to the matching
//! encoding rule; the sort directive is appended unconditionally, so the
//! result is never empty — with no active filter it is just
//! `order_by=<sort>`.

use chrono::{Local, NaiveDate};

use crate::query::encode::{encode_age, encode_multi, encode_range, encode_scalar, escape};

/// Query key of the sort directive.
pub const SORT_KEY: &str = "order_by";

/// Name of the age-bucket control.
const AGE_CONTROL: &str = "age";

/// Name of the rate-range control.
const RANGE_CONTROL: &str = "tarif";

/// Current value of one filter control.
///
/// `Empty` covers both absent and cleared controls; it never produces a
/// fragment whatever the control type.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    /// A single value (text input, select, checked checkbox).
    Scalar(String),

    /// A multi-select's selected values.
    Multi(Vec<String>),

    /// A slider's `[min, max]` pair.
    Range(f64, f64),

    /// No value set.
    Empty,
}

impl ControlValue {
    /// Returns `true` if the value contributes no filter regardless of rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Scalar(value) => value.is_empty(),
            Self::Multi(values) => values.iter().all(String::is_empty),
            Self::Range(..) => false,
        }
    }
}

/// Snapshot of one interactive filter control.
///
/// `query_key` is the API comparison verb the control declares (`iexact`,
/// `icontains`, `in`, …); controls without one only match the special-cased
/// rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    /// Control name, which is also the queried field name.
    pub name: String,

    /// Declared API verb for the generic rule, if any.
    pub query_key: Option<String>,

    /// Current value, read fresh from the UI.
    pub value: ControlValue,
}

impl ControlState {
    /// Convenience constructor for a scalar control.
    #[must_use]
    pub fn scalar(name: &str, query_key: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            query_key: Some(query_key.to_string()),
            value: ControlValue::Scalar(value.to_string()),
        }
    }
}

/// Builds the filter query string for the given controls and sort value.
///
/// Uses the current local date for age-bucket derivation; see
/// [`build_query_at`] for the deterministic variant.
#[must_use]
pub fn build_query(controls: &[ControlState], sort: &str) -> String {
    build_query_at(controls, sort, Local::now().date_naive())
}

/// Builds the filter query string against an explicit "today".
///
/// Controls are visited in declaration order. Each control is dispatched to
/// the first matching rule — the age rule for the `age` control, the generic
/// rule when a `query_key` is declared, the range rule for the `tarif`
/// control — and skipped when none matches or the value is empty. The sort
/// fragment is appended last, unconditionally; fragment order among filters is
/// not load-bearing, only presence is.
///
/// Building the same control sequence twice yields an identical string.
#[must_use]
pub fn build_query_at(controls: &[ControlState], sort: &str, today: NaiveDate) -> String {
    let mut fragments: Vec<String> = controls
        .iter()
        .filter_map(|control| encode_control(control, today))
        .collect();

    fragments.push(format!("{SORT_KEY}={}", escape(sort)));

    let query = fragments.join("&");
    tracing::debug!(
        control_count = controls.len(),
        fragment_count = fragments.len(),
        query_len = query.len(),
        "query built"
    );
    query
}

/// Dispatches one control to its encoding rule.
fn encode_control(control: &ControlState, today: NaiveDate) -> Option<String> {
    if control.value.is_empty() {
        return None;
    }

    if control.name == AGE_CONTROL {
        return match &control.value {
            ControlValue::Scalar(bucket) => encode_age(bucket, today),
            _ => None,
        };
    }

    if let Some(query_key) = &control.query_key {
        return match &control.value {
            ControlValue::Scalar(value) => encode_scalar(&control.name, query_key, value),
            ControlValue::Multi(values) => encode_multi(&control.name, query_key, values),
            _ => None,
        };
    }

    if control.name == RANGE_CONTROL {
        if let ControlValue::Range(min, max) = control.value {
            return encode_range(min, max);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_no_filters_is_sort_only() {
        assert_eq!(build_query_at(&[], "name", today()), "order_by=name");
    }

    #[test]
    fn test_mixed_controls() {
        let controls = vec![
            ControlState::scalar("pc", "iexact", "75011"),
            ControlState {
                name: "language".to_string(),
                query_key: Some("in".to_string()),
                value: ControlValue::Multi(vec!["en".to_string(), "de".to_string()]),
            },
            ControlState {
                name: "tarif".to_string(),
                query_key: None,
                value: ControlValue::Range(10.0, 50.0),
            },
            ControlState {
                name: "age".to_string(),
                query_key: None,
                value: ControlValue::Scalar("18+".to_string()),
            },
        ];

        assert_eq!(
            build_query_at(&controls, "-updated_at", today()),
            "pc__iexact=75011\
             &language__in=en&language__in=de\
             &tarif__gte=10&tarif__lte=50\
             &birthday__lte=2008-08-07\
             &order_by=-updated_at"
        );
    }

    #[test]
    fn test_empty_values_contribute_nothing() {
        let controls = vec![
            ControlState::scalar("pc", "iexact", ""),
            ControlState {
                name: "language".to_string(),
                query_key: Some("in".to_string()),
                value: ControlValue::Empty,
            },
            ControlState {
                name: "age".to_string(),
                query_key: None,
                value: ControlValue::Empty,
            },
        ];

        assert_eq!(
            build_query_at(&controls, "rating", today()),
            "order_by=rating"
        );
    }

    #[test]
    fn test_age_rule_wins_over_generic() {
        // An age control that also declares a query key still goes through
        // the bucket rule.
        let controls = vec![ControlState {
            name: "age".to_string(),
            query_key: Some("iexact".to_string()),
            value: ControlValue::Scalar("16-".to_string()),
        }];

        assert_eq!(
            build_query_at(&controls, "name", today()),
            "birthday__gte=2010-08-07&order_by=name"
        );
    }

    #[test]
    fn test_control_without_rule_is_skipped() {
        let controls = vec![ControlState {
            name: "distance".to_string(),
            query_key: None,
            value: ControlValue::Scalar("20".to_string()),
        }];

        assert_eq!(build_query_at(&controls, "name", today()), "order_by=name");
    }

    #[test]
    fn test_degenerate_range_is_skipped() {
        let controls = vec![ControlState {
            name: "tarif".to_string(),
            query_key: None,
            value: ControlValue::Range(25.0, 25.0),
        }];

        assert_eq!(build_query_at(&controls, "name", today()), "order_by=name");
    }

    #[test]
    fn test_build_is_deterministic() {
        let controls = vec![
            ControlState::scalar("city", "icontains", "paris"),
            ControlState {
                name: "tarif".to_string(),
                query_key: None,
                value: ControlValue::Range(8.0, 14.5),
            },
        ];

        let first = build_query_at(&controls, "rating", today());
        let second = build_query_at(&controls, "rating", today());
        assert_eq!(first, second);
    }
}
