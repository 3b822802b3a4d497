//! Filter fragment encoders.
//!
//! Pure functions mapping a single control's value to one `key=value` fragment
//! of the filter query string, or to nothing when the control contributes no
//! filter. Three encodings exist:
//!
//! - the generic rule: `{name}__{query_key}={value}`, repeated per element for
//!   multi-valued controls;
//! - the rate-range rule for the `tarif` slider: a `gte`/`lte` pair, omitted
//!   entirely for a degenerate range (`min == max` imposes no filter —
//!   documented policy, not a bug);
//! - the age-bucket rule: a bucket literal becomes an ISO-date comparison on
//!   the `birthday` field, cutoff derived from today's date.
//!
//! Values are percent-encoded before emission. Empty values never produce a
//! fragment, whatever the control type.

use chrono::{Months, NaiveDate};

/// Field queried by the age-bucket rule.
const BIRTHDAY_FIELD: &str = "birthday";

/// Field queried by the rate-range rule.
const RANGE_FIELD: &str = "tarif";

/// Percent-encodes everything outside the RFC 3986 unreserved set.
///
/// The backend splits fragments on `&` and `=`, so raw user input must not be
/// able to smuggle either; escaping here keeps the builder's join logic safe
/// for arbitrary scalar values.
#[must_use]
pub fn escape(raw: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len() + 8);
    for &byte in raw.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(byte >> 4) as usize]));
                out.push(char::from(HEX[(byte & 0x0F) as usize]));
            }
        }
    }
    out
}

/// Encodes a scalar control value with the generic rule.
///
/// Produces `"{name}__{query_key}={value}"` for a non-empty value, `None`
/// otherwise.
#[must_use]
pub fn encode_scalar(name: &str, query_key: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(format!("{name}__{query_key}={}", escape(value)))
}

/// Encodes a multi-valued control.
///
/// Each element goes through the scalar rule independently and the surviving
/// fragments are joined with `&`, so a multi-select yields one fragment per
/// selected value, all sharing the same key pattern. `None` when nothing
/// survives.
#[must_use]
pub fn encode_multi(name: &str, query_key: &str, values: &[String]) -> Option<String> {
    let fragments: Vec<String> = values
        .iter()
        .filter_map(|value| encode_scalar(name, query_key, value))
        .collect();

    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join("&"))
    }
}

/// Encodes the rate-range slider.
///
/// Emits `"tarif__gte={min}&tarif__lte={max}"` when the range is real; a
/// degenerate range (`min == max`) imposes no filter and emits nothing.
#[must_use]
pub fn encode_range(min: f64, max: f64) -> Option<String> {
    if min == max {
        return None;
    }
    Some(format!(
        "{RANGE_FIELD}__gte={}&{RANGE_FIELD}__lte={}",
        format_amount(min),
        format_amount(max)
    ))
}

/// Encodes an age bucket as a birthday cutoff.
///
/// The bucket literal picks a comparison verb and a number of years; the
/// cutoff is `today` minus that many years, formatted `YYYY-MM-DD`:
///
/// | bucket | fragment                        |
/// |--------|---------------------------------|
/// | `16-`  | `birthday__gte=<today - 16y>`   |
/// | `18-`  | `birthday__gte=<today - 18y>`   |
/// | `18+`  | `birthday__lte=<today - 18y>`   |
///
/// Unknown buckets emit nothing. `today` is a parameter so the derivation is
/// deterministic under test; the builder supplies the current local date.
/// A Feb-29 `today` clamps to Feb 28 in a non-leap target year.
#[must_use]
pub fn encode_age(bucket: &str, today: NaiveDate) -> Option<String> {
    let (verb, years) = match bucket {
        "16-" => ("gte", 16),
        "18-" => ("gte", 18),
        "18+" => ("lte", 18),
        _ => return None,
    };

    let cutoff = today.checked_sub_months(Months::new(12 * years))?;
    Some(format!(
        "{BIRTHDAY_FIELD}__{verb}={}",
        cutoff.format("%Y-%m-%d")
    ))
}

/// Formats a slider amount, printing integral values without a fractional
/// part (`10`, not `10.0`).
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
