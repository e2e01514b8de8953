//! Predicates applied to a resolved context value.
//!
//! The rule document encodes a predicate by its JSON shape:
//! a scalar tests equality, an array tests membership, and an object combines
//! `gte`, `gt`, `within_days` and `is_today` checks with AND.

use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals(Value),
    OneOf(Vec<Value>),
    Compare(Comparison),
}

/// Numeric and calendar checks. Every populated field must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub gte: Option<f64>,
    pub gt: Option<f64>,
    /// Date lies between today and today + N days, both inclusive.
    pub within_days: Option<f64>,
    /// Date is today. Set whenever the key is present, whatever its flag.
    pub is_today: bool,
}

impl Predicate {
    /// Decode a predicate from its rule-document form.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Null => Err("null can never match a resolved value".into()),
            Value::Array(items) => {
                if let Some(bad) = items.iter().find(|item| !is_scalar(item)) {
                    return Err(format!("membership lists may only hold scalars, found {bad}"));
                }
                Ok(Predicate::OneOf(items.clone()))
            }
            Value::Object(map) => {
                let mut cmp = Comparison::default();
                for (key, arg) in map {
                    match key.as_str() {
                        "gte" => cmp.gte = Some(number_arg(key, arg)?),
                        "gt" => cmp.gt = Some(number_arg(key, arg)?),
                        "within_days" => {
                            let days = number_arg(key, arg)?;
                            if days < 0.0 {
                                return Err(format!(
                                    "`within_days` expects a non-negative number, found {arg}"
                                ));
                            }
                            cmp.within_days = Some(days);
                        }
                        "is_today" => {
                            if !arg.is_boolean() {
                                return Err(format!("`is_today` expects a boolean, found {arg}"));
                            }
                            cmp.is_today = true;
                        }
                        other => return Err(format!("unknown comparison `{other}`")),
                    }
                }
                if cmp == Comparison::default() {
                    return Err(
                        "comparison object needs one of `gte`, `gt`, `within_days`, `is_today`"
                            .into(),
                    );
                }
                Ok(Predicate::Compare(cmp))
            }
            scalar => Ok(Predicate::Equals(scalar.clone())),
        }
    }

    /// Test a resolved context value against this predicate.
    ///
    /// Type mismatches (a string under `gte`, an unparseable date under
    /// `within_days`) do not match; they are never errors.
    pub fn matches(&self, actual: &Value, today: NaiveDate) -> bool {
        match self {
            Predicate::Equals(expected) => values_equal(actual, expected),
            Predicate::OneOf(options) => options.iter().any(|option| values_equal(actual, option)),
            Predicate::Compare(cmp) => cmp.matches(actual, today),
        }
    }
}

impl Comparison {
    fn matches(&self, actual: &Value, today: NaiveDate) -> bool {
        if self.gte.is_some() || self.gt.is_some() {
            let Some(n) = actual.as_f64() else {
                return false;
            };
            if self.gte.is_some_and(|min| n < min) || self.gt.is_some_and(|min| n <= min) {
                return false;
            }
        }

        if self.within_days.is_some() || self.is_today {
            let Some(date) = parse_date(actual) else {
                return false;
            };
            let offset = (date - today).num_days();
            if self
                .within_days
                .is_some_and(|days| offset < 0 || offset as f64 > days)
            {
                return false;
            }
            if self.is_today && offset != 0 {
                return false;
            }
        }

        true
    }
}

/// Parse a `YYYY-MM-DD` calendar date, ignoring a trailing time component
/// (`2024-05-01T10:30:00Z`, `2024-05-01 10:30`).
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    let day = match text.len() {
        10 => text,
        n if n > 10 && matches!(text.as_bytes()[10], b'T' | b' ') => &text[..10],
        _ => return None,
    };
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn number_arg(key: &str, arg: &Value) -> Result<f64, String> {
    arg.as_f64()
        .ok_or_else(|| format!("`{key}` expects a number, found {arg}"))
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Equality where numbers compare by value, so `5` equals `5.0`.
///
/// Two integers compare exactly; `f64` is only used when one side is a float.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(lhs), Value::Number(rhs)) => {
            if lhs.is_f64() || rhs.is_f64() {
                return match (lhs.as_f64(), rhs.as_f64()) {
                    (Some(l), Some(r)) => l == r,
                    _ => false,
                };
            }
            match (lhs.as_i64(), rhs.as_i64()) {
                (Some(l), Some(r)) => l == r,
                _ => lhs.as_u64().is_some() && lhs.as_u64() == rhs.as_u64(),
            }
        }
        _ => left == right,
    }
}
