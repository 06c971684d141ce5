// ── Range strings ──
//
// TR-196 radio parameters are lists of strings where each entry is a
// single value ("5"), an inclusive range ("0..837"), or a preferred value
// with the range the SON function may move it in ("12(0..63)").

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::display_parameter_value;

/// One entry of a range-capable list parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RangeValue {
    Value(i64),
    Range { lower: i64, upper: i64 },
    Preferred { value: i64, lower: i64, upper: i64 },
}

impl RangeValue {
    pub const fn range(lower: i64, upper: i64) -> Self {
        Self::Range { lower, upper }
    }

    pub const fn preferred(value: i64, lower: i64, upper: i64) -> Self {
        Self::Preferred {
            value,
            lower,
            upper,
        }
    }

    pub fn lower(&self) -> i64 {
        match *self {
            Self::Value(v) => v,
            Self::Range { lower, .. } | Self::Preferred { lower, .. } => lower,
        }
    }

    pub fn upper(&self) -> i64 {
        match *self {
            Self::Value(v) => v,
            Self::Range { upper, .. } | Self::Preferred { upper, .. } => upper,
        }
    }

    /// The value a device should pick when it has no better choice.
    pub fn preferred_value(&self) -> Option<i64> {
        match *self {
            Self::Value(v) | Self::Preferred { value: v, .. } => Some(v),
            Self::Range { .. } => None,
        }
    }

    pub fn contains(&self, v: i64) -> bool {
        (self.lower()..=self.upper()).contains(&v)
    }
}

impl From<i64> for RangeValue {
    fn from(v: i64) -> Self {
        Self::Value(v)
    }
}

impl From<RangeInclusive<i64>> for RangeValue {
    fn from(r: RangeInclusive<i64>) -> Self {
        Self::range(*r.start(), *r.end())
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Range { lower, upper } => write!(f, "{lower}..{upper}"),
            Self::Preferred {
                value,
                lower,
                upper,
            } => write!(f, "{value}({lower}..{upper})"),
        }
    }
}

fn parse_int(raw: &str, whole: &str) -> Result<i64, ModelError> {
    raw.trim().parse().map_err(|_| ModelError::InvalidRange {
        value: whole.to_owned(),
        reason: format!("'{}' is not an integer", raw.trim()),
    })
}

fn parse_bounds(raw: &str, whole: &str) -> Result<(i64, i64), ModelError> {
    let Some((lo, hi)) = raw.split_once("..") else {
        return Err(ModelError::InvalidRange {
            value: whole.to_owned(),
            reason: "expected 'lower..upper'".into(),
        });
    };
    let lower = parse_int(lo, whole)?;
    let upper = parse_int(hi, whole)?;
    if lower > upper {
        return Err(ModelError::InvalidRange {
            value: whole.to_owned(),
            reason: format!("lower bound {lower} exceeds upper bound {upper}"),
        });
    }
    Ok((lower, upper))
}

impl FromStr for RangeValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((value, rest)) = trimmed.split_once('(') {
            let Some(bounds) = rest.strip_suffix(')') else {
                return Err(ModelError::InvalidRange {
                    value: s.to_owned(),
                    reason: "missing closing ')'".into(),
                });
            };
            let value = parse_int(value, s)?;
            let (lower, upper) = parse_bounds(bounds, s)?;
            return Ok(Self::preferred(value, lower, upper));
        }
        if trimmed.contains("..") {
            let (lower, upper) = parse_bounds(trimmed, s)?;
            return Ok(Self::range(lower, upper));
        }
        parse_int(trimmed, s).map(Self::Value)
    }
}

impl TryFrom<String> for RangeValue {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RangeValue> for String {
    fn from(v: RangeValue) -> Self {
        v.to_string()
    }
}

display_parameter_value!(RangeValue);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_value() {
        assert_eq!("22".parse::<RangeValue>().unwrap(), RangeValue::Value(22));
    }

    #[test]
    fn parses_negative_range() {
        let v: RangeValue = "-10..5".parse().unwrap();
        assert_eq!(v, RangeValue::range(-10, 5));
        assert!(v.contains(0));
        assert!(!v.contains(6));
    }

    #[test]
    fn parses_preferred_with_bounds() {
        let v: RangeValue = "12(0..63)".parse().unwrap();
        assert_eq!(v.preferred_value(), Some(12));
        assert_eq!(v.lower(), 0);
        assert_eq!(v.upper(), 63);
        assert_eq!(v.to_string(), "12(0..63)");
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = "9..3".parse::<RangeValue>().unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<RangeValue>().is_err());
        assert!("4(1..8".parse::<RangeValue>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let list = vec![RangeValue::Value(3), RangeValue::range(0, 837)];
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["3","0..837"]"#);
        let back: Vec<RangeValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
