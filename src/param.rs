//! Talk parameter names and validation of parameter values.

use std::fmt::{self, Display};

use serde::Deserialize;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// A voice-level acoustic control, shared by all casts.
#[derive(
    Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, EnumIter, EnumString, IntoStaticStr,
)]
pub enum TalkParam {
    /// Loudness.
    Volume,
    /// Speaking rate.
    Speed,
    /// Pitch.
    Tone,
    /// Pitch range, i.e. intonation.
    ToneScale,
    /// Timbre.
    Alpha,
}

impl TalkParam {
    /// Returns the canonical name, which is also the name of the engine property backing the
    /// parameter.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl Display for TalkParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a localized parameter label in an alias table.
pub fn resolve_alias(name: &str, aliases: &[(&str, TalkParam)]) -> Option<TalkParam> {
    aliases.iter().find(|(alias, _)| *alias == name).map(|&(_, param)| param)
}

/// A parameter level, represented as a value in the interval [0, 100].
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Level(u32);

impl Level {
    /// The highest level.
    pub const MAX: u32 = 100;

    /// Constructs a level if `value` lies in [0, 100].
    pub fn new(value: i64) -> Option<Self> {
        u32::try_from(value).ok().filter(|&v| v <= Self::MAX).map(Self)
    }

    /// Returns the value encapsulated by this instance.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<Level> for u32 {
    fn from(source: Level) -> Self {
        source.0
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate parameter value as supplied by a caller or a configuration file.
///
/// Strings are accepted as long as they hold an integer, so `"46"` and `46` are equivalent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// An integer.
    Int(i64),
    /// A floating-point number; only integral values are valid.
    Float(f64),
    /// Text that may hold an integer.
    Text(String),
}

impl ParamValue {
    fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            Self::Float(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(source: $ty) -> Self {
                    Self::Int(source.into())
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u8, u32);

impl From<&str> for ParamValue {
    fn from(source: &str) -> Self {
        Self::Text(source.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(source: String) -> Self {
        Self::Text(source)
    }
}

/// Returned by [`validate`] for values that are not integers in [0, 100].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("value must be an integer between 0 and 100, got {0}")]
pub struct InvalidValue(pub ParamValue);

/// Checks that `value` is an integer in [0, 100].
pub fn validate(value: &ParamValue) -> Result<Level, InvalidValue> {
    value.as_integer().and_then(Level::new).ok_or_else(|| InvalidValue(value.clone()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn accepts_exactly_zero_to_hundred() {
        for v in 0..=100 {
            assert_eq!(validate(&v.into()).map(|l| l.value()), Ok(v as u32));
        }
        for v in [-100, -1, 101, 1000, i64::MAX, i64::MIN] {
            assert!(validate(&v.into()).is_err(), "{v}");
        }
    }

    #[test]
    fn accepts_numeric_strings() {
        assert_eq!(validate(&"46".into()).unwrap().value(), 46);
        assert_eq!(validate(&" 7 ".into()).unwrap().value(), 7);
        assert!(validate(&"101".into()).is_err());
        assert!(validate(&"-1".into()).is_err());
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["", "fast", "4.5", "0x10", "五十"] {
            assert_eq!(validate(&bad.into()), Err(InvalidValue(bad.into())));
        }
        assert!(validate(&ParamValue::Float(12.5)).is_err());
        assert!(validate(&ParamValue::Float(f64::NAN)).is_err());
        assert_eq!(validate(&ParamValue::Float(50.0)).unwrap().value(), 50);
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let values: Vec<ParamValue> = serde_json::from_str(r#"[1, 2.5, "3"]"#).unwrap();
        assert_eq!(
            values,
            [ParamValue::Int(1), ParamValue::Float(2.5), ParamValue::Text("3".into())]
        );
    }

    #[test]
    fn alias_lookup_is_exact() {
        let aliases = [("速さ", TalkParam::Speed), ("高さ", TalkParam::Tone)];
        assert_eq!(resolve_alias("速さ", &aliases), Some(TalkParam::Speed));
        assert_eq!(resolve_alias("大きさ", &aliases), None);
        assert_eq!(resolve_alias("Speed", &aliases), None);
    }

    #[test]
    fn canonical_names_round_trip() {
        assert_eq!(TalkParam::ToneScale.name(), "ToneScale");
        assert_eq!(TalkParam::from_str("Alpha"), Ok(TalkParam::Alpha));
        assert!(TalkParam::from_str("Pitch").is_err());
    }
}
