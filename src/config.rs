//! Declarative session setup loaded from a JSON file.
//!
//! ```json
//! {
//!     "Cast": "さとうささら",
//!     "talk": { "速さ": 46, "Volume": "60" },
//!     "Emotion": { "元気": 50, "普通": 70, "怒り": 72, "哀しみ": 26 }
//! }
//! ```
//!
//! The `talk` section may also use the index-keyed layout
//! `{ "Name": { "0": "速さ" }, "Value": { "0": 46 } }`.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::client::EngineClient;
use crate::diff::Change;
use crate::param::{InvalidValue, ParamValue, TalkParam};
use crate::report::{Report, Warning};
use crate::session::EngineSession;
use crate::{Error, Result};

/// Cast and parameter values to apply to a session.
///
/// Only the cast is checked when the file is read. The talk and emotion sections are kept as
/// raw JSON and interpreted by [`apply`](Self::apply), so a malformed section is reported as a
/// warning instead of failing the load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// The cast to select.
    #[serde(rename = "Cast")]
    pub cast: String,
    /// Talk parameters, by canonical name or label.
    #[serde(default)]
    pub talk: Value,
    /// Emotion parameters of the cast.
    #[serde(rename = "Emotion", default)]
    pub emotion: Value,
}

/// The layouts accepted for the `talk` section.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TalkSection {
    /// Names and values stored in two maps sharing the same keys.
    Indexed {
        #[serde(rename = "Name")]
        names: BTreeMap<String, String>,
        #[serde(rename = "Value")]
        values: BTreeMap<String, Value>,
    },
    /// Values by parameter name.
    Flat(BTreeMap<String, Value>),
}

impl TalkSection {
    fn parse(raw: &Value) -> serde_json::Result<Self> {
        match raw {
            Value::Null => Ok(Self::Flat(BTreeMap::new())),
            raw => Self::deserialize(raw),
        }
    }

    /// Pairs names with values. Names of the indexed layout without a matching value are
    /// returned separately.
    fn entries(self) -> (Vec<(String, Value)>, Vec<String>) {
        match self {
            Self::Flat(map) => (map.into_iter().collect(), vec![]),
            Self::Indexed {
                names,
                mut values,
            } => {
                let mut entries = Vec::new();
                let mut missing = Vec::new();
                for (idx, name) in names {
                    match values.remove(&idx) {
                        Some(value) => entries.push((name, value)),
                        None => missing.push(name),
                    }
                }
                (entries, missing)
            }
        }
    }
}

fn emotion_entries(raw: &Value) -> serde_json::Result<Vec<(String, Value)>> {
    match raw {
        Value::Null => Ok(Vec::new()),
        raw => Ok(BTreeMap::<String, Value>::deserialize(raw)?.into_iter().collect()),
    }
}

/// Converts raw entries to parameter values. Entries that are not a number or a string are
/// reported and left out.
fn param_values<T>(
    entries: Vec<(String, Value)>,
    report: &mut Report<T>,
) -> Vec<(String, ParamValue)> {
    entries
        .into_iter()
        .filter_map(|(name, raw)| match ParamValue::deserialize(&raw) {
            Ok(value) => Some((name, value)),
            Err(_) => {
                report.warn(Warning::InvalidValue {
                    name,
                    error: InvalidValue(ParamValue::Text(raw.to_string())),
                });
                None
            }
        })
        .collect()
}

fn section_failed<T>(report: &mut Report<T>, section: &'static str, err: impl Display) {
    report.warn(Warning::SectionFailed {
        section,
        reason: err.to_string(),
    });
}

/// What applying a [`SessionConfig`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// The selected cast.
    pub cast: String,
    /// Talk parameters that changed.
    pub talk_changes: Vec<Change<TalkParam>>,
    /// Emotion parameters that changed.
    pub emotion_changes: Vec<Change<String>>,
}

impl SessionConfig {
    /// Reads a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigNotFound {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }

    /// Selects the cast and sets the talk and emotion parameters.
    ///
    /// A cast the engine does not offer fails the whole operation before anything is changed.
    /// Within the talk and emotion sections, rejected entries are reported as warnings, and a
    /// section that fails outright is reported as a warning too; the other section is still
    /// applied.
    pub fn apply<C: EngineClient>(
        &self,
        session: &mut EngineSession<C>,
    ) -> Result<Report<ApplySummary>> {
        let available = session.available_casts()?;
        if !available.contains(&self.cast) {
            return Err(Error::InvalidCast {
                cast: self.cast.clone(),
                available,
            });
        }

        let mut report = Report::new(ApplySummary::default());
        report.absorb(session.set_cast(&self.cast)?);
        report.value.cast = self.cast.clone();

        match TalkSection::parse(&self.talk) {
            Ok(section) => {
                let (entries, missing) = section.entries();
                for name in missing {
                    report.warn(Warning::MissingValue {
                        name,
                    });
                }
                let talk = param_values(entries, &mut report);
                match session.set_talk_params(talk) {
                    Ok(changes) => report.value.talk_changes = report.absorb(changes),
                    Err(err) => section_failed(&mut report, "talk", err),
                }
            }
            Err(err) => section_failed(&mut report, "talk", err),
        }

        match emotion_entries(&self.emotion) {
            Ok(entries) => {
                let emotions = param_values(entries, &mut report);
                match session.set_cast_params(emotions) {
                    Ok(changes) => report.value.emotion_changes = report.absorb(changes),
                    Err(err) => section_failed(&mut report, "Emotion", err),
                }
            }
            Err(err) => section_failed(&mut report, "Emotion", err),
        }

        Ok(report)
    }
}

/// Loads the configuration at `path` and applies it to `session`.
///
/// Fails with [`Error::EngineNotRunning`] before touching the file if the session is not
/// running.
pub fn apply<C: EngineClient, P: AsRef<Path>>(
    session: &mut EngineSession<C>,
    path: P,
) -> Result<Report<ApplySummary>> {
    session.ensure_running()?;
    SessionConfig::load(path)?.apply(session)
}
