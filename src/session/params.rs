use crate::client::EngineClient;
use crate::diff::{diff, Change, EmotionParameters, TalkParameters};
use crate::param::{validate, ParamValue, TalkParam};
use crate::report::{Report, Warning};
use crate::Result;

use super::EngineSession;

/// Talk settings of the sample mood.
const SAMPLE_TALK: [(&str, u32); 1] = [("速さ", 46)];

/// Emotion settings of the sample mood, tuned for さとうささら.
const SAMPLE_EMOTIONS: [(&str, u32); 4] = [("元気", 50), ("普通", 70), ("怒り", 72), ("哀しみ", 26)];

impl<C: EngineClient> EngineSession<C> {
    /// Reads every talk parameter the profile supports. These are shared by all casts.
    pub fn talk_params(&self) -> Result<TalkParameters> {
        self.ensure_running()?;
        self.profile
            .talk_params
            .iter()
            .map(|&param| self.client.talk_param(param).map(|value| (param, value)))
            .collect()
    }

    /// Sets one talk parameter, named by its canonical name or one of its labels, and
    /// returns what changed.
    ///
    /// Unknown names and values outside [0, 100] are rejected with a warning; nothing is
    /// written in that case.
    pub fn set_talk_param<V: Into<ParamValue>>(
        &mut self,
        name: &str,
        value: V,
    ) -> Result<Report<Vec<Change<TalkParam>>>> {
        self.ensure_running()?;
        let param = match self.profile.resolve_param(name) {
            Some(param) => param,
            None => {
                let accepted = self.profile.param_names().into_iter().map(String::from).collect();
                return Ok(Report::rejected(
                    Vec::new(),
                    Warning::UnknownParam {
                        name: name.to_owned(),
                        accepted,
                    },
                ));
            }
        };
        let level = match validate(&value.into()) {
            Ok(level) => level,
            Err(error) => {
                return Ok(Report::rejected(
                    Vec::new(),
                    Warning::InvalidValue {
                        name: name.to_owned(),
                        error,
                    },
                ))
            }
        };

        let before = self.talk_params()?;
        self.client.set_talk_param(param, level.value())?;
        let after = self.talk_params()?;
        Ok(Report::new(log_changes(diff(&before, &after))))
    }

    /// Sets several talk parameters. Each entry is validated on its own; rejected entries are
    /// skipped.
    pub fn set_talk_params<I, K, V>(&mut self, params: I) -> Result<Report<Vec<Change<TalkParam>>>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        let mut report = Report::new(Vec::new());
        for (name, value) in params {
            let changes = report.absorb(self.set_talk_param(name.as_ref(), value)?);
            report.value.extend(changes);
        }
        Ok(report)
    }

    /// Reads the emotion parameters of the current cast.
    pub fn cast_params(&self) -> Result<EmotionParameters> {
        self.ensure_running()?;
        Ok(self.client.components()?.into_iter().collect())
    }

    /// Sets one emotion parameter of the current cast and returns what changed.
    ///
    /// The emotions are looked up afresh on every call since they depend on the cast.
    pub fn set_cast_param<V: Into<ParamValue>>(
        &mut self,
        emotion: &str,
        value: V,
    ) -> Result<Report<Vec<Change<String>>>> {
        let before = self.cast_params()?;
        if !before.contains_key(emotion) {
            return Ok(Report::rejected(
                Vec::new(),
                Warning::UnknownEmotion {
                    name: emotion.to_owned(),
                    accepted: before.keys().cloned().collect(),
                },
            ));
        }
        let level = match validate(&value.into()) {
            Ok(level) => level,
            Err(error) => {
                return Ok(Report::rejected(
                    Vec::new(),
                    Warning::InvalidValue {
                        name: emotion.to_owned(),
                        error,
                    },
                ))
            }
        };

        self.client.set_component(emotion, level.value())?;
        let after = self.cast_params()?;
        Ok(Report::new(log_changes(diff(&before, &after))))
    }

    /// Sets several emotion parameters of the current cast. Each entry is validated on its
    /// own; rejected entries are skipped.
    pub fn set_cast_params<I, K, V>(&mut self, emotions: I) -> Result<Report<Vec<Change<String>>>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        let mut report = Report::new(Vec::new());
        for (emotion, value) in emotions {
            let changes = report.absorb(self.set_cast_param(emotion.as_ref(), value)?);
            report.value.extend(changes);
        }
        Ok(report)
    }

    /// Applies the sample mood: a slightly slower pace with a lively, somewhat cross voice.
    ///
    /// The emotions are those of さとうささら; with another cast they are rejected with
    /// warnings while the pace is still applied.
    pub fn apply_sample_mood(
        &mut self,
    ) -> Result<Report<(Vec<Change<TalkParam>>, Vec<Change<String>>)>> {
        let mut report = Report::new((Vec::new(), Vec::new()));
        report.value.0 = report.absorb(self.set_talk_params(SAMPLE_TALK)?);
        report.value.1 = report.absorb(self.set_cast_params(SAMPLE_EMOTIONS)?);
        Ok(report)
    }
}

fn log_changes<K: std::fmt::Display>(changes: Vec<Change<K>>) -> Vec<Change<K>> {
    for change in &changes {
        log::info!("{change}");
    }
    changes
}
