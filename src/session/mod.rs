use crate::chunk::split_text;
use crate::client::{EngineClient, SpeechHandle};
use crate::profile::{EngineProfile, Mode};
use crate::report::{Report, Warning};
use crate::{Error, Result};

mod params;
mod state;

pub use state::{SessionState, StartFailure};

/// Drives a speech engine through an [`EngineClient`]: starts the host, selects the cast,
/// adjusts parameters and speaks text.
///
/// Every operation other than [`start`](Self::start) fails with
/// [`Error::EngineNotRunning`] unless the session has been started and the host is still
/// running.
pub struct EngineSession<C: EngineClient> {
    client: C,
    profile: &'static EngineProfile,
    state: SessionState,
    lead_in: bool,
}

impl<C: EngineClient> EngineSession<C> {
    /// Creates a session that talks to the engine described by `profile` through `client`.
    pub fn new(client: C, profile: &'static EngineProfile) -> Self {
        Self {
            client,
            profile,
            state: SessionState::NotStarted,
            lead_in: false,
        }
    }

    /// Creates a session for the given product.
    pub fn with_mode(client: C, mode: Mode) -> Self {
        Self::new(client, mode.profile())
    }

    /// Makes [`speak`](Self::speak) send the profile's lead-in text before the first segment.
    pub fn set_lead_in(&mut self, enabled: bool) {
        self.lead_in = enabled;
    }

    /// Returns the profile of the engine.
    pub fn profile(&self) -> &'static EngineProfile {
        self.profile
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Starts the engine host unless it is already running.
    ///
    /// Calling this again once the session is running does nothing. A failed start is
    /// terminal: every later call returns the same failure.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::Failed(failure) => return Err(Error::StartFailed(failure)),
            SessionState::Running if self.client.is_host_running()? => return Ok(()),
            _ => (),
        }

        if self.client.is_host_running()? {
            log::info!("attached to {}", self.profile.name);
            self.state = SessionState::Running;
            return Ok(());
        }

        self.state = SessionState::Starting;
        let code = match self.client.start_host() {
            Ok(code) => code,
            Err(err) => {
                self.state = SessionState::NotStarted;
                return Err(err);
            }
        };
        match StartFailure::from_code(code) {
            None => {
                log::info!("{} started", self.profile.name);
                self.state = SessionState::Running;
                Ok(())
            }
            Some(failure) => {
                log::error!("failed to start {}: {failure}", self.profile.name);
                self.state = SessionState::Failed(failure);
                Err(Error::StartFailed(failure))
            }
        }
    }

    pub(crate) fn ensure_running(&self) -> Result<()> {
        if self.state == SessionState::Running && self.client.is_host_running()? {
            Ok(())
        } else {
            Err(Error::EngineNotRunning)
        }
    }

    /// Returns the casts the engine offers.
    pub fn available_casts(&self) -> Result<Vec<String>> {
        self.ensure_running()?;
        self.client.available_casts()
    }

    /// Returns the current cast, or an empty string if none is selected.
    pub fn cast(&self) -> Result<String> {
        self.ensure_running()?;
        self.client.cast()
    }

    /// Selects the current cast. A cast the engine does not offer is rejected with a warning
    /// and leaves the current cast unchanged.
    pub fn set_cast(&mut self, name: &str) -> Result<Report<()>> {
        let available = self.available_casts()?;
        if !available.iter().any(|cast| cast == name) {
            return Ok(Report::rejected(
                (),
                Warning::UnknownCast {
                    cast: name.to_owned(),
                    available,
                },
            ));
        }
        self.client.set_cast(name)?;
        log::info!("cast: {name}");
        Ok(Report::new(()))
    }

    /// Selects the first available cast if no cast is selected, and returns the current cast.
    pub fn select_default_cast(&mut self) -> Result<String> {
        let current = self.cast()?;
        if !current.is_empty() {
            return Ok(current);
        }
        let first = self.available_casts()?.into_iter().next().ok_or(Error::NoCastAvailable)?;
        self.client.set_cast(&first)?;
        log::info!("cast: {first}");
        Ok(first)
    }

    /// Speaks `text` with the current cast and returns the number of utterances sent.
    ///
    /// The text is split into segments no longer than the profile's limit (see
    /// [`split_text`]). Each segment is spoken to completion before the next one is sent.
    pub fn speak(&mut self, text: &str) -> Result<usize> {
        let cast = self.cast()?;
        if cast.is_empty() {
            return Err(Error::NoCastSelected);
        }

        let mut segments = split_text(text, self.profile.max_len);
        if self.lead_in {
            segments.insert(0, self.profile.lead_in.to_owned());
        }
        for segment in &segments {
            log::info!("{cast} > {segment}");
            self.client.speak(segment)?.wait()?;
        }
        Ok(segments.len())
    }
}
