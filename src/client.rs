//! The control surface of the speech engine, as seen by [`EngineSession`](crate::EngineSession).

use crate::param::TalkParam;
use crate::Result;

/// A speech request that is being rendered by the engine.
pub trait SpeechHandle {
    /// Blocks until the engine has finished speaking.
    fn wait(self) -> Result<()>;
}

/// Raw access to a speech engine.
///
/// Implementations forward each call to the engine as-is. They do not validate names or
/// values; [`EngineSession`](crate::EngineSession) does that before calling them.
pub trait EngineClient {
    /// The handle returned by [`speak`](Self::speak).
    type Handle: SpeechHandle;

    /// Checks whether the engine host process is running.
    fn is_host_running(&self) -> Result<bool>;

    /// Asks the engine to start its host process and returns the engine's result code, `0`
    /// meaning success.
    fn start_host(&self) -> Result<i32>;

    /// Returns the casts the engine offers, in the engine's order.
    fn available_casts(&self) -> Result<Vec<String>>;

    /// Returns the current cast, or an empty string if none is selected.
    fn cast(&self) -> Result<String>;

    /// Selects the current cast.
    fn set_cast(&self, name: &str) -> Result<()>;

    /// Reads a talk parameter.
    fn talk_param(&self, param: TalkParam) -> Result<u32>;

    /// Writes a talk parameter.
    fn set_talk_param(&self, param: TalkParam, value: u32) -> Result<()>;

    /// Returns the emotion components of the current cast with their values.
    fn components(&self) -> Result<Vec<(String, u32)>>;

    /// Writes an emotion component of the current cast.
    fn set_component(&self, name: &str, value: u32) -> Result<()>;

    /// Starts speaking `text` with the current cast.
    fn speak(&self, text: &str) -> Result<Self::Handle>;
}
