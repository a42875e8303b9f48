#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Control of the CeVIO speech synthesis applications through their COM automation interface.
//!
//! # Features
//!
//! This crate starts or attaches to CeVIO AI or CeVIO Creative Studio, selects the cast (the
//! voice) that will speak, adjusts the talk parameters shared by all casts and the emotion
//! parameters of the current cast, and speaks arbitrarily long text.
//!
//! ## Sessions
//!
//! An [`EngineSession`] owns the lifecycle of one connection to the engine. It is created with
//! an [`EngineClient`], the raw control surface of the engine, and an [`EngineProfile`]
//! describing the product (see [`Mode`]). Call [`start`](EngineSession::start) before anything
//! else; every other operation fails with [`Error::EngineNotRunning`] until the engine is up.
//!
//! On Windows, [`EngineSession::connect`] creates a session backed by the COM objects CeVIO
//! registers. Other platforms can drive the session logic with their own client.
//!
//! ## Text length
//!
//! CeVIO accepts a limited number of characters per utterance: 200 for CeVIO AI and 100 for
//! CeVIO Creative Studio. [`EngineSession::speak`] splits longer text at punctuation and
//! whitespace (see [`chunk::split_text`]) and speaks the segments one after another, waiting
//! for each to finish.
//!
//! ## Rejected values
//!
//! Parameter values must be integers in [0, 100]. Setting an unknown parameter, emotion or
//! cast, or an invalid value, does not fail the call. It is reported as a [`Warning`] in the
//! returned [`Report`] and logged through the [`log`] crate, together with every value that
//! changed.
//!
//! ## Configuration files
//!
//! A cast and its parameters can be applied from a JSON file with [`config::apply`].
//!
//! # COM Initialization
//!
//! CeVIO's automation objects are COM objects. Call [`initialize`] on every thread that
//! creates a [`ComClient`], and [`finalize`] when done.

pub mod chunk;
mod client;
#[cfg(windows)]
mod com;
#[cfg(windows)]
mod com_util;
pub mod config;
mod diff;
mod error;
mod param;
mod profile;
mod report;
mod session;

pub use self::client::{EngineClient, SpeechHandle};
#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
pub use self::com::{ComClient, ComSpeech};
pub use self::diff::{diff, Change, EmotionParameters, Snapshot, TalkParameters};
pub use self::error::Error;
pub use self::param::{resolve_alias, validate, InvalidValue, Level, ParamValue, TalkParam};
pub use self::profile::{EngineProfile, Mode, CEVIO_AI, CEVIO_CCS};
pub use self::report::{Report, Warning};
pub use self::session::{EngineSession, SessionState, StartFailure};

/// The type returned by fallible functions and methods of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Initializes COM on the current thread. This function must be called for every thread that
/// intends to talk to CeVIO.
#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
pub fn initialize() -> Result<()> {
    use windows::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};

    unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }.ok()?;
    Ok(())
}

/// Deinitializes COM for the current thread. This function must be called for every thread
/// that called `initialize()`, the same number of times.
#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
pub fn finalize() {
    unsafe { windows::Win32::System::Com::CoUninitialize() }
}
