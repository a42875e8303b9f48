//! The [`EngineClient`] backed by CeVIO's COM automation objects.

use windows as Windows;
use Windows::core::{BSTR, VARIANT};

use crate::client::{EngineClient, SpeechHandle};
use crate::com_util::{
    variant_to_bool, variant_to_dispatch, variant_to_i32, variant_to_string, variant_to_u32,
    Dispatch,
};
use crate::param::TalkParam;
use crate::profile::{EngineProfile, Mode};
use crate::session::EngineSession;
use crate::{Error, Result};

/// Talks to a running CeVIO installation through its talker and service control objects.
pub struct ComClient {
    talker: Dispatch,
    control: Dispatch,
}

impl ComClient {
    /// Instantiates the automation objects of the product described by `profile`.
    ///
    /// [`initialize`](crate::initialize) must have been called on the current thread.
    pub fn new(profile: &EngineProfile) -> Result<Self> {
        Ok(Self {
            talker: Dispatch::create(profile.talker_prog_id)?,
            control: Dispatch::create(profile.control_prog_id)?,
        })
    }

    fn property_name(param: TalkParam) -> &'static str {
        match param {
            TalkParam::Volume => "Volume",
            TalkParam::Speed => "Speed",
            TalkParam::Tone => "Tone",
            TalkParam::ToneScale => "ToneScale",
            TalkParam::Alpha => "Alpha",
        }
    }

    fn components_collection(&self) -> Result<Dispatch> {
        variant_to_dispatch(&self.talker.get("Components")?)
    }
}

/// A speech that CeVIO is rendering.
pub struct ComSpeech {
    state: Dispatch,
}

impl SpeechHandle for ComSpeech {
    fn wait(self) -> Result<()> {
        self.state.call("Wait", vec![])?;
        if variant_to_bool(&self.state.get("IsSucceeded")?)? {
            Ok(())
        } else {
            Err(Error::Engine("speech was not completed".to_owned()))
        }
    }
}

impl EngineClient for ComClient {
    type Handle = ComSpeech;

    fn is_host_running(&self) -> Result<bool> {
        variant_to_bool(&self.control.get("IsHostStarted")?)
    }

    fn start_host(&self) -> Result<i32> {
        variant_to_i32(&self.control.call("StartHost", vec![VARIANT::from(false)])?)
    }

    fn available_casts(&self) -> Result<Vec<String>> {
        let casts = variant_to_dispatch(&self.talker.get("AvailableCasts")?)?;
        let len = variant_to_i32(&casts.get("Length")?)?;
        (0..len).map(|idx| variant_to_string(&casts.call("At", vec![idx.into()])?)).collect()
    }

    fn cast(&self) -> Result<String> {
        variant_to_string(&self.talker.get("Cast")?)
    }

    fn set_cast(&self, name: &str) -> Result<()> {
        self.talker.put("Cast", BSTR::from(name).into())
    }

    fn talk_param(&self, param: TalkParam) -> Result<u32> {
        variant_to_u32(&self.talker.get(Self::property_name(param))?)
    }

    fn set_talk_param(&self, param: TalkParam, value: u32) -> Result<()> {
        self.talker.put(Self::property_name(param), VARIANT::from(value))
    }

    fn components(&self) -> Result<Vec<(String, u32)>> {
        let components = self.components_collection()?;
        let len = variant_to_i32(&components.get("Length")?)?;
        (0..len)
            .map(|idx| {
                let component = variant_to_dispatch(&components.call("At", vec![idx.into()])?)?;
                Ok::<_, Error>((
                    variant_to_string(&component.get("Name")?)?,
                    variant_to_u32(&component.get("Value")?)?,
                ))
            })
            .collect()
    }

    fn set_component(&self, name: &str, value: u32) -> Result<()> {
        let components = self.components_collection()?;
        let component =
            variant_to_dispatch(&components.call("ByName", vec![BSTR::from(name).into()])?)?;
        component.put("Value", VARIANT::from(value))
    }

    fn speak(&self, text: &str) -> Result<ComSpeech> {
        let state = self.talker.call("Speak", vec![BSTR::from(text).into()])?;
        Ok(ComSpeech {
            state: variant_to_dispatch(&state)?,
        })
    }
}

impl EngineSession<ComClient> {
    /// Connects to the given CeVIO product and starts it if it is not running yet.
    ///
    /// [`initialize`](crate::initialize) must have been called on the current thread.
    pub fn connect(mode: Mode) -> Result<Self> {
        let mut session = Self::with_mode(ComClient::new(mode.profile())?, mode);
        session.start()?;
        Ok(session)
    }
}
