#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cevio_lite::{EngineClient, EngineSession, Error, Result, SpeechHandle, TalkParam, CEVIO_AI};

/// A call the fake engine received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StartHost,
    SetCast(String),
    SetTalkParam(TalkParam, u32),
    SetComponent(String, u32),
    Speak(String),
    Wait(String),
}

#[derive(Debug)]
pub struct EngineState {
    pub running: bool,
    pub start_code: i32,
    pub casts: Vec<(String, Vec<(String, u32)>)>,
    pub cast: String,
    pub talk: Vec<(TalkParam, u32)>,
    pub calls: Vec<Call>,
}

/// An in-memory engine that records every mutating call.
#[derive(Clone)]
pub struct FakeEngine {
    pub state: Rc<RefCell<EngineState>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        let casts = vec![
            (
                "さとうささら".to_string(),
                vec![
                    ("普通".to_string(), 100),
                    ("元気".to_string(), 0),
                    ("怒り".to_string(), 0),
                    ("哀しみ".to_string(), 0),
                ],
            ),
            (
                "すずきつづみ".to_string(),
                vec![("クール".to_string(), 100), ("照れ".to_string(), 0)],
            ),
        ];
        let talk = vec![
            (TalkParam::Volume, 50),
            (TalkParam::Speed, 50),
            (TalkParam::Tone, 50),
            (TalkParam::ToneScale, 50),
            (TalkParam::Alpha, 50),
        ];
        Self {
            state: Rc::new(RefCell::new(EngineState {
                running: false,
                start_code: 0,
                casts,
                cast: String::new(),
                talk,
                calls: Vec::new(),
            })),
        }
    }

    pub fn running() -> Self {
        let engine = Self::new();
        engine.state.borrow_mut().running = true;
        engine
    }

    pub fn with_start_code(code: i32) -> Self {
        let engine = Self::new();
        engine.state.borrow_mut().start_code = code;
        engine
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|call| *call != Call::StartHost).collect()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Speak(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn talk(&self, param: TalkParam) -> u32 {
        self.state.borrow().talk.iter().find(|(p, _)| *p == param).map(|(_, v)| *v).unwrap()
    }

    pub fn stop_host(&self) {
        self.state.borrow_mut().running = false;
    }
}

/// Creates a started CeVIO AI session with さとうささら selected.
pub fn started_session() -> (EngineSession<FakeEngine>, FakeEngine) {
    let engine = FakeEngine::running();
    let mut session = EngineSession::new(engine.clone(), &CEVIO_AI);
    session.start().unwrap();
    session.set_cast("さとうささら").unwrap();
    engine.state.borrow_mut().calls.clear();
    (session, engine)
}

pub struct FakeSpeech {
    state: Rc<RefCell<EngineState>>,
    text: String,
}

impl SpeechHandle for FakeSpeech {
    fn wait(self) -> Result<()> {
        self.state.borrow_mut().calls.push(Call::Wait(self.text));
        Ok(())
    }
}

impl EngineClient for FakeEngine {
    type Handle = FakeSpeech;

    fn is_host_running(&self) -> Result<bool> {
        Ok(self.state.borrow().running)
    }

    fn start_host(&self) -> Result<i32> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::StartHost);
        if state.start_code == 0 {
            state.running = true;
        }
        Ok(state.start_code)
    }

    fn available_casts(&self) -> Result<Vec<String>> {
        Ok(self.state.borrow().casts.iter().map(|(name, _)| name.clone()).collect())
    }

    fn cast(&self) -> Result<String> {
        Ok(self.state.borrow().cast.clone())
    }

    fn set_cast(&self, name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetCast(name.to_owned()));
        state.cast = name.to_owned();
        Ok(())
    }

    fn talk_param(&self, param: TalkParam) -> Result<u32> {
        let state = self.state.borrow();
        state
            .talk
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, v)| *v)
            .ok_or_else(|| Error::Engine(format!("no property {param}")))
    }

    fn set_talk_param(&self, param: TalkParam, value: u32) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetTalkParam(param, value));
        for entry in state.talk.iter_mut().filter(|(p, _)| *p == param) {
            entry.1 = value;
        }
        Ok(())
    }

    fn components(&self) -> Result<Vec<(String, u32)>> {
        let state = self.state.borrow();
        Ok(state
            .casts
            .iter()
            .find(|(name, _)| *name == state.cast)
            .map(|(_, components)| components.clone())
            .unwrap_or_default())
    }

    fn set_component(&self, name: &str, value: u32) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetComponent(name.to_owned(), value));
        let cast = state.cast.clone();
        let components = state
            .casts
            .iter_mut()
            .find(|(name, _)| *name == cast)
            .map(|(_, components)| components)
            .ok_or_else(|| Error::Engine("no cast".to_owned()))?;
        for entry in components.iter_mut().filter(|(n, _)| n == name) {
            entry.1 = value;
        }
        Ok(())
    }

    fn speak(&self, text: &str) -> Result<FakeSpeech> {
        self.state.borrow_mut().calls.push(Call::Speak(text.to_owned()));
        Ok(FakeSpeech {
            state: self.state.clone(),
            text: text.to_owned(),
        })
    }
}
