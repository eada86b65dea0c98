//! Test doubles for the search capabilities.

#![allow(dead_code)]

use async_trait::async_trait;
use seeker_core::{Quality, TargetId, TargetItem};
use seeker_search::{
    Candidate, DispatchError, DownloadDispatcher, EvaluationError, FetchError, InventoryPolicy,
    ProgressSink, Source,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn target() -> TargetItem {
    TargetItem::new(TargetId::new(7).expect("valid id"), "The Show - 2x04 - Return")
}

pub fn candidate(title: &str, source: &str, quality: Quality, proper: bool) -> Candidate {
    Candidate::new(
        title,
        source,
        format!("https://{source}.example/nzb/{title}"),
        quality,
        proper,
    )
}

/// Source with a canned response and an optional delay.
pub struct FakeSource {
    name: String,
    response: std::result::Result<Vec<Candidate>, String>,
    delay: Option<Duration>,
    calls: Mutex<usize>,
}

impl FakeSource {
    pub fn ok(name: &str, candidates: Vec<Candidate>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            response: Ok(candidates),
            delay: None,
            calls: Mutex::new(0),
        })
    }

    pub fn failing(name: &str, reason: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            response: Err(reason.to_string()),
            delay: None,
            calls: Mutex::new(0),
        })
    }

    pub fn delayed(name: &str, delay: Duration, candidates: Vec<Candidate>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            response: Ok(candidates),
            delay: Some(delay),
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("lock calls")
    }
}

#[async_trait]
impl Source for FakeSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, _target: &TargetItem) -> Result<Vec<Candidate>, FetchError> {
        *self.calls.lock().expect("lock calls") += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            Ok(candidates) => Ok(candidates.clone()),
            Err(reason) => Err(FetchError::new(
                self.name.clone(),
                anyhow::anyhow!("{reason}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Needed,
    NotNeeded,
    Fail,
}

/// Policy answering per candidate title; unknown titles are not needed.
#[derive(Default)]
pub struct ScriptedPolicy {
    decisions: HashMap<String, Decision>,
    evaluated: Mutex<Vec<String>>,
}

impl ScriptedPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, title: &str, decision: Decision) -> Self {
        self.decisions.insert(title.to_string(), decision);
        self
    }

    pub fn evaluated(&self) -> Vec<String> {
        self.evaluated.lock().expect("lock evaluated").clone()
    }
}

#[async_trait]
impl InventoryPolicy for ScriptedPolicy {
    async fn is_needed(&self, candidate: &Candidate) -> Result<bool, EvaluationError> {
        self.evaluated
            .lock()
            .expect("lock evaluated")
            .push(candidate.title().to_string());

        match self.decisions.get(candidate.title()) {
            Some(Decision::Needed) => Ok(true),
            Some(Decision::Fail) => Err(EvaluationError::new(
                candidate,
                anyhow::anyhow!("history unavailable"),
            )),
            Some(Decision::NotNeeded) | None => Ok(false),
        }
    }
}

/// Policy that accepts everything.
pub struct AcceptAll;

#[async_trait]
impl InventoryPolicy for AcceptAll {
    async fn is_needed(&self, _candidate: &Candidate) -> Result<bool, EvaluationError> {
        Ok(true)
    }
}

#[derive(Default)]
pub struct RecordingDispatcher {
    dispatched: Mutex<Vec<Candidate>>,
    fail: bool,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn dispatched(&self) -> Vec<Candidate> {
        self.dispatched.lock().expect("lock dispatched").clone()
    }
}

#[async_trait]
impl DownloadDispatcher for RecordingDispatcher {
    async fn dispatch(&self, candidate: &Candidate) -> Result<(), DispatchError> {
        self.dispatched
            .lock()
            .expect("lock dispatched")
            .push(candidate.clone());

        if self.fail {
            return Err(DispatchError::new(candidate, anyhow::anyhow!("queue offline")));
        }
        Ok(())
    }
}

/// Keeps every message instead of only the latest.
#[derive(Default)]
pub struct RecordingProgress {
    messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock messages").clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn set_message(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock messages")
            .push(message.to_string());
    }
}
