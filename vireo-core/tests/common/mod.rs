//! Shared fakes and helpers for the service tests.
//!
//! The fakes are hand-rolled rather than mocked: a recording engine that
//! remembers every command, and a scripted watchlist source whose responses
//! complete after configurable delays so tests can interleave fetches.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use vireo_core::engine::{EngineCommand, PlaybackEngine};
use vireo_core::error::{CoreError, Result};
use vireo_core::source::WatchlistSource;
use vireo_model::WatchlistPage;

/// Install a test-friendly tracing subscriber, once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Let spawned tasks drain their pending messages.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Wait until a watched state satisfies `predicate`, returning that state.
pub async fn wait_for<T, F>(rx: &mut watch::Receiver<T>, predicate: F) -> T
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    loop {
        {
            let current = rx.borrow_and_update();
            if predicate(&current) {
                return current.clone();
            }
        }
        rx.changed().await.expect("state channel closed while waiting");
    }
}

/// A playback engine that records every command it is asked to run.
#[derive(Default)]
pub struct RecordingEngine {
    commands: Mutex<Vec<EngineCommand>>,
    failure: Mutex<Option<String>>,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Everything executed so far, in order.
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// Make every subsequent command fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl PlaybackEngine for RecordingEngine {
    async fn execute(&self, command: EngineCommand) -> Result<()> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(CoreError::Engine(message));
        }
        self.commands.lock().unwrap().push(command);
        Ok(())
    }
}

/// A watchlist source that plays back a script, one entry per fetch.
///
/// Each entry pairs a completion delay with a result, so tests can make a
/// later fetch finish before an earlier one.
pub struct ScriptedSource {
    script: Mutex<VecDeque<(Duration, Result<WatchlistPage>)>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<(Duration, Result<WatchlistPage>)>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
        })
    }
}

#[async_trait]
impl WatchlistSource for ScriptedSource {
    async fn fetch(&self) -> Result<WatchlistPage> {
        let (delay, result) =
            self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
                (Duration::ZERO, Err(CoreError::Fetch("script exhausted".into())))
            });
        tokio::time::sleep(delay).await;
        result
    }
}
