//! Repeating tick task

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::interval::Interval;
use super::render::RenderFn;
use crate::component::{lock, ItemHandle, RenderTarget};

/// Mutable properties read on every tick.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) interval: Interval,
    pub(crate) value: Value,
}

/// Everything the tick task shares with its widget.
pub(crate) struct Shared<T> {
    pub(crate) settings: Mutex<Settings>,
    pub(crate) item: ItemHandle<T>,
    pub(crate) render: RenderFn<T>,
}

impl<T: RenderTarget> Shared<T> {
    /// Render the current value unconditionally.
    pub(crate) fn render(&self) {
        let settings = lock(&self.settings);
        let mut item = lock(&self.item);
        (self.render)(&mut *item, &settings.value);
    }

    /// Render unless `token` was cancelled. Checked under the settings lock,
    /// which `Ticker::cancel` also holds, so nothing renders after a stop.
    fn tick(&self, token: &CancellationToken) -> bool {
        let settings = lock(&self.settings);
        if token.is_cancelled() {
            return false;
        }
        let mut item = lock(&self.item);
        (self.render)(&mut *item, &settings.value);
        true
    }
}

/// The single pending timer of a running flicker.
pub(crate) struct Ticker {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Arm the first tick one interval from now.
    pub(crate) fn spawn<T: RenderTarget>(handle: &Handle, shared: Arc<Shared<T>>) -> Self {
        let token = CancellationToken::new();
        let first = Instant::now() + lock(&shared.settings).interval.as_duration();
        let task = handle.spawn(run(shared, token.clone(), first));
        Self { token, task }
    }

    pub(crate) fn cancel<T>(self, shared: &Shared<T>) {
        {
            let _settings = lock(&shared.settings);
            self.token.cancel();
        }
        self.task.abort();
    }
}

async fn run<T: RenderTarget>(shared: Arc<Shared<T>>, token: CancellationToken, first: Instant) {
    let mut deadline = first;
    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => break,
            () = tokio::time::sleep_until(deadline) => {}
        }
        if !shared.tick(&token) {
            break;
        }
        // re-armed after each render with the interval current at that time
        deadline = Instant::now() + lock(&shared.settings).interval.as_duration();
    }
    tracing::trace!("tick task finished");
}
