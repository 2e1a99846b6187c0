//! Flicker component
//!
//! Re-renders a value into its item immediately on [`Flicker::start`] and then
//! once per interval until [`Flicker::stop`], drawing attention to it.
//!
//! ```no_run
//! use flicker::{component::Item, Flicker, FlickerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), flicker::FlickerError> {
//! let config = FlickerConfig::new().with_value("ALERT").with_interval(500)?;
//! let mut alert = Flicker::new(Item::new(), config)?;
//! alert.start()?; // renders "ALERT" now, then every 500ms
//! alert.stop();
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::runtime::Handle;

pub mod config;
pub mod interval;
pub mod render;
mod timer;

pub use config::FlickerConfig;
pub use interval::Interval;
pub use render::{default_render, RenderFn, RenderRegistry};

use self::timer::{Settings, Shared, Ticker};
use crate::component::{lock, Component, ComponentBase, ItemHandle, RenderTarget};
use crate::error::{FlickerError, Result};

/// A component that periodically re-renders its value.
///
/// Two states: stopped (initial) and running. `start` and `stop` are
/// idempotent and can be cycled indefinitely; dropping the flicker stops it.
pub struct Flicker<T: RenderTarget> {
    base: ComponentBase<T>,
    shared: Arc<Shared<T>>,
    ticker: Option<Ticker>,
}

impl<T: RenderTarget> Flicker<T> {
    /// Mount `item` and configure the flicker. Starts stopped.
    pub fn new(item: T, config: FlickerConfig<T>) -> Result<Self> {
        Self::with_handle(Arc::new(Mutex::new(item)), config)
    }

    /// Like [`Flicker::new`], rendering into a target the host already shares.
    pub fn with_handle(item: ItemHandle<T>, config: FlickerConfig<T>) -> Result<Self> {
        config.validate()?;

        let class_list = config.class_list();
        let base = ComponentBase::with_handle(item, class_list);
        let render: RenderFn<T> = match config.render {
            Some(render) => render,
            None => Arc::new(default_render::<T>),
        };
        let shared = Arc::new(Shared {
            settings: Mutex::new(Settings {
                interval: config.interval,
                value: config.value,
            }),
            item: Arc::clone(base.item()),
            render,
        });

        Ok(Self {
            base,
            shared,
            ticker: None,
        })
    }

    /// Start flickering: render now, then once per interval.
    ///
    /// No effect while already running. Needs a tokio runtime to schedule
    /// the following ticks; without one nothing is rendered and the flicker
    /// stays stopped.
    pub fn start(&mut self) -> Result<()> {
        if self.ticker.is_some() {
            return Ok(());
        }
        let handle = Handle::try_current().map_err(|_| FlickerError::NoRuntime)?;

        self.shared.render();
        self.ticker = Some(Ticker::spawn(&handle, Arc::clone(&self.shared)));
        tracing::debug!(interval = self.interval().as_millis(), "flicker started");
        Ok(())
    }

    /// Stop flickering and cancel the pending tick. Safe at any time.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel(&self.shared);
            tracing::debug!("flicker stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Invoke the render strategy once with the current value.
    pub fn render_now(&self) {
        self.shared.render();
    }

    pub fn interval(&self) -> Interval {
        lock(&self.shared.settings).interval
    }

    /// Change the tick period. A running flicker uses it from the next tick.
    pub fn set_interval<I>(&mut self, interval: I) -> Result<()>
    where
        I: TryInto<Interval, Error = FlickerError>,
    {
        let interval = interval.try_into()?;
        lock(&self.shared.settings).interval = interval;
        tracing::debug!(interval = interval.as_millis(), "flicker interval changed");
        Ok(())
    }

    pub fn value(&self) -> Value {
        lock(&self.shared.settings).value.clone()
    }

    /// Change the rendered value. A running flicker shows it on the next tick.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        lock(&self.shared.settings).value = value.into();
    }
}

impl<T: RenderTarget> Component for Flicker<T> {
    type Target = T;

    fn base(&self) -> &ComponentBase<T> {
        &self.base
    }
}

impl<T: RenderTarget> Drop for Flicker<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
