//! Render strategies

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::component::{Item, RenderTarget};

/// A render strategy: mutates the target to show `value` for one tick.
pub type RenderFn<T> = Arc<dyn Fn(&mut T, &Value) + Send + Sync>;

/// Textual representation of a value: strings verbatim, `null` as nothing,
/// anything else as JSON.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Writes the value's text into the target.
pub fn default_render<T: RenderTarget>(target: &mut T, value: &Value) {
    target.set_text(&display_value(value));
}

/// Flips the item's visibility on every tick and keeps its text current.
pub fn blink(item: &mut Item, value: &Value) {
    item.toggle_visible();
    item.set_text(&display_value(value));
}

/// Named render strategies, for configurations that cannot hold functions.
pub struct RenderRegistry<T> {
    strategies: BTreeMap<String, RenderFn<T>>,
}

impl<T: RenderTarget> RenderRegistry<T> {
    /// Registry holding only the default strategy, under `text`.
    pub fn new() -> Self {
        let mut registry = Self {
            strategies: BTreeMap::new(),
        };
        registry.register("text", default_render::<T>);
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, render: F) -> &mut Self
    where
        F: Fn(&mut T, &Value) + Send + Sync + 'static,
    {
        self.strategies.insert(name.into(), Arc::new(render));
        self
    }

    pub fn get(&self, name: &str) -> Option<RenderFn<T>> {
        self.strategies.get(name).map(Arc::clone)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }
}

impl RenderRegistry<Item> {
    /// Strategies available to terminal items: `text` and `blink`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("blink", blink);
        registry
    }
}

impl<T: RenderTarget> Default for RenderRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RenderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.strategies.keys()).finish()
    }
}
