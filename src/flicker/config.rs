//! Flicker construction options

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::interval::Interval;
use super::render::{RenderFn, RenderRegistry};
use crate::component::{ClassList, RenderTarget};
use crate::error::{FlickerError, Result};
use crate::validation::Validation;

/// Class every flicker's render target carries.
pub const DEFAULT_CLASS: &str = "flicker";

/// Options a [`super::Flicker`] is constructed from.
pub struct FlickerConfig<T> {
    pub(crate) render: Option<RenderFn<T>>,
    pub(crate) interval: Interval,
    pub(crate) value: Value,
    pub(crate) class_name: Option<String>,
    pub(crate) validation: Validation,
}

impl<T: RenderTarget> FlickerConfig<T> {
    pub fn new() -> Self {
        Self {
            render: None,
            interval: Interval::DEFAULT,
            value: Value::Null,
            class_name: None,
            validation: Validation::default(),
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Replace the default render strategy.
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&mut T, &Value) + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Set the tick period, rejecting anything but a non-negative integer.
    pub fn with_interval<I>(mut self, interval: I) -> Result<Self>
    where
        I: TryInto<Interval, Error = FlickerError>,
    {
        self.interval = interval.try_into()?;
        Ok(self)
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn has_custom_render(&self) -> bool {
        self.render.is_some()
    }

    /// `flicker` followed by the configured class names.
    pub fn class_list(&self) -> ClassList {
        let mut list = ClassList::parse(DEFAULT_CLASS);
        if let Some(names) = &self.class_name {
            for name in names.split_whitespace() {
                list.add(name);
            }
        }
        list
    }

    /// Check the construction contract: something must be renderable.
    pub fn validate(&self) -> Result<()> {
        if self.validation.is_strict() && self.value.is_null() && self.render.is_none() {
            return Err(FlickerError::NothingToRender);
        }
        Ok(())
    }

    /// Build from an untyped record such as a parsed config file section.
    ///
    /// Recognized keys are `render` (a strategy name looked up in `registry`),
    /// `interval`, `value` and `className`. In lenient mode malformed entries
    /// fall back to their defaults instead of failing.
    pub fn from_record(
        record: &Value,
        registry: &RenderRegistry<T>,
        validation: Validation,
    ) -> Result<Self> {
        let strict = validation.is_strict();
        let empty = Map::new();

        let fields = match record.as_object() {
            Some(fields) => fields,
            None if strict => return Err(FlickerError::NotARecord),
            None => {
                tracing::warn!("flicker config is not a record, using defaults");
                &empty
            }
        };

        let class_name = match given(fields, "className") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) if strict => return Err(FlickerError::InvalidClassName),
            Some(other) => {
                tracing::warn!(class_name = %other, "ignoring non-string className");
                None
            }
        };

        let value = fields.get("value").cloned().unwrap_or(Value::Null);
        let render_entry = given(fields, "render");
        if strict && value.is_null() && render_entry.is_none() {
            return Err(FlickerError::NothingToRender);
        }

        let render = match render_entry {
            None => None,
            Some(Value::String(name)) => match registry.get(name) {
                Some(render) => Some(render),
                None if strict => return Err(FlickerError::RenderNotCallable(name.clone())),
                None => {
                    tracing::warn!(render = %name, "unknown render strategy, using default");
                    None
                }
            },
            Some(other) if strict => {
                return Err(FlickerError::RenderNotCallable(other.to_string()))
            }
            Some(other) => {
                tracing::warn!(render = %other, "render is not a strategy name, using default");
                None
            }
        };

        let interval = match fields.get("interval") {
            None | Some(Value::Null) => Interval::DEFAULT,
            Some(raw) => match Interval::try_from(raw) {
                Ok(interval) => interval,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    tracing::warn!("{e}, using {}ms", Interval::DEFAULT.as_millis());
                    Interval::DEFAULT
                }
            },
        };

        Ok(Self {
            render,
            interval,
            value,
            class_name,
            validation,
        })
    }
}

/// Entry under `key`, treating `null`, `false`, `0` and `""` as not given.
fn given<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|entry| match entry {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

impl<T: RenderTarget> Default for FlickerConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FlickerConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlickerConfig")
            .field("render", &self.render.as_ref().map(|_| "custom"))
            .field("interval", &self.interval)
            .field("value", &self.value)
            .field("class_name", &self.class_name)
            .field("validation", &self.validation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::component::Item;

    fn strict(record: Value) -> Result<FlickerConfig<Item>> {
        FlickerConfig::from_record(&record, &RenderRegistry::builtin(), Validation::Strict)
    }

    fn lenient(record: Value) -> Result<FlickerConfig<Item>> {
        FlickerConfig::from_record(&record, &RenderRegistry::builtin(), Validation::Lenient)
    }

    #[test]
    fn test_record_with_value_and_interval() {
        let config = strict(json!({ "value": "ALERT", "interval": 500 })).expect("valid");
        assert_eq!(config.interval(), Interval::from_millis(500));
        assert_eq!(config.value(), &json!("ALERT"));
        assert!(!config.has_custom_render());
    }

    #[test]
    fn test_record_defaults_interval() {
        let config = strict(json!({ "value": "x" })).expect("valid");
        assert_eq!(config.interval(), Interval::DEFAULT);
    }

    #[test]
    fn test_record_render_only() {
        let config = strict(json!({ "render": "blink" })).expect("valid");
        assert!(config.has_custom_render());
        assert!(config.value().is_null());
    }

    #[rstest]
    #[case(json!("ALERT"), FlickerError::NotARecord)]
    #[case(json!({ "value": "x", "className": 3 }), FlickerError::InvalidClassName)]
    #[case(json!({ "interval": 500 }), FlickerError::NothingToRender)]
    #[case(json!({ "value": null }), FlickerError::NothingToRender)]
    #[case(json!({ "value": "x", "render": "spin" }), FlickerError::RenderNotCallable("spin".to_owned()))]
    #[case(json!({ "value": "x", "render": 1 }), FlickerError::RenderNotCallable("1".to_owned()))]
    #[case(json!({ "value": "x", "interval": -1 }), FlickerError::InvalidInterval("-1".to_owned()))]
    #[case(json!({ "value": "x", "interval": 1.5 }), FlickerError::InvalidInterval("1.5".to_owned()))]
    #[case(json!({ "value": "x", "interval": "fast" }), FlickerError::InvalidInterval("\"fast\"".to_owned()))]
    fn test_strict_rejects(#[case] record: Value, #[case] expected: FlickerError) {
        assert_eq!(strict(record).err(), Some(expected));
    }

    #[rstest]
    #[case(json!({ "value": "x", "className": false }))]
    #[case(json!({ "value": "x", "className": 0 }))]
    #[case(json!({ "value": "x", "className": "" }))]
    #[case(json!({ "value": "x", "render": false }))]
    #[case(json!({ "value": "x", "render": "" }))]
    fn test_strict_treats_falsy_as_absent(#[case] record: Value) {
        let config = strict(record).expect("falsy entries are ignored");
        assert!(!config.has_custom_render());
        assert_eq!(config.class_list().to_string(), "flicker");
    }

    #[rstest]
    #[case(json!({ "render": false }))]
    #[case(json!({ "render": 0, "className": "alert" }))]
    fn test_falsy_render_alone_is_nothing_to_render(#[case] record: Value) {
        assert_eq!(strict(record).err(), Some(FlickerError::NothingToRender));
    }

    #[test]
    fn test_lenient_falls_back() {
        let config = lenient(json!({
            "value": "x",
            "className": 3,
            "render": "spin",
            "interval": -1,
        }))
        .expect("lenient accepts");
        assert_eq!(config.interval(), Interval::DEFAULT);
        assert!(!config.has_custom_render());
        assert_eq!(config.class_list().to_string(), "flicker");
    }

    #[test]
    fn test_lenient_accepts_non_record_and_missing_value() {
        let config = lenient(json!(null)).expect("lenient accepts");
        assert!(config.value().is_null());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_class_list_merges_default() {
        let config = strict(json!({ "value": "x", "className": "alert flicker" })).expect("valid");
        assert_eq!(config.class_list().to_string(), "flicker alert");
    }

    #[test]
    fn test_builder_interval_validation() {
        assert!(FlickerConfig::<Item>::new().with_interval(-1).is_err());
        assert!(FlickerConfig::<Item>::new().with_interval(1.5).is_err());
        let config = FlickerConfig::<Item>::new()
            .with_interval(0)
            .expect("zero is a valid interval");
        assert_eq!(config.interval(), Interval::from_millis(0));
    }

    #[test]
    fn test_builder_validate() {
        let strict = FlickerConfig::<Item>::new().with_validation(Validation::Strict);
        assert_eq!(strict.validate(), Err(FlickerError::NothingToRender));

        let with_render = FlickerConfig::<Item>::new()
            .with_validation(Validation::Strict)
            .with_render(|item: &mut Item, _: &Value| item.toggle_visible());
        assert!(with_render.validate().is_ok());
    }
}
