use clap::Parser;
use serde_json::{Map, Value};

use crate::{utils::version, validation::Validation};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Text to flicker
    #[arg(short, long, value_name = "TEXT")]
    pub value: Option<String>,

    /// Milliseconds between renders
    #[arg(short, long, value_name = "MS", allow_negative_numbers = true)]
    pub interval: Option<i64>,

    /// Extra style classes for the flickering item
    #[arg(short, long, value_name = "NAMES")]
    pub class_name: Option<String>,

    /// Render strategy name (text, blink)
    #[arg(short, long, value_name = "NAME")]
    pub render: Option<String>,

    /// Reject invalid flicker configuration
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Fall back to defaults on invalid flicker configuration
    #[arg(long)]
    pub lenient: bool,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,
}

impl Cli {
    /// Checking mode chosen on the command line, if any.
    pub fn validation(&self) -> Option<Validation> {
        match (self.strict, self.lenient) {
            (true, _) => Some(Validation::Strict),
            (_, true) => Some(Validation::Lenient),
            _ => None,
        }
    }

    /// Flicker record entries given on the command line.
    pub fn flicker_overrides(&self) -> Map<String, Value> {
        let mut overrides = Map::new();
        if let Some(value) = &self.value {
            overrides.insert("value".to_owned(), Value::from(value.as_str()));
        }
        if let Some(interval) = self.interval {
            overrides.insert("interval".to_owned(), Value::from(interval));
        }
        if let Some(class_name) = &self.class_name {
            overrides.insert("className".to_owned(), Value::from(class_name.as_str()));
        }
        if let Some(render) = &self.render {
            overrides.insert("render".to_owned(), Value::from(render.as_str()));
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["flicker"]);
        assert_eq!(cli.frame_rate, 30.0);
        assert!(cli.flicker_overrides().is_empty());
        assert_eq!(cli.validation(), None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "flicker",
            "--value",
            "BUSY",
            "-i",
            "-1",
            "--class-name",
            "warning",
            "--render",
            "text",
            "--lenient",
        ]);
        assert_eq!(
            Value::Object(cli.flicker_overrides()),
            json!({ "value": "BUSY", "interval": -1, "className": "warning", "render": "text" })
        );
        assert_eq!(cli.validation(), Some(Validation::Lenient));
    }

    #[test]
    fn test_strict_flag() {
        let cli = Cli::parse_from(["flicker", "--strict"]);
        assert_eq!(cli.validation(), Some(Validation::Strict));
    }

    #[test]
    fn test_strict_and_lenient_conflict() {
        let err = Cli::try_parse_from(["flicker", "--strict", "--lenient"]).expect_err("conflicting modes");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
