//! Class name to style mapping

use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::component::ClassList;

/// Styles keyed by class name, e.g. `"alert": "bold white on red"`.
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(class, spec)| (class, parse_style(&spec)))
            .collect();

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Combined style for an element carrying `classes`, later classes on top.
    pub fn for_classes(&self, classes: &ClassList) -> Style {
        classes
            .iter()
            .filter_map(|class| self.get(class))
            .fold(Style::default(), |style, patch| style.patch(*patch))
    }

    /// Add entries from `defaults` that are not already set.
    pub fn merge_defaults(&mut self, defaults: &Styles) {
        for (class, style) in defaults.iter() {
            self.entry(class.clone()).or_insert(*style);
        }
    }
}

/// Parse `"[modifiers] [fg] [on bg]"`. Unknown words are ignored.
pub fn parse_style(spec: &str) -> Style {
    let lowered = spec.to_lowercase();
    let (foreground, background) = match lowered.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match lowered.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (lowered.as_str(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = Color::from_str(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.and_then(|bg| Color::from_str(bg.trim()).ok()) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}
