//! Render targets

use std::fmt;

/// A surface a render strategy writes into.
pub trait RenderTarget: Send + 'static {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Tag the target with a style class. Targets without styling ignore it.
    fn add_class(&mut self, _class: &str) {}
}

/// Ordered set of style class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Split `names` on whitespace, dropping duplicates and keeping order.
    pub fn parse(names: &str) -> Self {
        let mut list = Self::default();
        for name in names.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub fn add(&mut self, name: &str) {
        if !name.is_empty() && !self.contains(name) {
            self.0.push(name.to_owned());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Terminal render target: a line of text that can be hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    text: String,
    visible: bool,
    class_list: ClassList,
}

impl Item {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            visible: true,
            class_list: ClassList::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn class_list(&self) -> &ClassList {
        &self.class_list
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for Item {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn add_class(&mut self, class: &str) {
        self.class_list.add(class);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_class_list_parse_dedups_and_keeps_order() {
        let list = ClassList::parse("  flicker alert flicker\twarn ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["flicker", "alert", "warn"]);
        assert_eq!(list.to_string(), "flicker alert warn");
    }

    #[test]
    fn test_class_list_empty() {
        assert!(ClassList::parse("   ").is_empty());
    }

    #[test]
    fn test_item_defaults() {
        let item = Item::default();
        assert_eq!(item.text(), "");
        assert!(item.is_visible());
        assert!(item.class_list().is_empty());
    }

    #[test]
    fn test_item_toggle_visible() {
        let mut item = Item::new();
        item.toggle_visible();
        assert!(!item.is_visible());
        item.toggle_visible();
        assert!(item.is_visible());
    }

    #[test]
    fn test_item_set_text_replaces() {
        let mut item = Item::new();
        item.set_text("ALERT");
        item.set_text("OK");
        assert_eq!(item.text(), "OK");
    }
}
