use ratatui::{layout::Flex, prelude::*, widgets::Paragraph};

use crate::{component::Item, presentation::Styles};

/// Draws an [`Item`] centered in its area, styled by its class list.
/// A hidden item leaves the area blank.
pub struct ItemWidget<'a> {
    item: &'a Item,
    styles: &'a Styles,
}

impl<'a> ItemWidget<'a> {
    pub fn new(item: &'a Item, styles: &'a Styles) -> Self {
        Self { item, styles }
    }
}

impl<'a> Widget for ItemWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if !self.item.is_visible() {
            return;
        }

        let width = u16::try_from(Span::raw(self.item.text()).width())
            .unwrap_or(u16::MAX)
            .min(area.width);
        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(line);

        Paragraph::new(self.item.text())
            .style(self.styles.for_classes(self.item.class_list()))
            .render(cell, buf);
    }
}
