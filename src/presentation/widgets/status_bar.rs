use ratatui::{layout::Flex, prelude::*, widgets::Paragraph};

use crate::flicker::Interval;

/// One-line footer: running state, interval and key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarWidget {
    active: bool,
    interval: Interval,
}

impl StatusBarWidget {
    pub fn new(active: bool, interval: Interval) -> Self {
        Self { active, interval }
    }

    pub fn message(&self) -> String {
        let state = if self.active { "running" } else { "stopped" };
        format!(
            "[{state}] every {}ms  space: start/stop  q: quit",
            self.interval.as_millis()
        )
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::End)
            .areas(area);
        Paragraph::new(self.message().dim()).render(line, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let running = StatusBarWidget::new(true, Interval::from_millis(500));
        assert_eq!(
            running.message(),
            "[running] every 500ms  space: start/stop  q: quit"
        );
        let stopped = StatusBarWidget::new(false, Interval::DEFAULT);
        assert!(stopped.message().starts_with("[stopped] every 1000ms"));
    }

    #[test]
    fn test_render_on_last_row() {
        let widget = StatusBarWidget::new(true, Interval::from_millis(500));
        let area = Rect::new(0, 0, 60, 3);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let last: String = (0..area.width)
            .map(|x| buffer[(x, 2)].symbol())
            .collect();
        assert!(last.starts_with("[running] every 500ms"));
        let first: String = (0..area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect();
        assert_eq!(first.trim(), "");
    }
}
