//! Terminal runner
//!
//! Hosts a single flicker: mounts its item, starts it when the terminal is
//! entered and stops it before leaving. Space toggles it, `+`/`-` change the
//! interval, `q`/Esc/Ctrl-C quit.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::Mutex;

use crate::{
    component::{lock, Component, Item},
    flicker::{Flicker, FlickerConfig, RenderRegistry},
    infrastructure::{config::Config, tui},
    presentation::widgets::{ItemWidget, StatusBarWidget},
};

/// Interval change applied by `+` and `-`.
const INTERVAL_STEP_MS: u64 = 100;

pub struct AppRunner {
    config: Config,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    flicker: Flicker<Item>,
    should_quit: bool,
}

impl AppRunner {
    /// Build the flicker from the configured record. Fails on any
    /// configuration error the validation mode does not forgive.
    pub fn new(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Result<Self> {
        let registry = RenderRegistry::builtin();
        let flicker_config =
            FlickerConfig::from_record(&config.flicker, &registry, config.validation())?;
        log::debug!("flicker config: {flicker_config:?}");
        let flicker = Flicker::new(Item::new(), flicker_config)?;

        Ok(Self {
            config,
            tui,
            flicker,
            should_quit: false,
        })
    }

    pub fn flicker(&self) -> &Flicker<Item> {
        &self.flicker
    }

    /// Run until quit or until the event source closes.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.flicker.start()?;

        while !self.should_quit {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            match event {
                Some(event) => self.handle_event(event).await?,
                None => break,
            }
        }

        self.flicker.stop();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    async fn handle_event(&mut self, event: tui::Event) -> Result<()> {
        match event {
            tui::Event::Closed => self.should_quit = true,
            tui::Event::Key(key) => self.handle_key(key)?,
            tui::Event::Render => self.render().await?,
            tui::Event::Resize(w, h) => {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                self.render().await?;
            }
            tui::Event::Error => log::warn!("terminal event error"),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char(' ') => {
                if self.flicker.is_active() {
                    self.flicker.stop();
                } else {
                    self.flicker.start()?;
                }
            }
            KeyCode::Char('+') => {
                let millis = self.flicker.interval().as_millis();
                self.flicker
                    .set_interval(millis.saturating_add(INTERVAL_STEP_MS))?;
            }
            KeyCode::Char('-') => {
                let millis = self.flicker.interval().as_millis();
                self.flicker
                    .set_interval(millis.saturating_sub(INTERVAL_STEP_MS).max(INTERVAL_STEP_MS))?;
            }
            _ => {}
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let item = lock(&self.flicker.item()).clone();
        let status_bar = StatusBarWidget::new(self.flicker.is_active(), self.flicker.interval());
        let styles = &self.config.styles;

        let mut draw = |f: &mut tui::Frame<'_>| {
            let [main, footer] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());
            f.render_widget(ItemWidget::new(&item, styles), main);
            f.render_widget(status_bar.clone(), footer);
        };
        self.tui.lock().await.draw(&mut draw)?;
        Ok(())
    }
}
