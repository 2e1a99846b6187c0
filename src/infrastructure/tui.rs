//! Terminal hosts
//!
//! The runner only sees [`TuiLike`]: `real` drives a crossterm terminal,
//! `test` a ratatui `TestBackend` fed from a queue.

pub mod real;

use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;

pub type Frame<'a> = ratatui::Frame<'a>;

/// Input the runner reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// Time to draw the next frame.
    Render,
    /// The terminal changed size.
    Resize(u16, u16),
    /// Reading terminal input failed.
    Error,
    /// No more input will arrive.
    Closed,
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    /// Next event, or `None` once the source is exhausted.
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
