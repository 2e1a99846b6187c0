use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tokio::sync::Mutex;

use flicker::{
    app::AppRunner,
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    FlickerError, Validation,
};

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn config(flicker: serde_json::Value) -> Config {
    let mut config = Config {
        flicker,
        validation: Some(Validation::Strict),
        ..Config::default()
    };
    config.merge_defaults(&Config::defaults().expect("embedded config parses"));
    config
}

fn setup(
    config: Config,
    events: Vec<Event>,
) -> color_eyre::Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let test_tui = Arc::new(Mutex::new(TestTui::with_events(30, 6, events)?));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::clone(&test_tui) as _;
    Ok((AppRunner::new(config, tui)?, test_tui))
}

#[tokio::test]
async fn test_renders_value_and_quits() {
    let (mut runner, tui) = setup(
        config(json!({ "value": "ALERT", "render": "text" })),
        vec![Event::Resize(30, 6), key('q'), Event::Render],
    )
    .expect("setup");

    runner.run().await.expect("run");

    let tui = tui.lock().await;
    assert_eq!(tui.draw_count(), 1);
    assert_eq!(tui.line(2).trim(), "ALERT");
    assert!(tui.line(5).starts_with("[running] every 500ms"));
    assert!(!runner.flicker().is_active());
}

#[tokio::test]
async fn test_space_toggles_flicker() {
    let (mut runner, tui) = setup(
        config(json!({ "value": "OK", "render": "text", "interval": 250 })),
        vec![key(' '), Event::Render, key(' '), Event::Render],
    )
    .expect("setup");

    runner.run().await.expect("run");

    let tui = tui.lock().await;
    assert_eq!(tui.draw_count(), 2);
    assert!(tui.line(5).starts_with("[running] every 250ms"));
}

#[tokio::test]
async fn test_stopped_status_after_toggle() {
    let (mut runner, tui) = setup(
        config(json!({ "value": "OK", "render": "text" })),
        vec![key(' '), Event::Render],
    )
    .expect("setup");

    runner.run().await.expect("run");
    assert!(tui.lock().await.line(5).starts_with("[stopped]"));
}

#[tokio::test]
async fn test_blink_hides_item_on_first_render() {
    let (mut runner, tui) = setup(
        config(json!({ "value": "ALERT" })),
        vec![Event::Render],
    )
    .expect("setup");

    runner.run().await.expect("run");
    assert_eq!(tui.lock().await.line(2).trim(), "");
}

#[test]
fn test_invalid_record_is_rejected() {
    let mut bad = Config {
        flicker: json!({ "value": "x", "interval": 1.5 }),
        validation: Some(Validation::Strict),
        ..Config::default()
    };
    bad.styles = Config::defaults().expect("embedded config parses").styles;

    let err = setup(bad, vec![]).err().expect("invalid interval");
    assert_eq!(
        err.downcast_ref::<FlickerError>(),
        Some(&FlickerError::InvalidInterval("1.5".to_owned()))
    );
}

#[test]
fn test_lenient_record_falls_back() {
    let lenient = Config {
        flicker: json!({ "value": "x", "interval": 1.5, "render": "spin" }),
        validation: Some(Validation::Lenient),
        ..Config::default()
    };
    let (runner, _tui) = setup(lenient, vec![]).expect("lenient accepts");
    assert_eq!(runner.flicker().interval().as_millis(), 1000);
}
