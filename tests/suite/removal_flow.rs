//! Fade-then-remove sequencing through the App.

use std::time::Duration;

use ticklist_engine::{App, AppSettings, Intent, Priority, RemovalPhase, UiOptions};

use crate::common::{add_task, visible_texts};

#[test]
fn row_stays_visible_until_fade_completes() {
    let mut app = App::default();
    let id = add_task(&mut app, "Walk dog", Priority::Low);

    app.dispatch(Intent::BeginRemoval(id));
    for _ in 0..4 {
        assert!(app.advance(Duration::from_millis(100)).is_empty());
        assert_eq!(visible_texts(&app), vec!["Walk dog"]);
    }
    assert!(matches!(app.removal_phase(id), RemovalPhase::FadingOut { .. }));

    assert_eq!(app.advance(Duration::from_millis(100)), vec![id]);
    assert!(visible_texts(&app).is_empty());
    assert_eq!(app.removal_phase(id), RemovalPhase::Idle);
}

#[test]
fn opacity_decreases_monotonically() {
    let mut app = App::default();
    let id = add_task(&mut app, "fade", Priority::High);
    app.dispatch(Intent::BeginRemoval(id));

    let mut last = 1.0_f32;
    for _ in 0..9 {
        app.advance(Duration::from_millis(50));
        let opacity = app.rows()[0].opacity;
        assert!(opacity < last, "{opacity} !< {last}");
        last = opacity;
    }
}

#[test]
fn filtered_out_task_still_gets_removed() {
    let mut app = App::default();
    let id = add_task(&mut app, "hidden", Priority::High);
    app.dispatch(Intent::BeginRemoval(id));
    app.dispatch(Intent::SetFilter(Some(Priority::Low)));

    app.advance(Duration::from_millis(500));
    assert!(!app.store().contains(id));
}

#[test]
fn completed_and_open_tasks_are_removed_alike() {
    let mut app = App::default();
    let done = add_task(&mut app, "done", Priority::Medium);
    let open = add_task(&mut app, "open", Priority::Medium);
    app.dispatch(Intent::ToggleComplete(done));

    app.dispatch(Intent::BeginRemoval(done));
    app.dispatch(Intent::BeginRemoval(open));
    assert_eq!(app.advance(Duration::from_millis(500)), vec![done, open]);
    assert!(app.store().is_empty());
}

#[test]
fn configured_fade_length_is_respected() {
    let mut app = App::new(AppSettings {
        fade_duration: Duration::from_millis(100),
        ..AppSettings::default()
    });
    let id = add_task(&mut app, "quick", Priority::Low);
    app.dispatch(Intent::BeginRemoval(id));
    assert_eq!(app.advance(Duration::from_millis(100)), vec![id]);
}

#[test]
fn reduced_motion_skips_visible_fade() {
    let mut app = App::new(AppSettings {
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..AppSettings::default()
    });
    let id = add_task(&mut app, "instant", Priority::High);
    app.dispatch(Intent::BeginRemoval(id));
    assert_eq!(app.advance(Duration::from_millis(1)), vec![id]);
}

#[test]
fn adding_during_fade_does_not_disturb_it() {
    let mut app = App::default();
    let first = add_task(&mut app, "first", Priority::High);
    app.dispatch(Intent::BeginRemoval(first));
    app.advance(Duration::from_millis(250));

    add_task(&mut app, "second", Priority::High);
    assert_eq!(app.advance(Duration::from_millis(250)), vec![first]);
    assert_eq!(visible_texts(&app), vec!["second"]);
}
