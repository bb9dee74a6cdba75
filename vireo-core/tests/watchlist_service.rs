//! Service-level tests for the watchlist task.
//!
//! The scripted source lets fetches complete after chosen delays, so these
//! tests can make a later request's response arrive before an earlier one
//! and check that supersession holds end to end.

mod common;

use std::time::Duration;

use common::{ScriptedSource, init_tracing, settle, wait_for};
use vireo_core::error::CoreError;
use vireo_core::services::watchlist::WatchlistService;
use vireo_model::{MovieID, ShowID, WatchlistPage};

fn page(movies: usize, shows: usize) -> WatchlistPage {
    WatchlistPage {
        movies: (0..movies).map(|_| MovieID::new()).collect(),
        shows: (0..shows).map(|_| ShowID::new()).collect(),
    }
}

#[tokio::test]
async fn a_load_replaces_the_list() {
    init_tracing();
    let source = ScriptedSource::new(vec![
        (Duration::ZERO, Ok(page(2, 1))),
        (Duration::ZERO, Ok(page(0, 3))),
    ]);
    let (handle, _task) = WatchlistService::spawn(source);
    let mut rx = handle.subscribe();

    assert!(handle.state().is_empty());

    handle.load();
    let state = wait_for(&mut rx, |state| !state.is_empty()).await;
    assert_eq!(state.movies.len(), 2);
    assert_eq!(state.shows.len(), 1);
    assert!(!state.is_loading);

    // A reload replaces wholesale; the old movies do not linger.
    handle.load();
    let state = wait_for(&mut rx, |state| state.shows.len() == 3).await;
    assert!(state.movies.is_empty());
    assert!(!state.is_empty());
}

#[tokio::test(start_paused = true)]
async fn the_newest_request_wins_even_when_its_response_arrives_first() {
    init_tracing();
    let slow_page = page(4, 0);
    let fresh_page = page(0, 2);
    let source = ScriptedSource::new(vec![
        (Duration::from_millis(50), Ok(slow_page)),
        (Duration::from_millis(10), Ok(fresh_page.clone())),
    ]);
    let (handle, _task) = WatchlistService::spawn(source);
    let mut rx = handle.subscribe();

    handle.load();
    wait_for(&mut rx, |state| state.is_loading).await;
    settle().await;
    handle.load();

    // The second fetch completes first and wins.
    let state = wait_for(&mut rx, |state| !state.is_loading).await;
    assert_eq!(state.shows, fresh_page.shows);
    assert!(state.movies.is_empty());

    // The first fetch straggles in later and changes nothing.
    tokio::time::sleep(Duration::from_millis(100)).await;
    settle().await;
    let state = handle.state();
    assert_eq!(state.shows, fresh_page.shows);
    assert!(state.movies.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn a_late_stale_failure_does_not_disturb_fresh_data() {
    init_tracing();
    let fresh_page = page(1, 1);
    let source = ScriptedSource::new(vec![
        (
            Duration::from_millis(50),
            Err(CoreError::Fetch("backend down".into())),
        ),
        (Duration::from_millis(10), Ok(fresh_page.clone())),
    ]);
    let (handle, _task) = WatchlistService::spawn(source);
    let mut rx = handle.subscribe();

    handle.load();
    wait_for(&mut rx, |state| state.is_loading).await;
    settle().await;
    handle.load();

    let state = wait_for(&mut rx, |state| !state.is_loading).await;
    assert_eq!(state.movies, fresh_page.movies);
    assert!(state.last_error.is_none());

    tokio::time::sleep(Duration::from_millis(100)).await;
    settle().await;
    let state = handle.state();
    assert_eq!(state.movies, fresh_page.movies);
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn failures_surface_and_clear_on_the_next_successful_load() {
    init_tracing();
    let source = ScriptedSource::new(vec![
        (Duration::ZERO, Err(CoreError::Fetch("offline".into()))),
        (Duration::ZERO, Ok(page(2, 0))),
    ]);
    let (handle, _task) = WatchlistService::spawn(source);
    let mut rx = handle.subscribe();

    handle.load();
    let state = wait_for(&mut rx, |state| state.last_error.is_some()).await;
    assert!(state.last_error.as_ref().unwrap().contains("offline"));
    assert!(state.is_empty());
    assert!(!state.is_loading);

    handle.load();
    let state = wait_for(&mut rx, |state| !state.is_empty()).await;
    assert!(state.last_error.is_none());
    assert_eq!(state.movies.len(), 2);
}

#[tokio::test]
async fn dropping_every_handle_stops_the_task() {
    init_tracing();
    let source = ScriptedSource::new(vec![]);
    let (handle, task) = WatchlistService::spawn(source);

    drop(handle);
    task.await.unwrap();
}
