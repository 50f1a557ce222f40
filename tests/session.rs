pub mod test_utils;

use route_tracker::{
    Coordinate, Error, MapSession, MemoryRouteStore, RouteStore, SqliteRouteStore, TrackingMode,
};
use tempdir::TempDir;
use test_utils::{coordinates, FailingStore, RecordingView};

fn record_route<S: RouteStore>(session: &mut MapSession<S, RecordingView>, pairs: &[(f64, f64)]) {
    session.toggle_tracking().unwrap();
    for coordinate in coordinates(pairs) {
        let mode = session.mode();
        session.on_location_update(coordinate, mode);
    }
    session.toggle_tracking().unwrap();
}

#[test]
fn records_route_through_location_updates() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    assert_eq!(session.mode(), TrackingMode::Idle);

    session.toggle_tracking().unwrap();
    assert_eq!(session.mode(), TrackingMode::Tracking);
    assert!(session.on_location_update(Coordinate::new(55.75, 37.61), TrackingMode::Tracking));
    assert!(session.on_location_update(Coordinate::new(55.76, 37.62), TrackingMode::Tracking));
    session.toggle_tracking().unwrap();
    assert_eq!(session.mode(), TrackingMode::Idle);

    assert_eq!(session.last_location(), Some(Coordinate::new(55.76, 37.62)));
    let (store, view) = session.into_parts();
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(
        store.get(0).unwrap().coordinates(),
        coordinates(&[(55.75, 37.61), (55.76, 37.62)]).as_slice()
    );
    assert_eq!(view.centered_on.len(), 2);
    assert_eq!(view.tracking_updates.len(), 2);
    assert!(view.tracking_updates[0].highlight);
    assert!(!view.tracking_updates[1].highlight);
}

#[test]
fn updates_while_browsing_are_rejected() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    record_route(&mut session, &[(1.0, 1.0)]);
    assert!(session.show_history().unwrap());
    assert_eq!(session.mode(), TrackingMode::BrowsingHistory);

    let mode = session.mode();
    assert!(!session.on_location_update(Coordinate::new(5.0, 5.0), mode));
    assert_eq!(session.last_location(), Some(Coordinate::new(1.0, 1.0)));
    assert_eq!(session.view().centered_on.len(), 1);
}

#[test]
fn idle_updates_recenter_without_recording() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    assert!(session.on_location_update(Coordinate::new(1.0, 1.0), TrackingMode::Idle));
    assert_eq!(session.last_location(), Some(Coordinate::new(1.0, 1.0)));
    assert_eq!(session.store().count().unwrap(), 0);
    assert!(session.tracker().current_samples().is_empty());
}

#[test]
fn history_pages_from_newest_to_oldest() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    record_route(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
    record_route(&mut session, &[(10.0, 10.0)]);

    assert!(session.show_history().unwrap());
    assert_eq!(session.history_index(), Some(1));
    assert!(!session.next_route().unwrap());
    assert!(session.previous_route().unwrap());
    assert_eq!(session.history_index(), Some(0));
    assert!(!session.previous_route().unwrap());

    let shown = &session.view().shown;
    assert_eq!(shown.len(), 2);
    let (index, summary, nav) = &shown[0];
    assert_eq!(*index, 1);
    assert_eq!(summary.coordinates, coordinates(&[(10.0, 10.0)]));
    assert!(nav.can_go_prev);
    assert!(!nav.can_go_next);
    let (index, summary, nav) = &shown[1];
    assert_eq!(*index, 0);
    assert_eq!(summary.midpoint, Some(Coordinate::new(0.0, 0.0)));
    assert!(!nav.can_go_prev);
    assert!(nav.can_go_next);

    session.close_history();
    assert_eq!(session.mode(), TrackingMode::Idle);
    assert_eq!(session.view().cleared, 1);
}

#[test]
fn empty_history_notifies() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    assert!(!session.show_history().unwrap());
    assert_eq!(session.mode(), TrackingMode::Idle);
    assert_eq!(session.view().notices.len(), 1);
}

#[test]
fn history_is_unavailable_while_recording() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    record_route(&mut session, &[(1.0, 1.0)]);
    session.start_tracking();
    assert!(!session.show_history().unwrap());
    assert_eq!(session.mode(), TrackingMode::Tracking);
}

#[test]
fn starting_to_track_closes_history() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    record_route(&mut session, &[(1.0, 1.0)]);
    session.show_history().unwrap();
    session.start_tracking();
    assert_eq!(session.mode(), TrackingMode::Tracking);
    assert_eq!(session.history_index(), None);
}

#[test]
fn show_history_at_checks_index() {
    let mut session = MapSession::new(MemoryRouteStore::new(), RecordingView::default());
    record_route(&mut session, &[(1.0, 1.0)]);
    assert!(matches!(
        session.show_history_at(1),
        Err(Error::IndexOutOfRange { index: 1, count: 1 })
    ));
    session.show_history_at(0).unwrap();
    assert_eq!(session.history_index(), Some(0));
}

#[test]
fn delete_all_clears_history() {
    let temp_dir = TempDir::new("session-delete_all").unwrap();
    let store = SqliteRouteStore::open(temp_dir.path().join("routes.db")).unwrap();
    let mut session = MapSession::new(store, RecordingView::default());
    record_route(&mut session, &[(1.0, 1.0), (1.1, 1.1)]);
    record_route(&mut session, &[(2.0, 2.0)]);
    assert_eq!(session.store().count().unwrap(), 2);

    session.show_history().unwrap();
    session.delete_all_routes().unwrap();
    assert_eq!(session.store().count().unwrap(), 0);
    assert_eq!(session.mode(), TrackingMode::Idle);
    assert!(!session.show_history().unwrap());
}

#[test]
fn failed_save_is_reported_once() {
    let mut session = MapSession::new(FailingStore::default(), RecordingView::default());
    session.toggle_tracking().unwrap();
    session.on_location_update(Coordinate::new(1.0, 1.0), TrackingMode::Tracking);
    assert!(matches!(
        session.toggle_tracking(),
        Err(Error::PersistenceWriteFailure(_))
    ));

    assert_eq!(session.mode(), TrackingMode::Idle);
    let view = session.view();
    assert_eq!(view.notices.len(), 1);
    assert!(!view.tracking_updates.last().unwrap().highlight);
    assert_eq!(session.store().attempts, 1);
}

#[test]
fn failed_delete_is_reported_once() {
    let mut session = MapSession::new(FailingStore::default(), RecordingView::default());
    assert!(matches!(
        session.delete_all_routes(),
        Err(Error::PersistenceWriteFailure(_))
    ));

    let view = session.view();
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.cleared, 0);
}
