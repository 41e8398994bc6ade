use folio_chart::api::{ChartSession, CurveReveal};
use folio_chart::core::{ChartInsets, Viewport, compute_chart_geometry};

fn demo_session() -> ChartSession {
    let mut session = ChartSession::new(Viewport::new(390.0, 220.0));
    session.set_series(
        vec![10.0, 20.0, 14.0, 18.0, 22.0],
        vec![10.0, 18.0, 15.0, 20.0, 19.0],
    );
    session
}

#[test]
fn every_mutation_mints_a_new_token() {
    let mut session = ChartSession::new(Viewport::new(390.0, 220.0));
    let t0 = session.redraw_token();

    let t1 = session.set_series(vec![1.0, 2.0], vec![1.0, 2.0]);
    let t2 = session.set_highlight(1);
    let t3 = session.resize(Viewport::new(800.0, 400.0));
    let t4 = session.set_insets(ChartInsets::default());

    assert!(t0 < t1);
    assert!(t1 < t2);
    assert!(t2 < t3);
    assert!(t3 < t4);
    assert_eq!(session.redraw_token(), t4);
}

#[test]
fn geometry_matches_the_pure_entry_point() {
    let mut session = demo_session();
    session.set_highlight(3);

    let from_session = session.geometry().expect("session geometry");
    let direct = compute_chart_geometry(
        session.bar_values(),
        session.line_values(),
        session.highlight_index(),
        session.insets(),
        session.viewport(),
    )
    .expect("direct geometry");

    assert_eq!(from_session, direct);
}

#[test]
fn geometry_is_recomputed_fresh_after_each_change() {
    let mut session = demo_session();
    session.set_highlight(0);
    let before = session.geometry().expect("geometry");

    session.set_highlight(4);
    let after = session.geometry().expect("geometry");

    let x_before = before.highlight.expect("highlight").marker.x;
    let x_after = after.highlight.expect("highlight").marker.x;
    assert!(x_after > x_before);
    // Bars are untouched by the highlight move.
    assert_eq!(before.bars, after.bars);
}

#[test]
fn stale_reveal_trigger_is_inert() {
    let mut session = demo_session();
    let mut reveal = CurveReveal::default();

    let old = session.set_highlight(1);
    reveal.arm(old);
    assert!(reveal.progress(old, 100.0).is_some());

    // A newer recomputation supersedes the in-flight animation.
    let new = session.set_highlight(2);
    reveal.arm(new);
    assert!(reveal.progress(old, 100.0).is_none());
    assert!(reveal.progress(new, 100.0).is_some());
}

#[test]
fn reveal_progress_is_clamped() {
    let reveal = CurveReveal::new(600.0);
    let token = ChartSession::new(Viewport::new(100.0, 100.0)).redraw_token();

    assert_eq!(reveal.progress(token, -50.0), Some(0.0));
    assert_eq!(reveal.progress(token, 300.0), Some(0.5));
    assert_eq!(reveal.progress(token, 600.0), Some(1.0));
    assert_eq!(reveal.progress(token, 10_000.0), Some(1.0));
    assert!(reveal.is_settled(token, 600.0));
    assert!(!reveal.is_settled(token, 599.0));
}

#[test]
fn non_positive_duration_falls_back_to_default() {
    assert_eq!(
        CurveReveal::new(0.0).duration_ms(),
        CurveReveal::DEFAULT_DURATION_MS
    );
    assert_eq!(
        CurveReveal::new(f64::NAN).duration_ms(),
        CurveReveal::DEFAULT_DURATION_MS
    );
    assert_eq!(CurveReveal::new(250.0).duration_ms(), 250.0);
}

#[test]
fn resting_geometry_is_independent_of_transition_state() {
    // The reveal only gates how much of the curve the host draws; the
    // underlying geometry is always the final resting one.
    let mut session = demo_session();
    let token = session.set_highlight(2);
    let mut reveal = CurveReveal::default();
    reveal.arm(token);

    let mid_flight = session.geometry().expect("geometry");
    assert_eq!(reveal.progress(token, 10.0), Some(10.0 / 600.0));

    let settled = session.geometry().expect("geometry");
    assert!(reveal.is_settled(token, 600.0));
    assert_eq!(mid_flight, settled);
}
