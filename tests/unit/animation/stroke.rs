use super::*;

fn secs(v: f64) -> Duration {
    Duration::from_secs_f64(v)
}

#[test]
fn idle_offset_is_dash_array() {
    let anim = StrokeAnimation::new(2000.0, Ease::InOut).unwrap();
    assert_eq!(anim.phase(), Phase::Idle);
    assert_eq!(anim.offset_at(secs(10.0)), 2000.0);
    assert_eq!(anim.progress_at(secs(10.0)), 0.0);
}

#[test]
fn reaches_zero_after_duration() {
    let mut anim = StrokeAnimation::new(2000.0, Ease::InOut).unwrap();
    anim.start(secs(3.0), Duration::ZERO);
    assert_eq!(anim.phase(), Phase::Animating);
    assert_eq!(anim.tick(Duration::ZERO), 2000.0);

    let mid = anim.tick(secs(1.5));
    assert!((mid - 1000.0).abs() < 0.5, "mid = {mid}");
    assert_eq!(anim.phase(), Phase::Animating);

    assert_eq!(anim.tick(secs(3.0)), 0.0);
    assert_eq!(anim.phase(), Phase::Complete);
    assert_eq!(anim.tick(secs(30.0)), 0.0);
}

#[test]
fn offset_is_monotonic_non_increasing() {
    let mut anim = StrokeAnimation::new(500.0, Ease::InOut).unwrap();
    anim.start(secs(1.0), Duration::ZERO);
    let mut prev = f64::INFINITY;
    for ms in (0..=1000).step_by(50) {
        let v = anim.offset_at(Duration::from_millis(ms));
        assert!(v <= prev);
        prev = v;
    }
}

#[test]
fn restart_continues_from_current_offset() {
    let mut anim = StrokeAnimation::new(1000.0, Ease::Linear).unwrap();
    anim.start(secs(2.0), Duration::ZERO);
    assert!((anim.offset_at(secs(1.0)) - 500.0).abs() < 1e-9);

    anim.start(secs(4.0), secs(1.0));
    assert_eq!(anim.phase(), Phase::Animating);
    assert_eq!(anim.duration(), Some(secs(4.0)));
    assert!((anim.offset_at(secs(1.0)) - 500.0).abs() < 1e-9);
    assert!((anim.offset_at(secs(3.0)) - 250.0).abs() < 1e-9);
    assert_eq!(anim.tick(secs(5.0)), 0.0);
    assert_eq!(anim.phase(), Phase::Complete);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut anim = StrokeAnimation::new(2000.0, Ease::InOut).unwrap();
    anim.start(Duration::ZERO, secs(1.0));
    assert_eq!(anim.phase(), Phase::Complete);
    assert_eq!(anim.offset_at(secs(1.0)), 0.0);
}

#[test]
fn restart_after_complete_stays_complete() {
    let mut anim = StrokeAnimation::new(100.0, Ease::Linear).unwrap();
    anim.start(secs(1.0), Duration::ZERO);
    anim.tick(secs(2.0));
    anim.start(secs(5.0), secs(2.0));
    assert_eq!(anim.phase(), Phase::Complete);
    assert_eq!(anim.offset_at(secs(3.0)), 0.0);
}

#[test]
fn rejects_bad_inputs() {
    assert!(StrokeAnimation::new(0.0, Ease::Linear).is_err());
    assert!(StrokeAnimation::new(f64::NAN, Ease::Linear).is_err());
    assert!(StrokeAnimation::new(0.0004, Ease::Linear).is_err());
    assert!(StrokeAnimation::new(0.001, Ease::Linear).is_ok());
    assert!(duration_from_secs(-1.0).is_err());
    assert!(duration_from_secs(f64::INFINITY).is_err());
    assert_eq!(duration_from_secs(1.5).unwrap(), Duration::from_millis(1500));
}

#[test]
fn span_reports_elapsed_capped() {
    let mut anim = StrokeAnimation::new(800.0, Ease::InOut).unwrap();
    assert_eq!(anim.span_at(secs(1.0)), None);

    anim.start(secs(2.0), secs(1.0));
    let span = anim.span_at(secs(1.5)).unwrap();
    assert_eq!(span.from, 800.0);
    assert_eq!(span.duration, secs(2.0));
    assert_eq!(span.elapsed, secs(0.5));
    assert_eq!(anim.span_at(secs(10.0)).unwrap().elapsed, secs(2.0));
}
