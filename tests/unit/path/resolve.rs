use super::*;
use crate::foundation::error::HandscriptError;

fn spec(literal: Option<&str>, external: Option<&str>) -> PathSpec {
    PathSpec {
        literal: literal.map(str::to_string),
        external: external.map(str::to_string),
    }
}

#[test]
fn default_when_nothing_supplied() {
    let r = PathResolver::new(PathSpec::default());
    assert_eq!(r.active().d, DEFAULT_PATH);
    assert_eq!(r.active().source, PathSource::Default);
}

#[test]
fn literal_wins_over_default() {
    let r = PathResolver::new(spec(Some("M0 0 L100 100"), None));
    assert_eq!(r.active().d, "M0 0 L100 100");
    assert_eq!(r.active().source, PathSource::Literal);
}

#[test]
fn pending_external_uses_literal_then_fetched_overrides() {
    let mut r = PathResolver::new(spec(Some("M0 0 L1 1"), Some("a.svg")));
    assert_eq!(r.active().source, PathSource::Literal);

    assert!(r.apply_fetched("a.svg", Ok("M5 5 L6 6".to_string())));
    assert_eq!(r.active().d, "M5 5 L6 6");
    assert_eq!(r.active().source, PathSource::External);

    // same content again is not a change
    assert!(!r.apply_fetched("a.svg", Ok("M5 5 L6 6".to_string())));
}

#[test]
fn failures_are_idempotent() {
    let mut r = PathResolver::new(spec(None, Some("http://unreachable.invalid/x.svg")));
    for _ in 0..3 {
        let changed = r.apply_fetched(
            "http://unreachable.invalid/x.svg",
            Err(HandscriptError::fetch("connection refused")),
        );
        assert!(!changed);
        assert_eq!(r.active().d, DEFAULT_PATH);
    }
}

#[test]
fn stale_reference_is_discarded() {
    let mut r = PathResolver::new(spec(None, Some("old.svg")));
    assert!(r.set_spec(spec(None, Some("new.svg"))));
    assert!(!r.apply_fetched("old.svg", Ok("M1 1 L2 2".to_string())));
    assert_eq!(r.active().source, PathSource::Default);
}

#[test]
fn changing_reference_drops_fetched_content() {
    let mut r = PathResolver::new(spec(Some("M0 0 L1 1"), Some("a.svg")));
    r.apply_fetched("a.svg", Ok("M9 9 L8 8".to_string()));
    assert!(r.set_spec(spec(Some("M0 0 L1 1"), None)));
    assert_eq!(r.active().source, PathSource::Literal);

    // literal-only change keeps external state
    let mut r = PathResolver::new(spec(None, Some("a.svg")));
    r.apply_fetched("a.svg", Ok("M9 9 L8 8".to_string()));
    assert!(!r.set_spec(spec(Some("M3 3 L4 4"), Some("a.svg"))));
    assert_eq!(r.active().d, "M9 9 L8 8");
}
