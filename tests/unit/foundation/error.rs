use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HandscriptError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HandscriptError::fetch("x")
            .to_string()
            .contains("fetch error:")
    );
    assert!(HandscriptError::svg("x").to_string().contains("svg error:"));
    assert!(
        HandscriptError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HandscriptError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
