use crate::{foundation::error::HandscriptResult, path::default::DEFAULT_PATH};

/// Path inputs supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSpec {
    /// Literal SVG path data.
    pub literal: Option<String>,
    /// Reference (URL or file path) to an external SVG document.
    pub external: Option<String>,
}

/// Where the active path came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSource {
    /// `d` of the first `<path>` of the fetched external document.
    External,
    /// Caller-supplied literal path.
    Literal,
    /// Built-in default cursive path.
    Default,
}

/// The single path string selected for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivePath<'a> {
    /// SVG path data.
    pub d: &'a str,
    /// Origin of `d`.
    pub source: PathSource,
}

/// Resolves literal/external/default precedence for one component instance.
#[derive(Clone, Debug)]
pub struct PathResolver {
    spec: PathSpec,
    fetched: Option<String>,
}

impl PathResolver {
    /// Create a resolver with no external content loaded yet.
    pub fn new(spec: PathSpec) -> Self {
        Self {
            spec,
            fetched: None,
        }
    }

    /// External reference that a retrieval should currently target.
    pub fn external(&self) -> Option<&str> {
        self.spec.external.as_deref()
    }

    /// Active path: fetched external content, else the literal, else the default.
    pub fn active(&self) -> ActivePath<'_> {
        if let Some(d) = self.fetched.as_deref() {
            return ActivePath {
                d,
                source: PathSource::External,
            };
        }
        match self.spec.literal.as_deref() {
            Some(d) => ActivePath {
                d,
                source: PathSource::Literal,
            },
            None => ActivePath {
                d: DEFAULT_PATH,
                source: PathSource::Default,
            },
        }
    }

    /// Replace the inputs. Returns `true` if the external reference changed, in which case
    /// previously fetched content is dropped and a new retrieval is due.
    pub fn set_spec(&mut self, spec: PathSpec) -> bool {
        let external_changed = spec.external != self.spec.external;
        if external_changed {
            self.fetched = None;
        }
        self.spec = spec;
        external_changed
    }

    /// Apply the outcome of a retrieval for `reference`. Returns `true` if the active path
    /// changed.
    ///
    /// Outcomes for a reference other than the current one are discarded. Failures are logged
    /// and leave the active path untouched.
    #[tracing::instrument(skip(self, outcome))]
    pub fn apply_fetched(&mut self, reference: &str, outcome: HandscriptResult<String>) -> bool {
        if self.spec.external.as_deref() != Some(reference) {
            tracing::debug!("discarding stale svg result");
            return false;
        }
        match outcome {
            Ok(d) => {
                let changed = self.fetched.as_deref() != Some(d.as_str());
                self.fetched = Some(d);
                changed
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading svg, keeping fallback path");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/resolve.rs"]
mod tests;
