use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;

use crate::foundation::error::{HandscriptError, HandscriptResult};

/// Retrieves the text of an external SVG document.
///
/// Implementations are called from a background thread and must not touch component state.
pub trait SvgFetcher: Send + Sync {
    /// Fetch the document behind `reference`.
    fn fetch(&self, reference: &str) -> HandscriptResult<String>;
}

/// HTTP(S) fetcher: one GET per call, no retries.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Fetcher with [`Self::DEFAULT_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    /// Fetcher with a custom overall request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgFetcher for HttpFetcher {
    fn fetch(&self, reference: &str) -> HandscriptResult<String> {
        if !is_http(reference) {
            return Err(HandscriptError::fetch(format!(
                "unsupported url scheme in '{reference}'"
            )));
        }
        let response = self.agent.get(reference).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                HandscriptError::fetch(format!("GET {reference} returned status {code}"))
            }
            ureq::Error::Transport(t) => HandscriptError::fetch(format!("GET {reference}: {t}")),
        })?;
        let body = response
            .into_string()
            .with_context(|| format!("read response body from '{reference}'"))?;
        Ok(body)
    }
}

/// Filesystem fetcher resolving references relative to a root directory.
///
/// A `file://` prefix is accepted and stripped.
#[derive(Clone, Debug)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    /// Fetcher rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, reference: &str) -> PathBuf {
        let raw = reference.strip_prefix("file://").unwrap_or(reference);
        let p = Path::new(raw);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }
}

impl SvgFetcher for FileFetcher {
    fn fetch(&self, reference: &str) -> HandscriptResult<String> {
        if reference.trim().is_empty() {
            return Err(HandscriptError::fetch("empty svg reference"));
        }
        let path = self.resolve(reference);
        std::fs::read_to_string(&path)
            .with_context(|| format!("read svg from '{}'", path.display()))
            .map_err(HandscriptError::from)
    }
}

/// Dispatches `http://`/`https://` references to [`HttpFetcher`] and everything else to
/// [`FileFetcher`].
#[derive(Clone, Debug)]
pub struct AutoFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl AutoFetcher {
    /// Build from the two concrete fetchers.
    pub fn new(http: HttpFetcher, file: FileFetcher) -> Self {
        Self { http, file }
    }

    /// Default HTTP settings, files relative to `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self::new(HttpFetcher::new(), FileFetcher::new(root))
    }
}

impl SvgFetcher for AutoFetcher {
    fn fetch(&self, reference: &str) -> HandscriptResult<String> {
        if is_http(reference) {
            self.http.fetch(reference)
        } else {
            self.file.fetch(reference)
        }
    }
}

fn is_http(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/fetcher.rs"]
mod tests;
