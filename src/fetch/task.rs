use std::sync::{Arc, mpsc};

use crate::{
    fetch::fetcher::SvgFetcher, foundation::error::HandscriptResult,
    path::extract::extract_first_path_d,
};

/// Completed retrieval delivered back to the owning component.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Reference the retrieval was started for.
    pub reference: String,
    /// Generation of the request; only the latest generation is applied.
    pub generation: u64,
    /// Extracted path data or the failure.
    pub result: HandscriptResult<String>,
}

/// Spawns retrievals on background threads and collects their outcomes.
///
/// The receiving half is owned here; dropping the queue makes late `send`s fail, which the worker
/// ignores, so nothing observes a result after teardown.
pub struct FetchQueue {
    fetcher: Arc<dyn SvgFetcher>,
    tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
    generation: u64,
    in_flight: usize,
}

impl std::fmt::Debug for FetchQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchQueue")
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl FetchQueue {
    /// Queue that retrieves through `fetcher`.
    pub fn new(fetcher: Arc<dyn SvgFetcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            fetcher,
            tx,
            rx,
            generation: 0,
            in_flight: 0,
        }
    }

    /// Number of retrievals started but not yet received.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start retrieving `reference`; supersedes any earlier request.
    pub fn request(&mut self, reference: &str) -> u64 {
        self.generation += 1;
        self.in_flight += 1;
        let generation = self.generation;
        let reference = reference.to_string();
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();

        tracing::debug!(%reference, generation, "starting svg retrieval");
        std::thread::spawn(move || {
            let result = fetcher
                .fetch(&reference)
                .and_then(|text| extract_first_path_d(&text));
            let outcome = FetchOutcome {
                reference,
                generation,
                result,
            };
            if tx.send(outcome).is_err() {
                tracing::trace!(generation, "svg retrieval finished after teardown");
            }
        });
        generation
    }

    /// Drain finished retrievals without blocking. Superseded generations are dropped.
    pub fn drain(&mut self) -> Vec<FetchOutcome> {
        let mut out = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            self.accept(outcome, &mut out);
        }
        out
    }

    /// Block up to `timeout` for the latest retrieval, then drain whatever else finished.
    pub fn wait(&mut self, timeout: std::time::Duration) -> Vec<FetchOutcome> {
        let deadline = std::time::Instant::now() + timeout;
        let mut out = Vec::new();
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    let latest = outcome.generation == self.generation;
                    self.accept(outcome, &mut out);
                    if latest {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        out.extend(self.drain());
        out
    }

    fn accept(&mut self, outcome: FetchOutcome, out: &mut Vec<FetchOutcome>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if outcome.generation == self.generation {
            out.push(outcome);
        } else {
            tracing::debug!(
                generation = outcome.generation,
                latest = self.generation,
                "dropping superseded svg retrieval"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/task.rs"]
mod tests;
