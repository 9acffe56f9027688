use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::{Duration, Instant},
};

use super::*;
use crate::foundation::error::HandscriptError;

struct MapFetcher {
    docs: HashMap<String, String>,
    gate: Mutex<()>,
    completed: AtomicUsize,
}

impl SvgFetcher for MapFetcher {
    fn fetch(&self, reference: &str) -> HandscriptResult<String> {
        let _g = self.gate.lock().unwrap();
        let out = self
            .docs
            .get(reference)
            .cloned()
            .ok_or_else(|| HandscriptError::fetch(format!("no document for {reference}")));
        self.completed.fetch_add(1, Ordering::SeqCst);
        out
    }
}

fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    cond()
}

fn fetcher() -> Arc<MapFetcher> {
    let mut docs = HashMap::new();
    docs.insert(
        "a.svg".to_string(),
        r#"<svg><path d="M0 0 L1 1"/></svg>"#.to_string(),
    );
    docs.insert(
        "b.svg".to_string(),
        r#"<svg><path d="M2 2 L3 3"/></svg>"#.to_string(),
    );
    docs.insert("broken.svg".to_string(), "<svg><path".to_string());
    Arc::new(MapFetcher {
        docs,
        gate: Mutex::new(()),
        completed: AtomicUsize::new(0),
    })
}

#[test]
fn wait_returns_extracted_path() {
    let mut q = FetchQueue::new(fetcher());
    let generation = q.request("a.svg");
    let out = q.wait(Duration::from_secs(5));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].generation, generation);
    assert_eq!(out[0].reference, "a.svg");
    assert_eq!(out[0].result.as_deref().unwrap(), "M0 0 L1 1");
    assert_eq!(q.in_flight(), 0);
}

#[test]
fn failures_are_delivered_as_errors() {
    let mut q = FetchQueue::new(fetcher());
    q.request("broken.svg");
    let out = q.wait(Duration::from_secs(5));
    assert!(matches!(out[0].result, Err(HandscriptError::Svg(_))));

    q.request("missing.svg");
    let out = q.wait(Duration::from_secs(5));
    assert!(matches!(out[0].result, Err(HandscriptError::Fetch(_))));
}

#[test]
fn superseded_requests_are_dropped() {
    let f = fetcher();
    let mut q = FetchQueue::new(f.clone());
    {
        // hold both workers until both requests are issued
        let _g = f.gate.lock().unwrap();
        q.request("a.svg");
        q.request("b.svg");
    }
    let mut got = Vec::new();
    for _ in 0..50 {
        got.extend(q.wait(Duration::from_millis(100)));
        if q.in_flight() == 0 {
            break;
        }
    }
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].reference, "b.svg");
    assert_eq!(got[0].generation, 2);
}

#[test]
fn dropping_queue_with_work_in_flight_is_silent() {
    let f = fetcher();
    let guard = f.gate.lock().unwrap();
    let mut q = FetchQueue::new(f.clone());
    q.request("a.svg");
    drop(q);
    // test handle plus the blocked worker
    assert_eq!(Arc::strong_count(&f), 2);
    drop(guard);

    // the worker fetches, fails to send into the closed channel and exits cleanly
    assert!(wait_until(|| Arc::strong_count(&f) == 1));
    assert_eq!(f.completed.load(Ordering::SeqCst), 1);
}
