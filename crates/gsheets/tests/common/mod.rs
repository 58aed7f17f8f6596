//! Common utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use gsheets::{Request, ServiceRequest, TransportError};

/// Path to a fixture under `tests/fixtures/`.
pub fn fixture_path(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Read a fixture into a string.
pub fn fixture(filename: &str) -> String {
    std::fs::read_to_string(fixture_path(filename))
        .unwrap_or_else(|e| panic!("failed to read fixture {filename}: {e}"))
}

/// Executor that records every request and replays canned responses in order.
#[derive(Default)]
pub struct RecordingService {
    responses: RefCell<VecDeque<Result<String, TransportError>>>,
    requests: RefCell<Vec<Request>>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.into()));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// All requests executed so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl ServiceRequest for RecordingService {
    fn execute(&self, request: &Request) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::other("no canned response left")))
    }
}
