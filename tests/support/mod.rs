//! A recording executor for facade tests.

use std::{
    borrow::Cow,
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use optimizely::{ApiError, Client, Executor, Payload, Request, Result};

/// Records every request and answers from a queue, then with `{}`.
#[derive(Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<Request<'static>>>,
    responses: Mutex<VecDeque<std::result::Result<Payload, ApiError>>>,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingExecutor::default())
    }

    pub fn respond_with(&self, payload: Payload) {
        self.responses.lock().unwrap().push_back(Ok(payload));
    }

    pub fn respond_with_json(&self, value: serde_json::Value) {
        self.respond_with(Payload::Json(value));
    }

    pub fn fail_with(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<Request<'static>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(self: &Arc<Self>) -> Client {
        Client::with_executor(self.clone())
    }
}

impl Executor for RecordingExecutor {
    fn execute(&self, request: Request<'_>) -> Result<Payload> {
        self.requests.lock().unwrap().push(Request {
            method: request.method,
            endpoint: Cow::Owned(request.endpoint.into_owned()),
            query: request.query,
            body: request.body,
            headers: request.headers,
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(payload)) => Ok(payload),
            Some(Err(error)) => Err(error.into()),
            None => Ok(Payload::empty()),
        }
    }
}
