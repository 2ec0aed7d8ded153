//! Best-effort outbound sync.
//!
//! Pushes the serialized document to a remote endpoint as a JSON POST.
//! Response status and errors are logged only; there is no retry and no
//! effect on local state.

use log::{debug, error};

use gymlog_domain::{SyncBackend, WorkoutLog};

use crate::document::Document;

pub struct RestSync {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RestSync {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SyncBackend for RestSync {
    fn push(&self, log: &WorkoutLog) {
        match self
            .client
            .post(&self.endpoint)
            .json(&Document::from(log))
            .send()
        {
            Ok(response) => {
                debug!("pushed workout log to {}: {}", self.endpoint, response.status());
            }
            Err(err) => {
                error!("failed to push workout log to {}: {err}", self.endpoint);
            }
        }
    }
}
