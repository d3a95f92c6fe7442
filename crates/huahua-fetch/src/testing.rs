//! Scripted API and progress doubles shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use huahua_estimate::ProgressReporter;
use huahua_types::{Direction, Page, RawTransaction};

use crate::{FetchError, TxApi};

/// Serves pre-built pages per direction and records every call.
#[derive(Debug, Default)]
pub(crate) struct ScriptedApi {
    pages: HashMap<Direction, Vec<Page>>,
    endless: bool,
    fail_on: Option<(Direction, usize)>,
    calls: Mutex<Vec<(Direction, u64)>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Never reports exhaustion: every call returns one record and a next offset.
    pub(crate) fn endless() -> Self {
        Self {
            endless: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_pages(mut self, direction: Direction, pages: Vec<Page>) -> Self {
        self.pages.insert(direction, pages);
        self
    }

    /// Fails the `call`-th (0-based) request of `direction`.
    pub(crate) fn failing_on(mut self, direction: Direction, call: usize) -> Self {
        self.fail_on = Some((direction, call));
        self
    }

    pub(crate) fn calls(&self) -> Vec<(Direction, u64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxApi for ScriptedApi {
    async fn get_txs(
        &self,
        _address: &str,
        direction: Direction,
        offset: u64,
        limit: u64,
    ) -> Result<Page, FetchError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.iter().filter(|(d, _)| *d == direction).count();
            calls.push((direction, offset));
            index
        };

        if self.fail_on == Some((direction, index)) {
            return Err(FetchError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        if self.endless {
            let record = RawTransaction::new(format!("{direction}-{offset}"), offset as i64);
            return Ok(Page::new(vec![record], Some(offset + limit)));
        }

        Ok(self
            .pages
            .get(&direction)
            .and_then(|pages| pages.get(index))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_tx(&self, txhash: &str) -> Result<RawTransaction, FetchError> {
        Err(FetchError::TxNotFound(txhash.to_string()))
    }

    async fn count_txs(&self, _address: &str, _direction: Direction) -> Result<u64, FetchError> {
        Ok(0)
    }

    async fn account_exists(&self, _address: &str) -> Result<bool, FetchError> {
        Ok(true)
    }

    async fn denom_trace(&self, _hash: &str) -> Result<Option<String>, FetchError> {
        Ok(None)
    }
}

/// Records every notification in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingProgress {
    pub(crate) estimate: Option<u64>,
    pub(crate) pages: Vec<(u64, String)>,
    pub(crate) messages: Vec<String>,
}

impl ProgressReporter for RecordingProgress {
    fn set_estimate(&mut self, total_pages: u64) {
        self.estimate = Some(total_pages);
    }

    fn report(&mut self, current_page: u64, message: &str) {
        self.pages.push((current_page, message.to_string()));
    }

    fn report_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

pub(crate) const ADDRESS: &str = "chihuahua1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnhh5vwy";
