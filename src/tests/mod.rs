use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use crate::prelude::*;

mod validation;
mod exchange;
mod browse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: u64
}

/// Transport replaying scripted responses in order and recording sent requests
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<(i32, String), QueryError>>>,
    requests: RefCell<Vec<SentRequest>>
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: i32, body: impl ToString) -> Self {
        self.responses.borrow_mut().push_back(Ok((status, body.to_string())));

        self
    }

    pub fn ok(self, body: impl ToString) -> Self {
        self.respond(200, body)
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(QueryError::Network(message.to_string())));

        self
    }

    pub fn requests(&self) -> Vec<SentRequest> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter()
            .map(|request| request.url.clone())
            .collect()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: u64) -> Result<RawResponse, QueryError> {
        self.requests.borrow_mut().push(SentRequest {
            url: url.to_string(),
            headers: headers.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            timeout
        });

        let (status, body) = self.responses.borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(QueryError::Network(format!("no response scripted for {url}"))))?;

        Ok(RawResponse {
            url: url.to_string(),
            status,
            body: body.into_bytes()
        })
    }
}

pub const TEST_USER_AGENT: &str = "rswiki-api tests - tests@example.com";

pub fn test_config() -> ClientConfig {
    ClientConfig::new(TEST_USER_AGENT)
        .with_timeout(3)
        .with_ask_delay(Duration::ZERO)
}

pub fn client(transport: MockTransport) -> Client<MockTransport> {
    Client::with_transport(test_config(), transport)
}
