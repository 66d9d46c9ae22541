// src/core/net.rs

// Blocking HTTP GET. One request per poll; no retries.

use ureq::{Agent, AgentBuilder};

use crate::config::consts::{CONNECT_TIMEOUT, READ_TIMEOUT, USER_AGENT};
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Fetcher {
    agent: Agent,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        let agent = AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }

    /// GET `url` and return the body. Anything other than `200 OK` is an error.
    pub fn get(&self, url: &str) -> Result<String> {
        let response = match self.agent.get(url).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, r)) => {
                return Err(Error::UnexpectedStatus { code, status: s!(r.status_text()) });
            }
            Err(ureq::Error::Transport(t)) => {
                // ureq's own Display repeats the URL
                let reason = match t.message() {
                    Some(msg) => format!("{}: {msg}", t.kind()),
                    None => t.kind().to_string(),
                };
                return Err(Error::Transport { url: s!(url), reason });
            }
        };

        if response.status() != 200 {
            return Err(Error::UnexpectedStatus {
                code: response.status(),
                status: s!(response.status_text()),
            });
        }

        let body = response.into_string()?;
        logd!("Net: GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}
