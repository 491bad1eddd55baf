use crate::build_planning::domain::LinkOutcome;
use crate::ports::outbound::LinkChecker;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// HttpLinkChecker adapter probing Dockerfile URLs over HTTP
///
/// This adapter implements the LinkChecker port with an async reqwest
/// client. A link is reachable when a GET request ends with a success
/// status after redirects; anything else, including transport errors, is
/// reported as broken. There are no retries.
pub struct HttpLinkChecker {
    client: reqwest::Client,
}

impl HttpLinkChecker {
    /// Creates a checker with the transport's default timeout behavior
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Creates a checker that gives up on a request after `timeout`
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dockerfile-build-helper/{}", version);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

// Note: no Default implementation, client creation can fail.
// Use HttpLinkChecker::new() explicitly and handle the Result.

#[async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn check(&self, url: &str) -> LinkOutcome {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => LinkOutcome::Reachable,
            Ok(response) => LinkOutcome::Broken {
                reason: format!("HTTP {}", response.status()),
            },
            Err(e) => LinkOutcome::Broken {
                reason: e.to_string(),
            },
        }
    }
}
