pub trait BackendPool: Send + Sync {
    fn select(&self, index: usize) -> &str;

    fn backends(&self) -> &[String];
}

/// `backends[index % len]`, with no awareness of earlier failures.
#[derive(Debug, Clone)]
pub struct RoundRobinBackendPool {
    backends: Vec<String>,
}

impl RoundRobinBackendPool {
    pub fn new(backends: Vec<String>) -> Result<Self, BackendPoolError> {
        let backends: Vec<String> = backends
            .into_iter()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();

        if backends.is_empty() {
            return Err(BackendPoolError::Empty);
        }

        Ok(Self { backends })
    }
}

impl BackendPool for RoundRobinBackendPool {
    fn select(&self, index: usize) -> &str {
        &self.backends[index % self.backends.len()]
    }

    fn backends(&self) -> &[String] {
        &self.backends
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendPoolError {
    #[error("backend pool needs at least one model identifier")]
    Empty,
}
