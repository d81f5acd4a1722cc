use std::time::Duration;

use serde::Deserialize;

/// Demo mode: `analyze-pdf` answers with a canned breakdown instead of
/// calling any model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}

impl ScaffoldConfig {
    pub fn demo() -> Self {
        Self {
            enabled: true,
            mock_response_delay_ms: 0,
        }
    }

    pub fn mock_delay(&self) -> Option<Duration> {
        (self.mock_response_delay_ms > 0)
            .then(|| Duration::from_millis(self.mock_response_delay_ms))
    }
}
