use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Upper bound for a single script evaluation.
    pub evaluate: Duration,
    pub navigation: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            evaluate: Duration::from_millis(5000),
            navigation: Duration::from_millis(30000),
        }
    }
}

impl TimeoutConfig {
    pub fn with_evaluate(mut self, ms: u64) -> Self {
        self.evaluate = Duration::from_millis(ms);
        self
    }

    pub fn with_navigation(mut self, ms: u64) -> Self {
        self.navigation = Duration::from_millis(ms);
        self
    }

    pub fn fast() -> Self {
        Self {
            evaluate: Duration::from_millis(2000),
            navigation: Duration::from_millis(15000),
        }
    }

    pub fn patient() -> Self {
        Self {
            evaluate: Duration::from_millis(15000),
            navigation: Duration::from_millis(60000),
        }
    }
}
