use regex::Regex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ContentRetryCondition {
    pub pattern: String,
    pub is_regex: bool,
}

#[derive(Debug, Clone)]
pub enum RetryCondition {
    StatusCode(u16),
    Content(ContentRetryCondition),
}

#[derive(Debug, Clone, Copy)]
pub enum BackoffPolicy {
    Constant,
    Linear,
    Exponential { factor: f32 },
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::Exponential { factor: 2.0 }
    }
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub retry_conditions: Vec<RetryCondition>,
    pub backoff_policy: BackoffPolicy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            retry_conditions: vec![
                RetryCondition::StatusCode(408),
                RetryCondition::StatusCode(429),
                RetryCondition::StatusCode(500),
                RetryCondition::StatusCode(502),
                RetryCondition::StatusCode(503),
                RetryCondition::StatusCode(504),
                RetryCondition::Content(ContentRetryCondition {
                    pattern: "bot detected".to_string(),
                    is_regex: false,
                }),
            ],
            backoff_policy: BackoffPolicy::default(),
        }
    }
}

impl RetryConfig {
    /// Returns the delay before the next attempt, or `None` when the
    /// response should be accepted as-is (no condition matched, or the
    /// retry budget is spent).
    pub fn next_delay(&self, status: u16, body: &str, attempt: usize) -> Option<Duration> {
        if attempt >= self.max_retries {
            return None;
        }
        if !self.matches(status, body) {
            return None;
        }
        Some(self.delay_for(attempt))
    }

    fn matches(&self, status: u16, body: &str) -> bool {
        self.retry_conditions.iter().any(|condition| match condition {
            RetryCondition::StatusCode(code) => *code == status,
            RetryCondition::Content(content) => {
                if content.is_regex {
                    Regex::new(&content.pattern)
                        .map(|regex| regex.is_match(body))
                        .unwrap_or(false)
                } else {
                    body.to_lowercase().contains(&content.pattern.to_lowercase())
                }
            }
        })
    }

    fn delay_for(&self, attempt: usize) -> Duration {
        if attempt == 0 {
            return self.initial_delay;
        }

        let delay = match self.backoff_policy {
            BackoffPolicy::Constant => self.initial_delay,
            BackoffPolicy::Linear => self.initial_delay.mul_f32(attempt as f32 + 1.0),
            BackoffPolicy::Exponential { factor } => {
                self.initial_delay.mul_f32(factor.powi(attempt as i32))
            }
        };

        std::cmp::min(delay, self.max_delay)
    }
}
