//! Server configuration loaded from the environment.

use answer_core::MatchPolicy;

use crate::error::{ApiError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub policy: MatchPolicy,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ApiError::Config(format!("PORT is not a valid port: {}", value)))?,
            None => 3000,
        };

        let mut policy = MatchPolicy::default();
        if let Some(value) = parse_f64(&lookup, "GRADER_NUMERIC_TOLERANCE")? {
            policy.numeric_tolerance = value;
        }
        if let Some(value) = parse_f64(&lookup, "GRADER_FALLBACK_THRESHOLD")? {
            policy.fallback_threshold = value;
        }
        policy
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { host, port, policy })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_f64<F>(lookup: &F, key: &str) -> Result<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ApiError::Config(format!("{} is not a number: {}", key, value)))
        })
        .transpose()
}
