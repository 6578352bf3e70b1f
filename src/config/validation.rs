//! Configuration validation
//!
//! Zero intervals and empty paths are already rejected by the types. This
//! checks the remaining semantic limits.

use anyhow::Result;

use super::types::Config;

/// Below this the redraw noticeably competes with the input reader
const MIN_RECOMMENDED_REFRESH_MS: u64 = 50;

/// Above this rates go stale between frames
const MAX_REFRESH_MS: u64 = 10_000;

impl Config {
    /// Validate configuration for correctness
    pub fn validate(&self) -> Result<()> {
        let refresh = self.display.refresh_interval_ms.get();

        if refresh > MAX_REFRESH_MS {
            return Err(anyhow::anyhow!(
                "display.refresh_interval_ms is {}ms; must be at most {}ms",
                refresh,
                MAX_REFRESH_MS
            ));
        }

        if refresh < MIN_RECOMMENDED_REFRESH_MS {
            tracing::warn!(
                "display.refresh_interval_ms is {}ms (< {}ms). \
                 The table will redraw very often; consider a larger interval.",
                refresh,
                MIN_RECOMMENDED_REFRESH_MS
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RefreshIntervalMs;

    fn with_refresh(ms: u64) -> Config {
        let mut config = Config::default();
        config.display.refresh_interval_ms = RefreshIntervalMs::try_new(ms).unwrap();
        config
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_fast_refresh_only_warns() {
        assert!(with_refresh(10).validate().is_ok());
    }

    #[test]
    fn test_slow_refresh_rejected() {
        assert!(with_refresh(10_000).validate().is_ok());
        let err = with_refresh(10_001).validate().unwrap_err();
        assert!(err.to_string().contains("at most 10000ms"));
    }
}
