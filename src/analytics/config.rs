//! Collector bootstrap settings.
//!
//! Wiring these into a concrete adapter is a process-wide concern owned
//! by the host; the interaction core itself only needs the two port
//! calls. The defaults mirror the landing page's hosted-collector setup.

use serde::{Deserialize, Serialize};

/// Configuration a host passes to its analytics adapter.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Project API key.
    pub api_key: String,
    /// Collector endpoint.
    pub api_host: String,
    /// Capture UI interactions automatically.
    pub autocapture: bool,
    /// Capture an event per page view.
    pub capture_pageview: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            api_key: "phc_placeholder_key".to_string(),
            api_host: "https://app.posthog.com".to_string(),
            autocapture: true,
            capture_pageview: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_bootstrap() {
        let config = AnalyticsConfig::default();

        assert_eq!(config.api_key, "phc_placeholder_key");
        assert_eq!(config.api_host, "https://app.posthog.com");
        assert!(config.autocapture);
        assert!(config.capture_pageview);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AnalyticsConfig {
            api_key: "phc_live_key".to_string(),
            api_host: "https://collector.ovel.dev".to_string(),
            autocapture: false,
            capture_pageview: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AnalyticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
