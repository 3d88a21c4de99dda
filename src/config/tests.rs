#[cfg(test)]
mod config_tests {
    use crate::config::{
        default_collection_delay_ms, default_host, default_log_level, default_lookup_delay_ms,
        default_port, default_service_name, default_submission_delay_ms, default_timeout,
        LatencyConfig, ObservabilityConfig, ServerConfig,
    };
    use std::env;
    use std::time::Duration;

    #[test]
    fn test_default_value_functions() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8080);
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_lookup_delay_ms(), 300);
        assert_eq!(default_collection_delay_ms(), 500);
        assert_eq!(default_submission_delay_ms(), 1500);
        assert_eq!(default_service_name(), "resort-rs");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_server_config_defaults() {
        env::remove_var("RESORT_HOST");
        env::remove_var("RESORT_PORT");
        env::remove_var("RESORT_REQUEST_TIMEOUT_SECONDS");

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_latency_config_from_env() {
        env::set_var("RESORT_LOOKUP_DELAY_MS", "0");
        env::set_var("RESORT_COLLECTION_DELAY_MS", "0");
        env::set_var("RESORT_SUBMISSION_DELAY_MS", "250");

        let config = LatencyConfig::from_env().unwrap();

        assert_eq!(config.lookup_delay_ms, 0);
        assert_eq!(config.collection_delay_ms, 0);
        assert_eq!(config.submission_delay_ms, 250);

        let latency = config.simulated_latency();
        assert_eq!(latency.lookup, Duration::ZERO);
        assert_eq!(latency.submission, Duration::from_millis(250));

        // Clean up
        env::remove_var("RESORT_LOOKUP_DELAY_MS");
        env::remove_var("RESORT_COLLECTION_DELAY_MS");
        env::remove_var("RESORT_SUBMISSION_DELAY_MS");
    }

    #[test]
    fn test_observability_config_from_env() {
        env::set_var("RESORT_SERVICE_NAME", "resort-test");
        env::set_var("RESORT_LOG_LEVEL", "debug");
        env::set_var("RESORT_ENABLE_JSON_LOGGING", "true");

        let config = ObservabilityConfig::from_env().unwrap();

        assert_eq!(config.service_name, "resort-test");
        assert_eq!(config.log_level, "debug");
        assert!(config.enable_json_logging);

        // Clean up
        env::remove_var("RESORT_SERVICE_NAME");
        env::remove_var("RESORT_LOG_LEVEL");
        env::remove_var("RESORT_ENABLE_JSON_LOGGING");
    }
}
