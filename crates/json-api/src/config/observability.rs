//! Logging, Tracing and Request Monitoring Config

use std::time::Duration;

use clap::{Args, ValueEnum};

/// Log line encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals
    Compact,

    /// One JSON object per event, with span context, for log shippers
    Json,
}

/// Log output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Base log level; `RUST_LOG` directives override it entirely
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log line encoding (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Trace export and request monitoring settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Export spans over OTLP
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false)]
    pub otel_enabled: bool,

    /// Continue the caller's trace when a `traceparent` header is present
    #[arg(long, env = "OTEL_PARENT_PROPAGATION_ENABLED", default_value_t = false)]
    pub otel_parent_propagation_enabled: bool,

    /// OTLP gRPC collector endpoint
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", default_value = "http://localhost:4317")]
    pub otel_exporter_otlp_endpoint: String,

    /// Seconds before an export batch is abandoned
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3)]
    pub otel_exporter_otlp_timeout_seconds: u64,

    /// `service.name` resource attribute
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "platter-json")]
    pub otel_service_name: String,

    /// `service.version` resource attribute
    #[arg(long, env = "OTEL_SERVICE_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub otel_service_version: String,

    /// `deployment.environment.name` resource attribute
    #[arg(long, env = "OTEL_DEPLOYMENT_ENVIRONMENT", default_value = "development")]
    pub otel_deployment_environment: String,

    /// Fraction of new traces to sample, clamped to [0.0, 1.0]
    #[arg(long, env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0)]
    pub otel_trace_sample_ratio: f64,

    /// Requests slower than this are logged at `warn`
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl ObservabilityConfig {
    /// Sample ratio limited to the range the sampler accepts.
    #[must_use]
    pub fn trace_sample_ratio(&self) -> f64 {
        self.otel_trace_sample_ratio.clamp(0.0, 1.0)
    }

    /// Parent extraction needs the propagator that is only installed with export.
    #[must_use]
    pub fn propagates_parent(&self) -> bool {
        self.otel_enabled && self.otel_parent_propagation_enabled
    }

    /// Latency above which a request is logged as slow.
    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }

    /// Deadline for a single export batch.
    #[must_use]
    pub fn exporter_timeout(&self) -> Duration {
        Duration::from_secs(self.otel_exporter_otlp_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        observability: ObservabilityConfig,
    }

    #[test]
    fn sample_ratio_is_clamped_to_unit_range() -> TestResult {
        let high = Harness::try_parse_from(["test", "--otel-trace-sample-ratio", "2.5"])?;
        let low = Harness::try_parse_from(["test", "--otel-trace-sample-ratio=-0.3"])?;

        assert!((high.observability.trace_sample_ratio() - 1.0).abs() < f64::EPSILON);
        assert!(low.observability.trace_sample_ratio().abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn parent_propagation_requires_export() -> TestResult {
        let without_export =
            Harness::try_parse_from(["test", "--otel-parent-propagation-enabled"])?;
        let with_export = Harness::try_parse_from([
            "test",
            "--otel-enabled",
            "--otel-parent-propagation-enabled",
        ])?;

        assert!(!without_export.observability.propagates_parent());
        assert!(with_export.observability.propagates_parent());

        Ok(())
    }
}
