//! Observability lifecycle.

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::error;

use crate::config::ServerConfig;

use super::{
    ObservabilityError, logging, otel,
    settings::{self, RequestSettings},
};

/// Keeps the tracer provider alive until [`Observability::shutdown`] flushes it.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    /// Install the log subscriber, and the OTLP exporter when enabled.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::install(RequestSettings::from(&config.observability));

        let tracer_provider = config
            .observability
            .otel_enabled
            .then(|| {
                global::set_text_map_propagator(TraceContextPropagator::new());

                otel::build_tracer_provider(&config.observability)
            })
            .transpose()?;

        logging::init_subscriber(config, tracer_provider.as_ref())?;

        Ok(Self { tracer_provider })
    }

    /// Flush spans still buffered in the batch exporter.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to flush traces on shutdown: {source}");
        }
    }
}
