//! Prometheus metrics.
//!
//! Every request is counted by normalised route. Basket routes additionally
//! feed `platter_json_basket_operations_total`, labelled by the basket
//! operation the route performs and whether it succeeded, was rejected (4xx)
//! or failed (5xx).

use std::sync::OnceLock;

use prometheus::{
    Encoder as _, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder, core::Collector,
};
use salvo::{
    handler,
    http::{StatusError, header::CONTENT_TYPE},
    prelude::Response,
};
use tracing::error;

use crate::extensions::*;

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    basket_operations_total: IntCounterVec,
}

static METRICS: OnceLock<Option<Metrics>> = OnceLock::new();

fn metrics() -> Option<&'static Metrics> {
    METRICS
        .get_or_init(|| {
            build_metrics()
                .inspect_err(|source| error!("failed to build metrics registry: {source}"))
                .ok()
        })
        .as_ref()
}

fn register<C>(registry: &Registry, collector: C) -> prometheus::Result<C>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;

    Ok(collector)
}

fn build_metrics() -> prometheus::Result<Metrics> {
    let registry = Registry::new();

    let requests_total = register(
        &registry,
        IntCounterVec::new(
            Opts::new(
                "platter_json_http_requests_total",
                "HTTP requests by method, route and status class.",
            ),
            &["method", "route", "status_class"],
        )?,
    )?;

    let request_duration_seconds = register(
        &registry,
        HistogramVec::new(
            HistogramOpts::new(
                "platter_json_http_request_duration_seconds",
                "HTTP request latency by method and route.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?,
    )?;

    let requests_in_flight = register(
        &registry,
        IntGauge::with_opts(Opts::new(
            "platter_json_http_requests_in_flight",
            "HTTP requests currently being served.",
        ))?,
    )?;

    let basket_operations_total = register(
        &registry,
        IntCounterVec::new(
            Opts::new(
                "platter_json_basket_operations_total",
                "Basket operations by kind and outcome.",
            ),
            &["operation", "outcome"],
        )?,
    )?;

    Ok(Metrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        basket_operations_total,
    })
}

/// Holds the in-flight gauge up for the lifetime of a request.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard(Option<&'static IntGauge>);

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let gauge = metrics().map(|metrics| &metrics.requests_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

/// Record a finished request. `route` must already be normalised.
pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(status_code)])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);

    if let Some(operation) = basket_operation(method, route) {
        metrics
            .basket_operations_total
            .with_label_values(&[operation, outcome(status_code)])
            .inc();
    }
}

/// Basket operation performed by a normalised route, if it is a basket route.
fn basket_operation(method: &str, route: &str) -> Option<&'static str> {
    let operation = match (method, route) {
        ("POST", "/basket") => "create",
        ("GET", "/basket") => "get",
        ("DELETE", "/basket") => "clear",
        ("GET", "/basket/summary") => "summary",
        ("GET", "/basket/count") => "count",
        ("GET", "/basket/restaurants") => "restaurants",
        ("GET", "/basket/validation") => "validate",
        ("POST", "/basket/sync") => "sync",
        ("POST", "/basket/items") => "add_item",
        ("PUT", "/basket/items/{item}") => "update_item",
        ("DELETE", "/basket/items/{item}") => "remove_item",
        ("POST", "/basket/items/{item}/increment") => "increment",
        ("POST", "/basket/items/{item}/decrement") => "decrement",
        ("GET", "/basket/products/{product}") => "product_quantity",
        ("DELETE", "/basket/products/{product}") => "remove_product",
        _ => return None,
    };

    Some(operation)
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

fn outcome(status_code: u16) -> &'static str {
    match status_code {
        400..=499 => "rejected",
        500..=599 => "error",
        _ => "success",
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) -> Result<(), StatusError> {
    let metrics = metrics().ok_or_else(StatusError::internal_server_error)?;

    let encoder = TextEncoder::new();

    let body = encoder
        .encode_to_string(&metrics.registry.gather())
        .or_500("failed to encode metrics")?;

    res.add_header(CONTENT_TYPE, encoder.format_type(), true)
        .or_500("failed to set metrics content type")?;

    res.render(body);

    Ok(())
}
