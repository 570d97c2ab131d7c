//! Per-request spans, request ids, metrics and completion logging.

mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::{
    Request, handler,
    http::{HeaderMap, HeaderName, StatusCode},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Operational endpoints scraped on a timer; tracing them only adds noise.
const UNTRACED_PATHS: [&str; 2] = ["/metrics", "/healthcheck"];

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if UNTRACED_PATHS.contains(&req.uri().path()) {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let route = spans::request_span_name(&method, &path);
    let _in_flight = metrics::InFlightRequestGuard::track();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        otel.name = %route.otel_span_name,
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %req.remote_addr(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    let monitoring = settings::current();

    if monitoring.propagate_parent
        && let Some(parent) = remote_parent(req.headers())
        && let Err(source) = span.set_parent(parent)
    {
        warn!("failed to set parent context on request span: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let elapsed = started.elapsed();
    let status = request_ids::response_status_or_ok(res.status_code);

    metrics::observe_request(
        &method,
        &route.otel_path,
        status.as_u16(),
        elapsed.as_secs_f64(),
    );

    log_completion(&span, status, elapsed, monitoring.slow_request_threshold);
}

fn log_completion(span: &Span, status: StatusCode, elapsed: Duration, slow: Duration) {
    let duration_ms = elapsed.as_millis();
    let threshold_ms = slow.as_millis();

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        if status.is_server_error() {
            error!(status = status.as_u16(), duration_ms, "request.failed");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), duration_ms, "request.rejected");
        } else {
            info!(status = status.as_u16(), duration_ms, "request.completed");
        }

        if duration_ms > threshold_ms {
            warn!(duration_ms, threshold_ms, "request.slow");
        }
    });
}

/// W3C trace context from the caller, if it sent a valid one.
fn remote_parent(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| {
        // Fresh base so a request without headers does not join whatever span
        // happens to be current.
        let context = propagator.extract_with_context(&Context::new(), &RequestHeaders(headers));

        let valid = context.span().span_context().is_valid();

        valid.then_some(context)
    })
}

#[derive(Debug)]
struct RequestHeaders<'a>(&'a HeaderMap);

impl Extractor for RequestHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
