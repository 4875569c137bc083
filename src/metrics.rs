use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Installs the Prometheus recorder and spawns its upkeep task.
/// Returns `Ok(None)` if observability is disabled.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )?
        .set_buckets_for_metric(
            Matcher::Full("portal_sessions_aggregated".to_string()),
            &[0.0, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0],
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.to_string()).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    let status_category = match status {
        200..=299 => "2xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };
    counter!("http_requests_by_status", "status_category" => status_category).increment(1);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Portal business metrics

pub fn track_login_success(student_count: usize) {
    if !is_observability_enabled() {
        return;
    }
    counter!("portal_logins_total", "status" => "success").increment(1);
    histogram!("portal_login_students").record(student_count as f64);
}

pub fn track_login_failure(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("portal_logins_total", "status" => "failure", "reason" => reason.to_string())
        .increment(1);
}

pub fn track_session_token_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("portal_session_tokens_issued_total").increment(1);
}

pub fn track_session_validation(success: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if success { "valid" } else { "invalid" };
    counter!("portal_session_validations_total", "status" => status).increment(1);
}

/// Sessions returned by one aggregation call.
pub fn track_sessions_aggregated(count: usize) {
    if !is_observability_enabled() {
        return;
    }
    histogram!("portal_sessions_aggregated").record(count as f64);
}

/// A schedule row left out of an aggregation.
pub fn track_session_dropped(reason: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("portal_sessions_dropped_total", "reason" => reason).increment(1);
}

/// The balance report failed and the zeroed report was served instead.
pub fn track_balance_fallback() {
    if !is_observability_enabled() {
        return;
    }
    counter!("portal_balance_fallbacks_total").increment(1);
}

pub fn track_schedule_change_request(source: &'static str, relayed: bool) {
    if !is_observability_enabled() {
        return;
    }
    let relayed = if relayed { "true" } else { "false" };
    counter!("portal_schedule_change_requests_total", "source" => source, "relayed" => relayed)
        .increment(1);
}

/// A portal page rendered with a warning instead of its data.
pub fn track_portal_warning(page: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("portal_page_warnings_total", "page" => page).increment(1);
}
