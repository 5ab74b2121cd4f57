//! Metrics collection and Prometheus export.
//!
//! Each [`HttpMetrics`] owns its own recorder instead of installing a global
//! one, so independent application instances (and tests) never share samples.

use metrics::{Key, Label, Level, Metadata, Recorder, SharedString};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};
use metrics_process::Collector;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Histogram buckets (seconds) for request durations.
pub const DURATION_BUCKETS: &[f64] = &[0.01, 0.05, 0.1, 0.3, 1.0, 3.0, 10.0];

static METADATA: Metadata<'static> =
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

/// Request counter and latency histogram labelled by `method`, `route`, `code`,
/// the runtime lag gauge, plus the process collector (CPU, memory, file
/// descriptors, threads).
#[derive(Clone)]
pub struct HttpMetrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
    process: Arc<Collector>,
    requests_total: String,
    request_duration: String,
    runtime_lag: String,
}

impl HttpMetrics {
    /// Creates metrics named `<namespace>_http_requests_total` and
    /// `<namespace>_http_request_duration_seconds`, and the gauge
    /// `<namespace>_runtime_lag_seconds`.
    pub fn new(namespace: &str) -> Result<Self, BuildError> {
        let requests_total = format!("{}_http_requests_total", namespace);
        let request_duration = format!("{}_http_request_duration_seconds", namespace);
        let runtime_lag = format!("{}_runtime_lag_seconds", namespace);

        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(Matcher::Full(request_duration.clone()), DURATION_BUCKETS)?
            .build_recorder();
        let handle = recorder.handle();

        recorder.describe_counter(
            requests_total.clone().into(),
            None,
            SharedString::const_str("Total number of HTTP requests"),
        );
        recorder.describe_histogram(
            request_duration.clone().into(),
            None,
            SharedString::const_str("Duration of HTTP requests in seconds"),
        );
        recorder.describe_gauge(
            runtime_lag.clone().into(),
            None,
            SharedString::const_str("Delay between a timer deadline and the runtime polling it, in seconds"),
        );

        let process = Collector::default();
        metrics::with_local_recorder(&recorder, || process.describe());

        Ok(Self {
            recorder: Arc::new(recorder),
            handle,
            process: Arc::new(process),
            requests_total,
            request_duration,
            runtime_lag,
        })
    }

    pub fn record_request(&self, method: &str, route: &str, code: u16, elapsed: Duration) {
        let labels = vec![
            Label::new("method", method.to_string()),
            Label::new("route", route.to_string()),
            Label::new("code", code.to_string()),
        ];

        let counter_key = Key::from_parts(self.requests_total.clone(), labels.clone());
        self.recorder
            .register_counter(&counter_key, &METADATA)
            .increment(1);

        let histogram_key = Key::from_parts(self.request_duration.clone(), labels);
        self.recorder
            .register_histogram(&histogram_key, &METADATA)
            .record(elapsed.as_secs_f64());
    }

    pub fn record_runtime_lag(&self, lag: Duration) {
        let key = Key::from_name(self.runtime_lag.clone());
        self.recorder
            .register_gauge(&key, &METADATA)
            .set(lag.as_secs_f64());
    }

    /// Samples runtime lag every `period` until the returned task is aborted.
    /// The gauge starts at zero so it is exported before the first sample.
    pub fn spawn_lag_monitor(&self, period: Duration) -> JoinHandle<()> {
        self.record_runtime_lag(Duration::ZERO);
        let metrics = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let deadline = ticker.tick().await;
                metrics.record_runtime_lag(deadline.elapsed());
            }
        })
    }

    /// Refreshes process metrics and renders everything in the Prometheus
    /// text exposition format.
    pub fn render(&self) -> String {
        metrics::with_local_recorder(self.recorder.as_ref(), || self.process.collect());
        self.handle.render()
    }

    pub fn requests_total_name(&self) -> &str {
        &self.requests_total
    }

    pub fn request_duration_name(&self) -> &str {
        &self.request_duration
    }

    pub fn runtime_lag_name(&self) -> &str {
        &self.runtime_lag
    }
}

impl std::fmt::Debug for HttpMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMetrics")
            .field("requests_total", &self.requests_total)
            .field("request_duration", &self.request_duration)
            .finish()
    }
}
