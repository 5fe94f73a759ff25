use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_REJECTED: &str = "rejected";

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub trip_plans_total: IntCounterVec,
    pub trip_plan_duration_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let trip_plans_total = IntCounterVec::new(
            Opts::new("trip_plans_total", "Total trip plan requests by outcome"),
            &["outcome"],
        )
        .expect("valid trip_plans_total metric");

        let trip_plan_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "trip_plan_duration_seconds",
                "Time spent building a trip plan in seconds",
            ),
            &["outcome"],
        )
        .expect("valid trip_plan_duration_seconds metric");

        registry
            .register(Box::new(trip_plans_total.clone()))
            .expect("register trip_plans_total");
        registry
            .register(Box::new(trip_plan_duration_seconds.clone()))
            .expect("register trip_plan_duration_seconds");

        Self {
            registry,
            trip_plans_total,
            trip_plan_duration_seconds,
        }
    }

    pub fn observe_plan(&self, outcome: &str, elapsed_secs: f64) {
        self.trip_plans_total.with_label_values(&[outcome]).inc();
        self.trip_plan_duration_seconds
            .with_label_values(&[outcome])
            .observe(elapsed_secs);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
