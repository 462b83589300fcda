use std::sync::{Arc, OnceLock};

use prometheus::{CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

/// Cloneable handle over the process-wide extraction metrics.
#[derive(Clone, Debug)]
pub struct MetricsRegistry {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    registry: Registry,
    extract_total: CounterVec,
    statements_total: CounterVec,
    unhandled_nodes_total: CounterVec,
    pool_acquires_total: CounterVec,
    extract_seconds: Histogram,
}

static GLOBAL: OnceLock<MetricsRegistry> = OnceLock::new();

impl MetricsRegistry {
    /// Create a registry with its own backing store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner::new()),
        }
    }

    /// Process-wide registry shared by templatizers created without an
    /// explicit one.
    pub fn global() -> &'static MetricsRegistry {
        GLOBAL.get_or_init(MetricsRegistry::new)
    }

    /// Record one finished `extract` call and its wall-clock duration.
    pub fn record_extract(&self, outcome: &str, secs: f64) {
        self.inner
            .extract_total
            .with_label_values(&[outcome])
            .inc();
        self.inner.extract_seconds.observe(secs.max(0.0));
    }

    /// Record one templatized statement, labeled by operation kind.
    pub fn record_statement(&self, op: &str) {
        self.inner.statements_total.with_label_values(&[op]).inc();
    }

    /// Record an AST node kind the emitter had no dedicated handler for.
    pub fn record_unhandled_node(&self, kind: &str) {
        self.inner
            .unhandled_nodes_total
            .with_label_values(&[kind])
            .inc();
    }

    /// Record a visitor-state acquisition, labeled `reused` or `fresh`.
    pub fn record_pool_acquire(&self, reused: bool) {
        let source = if reused { "reused" } else { "fresh" };
        self.inner
            .pool_acquires_total
            .with_label_values(&[source])
            .inc();
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let metric_families = self.inner.registry.gather();
        let mut out = Vec::new();
        let enc = TextEncoder::new();
        if enc.encode(&metric_families, &mut out).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&out).to_string()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsInner {
    fn new() -> Self {
        let registry = Registry::new();

        let extract_total = counter(
            &registry,
            "sqf_extract_total",
            "Finished extract calls by outcome",
            &["outcome"],
        );
        let statements_total = counter(
            &registry,
            "sqf_statements_total",
            "Templatized statements by operation kind",
            &["op"],
        );
        let unhandled_nodes_total = counter(
            &registry,
            "sqf_unhandled_nodes_total",
            "AST nodes rendered without a dedicated handler",
            &["kind"],
        );
        let pool_acquires_total = counter(
            &registry,
            "sqf_pool_acquires_total",
            "Visitor-state acquisitions by source",
            &["source"],
        );

        let extract_seconds = Histogram::with_opts(
            HistogramOpts::new("sqf_extract_seconds", "Extract call latency in seconds").buckets(
                vec![
                    0.000_05, 0.000_1, 0.000_25, 0.000_5, 0.001, 0.002_5, 0.005, 0.01, 0.05,
                ],
            ),
        )
        .expect("histogram");
        registry
            .register(Box::new(extract_seconds.clone()))
            .expect("register histogram");

        Self {
            registry,
            extract_total,
            statements_total,
            unhandled_nodes_total,
            pool_acquires_total,
            extract_seconds,
        }
    }
}

fn counter(registry: &Registry, name: &str, help: &str, labels: &[&str]) -> CounterVec {
    let c = CounterVec::new(Opts::new(name, help), labels).expect("counter vec");
    registry
        .register(Box::new(c.clone()))
        .expect("register counter");
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_appear_in_rendered_output() {
        let metrics = MetricsRegistry::new();
        metrics.record_extract("ok", 0.000_2);
        metrics.record_statement("SELECT");
        metrics.record_pool_acquire(true);
        let rendered = metrics.render_prometheus();
        assert!(rendered.contains("sqf_extract_total"));
        assert!(rendered.contains("sqf_statements_total"));
        assert!(rendered.contains("reused"));
    }
}
