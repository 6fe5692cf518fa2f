use anyhow::Result;

use opentelemetry::{
    global,
    metrics::{Histogram, Meter, MeterProvider},
    trace::TracerProvider as _,
    KeyValue,
};
use opentelemetry_otlp::{MetricExporter, Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{metrics::SdkMeterProvider, resource::Resource, trace::SdkTracerProvider};
use tracing::{warn, Level};
use tracing_subscriber::{layer::SubscriberExt, Registry};

use crate::obs::tracingx::filter_from_env;

const DEFAULT_ENDPOINT: &str = "http://localhost:4318";
const COMMIT_SHA_VAR: &str = "AMOUNT_CORE_COMMIT_SHA";

/// Configuração de exportação lida do ambiente.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub traces_endpoint: String,
    pub metrics_endpoint: String,
    pub commit_sha: String,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Mesma resolução de `from_env`, com fonte de variáveis injetável.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let base = base.trim_end_matches('/');
        Self {
            traces_endpoint: lookup("OTEL_EXPORTER_OTLP_TRACES_ENDPOINT")
                .unwrap_or_else(|| format!("{}/v1/traces", base)),
            metrics_endpoint: lookup("OTEL_EXPORTER_OTLP_METRICS_ENDPOINT")
                .unwrap_or_else(|| format!("{}/v1/metrics", base)),
            commit_sha: lookup(COMMIT_SHA_VAR).unwrap_or_else(|| "unknown".into()),
        }
    }
}

pub struct Telemetry {
    pub config: TelemetryConfig,
    pub tracer_provider: SdkTracerProvider,
    pub meter_provider: SdkMeterProvider,
    pub meter: Meter,
    pub codec_latency_ms: Histogram<f64>,
}

impl Telemetry {
    pub fn shutdown(self) -> Result<()> {
        self.meter_provider.force_flush()?;
        self.tracer_provider.shutdown()?;
        self.meter_provider.shutdown()?;
        Ok(())
    }

    /// Shutdown que não derruba o processo: sem coletor ouvindo o flush
    /// falha, e isso só vira `warn!`. Retorna `true` se tudo fechou limpo.
    pub fn shutdown_best_effort(self) -> bool {
        match self.shutdown() {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "shutdown do telemetry falhou");
                false
            }
        }
    }

    /// [`make_info_span`] com o commit resolvido na configuração.
    pub fn info_span(&self, name: &str, op_id: u32, component: &str) -> tracing::Span {
        make_info_span(&self.config.commit_sha, name, op_id, component)
    }
}

pub fn init(service_name: &str) -> Result<Telemetry> {
    init_with(service_name, TelemetryConfig::from_env())
}

pub fn init_with(service_name: &str, cfg: TelemetryConfig) -> Result<Telemetry> {
    let resource = Resource::builder()
        .with_service_name(service_name.to_string())
        .with_attributes([
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("git.commit.sha", cfg.commit_sha.clone()),
        ])
        .build();

    // ---- Traces (OTLP/HTTP) ----
    let span_exporter = SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(cfg.traces_endpoint.clone())
        .build()?;
    let tracer_provider = SdkTracerProvider::builder()
        .with_resource(resource.clone())
        .with_batch_exporter(span_exporter)
        .build();

    // ---- Métricas (OTLP/HTTP) ----
    let metric_exporter = MetricExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(cfg.metrics_endpoint.clone())
        .build()?;
    let meter_provider = SdkMeterProvider::builder()
        .with_resource(resource)
        .with_periodic_exporter(metric_exporter)
        .build();

    // Globais
    global::set_tracer_provider(tracer_provider.clone());
    global::set_meter_provider(meter_provider.clone());

    // tracing -> OTel
    let tracer = tracer_provider.tracer(service_name.to_string());
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let subscriber = Registry::default()
        .with(filter_from_env())
        .with(fmt_layer)
        .with(otel_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    let meter = meter_provider.meter("token-amount-core");
    let codec_latency_ms = meter
        .f64_histogram("codec_latency_ms")
        .with_unit("ms")
        .with_description("Latência de encode/decode em ms")
        .build();

    Ok(Telemetry { config: cfg, tracer_provider, meter_provider, meter, codec_latency_ms })
}

/// Cria um `Span` INFO com nome **estático** (exigência do tracing) e
/// coloca o nome dinâmico em `span_name`. Inclui `git_commit_sha`.
pub fn make_info_span(commit_sha: &str, name: &str, op_id: u32, component: &str) -> tracing::Span {
    tracing::span!(
        target: "token_amount_core",
        Level::INFO,
        "op",
        git_commit_sha = %commit_sha,
        span_name = %name,
        op_id = op_id,
        component = component
    )
}
