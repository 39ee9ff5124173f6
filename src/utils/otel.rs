//! Observability
//! 
//! Installs the global `tracing` subscriber: an env-filtered fmt layer,
//! plus an OpenTelemetry layer exporting spans over OTLP when a collector
//! endpoint is configured.

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider; // Import trait for .tracer()
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_FILTER: &str = "activity_directory=info,tower_http=info";

/// Flushes and shuts down the tracer provider on drop, when one was installed.
pub struct OtelGuard {
    exporting: bool,
}

impl OtelGuard {
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }
}

impl Drop for OtelGuard {
    fn drop(&mut self) {
        if self.exporting {
            global::shutdown_tracer_provider();
        }
    }
}

fn build_tracer(service_name: &str, endpoint: &str) -> Result<sdktrace::Tracer> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint)
        .build_span_exporter()
        .context("Failed to build OTLP span exporter")?;

    let trace_config = sdktrace::Config::default().with_resource(Resource::new(vec![
        KeyValue::new("service.name", service_name.to_string()),
    ]));

    let provider = sdktrace::TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_config(trace_config)
        .build();

    global::set_tracer_provider(provider.clone());
    Ok(provider.tracer(service_name.to_string()))
}

pub fn init_telemetry(service_name: &str, otlp_endpoint: Option<&str>) -> Result<OtelGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let tracer = otlp_endpoint
        .map(|endpoint| build_tracer(service_name, endpoint))
        .transpose()?;
    let exporting = tracer.is_some();
    let telemetry = tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));

    Registry::default()
        .with(filter)
        .with(telemetry)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(OtelGuard { exporting })
}
