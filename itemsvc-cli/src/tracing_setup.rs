//! Logging for the itemsvc binary
//!
//! Console output is always on and filtered by `RUST_LOG` (default `info`,
//! or `debug` with `--debug`). Builds with the `telemetry` feature can add
//! an OTLP span exporter with `--otel`; the endpoint comes from
//! `OTEL_EXPORTER_OTLP_ENDPOINT`.

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging flags from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub debug: bool,
    pub otel: bool,
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already set, or if `--otel` was requested
/// and the exporter cannot be built.
pub fn init(options: LogOptions) -> Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(options.debug))
        .with(fmt::layer().with_target(options.debug).compact());

    #[cfg(feature = "telemetry")]
    if options.otel {
        subscriber
            .with(otlp::layer()?)
            .try_init()
            .map_err(|err| anyhow!(err))?;
        tracing::info!("exporting spans over OTLP");
        return Ok(());
    }

    #[cfg(not(feature = "telemetry"))]
    if options.otel {
        anyhow::bail!("--otel needs itemsvc built with the `telemetry` feature");
    }

    subscriber.try_init().map_err(|err| anyhow!(err))
}

/// Flush buffered spans before exit.
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(feature = "telemetry")]
mod otlp {
    use anyhow::{Context, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};
    use opentelemetry_sdk::{runtime, Resource};
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    const DEFAULT_ENDPOINT: &str = "http://localhost:4317";

    /// Batch-exporting span layer tagged `service.name=itemsvc`.
    ///
    /// The provider is registered globally so [`super::shutdown`] can flush it.
    pub fn layer<S>() -> Result<OpenTelemetryLayer<S, Tracer>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("building OTLP span exporter")?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, runtime::Tokio)
            .with_resource(Resource::new([KeyValue::new("service.name", "itemsvc")]))
            .build();

        let tracer = provider.tracer("itemsvc");
        opentelemetry::global::set_tracer_provider(provider);

        Ok(tracing_opentelemetry::layer().with_tracer(tracer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_sets_default_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(true).to_string(), "debug");
        assert_eq!(env_filter(false).to_string(), "info");
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn otel_without_feature_is_an_error() {
        let err = init(LogOptions {
            debug: false,
            otel: true,
        })
        .unwrap_err();
        assert!(err.to_string().contains("telemetry"));
    }

    #[cfg(feature = "telemetry")]
    #[tokio::test]
    async fn otlp_layer_builds_without_a_collector() {
        // The tonic channel connects lazily, so no collector is needed here.
        let layer = otlp::layer::<tracing_subscriber::Registry>();
        assert!(layer.is_ok());
        shutdown();
    }

    #[test]
    fn second_init_is_reported() {
        // Only this test installs a global subscriber.
        let options = LogOptions::default();
        init(options).unwrap();
        assert!(init(options).is_err());
    }
}
