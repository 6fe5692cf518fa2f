use tracing_subscriber::EnvFilter;

/// Filtro a partir de `RUST_LOG`; padrão `info`.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
