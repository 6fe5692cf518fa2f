use anyhow::Result;
use opentelemetry::KeyValue;
use std::time::Instant;
use tracing::info;

use token_amount_core::codec::decode::decode;
use token_amount_core::codec::encode::encode;
use token_amount_core::codec::format::format_rate_default;
use token_amount_core::{obs, telemetry};

// (input digitado, decimals do token)
const VECTORS: &[(&str, u32)] = &[("12.5", 8), ("0.0001", 8), ("1.23456789", 4), ("", 8), ("abc", 8)];

#[tokio::main]
async fn main() -> Result<()> {
    let tel = telemetry::init("token-amount-core")?;

    for (i, (raw, decimals)) in VECTORS.iter().enumerate() {
        let span = tel.info_span("roundtrip", i as u32, "codec_smoke");
        let _guard = span.enter();

        let t0 = Instant::now();
        let base = obs::wrap::time("encode", || encode(raw, *decimals));
        let shown = obs::wrap::time("decode", || decode(&base, *decimals));
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        tel.codec_latency_ms.record(elapsed_ms, &[KeyValue::new("op", "roundtrip")]);
        info!(raw = %raw, decimals = *decimals, base = %base, shown = %shown, "roundtrip");
    }
    info!(rate = %format_rate_default(1.0 / 3.0), "format_rate");

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    tel.shutdown_best_effort();
    Ok(())
}
