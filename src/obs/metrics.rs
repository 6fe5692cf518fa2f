//! Instrumentos globais do codec. Sem meter provider instalado viram no-op.
use once_cell::sync::OnceCell;
use opentelemetry::metrics::Counter;
use opentelemetry::{global, KeyValue};

use crate::codec::error_catalog::AmountErrorCode;

static DEGRADED: OnceCell<Counter<u64>> = OnceCell::new();

fn degraded_counter() -> &'static Counter<u64> {
    DEGRADED.get_or_init(|| {
        global::meter("token-amount-core")
            .u64_counter("codec_degraded_total")
            .with_description("entradas convertidas para zero pelo encode leniente")
            .build()
    })
}

/// Conta uma entrada degradada para zero, rotulada pelo código do catálogo.
pub fn record_degraded(code: AmountErrorCode) {
    degraded_counter().add(1, &[KeyValue::new("code", code.code())]);
}
