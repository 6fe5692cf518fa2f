//! Mapeamento entre condições de entrada e códigos de erro do codec.
use crate::codec::error::AmountError;
use crate::codec::error_catalog::AmountErrorCode;
use crate::codec::guardrails::{split_parts, trim_ascii_ws};

/// Determina o código de erro de um texto digitado, ou `None` se for um
/// montante não-negativo bem formado.
pub fn classify(raw: &str) -> Option<AmountErrorCode> {
    if trim_ascii_ws(raw).is_empty() {
        return Some(AmountErrorCode::EmptyInput);
    }
    match split_parts(raw) {
        None => Some(AmountErrorCode::MalformedInput),
        Some(parts) if parts.negative && !is_all_zero(parts.int, parts.frac) => {
            Some(AmountErrorCode::NegativeAmount)
        }
        Some(_) => None,
    }
}

fn is_all_zero(int: &str, frac: &str) -> bool {
    int.bytes().chain(frac.bytes()).all(|b| b == b'0')
}

/// Constrói um [`AmountError`] para o texto bruto, com o valor no contexto.
pub fn to_error(code: AmountErrorCode, raw: &str) -> AmountError {
    AmountError::new(code).with_context("amount", raw)
}
