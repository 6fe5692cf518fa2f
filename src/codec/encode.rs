//! String decimal (input da UI) -> inteiro em unidades base.
//! Política: fração excedente é **truncada**, nunca arredondada; o valor
//! nunca passa por ponto flutuante.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use tracing::debug;

use super::error::{AmountError, Result};
use super::error_catalog::AmountErrorCode;
use super::error_map::{classify, to_error};
use super::guardrails::{fit_fraction, split_parts};
use super::types::{BaseUnits, Decimals};
use crate::obs::metrics::record_degraded;

/// Converte `amount` para unidades base com `decimals` casas.
///
/// Leniente: texto vazio, malformado ou negativo vira `0` (o campo da UI
/// nunca falha enquanto o usuário digita). Quem precisa distinguir "vazio"
/// de "0" deve usar [`try_encode`].
pub fn encode(amount: &str, decimals: Decimals) -> BaseUnits {
    match try_encode(amount, decimals) {
        Ok(v) => v,
        Err(err) => {
            debug!(
                target: "token_amount_core::codec",
                code = err.code.code(),
                decimals,
                "amount degradado para 0"
            );
            record_degraded(err.code);
            BaseUnits::zero()
        }
    }
}

/// Variante estrita de [`encode`]: mesma escala e truncamento, mas reporta
/// `EmptyInput`, `MalformedInput` e `NegativeAmount`.
pub fn try_encode(amount: &str, decimals: Decimals) -> Result<BaseUnits> {
    if let Some(code) = classify(amount) {
        return Err(to_error(code, amount));
    }
    // classify garante forma válida
    let parts = split_parts(amount).ok_or_else(|| to_error(AmountErrorCode::MalformedInput, amount))?;

    let mut digits = String::with_capacity(parts.int.len() + decimals as usize);
    digits.push_str(parts.int);
    digits.push_str(&fit_fraction(parts.frac, decimals));
    if digits.is_empty() {
        return Ok(BaseUnits::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| to_error(AmountErrorCode::MalformedInput, amount))
}

/// [`encode`] leniente seguido de downcast checado para `u128`.
pub fn encode_u128(amount: &str, decimals: Decimals) -> Result<u128> {
    let v = encode(amount, decimals);
    v.to_u128().ok_or_else(|| {
        AmountError::new(AmountErrorCode::Overflow)
            .with_context("target", "u128")
            .with_context("value", &v)
    })
}
