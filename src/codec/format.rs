//! Formatação de taxas/preços para exibição compacta.
//! `format_rate` é só apresentação (aceita f64); `exchange_rate` calcula o
//! preço entre dois montantes em inteiro exato e reaproveita `decode`.

use num_traits::Zero;

use super::amount::TokenAmount;
use super::decode::decode;
use super::error::Result;
use super::error_catalog::AmountErrorCode;
use super::guardrails::{pow10, strip_trailing_zeros};
use super::types::{Decimals, DECIMAL_SEPARATOR, DEFAULT_RATE_DECIMALS};

/// Valor aceito por [`format_rate`]: número ou texto numérico.
pub trait RateInput {
    fn to_rate(&self) -> Option<f64>;
}

impl RateInput for f64 {
    fn to_rate(&self) -> Option<f64> { Some(*self) }
}
impl RateInput for f32 {
    fn to_rate(&self) -> Option<f64> { Some(f64::from(*self)) }
}
impl RateInput for u64 {
    fn to_rate(&self) -> Option<f64> { Some(*self as f64) }
}
impl RateInput for i64 {
    fn to_rate(&self) -> Option<f64> { Some(*self as f64) }
}
impl RateInput for u32 {
    fn to_rate(&self) -> Option<f64> { Some(f64::from(*self)) }
}
impl RateInput for i32 {
    fn to_rate(&self) -> Option<f64> { Some(f64::from(*self)) }
}
impl RateInput for &str {
    fn to_rate(&self) -> Option<f64> { self.trim().parse::<f64>().ok() }
}
impl RateInput for String {
    fn to_rate(&self) -> Option<f64> { self.as_str().to_rate() }
}

/// No máximo `max_decimals` casas, sem zeros à direita nem ponto solto.
/// Zero, texto inválido, NaN e infinito viram `"0"`.
pub fn format_rate<V: RateInput>(value: V, max_decimals: usize) -> String {
    let v = match value.to_rate() {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return "0".to_string(),
    };
    let fixed = format!("{:.*}", max_decimals, v);
    let compact = if fixed.contains(DECIMAL_SEPARATOR) {
        strip_trailing_zeros(&fixed).trim_end_matches(DECIMAL_SEPARATOR)
    } else {
        fixed.as_str()
    };
    // valores abaixo da precisão viram "0" ou "-0"
    if compact == "-0" {
        return "0".to_string();
    }
    compact.to_string()
}

pub fn format_rate_default<V: RateInput>(value: V) -> String {
    format_rate(value, DEFAULT_RATE_DECIMALS)
}

/// Preço de 1 unidade de `input` em unidades de `output`, truncado em
/// `max_decimals` casas. Entrada zero vira `"0"`.
pub fn exchange_rate(input: &TokenAmount, output: &TokenAmount, max_decimals: Decimals) -> String {
    try_exchange_rate(input, output, max_decimals).unwrap_or_else(|_| "0".to_string())
}

/// Como [`exchange_rate`], mas reporta `ZeroDenominator` para entrada zero.
///
/// scaled = floor( out * 10^d_in * 10^max / (in * 10^d_out) )
pub fn try_exchange_rate(input: &TokenAmount, output: &TokenAmount, max_decimals: Decimals) -> Result<String> {
    if input.value.is_zero() {
        crate::amount_bail!(AmountErrorCode::ZeroDenominator, input => input);
    }
    let num = &output.value * pow10(input.decimals) * pow10(max_decimals);
    let den = &input.value * pow10(output.decimals);
    Ok(decode(&(num / den), max_decimals))
}
