//! Referência de alta precisão ("goldens") baseada em **BigInt/BigRational**
//! para o codec de montantes.
//!
//! Objetivos desta referência:
//! 1. Interpretar a string decimal como racional **exato** e escalar por
//!    `10^decimals`, sem manipulação de dígitos, para servir de oráculo
//!    independente do `encode` baseado em string.
//! 2. Reconstruir o racional a partir das unidades base, para validar o `decode`.
//! 3. Reproduzir a variante `floor(valor_f64 * 10^decimals)` e medir onde ela
//!    diverge do caminho exato.
//!
//! Esta referência não entra no caminho de produção — serve só para testes.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use super::encode::encode;
use super::guardrails::{pow10, split_parts, trim_ascii_ws};
use super::types::{BaseUnits, Decimals};

#[inline]
fn big(v: &BigUint) -> BigInt {
    BigInt::from_biguint(Sign::Plus, v.clone())
}

/// Racional exato da string decimal (com sinal). `None` se malformada.
pub fn exact_value(raw: &str) -> Option<BigRational> {
    let parts = split_parts(raw)?;
    let int = if parts.int.is_empty() { "0" } else { parts.int };
    let mut numer = BigInt::parse_bytes(format!("{}{}", int, parts.frac).as_bytes(), 10)?;
    if parts.negative {
        numer = -numer;
    }
    let denom = big(&pow10(parts.frac.len() as Decimals));
    Some(BigRational::new(numer, denom))
}

/// `trunc(valor * 10^decimals)` em racional exato; negativo ou malformado vira 0.
pub fn reference_encode(raw: &str, decimals: Decimals) -> BaseUnits {
    let Some(v) = exact_value(raw) else { return BaseUnits::zero() };
    if v.is_negative() {
        return BaseUnits::zero();
    }
    let scaled = v * BigRational::from_integer(big(&pow10(decimals)));
    scaled.trunc().to_integer().to_biguint().unwrap_or_default()
}

/// Racional exato representado por `amount` unidades base.
pub fn reference_value(amount: &BaseUnits, decimals: Decimals) -> BigRational {
    BigRational::new(big(amount), big(&pow10(decimals)))
}

/// Número mínimo de casas fracionárias que representam `amount` exatamente.
pub fn significant_fraction_digits(amount: &BaseUnits, decimals: Decimals) -> usize {
    let mut v = amount.clone();
    let ten = BigUint::from(10u8);
    let mut digits = decimals as usize;
    while digits > 0 && !v.is_zero() {
        let (q, r) = v.div_rem(&ten);
        if !r.is_zero() {
            break;
        }
        v = q;
        digits -= 1;
    }
    if amount.is_zero() { 0 } else { digits }
}

/// Variante com ponto flutuante: `floor(parse_f64(raw) * 10^decimals)`.
/// Perde precisão para montantes grandes ou muitas casas.
pub fn lossy_float_encode(raw: &str, decimals: Decimals) -> BaseUnits {
    let Ok(v) = trim_ascii_ws(raw).parse::<f64>() else { return BaseUnits::zero() };
    let scaled = (v * 10f64.powi(decimals as i32)).floor();
    if !scaled.is_finite() || scaled <= 0.0 {
        return BaseUnits::zero();
    }
    BigUint::from_f64(scaled).unwrap_or_default()
}

/// Comparação core × referência para um input.
#[derive(Debug, Clone)]
pub struct RefEncode {
    pub core: BaseUnits,
    pub exact: BaseUnits,
    pub lossy: BaseUnits,
    /// |lossy - exact| em unidades base
    pub lossy_error: BaseUnits,
}

pub fn golden_encode(raw: &str, decimals: Decimals) -> RefEncode {
    let core = encode(raw, decimals);
    let exact = reference_encode(raw, decimals);
    let lossy = lossy_float_encode(raw, decimals);
    let lossy_error = if lossy >= exact { &lossy - &exact } else { &exact - &lossy };
    RefEncode { core, exact, lossy, lossy_error }
}

/// Erro relativo da variante f64 (para relatórios); `None` se exato é zero.
pub fn lossy_relative_error(g: &RefEncode) -> Option<f64> {
    if g.exact.is_zero() {
        return None;
    }
    BigRational::new(big(&g.lossy_error), big(&g.exact)).to_f64()
}
