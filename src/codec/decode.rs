//! Unidades base -> string decimal para exibição.
//! Saída nunca tem zeros fracionários à direita, nem `+`, nem `..`.

use num_traits::Zero;

use super::guardrails::{collapse_separators, strip_trailing_zeros};
use super::types::{BaseUnits, Decimals, DECIMAL_SEPARATOR};

/// Renderiza `amount` com `decimals` casas, removendo zeros fracionários
/// à direita. Zero vira `"0"`.
pub fn decode(amount: &BaseUnits, decimals: Decimals) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }
    let width = decimals as usize + 1;
    let padded = format!("{:0>width$}", amount.to_string(), width = width);

    let (int, frac) = padded.split_at(padded.len() - decimals as usize);
    let int = if int.is_empty() { "0" } else { int };
    let frac = strip_trailing_zeros(frac);
    if frac.is_empty() {
        return int.to_string();
    }
    let mut out = String::with_capacity(int.len() + frac.len() + 1);
    out.push_str(int);
    out.push(DECIMAL_SEPARATOR);
    out.push_str(frac);
    collapse_separators(&out)
}

/// Como [`decode`], com montante ausente tratado como zero.
pub fn decode_opt(amount: Option<&BaseUnits>, decimals: Decimals) -> String {
    amount.map_or_else(|| "0".to_string(), |a| decode(a, decimals))
}

/// Atalho para ledgers que reportam saldo como inteiro nativo.
pub fn decode_u128(amount: u128, decimals: Decimals) -> String {
    decode(&BaseUnits::from(amount), decimals)
}
