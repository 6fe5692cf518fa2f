//! Validação de forma e helpers de string/escala compartilhados por
//! encode, decode e format. Nada aqui passa por ponto flutuante.

use num_bigint::BigUint;

use super::types::{Decimals, DECIMAL_SEPARATOR};

/// Partes de um montante decimal já validado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalParts<'a> {
    pub negative: bool,
    pub int: &'a str,
    pub frac: &'a str,
}

/// Forma aceita: `["-"]? digits ["." digits]`, tolerando `".5"` e `"5."`
/// (ao menos um dígito no total). Espaços nas pontas são ignorados.
pub fn is_numeric_shape(raw: &str) -> bool {
    split_parts(raw).is_some()
}

/// Remove só espaço ASCII nas pontas; NBSP e afins continuam no texto.
#[inline]
pub fn trim_ascii_ws(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Separa sinal, parte inteira e parte fracionária. `None` se a forma é inválida.
pub fn split_parts(raw: &str) -> Option<DecimalParts<'_>> {
    let trimmed = trim_ascii_ws(raw);
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (int, frac) = match body.split_once(DECIMAL_SEPARATOR) {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !all_digits(frac) || int.len() + frac.len() == 0 {
        return None;
    }
    Some(DecimalParts { negative, int, frac })
}

/// Ajusta a fração para exatamente `decimals` dígitos: completa com `0`
/// à direita ou **trunca** (nunca arredonda).
pub fn fit_fraction(frac: &str, decimals: Decimals) -> String {
    let width = decimals as usize;
    if frac.len() >= width {
        frac[..width].to_string()
    } else {
        format!("{:0<width$}", frac, width = width)
    }
}

#[inline]
pub fn strip_trailing_zeros(frac: &str) -> &str {
    frac.trim_end_matches('0')
}

/// Colapsa qualquer sequência de separadores repetidos num único `.`.
pub fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_sep = false;
    for ch in s.chars() {
        let is_sep = ch == DECIMAL_SEPARATOR;
        if !(is_sep && prev_sep) {
            out.push(ch);
        }
        prev_sep = is_sep;
    }
    out
}

/// 10^decimals em precisão arbitrária.
pub fn pow10(decimals: Decimals) -> BigUint {
    num_traits::pow(BigUint::from(10u8), decimals as usize)
}
