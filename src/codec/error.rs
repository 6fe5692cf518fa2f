//! Tipo de erro unificado do codec com formatação estável.
use core::fmt;
use std::collections::BTreeMap;

use crate::codec::error_catalog::{default_locale_message, AmountErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

fn sanitize_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| match ch {
            '\n' | '\r' | '\t' => ' ',
            _ => ch,
        })
        .collect();
    if cleaned.chars().count() > CONTEXT_VALUE_MAX {
        let mut truncated = cleaned
            .chars()
            .take(CONTEXT_VALUE_MAX - 1)
            .collect::<String>();
        truncated.push('…');
        truncated
    } else {
        cleaned
    }
}

fn escape_json(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                use core::fmt::Write as _;
                let _ = write!(&mut escaped, "\\u{:04x}", c as u32);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            rendered.push(ch);
            continue;
        }
        let key: String = chars.by_ref().take_while(|&next| next != '}').collect();
        match context.get(&key) {
            Some(value) if !key.is_empty() => rendered.push_str(value),
            _ => {
                rendered.push('{');
                rendered.push_str(&key);
                rendered.push('}');
            }
        }
    }
    rendered
}

/// Erro do codec com contexto estruturado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountError {
    pub code: AmountErrorCode,
    pub context: BTreeMap<String, String>,
}

impl AmountError {
    /// Cria um novo erro sem contexto adicional.
    pub fn new(code: AmountErrorCode) -> Self {
        Self {
            code,
            context: BTreeMap::new(),
        }
    }

    /// Adiciona um par chave/valor ao contexto.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key_string = key.into();
        if !key_string.is_empty() {
            let sanitized = sanitize_value(&value.to_string());
            self.context.insert(key_string, sanitized);
        }
        self
    }

    fn resolved_message(&self) -> String {
        render_template(default_locale_message(self.code), &self.context)
    }

    /// Mensagem curta para UI.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), self.resolved_message())
    }

    /// Renderiza um template arbitrário usando o contexto atual.
    pub fn render_with_template(&self, template: &str) -> String {
        render_template(template, &self.context)
    }

    /// Serialização estável em JSON para logs.
    pub fn to_log_json(&self) -> String {
        let message = self.resolved_message();
        let mut json = String::from("{");
        json.push_str("\"code\":\"");
        json.push_str(&escape_json(self.code.code()));
        json.push_str("\",\"title\":\"");
        json.push_str(&escape_json(self.code.title()));
        json.push_str("\",\"message\":\"");
        json.push_str(&escape_json(&message));
        json.push_str("\",\"context\":{");
        for (i, (key, value)) in self.context.iter().enumerate() {
            if i > 0 {
                json.push(',');
            }
            json.push('"');
            json.push_str(&escape_json(key));
            json.push_str("\":\"");
            json.push_str(&escape_json(value));
            json.push('"');
        }
        json.push_str("}}");
        json
    }
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for AmountError {}

/// Resultado padrão para operações checadas do codec.
pub type Result<T> = std::result::Result<T, AmountError>;

#[macro_export]
macro_rules! amount_err {
  ($code:expr) => {{
    $crate::codec::error::AmountError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::codec::error::AmountError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
  ($code:expr, { $($key:expr => $value:expr),+ $(,)? }) => {{
    let mut err = $crate::codec::error::AmountError::new($code);
    $(
      err = err.with_context($key, $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! amount_bail {
  ($($tt:tt)*) => {
    return Err($crate::amount_err!($($tt)*));
  };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_string_basic() {
        let err = AmountError::new(AmountErrorCode::EmptyInput);
        assert_eq!(err.to_user_string(), "[AMT-0001] amount não pode ser vazio");
    }

    #[test]
    fn catalog_placeholder_resolved_from_context() {
        let err = AmountError::new(AmountErrorCode::Overflow).with_context("target", "u128");
        assert_eq!(err.to_user_string(), "[AMT-0004] valor excede o tipo u128");
    }

    #[test]
    fn placeholder_subst() {
        let err = AmountError::new(AmountErrorCode::MalformedInput).with_context("amount", "1.2.3");
        let rendered = err.render_with_template("falha {amount}");
        assert_eq!(rendered, "falha 1.2.3");
    }

    #[test]
    fn log_json_shape() {
        let err = AmountError::new(AmountErrorCode::NegativeAmount).with_context("amount", "-1");
        let json = err.to_log_json();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"code\":\"AMT-0003\""));
        assert!(json.contains("\"title\":"));
        assert!(json.contains("\"message\":"));
        assert!(json.contains("\"context\":{\"amount\":\"-1\"}"));
    }

    #[test]
    fn macros_variants() {
        let err = amount_err!(AmountErrorCode::EmptyInput, decimals => 8);
        assert_eq!(err.code, AmountErrorCode::EmptyInput);
        assert_eq!(err.context.get("decimals").unwrap(), "8");

        let err_block = amount_err!(AmountErrorCode::DecimalsMismatch, { "left" => 8, "right" => 6 });
        assert_eq!(err_block.code, AmountErrorCode::DecimalsMismatch);
        assert_eq!(err_block.to_user_string(), "[AMT-0005] decimals 8 != 6");
    }
}
