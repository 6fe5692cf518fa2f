pub mod types;         // tipos e constantes de escala
pub mod guardrails;    // validação de forma + helpers de string/escala
pub mod encode;        // string decimal -> unidades base
pub mod decode;        // unidades base -> string decimal
pub mod format;        // taxa/preço para exibição
pub mod amount;        // TokenAmount (valor + decimals explícitos)

// módulos unificados de erro
pub mod error_catalog;
pub mod error;
pub mod error_map;

// oráculo BigRational (testes/goldens)
pub mod ref_golden;
