use thiserror::Error;

/// Ошибка разбора кода перечисления (значение из `<select>` или JSON)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodeError {
    #[error("unknown {kind} code: '{code}'")]
    UnknownCode { kind: &'static str, code: String },
}

impl ParseCodeError {
    pub fn unknown(kind: &'static str, code: &str) -> Self {
        Self::UnknownCode {
            kind,
            code: code.to_string(),
        }
    }
}
