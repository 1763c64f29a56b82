use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid ISO date: '{0}'")]
    InvalidDate(String),

    #[error("date arithmetic out of range: '{base}' {offset:+} days")]
    DateOutOfRange { base: String, offset: i64 },

    #[error("{0}")]
    Other(String),
}
