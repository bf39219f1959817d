use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinifyError {
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated regex literal")]
    UnterminatedRegex,
    #[error("Unterminated character class in regex literal")]
    UnterminatedCharacterClass,
    #[error("Could not allocate output buffer of {0} bytes")]
    AllocationFailure(usize),
}

impl MinifyError {
    /// True for errors caused by the input text rather than the environment.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, Self::AllocationFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
