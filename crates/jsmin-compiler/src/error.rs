use jsmin::MinifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid input file extension: {0}")]
    InvalidExtension(String),
    #[error("Could not minify {path}: {source}")]
    Minify {
        path: String,
        #[source]
        source: MinifyError,
    },
    #[error("Input path is not under input base: {0}")]
    NotUnderBase(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl CompileError {
    /// The minifier error, when the failure came from malformed source.
    pub fn minify_error(&self) -> Option<&MinifyError> {
        match self {
            Self::Minify { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
