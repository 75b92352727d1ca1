use thiserror::Error;

pub type MoeResult<T> = Result<T, MoeError>;

/// Errors at the edges of the compiler.
///
/// Compilation itself never fails: malformed or unrecognized DSL input
/// degrades to comment placeholders instead of errors. These variants cover
/// file I/O in the CLI and theme configuration parsing.
#[derive(Error, Debug)]
pub enum MoeError {
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme: {0}")]
    InvalidTheme(#[from] serde_yaml::Error),
}
