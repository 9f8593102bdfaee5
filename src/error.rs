use thiserror::Error;

/// Everything that can stop the scene from reaching the screen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas `#{id}` not found")]
    CanvasNotFound { id: String },
    #[error("element `#{id}` is not a <canvas>")]
    NotACanvas { id: String },
    #[error("canvas `#{id}` has no 2d context")]
    ContextUnavailable { id: String },
    #[error("invalid value {value:?} for attribute `{name}`")]
    InvalidAttribute { name: String, value: String },
    /// A call into the browser threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
