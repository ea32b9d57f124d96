use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("failed to load dataset: {0}")]
    DataLoad(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("missing asset: {path}")]
    MissingAsset { path: String },

    #[error("invalid value for control `{control}`: {reason}")]
    InvalidControl { control: String, reason: String },

    #[error("unknown measure field `{0}`")]
    UnknownMeasure(String),

    #[error("input `{0}` is not declared by this binding")]
    MissingInput(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashError {
    pub(crate) fn invalid_control(control: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidControl {
            control: control.into(),
            reason: reason.into(),
        }
    }
}
