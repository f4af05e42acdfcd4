/// Errors surfaced while assembling the simulation at startup.
///
/// Nothing in the per-frame path returns these: once a `SimContext` exists,
/// ticking, routing input and camera updates are infallible.
#[derive(thiserror::Error, Debug)]
pub enum OrreryError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("duplicate body name `{0}`")]
    DuplicateBody(String),

    #[error("body catalog must contain exactly one star (found {0})")]
    StarCount(usize),

    #[error("body `{name}` has invalid {field}: {value}")]
    InvalidBody {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("overlay element `{0}` not found in document")]
    MissingOverlay(String),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
