use serde::{Serialize, Serializer};

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tauri(#[from] tauri::Error),

    #[error("malformed intent payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The nesting invariant is enforced by the host platform, not this
    /// crate, so recursion over nested bundles stops at a fixed bound.
    #[error("extras bundle nested deeper than {limit} levels")]
    ExtrasTooDeep { limit: usize },

    #[cfg(mobile)]
    #[error("plugin invoke error: {0}")]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
