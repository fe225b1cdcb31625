//! Error taxonomy of the plugin layer.
//!
//! Three levels are kept apart:
//!
//! - [`PluginError`]: loader, construction and lazy-proxy failures. Inside
//!   resolution and enumeration these are logged and swallowed.
//! - [`TaskError`]: what a task handler returns. A [`TaskError::Http`] is
//!   already in the caller-facing shape and passes through dispatch.
//! - [`DispatchError`]: the normalized outcome of a failed dispatch, whose
//!   `Display` text is the `detail` string sent to callers.

use thiserror::Error;

use neuroserve_core::error::AppError;

/// Result alias for plugin-level operations.
pub type PluginResult<T> = Result<T, PluginError>;

/// Failures raised by loaders, plugin construction and the lazy proxy.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The loader collaborator itself failed.
    #[error("Loader error: {0}")]
    Loader(String),

    /// A plugin or its backing implementation could not be constructed.
    #[error("Failed to construct plugin '{plugin}': {message}")]
    Construction { plugin: String, message: String },

    /// A plugin's `load()` hook failed.
    #[error("Plugin '{plugin}' failed to load: {message}")]
    LoadFailed { plugin: String, message: String },

    /// The requested attribute is neither a declared task nor a real member.
    #[error("'{plugin}' has no attribute '{attribute}'")]
    UnknownAttribute { plugin: String, attribute: String },

    /// A task invoked through the plugin's explicit interface failed.
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl PluginError {
    /// Creates a loader error.
    pub fn loader(message: impl Into<String>) -> Self {
        Self::Loader(message.into())
    }

    /// Creates a load failure for the given plugin.
    pub fn load_failed(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadFailed {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    /// Creates a construction failure for the given plugin.
    pub fn construction(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}

/// Failure returned by a task handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    /// A structured HTTP-style error. Never re-wrapped by the dispatcher.
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// Any other failure; the message ends up in a 500 response.
    #[error("{0}")]
    Failed(String),
}

impl TaskError {
    /// Creates a structured error with an explicit status.
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self::Http {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a 400 error for malformed task input.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::http(400, detail)
    }

    /// Creates an unstructured failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Failed(err.to_string())
    }
}

/// Normalized dispatch failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No strategy produced an instance for the plugin name.
    #[error("Plugin not found: {plugin}")]
    PluginNotFound { plugin: String },

    /// The plugin has neither the named task nor a generic fallback.
    #[error(
        "Task '{task}' not found in plugin '{plugin}'. Available: {}",
        format_available(.available)
    )]
    TaskNotFound {
        task: String,
        plugin: String,
        available: Vec<String>,
    },

    /// The named task handler failed.
    #[error("Task '{task}' failed: {message}")]
    TaskExecutionFailed { task: String, message: String },

    /// The generic fallback handler failed.
    #[error("Infer for '{task}' failed: {message}")]
    InferExecutionFailed { task: String, message: String },

    /// A structured error raised by the handler, passed through unchanged.
    #[error("{detail}")]
    Http { status: u16, detail: String },
}

impl DispatchError {
    /// Returns the HTTP status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::PluginNotFound { .. } | Self::TaskNotFound { .. } => 404,
            Self::TaskExecutionFailed { .. } | Self::InferExecutionFailed { .. } => 500,
            Self::Http { status, .. } => *status,
        }
    }
}

/// Renders a task list as `['a', 'b']`, or `['<none>']` when empty.
fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        return "['<none>']".to_string();
    }
    let quoted: Vec<String> = available.iter().map(|t| format!("'{t}'")).collect();
    format!("[{}]", quoted.join(", "))
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        let message = err.to_string();
        match err {
            DispatchError::PluginNotFound { .. } | DispatchError::TaskNotFound { .. } => {
                AppError::not_found(message)
            }
            DispatchError::TaskExecutionFailed { .. }
            | DispatchError::InferExecutionFailed { .. } => AppError::internal(message),
            DispatchError::Http { status, .. } => AppError::status(status, message),
        }
    }
}
