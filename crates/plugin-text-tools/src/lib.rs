//! # Plugin Text Tools
//!
//! A NeuroServe plugin with lightweight Arabic text utilities:
//!
//! - `arabic_normalize`: orthographic normalization (tatweel, harakat,
//!   alef forms, alef maksura, optional teh marbuta)
//! - `spellcheck_ar`: flags letter elongation and mixed-script tokens
//!
//! The plugin is exposed as a lazy proxy; the service behind it is only
//! built when a task first runs.

pub mod error;
pub mod models;
pub mod normalize;
pub mod plugin;
pub mod service;
pub mod spellcheck;

pub use error::TextToolsError;
pub use models::{
    NormalizeRequest, NormalizeResponse, SpellIssue, SpellcheckRequest, SpellcheckResponse,
};
pub use plugin::TextToolsPlugin;
pub use service::TextToolsService;
