//! The service behind the `text_tools` plugin.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use neuroserve_plugin::prelude::*;

use crate::error::TextToolsError;
use crate::models::{NormalizeRequest, NormalizeResponse, SpellcheckRequest, SpellcheckResponse};
use crate::normalize::{NormalizeOptions, normalize};
use crate::spellcheck;

pub const TASK_NORMALIZE: &str = "arabic_normalize";
pub const TASK_SPELLCHECK: &str = "spellcheck_ar";

/// Code-only text service. Every task is synchronous.
#[derive(Debug, Default)]
pub struct TextToolsService;

impl TextToolsService {
    pub fn new() -> Self {
        Self
    }

    /// `arabic_normalize`.
    pub fn arabic_normalize(request: NormalizeRequest) -> NormalizeResponse {
        let options = NormalizeOptions {
            strip_diacritics: request.strip_diacritics,
            normalize_teh_marbuta: request.normalize_teh_marbuta,
        };
        let text = normalize(&request.text, options);
        let changed = text != request.text;
        debug!(chars = request.text.chars().count(), changed, "Normalized text");

        NormalizeResponse {
            text,
            original: request.text,
            changed,
        }
    }

    /// `spellcheck_ar`.
    pub fn spellcheck_ar(request: SpellcheckRequest) -> SpellcheckResponse {
        let (text, issues) = spellcheck::check(&request.text);
        debug!(issues = issues.len(), "Spell-checked text");
        SpellcheckResponse { text, issues }
    }
}

/// Decodes the payload, runs `task` and encodes its response.
fn run<Req, Resp>(payload: Payload, task: fn(Req) -> Resp) -> TaskResult
where
    Req: DeserializeOwned,
    Resp: Serialize,
{
    let request: Req =
        serde_json::from_value(Value::Object(payload)).map_err(TextToolsError::from)?;
    let response = serde_json::to_value(task(request)).map_err(TextToolsError::Encode)?;
    Ok(response)
}

impl TaskService for TextToolsService {
    fn tasks(&self) -> Vec<String> {
        vec![TASK_NORMALIZE.to_string(), TASK_SPELLCHECK.to_string()]
    }

    fn handler(&self, task: &str) -> Option<TaskHandler> {
        match task {
            TASK_NORMALIZE => Some(TaskHandler::blocking(|payload| {
                run(payload, Self::arabic_normalize)
            })),
            TASK_SPELLCHECK => Some(TaskHandler::blocking(|payload| {
                run(payload, Self::spellcheck_ar)
            })),
            _ => None,
        }
    }
}
