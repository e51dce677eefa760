use crate::error::{FetchError, Result};
use crate::models::registry::ModelInfo;
use serde::Serialize;
use std::path::Path;

/// Fixed advisory message included with every payload
const ADVISORY_MESSAGE: &str =
    "MVP helper generated. Execute one of the instructions to download.";

/// Ready-to-run download instructions for one model
///
/// Field names match the JSON shape existing consumers parse; do not
/// rename without coordinating downstream.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DownloadInstructions {
    pub model_id: String,
    pub repo_id: String,
    pub target_dir: String,
    pub python_example: String,
    pub cli_example: String,
}

impl DownloadInstructions {
    /// Build download instructions for `model_id` under `target_root`.
    ///
    /// Pure string composition: the per-model directory is
    /// `target_root/<model_id>`, and no filesystem access happens here.
    pub fn build(model_id: &str, target_root: &Path) -> Result<Self> {
        let model = ModelInfo::resolve(model_id)?;
        let target_dir = target_root.join(model.id).display().to_string();

        let python_example = format!(
            "from huggingface_hub import snapshot_download\n\
             snapshot_download(repo_id='{}', local_dir='{}')",
            model.repo_id, target_dir
        );
        let cli_example = format!(
            "huggingface-cli download {} --local-dir {}",
            model.repo_id, target_dir
        );

        Ok(Self {
            model_id: model.id.to_string(),
            repo_id: model.repo_id.to_string(),
            target_dir,
            python_example,
            cli_example,
        })
    }
}

/// Envelope printed to stdout
#[derive(Debug, Clone, Serialize)]
pub struct InstructionPayload {
    pub ok: bool,
    pub message: String,
    pub instructions: DownloadInstructions,
}

impl InstructionPayload {
    #[must_use]
    pub fn new(instructions: DownloadInstructions) -> Self {
        Self {
            ok: true,
            message: ADVISORY_MESSAGE.to_string(),
            instructions,
        }
    }

    /// Render as indented JSON
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FetchError::Other(format!("Failed to serialize payload: {e}")))
    }
}
