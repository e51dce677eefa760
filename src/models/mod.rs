pub mod instructions;
pub mod registry;

pub use instructions::{DownloadInstructions, InstructionPayload};
pub use registry::ModelInfo;
