use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum FlowStage {
    Parsing,
    Resolving,
    Resolved { provider: String },
    Fetching,
    Complete { bytes: u64 },
}

impl FlowStage {
    pub fn percent(&self) -> f64 {
        match self {
            FlowStage::Parsing => 0.0,
            FlowStage::Resolving => 25.0,
            FlowStage::Resolved { .. } => 50.0,
            FlowStage::Fetching => 75.0,
            FlowStage::Complete { .. } => 100.0,
        }
    }
}

pub trait ProgressEmitter: Send + Sync {
    fn emit_stage(&self, stage: &FlowStage);
    fn emit_bytes(&self, downloaded: u64, total: Option<u64>);
}

/// Emitter that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

impl ProgressEmitter for NoopEmitter {
    fn emit_stage(&self, _stage: &FlowStage) {}
    fn emit_bytes(&self, _downloaded: u64, _total: Option<u64>) {}
}
