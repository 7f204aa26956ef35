use std::sync::Arc;

use crate::capture::CameraSource;
use crate::config::Config;
use crate::export::{ArtifactStore, Exporter};
use crate::gate::RewardGate;
use crate::sessions::Sessions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<Sessions>,
    pub artifacts: Arc<ArtifactStore>,
    /// Rewarded-view gate for premium actions. Holds its own injected clock.
    pub gate: Arc<RewardGate>,
    /// Camera collaborator. Default: `NoCamera` (capture answers DeviceUnavailable).
    pub camera: Arc<dyn CameraSource>,
    /// Export collaborator. Default: `StubExporter` — swap for a real PDF backend.
    pub exporter: Arc<dyn Exporter>,
}
