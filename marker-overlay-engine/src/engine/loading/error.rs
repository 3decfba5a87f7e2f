use std::fmt;

use bevy::asset::{AssetServer, LoadState, UntypedAssetId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    SceneConfig,
    EnvironmentMap,
    Model,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::SceneConfig => "scene config",
            AssetKind::EnvironmentMap => "environment map",
            AssetKind::Model => "model",
        };
        f.write_str(name)
    }
}

/// A required asset could not be loaded. Logged once; the scene stays in
/// the loading state and markers never go live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadError {
    pub kind: AssetKind,
    pub path: String,
    pub reason: String,
}

impl AssetLoadError {
    pub fn new(kind: AssetKind, path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {} '{}': {}", self.kind, self.path, self.reason)
    }
}

impl std::error::Error for AssetLoadError {}

/// Coarse load state of a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPoll {
    Pending,
    Loaded,
    Failed(String),
}

pub fn poll_asset(asset_server: &AssetServer, id: impl Into<UntypedAssetId>) -> AssetPoll {
    match asset_server.get_load_state(id) {
        Some(LoadState::Loaded) => AssetPoll::Loaded,
        Some(LoadState::Failed(err)) => AssetPoll::Failed(err.to_string()),
        _ => AssetPoll::Pending,
    }
}
