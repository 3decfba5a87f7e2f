/// Scene description loaded at startup; missing file falls back to defaults.
pub const SCENE_CONFIG_PATH: &str = "scene.json";

pub const DEFAULT_MODEL_PATH: &str = "models/cyber_helmet/cyber_helmet.glb";

/// Prefiltered cubemaps, as produced by the usual KTX2 environment bakers.
pub const DEFAULT_ENVIRONMENT_DIFFUSE_PATH: &str =
    "textures/environmentMaps/underpass/diffuse_rgb9e5_zstd.ktx2";
pub const DEFAULT_ENVIRONMENT_SPECULAR_PATH: &str =
    "textures/environmentMaps/underpass/specular_rgb9e5_zstd.ktx2";
