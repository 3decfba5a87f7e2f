pub mod assets;
pub mod camera;
pub mod core;
pub mod loading;
pub mod overlay;
pub mod scene;
pub mod systems;
