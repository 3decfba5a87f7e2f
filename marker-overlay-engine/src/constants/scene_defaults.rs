/// Marker anchors on the default helmet model: (position, label, text).
/// The first one is the point the debug panel moves around.
pub const DEFAULT_POINTS: [([f32; 3], &str, &str); 4] = [
    ([2.0, 0.5, -0.2], "0", "Test point, move it from the debug panel"),
    ([1.385, 0.5, -0.2], "1", "Front visor sensor array"),
    ([0.302, -0.1619, -1.849], "2", "Left ear intake"),
    ([0.302, -0.1619, 1.819], "3", "Right ear intake"),
];

pub const POINT_COORDINATE_RANGE: (f32, f32) = (-10.0, 10.0);
pub const POINT_COORDINATE_STEP: f32 = 0.001;
