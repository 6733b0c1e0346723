// Maze:
pub const DEFAULT_MAZE_WIDTH: usize = 10;
pub const DEFAULT_MAZE_HEIGHT: usize = 10;
pub const DEFAULT_DIFFICULTY: f64 = 0.7;

// Camera:
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 140.0;
pub const CAMERA_FOV_Y: f32 = 45.0; // Degrees.
pub const CAMERA_ASPECT: f32 = 16.0 / 9.0;
pub const MAX_PITCH: f32 = 85.0; // Degrees, either way.
pub const MOUSE_SENSITIVITY: f32 = 0.7; // Degrees per pixel.

// Player:
pub const WALK_SPEED: f32 = 2.2; // Layout tiles per second.
pub const SPRINT_SPEED: f32 = 4.0;
pub const PLAYER_HALF_SIZE: f32 = 0.08;
pub const WALL_HALF_SIZE: f32 = 0.5;
pub const CONTACT_EPSILON: f32 = 0.0001;

// Rendering:
pub const WALL_BOUNDING_RADIUS: f32 = 1.732_050_8; // sqrt(3): encloses a 2x2x2 wall cube.
pub const MARKER_HEIGHT: f32 = 2.0;
