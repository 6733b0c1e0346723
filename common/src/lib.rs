pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod frustum;
pub mod game;
pub mod math;
pub mod maze;
pub mod physics;

pub use error::MazeError;
