use glam::{Vec2, Vec3, vec2, vec3};
use rand::Rng;
use tracing::info;

use crate::{
    camera::Camera,
    config::GameConfig,
    constants::{
        CAMERA_ASPECT, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, MARKER_HEIGHT, MAX_PITCH,
        MOUSE_SENSITIVITY, PLAYER_HALF_SIZE, SPRINT_SPEED, WALK_SPEED, WALL_BOUNDING_RADIUS,
    },
    error::MazeError,
    frustum::CullingFrustum,
    math::flatten_onto_ground,
    maze::{Layout, Maze, generate_maze, layout::grid_position},
    physics::resolve_movement,
};

/// One frame's worth of player input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    pub forward: f32, // 1 forwards, -1 backwards.
    pub right: f32,   // 1 right, -1 left.
    pub sprint: bool,
    pub look: Vec2, // Mouse movement in pixels.
}

/// The active maze, its wall instances and the first-person camera walking
/// through it.
///
/// Layout tile `(col, row)` sits at world `(col, 0, row)`, one unit per tile.
pub struct Game {
    maze: Maze,
    layout: Layout,
    walls: Vec<Vec3>,
    camera: Camera,
    player: Vec2, // World x and z.
    pitch: f32,
    yaw: f32,
    is_colliding: bool,
}

impl Game {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, MazeError> {
        let maze = generate_maze(config.width, config.height, config.difficulty, rng)?;
        let camera = Camera::new(CAMERA_NEAR, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_ASPECT);

        let mut game = Self {
            layout: maze.layout(),
            maze,
            walls: Vec::new(),
            camera,
            player: Vec2::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            is_colliding: false,
        };
        game.place_maze();

        Ok(game)
    }

    /// Swaps in a freshly generated maze and puts the player at its start.
    pub fn regenerate<R: Rng>(
        &mut self,
        width: usize,
        height: usize,
        difficulty: f64,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let maze = generate_maze(width, height, difficulty, rng)?;
        self.layout = maze.layout();
        self.maze = maze;
        self.place_maze();

        info!(walls = self.walls.len(), "maze regenerated");
        Ok(())
    }

    fn place_maze(&mut self) {
        self.walls = self
            .layout
            .wall_positions()
            .into_iter()
            .map(|(col, row)| vec3(col as f32, 0.0, row as f32))
            .collect();

        let start = self.start_marker();
        self.player = vec2(start.x, start.z);
        self.is_colliding = false;
        self.camera.set_position(vec3(self.player.x, 0.0, self.player.y));
    }

    pub fn tick(&mut self, input: &MoveInput, dt: f32) {
        self.yaw -= input.look.x * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - input.look.y * MOUSE_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
        self.camera.set_rotation(self.pitch, self.yaw, 0.0);

        let movement = flatten_onto_ground(
            self.camera.right() * input.right + self.camera.forward() * input.forward,
        );
        let speed = if input.sprint {
            SPRINT_SPEED
        } else {
            WALK_SPEED
        };
        let delta = vec2(movement.x, movement.z) * speed * dt;

        let resolved = resolve_movement(&self.layout, self.player, delta, PLAYER_HALF_SIZE);
        self.is_colliding = resolved.is_colliding;
        self.player += resolved.delta;
        self.camera.set_position(vec3(self.player.x, 0.0, self.player.y));
    }

    /// Wall instances whose bounding spheres may be in view this frame.
    pub fn visible_walls(&mut self) -> Vec<Vec3> {
        let frustum = CullingFrustum::new(self.camera.frustum_planes());
        frustum
            .filter_visible(self.walls.iter().copied(), WALL_BOUNDING_RADIUS)
            .collect()
    }

    pub fn start_marker(&self) -> Vec3 {
        marker_position(self.maze.start())
    }

    pub fn end_marker(&self) -> Vec3 {
        marker_position(self.maze.end())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn walls(&self) -> &[Vec3] {
        &self.walls
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn player_position(&self) -> Vec2 {
        self.player
    }

    pub fn is_colliding(&self) -> bool {
        self.is_colliding
    }
}

fn marker_position(cell: (usize, usize)) -> Vec3 {
    let (col, row) = grid_position(cell);
    vec3(col as f32, MARKER_HEIGHT, row as f32)
}
