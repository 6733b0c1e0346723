mod render;

use clap::{Args, Parser, Subcommand};
use glam::vec3;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use common::{
    camera::Camera,
    config::GameConfig,
    constants::{CAMERA_ASPECT, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR},
    frustum::CullingFrustum,
    maze::{Layout, Maze, generate_maze, layout::grid_position},
};

#[derive(Parser, Debug)]
#[command(name = "mazegen", about = "Generate mazes and preview frustum culling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print without colours
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a maze and print its layout
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
    },
    /// Print the layout as seen from the start, with culled tiles as `-`
    Cull {
        #[command(flatten)]
        maze: MazeArgs,
        /// Turn left by this many degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        yaw: f32,
        /// Look up by this many degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pitch: f32,
    },
}

/// Overrides for the `MAZE_*` environment settings.
#[derive(Args, Debug, Default, PartialEq)]
struct MazeArgs {
    /// Maze width in cells
    #[arg(long)]
    width: Option<usize>,
    /// Maze height in cells
    #[arg(long)]
    height: Option<usize>,
    /// 0 puts the end at the nearest dead end, 1 at the farthest
    #[arg(short, long, allow_hyphen_values = true)]
    difficulty: Option<f64>,
    /// RNG seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,
}

impl MazeArgs {
    /// The flag standing in for a `MAZE_*` key, if it was given.
    fn value(&self, key: &str) -> Option<String> {
        match key {
            "MAZE_WIDTH" => self.width.map(|width| width.to_string()),
            "MAZE_HEIGHT" => self.height.map(|height| height.to_string()),
            "MAZE_DIFFICULTY" => self.difficulty.map(|difficulty| difficulty.to_string()),
            "MAZE_SEED" => self.seed.map(|seed| seed.to_string()),
            _ => None,
        }
    }

    fn generate(&self) -> anyhow::Result<Maze> {
        let config = GameConfig::from_env_with(|key| self.value(key))?;
        debug!(?config, "generating maze");

        let maze = generate_maze(
            config.width,
            config.height,
            config.difficulty,
            &mut config.rng(),
        )?;
        Ok(maze)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Generate { maze } => {
            let maze = maze.generate()?;
            println!("{}", show(cli.plain, &maze.layout(), None));
            println!("{}", render::summary(&maze));
        }
        Commands::Cull { maze, yaw, pitch } => {
            let maze = maze.generate()?;
            let layout = maze.layout();

            let (col, row) = grid_position(maze.start());
            let mut camera = Camera::new(CAMERA_NEAR, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_ASPECT);
            camera.set_position(vec3(col as f32, 0.5, row as f32));
            camera.set_rotation(*pitch, *yaw, 0.0);

            let planes = camera.frustum_planes();
            for plane in &planes {
                debug!(%plane, "frustum plane");
            }

            let frustum = CullingFrustum::new(planes);
            println!("{}", show(cli.plain, &layout, Some(&frustum)));
            println!("{}", render::summary(&maze));
        }
    }

    Ok(())
}

fn show(plain: bool, layout: &Layout, frustum: Option<&CullingFrustum>) -> String {
    if plain {
        render::plain(layout, frustum)
    } else {
        render::colored(layout, frustum)
    }
}

#[cfg(test)]
mod tests {
    use common::MazeError;

    use super::*;

    #[test]
    fn test_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "mazegen",
            "generate",
            "--width",
            "12",
            "--height",
            "8",
            "-d",
            "0.3",
            "--seed",
            "42",
        ])
        .unwrap();

        let Commands::Generate { maze } = cli.command else {
            panic!("expected the generate command");
        };
        assert_eq!(
            maze,
            MazeArgs {
                width: Some(12),
                height: Some(8),
                difficulty: Some(0.3),
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_parses_cull_with_negative_angles() {
        let cli = Cli::try_parse_from(["mazegen", "cull", "--yaw", "-90", "--pitch", "-15", "-v"])
            .unwrap();

        assert!(cli.verbose);
        let Commands::Cull { maze, yaw, pitch } = cli.command else {
            panic!("expected the cull command");
        };
        assert_eq!(maze, MazeArgs::default());
        assert_eq!(yaw, -90.0);
        assert_eq!(pitch, -15.0);
    }

    #[test]
    fn test_rejects_missing_command() {
        assert!(Cli::try_parse_from(["mazegen"]).is_err());
    }

    // Environment stand-in: flags first, then these settings.
    fn config_with(args: &MazeArgs, env: &[(&str, &str)]) -> Result<GameConfig, MazeError> {
        GameConfig::from_lookup(|key| {
            args.value(key).or_else(|| {
                env.iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| value.to_string())
            })
        })
    }

    #[test]
    fn test_flags_override_config() {
        let args = MazeArgs {
            width: Some(3),
            seed: Some(9),
            ..MazeArgs::default()
        };
        let config = config_with(&args, &[("MAZE_WIDTH", "40"), ("MAZE_HEIGHT", "6")]).unwrap();

        assert_eq!(config.width, 3);
        assert_eq!(config.height, 6);
        assert_eq!(config.difficulty, GameConfig::default().difficulty);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_flags_rescue_bad_environment_values() {
        let env = [("MAZE_WIDTH", "0"), ("MAZE_DIFFICULTY", "abc")];
        assert!(config_with(&MazeArgs::default(), &env).is_err());

        let args = MazeArgs {
            width: Some(5),
            difficulty: Some(0.7),
            ..MazeArgs::default()
        };
        let config = config_with(&args, &env).unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.difficulty, 0.7);
    }
}
