use crossterm::style::Stylize;
use glam::vec3;

use common::{
    frustum::CullingFrustum,
    maze::{Layout, LayoutCell, Maze},
};

// Tiles are tested as unit cubes resting on the floor.
const TILE_RADIUS: f32 = 0.5;
const TILE_CENTER_HEIGHT: f32 = 0.5;

pub fn summary(maze: &Maze) -> String {
    format!(
        "start {:?}, end {:?}, difficulty {:.2}, solution length {}, dead ends {}",
        maze.start(),
        maze.end(),
        maze.difficulty(),
        maze.solution_length(),
        maze.dead_ends().len()
    )
}

/// The layout as text, one character per tile, `-` for tiles outside the
/// frustum if one is given.
pub fn plain(layout: &Layout, frustum: Option<&CullingFrustum>) -> String {
    render(layout, frustum, |cell| cell.to_string())
}

/// Like [`plain`], with the start and end picked out in colour.
pub fn colored(layout: &Layout, frustum: Option<&CullingFrustum>) -> String {
    render(layout, frustum, |cell| match cell {
        LayoutCell::Start => cell.to_string().green().bold().to_string(),
        LayoutCell::End => cell.to_string().red().bold().to_string(),
        LayoutCell::Wall => cell.to_string().dark_grey().to_string(),
        LayoutCell::Open => cell.to_string(),
    })
}

fn render(
    layout: &Layout,
    frustum: Option<&CullingFrustum>,
    draw: impl Fn(LayoutCell) -> String,
) -> String {
    layout
        .grid()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    let center = vec3(col as f32, TILE_CENTER_HEIGHT, row as f32);
                    let visible =
                        frustum.is_none_or(|frustum| frustum.contains_sphere(center, TILE_RADIUS));
                    if visible {
                        draw(cell)
                    } else {
                        "-".to_string()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
