use std::fmt;

use super::Maze;

/// One tile of the projected maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum LayoutCell {
    #[strum(serialize = "X")]
    Wall,
    #[strum(serialize = " ")]
    Open,
    #[strum(serialize = "S")]
    Start,
    #[strum(serialize = "E")]
    End,
}

/// The maze graph drawn onto a `(2 * height + 1) x (2 * width + 1)` tile grid,
/// indexed `[row][col]`.
///
/// Maze cell `(x, y)` lands on tile `(col, row) = (2x + 1, 2y + 1)`. The tiles
/// between two such rooms are the wall segments, opened wherever the spanning
/// tree has an edge. The even rows and columns around the outside stay walls,
/// which gives the border the same thickness as the inner walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    grid: Vec<Vec<LayoutCell>>,
}

impl Layout {
    pub fn from_maze(maze: &Maze) -> Self {
        let graph = maze.graph();
        let rows = 2 * graph.height() + 1;
        let cols = 2 * graph.width() + 1;
        let mut grid = vec![vec![LayoutCell::Wall; cols]; rows];

        for (_, node) in graph.nodes() {
            let (col, row) = grid_position(node.position);
            grid[row][col] = LayoutCell::Open;
        }

        for &(a, b) in graph.edges() {
            let (Some(a), Some(b)) = (graph.node(a), graph.node(b)) else {
                continue;
            };

            // Edges only join adjacent cells, so stepping from `a`'s tile one
            // tile towards `b` lands on `ax + bx + 1`, and likewise for rows.
            let col = a.position.0 + b.position.0 + 1;
            let row = a.position.1 + b.position.1 + 1;
            grid[row][col] = LayoutCell::Open;
        }

        let (col, row) = grid_position(maze.start());
        grid[row][col] = LayoutCell::Start;
        let (col, row) = grid_position(maze.end());
        grid[row][col] = LayoutCell::End;

        Self { grid }
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn grid(&self) -> &[Vec<LayoutCell>] {
        &self.grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<LayoutCell> {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Anything outside the grid counts as open.
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(LayoutCell::Wall)
    }

    /// `(col, row)` of every wall tile, row by row.
    pub fn wall_positions(&self) -> Vec<(usize, usize)> {
        let mut walls = Vec::new();

        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == LayoutCell::Wall {
                    walls.push((col, row));
                }
            }
        }

        walls
    }

    pub fn log(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(LayoutCell::to_string).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Tile `(col, row)` that maze cell `(x, y)` projects onto.
pub fn grid_position(cell: (usize, usize)) -> (usize, usize) {
    (2 * cell.0 + 1, 2 * cell.1 + 1)
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::graph::MazeGraph;

    fn corridor(width: usize, height: usize) -> Maze {
        let mut graph = MazeGraph::new(width, height).unwrap();
        let mut previous = graph.add_node((0, 0), 0);
        for i in 1..width.max(height) {
            let position = if width > 1 { (i, 0) } else { (0, i) };
            let next = graph.add_node(position, i);
            graph.make_edge(previous, next);
            previous = next;
        }

        let end = if width > 1 { (width - 1, 0) } else { (0, height - 1) };
        Maze {
            graph,
            start: (0, 0),
            end,
            difficulty: 1.0,
            dead_ends: Vec::new(),
        }
    }

    #[test]
    fn test_horizontal_corridor_layout() {
        let layout = Layout::from_maze(&corridor(2, 1));
        assert_eq!(layout.to_string(), "XXXXX\nXS EX\nXXXXX");
    }

    #[test]
    fn test_vertical_corridor_puts_y_on_rows() {
        let layout = Layout::from_maze(&corridor(1, 2));
        assert_eq!(layout.rows(), 5);
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.to_string(), "XXX\nXSX\nX X\nXEX\nXXX");
        assert_eq!(layout.get(2, 1), Some(LayoutCell::Open));
    }

    #[test]
    fn test_wall_positions_are_col_row_pairs() {
        let layout = Layout::from_maze(&corridor(1, 2));
        let walls = layout.wall_positions();

        assert_eq!(walls.len(), 15 - 3);
        assert!(walls.contains(&(0, 2)));
        assert!(walls.contains(&(2, 2)));
        assert!(!walls.contains(&(1, 2)));
    }

    #[test]
    fn test_grid_position() {
        assert_eq!(grid_position((0, 0)), (1, 1));
        assert_eq!(grid_position((3, 1)), (7, 3));
    }
}
