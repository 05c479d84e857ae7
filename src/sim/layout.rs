//! Maze to physics bodies
//!
//! Every closed wall entry becomes a thin rectangle on the shared edge of its
//! two cells. The ball starts in the top-left cell and the goal sits in the
//! bottom-right cell.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{BallActor, BarrierSegment, GoalRegion};
use super::maze::Maze;
use crate::consts::{BOUNDARY_THICKNESS, WALL_THICKNESS};
use crate::error::{MazeResult, require_positive};

/// Bodies derived from one maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Internal walls: closed horizontals first, then closed verticals
    pub barriers: Vec<BarrierSegment>,
    /// Top, right, bottom, left
    pub boundary: [BarrierSegment; 4],
    pub goal: GoalRegion,
    pub ball_start: Vec2,
    pub ball_radius: f32,
}

impl Layout {
    /// Boundary followed by internal walls
    pub fn segments(&self) -> impl Iterator<Item = &BarrierSegment> {
        self.boundary.iter().chain(self.barriers.iter())
    }

    pub fn ball(&self) -> BallActor {
        BallActor::new(self.ball_start, self.ball_radius)
    }
}

/// Lay out `maze` with cells of `unit_width x unit_height` and default wall thickness
pub fn layout(maze: &Maze, unit_width: f32, unit_height: f32) -> MazeResult<Layout> {
    layout_with_thickness(maze, unit_width, unit_height, WALL_THICKNESS)
}

pub fn layout_with_thickness(
    maze: &Maze,
    unit_width: f32,
    unit_height: f32,
    thickness: f32,
) -> MazeResult<Layout> {
    let uw = require_positive("unit_width", unit_width)?;
    let uh = require_positive("unit_height", unit_height)?;
    let thickness = require_positive("wall_thickness", thickness)?;

    let width = require_positive("width", uw * maze.cols() as f32)?;
    let height = require_positive("height", uh * maze.rows() as f32)?;

    let mut barriers = Vec::new();
    for (row, col, open) in maze.horizontals().iter() {
        if open {
            continue;
        }
        barriers.push(BarrierSegment::wall(
            Vec2::new((col as f32 + 0.5) * uw, (row as f32 + 1.0) * uh),
            Vec2::new(uw, thickness),
        ));
    }
    for (row, col, open) in maze.verticals().iter() {
        if open {
            continue;
        }
        barriers.push(BarrierSegment::wall(
            Vec2::new((col as f32 + 1.0) * uw, (row as f32 + 0.5) * uh),
            Vec2::new(thickness, uh),
        ));
    }

    let boundary = [
        BarrierSegment::boundary(
            Vec2::new(width / 2.0, 0.0),
            Vec2::new(width, BOUNDARY_THICKNESS),
        ),
        BarrierSegment::boundary(
            Vec2::new(width, height / 2.0),
            Vec2::new(BOUNDARY_THICKNESS, height),
        ),
        BarrierSegment::boundary(
            Vec2::new(width / 2.0, height),
            Vec2::new(width, BOUNDARY_THICKNESS),
        ),
        BarrierSegment::boundary(
            Vec2::new(0.0, height / 2.0),
            Vec2::new(BOUNDARY_THICKNESS, height),
        ),
    ];

    let min_unit = uw.min(uh);
    let goal = GoalRegion::new(
        Vec2::new(width - uw / 2.0, height - uh / 2.0),
        min_unit / 2.0,
    );

    log::debug!(
        "Laid out {} walls over {}x{} (unit {}x{})",
        barriers.len(),
        width,
        height,
        uw,
        uh
    );

    Ok(Layout {
        barriers,
        boundary,
        goal,
        ball_start: Vec2::new(uw / 2.0, uh / 2.0),
        ball_radius: min_unit / 4.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MazeError;
    use crate::sim::body::BodyLabel;
    use crate::sim::maze::generate;
    use crate::sim::rng::RandomSource;

    struct Zeros;

    impl RandomSource for Zeros {
        fn next_index(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_open_maze_has_only_boundary() {
        let maze = Maze::open(4, 6);
        let bodies = layout(&maze, 50.0, 40.0).unwrap();
        assert!(bodies.barriers.is_empty());
        assert_eq!(bodies.segments().count(), 4);
        assert!(bodies.segments().all(|s| s.label == BodyLabel::Boundary));
    }

    #[test]
    fn test_boundary_rectangle() {
        let maze = Maze::open(2, 4);
        let bodies = layout(&maze, 25.0, 50.0).unwrap();
        let [top, right, bottom, left] = &bodies.boundary;
        assert_eq!(top.center, Vec2::new(50.0, 0.0));
        assert_eq!(top.size, Vec2::new(100.0, 2.0));
        assert_eq!(right.center, Vec2::new(100.0, 50.0));
        assert_eq!(right.size, Vec2::new(2.0, 100.0));
        assert_eq!(bottom.center, Vec2::new(50.0, 100.0));
        assert_eq!(left.center, Vec2::new(0.0, 50.0));
        assert!(bodies.boundary.iter().all(|s| s.is_static));
    }

    #[test]
    fn test_closed_walls_placement() {
        // Zeros carve V[0][0], H[0][1], V[1][0]; only H[0][0] stays closed
        let maze = generate(2, 2, &mut Zeros).unwrap();
        let bodies = layout(&maze, 100.0, 80.0).unwrap();
        assert_eq!(bodies.barriers.len(), 1);

        let wall = &bodies.barriers[0];
        assert_eq!(wall.label, BodyLabel::Wall);
        assert!(wall.is_static);
        assert_eq!(wall.center, Vec2::new(50.0, 80.0));
        assert_eq!(wall.size, Vec2::new(100.0, WALL_THICKNESS));
    }

    #[test]
    fn test_fully_closed_walls() {
        let maze = Maze::closed(1, 2);
        let bodies = layout_with_thickness(&maze, 30.0, 20.0, 4.0).unwrap();
        assert_eq!(bodies.barriers.len(), 1);
        assert_eq!(bodies.barriers[0].center, Vec2::new(30.0, 10.0));
        assert_eq!(bodies.barriers[0].size, Vec2::new(4.0, 20.0));

        // 2 closed horizontals + 2 closed verticals
        let maze = Maze::closed(2, 2);
        let bodies = layout(&maze, 10.0, 10.0).unwrap();
        assert_eq!(bodies.barriers.len(), 4);
        assert_eq!(bodies.barriers[0].center, Vec2::new(5.0, 10.0));
        assert_eq!(bodies.barriers[1].center, Vec2::new(15.0, 10.0));
        assert_eq!(bodies.barriers[2].center, Vec2::new(10.0, 5.0));
        assert_eq!(bodies.barriers[3].center, Vec2::new(10.0, 15.0));
    }

    #[test]
    fn test_goal_and_ball() {
        let maze = Maze::open(10, 16);
        let bodies = layout(&maze, 60.0, 40.0).unwrap();
        assert_eq!(bodies.goal.center, Vec2::new(960.0 - 30.0, 400.0 - 20.0));
        assert_eq!(bodies.goal.size, 20.0);
        assert_eq!(bodies.goal.label, BodyLabel::Goal);
        assert_eq!(bodies.ball_start, Vec2::new(30.0, 20.0));
        assert_eq!(bodies.ball_radius, 10.0);
        assert_eq!(bodies.ball().vel, Vec2::ZERO);
    }

    #[test]
    fn test_invalid_units() {
        let maze = Maze::open(2, 2);
        assert!(layout(&maze, 0.0, 10.0).is_err());
        assert!(layout(&maze, 10.0, -1.0).is_err());
        assert!(layout_with_thickness(&maze, 10.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_overflowing_extent_rejected() {
        let maze = Maze::open(1, 2);
        assert!(matches!(
            layout(&maze, f32::MAX, 1.0),
            Err(MazeError::InvalidDimension { name: "width", .. })
        ));
        let maze = Maze::open(3, 1);
        assert!(matches!(
            layout(&maze, 1.0, f32::MAX),
            Err(MazeError::InvalidDimension { name: "height", .. })
        ));
    }
}
