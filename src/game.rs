//! One play session
//!
//! Owns the maze, the physics context mirrored by the host and the win
//! controller. Hosts build a `Game` once, push its bodies into their physics
//! engine, then forward collisions and key presses every frame.

use glam::Vec2;
use serde::Serialize;

use crate::error::{MazeResult, require_positive};
use crate::settings::Settings;
use crate::sim::{
    BodyLabel, Direction, GameState, Maze, RngState, StateChange, World, generate,
    layout_with_thickness,
};

/// Body description in the shape the JS physics host expects
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum HostBody {
    #[serde(rename_all = "camelCase")]
    Rectangle {
        center_x: f32,
        center_y: f32,
        width: f32,
        height: f32,
        label: BodyLabel,
        is_static: bool,
        fill_style: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Circle {
        center_x: f32,
        center_y: f32,
        radius: f32,
        label: BodyLabel,
        is_static: bool,
        fill_style: &'static str,
    },
}

/// A single maze run from generation to win
#[derive(Debug, Clone)]
pub struct Game {
    pub settings: Settings,
    /// Seed the maze was generated from
    pub seed: u64,
    /// Cell size in viewport units
    pub unit: Vec2,
    pub world: World,
    pub state: GameState,
    maze: Maze,
}

impl Game {
    /// Generate a maze filling a `width x height` viewport.
    ///
    /// `fallback_seed` is used when the settings don't pin one.
    pub fn new(
        settings: Settings,
        width: f32,
        height: f32,
        fallback_seed: u64,
    ) -> MazeResult<Self> {
        settings.validate()?;
        let width = require_positive("width", width)?;
        let height = require_positive("height", height)?;

        let unit = Vec2::new(
            width / settings.cells_horizontal as f32,
            height / settings.cells_vertical as f32,
        );
        let seed = settings.seed.unwrap_or(fallback_seed);

        let mut rng = RngState::new(seed).to_rng();
        let maze = generate(settings.cells_vertical, settings.cells_horizontal, &mut rng)?;
        let layout = layout_with_thickness(&maze, unit.x, unit.y, settings.wall_thickness)?;
        let world = World::from_layout(&layout);

        log::info!(
            "New game: seed {}, {} bodies, unit {:.1}x{:.1}",
            seed,
            world.barriers.len() + 2,
            unit.x,
            unit.y
        );

        Ok(Self {
            settings,
            seed,
            unit,
            world,
            state: GameState::new(),
            maze,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Forward one step's collision pairs to the controller
    pub fn handle_collisions<I>(&mut self, pairs: I) -> Option<StateChange>
    where
        I: IntoIterator<Item = (BodyLabel, BodyLabel)>,
    {
        self.state.on_collisions(&mut self.world, pairs)
    }

    /// Collision pair as reported by the host. Unknown labels can never win.
    pub fn handle_collision_labels(&mut self, a: &str, b: &str) -> Option<StateChange> {
        match (a.parse::<BodyLabel>(), b.parse::<BodyLabel>()) {
            (Ok(a), Ok(b)) => self.state.on_collision(&mut self.world, (a, b)),
            _ => None,
        }
    }

    /// Apply a key-down; returns the new ball velocity
    pub fn handle_command(&mut self, dir: Direction) -> Vec2 {
        self.world.ball.apply_command(dir, self.settings.velocity_step);
        self.world.ball.vel
    }

    /// Every body for the host: barriers in order, then goal, then ball
    pub fn host_bodies(&self) -> Vec<HostBody> {
        let mut bodies: Vec<HostBody> = self
            .world
            .barriers
            .iter()
            .map(|b| HostBody::Rectangle {
                center_x: b.center.x,
                center_y: b.center.y,
                width: b.size.x,
                height: b.size.y,
                label: b.label,
                is_static: b.is_static,
                fill_style: b.label.fill_style(),
            })
            .collect();

        let goal = &self.world.goal;
        bodies.push(HostBody::Rectangle {
            center_x: goal.center.x,
            center_y: goal.center.y,
            width: goal.size,
            height: goal.size,
            label: goal.label,
            is_static: true,
            fill_style: goal.label.fill_style(),
        });

        let ball = &self.world.ball;
        bodies.push(HostBody::Circle {
            center_x: ball.pos.x,
            center_y: ball.pos.y,
            radius: ball.radius,
            label: ball.label,
            is_static: false,
            fill_style: ball.label.fill_style(),
        });

        bodies
    }

    pub fn host_bodies_json(&self) -> MazeResult<String> {
        Ok(serde_json::to_string(&self.host_bodies())?)
    }
}
