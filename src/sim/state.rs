//! Simulation context and win state machine
//!
//! `World` is the shared physics context the host mirrors: gravity plus every
//! body description. `GameState` is the two-phase controller that reacts to
//! collision reports. The controller never holds the world; the host passes
//! it in with each notification.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{BallActor, BarrierSegment, BodyLabel, GoalRegion};
use super::layout::Layout;
use crate::consts::WIN_GRAVITY_Y;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is loose in the maze
    #[default]
    Playing,
    /// Ball reached the goal. Terminal.
    Won,
}

/// Side effects the host must apply after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChange {
    /// Gravity is on and walls are dynamic; show the banner if asked
    Won { reveal_banner: bool },
}

/// Shared physics parameters and bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Zero while playing, pointing down after a win
    pub gravity: Vec2,
    /// Boundary followed by internal walls
    pub barriers: Vec<BarrierSegment>,
    pub goal: GoalRegion,
    pub ball: BallActor,
}

impl World {
    /// Build the starting world from a layout. Gravity starts disabled.
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            gravity: Vec2::ZERO,
            barriers: layout.segments().cloned().collect(),
            goal: layout.goal.clone(),
            ball: layout.ball(),
        }
    }

    /// Internal maze walls
    pub fn walls(&self) -> impl Iterator<Item = &BarrierSegment> {
        self.barriers.iter().filter(|b| b.label == BodyLabel::Wall)
    }

    /// Let every maze wall fall. Boundary segments stay put.
    fn release_walls(&mut self) -> usize {
        let mut released = 0;
        for barrier in self.barriers.iter_mut() {
            if barrier.label == BodyLabel::Wall && barrier.is_static {
                barrier.is_static = false;
                released += 1;
            }
        }
        released
    }
}

/// Whether an unordered pair is exactly {ball, goal}
pub fn is_goal_contact(a: BodyLabel, b: BodyLabel) -> bool {
    matches!(
        (a, b),
        (BodyLabel::Ball, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Ball)
    )
}

/// Win controller for a single play session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Handle one collision report.
    ///
    /// The first {ball, goal} contact while playing switches to `Won`, turns on
    /// gravity and releases the maze walls. Anything else, and everything after
    /// the win, leaves both the state and the world untouched.
    pub fn on_collision(
        &mut self,
        world: &mut World,
        pair: (BodyLabel, BodyLabel),
    ) -> Option<StateChange> {
        if self.phase != GamePhase::Playing || !is_goal_contact(pair.0, pair.1) {
            return None;
        }

        self.phase = GamePhase::Won;
        world.gravity.y = WIN_GRAVITY_Y;
        let released = world.release_walls();

        log::info!("Goal reached: gravity on, {} walls released", released);
        Some(StateChange::Won { reveal_banner: true })
    }

    /// Handle every pair reported in one simulation step, in order.
    /// Returns the transition if one of them triggered it.
    pub fn on_collisions<I>(&mut self, world: &mut World, pairs: I) -> Option<StateChange>
    where
        I: IntoIterator<Item = (BodyLabel, BodyLabel)>,
    {
        let mut change = None;
        for pair in pairs {
            if let Some(c) = self.on_collision(world, pair) {
                change = Some(c);
            }
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::layout;
    use crate::sim::maze::generate;
    use crate::sim::rng::RngState;

    fn world(seed: u64) -> World {
        let maze = generate(6, 8, &mut RngState::new(seed).to_rng()).unwrap();
        World::from_layout(&layout(&maze, 40.0, 40.0).unwrap())
    }

    #[test]
    fn test_world_starts_static_without_gravity() {
        let world = world(1);
        assert_eq!(world.gravity, Vec2::ZERO);
        assert!(world.barriers.iter().all(|b| b.is_static));
        assert_eq!(world.barriers.len(), world.walls().count() + 4);
        assert_eq!(world.ball.pos, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_ball_goal_wins() {
        let mut world = world(2);
        let mut state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);

        let change = state.on_collision(&mut world, (BodyLabel::Ball, BodyLabel::Goal));
        assert_eq!(change, Some(StateChange::Won { reveal_banner: true }));
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(world.gravity, Vec2::new(0.0, 1.0));
        assert!(world.walls().all(|w| !w.is_static));
        assert!(
            world
                .barriers
                .iter()
                .filter(|b| b.label == BodyLabel::Boundary)
                .all(|b| b.is_static)
        );
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let mut world = world(3);
        let mut state = GameState::new();
        assert!(
            state
                .on_collision(&mut world, (BodyLabel::Goal, BodyLabel::Ball))
                .is_some()
        );
        assert!(state.is_won());
    }

    #[test]
    fn test_other_pairs_ignored() {
        let mut world = world(4);
        let before = world.clone();
        let mut state = GameState::new();

        for pair in [
            (BodyLabel::Ball, BodyLabel::Wall),
            (BodyLabel::Ball, BodyLabel::Boundary),
            (BodyLabel::Wall, BodyLabel::Goal),
            (BodyLabel::Ball, BodyLabel::Ball),
            (BodyLabel::Goal, BodyLabel::Goal),
        ] {
            assert_eq!(state.on_collision(&mut world, pair), None);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(world, before);
    }

    #[test]
    fn test_second_contact_is_noop() {
        let mut world = world(5);
        let mut state = GameState::new();
        state.on_collision(&mut world, (BodyLabel::Ball, BodyLabel::Goal));

        // Host moves things around after the win; a repeat contact must not touch them
        world.gravity.y = 0.5;
        world.barriers[5].is_static = true;
        let after_first = world.clone();

        let change = state.on_collision(&mut world, (BodyLabel::Ball, BodyLabel::Goal));
        assert_eq!(change, None);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(world, after_first);
    }

    #[test]
    fn test_batch_fires_once() {
        let mut world = world(6);
        let mut state = GameState::new();
        let pairs = [
            (BodyLabel::Ball, BodyLabel::Wall),
            (BodyLabel::Ball, BodyLabel::Goal),
            (BodyLabel::Goal, BodyLabel::Ball),
        ];
        let change = state.on_collisions(&mut world, pairs);
        assert_eq!(change, Some(StateChange::Won { reveal_banner: true }));
        assert!(state.is_won());
        assert_eq!(state.on_collisions(&mut world, pairs), None);
    }
}
