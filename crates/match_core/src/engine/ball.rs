//! Ball state and loose-ball physics
//!
//! The ball is the single source of truth for possession: `possessor` is the
//! only place that records who has it.

use serde::{Deserialize, Serialize};

use super::physics_constants::{ball, field};
use crate::models::{Player, PlayerHandle};
use crate::spatial::{geometry, Vector2D};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2D,
    velocity: Vector2D,
    pub possessor: Option<PlayerHandle>,
}

impl Ball {
    pub fn new(position: Vector2D) -> Self {
        Self::with_velocity(position, Vector2D::ZERO)
    }

    /// Loose ball with an initial velocity, capped at [`ball::MAX_SPEED`].
    pub fn with_velocity(position: Vector2D, velocity: Vector2D) -> Self {
        Self { position, velocity: velocity.clamp(ball::MAX_SPEED), possessor: None }
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn is_loose(&self) -> bool {
        self.possessor.is_none()
    }

    pub fn is_possessed(&self) -> bool {
        self.possessor.is_some()
    }

    pub fn give_to(&mut self, handle: PlayerHandle) {
        self.possessor = Some(handle);
    }

    /// Drop possession where the ball is; velocity is kept.
    pub fn release(&mut self) {
        self.possessor = None;
    }

    /// Advance by `dt` seconds.
    ///
    /// `carrier` must be the player `possessor` refers to. A carried ball
    /// takes the carrier's position and velocity; a loose ball decays by
    /// `FRICTION^dt`, stops below `MIN_VELOCITY`, integrates, and is clamped
    /// onto the pitch.
    pub fn update_physics(&mut self, dt: f64, carrier: Option<&Player>) {
        if let Some(player) = carrier {
            self.position = player.field_position;
            self.velocity = player.velocity;
            return;
        }

        self.velocity = self.velocity * ball::FRICTION.powf(dt);
        if self.velocity.magnitude() < ball::MIN_VELOCITY {
            self.velocity = Vector2D::ZERO;
        }
        self.position = geometry::clamp_to_rectangle(
            self.position + self.velocity * dt,
            field::MIN,
            field::MAX,
        );
    }

    /// Strike the ball along `direction` at `power` (0..1 of max speed).
    /// Releases possession.
    pub fn kick(&mut self, direction: Vector2D, power: f64) {
        let velocity = direction.normalize() * (power * ball::MAX_SPEED);
        self.velocity = velocity.clamp(ball::MAX_SPEED);
        self.possessor = None;
    }

    pub fn kick_towards(&mut self, target: Vector2D, power: f64) {
        self.kick(target - self.position, power);
    }

    pub fn distance_to(&self, point: Vector2D) -> f64 {
        self.position.distance_to(point)
    }
}
