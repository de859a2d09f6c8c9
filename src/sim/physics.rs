//! Ball integration and visual spin
//!
//! Explicit Euler under constant gravity. Spin is purely visual and never
//! feeds back into the trajectory.

use glam::{Quat, Vec3};

use super::state::{Ball, RotationDelta};
use crate::UP;

/// Advance a flying ball by `dt` seconds. Idle balls are left untouched.
pub fn integrate(ball: &mut Ball, gravity: Vec3, dt: f32) {
    if !ball.is_flying {
        return;
    }
    ball.velocity += gravity * dt;
    ball.position += ball.velocity * dt;
}

/// Refresh the remembered spin from the current velocity and rotate the ball.
///
/// The axis is only overwritten when `velocity × up` is long enough to
/// normalize; near the apex of a vertical shot the previous spin is held so
/// the rotation doesn't jitter.
pub fn update_spin(ball: &mut Ball, dt: f32, axis_epsilon: f32) {
    if !ball.is_flying {
        ball.last_rotation = RotationDelta::NONE;
        return;
    }

    let cross = ball.velocity.cross(UP);
    if cross.length_squared() > axis_epsilon {
        ball.spin_axis = cross.normalize();
        ball.spin_speed = ball.velocity.length() / ball.radius;
    }

    let angle = ball.spin_speed * dt;
    let delta = Quat::from_axis_angle(ball.spin_axis, angle);
    ball.orientation = (delta * ball.orientation).normalize();
    ball.last_rotation = RotationDelta {
        axis: ball.spin_axis,
        angle,
    };
}
