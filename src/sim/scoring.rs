//! Made-shot detection
//!
//! A make is judged from rim-plane crossing geometry, not from a physical
//! rim collision. On a make the ball is forced into a slow vertical drop so
//! it falls through the net instead of continuing its arc.

use glam::Vec3;

use super::collision::{Contact, CourtGeometry};
use super::state::Ball;
use crate::horizontal_distance;

/// Velocity given to a ball that has just dropped through the rim
pub const DROP_THROUGH_VELOCITY: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Whether the ball is currently passing down through the rim opening
pub fn is_through_rim(ball: &Ball, geo: &CourtGeometry) -> bool {
    let rim = geo.hoop.rim_center();
    !ball.has_scored
        && ball.velocity.y < 0.0
        && (ball.position.y - rim.y).abs() < ball.radius
        && horizontal_distance(ball.position, rim) < geo.rim_radius - ball.radius
}

/// Rim stage of the collision pipeline
pub fn rim_stage(ball: &mut Ball, geo: &CourtGeometry) -> Contact {
    if !is_through_rim(ball, geo) {
        return Contact::None;
    }
    ball.has_scored = true;
    ball.velocity = DROP_THROUGH_VELOCITY;
    Contact::Made
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RIM_HEIGHT;
    use crate::settings::Settings;
    use crate::sim::state::Hoop;

    fn geometry(rim_radius: f32) -> CourtGeometry {
        let settings = Settings {
            rim_radius,
            ..Default::default()
        };
        CourtGeometry::new(&settings, Hoop::Far)
    }

    fn ball_at(offset: Vec3, velocity: Vec3) -> Ball {
        let mut ball = Ball::new(Hoop::Far.rim_center() + offset, 0.24);
        ball.velocity = velocity;
        ball.is_flying = true;
        ball
    }

    #[test]
    fn test_descending_through_center_scores() {
        let geo = geometry(2.0);
        let mut ball = ball_at(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.5, -4.0, 3.0));

        assert_eq!(rim_stage(&mut ball, &geo), Contact::Made);
        assert!(ball.has_scored);
        assert_eq!(ball.velocity, DROP_THROUGH_VELOCITY);
    }

    #[test]
    fn test_ascending_does_not_score() {
        let geo = geometry(2.0);
        let mut ball = ball_at(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(rim_stage(&mut ball, &geo), Contact::None);
        assert!(!ball.has_scored);
    }

    #[test]
    fn test_outside_opening_does_not_score() {
        let geo = geometry(0.36);
        // Touching the outer edge is not inside the opening
        let mut ball = ball_at(Vec3::new(0.2, 0.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(rim_stage(&mut ball, &geo), Contact::None);

        let mut ball = ball_at(Vec3::new(0.1, 0.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(rim_stage(&mut ball, &geo), Contact::Made);
    }

    #[test]
    fn test_too_far_from_rim_plane() {
        let geo = geometry(2.0);
        let mut ball = ball_at(Vec3::new(0.0, 0.3, 0.0), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(rim_stage(&mut ball, &geo), Contact::None);
        assert!((ball.position.y - (RIM_HEIGHT + 0.3)).abs() < 1e-6);
    }

    #[test]
    fn test_scores_once_per_flight() {
        let geo = geometry(2.0);
        let mut ball = ball_at(Vec3::ZERO, Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(rim_stage(&mut ball, &geo), Contact::Made);
        assert_eq!(rim_stage(&mut ball, &geo), Contact::None);
    }
}
