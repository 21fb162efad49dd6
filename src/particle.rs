// Simple particle struct to keep track of individual position, heading, speed, size, color
// and how many seconds it has left before being regenerated

use crate::color::Color;
use crate::vector2::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    // unit vector
    pub direction: Vector2,
    // units per second
    pub speed: f32,
    // side length of the drawn square
    pub size: f32,
    pub color: Color,
    // seconds remaining
    pub life_span: f32,
}

impl Particle {
    pub fn new(
        position: Vector2,
        direction: Vector2,
        speed: f32,
        size: f32,
        color: Color,
        life_span: f32,
    ) -> Particle {
        Particle {
            position,
            direction,
            speed,
            size,
            color,
            life_span,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life_span > 0.0
    }

    /// Moves the particle along `direction` masked by `restraint`, speeds it up
    /// by `acceleration * elapsed` and burns `elapsed` seconds of its life.
    pub fn advance(&mut self, restraint: Vector2, acceleration: f32, elapsed: f32) {
        let offset = self.direction * restraint * (self.speed * elapsed);
        self.position += offset;
        self.speed += acceleration * elapsed;
        self.life_span -= elapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_only_while_life_span_positive() {
        let mut p = Particle::new(Vector2::ZERO, Vector2::UNIT_X, 100.0, 3.0, Color::WHITE, 0.0);
        assert!(!p.is_alive());
        p.life_span = 0.01;
        assert!(p.is_alive());
        p.life_span = -0.5;
        assert!(!p.is_alive());
    }

    #[test]
    fn advance_masks_horizontal_motion() {
        let mut p = Particle::new(
            Vector2::new(10.0, 10.0),
            Vector2::UNIT_X,
            150.0,
            3.0,
            Color::WHITE,
            2.0,
        );
        p.advance(Vector2::new(0.0, 1.0), 100.0, 0.5);
        assert_eq!(p.position, Vector2::new(10.0, 10.0));
        assert_eq!(p.speed, 200.0);
        assert_eq!(p.life_span, 1.5);
    }

    #[test]
    fn advance_moves_along_vertical_component() {
        let mut p = Particle::new(
            Vector2::ZERO,
            Vector2::new(0.6, 0.8),
            100.0,
            3.0,
            Color::WHITE,
            1.0,
        );
        p.advance(Vector2::new(0.0, 1.0), 0.0, 0.25);
        assert_eq!(p.position.x, 0.0);
        assert!((p.position.y - 20.0).abs() < 1e-4);
    }
}
