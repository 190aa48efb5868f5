use crate::{config::Params, sprite::Sprite, vector::Vector2};

/// A paddle either follows the pointer or integrates its own velocity.
#[derive(Debug, Clone)]
pub struct Paddle {
    sprite: Sprite,
    // where the pointer last put us; drives the implied velocity
    old_position: Vector2,
}

impl Paddle {
    pub fn new(position: Vector2) -> Self {
        Self {
            sprite: Sprite::new(position, Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            old_position: position,
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn position(&self) -> Vector2 {
        self.sprite.position()
    }

    pub fn velocity(&self) -> Vector2 {
        self.sprite.velocity()
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.sprite.set_velocity(velocity);
    }

    pub fn update(&mut self) -> Vector2 {
        self.sprite.advance()
    }

    /// Snaps to the pointer's height. The implied velocity is
    /// `(old - new) * time_step`, which the ball picks up on contact.
    pub fn follow_pointer(&mut self, pointer_y: f32) -> Vector2 {
        let x = self.position().x;
        let delta = self.sprite.set_position(Vector2::new(x, pointer_y));
        let implied = (self.old_position - self.position()) * self.sprite.time_step();
        self.sprite.set_velocity(implied);
        self.old_position = self.position();
        delta
    }

    /// Puts the paddle back at `y` at rest, forgetting pointer history.
    pub fn recenter(&mut self, y: f32) -> Vector2 {
        let x = self.position().x;
        let delta = self.sprite.set_position(Vector2::new(x, y));
        self.sprite.set_velocity(Vector2::ZERO);
        self.old_position = self.position();
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_move_snaps_vertically_and_derives_velocity() {
        let mut paddle = Paddle::new(Vector2::new(40.0, 200.0));

        let delta = paddle.follow_pointer(250.0);

        assert_eq!(paddle.position(), Vector2::new(40.0, 250.0));
        assert_eq!(delta.y, -50.0);
        assert_eq!(delta.x, 0.0);
        assert_eq!(paddle.velocity(), Vector2::new(0.0, -50.0 * Params::TIME_STEP));
    }

    #[test]
    fn implied_velocity_uses_previous_pointer_position() {
        let mut paddle = Paddle::new(Vector2::new(560.0, 200.0));
        paddle.follow_pointer(250.0);
        paddle.follow_pointer(230.0);

        assert_eq!(paddle.velocity(), Vector2::new(0.0, 20.0 * Params::TIME_STEP));

        paddle.follow_pointer(230.0);
        assert_eq!(paddle.velocity(), Vector2::ZERO);
    }

    #[test]
    fn update_integrates_velocity() {
        let mut paddle = Paddle::new(Vector2::new(40.0, 200.0));
        paddle.set_velocity(Vector2::new(0.0, 1.0));

        paddle.update();
        paddle.update();

        assert_eq!(paddle.position().x, 40.0);
        assert!((paddle.position().y - (200.0 + 2.0 * Params::TIME_STEP)).abs() < 1e-4);
    }

    #[test]
    fn recenter_resets_motion() {
        let mut paddle = Paddle::new(Vector2::new(560.0, 200.0));
        paddle.follow_pointer(20.0);

        let delta = paddle.recenter(200.0);
        assert_eq!(delta, Vector2::new(0.0, -180.0));
        assert_eq!(paddle.velocity(), Vector2::ZERO);

        paddle.follow_pointer(210.0);
        assert_eq!(paddle.velocity(), Vector2::new(0.0, -10.0 * Params::TIME_STEP));
    }
}
