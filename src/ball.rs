use rand::Rng;
use tracing::{debug, trace};

use crate::{
    config::{CourtBounds, Params},
    paddle::Paddle,
    sprite::Sprite,
    vector::Vector2,
};

#[derive(Debug, Clone)]
pub struct Ball {
    sprite: Sprite,
}

impl Ball {
    pub fn new(position: Vector2) -> Self {
        Self {
            sprite: Sprite::new(position, Params::BALL_DIAMETER, Params::BALL_DIAMETER),
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

    pub fn set_position(&mut self, position: Vector2) -> Vector2 {
        self.sprite.set_position(position)
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.sprite.set_velocity(velocity);
    }

    /// Centre court at a random height, moving at the base speed in a random
    /// horizontal direction. The vertical component is the base speed over a
    /// random divisor in 1..=10, so shallow serves dominate.
    pub fn reset_for_serve<R: Rng + ?Sized>(&mut self, bounds: &CourtBounds, rng: &mut R) {
        let y = rng.random_range(0..=bounds.height as i32) as f32;
        self.sprite.set_position(Vector2::new(bounds.width / 2.0, y));

        let divisor = rng.random_range(Params::SERVE_SLOPE_DIVISORS) as f32;
        let v_x = bounds.base_speed * random_sign(rng);
        let v_y = (bounds.base_speed / divisor) * random_sign(rng);
        self.sprite.set_velocity(Vector2::new(v_x, v_y));

        debug!(y, v_x, v_y, "ball served");
    }

    /// Advances one step, returning how far the ball moved.
    pub fn update(&mut self) -> Vector2 {
        self.sprite.advance()
    }

    /// The ball has left the court through either end.
    pub fn is_out_of_bounds(&self, bounds: &CourtBounds) -> bool {
        let x = self.position().x;
        x > bounds.width || x < 0.0
    }

    pub fn hits_wall(&self, bounds: &CourtBounds) -> bool {
        let y = self.position().y;
        y < 0.0 || y > bounds.height
    }

    pub fn collides_with(&self, paddle: &Paddle) -> bool {
        self.sprite.collides_with(paddle.sprite())
    }

    /// Reverses horizontally and picks up the paddle's vertical velocity.
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle) {
        let v = self.velocity();
        let spin = paddle.velocity().y;
        self.sprite.set_velocity(Vector2::new(-v.x, v.y + spin));
        trace!(spin, "paddle bounce");
    }

    pub fn bounce_off_wall(&mut self) {
        let v = self.velocity();
        self.sprite.set_velocity(Vector2::new(v.x, -v.y));
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
