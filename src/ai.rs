use crate::{paddle::Paddle, vector::Vector2};

/// Steers a paddle toward the ball's current height at a fixed speed.
/// No prediction: full speed up, full speed down, or stop.
#[derive(Debug, Clone)]
pub struct AiController {
    max_speed: f32,
    last_position: Vector2,
}

impl AiController {
    pub fn new(paddle: &Paddle, max_speed: f32) -> Self {
        assert!(max_speed > 0.0, "AI speed must be positive, got {max_speed}");
        Self {
            max_speed,
            last_position: paddle.position(),
        }
    }

    pub fn tick(&mut self, paddle: &mut Paddle, target_y: f32) {
        let offset = target_y - self.last_position.y;

        let velocity = if offset < 0.0 {
            Vector2::new(0.0, -self.max_speed)
        } else if offset > 0.0 {
            Vector2::new(0.0, self.max_speed)
        } else {
            Vector2::ZERO
        };
        paddle.set_velocity(velocity);

        paddle.update();
        self.last_position = paddle.position();
    }

    /// Re-reads the paddle after it was moved from outside.
    pub fn sync(&mut self, paddle: &Paddle) {
        self.last_position = paddle.position();
    }
}
