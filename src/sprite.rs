use crate::{config::Params, vector::Vector2};

/// Axis-aligned rectangle centred on `position`, moving at `velocity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    position: Vector2,
    velocity: Vector2,
    width: f32,
    height: f32,
    time_step: f32,
}

impl Sprite {
    pub fn new(position: Vector2, width: f32, height: f32) -> Self {
        Self::with_time_step(position, width, height, Params::TIME_STEP)
    }

    pub fn with_time_step(position: Vector2, width: f32, height: f32, time_step: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "sprite dimensions must be positive, got {width}x{height}"
        );
        assert!(time_step > 0.0, "time step must be positive, got {time_step}");

        Self {
            position,
            velocity: Vector2::ZERO,
            width,
            height,
            time_step,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Corners clockwise from the top left.
    pub fn corners(&self) -> [Vector2; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let Vector2 { x, y } = self.position;

        [
            Vector2::new(x - half_w, y - half_h),
            Vector2::new(x + half_w, y - half_h),
            Vector2::new(x + half_w, y + half_h),
            Vector2::new(x - half_w, y + half_h),
        ]
    }

    /// Integrates one time step and returns the displacement.
    pub fn advance(&mut self) -> Vector2 {
        let delta = self.velocity * self.time_step;
        self.position = self.position + delta;
        delta
    }

    /// True when this sprite's centre is strictly inside `other`'s box grown
    /// by half of this sprite's own size. Touching edges do not count.
    pub fn collides_with(&self, other: &Sprite) -> bool {
        let [top_left, _, bottom_right, _] = other.corners();
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let x_bounds = (top_left.x - half_w, bottom_right.x + half_w);
        let y_bounds = (top_left.y - half_h, bottom_right.y + half_h);

        self.position.x > x_bounds.0
            && self.position.x < x_bounds.1
            && self.position.y > y_bounds.0
            && self.position.y < y_bounds.1
    }

    /// Snaps to `position`, returning `previous - position`.
    pub fn set_position(&mut self, position: Vector2) -> Vector2 {
        let delta = self.position - position;
        self.position = position;
        delta
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_form_centred_rectangle_clockwise() {
        let positions = [(0.0, 0.0), (300.0, 200.0), (-12.5, 7.25)];
        let dims = [(15.0, 15.0), (10.0, 85.0), (3.0, 1.0)];

        for &(px, py) in &positions {
            for &(w, h) in &dims {
                let sprite = Sprite::new(Vector2::new(px, py), w, h);
                let [tl, tr, br, bl] = sprite.corners();

                assert_eq!(tl, Vector2::new(px - w / 2.0, py - h / 2.0));
                assert_eq!(tr, Vector2::new(px + w / 2.0, py - h / 2.0));
                assert_eq!(br, Vector2::new(px + w / 2.0, py + h / 2.0));
                assert_eq!(bl, Vector2::new(px - w / 2.0, py + h / 2.0));
                assert_eq!(tr.x - tl.x, w);
                assert_eq!(bl.y - tl.y, h);
            }
        }
    }

    #[test]
    fn advance_moves_by_velocity_times_step_each_call() {
        let mut sprite = Sprite::with_time_step(Vector2::new(100.0, 100.0), 15.0, 15.0, 0.5);
        sprite.set_velocity(Vector2::new(4.0, -2.0));

        let first = sprite.advance();
        let second = sprite.advance();

        assert_eq!(first, Vector2::new(2.0, -1.0));
        assert_eq!(second, first);
        assert_eq!(sprite.position(), Vector2::new(104.0, 98.0));
    }

    #[test]
    fn set_position_returns_previous_minus_new() {
        let mut sprite = Sprite::new(Vector2::new(40.0, 200.0), 10.0, 85.0);
        let delta = sprite.set_position(Vector2::new(40.0, 250.0));

        assert_eq!(delta, Vector2::new(0.0, -50.0));
        assert_eq!(sprite.position(), Vector2::new(40.0, 250.0));
    }

    #[test]
    fn collision_inflates_target_by_probe_half_extents() {
        let paddle = Sprite::new(Vector2::new(560.0, 200.0), 10.0, 85.0);

        // Paddle's front face is at x = 555; a 15-wide probe reaches it at x = 547.5.
        let touching = Sprite::new(Vector2::new(548.0, 200.0), 15.0, 15.0);
        let short = Sprite::new(Vector2::new(547.0, 200.0), 15.0, 15.0);
        let on_edge = Sprite::new(Vector2::new(547.5, 200.0), 15.0, 15.0);

        assert!(touching.collides_with(&paddle));
        assert!(!short.collides_with(&paddle));
        assert!(!on_edge.collides_with(&paddle), "bounds are strict");
    }

    #[test]
    fn collision_uses_probe_size_on_both_axes() {
        let ball = Sprite::new(Vector2::new(0.0, 0.0), 2.0, 2.0);
        let near = Sprite::new(Vector2::new(10.0, 0.0), 2.0, 2.0);
        let wide = Sprite::new(Vector2::new(10.0, 0.0), 20.0, 2.0);
        let above = Sprite::new(Vector2::new(0.0, -3.0), 2.0, 4.0);

        assert!(!ball.collides_with(&near));
        assert!(ball.collides_with(&wide));
        assert!(wide.collides_with(&ball));
        // Vertical reach is 1 + 2 = 3, and the boundary itself is excluded.
        assert!(!ball.collides_with(&above));
    }

    #[test]
    #[should_panic(expected = "sprite dimensions must be positive")]
    fn zero_width_panics() {
        Sprite::new(Vector2::ZERO, 0.0, 10.0);
    }
}
