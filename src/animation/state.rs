use super::scale::Motion;

/// Scale, direction and resting point of one animated node.
///
/// `direction` is -1, 0 or 1; zero means the node is at rest on
/// `prev_scale`, which is always 0 or 1 between legs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleState {
    pub scale: f32,
    pub direction: f32,
    pub prev_scale: f32,
}

impl ScaleState {
    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advance the scale by one tick.
    ///
    /// Once the scale has moved more than a full unit away from its resting
    /// point it snaps onto the next resting point, the state goes idle, and
    /// `on_complete` receives the new resting scale.
    pub fn update(&mut self, motion: &Motion, on_complete: impl FnOnce(f32)) {
        self.scale += motion.update_value(self.scale, self.direction, motion.squares, 1);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.direction;
            self.direction = 0.0;
            self.prev_scale = self.scale;
            on_complete(self.prev_scale);
        }
    }

    /// Begin a leg towards the opposite resting point. Ignored mid-leg.
    pub fn start_updating(&mut self, on_start: impl FnOnce()) {
        if self.is_idle() {
            self.direction = 1.0 - 2.0 * self.prev_scale;
            on_start();
        }
    }
}
