/// Fraction of a leg covered by one tick in the slow regime.
pub const SCALE_GAP: f32 = 0.05;

/// Threshold at which `scale_factor` steps from 0 to 1.
pub const SCALE_DIVISOR: f32 = 0.51;

/// Number of squares that move within one node.
pub const SQUARES_PER_NODE: usize = 2;

fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Sub-progress of part `i` out of `n` while `value` sweeps 0 → 1.
///
/// Returns 0 before the part's turn, ramps linearly to 1 over the part's
/// `1/n` slice, and stays at 1 afterwards.
pub fn divide_scale(value: f32, i: usize, n: usize) -> f32 {
    let start = (value - i as f32 * inverse(n)).max(0.0);
    start.min(inverse(n)) * n as f32
}

/// Immutable tuning of how fast a scale advances per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub gap: f32,
    pub divisor: f32,
    pub squares: usize,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            gap: SCALE_GAP,
            divisor: SCALE_DIVISOR,
            squares: SQUARES_PER_NODE,
        }
    }
}

impl Motion {
    /// Step function: 0 below the divisor, 1 from the divisor up to twice it.
    pub fn scale_factor(&self, value: f32) -> f32 {
        (value / self.divisor).floor()
    }

    /// Picks `1/a` or `1/b` depending on which side of the divisor `value` is.
    /// `k` is integral, so this is a jump, never a blend.
    pub fn mirror_value(&self, value: f32, a: usize, b: usize) -> f32 {
        let k = self.scale_factor(value);
        (1.0 - k) * inverse(a) + k * inverse(b)
    }

    /// Signed increment applied to a scale on one tick.
    pub fn update_value(&self, value: f32, direction: f32, a: usize, b: usize) -> f32 {
        self.mirror_value(value, a, b) * self.gap * direction
    }
}
