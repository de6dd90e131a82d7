use glam::{vec2, Affine2, Mat2, Vec2};

use crate::animation::divide_scale;
use crate::config::Config;

/// One filled square to paint, in surface coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub center: Vec2,
    pub half_extent: f32,
    /// Clockwise rotation in radians.
    pub angle: f32,
}

impl Square {
    pub fn corners(&self) -> [Vec2; 4] {
        let rotation = Mat2::from_angle(self.angle);
        let h = self.half_extent;
        [vec2(-h, -h), vec2(h, -h), vec2(h, h), vec2(-h, h)].map(|c| self.center + rotation * c)
    }
}

/// Placement of the figure on a `width × height` surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureGeometry {
    pub width: f32,
    pub height: f32,
    nodes: usize,
    squares: usize,
    size_factor: f32,
    square_factor: f32,
}

impl FigureGeometry {
    pub fn new(config: &Config, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            nodes: config.nodes,
            squares: config.motion.squares,
            size_factor: config.size_factor,
            square_factor: config.square_factor,
        }
    }

    /// Vertical distance between node centres.
    pub fn gap(&self) -> f32 {
        self.height / (self.nodes + 1) as f32
    }

    /// Arm length: how far each anchor square sits from the node centre.
    pub fn size(&self) -> f32 {
        self.gap() / self.size_factor
    }

    pub fn square_half_extent(&self) -> f32 {
        self.size() / self.square_factor
    }

    pub fn node_center(&self, index: usize) -> Vec2 {
        vec2(self.width / 2.0, self.gap() * (index + 1) as f32)
    }

    /// The four squares of node `index` at `scale`.
    ///
    /// Each node has two arms, each with an anchor square and a sliding
    /// square. Over the first half of the scale the sliding squares move
    /// to the centre column, one upwards and one downwards; over the second
    /// half the second arm swings half a turn about the node centre.
    pub fn node_squares(&self, index: usize, scale: f32) -> Vec<Square> {
        let sc1 = divide_scale(scale, 0, 2);
        let sc2 = divide_scale(scale, 1, 2);
        let size = self.size();
        let half_extent = self.square_half_extent();
        let origin = Affine2::from_translation(self.node_center(index));

        let mut squares = Vec::with_capacity(2 * 2);
        for j in 0..2 {
            let angle = (180.0 * j as f32 * sc2).to_radians();
            let arm = origin * Affine2::from_angle(angle) * Affine2::from_translation(vec2(-size, 0.0));

            squares.push(Square {
                center: arm.transform_point2(Vec2::ZERO),
                half_extent,
                angle,
            });

            let slide = vec2(
                size * divide_scale(sc1, j, self.squares),
                -size * sc1 * (1.0 - 2.0 * j as f32),
            );
            squares.push(Square {
                center: arm.transform_point2(slide),
                half_extent,
                angle,
            });
        }
        squares
    }
}
