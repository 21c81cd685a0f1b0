use gpui::{ColorSpace, Rgba, linear_color_stop, linear_gradient};
use gpui_squircle::{Squircle, SquircleStyled};

use crate::utils::RgbaExt;

pub trait SquircleExt {
    /// A top-lit border fading from `color` to transparent.
    fn border_highlight(self, color: Rgba, opacity: f32) -> Self;
}

impl SquircleExt for Squircle {
    fn border_highlight(self, color: Rgba, opacity: f32) -> Self {
        self.border_color(
            linear_gradient(
                180.,
                linear_color_stop(color.alpha(opacity), 0.),
                linear_color_stop(color.alpha(0.), 1.),
            )
            .color_space(ColorSpace::Oklab),
        )
    }
}
