use std::time::Duration;

use gpui::{
    CornersRefinement, ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, Rgba, prelude::*,
    px,
};
use gpui_squircle::{SquircleStyleRefinement, SquircleStyled, squircle};

use crate::{theme::ThemeExt, utils::{RgbaExt, active_transition}};

/// How far the ring starts from the element before settling on it.
const SETTLE_DISTANCE: f32 = 8.;

/// A ring drawn around its parent while `focus_handle` is focused.
///
/// Meant to be the first child of a `relative` element.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    color: Option<Rgba>,
    style: SquircleStyleRefinement,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            color: None,
            style: SquircleStyleRefinement::default(),
        }
    }

    /// Overrides the accent color of the ring.
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}

impl SquircleStyled for FocusRing {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style.inner
    }

    fn outer_style(&mut self) -> &mut SquircleStyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = self
            .color
            .unwrap_or_else(|| cx.active_variant().colors.accent.primary);
        let is_focused = self.focus_handle.is_focused(window);

        let progress = *active_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(365),
            is_focused,
        )
        .evaluate(window, cx);

        let distance = (1. - progress) * SETTLE_DISTANCE;
        let corner_radii = grow_corner_radii(&self.style.corner_radii, px(8.), px(distance + 1.));

        squircle()
            .absolute()
            .inset(px(-distance))
            .border(px(3.))
            .border_outside()
            .border_color(color.alpha(progress * 0.3))
            .map(|mut this| {
                this.outer_style().corner_radii = corner_radii;
                this
            })
    }
}

fn grow_corner_radii(
    corner_radii: &CornersRefinement<Pixels>,
    default: Pixels,
    by: Pixels,
) -> CornersRefinement<Pixels> {
    CornersRefinement {
        top_left: Some(corner_radii.top_left.unwrap_or(default) + by),
        top_right: Some(corner_radii.top_right.unwrap_or(default) + by),
        bottom_right: Some(corner_radii.bottom_right.unwrap_or(default) + by),
        bottom_left: Some(corner_radii.bottom_left.unwrap_or(default) + by),
    }
}
