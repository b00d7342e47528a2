use log::trace;

use super::{
    LayoutContext, Widget, WidgetBase, advance_transitions, tree_is_dirty, update_spatial_state,
};
use crate::geometry::Rect;
use crate::length::Length2;

// Root of a widget tree, bound to the host window's pixel rectangle. The
// host loop calls `update` once per frame: transitions advance first, then a
// spatial pass runs if anything is dirty or animating.
pub struct Viewport {
    base: WidgetBase,
    children: Vec<Box<dyn Widget>>,
    window: Rect,
}

impl Viewport {
    pub fn new(name: &str, width: f32, height: f32) -> Self {
        let mut base = WidgetBase::new(name);
        base.set_raw_dimensions(Length2::px(width, height));
        Self {
            base,
            children: Vec::new(),
            window: Rect::new(0.0, 0.0, width, height),
        }
    }

    pub fn window_rect(&self) -> Rect {
        self.window
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.window = Rect::new(0.0, 0.0, width, height);
        self.base.set_raw_dimensions(Length2::px(width, height));
        trace!("viewport resize to {width}x{height}");
    }

    // Per-frame entry point from the host loop. `dt` is in seconds.
    pub fn update(&mut self, dt: f32) {
        let animating = advance_transitions(self, dt);
        if animating || tree_is_dirty(self) {
            let ctx = LayoutContext::root(self.window);
            update_spatial_state(self, &ctx);
        }
    }

    // Recomputes the whole tree immediately, dirty or not.
    pub fn force_update_spatial_state(&mut self) {
        let ctx = LayoutContext::root(self.window);
        update_spatial_state(self, &ctx);
    }
}

impl Widget for Viewport {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn children(&self) -> Option<&[Box<dyn Widget>]> {
        Some(&self.children)
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Box<dyn Widget>>> {
        Some(&mut self.children)
    }
}
