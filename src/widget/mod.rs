//! The widget tree: capability trait, spatial traversal, and tree mutation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use log::debug;

use crate::dock::{DockSpace, DockingStyle};
use crate::render::UiRenderer;

mod base;
mod label;
mod panel;
mod viewport;

pub use base::{AnchorStyle, LayoutContext, PositionType, WidgetAlign, WidgetBase};
pub use label::Label;
pub use panel::Panel;
pub use viewport::Viewport;

pub(crate) fn next_widget_id() -> u64 {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

// Variants share their spatial state through WidgetBase and opt into child
// ownership by returning Some from the children accessors.
pub trait Widget {
    fn base(&self) -> &WidgetBase;
    fn base_mut(&mut self) -> &mut WidgetBase;

    fn children(&self) -> Option<&[Box<dyn Widget>]> {
        None
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Box<dyn Widget>>> {
        None
    }

    fn update_drawable_spatial_state(&mut self) {}

    fn refresh_drawables(&mut self, renderer: &mut dyn UiRenderer) {
        renderer.remove_drawables(self.base().id());
        renderer.add_drawables(self.base());
    }

    // Content-driven size (e.g. text metrics), used for axes without an
    // explicit raw dimension.
    fn measure_content(&self) -> Option<Vec2> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachError {
    AlreadyAttached,
    NotAContainer,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached => write!(f, "widget is already attached to a tree"),
            Self::NotAContainer => write!(f, "target widget cannot own children"),
        }
    }
}

impl std::error::Error for AttachError {}

// Failed attach, handing the rejected widget back to the caller.
pub struct AttachFailure {
    pub reason: AttachError,
    pub widget: Box<dyn Widget>,
}

impl fmt::Debug for AttachFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachFailure")
            .field("reason", &self.reason)
            .field("widget", &self.widget.base().name())
            .finish()
    }
}

// On failure the tree is untouched and the widget comes back in the error.
pub fn attach(parent: &mut dyn Widget, mut child: Box<dyn Widget>) -> Result<(), AttachFailure> {
    if parent.children().is_none() {
        return Err(AttachFailure {
            reason: AttachError::NotAContainer,
            widget: child,
        });
    }
    if child.base().is_attached() {
        return Err(AttachFailure {
            reason: AttachError::AlreadyAttached,
            widget: child,
        });
    }

    if child.base().font().is_none() {
        if let Some(font) = parent.base().font() {
            child.base_mut().set_font(font);
        }
    }
    child.base_mut().set_attached(true);
    child.base_mut().mark_dirty();
    debug!(
        "attach widget '{}' ({}) under '{}'",
        child.base().name(),
        child.base().id(),
        parent.base().name()
    );
    if let Some(children) = parent.children_mut() {
        children.push(child);
    }
    parent.base_mut().mark_dirty();
    Ok(())
}

pub fn detach(parent: &mut dyn Widget, id: u64) -> Option<Box<dyn Widget>> {
    let children = parent.children_mut()?;
    let index = children.iter().position(|child| child.base().id() == id)?;
    let mut child = children.remove(index);
    child.base_mut().set_attached(false);
    parent.base_mut().mark_dirty();
    debug!("detach widget '{}' ({})", child.base().name(), id);
    Some(child)
}

pub fn dispose(widget: &mut dyn Widget, renderer: &mut dyn UiRenderer) {
    if let Some(children) = widget.children_mut() {
        for child in children.iter_mut() {
            dispose(child.as_mut(), renderer);
        }
        children.clear();
    }
    renderer.remove_drawables(widget.base().id());
    widget.base_mut().set_attached(false);
}

// Returns true while anything is still animating, which forces a spatial
// pass this frame.
pub fn advance_transitions(widget: &mut dyn Widget, dt: f32) -> bool {
    let mut animating = widget.base_mut().advance_transitions(dt);
    if let Some(children) = widget.children_mut() {
        for child in children.iter_mut() {
            animating |= advance_transitions(child.as_mut(), dt);
        }
    }
    animating
}

pub fn tree_is_dirty(widget: &dyn Widget) -> bool {
    if widget.base().is_dirty() {
        return true;
    }
    if let Some(children) = widget.children() {
        for child in children {
            if tree_is_dirty(child.as_ref()) {
                return true;
            }
        }
    }
    false
}

// One full spatial pass, parent before children. Edge-docked children carve
// the parent's content rect in child order, fill-docked children take what
// is left, and only then does each child recompute and recurse.
pub fn update_spatial_state(widget: &mut dyn Widget, ctx: &LayoutContext) {
    let measured = widget.measure_content();
    widget.base_mut().update_spatial(ctx, measured);
    let content = widget.base().rect();
    let viewport_rect = ctx.viewport_rect;

    if let Some(children) = widget.children_mut() {
        let mut space = DockSpace::new(content);
        for child in children.iter_mut() {
            let base = child.base_mut();
            match base.docking_options().style {
                DockingStyle::None => base.apply_dock_rect(None),
                DockingStyle::Fill => {}
                style => {
                    let options = base.effective_docking(space.extent_for(style));
                    base.apply_dock_rect(space.reserve(options));
                }
            }
        }
        for child in children.iter_mut() {
            let base = child.base_mut();
            if base.docking_options().style == DockingStyle::Fill {
                let options = base.effective_docking(0.0);
                base.apply_dock_rect(space.reserve(options));
            }
        }

        for child in children.iter_mut() {
            let child_ctx = LayoutContext {
                parent_rect: content,
                viewport_rect,
                allotted: child.base().allotted(),
            };
            update_spatial_state(child.as_mut(), &child_ctx);
        }
    }

    widget.update_drawable_spatial_state();
}

// Draw submission order: z-index ascending, ties keep insertion order.
pub fn draw_order(children: &[Box<dyn Widget>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by_key(|&index| children[index].base().z_index());
    order
}
