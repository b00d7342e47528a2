//! Retained-mode widget layout engine: a widget tree whose declarative
//! length specs (pixel, percent) resolve into concrete pixel rectangles each
//! frame, with docking, alignment and animated transitions. Rendering is
//! delegated to a [`UiRenderer`] collaborator.

pub mod dock;
pub mod geometry;
pub mod length;
pub mod render;
pub mod transition;
pub mod widget;

pub use dock::{DockSpace, DockingOptions, DockingStyle};
pub use geometry::Rect;
pub use length::{Length, Length2, UnitType};
pub use render::{DrawableSync, FontRef, UiRenderer};
pub use transition::{Lerp, TimeFunction, Transition, Transition1, Transition2};
pub use widget::{
    AnchorStyle, AttachError, AttachFailure, Label, LayoutContext, Panel, PositionType, Viewport,
    Widget, WidgetAlign, WidgetBase, advance_transitions, attach, detach, dispose, draw_order,
    tree_is_dirty, update_spatial_state,
};
