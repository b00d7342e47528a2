//! Docking: reserving portions of a parent's content rectangle for children,
//! edge-by-edge in child order.

use crate::geometry::Rect;
use crate::length::Length;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DockingStyle {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
    Fill,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DockingOptions {
    pub style: DockingStyle,
    pub size: Length,
}

impl DockingOptions {
    pub const fn new(style: DockingStyle, size: Length) -> Self {
        Self { style, size }
    }

    pub const fn fill() -> Self {
        Self::new(DockingStyle::Fill, Length::zero())
    }

    pub fn is_docked(&self) -> bool {
        self.style != DockingStyle::None
    }
}

// The parent's remaining content rect during one docking pass, threaded
// through as a value; each reservation carves what the next sibling sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockSpace {
    remaining: Rect,
}

impl DockSpace {
    pub fn new(content: Rect) -> Self {
        Self { remaining: content }
    }

    pub fn remaining(&self) -> Rect {
        self.remaining
    }

    pub fn extent_for(&self, style: DockingStyle) -> f32 {
        match style {
            DockingStyle::Left | DockingStyle::Right => self.remaining.width,
            DockingStyle::Top | DockingStyle::Bottom => self.remaining.height,
            DockingStyle::None | DockingStyle::Fill => 0.0,
        }
    }

    // Sizes resolve against the current remaining extent and clamp to what
    // is left. Fill takes everything; a later Fill in the same pass gets a
    // zero-area rect at the same origin.
    pub fn reserve(&mut self, options: DockingOptions) -> Option<Rect> {
        let rect = &mut self.remaining;
        match options.style {
            DockingStyle::None => None,
            DockingStyle::Left => {
                let size = options.size.resolve(rect.width).clamp(0.0, rect.width.max(0.0));
                let reserved = Rect::new(rect.x, rect.y, size, rect.height);
                rect.x += size;
                rect.width -= size;
                Some(reserved)
            }
            DockingStyle::Top => {
                let size = options.size.resolve(rect.height).clamp(0.0, rect.height.max(0.0));
                let reserved = Rect::new(rect.x, rect.y, rect.width, size);
                rect.y += size;
                rect.height -= size;
                Some(reserved)
            }
            DockingStyle::Right => {
                let size = options.size.resolve(rect.width).clamp(0.0, rect.width.max(0.0));
                let reserved = Rect::new(rect.x + rect.width - size, rect.y, size, rect.height);
                rect.width -= size;
                Some(reserved)
            }
            DockingStyle::Bottom => {
                let size = options.size.resolve(rect.height).clamp(0.0, rect.height.max(0.0));
                let reserved = Rect::new(rect.x, rect.y + rect.height - size, rect.width, size);
                rect.height -= size;
                Some(reserved)
            }
            DockingStyle::Fill => {
                let reserved = *rect;
                rect.width = 0.0;
                rect.height = 0.0;
                Some(reserved)
            }
        }
    }
}
