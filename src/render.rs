//! Collaborator interfaces: the renderer that owns drawable primitives and
//! the font handle used as a text measurement source.

use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::widget::{Widget, WidgetBase, draw_order};

pub trait UiRenderer {
    fn add_drawables(&mut self, widget: &WidgetBase);
    fn remove_drawables(&mut self, widget_id: u64);
}

pub trait FontRef {
    fn measure(&self, text: &str) -> Vec2;
}

// Per-frame synchronization point: remembers the generation last handed to
// the renderer per widget id, refreshes exactly the widgets that moved
// (walking siblings in draw order), and removes drawables for widgets that
// left the tree.
#[derive(Default)]
pub struct DrawableSync {
    seen: FxHashMap<u64, u64>,
}

impl DrawableSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, root: &mut dyn Widget, renderer: &mut dyn UiRenderer) {
        let mut live = FxHashSet::default();
        walk(root, renderer, &mut self.seen, &mut live);
        self.seen.retain(|id, _| {
            if live.contains(id) {
                true
            } else {
                renderer.remove_drawables(*id);
                false
            }
        });
    }
}

fn walk(
    widget: &mut dyn Widget,
    renderer: &mut dyn UiRenderer,
    seen: &mut FxHashMap<u64, u64>,
    live: &mut FxHashSet<u64>,
) {
    let id = widget.base().id();
    let generation = widget.base().generation();
    live.insert(id);
    if seen.get(&id).copied() != Some(generation) {
        widget.refresh_drawables(renderer);
        seen.insert(id, generation);
    }

    let order = match widget.children() {
        Some(children) => draw_order(children),
        None => return,
    };
    if let Some(children) = widget.children_mut() {
        for index in order {
            walk(children[index].as_mut(), renderer, seen, live);
        }
    }
}
