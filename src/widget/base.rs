use std::rc::Rc;

use glam::Vec2;
use smol_str::SmolStr;

use crate::dock::{DockingOptions, DockingStyle};
use crate::geometry::Rect;
use crate::length::{Length, Length2};
use crate::render::FontRef;
use crate::transition::{TimeFunction, Transition1, Transition2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetAlign {
    Left,
    #[default]
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Center,
}

impl WidgetAlign {
    pub(crate) fn factor(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(0.0, 0.5),
            Self::TopLeft => Vec2::new(0.0, 0.0),
            Self::Top => Vec2::new(0.5, 0.0),
            Self::TopRight => Vec2::new(1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.5),
            Self::BottomRight => Vec2::new(1.0, 1.0),
            Self::Bottom => Vec2::new(0.5, 1.0),
            Self::BottomLeft => Vec2::new(0.0, 1.0),
            Self::Center => Vec2::new(0.5, 0.5),
        }
    }
}

bitflags::bitflags! {
    // Empty means "follow the widget's alignment"; RIGHT measures x from the
    // parent rect's right edge, BOTTOM likewise for y, opposing bits center.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AnchorStyle: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl AnchorStyle {
    pub(crate) fn factor(self) -> Vec2 {
        let x = match (self.contains(Self::LEFT), self.contains(Self::RIGHT)) {
            (true, true) => 0.5,
            (false, true) => 1.0,
            _ => 0.0,
        };
        let y = match (self.contains(Self::TOP), self.contains(Self::BOTTOM)) {
            (true, true) => 0.5,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vec2::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionType {
    #[default]
    Static,
    // Escapes any dock allotment, resolves against the parent rect.
    Absolute,
    // Resolves against the viewport rect regardless of nesting depth.
    Fixed,
    Relative,
}

// Reference geometry handed down by the parent during the spatial pass.
// All rectangles are absolute viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    pub parent_rect: Rect,
    pub viewport_rect: Rect,
    pub allotted: Option<Rect>,
}

impl LayoutContext {
    pub fn root(rect: Rect) -> Self {
        Self {
            parent_rect: rect,
            viewport_rect: rect,
            allotted: None,
        }
    }
}

// Setters only mark the widget dirty; a batch of mutations costs one
// recalculation at the next spatial pass.
pub struct WidgetBase {
    id: u64,
    name: SmolStr,
    align: WidgetAlign,
    anchor: AnchorStyle,
    docking: DockingOptions,
    position_type: PositionType,
    z_index: u16,
    font: Option<Rc<dyn FontRef>>,

    raw_position: Length2,
    raw_dimensions: Length2,
    raw_min_size: Length2,
    raw_max_size: Length2,
    target_position: Option<Transition2>,
    target_dimensions: Option<Transition2>,
    target_min_size: Option<Transition2>,
    target_max_size: Option<Transition2>,
    target_docking_size: Option<Transition1>,

    // Processed values, valid after the most recent spatial pass.
    offset: Vec2,
    position: Vec2,
    dimensions: Vec2,
    min_size: Vec2,
    max_size: Vec2,
    processed_docking_size: f32,
    allotted: Option<Rect>,

    attached: bool,
    dirty: bool,
    generation: u64,
}

impl WidgetBase {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            id: super::next_widget_id(),
            name: name.into(),
            align: WidgetAlign::default(),
            anchor: AnchorStyle::empty(),
            docking: DockingOptions::default(),
            position_type: PositionType::default(),
            z_index: 0,
            font: None,
            raw_position: Length2::zero(),
            raw_dimensions: Length2::zero(),
            raw_min_size: Length2::zero(),
            raw_max_size: Length2::px(f32::MAX, f32::MAX),
            target_position: None,
            target_dimensions: None,
            target_min_size: None,
            target_max_size: None,
            target_docking_size: None,
            offset: Vec2::ZERO,
            position: Vec2::ZERO,
            dimensions: Vec2::ZERO,
            min_size: Vec2::ZERO,
            max_size: Vec2::splat(f32::MAX),
            processed_docking_size: 0.0,
            allotted: None,
            attached: false,
            dirty: true,
            generation: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn align(&self) -> WidgetAlign {
        self.align
    }

    pub fn set_align(&mut self, align: WidgetAlign) {
        self.align = align;
        self.dirty = true;
    }

    pub fn anchor(&self) -> AnchorStyle {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: AnchorStyle) {
        self.anchor = anchor;
        self.dirty = true;
    }

    pub fn docking_options(&self) -> DockingOptions {
        self.docking
    }

    pub fn set_docking_options(&mut self, options: DockingOptions) {
        self.docking = options;
        self.dirty = true;
    }

    pub fn set_docking_style(&mut self, style: DockingStyle) {
        self.docking.style = style;
        self.dirty = true;
    }

    pub fn set_raw_docking_size(&mut self, size: Length) {
        self.docking.size = size;
        self.dirty = true;
    }

    pub fn position_type(&self) -> PositionType {
        self.position_type
    }

    pub fn set_position_type(&mut self, position_type: PositionType) {
        self.position_type = position_type;
        self.dirty = true;
    }

    pub fn z_index(&self) -> u16 {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: u16) {
        if self.z_index != z_index {
            self.z_index = z_index;
            // Z-order feeds draw submission, so this also flags a reload.
            self.generation += 1;
        }
    }

    pub fn font(&self) -> Option<Rc<dyn FontRef>> {
        self.font.clone()
    }

    pub fn set_font(&mut self, font: Rc<dyn FontRef>) {
        self.font = Some(font);
        self.dirty = true;
    }

    pub fn raw_position(&self) -> Length2 {
        self.raw_position
    }

    pub fn set_raw_position(&mut self, raw: Length2) {
        self.raw_position = raw;
        self.target_position = None;
        self.dirty = true;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.set_raw_position(Length2::px(position.x, position.y));
    }

    pub fn raw_dimensions(&self) -> Length2 {
        self.raw_dimensions
    }

    pub fn set_raw_dimensions(&mut self, raw: Length2) {
        self.raw_dimensions = raw;
        self.target_dimensions = None;
        self.dirty = true;
    }

    pub fn set_dimensions(&mut self, dimensions: Vec2) {
        self.set_raw_dimensions(Length2::px(dimensions.x, dimensions.y));
    }

    pub fn raw_min_size(&self) -> Length2 {
        self.raw_min_size
    }

    pub fn set_raw_min_size(&mut self, raw: Length2) {
        self.raw_min_size = raw;
        self.target_min_size = None;
        self.dirty = true;
    }

    pub fn raw_max_size(&self) -> Length2 {
        self.raw_max_size
    }

    pub fn set_raw_max_size(&mut self, raw: Length2) {
        self.raw_max_size = raw;
        self.target_max_size = None;
        self.dirty = true;
    }

    pub fn set_target_position(&mut self, transition: Transition2) {
        self.target_position = Some(transition);
        self.dirty = true;
    }

    pub fn transition_position_to(&mut self, raw_final: Length2, duration: f32, timing: TimeFunction) {
        self.set_target_position(Transition2::to(raw_final, duration, timing));
    }

    pub fn set_target_dimensions(&mut self, transition: Transition2) {
        self.target_dimensions = Some(transition);
        self.dirty = true;
    }

    pub fn transition_dimensions_to(&mut self, raw_final: Length2, duration: f32, timing: TimeFunction) {
        self.set_target_dimensions(Transition2::to(raw_final, duration, timing));
    }

    pub fn set_target_min_size(&mut self, transition: Transition2) {
        self.target_min_size = Some(transition);
        self.dirty = true;
    }

    pub fn set_target_max_size(&mut self, transition: Transition2) {
        self.target_max_size = Some(transition);
        self.dirty = true;
    }

    pub fn set_target_docking_size(&mut self, transition: Transition1) {
        self.target_docking_size = Some(transition);
        self.dirty = true;
    }

    pub fn is_position_transitioning(&self) -> bool {
        self.target_position.is_some_and(|t| t.is_active() || !t.is_started())
    }

    pub fn is_dimensions_transitioning(&self) -> bool {
        self.target_dimensions.is_some_and(|t| t.is_active() || !t.is_started())
    }

    pub fn is_min_size_transitioning(&self) -> bool {
        self.target_min_size.is_some_and(|t| t.is_active() || !t.is_started())
    }

    pub fn is_max_size_transitioning(&self) -> bool {
        self.target_max_size.is_some_and(|t| t.is_active() || !t.is_started())
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }

    pub fn min_size(&self) -> Vec2 {
        self.min_size
    }

    pub fn max_size(&self) -> Vec2 {
        self.max_size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_position_size(self.position, self.dimensions)
    }

    pub fn processed_docking_size(&self) -> f32 {
        self.processed_docking_size
    }

    pub fn allotted(&self) -> Option<Rect> {
        self.allotted
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // Monotonic counter bumped when the rectangle or z-order changes; the
    // render sync layer compares it instead of polling a reload flag.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    // Completed transitions fold their final spec back into the raw value.
    pub(crate) fn advance_transitions(&mut self, dt: f32) -> bool {
        let mut animating = false;

        if let Some(t) = &mut self.target_position {
            animating |= t.advance(dt);
            if t.is_started() && !t.is_active() {
                self.raw_position = t.raw_final;
                self.target_position = None;
            }
        }
        if let Some(t) = &mut self.target_dimensions {
            animating |= t.advance(dt);
            if t.is_started() && !t.is_active() {
                self.raw_dimensions = t.raw_final;
                self.target_dimensions = None;
            }
        }
        if let Some(t) = &mut self.target_min_size {
            animating |= t.advance(dt);
            if t.is_started() && !t.is_active() {
                self.raw_min_size = t.raw_final;
                self.target_min_size = None;
            }
        }
        if let Some(t) = &mut self.target_max_size {
            animating |= t.advance(dt);
            if t.is_started() && !t.is_active() {
                self.raw_max_size = t.raw_final;
                self.target_max_size = None;
            }
        }
        if let Some(t) = &mut self.target_docking_size {
            animating |= t.advance(dt);
            if t.is_started() && !t.is_active() {
                self.docking.size = t.raw_final;
                self.target_docking_size = None;
            }
        }

        if animating {
            self.dirty = true;
        }
        animating
    }

    // Docking options as seen by the parent's accumulator; an active
    // docking-size transition substitutes its interpolated pixel size.
    // `reference` is the remaining extent on the docked axis, captured once.
    pub(crate) fn effective_docking(&mut self, reference: f32) -> DockingOptions {
        match &mut self.target_docking_size {
            Some(t) => {
                if !t.is_started() {
                    t.start(self.processed_docking_size, reference);
                }
                DockingOptions::new(self.docking.style, Length::px(t.value()))
            }
            None => self.docking,
        }
    }

    pub(crate) fn apply_dock_rect(&mut self, rect: Option<Rect>) {
        self.allotted = rect;
        if let Some(rect) = rect {
            self.processed_docking_size = match self.docking.style {
                DockingStyle::Left | DockingStyle::Right => rect.width,
                DockingStyle::Top | DockingStyle::Bottom => rect.height,
                DockingStyle::Fill | DockingStyle::None => 0.0,
            };
        } else {
            self.processed_docking_size = 0.0;
        }
    }

    // Recomputes the processed rectangle. Docked widgets adopt their allotted
    // rect outright (clamped into the min/max box); Absolute and Fixed escape
    // the allotment. `measured` fills in axes whose raw dimension is zero.
    // Returns true when the rectangle moved, which bumps the generation.
    pub(crate) fn update_spatial(&mut self, ctx: &LayoutContext, measured: Option<Vec2>) -> bool {
        let slot = match self.position_type {
            PositionType::Static | PositionType::Relative => ctx.allotted,
            PositionType::Absolute | PositionType::Fixed => None,
        };
        let reference = match self.position_type {
            PositionType::Fixed => ctx.viewport_rect,
            _ => slot.unwrap_or(ctx.parent_rect),
        };
        let ref_size = reference.size();
        let align = self.align.factor();

        let (position, dimensions) = if let Some(slot) = slot {
            // The slot pins position and dimensions, so pending transitions
            // on either fold straight to their final spec.
            if let Some(t) = self.target_position.take() {
                self.raw_position = t.raw_final;
            }
            if let Some(t) = self.target_dimensions.take() {
                self.raw_dimensions = t.raw_final;
            }
            self.offset = Vec2::ZERO;
            self.min_size =
                resolve_animated(&mut self.target_min_size, self.raw_min_size, self.min_size, ref_size)
                    .max(Vec2::ZERO);
            self.max_size =
                resolve_animated(&mut self.target_max_size, self.raw_max_size, self.max_size, ref_size);
            let dimensions = self.apply_min_max(slot.size());
            let position = slot.position() + align * (slot.size() - dimensions);
            (position, dimensions)
        } else {
            let offset =
                resolve_animated(&mut self.target_position, self.raw_position, self.offset, ref_size);
            self.offset = offset;

            let mut dimensions = resolve_animated(
                &mut self.target_dimensions,
                self.raw_dimensions,
                self.dimensions,
                ref_size,
            );
            if let Some(measured) = measured {
                if dimensions.x <= 0.0 {
                    dimensions.x = measured.x;
                }
                if dimensions.y <= 0.0 {
                    dimensions.y = measured.y;
                }
            }

            self.min_size =
                resolve_animated(&mut self.target_min_size, self.raw_min_size, self.min_size, ref_size)
                    .max(Vec2::ZERO);
            self.max_size =
                resolve_animated(&mut self.target_max_size, self.raw_max_size, self.max_size, ref_size);
            let dimensions = self.apply_min_max(dimensions);

            let parent_factor = if self.anchor.is_empty() {
                align
            } else {
                self.anchor.factor()
            };
            let position =
                reference.position() + parent_factor * ref_size + offset - align * dimensions;
            (position, dimensions)
        };

        let changed = position != self.position || dimensions != self.dimensions;
        self.position = position;
        self.dimensions = dimensions;
        self.dirty = false;
        if changed {
            self.generation += 1;
        }
        changed
    }

    // A contradictory pair (min above max) resolves in favor of the minimum.
    fn apply_min_max(&self, dimensions: Vec2) -> Vec2 {
        let max = self.max_size.max(self.min_size);
        dimensions.max(self.min_size).min(max)
    }
}

// A transition that has not started yet captures its endpoints here, against
// the reference geometry of this pass.
fn resolve_animated(
    slot: &mut Option<Transition2>,
    raw: Length2,
    current: Vec2,
    reference: Vec2,
) -> Vec2 {
    match slot {
        Some(t) => {
            if !t.is_started() {
                t.start(current, reference);
            }
            t.value()
        }
        None => raw.resolve(reference),
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorStyle, LayoutContext, PositionType, WidgetAlign, WidgetBase};
    use crate::dock::{DockingOptions, DockingStyle};
    use crate::geometry::Rect;
    use crate::length::{Length, Length2};
    use crate::transition::{TimeFunction, Transition2};
    use glam::Vec2;

    fn context(width: f32, height: f32) -> LayoutContext {
        LayoutContext::root(Rect::new(0.0, 0.0, width, height))
    }

    #[test]
    fn pixel_position_and_dimensions_resolve_directly() {
        let mut base = WidgetBase::new("plain");
        base.set_position(Vec2::new(15.0, 25.0));
        base.set_dimensions(Vec2::new(40.0, 30.0));
        base.update_spatial(&context(800.0, 600.0), None);

        assert_eq!(base.rect(), Rect::new(15.0, 25.0, 40.0, 30.0));
        assert!(!base.is_dirty());
    }

    #[test]
    fn percent_dimensions_resolve_against_parent() {
        let mut base = WidgetBase::new("half");
        base.set_raw_dimensions(Length2::percent(50.0, 25.0));
        base.update_spatial(&context(400.0, 200.0), None);

        assert_eq!(base.dimensions(), Vec2::new(200.0, 50.0));
    }

    #[test]
    fn bottom_right_alignment_lands_in_the_corner() {
        let mut base = WidgetBase::new("corner");
        base.set_align(WidgetAlign::BottomRight);
        base.set_dimensions(Vec2::new(20.0, 20.0));
        base.update_spatial(&context(100.0, 100.0), None);

        assert_eq!(base.position(), Vec2::new(80.0, 80.0));
    }

    #[test]
    fn center_alignment_centers_the_box() {
        let mut base = WidgetBase::new("centered");
        base.set_align(WidgetAlign::Center);
        base.set_dimensions(Vec2::new(20.0, 40.0));
        base.update_spatial(&context(100.0, 100.0), None);

        assert_eq!(base.position(), Vec2::new(40.0, 30.0));
    }

    #[test]
    fn anchor_overrides_the_parent_reference_point() {
        let mut base = WidgetBase::new("anchored");
        base.set_anchor(AnchorStyle::RIGHT | AnchorStyle::BOTTOM);
        base.set_position(Vec2::new(-10.0, -10.0));
        base.set_dimensions(Vec2::new(20.0, 20.0));
        base.update_spatial(&context(100.0, 100.0), None);

        // Measured from the bottom-right corner, top-left alignment.
        assert_eq!(base.position(), Vec2::new(90.0, 90.0));
    }

    #[test]
    fn dimensions_clamp_into_min_max_box() {
        let mut base = WidgetBase::new("clamped");
        base.set_dimensions(Vec2::new(500.0, 1.0));
        base.set_raw_min_size(Length2::px(10.0, 10.0));
        base.set_raw_max_size(Length2::px(100.0, 100.0));
        base.update_spatial(&context(800.0, 600.0), None);

        assert_eq!(base.dimensions(), Vec2::new(100.0, 10.0));
        assert!(base.dimensions().cmpge(base.min_size()).all());
        assert!(base.dimensions().cmple(base.max_size()).all());
    }

    #[test]
    fn contradictory_min_max_resolves_toward_min() {
        let mut base = WidgetBase::new("contradiction");
        base.set_dimensions(Vec2::new(50.0, 50.0));
        base.set_raw_min_size(Length2::px(80.0, 80.0));
        base.set_raw_max_size(Length2::px(20.0, 20.0));
        base.update_spatial(&context(800.0, 600.0), None);

        assert_eq!(base.dimensions(), Vec2::new(80.0, 80.0));
    }

    #[test]
    fn spatial_update_is_idempotent_without_mutation() {
        let mut base = WidgetBase::new("stable");
        base.set_raw_position(Length2::percent(10.0, 10.0));
        base.set_raw_dimensions(Length2::percent(50.0, 50.0));
        let ctx = context(640.0, 480.0);

        base.update_spatial(&ctx, None);
        let first = base.rect();
        let generation = base.generation();
        let changed = base.update_spatial(&ctx, None);

        assert_eq!(base.rect(), first);
        assert!(!changed);
        assert_eq!(base.generation(), generation);
    }

    #[test]
    fn generation_bumps_only_when_the_rectangle_moves() {
        let mut base = WidgetBase::new("tracked");
        base.set_dimensions(Vec2::new(10.0, 10.0));
        base.update_spatial(&context(100.0, 100.0), None);
        let generation = base.generation();

        base.set_position(Vec2::new(5.0, 5.0));
        base.update_spatial(&context(100.0, 100.0), None);
        assert_eq!(base.generation(), generation + 1);
    }

    #[test]
    fn z_index_change_flags_a_drawable_reload() {
        let mut base = WidgetBase::new("layered");
        let generation = base.generation();
        base.set_z_index(3);
        assert_eq!(base.generation(), generation + 1);
        base.set_z_index(3);
        assert_eq!(base.generation(), generation + 1);
    }

    #[test]
    fn fixed_widgets_resolve_against_the_viewport() {
        let mut base = WidgetBase::new("fixed");
        base.set_position_type(PositionType::Fixed);
        base.set_raw_position(Length2::percent(50.0, 0.0));
        base.set_dimensions(Vec2::new(10.0, 10.0));

        let ctx = LayoutContext {
            parent_rect: Rect::new(100.0, 100.0, 50.0, 50.0),
            viewport_rect: Rect::new(0.0, 0.0, 800.0, 600.0),
            allotted: None,
        };
        base.update_spatial(&ctx, None);
        assert_eq!(base.position(), Vec2::new(400.0, 0.0));
    }

    #[test]
    fn dimension_transition_tracks_frames_and_folds_on_completion() {
        let mut base = WidgetBase::new("animated");
        base.set_dimensions(Vec2::new(100.0, 40.0));
        let ctx = context(800.0, 600.0);
        base.update_spatial(&ctx, None);

        base.transition_dimensions_to(Length2::px(200.0, 40.0), 2.0, TimeFunction::Linear);
        assert!(base.is_dimensions_transitioning());

        // First pass starts the transition from the current dimensions.
        base.advance_transitions(0.0);
        base.update_spatial(&ctx, None);
        assert_eq!(base.dimensions(), Vec2::new(100.0, 40.0));

        base.advance_transitions(1.0);
        base.update_spatial(&ctx, None);
        assert_eq!(base.dimensions(), Vec2::new(150.0, 40.0));

        base.advance_transitions(1.0);
        base.update_spatial(&ctx, None);
        assert_eq!(base.dimensions(), Vec2::new(200.0, 40.0));
        assert!(!base.is_dimensions_transitioning());
        // Folded back into the raw spec.
        assert_eq!(base.raw_dimensions(), Length2::px(200.0, 40.0));
    }

    #[test]
    fn position_transition_with_explicit_endpoints_captures_reference_once() {
        let mut base = WidgetBase::new("sliding");
        base.set_dimensions(Vec2::new(10.0, 10.0));
        let mut transition = Transition2::new(
            Length2::percent(0.0, 0.0),
            Length2::percent(50.0, 0.0),
            2.0,
            TimeFunction::Linear,
        );
        transition.start(Vec2::ZERO, Vec2::new(200.0, 100.0));
        base.set_target_position(transition);

        base.advance_transitions(1.0);
        // The parent grew, but endpoints were captured against 200x100.
        base.update_spatial(&context(400.0, 100.0), None);
        assert_eq!(base.position().x, 50.0);
    }

    #[test]
    fn dock_slot_folds_pending_geometry_transitions() {
        let mut base = WidgetBase::new("docked");
        base.set_docking_options(DockingOptions::new(DockingStyle::Left, Length::px(50.0)));
        let slot = Rect::new(0.0, 0.0, 50.0, 100.0);
        let ctx = LayoutContext {
            parent_rect: Rect::new(0.0, 0.0, 200.0, 100.0),
            viewport_rect: Rect::new(0.0, 0.0, 200.0, 100.0),
            allotted: Some(slot),
        };
        base.update_spatial(&ctx, None);

        base.transition_dimensions_to(Length2::px(80.0, 100.0), 1.0, TimeFunction::Linear);
        base.transition_position_to(Length2::px(10.0, 10.0), 1.0, TimeFunction::Linear);
        base.advance_transitions(0.5);
        base.update_spatial(&ctx, None);

        // The slot still pins the rectangle and nothing stays pending.
        assert_eq!(base.rect(), slot);
        assert!(!base.is_dimensions_transitioning());
        assert!(!base.is_position_transitioning());
        assert_eq!(base.raw_dimensions(), Length2::px(80.0, 100.0));
        assert_eq!(base.raw_position(), Length2::px(10.0, 10.0));
    }
}
