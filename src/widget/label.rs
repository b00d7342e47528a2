use glam::Vec2;

use super::{Widget, WidgetBase};

// A label without explicit raw dimensions sizes itself from its font's
// measurement of the text.
pub struct Label {
    base: WidgetBase,
    text: String,
}

impl Label {
    pub fn new(name: &str, text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(name),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.mark_dirty();
    }
}

impl Widget for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn measure_content(&self) -> Option<Vec2> {
        let font = self.base.font()?;
        Some(font.measure(&self.text))
    }
}
