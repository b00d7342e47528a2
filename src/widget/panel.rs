use super::{Widget, WidgetBase};

pub struct Panel {
    base: WidgetBase,
    children: Vec<Box<dyn Widget>>,
}

impl Panel {
    pub fn new(name: &str) -> Self {
        Self {
            base: WidgetBase::new(name),
            children: Vec::new(),
        }
    }
}

impl Widget for Panel {
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
