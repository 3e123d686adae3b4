// Recording surfaces shared by the host-side engine tests.

#![allow(dead_code)]

use fx_core::{Canvas2d, ColorStop, Document, Element, Overlay, Rect, Rgb, Shape, Viewport};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

pub fn desktop() -> Viewport {
    Viewport {
        width: 1280.0,
        touch_capable: false,
        device_pixel_ratio: 2.0,
    }
}

pub fn phone() -> Viewport {
    Viewport {
        width: 390.0,
        touch_capable: true,
        device_pixel_ratio: 3.0,
    }
}

#[derive(Default)]
pub struct MockCanvas {
    pub rect: Rect,
    /// Live layout box; overrides `rect` when present.
    pub layout: Option<Rc<Cell<Rect>>>,
    pub backing: (u32, u32),
    pub scales: Vec<f64>,
    pub clears: usize,
    pub radials: Vec<(Vec2, f32, Vec<ColorStop>)>,
    pub lines: Vec<(Vec2, Vec2, Vec<ColorStop>)>,
    pub shapes: Vec<(Vec2, f32, f32, Rgb, Shape)>,
}

impl MockCanvas {
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            ..Default::default()
        }
    }

    /// A canvas whose layout box can be changed after it is handed over.
    pub fn with_layout(width: f32, height: f32) -> (Self, Rc<Cell<Rect>>) {
        let layout = Rc::new(Cell::new(Rect::new(0.0, 0.0, width, height)));
        let canvas = Self {
            layout: Some(layout.clone()),
            ..Default::default()
        };
        (canvas, layout)
    }

    pub fn at(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(left, top, width, height),
            ..Default::default()
        }
    }
}

impl Canvas2d for MockCanvas {
    fn bounding_rect(&self) -> Rect {
        match &self.layout {
            Some(layout) => layout.get(),
            None => self.rect,
        }
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }

    fn scale(&mut self, factor: f64) {
        self.scales.push(factor);
    }

    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
        self.radials.clear();
        self.lines.clear();
        self.shapes.clear();
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        self.radials.push((center, radius, stops.to_vec()));
    }

    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, stops: &[ColorStop], _width: f32) {
        self.lines.push((from, to, stops.to_vec()));
    }

    fn fill_shape(&mut self, origin: Vec2, rotation: f32, alpha: f32, color: Rgb, shape: &Shape) {
        self.shapes.push((origin, rotation, alpha, color, shape.clone()));
    }
}

#[derive(Default)]
pub struct ElementState {
    pub rect: Rect,
    pub styles: HashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: HashMap<String, MockElement>,
    pub style_writes: usize,
}

#[derive(Clone, Default)]
pub struct MockElement(pub Rc<RefCell<ElementState>>);

impl MockElement {
    pub fn with_rect(rect: Rect) -> Self {
        let el = Self::default();
        el.0.borrow_mut().rect = rect;
        el
    }

    pub fn with_child(self, selector: &str, child: MockElement) -> Self {
        self.0.borrow_mut().children.insert(selector.to_string(), child);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn style_writes(&self) -> usize {
        self.0.borrow().style_writes
    }

    pub fn move_to(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }
}

impl Element for MockElement {
    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        state.styles.insert(property.to_string(), value.to_string());
        state.style_writes += 1;
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.0.borrow().children.get(selector).cloned()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }
}

#[derive(Default)]
pub struct DocumentState {
    pub root: MockElement,
    pub interactive: Vec<MockElement>,
    pub overlays_appended: usize,
    pub overlays_removed: usize,
    pub refuse_overlay: bool,
    pub last_queried: Option<String>,
}

#[derive(Clone, Default)]
pub struct MockDocument(pub Rc<RefCell<DocumentState>>);

impl MockDocument {
    pub fn with_interactive(elements: Vec<MockElement>) -> Self {
        let doc = Self::default();
        doc.0.borrow_mut().interactive = elements;
        doc
    }

    pub fn root_has_class(&self, class: &str) -> bool {
        self.0.borrow().root.has_class(class)
    }
}

impl Document for MockDocument {
    type Node = MockElement;

    fn query_all(&self, selector: &str) -> Vec<MockElement> {
        let mut state = self.0.borrow_mut();
        state.last_queried = Some(selector.to_string());
        state.interactive.clone()
    }

    fn add_class(&self, class: &str) {
        self.0.borrow().root.add_class(class);
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow().root.remove_class(class);
    }

    fn append_overlay(&self) -> Option<Overlay<MockElement>> {
        let mut state = self.0.borrow_mut();
        if state.refuse_overlay {
            return None;
        }
        state.overlays_appended += 1;
        Some(Overlay {
            dot: MockElement::default(),
            ring: MockElement::default(),
            label: MockElement::default(),
        })
    }

    fn remove_overlay(&self, _overlay: &Overlay<MockElement>) {
        self.0.borrow_mut().overlays_removed += 1;
    }
}
