use fx_core::{Document, Element, Overlay, Rect, Viewport};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const OVERLAY_CLASS: &str = "custom-cursor-container";
const OVERLAY_MARKUP: &str = r#"<div class="cursor-dot"></div><div class="cursor-ring"><span class="cursor-text"></span></div>"#;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Width, touch capability and pixel ratio of the current window.
pub fn viewport() -> Viewport {
    let Some(window) = web::window() else {
        return Viewport {
            width: 0.0,
            touch_capable: false,
            device_pixel_ratio: 1.0,
        };
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as f32;
    let touch_capable =
        js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    Viewport {
        width,
        touch_capable,
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

/// `Element` over a live HTML element.
#[derive(Clone, Debug)]
pub struct DomElement(pub web::HtmlElement);

impl DomElement {
    pub fn from_element(el: web::Element) -> Option<Self> {
        el.dyn_into::<web::HtmlElement>().ok().map(DomElement)
    }
}

impl Element for DomElement {
    fn bounding_rect(&self) -> Rect {
        rect_of(&self.0)
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.0.style().set_property(property, value);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(DomElement::from_element)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<DomElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .filter_map(DomElement::from_element)
        .collect()
}

/// `Document` over the page; the overlay is appended to `<body>`.
#[derive(Clone)]
pub struct DomDocument {
    document: web::Document,
}

impl DomDocument {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Document for DomDocument {
    type Node = DomElement;

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        query_all(&self.document, selector)
    }

    fn add_class(&self, class: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().add_1(class);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().remove_1(class);
        }
    }

    fn append_overlay(&self) -> Option<Overlay<DomElement>> {
        let body = self.document.body()?;
        let container = self.document.create_element("div").ok()?;
        container.set_class_name(OVERLAY_CLASS);
        container.set_inner_html(OVERLAY_MARKUP);
        body.append_child(&container).ok()?;
        let find = |selector: &str| {
            container
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(DomElement::from_element)
        };
        match (find(".cursor-dot"), find(".cursor-ring"), find(".cursor-text")) {
            (Some(dot), Some(ring), Some(label)) => Some(Overlay { dot, ring, label }),
            _ => {
                container.remove();
                None
            }
        }
    }

    fn remove_overlay(&self, overlay: &Overlay<DomElement>) {
        match overlay.dot.0.parent_element() {
            Some(container) => container.remove(),
            None => overlay.dot.0.remove(),
        }
    }
}
