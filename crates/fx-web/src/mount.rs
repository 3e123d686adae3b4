//! `#[wasm_bindgen]` handles that bind the engines to live DOM targets.
//!
//! Each handle owns its engine, one frame loop and every listener it added.
//! `destroy()` (or dropping the handle from JS via `free()`) tears all of it
//! down.

use crate::canvas::CanvasSurface;
use crate::dom::{self, DomDocument, DomElement};
use crate::events::{Listeners, ResizeWatch};
use crate::frame::{FrameLoop, Waker};
use fx_core::{
    AmbientConfig, AmbientParticleField, Animate, ConfettiConfig, ConfettiField, CursorConfig,
    CursorFollower, MagneticConfig, SpringFollower, TiltConfig, TiltFollower,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn window_target() -> anyhow::Result<web::EventTarget> {
    web::window()
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("no window"))
}

/// Events on the canvas are usually swallowed by content stacked above it,
/// so canvas effects listen on their host section instead.
fn canvas_host(canvas: &web::HtmlCanvasElement) -> web::EventTarget {
    match canvas.parent_element() {
        Some(parent) => parent.into(),
        None => canvas.clone().into(),
    }
}

/// Implemented by every handle so auto-mounted effects can be torn down
/// together.
pub(crate) trait Destroy {
    fn destroy_effect(&mut self);
}

trait Teardown {
    fn teardown(&mut self);
}

impl Teardown for AmbientParticleField<CanvasSurface> {
    fn teardown(&mut self) {
        self.destroy();
    }
}

impl Teardown for ConfettiField<CanvasSurface> {
    fn teardown(&mut self) {
        self.destroy();
    }
}

impl Teardown for SpringFollower<DomElement> {
    fn teardown(&mut self) {
        self.destroy();
    }
}

impl Teardown for TiltFollower<DomElement> {
    fn teardown(&mut self) {
        self.destroy();
    }
}

impl Teardown for CursorFollower<DomDocument> {
    fn teardown(&mut self) {
        self.destroy();
    }
}

struct Mounted<E: Animate + Teardown + 'static> {
    engine: Rc<RefCell<E>>,
    frames: FrameLoop,
    listeners: Listeners,
    resize_watch: Option<ResizeWatch>,
}

impl<E: Animate + Teardown + 'static> Mounted<E> {
    fn new(engine: E) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let frames = FrameLoop::attach(engine.clone());
        Self {
            engine,
            frames,
            listeners: Listeners::default(),
            resize_watch: None,
        }
    }

    /// Listen for `event` on `target`, run `handler` against the engine and
    /// wake the frame loop afterwards.
    fn on<Ev>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(&mut E, Ev) + 'static,
    ) where
        Ev: JsCast + 'static,
    {
        let engine = self.engine.clone();
        let waker: Waker = self.frames.waker();
        self.listeners.on(target, event, move |ev: Ev| {
            if let Ok(mut engine) = engine.try_borrow_mut() {
                handler(&mut *engine, ev);
                if engine.is_animating() {
                    waker.wake();
                }
            }
        });
    }

    /// Run `handler` whenever `target`'s layout box changes size.
    fn on_layout_resize(
        &mut self,
        target: &web::Element,
        mut handler: impl FnMut(&mut E) + 'static,
    ) -> anyhow::Result<()> {
        let engine = self.engine.clone();
        let waker = self.frames.waker();
        self.resize_watch = Some(ResizeWatch::new(target, move || {
            if let Ok(mut engine) = engine.try_borrow_mut() {
                handler(&mut *engine);
                if engine.is_animating() {
                    waker.wake();
                }
            }
        })?);
        Ok(())
    }

    fn start(&self) {
        if self.engine.borrow().is_animating() {
            self.frames.wake();
        }
    }
}

impl<E: Animate + Teardown + 'static> Drop for Mounted<E> {
    fn drop(&mut self) {
        self.frames.cancel();
        self.listeners.clear();
        self.resize_watch.take();
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.teardown();
        }
    }
}

// ---------------- Ambient particle network ----------------

#[wasm_bindgen]
pub struct AmbientFieldHandle {
    inner: Option<Mounted<AmbientParticleField<CanvasSurface>>>,
}

impl AmbientFieldHandle {
    pub(crate) fn mount(canvas: web::HtmlCanvasElement, config: AmbientConfig) -> anyhow::Result<Self> {
        let mut field = AmbientParticleField::new(config)?;
        let host = canvas_host(&canvas);
        field.init(CanvasSurface::new(canvas)?, &dom::viewport());
        if !field.is_active() {
            log::info!("[ambient] skipped on mobile viewport");
            return Ok(Self { inner: None });
        }
        let count = field.particles().len();
        let mut mounted = Mounted::new(field);
        mounted.on(&host, "mousemove", |field, ev: web::MouseEvent| {
            field.on_pointer_move(dom::client_point(&ev), Instant::now());
        });
        mounted.on(&host, "mouseleave", |field, _: web::MouseEvent| {
            field.on_pointer_leave();
        });
        mounted.on(&window_target()?, "resize", |field, _: web::Event| {
            field.resize(dom::device_pixel_ratio());
        });
        mounted.start();
        log::info!("[ambient] mounted with {count} particles");
        Ok(Self {
            inner: Some(mounted),
        })
    }
}

#[wasm_bindgen]
impl AmbientFieldHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, particle_count: Option<u32>) -> Result<AmbientFieldHandle, JsValue> {
        let mut config = AmbientConfig::default();
        if let Some(n) = particle_count {
            config.particle_count = n as usize;
        }
        Self::mount(canvas, config).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|m| m.engine.borrow().is_active())
    }

    pub fn resize(&self) {
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().resize(dom::device_pixel_ratio());
        }
    }

    pub fn pause(&self) {
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().pause();
            m.frames.cancel();
        }
    }

    pub fn resume(&self) {
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().resume();
            m.start();
        }
    }

    pub fn destroy(&mut self) {
        if self.inner.take().is_some() {
            log::info!("[ambient] destroyed");
        }
    }
}

impl Destroy for AmbientFieldHandle {
    fn destroy_effect(&mut self) {
        self.destroy();
    }
}

// ---------------- Confetti field ----------------

#[wasm_bindgen]
pub struct ConfettiFieldHandle {
    inner: Option<Mounted<ConfettiField<CanvasSurface>>>,
}

impl ConfettiFieldHandle {
    pub(crate) fn mount(canvas: web::HtmlCanvasElement, config: ConfettiConfig) -> anyhow::Result<Self> {
        let mut field = ConfettiField::new(config)?;
        let host = canvas_host(&canvas);
        let observed: web::Element = canvas.clone().into();
        field.init(CanvasSurface::new(canvas)?, &dom::viewport());
        if !field.is_active() {
            log::info!("[confetti] skipped on mobile viewport");
            return Ok(Self { inner: None });
        }
        let count = field.particles().len();
        let mut mounted = Mounted::new(field);
        mounted.on(&host, "mousemove", |field, ev: web::MouseEvent| {
            field.on_pointer_move(dom::client_point(&ev));
        });
        mounted.on(&host, "mouseleave", |field, _: web::MouseEvent| {
            field.on_pointer_leave();
        });
        mounted.on(&window_target()?, "resize", |field, _: web::Event| {
            field.resize(dom::device_pixel_ratio());
        });
        mounted.on_layout_resize(&observed, |field| {
            field.resize(dom::device_pixel_ratio());
        })?;
        mounted.start();
        log::info!("[confetti] mounted with {count} pieces");
        Ok(Self {
            inner: Some(mounted),
        })
    }
}

#[wasm_bindgen]
impl ConfettiFieldHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, particle_count: Option<u32>) -> Result<ConfettiFieldHandle, JsValue> {
        let mut config = ConfettiConfig::default();
        if let Some(n) = particle_count {
            config.particle_count = n as usize;
        }
        Self::mount(canvas, config).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|m| m.engine.borrow().is_active())
    }

    pub fn resize(&self) {
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().resize(dom::device_pixel_ratio());
        }
    }

    pub fn destroy(&mut self) {
        if self.inner.take().is_some() {
            log::info!("[confetti] destroyed");
        }
    }
}

impl Destroy for ConfettiFieldHandle {
    fn destroy_effect(&mut self) {
        self.destroy();
    }
}

// ---------------- Magnetic button ----------------

#[wasm_bindgen]
pub struct MagneticButtonHandle {
    inner: Option<Mounted<SpringFollower<DomElement>>>,
}

impl MagneticButtonHandle {
    pub(crate) fn mount(element: web::HtmlElement, config: MagneticConfig) -> anyhow::Result<Self> {
        let mut follower = SpringFollower::new(config)?;
        let target: web::EventTarget = element.clone().into();
        follower.init(DomElement(element));
        let mut mounted = Mounted::new(follower);
        mounted.on(&target, "mouseenter", |spring, _: web::MouseEvent| {
            spring.on_pointer_enter();
        });
        mounted.on(&target, "mousemove", |spring, ev: web::MouseEvent| {
            spring.on_pointer_move(dom::client_point(&ev));
        });
        mounted.on(&target, "mouseleave", |spring, _: web::MouseEvent| {
            spring.on_pointer_leave();
        });
        Ok(Self {
            inner: Some(mounted),
        })
    }
}

#[wasm_bindgen]
impl MagneticButtonHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement, strength: Option<f32>, speed: Option<f32>) -> Result<MagneticButtonHandle, JsValue> {
        let mut config = MagneticConfig::default();
        if let Some(s) = strength {
            config.strength = s;
        }
        if let Some(s) = speed {
            config.speed = s;
        }
        Self::mount(element, config).map_err(to_js)
    }

    pub fn destroy(&mut self) {
        self.inner.take();
    }
}

impl Destroy for MagneticButtonHandle {
    fn destroy_effect(&mut self) {
        self.destroy();
    }
}

// ---------------- Card tilt ----------------

#[wasm_bindgen]
pub struct CardTiltHandle {
    inner: Option<Mounted<TiltFollower<DomElement>>>,
}

impl CardTiltHandle {
    pub(crate) fn mount(element: web::HtmlElement, config: TiltConfig) -> anyhow::Result<Self> {
        let mut tilt = TiltFollower::new(config)?;
        let target: web::EventTarget = element.clone().into();
        tilt.init(DomElement(element));
        let mut mounted = Mounted::new(tilt);
        mounted.on(&target, "mouseenter", |tilt, _: web::MouseEvent| {
            tilt.on_pointer_enter();
        });
        mounted.on(&target, "mousemove", |tilt, ev: web::MouseEvent| {
            tilt.on_pointer_move(dom::client_point(&ev));
        });
        mounted.on(&target, "mouseleave", |tilt, _: web::MouseEvent| {
            tilt.on_pointer_leave();
        });
        mounted.on(&window_target()?, "resize", |tilt, _: web::Event| {
            tilt.on_resize();
        });
        Ok(Self {
            inner: Some(mounted),
        })
    }
}

#[wasm_bindgen]
impl CardTiltHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: web::HtmlElement,
        max_tilt: Option<f32>,
        perspective: Option<f32>,
        enable_glow: Option<bool>,
    ) -> Result<CardTiltHandle, JsValue> {
        let mut config = TiltConfig::default();
        if let Some(t) = max_tilt {
            config.max_tilt = t;
        }
        if let Some(p) = perspective {
            config.perspective = p;
        }
        if let Some(g) = enable_glow {
            config.enable_glow = g;
        }
        Self::mount(element, config).map_err(to_js)
    }

    pub fn resize(&self) {
        if let Some(m) = &self.inner {
            m.engine.borrow_mut().on_resize();
        }
    }

    pub fn destroy(&mut self) {
        self.inner.take();
    }
}

impl Destroy for CardTiltHandle {
    fn destroy_effect(&mut self) {
        self.destroy();
    }
}

// ---------------- Custom cursor ----------------

struct CursorMount {
    mounted: Mounted<CursorFollower<DomDocument>>,
    hover: RefCell<Listeners>,
    bound: RefCell<Vec<DomElement>>,
}

thread_local! {
    static ACTIVE_CURSOR: RefCell<Weak<CursorMount>> = RefCell::new(Weak::new());
}

impl CursorMount {
    /// Attach hover listeners to interactive elements not yet bound.
    fn bind_targets(&self) -> usize {
        let mounted = &self.mounted;
        let targets = mounted.engine.borrow().interactive_targets();
        let mut bound = self.bound.borrow_mut();
        let mut hover = self.hover.borrow_mut();
        let mut added = 0;
        for el in targets {
            if bound.iter().any(|b| b.0 == el.0) {
                continue;
            }
            let target: web::EventTarget = el.0.clone().into();
            let engine = mounted.engine.clone();
            let node = el.clone();
            hover.on(&target, "mouseenter", move |_: web::MouseEvent| {
                if let Ok(mut cursor) = engine.try_borrow_mut() {
                    cursor.on_hover(&node);
                }
            });
            let engine = mounted.engine.clone();
            hover.on(&target, "mouseleave", move |_: web::MouseEvent| {
                if let Ok(mut cursor) = engine.try_borrow_mut() {
                    cursor.on_hover_end();
                }
            });
            bound.push(el);
            added += 1;
        }
        added
    }
}

#[wasm_bindgen]
pub struct CustomCursorHandle {
    inner: Option<Rc<CursorMount>>,
}

impl CustomCursorHandle {
    pub(crate) fn mount(config: CursorConfig) -> anyhow::Result<Self> {
        if ACTIVE_CURSOR.with(|c| c.borrow().upgrade().is_some()) {
            anyhow::bail!("a custom cursor is already mounted");
        }
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root: web::EventTarget = document
            .document_element()
            .map(Into::into)
            .unwrap_or_else(|| document.clone().into());
        let doc_target: web::EventTarget = document.clone().into();

        let mut cursor = CursorFollower::new(config)?;
        cursor.init(DomDocument::new(document));
        if !cursor.is_mounted() {
            anyhow::bail!("could not create cursor overlay");
        }

        let mut mounted = Mounted::new(cursor);
        mounted.on(&doc_target, "mousemove", |cursor, ev: web::MouseEvent| {
            cursor.on_pointer_move(dom::client_point(&ev));
        });
        mounted.on(&root, "mouseenter", |cursor, _: web::MouseEvent| {
            cursor.on_pointer_enter();
        });
        mounted.on(&root, "mouseleave", |cursor, _: web::MouseEvent| {
            cursor.on_pointer_leave();
        });
        mounted.start();

        let mount = Rc::new(CursorMount {
            mounted,
            hover: RefCell::new(Listeners::default()),
            bound: RefCell::new(Vec::new()),
        });
        let bound = mount.bind_targets();
        ACTIVE_CURSOR.with(|c| *c.borrow_mut() = Rc::downgrade(&mount));
        log::info!("[cursor] mounted; {bound} interactive targets");
        Ok(Self { inner: Some(mount) })
    }
}

#[wasm_bindgen]
impl CustomCursorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CustomCursorHandle, JsValue> {
        Self::mount(CursorConfig::default()).map_err(to_js)
    }

    /// Bind hover listeners to interactive elements added since mounting.
    pub fn refresh_targets(&self) -> u32 {
        self.inner.as_ref().map_or(0, |m| m.bind_targets() as u32)
    }

    pub fn destroy(&mut self) {
        if let Some(mount) = self.inner.take() {
            mount.hover.borrow_mut().clear();
            mount.bound.borrow_mut().clear();
            log::info!("[cursor] destroyed");
        }
    }
}

impl Destroy for CustomCursorHandle {
    fn destroy_effect(&mut self) {
        self.destroy();
    }
}

/// Rebind the active cursor's hover targets. Returns how many were added.
pub(crate) fn refresh_active_cursor() -> u32 {
    ACTIVE_CURSOR
        .with(|c| c.borrow().upgrade())
        .map_or(0, |m| m.bind_targets() as u32)
}
