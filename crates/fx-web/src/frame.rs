use fx_core::{Animate, FrameRequest};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// One persistent requestAnimationFrame task per engine. It keeps running
/// while the engine returns `Continue`, parks on `Idle`, and is woken by input.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn attach<A: Animate + 'static>(engine: Rc<RefCell<A>>) -> Self {
        let state = Rc::new(LoopState {
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.raf_id.set(None);
            let request = match engine.try_borrow_mut() {
                Ok(mut engine) => engine.frame(),
                Err(_) => FrameRequest::Continue,
            };
            if request == FrameRequest::Continue {
                state.schedule();
            }
        }) as Box<dyn FnMut()>));
        Self { state }
    }

    /// Request a frame unless one is already pending.
    pub fn wake(&self) {
        if self.state.raf_id.get().is_none() {
            self.state.schedule();
        }
    }

    /// A non-owning handle input listeners use to restart the loop.
    pub fn waker(&self) -> Waker {
        Waker(Rc::downgrade(&self.state))
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.raf_id.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

#[derive(Clone)]
pub struct Waker(Weak<LoopState>);

impl Waker {
    pub fn wake(&self) {
        if let Some(state) = self.0.upgrade() {
            if state.raf_id.get().is_none() {
                state.schedule();
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        self.state.tick.borrow_mut().take();
    }
}
