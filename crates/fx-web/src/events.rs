use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that stays registered until dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, mut handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("[events] could not listen for {event}: {:?}", e);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listeners owned by one mounted effect.
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn on<E>(&mut self, target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static)
    where
        E: JsCast + 'static,
    {
        self.0.push(Listener::new(target, event, handler));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// A `ResizeObserver` on one element that disconnects when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    pub fn new(target: &web::Element, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("ResizeObserver unavailable: {:?}", e))?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
