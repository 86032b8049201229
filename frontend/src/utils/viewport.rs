use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::behavior::latch::VisibilitySample;
use crate::utils::subscription::CancelToken;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching a single element.
///
/// `on_change` gets every notification for the element and returns whether
/// observation should continue. Returning `false` unobserves the element
/// right away, which turns the observer into a one-shot sensor.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    target: Element,
    token: CancelToken,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    pub fn observe<F>(target: Element, threshold: f64, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(VisibilitySample) -> bool + 'static,
    {
        let token = CancelToken::new();
        let callback = EntriesCallback::new({
            let token = token.clone();
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if token.is_cancelled() {
                        return;
                    }
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = VisibilitySample::new(entry.intersection_ratio(), entry.is_intersecting());
                    if !on_change(sample) && token.cancel() {
                        observer.unobserve(&entry.target());
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&target);

        Ok(Self {
            observer,
            target,
            token,
            _callback: callback,
        })
    }

    /// Stops watching the element. Safe to call any number of times, also
    /// after the callback already released the element itself.
    pub fn release(&self) {
        if self.token.cancel() {
            self.observer.unobserve(&self.target);
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.release();
        self.observer.disconnect();
    }
}
