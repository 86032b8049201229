use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::utils::subscription::CancelToken;

/// Window `scroll` listener that reports the vertical offset.
pub struct ScrollListener {
    window: Window,
    token: CancelToken,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Subscribes `on_scroll` to scroll events. Returns `None` when there is
    /// no window or the listener could not be registered.
    pub fn listen<F>(on_scroll: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        let window = web_sys::window()?;
        let token = CancelToken::new();
        let callback = Closure::<dyn Fn()>::new({
            let token = token.clone();
            move || {
                if token.is_cancelled() {
                    return;
                }
                if let Some(offset) = current_offset() {
                    on_scroll(offset);
                }
            }
        });

        if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            log::warn!("Failed to add scroll listener: {:?}", e);
            return None;
        }

        Some(Self {
            window,
            token,
            callback,
        })
    }

    pub fn cancel(&self) {
        if !self.token.cancel() {
            return;
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn current_offset() -> Option<f64> {
    web_sys::window().and_then(|win| win.scroll_y().ok())
}
