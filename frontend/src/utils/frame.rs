use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use crate::utils::subscription::CancelToken;

type Pending = Rc<RefCell<Option<AnimationFrame>>>;

/// Runs `step` once per animation frame for as long as it returns `true`.
///
/// Dropping the loop or calling `cancel()` drops the pending frame request,
/// which cancels it with the browser.
pub struct FrameLoop {
    token: CancelToken,
    pending: Pending,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let token = CancelToken::new();
        let pending: Pending = Rc::new(RefCell::new(None));
        schedule(token.clone(), pending.clone(), Rc::new(RefCell::new(step)));
        Self { token, pending }
    }

    pub fn cancel(&self) {
        if self.token.cancel() {
            self.pending.borrow_mut().take();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule<F>(token: CancelToken, pending: Pending, step: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let handle = request_animation_frame({
        let token = token.clone();
        let pending = pending.clone();
        move |timestamp| {
            pending.borrow_mut().take();
            if token.is_cancelled() {
                return;
            }
            let keep_running = {
                let mut step = step.borrow_mut();
                (*step)(timestamp)
            };
            if keep_running && !token.is_cancelled() {
                schedule(token, pending, step);
            }
        }
    });
    *pending.borrow_mut() = Some(handle);
}
