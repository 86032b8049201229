use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::behavior::counter::{CounterAnimation, CounterConfig, FrameStep};
use crate::behavior::latch::{LatchStep, ViewportLatch, VisibilitySample};
use crate::behavior::nav::ScrollNav;
use crate::utils::frame::FrameLoop;
use crate::utils::scroll::ScrollListener;
use crate::utils::viewport::ViewportObserver;

/// Returns a ref to bind to the watched element and whether that element has
/// been at least `threshold` visible since mount.
#[hook]
pub fn use_viewport_trigger(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let triggered = use_state_eq(|| false);

    {
        let node = node.clone();
        let triggered = triggered.clone();
        use_effect_with_deps(
            move |_| {
                let latch = Rc::new(RefCell::new(ViewportLatch::new(threshold)));
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_change = {
                        let latch = latch.clone();
                        let triggered = triggered.clone();
                        move |sample: VisibilitySample| {
                            let step = latch.borrow_mut().observe(sample);
                            if step == LatchStep::Triggered {
                                log::debug!("Element entered viewport at ratio {:.2}", sample.ratio);
                                triggered.set(true);
                            }
                            step.keep_observing()
                        }
                    };
                    match ViewportObserver::observe(element, threshold, on_change) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable, treating element as visible: {:?}", e);
                            triggered.set(true);
                            None
                        }
                    }
                });
                move || {
                    latch.borrow_mut().detach();
                    if let Some(observer) = observer {
                        observer.release();
                    }
                }
            },
            (),
        );
    }

    (node, *triggered)
}

/// Drives a `CounterAnimation` off animation frames once `triggered` turns
/// true and returns the formatted value to render.
#[hook]
pub fn use_animated_counter(config: CounterConfig, triggered: bool) -> String {
    let animation = use_mut_ref(move || CounterAnimation::new(config));
    let frames = use_mut_ref(|| Option::<FrameLoop>::None);
    let display = use_state_eq({
        let animation = animation.clone();
        move || {
            let initial = animation.borrow().display();
            initial
        }
    });

    {
        let animation = animation.clone();
        let frames = frames.clone();
        let display = display.clone();
        use_effect_with_deps(
            move |triggered| {
                if *triggered && animation.borrow_mut().start() {
                    log::debug!("Counter started towards {}", animation.borrow().config().target);
                    let frame_loop = FrameLoop::start({
                        let animation = animation.clone();
                        move |timestamp| {
                            let (step, text) = {
                                let mut animation = animation.borrow_mut();
                                let step = animation.on_frame(timestamp);
                                (step, animation.display())
                            };
                            match step {
                                FrameStep::Ignored => return false,
                                FrameStep::Done => log::debug!("Counter finished at {}", text),
                                FrameStep::Continue => {}
                            }
                            display.set(text);
                            step.keep_running()
                        }
                    });
                    *frames.borrow_mut() = Some(frame_loop);
                }
                || ()
            },
            triggered,
        );
    }

    use_effect_with_deps(
        move |_| {
            move || {
                animation.borrow_mut().detach();
                if let Some(frame_loop) = frames.borrow_mut().take() {
                    frame_loop.cancel();
                }
            }
        },
        (),
    );

    (*display).clone()
}

/// Whether the sticky navbar should currently be shown.
#[hook]
pub fn use_scroll_nav(dead_zone: f64) -> bool {
    let visible = use_state_eq(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let nav = RefCell::new(ScrollNav::new(dead_zone));
                let listener = ScrollListener::listen(move |offset| {
                    let (before, after) = {
                        let mut nav = nav.borrow_mut();
                        (nav.visibility(), nav.observe(offset))
                    };
                    if before != after {
                        log::debug!("Navbar {:?} at offset {}", after, offset);
                    }
                    visible.set(after.is_visible());
                });
                move || drop(listener)
            },
            (),
        );
    }

    *visible
}
