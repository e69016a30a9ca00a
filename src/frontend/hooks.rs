use super::dom::scroll_y;
use crate::motion::{parallax_transform, typewriter_prefix, TYPEWRITER_STEP_MS};
use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    element: &Element,
    threshold: f64,
    once: bool,
    in_view: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());

        if visible {
            in_view.set(true);
            if once {
                observer.disconnect();
            }
        } else if !once {
            in_view.set(false);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some((observer, callback))
}

/// Tracks whether the referenced element is on screen. With `once` the flag
/// latches on the first intersection and the observer disconnects.
#[hook]
pub fn use_in_view(threshold: f64, once: bool) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state(|| false);

    {
        let node = node.clone();
        let setter = in_view.setter();
        use_effect_with((), move |_| {
            let observer = node
                .cast::<Element>()
                .and_then(|element| observe(&element, threshold, once, setter));

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    (node, *in_view)
}

#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state(scroll_y);

    {
        let setter = offset.setter();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || setter.set(scroll_y()));
            let win = window();
            if let Some(win) = win.as_ref() {
                let _ = win
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *offset
}

/// Inline `transform` for an element drifting at `speed` times the scroll offset.
#[hook]
pub fn use_parallax(speed: f64) -> String {
    let offset = use_scroll_y();
    parallax_transform(offset, speed)
}

/// Reveals `text` one character per tick once `active`; restarts when the text changes.
#[hook]
pub fn use_typewriter(text: AttrValue, active: bool) -> String {
    let steps = use_state(|| 0usize);

    {
        let setter = steps.setter();
        use_effect_with((text.clone(), active), move |(text, active)| {
            setter.set(0);
            let total = text.chars().count();
            let interval = active.then(|| {
                let mut revealed = 0;
                Interval::new(TYPEWRITER_STEP_MS, move || {
                    if revealed < total {
                        revealed += 1;
                        setter.set(revealed);
                    }
                })
            });

            move || drop(interval)
        });
    }

    typewriter_prefix(&text, *steps).to_string()
}
