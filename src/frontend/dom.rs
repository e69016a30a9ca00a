use crate::preload::PreloadCommand;
use crate::Millis;
use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

const BODY_NO_SCROLL_CLASS: &str = "body-no-scroll";
const RIPPLE_LIFETIME_MS: u32 = 600;

pub fn now_ms() -> Millis {
    js_sys::Date::now() as Millis
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(target_id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(target_id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// In-page anchors scroll smoothly instead of jumping.
pub fn handle_anchor_click(event: &MouseEvent) {
    event.prevent_default();

    let href = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.get_attribute("href"));

    if let Some(target_id) = href.as_deref().and_then(|href| href.strip_prefix('#')) {
        smooth_scroll_to(target_id);
    }
}

pub fn create_ripple(event: &MouseEvent) {
    let Some(element) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(circle) = document()
        .and_then(|d| d.create_element("span").ok())
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let diameter = f64::from(element.client_width().max(element.client_height()));
    let radius = diameter / 2.0;
    let rect = element.get_bounding_client_rect();
    let style = circle.style();
    let _ = style.set_property("width", &format!("{diameter}px"));
    let _ = style.set_property("height", &format!("{diameter}px"));
    let _ = style.set_property(
        "left",
        &format!("{}px", f64::from(event.client_x()) - rect.left() - radius),
    );
    let _ = style.set_property(
        "top",
        &format!("{}px", f64::from(event.client_y()) - rect.top() - radius),
    );
    let _ = circle.class_list().add_1("ripple");

    if let Ok(Some(existing)) = element.query_selector(".ripple") {
        existing.remove();
    }

    if element.append_child(&circle).is_ok() {
        Timeout::new(RIPPLE_LIFETIME_MS, move || circle.remove()).forget();
    }
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    let classes = body.class_list();
    let _ = if locked {
        classes.add_1(BODY_NO_SCROLL_CLASS)
    } else {
        classes.remove_1(BODY_NO_SCROLL_CLASS)
    };
}

fn preload_selector(src: &str) -> String {
    format!("link[rel=\"preload\"][href=\"{}\"]", src.replace('"', "\\\""))
}

/// Mirrors preload hints into `<link rel="preload">` elements in the document head.
pub fn apply_preload_commands(commands: Vec<PreloadCommand>) {
    if commands.is_empty() {
        return;
    }
    let Some(document) = document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    for command in commands {
        match command {
            PreloadCommand::Insert { src, kind } => {
                if let Ok(Some(_)) = head.query_selector(&preload_selector(&src)) {
                    continue;
                }
                let Ok(link) = document.create_element("link") else {
                    continue;
                };
                let _ = link.set_attribute("rel", "preload");
                let _ = link.set_attribute("href", &src);
                let _ = link.set_attribute("as", kind.as_str());
                let _ = link.set_attribute("crossorigin", "anonymous");
                if head.append_child(&link).is_ok() {
                    log::debug!("preload hint added for {src}");
                }
            }
            PreloadCommand::Remove { src } => {
                if let Ok(Some(link)) = head.query_selector(&preload_selector(&src)) {
                    link.remove();
                    log::debug!("preload hint released for {src}");
                }
            }
        }
    }
}

/// Reads a string property off a thrown JS value, such as a `DOMException`'s `name`.
pub fn error_property(error: &JsValue, key: &str) -> String {
    Reflect::get(error, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

pub fn reload_page() {
    if let Some(win) = window() {
        let _ = win.location().reload();
    }
}
