use super::dom::{document, reload_page};
use std::panic;
use wasm_bindgen::{closure::Closure, JsCast};

const FALLBACK_MARKUP: &str = r#"<div class="bg-black text-white min-h-screen flex flex-col items-center justify-center font-montserrat p-6 text-center">
  <div class="max-w-md">
    <h1 class="text-4xl md:text-5xl font-playfair font-bold text-gold mb-4">Oops! Something went wrong.</h1>
    <p class="text-lg text-gray-300 mb-8 leading-relaxed">We're sorry for the inconvenience. Please try refreshing the page to continue.</p>
    <button id="fallback-refresh" aria-label="Refresh the page" class="btn-primary font-bold py-3 px-8 rounded-full text-lg focus-visible-ring">Refresh Page</button>
  </div>
</div>"#;

/// Swaps the mounted app for a static recovery screen.
///
/// Yew cannot keep rendering after a component panics, so this writes plain markup
/// straight into the mount point and wires the refresh button by hand.
fn show_fallback(mount_id: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(mount) = document.get_element_by_id(mount_id) else {
        return;
    };

    mount.set_inner_html(FALLBACK_MARKUP);
    if let Some(button) = document.get_element_by_id("fallback-refresh") {
        let reload = Closure::<dyn FnMut()>::new(reload_page);
        let _ = button.add_event_listener_with_callback("click", reload.as_ref().unchecked_ref());
        reload.forget();
    }
}

pub fn install(mount_id: &'static str) {
    panic::set_hook(Box::new(move |info| {
        console_error_panic_hook::hook(info);
        show_fallback(mount_id);
    }));
}
