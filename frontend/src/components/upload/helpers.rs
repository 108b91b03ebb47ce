//! DOM helpers for the upload component: reading the form controls and
//! showing transient notifications.

use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Current value of the category selector, empty when the node is missing.
pub fn selected_category(select_ref: &NodeRef) -> String {
    select_ref
        .cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// The single file chosen in the file input, if any.
pub fn selected_photo(input_ref: &NodeRef) -> Option<File> {
    input_ref
        .cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Clears the file input so the next upload starts from an empty form.
pub fn reset_file_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The message is set as text, never as markup, since it may echo server
/// output.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let background = match kind {
        ToastKind::Info => "rgba(0, 0, 0, 0.8)",
        ToastKind::Error => "#c62828",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
