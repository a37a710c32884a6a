use leptos::logging::debug_warn;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, HtmlMediaElement, KeyboardEvent};

use crate::state::focus_trap::{FOCUSABLE_SELECTOR, focus_target};

/// iPhone/iPad, including iPadOS pretending to be a Mac.
pub fn is_ios() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let nav = win.navigator();

    let ua = nav.user_agent().unwrap_or_default();
    if ["iPhone", "iPad", "iPod"].iter().any(|d| ua.contains(d)) {
        return true;
    }

    nav.platform().unwrap_or_default() == "MacIntel" && nav.max_touch_points() > 1
}

/// Starts playback and swallows a refused autoplay, the poster just stays up.
pub fn play_quietly(media: &HtmlMediaElement) {
    let Ok(playing) = media.play() else {
        return;
    };

    spawn_local(async move {
        if let Err(err) = JsFuture::from(playing).await {
            debug_warn!("playback refused: {err:?}");
        }
    });
}

pub fn set_document_lang(lang: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.set_attribute("lang", lang);
    }
}

/// Freezes page scroll and touch panning behind an overlay.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("touch-action", "none");
    } else {
        let _ = style.remove_property("overflow");
        let _ = style.remove_property("touch-action");
    }
}

pub fn active_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn focusables(root: &Element) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn focus_first(root: &Element) {
    if let Some(first) = focusables(root).first() {
        let _ = first.focus();
    }
}

/// Keeps Tab cycling inside `root`.
pub fn trap_tab(root: &Element, ev: &KeyboardEvent) {
    if ev.key() != "Tab" {
        return;
    }

    let items = focusables(root);
    let current = active_element().and_then(|active| {
        items
            .iter()
            .position(|el| el.is_same_node(Some(active.as_ref())))
    });

    if let Some(target) = focus_target(items.len(), current, ev.shift_key()) {
        ev.prevent_default();
        let _ = items[target].focus();
    }
}
