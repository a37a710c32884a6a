#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use ui::components::booking_modal::BookingModal;
use ui::components::dialog::provide_scroll_lock;
use ui::components::header::Header;
use ui::i18n::provide_locale_store;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> HtmlElement {
    let doc = document();
    let el = doc.create_element("div").unwrap().unchecked_into::<HtmlElement>();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

/// Lets queued effects run.
async fn tick() {
    TimeoutFuture::new(0).await;
}

fn attr(el: &web_sys::Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

#[wasm_bindgen_test]
async fn booking_modal_is_a_labelled_modal_dialog() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        provide_locale_store();
        provide_scroll_lock();
        view! { <BookingModal open=Signal::stored(true) on_close=Callback::new(|_: ()| {})/> }
    });
    tick().await;

    let dialog = host.query_selector("[role=dialog]").unwrap().expect("dialog rendered");
    assert_eq!(attr(&dialog, "aria-modal").as_deref(), Some("true"));
    assert_eq!(attr(&dialog, "aria-labelledby").as_deref(), Some("booking-modal-title"));

    let title = host.query_selector("#booking-modal-title").unwrap().expect("title rendered");
    assert!(!title.text_content().unwrap_or_default().is_empty());

    let stepper = dialog.query_selector("[role=group]").unwrap().expect("guest stepper");
    let buttons = stepper.query_selector_all("button").unwrap();
    assert_eq!(buttons.length(), 2);

    // one guest is the floor, so decrement starts disabled
    let decrement = buttons.item(0).unwrap().unchecked_into::<web_sys::Element>();
    assert!(decrement.has_attribute("disabled"));

    let body = document().body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
}

#[wasm_bindgen_test]
async fn burger_opens_a_modal_drawer() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        provide_locale_store();
        provide_scroll_lock();
        view! { <Header solid=Signal::stored(false) on_book=Callback::new(|_: ()| {})/> }
    });
    tick().await;

    assert!(host.query_selector("[role=dialog]").unwrap().is_none());

    let burger = host
        .query_selector("button[aria-expanded]")
        .unwrap()
        .expect("burger button")
        .unchecked_into::<HtmlElement>();
    assert_eq!(burger.get_attribute("aria-expanded").as_deref(), Some("false"));

    burger.click();
    tick().await;

    assert_eq!(burger.get_attribute("aria-expanded").as_deref(), Some("true"));
    let drawer = host.query_selector("[role=dialog]").unwrap().expect("drawer rendered");
    assert_eq!(attr(&drawer, "aria-modal").as_deref(), Some("true"));
    assert!(attr(&drawer, "aria-label").is_some_and(|label| !label.is_empty()));
}
