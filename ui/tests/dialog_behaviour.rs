#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

use ui::components::booking_modal::BookingModal;
use ui::components::dialog::provide_scroll_lock;
use ui::components::header::Header;
use ui::dom;
use ui::i18n::provide_locale_store;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> HtmlElement {
    let doc = document();
    let el = doc.create_element("div").unwrap().unchecked_into::<HtmlElement>();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

/// Lets queued effects and the focus frame run.
async fn settle() {
    TimeoutFuture::new(50).await;
}

fn press(key: &str, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);

    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&ev).unwrap();
}

fn active() -> Option<Element> {
    document().active_element()
}

fn is_active(el: &Element) -> bool {
    active().is_some_and(|a| a.is_same_node(Some(el.as_ref())))
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn booking_page() -> impl IntoView {
    provide_locale_store();
    provide_scroll_lock();
    let open = RwSignal::new(false);

    view! {
        <button id="open-booking" type="button" on:click=move |_| open.set(true)>"book"</button>
        <BookingModal open=open on_close=Callback::new(move |_: ()| open.set(false))/>
    }
}

/// Focuses the trigger and clicks it, returns the trigger and the live dialog.
async fn open_booking(host: &HtmlElement) -> (HtmlElement, HtmlElement) {
    let trigger = host
        .query_selector("#open-booking")
        .unwrap()
        .expect("trigger")
        .unchecked_into::<HtmlElement>();
    trigger.focus().unwrap();
    trigger.click();
    settle().await;

    let dialog = host
        .query_selector("[role=dialog]")
        .unwrap()
        .expect("dialog open")
        .unchecked_into::<HtmlElement>();
    (trigger, dialog)
}

#[wasm_bindgen_test]
async fn escape_closes_and_hands_focus_back() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), booking_page);
    settle().await;

    let (trigger, dialog) = open_booking(&host).await;
    assert_eq!(body_overflow(), "hidden");
    let focused = active().expect("something focused");
    assert!(dialog.contains(Some(focused.as_ref())), "focus moved into the dialog");

    press("Escape", false);
    settle().await;

    assert!(host.query_selector("[role=dialog]").unwrap().is_none());
    assert_eq!(body_overflow(), "");
    assert!(is_active(&trigger));

    host.remove();
}

#[wasm_bindgen_test]
async fn only_the_backdrop_closes_on_click() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), booking_page);
    settle().await;

    let (_, dialog) = open_booking(&host).await;

    dialog.click();
    settle().await;
    assert!(host.query_selector("[role=dialog]").unwrap().is_some());

    let backdrop = dialog
        .parent_element()
        .expect("overlay")
        .unchecked_into::<HtmlElement>();
    backdrop.click();
    settle().await;

    assert!(host.query_selector("[role=dialog]").unwrap().is_none());
    assert_eq!(body_overflow(), "");

    host.remove();
}

#[wasm_bindgen_test]
async fn tab_wraps_at_both_ends() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), booking_page);
    settle().await;

    let (_, dialog) = open_booking(&host).await;
    let items = dom::focusables(&dialog);
    assert!(items.len() >= 2);
    let first = items.first().unwrap();
    let last = items.last().unwrap();

    last.focus().unwrap();
    press("Tab", false);
    assert!(is_active(first));

    press("Tab", true);
    assert!(is_active(last));

    host.remove();
}

#[wasm_bindgen_test]
async fn drawer_closes_on_escape_and_refocuses_the_burger() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        provide_locale_store();
        provide_scroll_lock();
        view! { <Header solid=Signal::stored(false) on_book=Callback::new(|_: ()| {})/> }
    });
    settle().await;

    let burger = host
        .query_selector("button[aria-expanded]")
        .unwrap()
        .expect("burger button")
        .unchecked_into::<HtmlElement>();
    burger.focus().unwrap();
    burger.click();
    settle().await;

    assert!(host.query_selector("[role=dialog]").unwrap().is_some());
    assert_eq!(body_overflow(), "hidden");

    press("Escape", false);
    settle().await;

    assert!(host.query_selector("[role=dialog]").unwrap().is_none());
    assert_eq!(burger.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(body_overflow(), "");
    assert!(is_active(&burger));

    host.remove();
}
