use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer, use_window_scroll};

use crate::components::booking_modal::BookingModal;
use crate::components::chat_widget::AIAssistantWidget;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::sticky_bar::MobileStickyBookingBar;
use crate::pages::footer::Footer;
use crate::pages::sections::{AboutSection, AmenitiesSection, RoomsSection, WhyUsSection};
use crate::state::visibility::{Chrome, HeaderStyle, intersects};

/// Derives header/sticky bar/chat widget visibility from the hero wrapper.
///
/// `hero_in_view` starts out true so nothing flashes before the first
/// observation arrives.
pub fn use_page_chrome(hero: NodeRef<html::Div>) -> Memo<Chrome> {
    let hero_in_view = RwSignal::new(true);
    let (_, scroll_y) = use_window_scroll();

    let _ = use_intersection_observer(hero, move |entries, _| {
        if let Some(entry) = entries.last() {
            hero_in_view.set(intersects(entry.intersection_ratio(), entry.is_intersecting()));
        }
    });

    Memo::new(move |_| Chrome::derive(hero_in_view.get(), scroll_y.get()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let hero_ref: NodeRef<html::Div> = NodeRef::new();
    let chrome = use_page_chrome(hero_ref);
    let booking_open = RwSignal::new(false);

    let open_booking = Callback::new(move |_: ()| booking_open.set(true));
    let close_booking = Callback::new(move |_: ()| booking_open.set(false));

    view! {
        <Header
            solid=Signal::derive(move || chrome.get().header == HeaderStyle::Solid)
            on_book=open_booking
        />

        <main>
            <div node_ref=hero_ref>
                <Hero/>
            </div>
            <AboutSection/>
            <RoomsSection/>
            <AmenitiesSection/>
            <WhyUsSection/>
        </main>

        <Footer/>

        <MobileStickyBookingBar
            show=Signal::derive(move || chrome.get().show_sticky_bar)
            on_book=open_booking
        />
        <AIAssistantWidget visible=Signal::derive(move || chrome.get().show_chat_widget)/>
        <BookingModal open=booking_open on_close=close_booking/>
    }
}
