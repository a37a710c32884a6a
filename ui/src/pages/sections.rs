use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::components::reveal::Reveal;
use crate::i18n::{self, Amenity, CopyKey, Locale, Room, use_locale};

const MOBILE_MEDIA: &str = "(max-width: 767px)";
const CARD_WIDTH: f64 = 320.0;
const CARD_GAP: f64 = 24.0;
const AUTOSCROLL_SETTLE_MS: u32 = 400;

/// Eyebrow, heading and optional lead paragraph shared by every section.
#[component]
fn SectionHeading(label: CopyKey, title: CopyKey, #[prop(optional)] subtitle: Option<CopyKey>) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <Reveal class="mb-10 max-w-2xl">
            <p class="mb-3 text-xs uppercase tracking-[0.24em] text-gold">{move || i18n.t(label)}</p>
            <h2 class="font-serif text-3xl leading-tight text-ink sm:text-4xl">{move || i18n.t(title)}</h2>
            {subtitle.map(move |key| view! { <p class="mt-4 text-muted">{move || i18n.t(key)}</p> })}
        </Reveal>
    }
}

/// `<picture>` with a mobile crop, grey skeleton until the image has loaded.
#[component]
fn SkeletonImage(image: String, image_mobile: String, alt: String) -> impl IntoView {
    let loaded = RwSignal::new(false);

    view! {
        <div class="relative aspect-[4/3] overflow-hidden bg-sand">
            <Show when=move || !loaded.get()>
                <div class="absolute inset-0 animate-pulse bg-black/[0.06]" aria-hidden="true"/>
            </Show>
            <picture>
                <source media=MOBILE_MEDIA srcset=image_mobile/>
                <img
                    src=image
                    alt=alt
                    loading="lazy"
                    on:load=move |_| loaded.set(true)
                    on:error=move |_| loaded.set(true)
                    class="h-full w-full object-cover transition-opacity duration-500"
                    class=("opacity-0", move || !loaded.get())
                />
            </picture>
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section id="about" class="mx-auto grid max-w-6xl gap-10 px-4 py-20 sm:px-6 md:grid-cols-2 md:items-center">
            <div>
                <SectionHeading label=CopyKey::AboutLabel title=CopyKey::AboutTitle/>
                <Reveal delay_ms=100>
                    <p class="leading-relaxed text-muted">{move || i18n.t(CopyKey::AboutBody)}</p>
                </Reveal>
            </div>
            <Reveal delay_ms=150>
                <img
                    src="/images/about.webp"
                    alt=move || i18n.t(CopyKey::AboutImageAlt)
                    loading="lazy"
                    class="aspect-[4/5] w-full rounded-sm object-cover"
                />
            </Reveal>
        </section>
    }
}

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let i18n = use_locale();
    let alt = room.title.clone();

    view! {
        <article class="w-[320px] shrink-0 snap-start overflow-hidden rounded-sm bg-white shadow-sm">
            <SkeletonImage image=room.image image_mobile=room.image_mobile alt/>
            <div class="space-y-2 p-5">
                <h3 class="font-serif text-xl text-ink">{room.title}</h3>
                <p class="text-sm font-medium text-gold">{room.price}</p>
                <p class="text-sm text-muted">{room.details}</p>
                <a href="#booking" class="inline-block pt-2 text-xs uppercase tracking-[0.16em] text-ink hover:text-gold">
                    {move || i18n.t(CopyKey::ExploreButton)}
                </a>
            </div>
        </article>
    }
}

#[component]
fn CarouselDots(selected: RwSignal<usize>, total: usize) -> impl IntoView {
    view! {
        <div class="flex justify-center gap-2">
            {(0..total)
                .map(move |i| {
                    view! {
                        <button
                            type="button"
                            class="h-2.5 w-2.5 rounded-full transition"
                            class=("bg-gold", move || selected.get() == i)
                            class=("bg-black/20", move || selected.get() != i)
                            aria-label=format!("{}", i + 1)
                            aria-current=move || (selected.get() == i).to_string()
                            on:click=move |_| selected.set(i)
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Index of the card whose left edge is nearest the lane's scroll offset.
pub fn card_index(scroll_left: f64) -> usize {
    (scroll_left / (CARD_WIDTH + CARD_GAP)).round().max(0.0) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneStep {
    Stay,
    /// New locale rebuilt the lane at scroll 0, the dots follow.
    Reset,
    ScrollTo(usize),
}

/// What the lane does after `(locale, selected)` moves from `prev`.
pub fn lane_step(prev: Option<(Locale, usize)>, locale: Locale, selected: usize) -> LaneStep {
    match prev {
        // the initial value must not pull the page down to the lane
        None => LaneStep::Stay,
        Some((was, _)) if was != locale => LaneStep::Reset,
        Some((_, was)) if was == selected => LaneStep::Stay,
        Some(_) => LaneStep::ScrollTo(selected),
    }
}

#[component]
pub fn RoomsSection() -> impl IntoView {
    let i18n = use_locale();

    let selected = RwSignal::new(0usize);
    let lane_ref: NodeRef<html::Div> = NodeRef::new();
    let autoscrolling = RwSignal::new(false);
    let settle = StoredValue::new_local(None::<Timeout>);

    // dot clicks scroll the lane, the scroll handler is muted until it settles
    Effect::new(move |prev: Option<(Locale, usize)>| {
        let locale = i18n.locale();
        let i = selected.get();

        let i = match lane_step(prev, locale, i) {
            LaneStep::Stay => return (locale, i),
            LaneStep::Reset => {
                selected.set(0);
                return (locale, 0);
            }
            LaneStep::ScrollTo(i) => i,
        };

        let Some(child) = lane_ref
            .get_untracked()
            .and_then(|lane| lane.children().item(i as u32))
        else {
            return (locale, i);
        };

        autoscrolling.set(true);

        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
        opts.set_inline(web_sys::ScrollLogicalPosition::Start);
        child
            .unchecked_into::<Element>()
            .scroll_into_view_with_scroll_into_view_options(&opts);

        settle.set_value(Some(Timeout::new(AUTOSCROLL_SETTLE_MS, move || {
            let _ = autoscrolling.try_set(false);
        })));

        (locale, i)
    });

    on_cleanup(move || {
        let _ = settle.try_update_value(|t| drop(t.take()));
    });

    let on_scroll = move |_: leptos::ev::Event| {
        if autoscrolling.get_untracked() {
            return;
        }
        if let Some(lane) = lane_ref.get_untracked() {
            let i = card_index(f64::from(lane.scroll_left()));
            if i != selected.get_untracked() {
                selected.set(i);
            }
        }
    };

    view! {
        <section id="rooms" class="bg-sand/60 py-20">
            <div class="mx-auto max-w-6xl px-4 sm:px-6">
                <SectionHeading label=CopyKey::RoomsLabel title=CopyKey::RoomsTitle subtitle=CopyKey::RoomsSubtitle/>
                {move || {
                    let list = i18n::rooms(i18n.locale());
                    let total = list.len();
                    view! {
                        <div
                            node_ref=lane_ref
                            on:scroll=on_scroll
                            class="flex snap-x snap-mandatory gap-6 overflow-x-auto scroll-smooth pb-4"
                        >
                            {list.into_iter().map(|room| view! { <RoomCard room/> }).collect_view()}
                        </div>
                        <div class="mt-6">
                            <CarouselDots selected total/>
                        </div>
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn AmenityCard(amenity: Amenity, index: usize) -> impl IntoView {
    let alt = amenity.title.clone();

    view! {
        <Reveal delay_ms={index as u32 * 80}>
            <article class="overflow-hidden rounded-sm bg-white shadow-sm">
                <SkeletonImage image=amenity.image image_mobile=amenity.image_mobile alt/>
                <div class="p-5">
                    <h3 class="font-serif text-xl text-ink">{amenity.title}</h3>
                    <p class="mt-2 text-sm text-muted">{amenity.description}</p>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn AmenitiesSection() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section id="amenities" class="mx-auto max-w-6xl px-4 py-20 sm:px-6">
            <SectionHeading label=CopyKey::AmenitiesLabel title=CopyKey::AmenitiesTitle subtitle=CopyKey::AmenitiesSubtitle/>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {move || {
                    i18n::amenities(i18n.locale())
                        .into_iter()
                        .enumerate()
                        .map(|(index, amenity)| view! { <AmenityCard amenity index/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
pub fn WhyUsSection() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section id="why" class="bg-ink py-20 text-white">
            <div class="mx-auto max-w-6xl px-4 sm:px-6">
                <SectionHeading label=CopyKey::WhyLabel title=CopyKey::WhyTitle subtitle=CopyKey::WhySubtitle/>
                <ul class="grid gap-8 sm:grid-cols-2 lg:grid-cols-4">
                    {move || {
                        i18n::why_items(i18n.locale())
                            .into_iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <li>
                                        <Reveal delay_ms={i as u32 * 80}>
                                            <h3 class="font-serif text-lg">{item.title}</h3>
                                            <p class="mt-2 text-sm text-white/70">{item.description}</p>
                                        </Reveal>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_index_snaps_to_nearest_card() {
        assert_eq!(card_index(0.0), 0);
        assert_eq!(card_index(CARD_WIDTH + CARD_GAP), 1);
        assert_eq!(card_index((CARD_WIDTH + CARD_GAP) * 1.4), 1);
        assert_eq!(card_index((CARD_WIDTH + CARD_GAP) * 1.6), 2);
    }

    #[test]
    fn negative_overscroll_is_first_card() {
        assert_eq!(card_index(-30.0), 0);
    }

    #[test]
    fn first_run_does_not_scroll() {
        assert_eq!(lane_step(None, Locale::Ua, 0), LaneStep::Stay);
    }

    #[test]
    fn locale_switch_resets_the_dots() {
        assert_eq!(lane_step(Some((Locale::Ua, 2)), Locale::En, 2), LaneStep::Reset);
        // the reset itself lands on the rebuilt lane without scrolling it
        assert_eq!(lane_step(Some((Locale::En, 0)), Locale::En, 0), LaneStep::Stay);
    }

    #[test]
    fn dot_change_scrolls_to_it() {
        assert_eq!(lane_step(Some((Locale::En, 0)), Locale::En, 3), LaneStep::ScrollTo(3));
    }
}
