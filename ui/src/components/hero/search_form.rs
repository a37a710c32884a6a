use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos_use::on_click_outside;

use crate::i18n::{CopyKey, use_locale};
use crate::state::dates::{DateRange, today_iso};
use crate::state::guests::GuestCounter;
use crate::state::search::{SEARCH_DELAY_MS, SearchSequencer, SearchState};

const HERO_INITIAL_GUESTS: u8 = 2;

/// Inline booking form over the hero. Owns its own dates and guests, the
/// booking modal keeps a separate copy.
#[component]
pub fn SearchForm() -> impl IntoView {
    let i18n = use_locale();

    let range = RwSignal::new(DateRange::default());
    let guests = RwSignal::new(GuestCounter::new(HERO_INITIAL_GUESTS));
    let show_calendar = RwSignal::new(false);
    let show_guests = RwSignal::new(false);

    let search = RwSignal::new(SearchSequencer::default());
    let timer = StoredValue::new_local(None::<Timeout>);

    range.update(|r| r.fill_defaults(&today_iso()));

    let dates_ref: NodeRef<html::Div> = NodeRef::new();
    let guests_ref: NodeRef<html::Div> = NodeRef::new();
    let _ = on_click_outside(dates_ref, move |_| show_calendar.set(false));
    let _ = on_click_outside(guests_ref, move |_| show_guests.set(false));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // a range picked before midnight may have gone stale
        range.update(|r| r.fill_defaults(&today_iso()));

        let mut ticket = None;
        search.update(|s| ticket = Some(s.submit()));
        let Some(ticket) = ticket else { return };

        let handle = Timeout::new(SEARCH_DELAY_MS, move || {
            let _ = search.try_update(|s| s.advance(ticket, SEARCH_DELAY_MS));
        });
        // replacing the old handle drops it, which cancels the pending timer
        timer.set_value(Some(handle));
    };

    on_cleanup(move || {
        let _ = timer.try_update_value(|t| drop(t.take()));
    });

    let dates_label = move || {
        range
            .with(|r| r.display())
            .unwrap_or_else(|| i18n.t(CopyKey::SearchDates).to_owned())
    };
    let dates_label_short = move || {
        range
            .with(|r| r.display_short())
            .unwrap_or_else(|| i18n.t(CopyKey::SearchDates).to_owned())
    };

    let guest_options = move || {
        GuestCounter::options()
            .map(move |n| {
                view! {
                    <button
                        type="button"
                        role="option"
                        aria-selected=move || (guests.with(|g| g.value()) == n).to_string()
                        on:click=move |_| {
                            guests.update(|g| g.set_exact(n));
                            show_guests.set(false);
                        }
                        class="flex w-full cursor-pointer items-center justify-center px-4 py-3 text-sm text-ink tracking-[0.02em] transition-colors duration-200 hover:text-gold focus:outline-none focus-visible:bg-black/[0.03] focus-visible:text-gold"
                    >
                        {n}
                    </button>
                }
            })
            .collect_view()
    };

    let status = move || match search.with(|s| s.state()) {
        SearchState::Idle => ().into_any(),
        SearchState::Searching => view! {
            <div class="sm:col-span-3">
                <div class="fade-in mt-2 flex items-center gap-2 rounded-sm bg-sand px-3 py-2 text-sm text-ink" role="status">
                    <span class="h-4 w-4 animate-spin rounded-full border-2 border-gold border-t-transparent" aria-hidden="true"/>
                    {i18n.t(CopyKey::SearchAiText)}
                </div>
            </div>
        }
        .into_any(),
        SearchState::Done => view! {
            <div class="sm:col-span-3">
                <div class="fade-in mt-2 flex items-center gap-2 rounded-sm bg-sand px-3 py-2 text-sm text-ink" role="status">
                    <span class="h-2 w-2 rounded-full bg-emerald-500" aria-hidden="true"/>
                    {i18n.t(CopyKey::SearchSuccessMessage)}
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <form
            id="booking"
            on:submit=on_submit
            class="hero-rise relative mt-12 grid gap-3 rounded-sm border border-white/20 bg-white/93 p-4 text-black shadow-[0_18px_50px_rgba(0,0,0,0.24)] sm:grid-cols-[1.3fr_1fr_auto] sm:items-center"
        >
            <div node_ref=dates_ref class="relative">
                <button
                    type="button"
                    aria-expanded=move || show_calendar.get().to_string()
                    on:click=move |_| show_calendar.update(|v| *v = !*v)
                    class="flex w-full cursor-pointer items-center justify-between rounded-sm border border-black/15 bg-white px-3 py-3 text-left text-sm transition-all duration-300 hover:bg-black/[0.02]"
                >
                    <span>{move || i18n.t(CopyKey::SearchDates)}</span>
                    <span class="text-xs text-muted tracking-[0.02em] sm:hidden">{dates_label_short}</span>
                    <span class="hidden text-xs text-muted tracking-[0.02em] sm:inline">{dates_label}</span>
                </button>

                <div
                    class="absolute left-0 right-0 z-20 mt-2 max-w-full overflow-hidden rounded-sm border border-black/10 bg-white p-4 shadow-xl transition duration-200 md:left-auto md:right-auto md:min-w-[280px]"
                    class=("translate-y-2", move || show_calendar.get())
                    class=("opacity-0", move || !show_calendar.get())
                    class=("pointer-events-none", move || !show_calendar.get())
                    inert=move || !show_calendar.get()
                >
                    <p class="mb-3 text-xs uppercase tracking-[0.16em] text-muted">
                        {move || i18n.t(CopyKey::CalendarLabel)}
                    </p>
                    <div class="flex flex-col gap-4 md:grid md:grid-cols-2 md:gap-x-4 md:gap-y-3">
                        <label class="flex flex-col gap-1.5">
                            <span class="text-sm text-muted">{move || i18n.t(CopyKey::CheckIn)}</span>
                            <input
                                type="date"
                                min=move || range.with(|r| r.min_check_in(&today_iso()).to_owned())
                                prop:value=move || range.with(|r| r.check_in.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    range.update(|r| {
                                        r.set_check_in(&value, &today_iso());
                                    });
                                }
                                class="input-date"
                            />
                        </label>
                        <label class="flex flex-col gap-1.5">
                            <span class="text-sm text-muted">{move || i18n.t(CopyKey::CheckOut)}</span>
                            <input
                                type="date"
                                min=move || range.with(|r| r.min_check_out(&today_iso()).to_owned())
                                prop:value=move || range.with(|r| r.check_out.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    range.update(|r| {
                                        r.set_check_out(&value, &today_iso());
                                    });
                                }
                                class="input-date"
                            />
                        </label>
                    </div>
                </div>
            </div>

            <div node_ref=guests_ref class="relative min-w-0">
                <button
                    type="button"
                    aria-label=move || i18n.t(CopyKey::SearchGuests)
                    aria-expanded=move || show_guests.get().to_string()
                    aria-haspopup="listbox"
                    on:click=move |_| show_guests.update(|v| *v = !*v)
                    class="flex w-full cursor-pointer items-center justify-between gap-2 rounded-sm border border-black/15 bg-white px-3 py-3 text-left text-sm transition-all duration-300 hover:bg-black/[0.02]"
                >
                    <span>{move || i18n.t(CopyKey::SearchGuests)}</span>
                    <span class="flex items-center gap-1 text-sm text-ink tracking-[0.02em]">
                        {move || guests.with(|g| g.value())}
                        <span
                            class="inline-block shrink-0 transition-transform duration-250"
                            class=("rotate-180", move || show_guests.get())
                            aria-hidden="true"
                        >"▾"</span>
                    </span>
                </button>

                <Show when=move || show_guests.get()>
                    <div
                        role="listbox"
                        aria-label=move || i18n.t(CopyKey::SearchGuests)
                        class="fade-in absolute left-0 right-0 z-20 mt-2 min-w-40 overflow-hidden rounded-sm bg-white py-1 shadow-xl"
                    >
                        {guest_options}
                    </div>
                </Show>
            </div>

            <button
                type="submit"
                class="rounded-sm bg-gold px-6 py-3 text-sm font-medium uppercase tracking-[0.16em] text-ink shadow-md transition-all duration-300 hover:scale-[1.02] hover:shadow-lg hover:brightness-110"
            >
                {move || i18n.t(CopyKey::SearchButton)}
            </button>

            {status}
        </form>
    }
}
