use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;

use crate::components::dialog::use_dialog;
use crate::i18n::{CopyKey, use_locale};
use crate::state::dates::{DateRange, today_iso};
use crate::state::guests::GuestCounter;

pub const TITLE_ID: &str = "booking-modal-title";
const GUESTS_LABEL_ID: &str = "booking-modal-guests";

#[component]
pub fn BookingModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_locale();
    let range = RwSignal::new(DateRange::default());
    let guests = RwSignal::new(GuestCounter::default());
    let dialog_ref: NodeRef<html::Div> = NodeRef::new();

    use_dialog(open, dialog_ref, on_close);

    // dates default on open, later opens keep what the guest picked while it is still ahead
    Effect::new(move |_| {
        if open.get() {
            range.update(|r| r.fill_defaults(&today_iso()));
        }
    });

    // only the overlay itself, clicks inside the dialog bubble up with another target
    let on_backdrop = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if range.with_untracked(|r| r.is_valid(&today_iso())) {
            on_close.run(());
        }
    };

    let placeholder = move |empty: bool| {
        empty.then(|| {
            view! {
                <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-sm text-muted md:hidden" aria-hidden="true">
                    {i18n.t(CopyKey::DatePlaceholder)}
                </span>
            }
        })
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="fade-in fixed inset-0 z-[100] flex items-center justify-center bg-black/55 p-4 backdrop-blur-sm"
                on:click=on_backdrop
            >
                <div
                    node_ref=dialog_ref
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=TITLE_ID
                    class="scale-in relative w-full max-w-md rounded-lg border border-black/10 bg-white shadow-xl"
                >
                    <div class="flex items-center justify-between border-b border-black/10 px-4 py-3 sm:px-5">
                        <h2 id=TITLE_ID class="text-lg font-semibold tracking-tight text-ink">
                            {move || i18n.t(CopyKey::BookingModalTitle)}
                        </h2>
                        <button
                            type="button"
                            aria-label=move || i18n.t(CopyKey::ModalClose)
                            on:click=move |_| on_close.run(())
                            class="rounded p-1.5 text-muted transition hover:bg-black/[0.04] focus:outline-none focus:bg-black/[0.04]"
                        >
                            <span aria-hidden="true">"✕"</span>
                        </button>
                    </div>

                    <form on:submit=on_submit class="p-4 sm:p-5">
                        <div class="space-y-4">
                            <div class="flex flex-col gap-4 md:grid md:grid-cols-2 md:gap-3">
                                <label class="flex flex-col gap-1.5 text-sm">
                                    <span class="text-muted">{move || i18n.t(CopyKey::CheckIn)}</span>
                                    <div class="relative">
                                        <input
                                            type="date"
                                            required
                                            min=move || range.with(|r| r.min_check_in(&today_iso()).to_owned())
                                            prop:value=move || range.with(|r| r.check_in.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                range.update(|r| {
                                                    r.set_check_in(&value, &today_iso());
                                                });
                                            }
                                            class="input-date relative min-w-0"
                                        />
                                        {move || placeholder(range.with(|r| r.check_in.is_empty()))}
                                    </div>
                                </label>
                                <label class="flex flex-col gap-1.5 text-sm">
                                    <span class="text-muted">{move || i18n.t(CopyKey::CheckOut)}</span>
                                    <div class="relative">
                                        <input
                                            type="date"
                                            required
                                            min=move || range.with(|r| r.min_check_out(&today_iso()).to_owned())
                                            prop:value=move || range.with(|r| r.check_out.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                range.update(|r| {
                                                    r.set_check_out(&value, &today_iso());
                                                });
                                            }
                                            class="input-date relative min-w-0"
                                        />
                                        {move || placeholder(range.with(|r| r.check_out.is_empty()))}
                                    </div>
                                </label>
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <span id=GUESTS_LABEL_ID class="text-sm text-muted">
                                    {move || i18n.t(CopyKey::GuestsLabel)}
                                </span>
                                <div
                                    role="group"
                                    aria-labelledby=GUESTS_LABEL_ID
                                    class="flex items-center justify-between rounded border border-black/15 bg-white px-3 py-2"
                                >
                                    <button
                                        type="button"
                                        aria-label=move || i18n.t(CopyKey::GuestsDecrease)
                                        disabled=move || !guests.with(|g| g.can_decrement())
                                        on:click=move |_| guests.update(|g| g.decrement())
                                        class="stepper"
                                    >
                                        "−"
                                    </button>
                                    <span class="min-w-[2rem] text-center font-medium text-ink">
                                        {move || guests.with(|g| g.value())}
                                    </span>
                                    <button
                                        type="button"
                                        aria-label=move || i18n.t(CopyKey::GuestsIncrease)
                                        disabled=move || !guests.with(|g| g.can_increment())
                                        on:click=move |_| guests.update(|g| g.increment())
                                        class="stepper"
                                    >
                                        "+"
                                    </button>
                                </div>
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="mt-6 w-full rounded-sm bg-gold px-4 py-3 text-sm font-medium uppercase tracking-[0.14em] text-ink shadow-md transition hover:brightness-110"
                        >
                            {move || i18n.t(CopyKey::PickRoomButton)}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
