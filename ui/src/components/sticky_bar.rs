use leptos::prelude::*;

use crate::i18n::{CopyKey, use_locale};

/// Mobile-only bottom bar that offers booking once the hero is gone.
#[component]
pub fn MobileStickyBookingBar(#[prop(into)] show: Signal<bool>, on_book: Callback<()>) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <div
            class="pointer-events-none fixed inset-x-0 bottom-0 z-40 md:hidden"
            aria-hidden=move || (!show.get()).to_string()
        >
            <Show when=move || show.get()>
                <div class="slide-up pointer-events-auto border-t border-black/10 bg-white/95 px-4 py-3 shadow-[0_-8px_24px_rgba(0,0,0,0.08)] backdrop-blur">
                    <button
                        type="button"
                        on:click=move |_| on_book.run(())
                        class="w-full rounded-sm bg-gold px-4 py-3 text-sm font-medium uppercase tracking-[0.16em] text-ink"
                    >
                        {move || i18n.t(CopyKey::StickyBook)}
                    </button>
                </div>
            </Show>
        </div>
    }
}
