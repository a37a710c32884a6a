use leptos::prelude::*;

use crate::i18n::{CopyKey, use_locale};

/// Floating assistant button. Only a demo panel, nothing is sent anywhere.
#[component]
pub fn AIAssistantWidget(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let i18n = use_locale();
    let open = RwSignal::new(false);

    view! {
        <div
            class="fixed bottom-24 right-4 z-40 flex flex-col items-end gap-3 transition-all duration-300 md:bottom-6 md:right-6"
            style:opacity=move || if visible.get() { "1" } else { "0" }
            style:pointer-events=move || if visible.get() { "auto" } else { "none" }
            style:transform=move || if visible.get() { "translateY(0)" } else { "translateY(12px)" }
            aria-hidden=move || (!visible.get()).to_string()
            inert=move || !visible.get()
        >
            <Show when=move || open.get()>
                <div class="scale-in w-72 rounded-lg border border-black/10 bg-white p-4 text-sm text-ink shadow-xl">
                    <p class="mb-2 font-semibold">{move || i18n.t(CopyKey::ChatTitle)}</p>
                    <p class="rounded-md bg-sand px-3 py-2">{move || i18n.t(CopyKey::ChatGreeting)}</p>
                    <p class="mt-3 text-xs text-muted">{move || i18n.t(CopyKey::ChatDemoNote)}</p>
                </div>
            </Show>
            <button
                type="button"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|v| *v = !*v)
                class="flex items-center gap-2 rounded-full bg-ink px-4 py-3 text-sm text-white shadow-lg transition hover:scale-[1.03]"
            >
                <span aria-hidden="true">"✦"</span>
                {move || i18n.t(CopyKey::ChatCta)}
            </button>
        </div>
    }
}
