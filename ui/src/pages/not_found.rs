use leptos::prelude::*;

use crate::i18n::{CopyKey, use_locale};

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-6 bg-sand px-4 text-center">
            <p class="font-serif text-6xl text-gold">"404"</p>
            <h1 class="text-xl text-ink">{move || i18n.t(CopyKey::NotFound)}</h1>
            <a href="/" class="text-xs uppercase tracking-[0.16em] text-ink underline-offset-4 hover:underline">
                "Ribas Karpaty"
            </a>
        </main>
    }
}
