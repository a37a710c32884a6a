pub mod background;
pub mod search_form;

use leptos::prelude::*;

use crate::i18n::{CopyKey, use_locale};

use background::HeroBackground;
use search_form::SearchForm;

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="relative min-h-screen overflow-hidden">
            <HeroBackground/>
            <div class="absolute inset-0 bg-black/45"/>
            <div class="absolute inset-x-0 top-0 h-60 bg-gradient-to-b from-black/55 via-black/20 to-transparent"/>

            <div class="relative mx-auto flex min-h-screen max-w-6xl flex-col justify-end px-6 pb-24 pt-36 sm:px-8 md:px-12 md:pb-28 md:pt-40">
                <p class="hero-rise mb-5 text-xs uppercase tracking-[0.22em] text-gold">
                    {move || i18n.t(CopyKey::HeroTag)}
                </p>
                <h1 class="hero-rise max-w-3xl text-4xl font-semibold tracking-[0.08em] text-white sm:text-6xl md:text-7xl">
                    {move || i18n.t(CopyKey::HeroTitle)}
                </h1>
                <p class="hero-rise mt-5 max-w-xl text-base font-light text-white/90 sm:text-xl">
                    {move || i18n.t(CopyKey::HeroSubtitle)}
                </p>

                <SearchForm/>
            </div>
        </section>
    }
}
