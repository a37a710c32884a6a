use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::i18n::{CopyKey, use_locale};

const PHONE: &str = "+380 67 000 00 00";
const EMAIL: &str = "welcome@ribaskarpaty.com";
const INSTAGRAM_URL: &str = "https://www.instagram.com/";
const FACEBOOK_URL: &str = "https://www.facebook.com/Ribas.karpaty/";

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_locale();

    // newsletter is a mock, the form only swallows the submit
    let on_subscribe = move |ev: SubmitEvent| ev.prevent_default();

    view! {
        <footer id="contacts" class="bg-ink pb-28 pt-16 text-white md:pb-16">
            <div class="mx-auto grid max-w-6xl gap-10 px-4 sm:px-6 md:grid-cols-3">
                <div>
                    <h3 class="mb-4 text-xs uppercase tracking-[0.24em] text-gold">
                        {move || i18n.t(CopyKey::ContactHeading)}
                    </h3>
                    <address class="space-y-2 text-sm not-italic text-white/80">
                        <p>{move || i18n.t(CopyKey::FooterAddress)}</p>
                        <p><a href=format!("tel:{}", PHONE.replace(' ', "")) class="hover:text-gold">{PHONE}</a></p>
                        <p><a href=format!("mailto:{EMAIL}") class="hover:text-gold">{EMAIL}</a></p>
                    </address>
                </div>

                <div>
                    <h3 class="mb-4 text-xs uppercase tracking-[0.24em] text-gold">
                        {move || i18n.t(CopyKey::SocialHeading)}
                    </h3>
                    <nav class="flex flex-col gap-2 text-sm text-white/80">
                        <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer" class="hover:text-gold">
                            {move || i18n.t(CopyKey::FooterInstagram)}
                        </a>
                        <a href=FACEBOOK_URL target="_blank" rel="noopener noreferrer" class="hover:text-gold">
                            {move || i18n.t(CopyKey::FooterFacebook)}
                        </a>
                    </nav>
                </div>

                <form on:submit=on_subscribe class="flex flex-col gap-3">
                    <h3 class="text-xs uppercase tracking-[0.24em] text-gold">
                        {move || i18n.t(CopyKey::FooterNewsletter)}
                    </h3>
                    <input
                        type="email"
                        placeholder=move || i18n.t(CopyKey::EmailPlaceholder)
                        aria-label=move || i18n.t(CopyKey::FooterNewsletter)
                        class="rounded-sm border border-white/20 bg-transparent px-3 py-2 text-sm placeholder:text-white/40"
                    />
                    <button
                        type="submit"
                        class="rounded-sm bg-gold px-4 py-2 text-xs font-medium uppercase tracking-[0.16em] text-ink"
                    >
                        {move || i18n.t(CopyKey::FooterSubscribe)}
                    </button>
                </form>
            </div>

            <p class="mx-auto mt-12 max-w-6xl px-4 text-xs text-white/50 sm:px-6">
                "© 2025 Ribas Karpaty · " {move || i18n.t(CopyKey::FooterCredits)}
            </p>
        </footer>
    }
}
