use leptos::html;
use leptos::prelude::*;

use crate::components::dialog::use_dialog;
use crate::i18n::{CopyKey, Locale, use_locale};

pub const NAV_LINKS: [(CopyKey, &str); 4] = [
    (CopyKey::NavRooms, "#rooms"),
    (CopyKey::NavSpa, "#amenities"),
    (CopyKey::NavRestaurant, "#why"),
    (CopyKey::NavContacts, "#contacts"),
];

#[component]
fn LocaleToggle() -> impl IntoView {
    let i18n = use_locale();

    Locale::ALL
        .into_iter()
        .map(move |locale| {
            view! {
                <button
                    type="button"
                    aria-pressed=move || (i18n.locale() == locale).to_string()
                    on:click=move |_| i18n.set(locale)
                    class="px-1.5 py-0.5 text-xs uppercase tracking-[0.16em] transition-opacity"
                    class=("opacity-50", move || i18n.locale() != locale)
                >
                    {locale.code()}
                </button>
            }
        })
        .collect_view()
}

/// Fixed top bar. `solid` swaps the transparent hero treatment for the
/// white bar used once the page has scrolled.
#[component]
pub fn Header(#[prop(into)] solid: Signal<bool>, on_book: Callback<()>) -> impl IntoView {
    let i18n = use_locale();
    let menu_open = RwSignal::new(false);
    let drawer_ref: NodeRef<html::Div> = NodeRef::new();
    let close_menu = Callback::new(move |_: ()| menu_open.set(false));

    use_dialog(menu_open.into(), drawer_ref, close_menu);

    let nav = move |on_pick: Option<Callback<()>>| {
        NAV_LINKS
            .into_iter()
            .map(move |(key, href)| {
                view! {
                    <a
                        href=href
                        on:click=move |_| {
                            if let Some(cb) = on_pick {
                                cb.run(());
                            }
                        }
                        class="text-sm tracking-[0.08em] transition-colors hover:text-gold"
                    >
                        {move || i18n.t(key)}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class="fixed inset-x-0 top-0 z-50 transition-all duration-300"
            class=("bg-white", move || solid.get())
            class=("text-ink", move || solid.get())
            class=("shadow-sm", move || solid.get())
            class=("bg-transparent", move || !solid.get())
            class=("text-white", move || !solid.get())
        >
            <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4 sm:px-6">
                <a href="#" class="font-serif text-xl tracking-[0.12em]">"RIBAS KARPATY"</a>

                <nav class="hidden items-center gap-8 md:flex">{nav(None)}</nav>

                <div class="flex items-center gap-3">
                    <LocaleToggle/>
                    <button
                        type="button"
                        on:click=move |_| on_book.run(())
                        class="hidden rounded-sm bg-gold px-4 py-2 text-xs font-medium uppercase tracking-[0.16em] text-ink transition hover:brightness-110 sm:inline-block"
                    >
                        {move || i18n.t(CopyKey::NavBook)}
                    </button>
                    <button
                        type="button"
                        aria-label=move || i18n.t(CopyKey::MenuToggle)
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                        class="p-2 md:hidden"
                    >
                        <span aria-hidden="true">"☰"</span>
                    </button>
                </div>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div
                class="fade-in fixed inset-0 z-[60] bg-black/50 md:hidden"
                aria-hidden="true"
                on:click=move |_| close_menu.run(())
            />
            <div
                node_ref=drawer_ref
                role="dialog"
                aria-modal="true"
                aria-label=move || i18n.t(CopyKey::MenuLabel)
                class="slide-in-right fixed inset-y-0 right-0 z-[70] flex w-72 max-w-[85vw] flex-col gap-6 bg-white p-6 text-ink shadow-xl md:hidden"
            >
                <button
                    type="button"
                    aria-label=move || i18n.t(CopyKey::MenuClose)
                    on:click=move |_| close_menu.run(())
                    class="self-end p-2"
                >
                    <span aria-hidden="true">"✕"</span>
                </button>
                <nav class="flex flex-col gap-5">{nav(Some(close_menu))}</nav>
                <button
                    type="button"
                    on:click=move |_| {
                        close_menu.run(());
                        on_book.run(());
                    }
                    class="mt-auto rounded-sm bg-gold px-4 py-3 text-sm font-medium uppercase tracking-[0.16em] text-ink"
                >
                    {move || i18n.t(CopyKey::NavBook)}
                </button>
            </div>
        </Show>
    }
}
