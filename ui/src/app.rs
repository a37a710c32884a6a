use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::dialog::provide_scroll_lock;
use crate::dom;
use crate::i18n::{CopyKey, provide_locale_store};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let i18n = provide_locale_store();
    provide_scroll_lock();

    // <html lang> follows the active locale
    Effect::new(move |_| dom::set_document_lang(i18n.locale().html_lang()));

    view! {
        <Title text=move || i18n.t(CopyKey::PageTitle)/>
        <Router>
            <RoutesMenu/>
        </Router>
    }
}
