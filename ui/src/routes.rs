use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::pages::{home::HomePage, not_found::NotFound};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound/> }>
            <Route path=path!("") view=HomePage/>
        </Routes>
    }
}
