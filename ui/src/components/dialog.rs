use leptos::ev::keydown;
use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};
use web_sys::HtmlElement;

use crate::dom;
use crate::state::scroll_lock::LockCount;

/// Reference-counted body scroll lock. One per app, every overlay goes through it.
#[derive(Clone, Copy)]
pub struct ScrollLock {
    count: RwSignal<LockCount>,
}

impl ScrollLock {
    fn acquire(&self) {
        let mut locked = false;
        self.count.update(|c| locked = c.acquire());
        if locked {
            dom::set_body_scroll_locked(true);
        }
    }

    fn release(&self) {
        let mut unlocked = false;
        self.count.try_update(|c| unlocked = c.release());
        if unlocked {
            dom::set_body_scroll_locked(false);
        }
    }
}

pub fn provide_scroll_lock() -> ScrollLock {
    let lock = ScrollLock {
        count: RwSignal::new(LockCount::default()),
    };
    provide_context(lock);
    lock
}

/// Holds the page scroll lock while `active` is true, and drops it on unmount.
pub fn use_scroll_lock(active: Signal<bool>) {
    let lock = expect_context::<ScrollLock>();
    let held = StoredValue::new(false);

    Effect::new(move |_| {
        let want = active.get();
        let has = held.get_value();
        if want && !has {
            lock.acquire();
            held.set_value(true);
        } else if !want && has {
            lock.release();
            held.set_value(false);
        }
    });

    on_cleanup(move || {
        if held.try_get_value().unwrap_or(false) {
            lock.release();
        }
    });
}

/// Modal plumbing shared by the booking modal and the mobile drawer:
/// scroll lock, focus capture/restore, Escape to close, Tab trapped inside `dialog`.
pub fn use_dialog(open: Signal<bool>, dialog: NodeRef<html::Div>, on_close: Callback<()>) {
    use_scroll_lock(open);

    let previous = StoredValue::new_local(None::<HtmlElement>);

    Effect::new(move |was_open: Option<bool>| {
        let is_open = open.get();

        if is_open && was_open != Some(true) {
            previous.set_value(dom::active_element());
            // content mounts with the same tick, focus once it is in the DOM
            request_animation_frame(move || {
                if let Some(el) = dialog.get_untracked() {
                    dom::focus_first(&el);
                }
            });
        } else if !is_open && was_open == Some(true) {
            if let Some(prev) = previous.try_update_value(|p| p.take()).flatten() {
                let _ = prev.focus();
            }
        }

        is_open
    });

    let _ = use_event_listener(use_document(), keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }

        if ev.key() == "Escape" {
            on_close.run(());
            return;
        }

        if let Some(el) = dialog.get_untracked() {
            dom::trap_tab(&el, &ev);
        }
    });

    on_cleanup(move || {
        if let Some(prev) = previous.try_update_value(|p| p.take()).flatten() {
            let _ = prev.focus();
        }
    });
}
