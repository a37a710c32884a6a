use leptos::html;
use leptos::prelude::*;
use leptos_use::{
    UseIntersectionObserverOptions, UseIntersectionObserverReturn, use_intersection_observer_with_options,
    use_media_query,
};

/// Share of the element that has to be on screen before it reveals.
pub const REVEAL_AMOUNT: f64 = 0.2;

fn reveal_classes(shown: bool, reduced_motion: bool) -> &'static str {
    match (shown, reduced_motion) {
        (true, _) => "opacity-100 translate-y-0",
        (false, true) => "opacity-0",
        (false, false) => "opacity-0 translate-y-6",
    }
}

/// Fades (and slides, unless motion is reduced) its children in the first
/// time they scroll into view. Never hides them again.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target: NodeRef<html::Div> = NodeRef::new();
    let shown = RwSignal::new(false);
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|e| e.intersection_ratio() >= REVEAL_AMOUNT) {
                shown.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_AMOUNT]),
    );

    Effect::new(move |_| {
        if shown.get() {
            stop();
        }
    });

    view! {
        <div
            node_ref=target
            class=move || format!(
                "transition-all duration-700 ease-out {} {}",
                reveal_classes(shown.get(), reduced_motion.get()),
                class,
            )
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_only_fades() {
        assert_eq!(reveal_classes(false, true), "opacity-0");
        assert!(reveal_classes(false, false).contains("translate-y-6"));
    }

    #[test]
    fn shown_is_the_same_either_way() {
        assert_eq!(reveal_classes(true, true), reveal_classes(true, false));
    }
}
