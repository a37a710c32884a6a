use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_use::{UseWindowSizeReturn, use_media_query, use_window_scroll, use_window_size};

use crate::dom;
use crate::state::media::{
    MediaCommand, MediaController, MediaEvent, MediaPhase, Viewport, parallax_enabled,
    parallax_offset,
};

/// Video behind the hero with a poster on top that fades out once the video can play.
#[component]
pub fn HeroBackground() -> impl IntoView {
    let video_ref: NodeRef<html::Video> = NodeRef::new();
    let ctl = RwSignal::new(MediaController::default());

    let UseWindowSizeReturn { width, .. } = use_window_size();
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let (_, scroll_y) = use_window_scroll();
    let is_ios = dom::is_ios();

    let send = move |event: MediaEvent| {
        let mut cmd = None;
        ctl.update(|c| cmd = c.transition(event));

        if let (Some(MediaCommand::Load(src)), Some(video)) = (cmd, video_ref.get_untracked()) {
            video.set_loop(true);
            video.set_muted(true);
            video.set_src(src);
            video.load();
            dom::play_quietly(&video);
        }
    };

    // first run mounts, later runs only matter when the breakpoint is crossed
    Effect::new(move |_| {
        let viewport = Viewport::from_width(width.get());
        if video_ref.get().is_none() {
            return;
        }

        let unloaded = ctl.with_untracked(|c| c.phase() == MediaPhase::Unloaded);
        send(if unloaded {
            MediaEvent::Mount(viewport)
        } else {
            MediaEvent::Resize(viewport)
        });
    });

    Effect::new(move |_| send(MediaEvent::ReducedMotion(reduced_motion.get())));

    let on_error = move |_| {
        let src = ctl.with_untracked(|c| c.video_src());
        warn!("hero video failed: {src}");
        send(MediaEvent::Error);
    };

    let parallax = move || {
        let viewport = ctl.with(|c| c.viewport());
        if parallax_enabled(reduced_motion.get(), viewport, is_ios) {
            format!("translate3d(0, {:.1}px, 0)", parallax_offset(scroll_y.get()))
        } else {
            String::new()
        }
    };

    view! {
        <div class="absolute inset-0 will-change-transform" style:transform=parallax>
            <div
                class="absolute inset-0 z-[1] overflow-hidden transition-opacity duration-[600ms] ease-[cubic-bezier(0.4,0,0.2,1)]"
                style:opacity=move || ctl.with(|c| c.poster_opacity()).to_string()
                style:pointer-events=move || if ctl.with(|c| c.is_ready()) { "none" } else { "auto" }
                aria-hidden="true"
            >
                <img
                    src=move || ctl.with(|c| c.poster_src())
                    alt=""
                    fetchpriority="high"
                    class="h-full w-full object-cover object-center"
                />
            </div>
            <video
                node_ref=video_ref
                autoplay
                muted
                playsinline
                preload="metadata"
                aria-hidden="true"
                class="absolute inset-0 h-full w-full object-cover transition-opacity duration-[600ms]"
                class=("opacity-0", move || !ctl.with(|c| c.video_revealed()))
                on:canplay=move |_| send(MediaEvent::CanPlay)
                on:playing=move |_| send(MediaEvent::Playing)
                on:error=on_error
            />
        </div>
    }
}
