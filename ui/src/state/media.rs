/// lg breakpoint: desktop from 1024px, mobile below.
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

pub const HERO_VIDEO_DESKTOP: &str = "/videos/hero.webm";
pub const HERO_VIDEO_MOBILE: &str = "/videos/hero-mobile.webm";
pub const HERO_POSTER_DESKTOP: &str = "/images/hero-poster%20desktop.webp";
pub const HERO_POSTER_MOBILE: &str = "/images/hero-poster%20mobile.webp";

/// Scroll distance over which the parallax runs, and how far it moves.
pub const PARALLAX_SCROLL_RANGE: f64 = 600.0;
pub const PARALLAX_MAX_SHIFT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width < DESKTOP_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSources {
    pub video: &'static str,
    pub poster: &'static str,
}

impl MediaSources {
    pub fn for_viewport(viewport: Viewport) -> Self {
        match viewport {
            Viewport::Mobile => Self {
                video: HERO_VIDEO_MOBILE,
                poster: HERO_POSTER_MOBILE,
            },
            Viewport::Desktop => Self {
                video: HERO_VIDEO_DESKTOP,
                poster: HERO_POSTER_DESKTOP,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPhase {
    Unloaded,
    Loading,
    Ready,
    /// The fallback source errored too. Poster stays.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Mount(Viewport),
    Resize(Viewport),
    CanPlay,
    Playing,
    Error,
    ReducedMotion(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// Point the `<video>` at `src`, `load()` and `play()` it.
    Load(&'static str),
}

#[derive(Debug, Clone)]
pub struct MediaController {
    viewport: Viewport,
    video_src: &'static str,
    phase: MediaPhase,
    fallback_tried: bool,
    reduced_motion: bool,
}

impl Default for MediaController {
    fn default() -> Self {
        Self {
            viewport: Viewport::Mobile,
            video_src: HERO_VIDEO_MOBILE,
            phase: MediaPhase::Unloaded,
            fallback_tried: false,
            reduced_motion: false,
        }
    }
}

impl MediaController {
    pub fn phase(&self) -> MediaPhase {
        self.phase
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn video_src(&self) -> &'static str {
        self.video_src
    }

    pub fn poster_src(&self) -> &'static str {
        MediaSources::for_viewport(self.viewport).poster
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn is_ready(&self) -> bool {
        self.phase == MediaPhase::Ready
    }

    /// Reduced motion pins the poster regardless of readiness.
    pub fn poster_opacity(&self) -> f64 {
        if self.reduced_motion || !self.is_ready() {
            1.0
        } else {
            0.0
        }
    }

    pub fn video_revealed(&self) -> bool {
        self.poster_opacity() == 0.0
    }

    pub fn transition(&mut self, event: MediaEvent) -> Option<MediaCommand> {
        match event {
            MediaEvent::Mount(viewport) => Some(self.select(viewport)),
            MediaEvent::Resize(viewport) => {
                if viewport == self.viewport || self.phase == MediaPhase::Unloaded {
                    return None;
                }
                Some(self.select(viewport))
            }
            MediaEvent::CanPlay | MediaEvent::Playing => {
                if self.phase == MediaPhase::Loading {
                    self.phase = MediaPhase::Ready;
                }
                None
            }
            MediaEvent::Error => {
                if self.fallback_tried {
                    self.phase = MediaPhase::Failed;
                    return None;
                }
                self.fallback_tried = true;
                self.phase = MediaPhase::Loading;
                self.video_src = HERO_VIDEO_DESKTOP;
                Some(MediaCommand::Load(HERO_VIDEO_DESKTOP))
            }
            MediaEvent::ReducedMotion(on) => {
                self.reduced_motion = on;
                None
            }
        }
    }

    fn select(&mut self, viewport: Viewport) -> MediaCommand {
        let sources = MediaSources::for_viewport(viewport);
        self.viewport = viewport;
        self.video_src = sources.video;
        self.phase = MediaPhase::Loading;
        self.fallback_tried = false;
        MediaCommand::Load(sources.video)
    }
}

/// iOS and narrow viewports skip parallax, scroll-linked transforms stutter there.
pub fn parallax_enabled(reduced_motion: bool, viewport: Viewport, is_ios: bool) -> bool {
    !reduced_motion && !is_ios && viewport == Viewport::Desktop
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    let progress = (scroll_y / PARALLAX_SCROLL_RANGE).clamp(0.0, 1.0);
    progress * PARALLAX_MAX_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(viewport: Viewport) -> MediaController {
        let mut ctl = MediaController::default();
        ctl.transition(MediaEvent::Mount(viewport));
        ctl
    }

    #[test]
    fn breakpoint_splits_at_1024() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(1023.9), Viewport::Mobile);
        assert_eq!(Viewport::from_width(1024.0), Viewport::Desktop);
    }

    #[test]
    fn mount_loads_source_for_viewport() {
        let mut ctl = MediaController::default();
        assert_eq!(ctl.phase(), MediaPhase::Unloaded);

        let cmd = ctl.transition(MediaEvent::Mount(Viewport::Mobile));
        assert_eq!(cmd, Some(MediaCommand::Load(HERO_VIDEO_MOBILE)));
        assert_eq!(ctl.phase(), MediaPhase::Loading);
        assert_eq!(ctl.poster_src(), HERO_POSTER_MOBILE);
    }

    #[test]
    fn can_play_reveals_video() {
        let mut ctl = mounted(Viewport::Desktop);
        assert_eq!(ctl.poster_opacity(), 1.0);

        ctl.transition(MediaEvent::CanPlay);
        assert!(ctl.is_ready());
        assert_eq!(ctl.poster_opacity(), 0.0);
        assert!(ctl.video_revealed());

        ctl.transition(MediaEvent::Playing);
        assert!(ctl.is_ready());
    }

    #[test]
    fn resize_within_breakpoint_keeps_readiness() {
        let mut ctl = mounted(Viewport::Desktop);
        ctl.transition(MediaEvent::CanPlay);

        assert_eq!(ctl.transition(MediaEvent::Resize(Viewport::Desktop)), None);
        assert!(ctl.is_ready());
    }

    #[test]
    fn crossing_breakpoint_resets_readiness() {
        let mut ctl = mounted(Viewport::Desktop);
        ctl.transition(MediaEvent::CanPlay);

        let cmd = ctl.transition(MediaEvent::Resize(Viewport::Mobile));
        assert_eq!(cmd, Some(MediaCommand::Load(HERO_VIDEO_MOBILE)));
        assert_eq!(ctl.phase(), MediaPhase::Loading);
        assert_eq!(ctl.poster_opacity(), 1.0);
    }

    #[test]
    fn error_falls_back_to_desktop_once() {
        let mut ctl = mounted(Viewport::Mobile);

        let cmd = ctl.transition(MediaEvent::Error);
        assert_eq!(cmd, Some(MediaCommand::Load(HERO_VIDEO_DESKTOP)));
        assert_eq!(ctl.video_src(), HERO_VIDEO_DESKTOP);

        assert_eq!(ctl.transition(MediaEvent::Error), None);
        assert_eq!(ctl.phase(), MediaPhase::Failed);
        assert_eq!(ctl.poster_opacity(), 1.0);

        // a late canplay from the dead source changes nothing
        ctl.transition(MediaEvent::CanPlay);
        assert_eq!(ctl.phase(), MediaPhase::Failed);
    }

    #[test]
    fn new_source_rearms_fallback() {
        let mut ctl = mounted(Viewport::Mobile);
        ctl.transition(MediaEvent::Error);
        ctl.transition(MediaEvent::Resize(Viewport::Desktop));

        assert_eq!(
            ctl.transition(MediaEvent::Error),
            Some(MediaCommand::Load(HERO_VIDEO_DESKTOP))
        );
    }

    #[test]
    fn reduced_motion_pins_poster() {
        let mut ctl = mounted(Viewport::Desktop);
        ctl.transition(MediaEvent::ReducedMotion(true));
        ctl.transition(MediaEvent::CanPlay);

        assert!(ctl.is_ready());
        assert_eq!(ctl.poster_opacity(), 1.0);
        assert!(!ctl.video_revealed());

        ctl.transition(MediaEvent::ReducedMotion(false));
        assert_eq!(ctl.poster_opacity(), 0.0);
    }

    #[test]
    fn parallax_only_on_calm_desktops() {
        assert!(parallax_enabled(false, Viewport::Desktop, false));
        assert!(!parallax_enabled(true, Viewport::Desktop, false));
        assert!(!parallax_enabled(false, Viewport::Desktop, true));
        assert!(!parallax_enabled(false, Viewport::Mobile, false));
    }

    #[test]
    fn parallax_is_linear_and_capped() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(300.0), 45.0);
        assert_eq!(parallax_offset(600.0), 90.0);
        assert_eq!(parallax_offset(5000.0), 90.0);
        assert_eq!(parallax_offset(-40.0), 0.0);
    }
}
