/// Past this many pixels the header switches to its solid background.
pub const HEADER_SOLID_AFTER: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Solid,
}

/// Everything that hangs off "is the hero on screen", derived in one place so
/// the sticky bar and the chat widget always move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub header: HeaderStyle,
    pub show_sticky_bar: bool,
    pub show_chat_widget: bool,
}

impl Chrome {
    pub fn derive(hero_in_view: bool, scroll_y: f64) -> Self {
        let header = if scroll_y > HEADER_SOLID_AFTER || !hero_in_view {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        };

        Self {
            header,
            show_sticky_bar: !hero_in_view,
            show_chat_widget: !hero_in_view,
        }
    }
}

/// Any overlap with the viewport counts as in view.
pub fn intersects(ratio: f64, is_intersecting: bool) -> bool {
    is_intersecting || ratio > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_hero_shows_bar_and_widget_together() {
        let before = Chrome::derive(true, 0.0);
        assert!(!before.show_sticky_bar);
        assert!(!before.show_chat_widget);

        let after = Chrome::derive(false, 900.0);
        assert!(after.show_sticky_bar);
        assert!(after.show_chat_widget);

        let back = Chrome::derive(true, 0.0);
        assert_eq!(back, before);
    }

    #[test]
    fn header_goes_solid_on_scroll_or_when_hero_is_gone() {
        assert_eq!(Chrome::derive(true, 0.0).header, HeaderStyle::Transparent);
        assert_eq!(Chrome::derive(true, 20.0).header, HeaderStyle::Transparent);
        assert_eq!(Chrome::derive(true, 21.0).header, HeaderStyle::Solid);
        assert_eq!(Chrome::derive(false, 0.0).header, HeaderStyle::Solid);
    }

    #[test]
    fn any_overlap_is_in_view() {
        assert!(intersects(0.001, true));
        assert!(intersects(0.0, true));
        assert!(!intersects(0.0, false));
    }
}
