use std::collections::HashMap;

use leptos::prelude::{expect_context, provide_context, Get, GetUntracked, RwSignal, Set};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ua,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ua, Locale::En];

    /// Label on the toggle button.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ua => "ua",
            Locale::En => "en",
        }
    }

    /// BCP 47 tag for `<html lang>`.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::Ua => "uk",
            Locale::En => "en",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CopyKey {
    NavBook,
    NavRooms,
    NavSpa,
    NavRestaurant,
    NavContacts,
    MenuToggle,
    MenuClose,
    MenuLabel,
    HeroTitle,
    HeroSubtitle,
    HeroTag,
    SearchDates,
    SearchGuests,
    SearchButton,
    SearchAiText,
    SearchSuccessMessage,
    CalendarLabel,
    DatePlaceholder,
    AboutLabel,
    AboutTitle,
    AboutBody,
    AboutImageAlt,
    RoomsLabel,
    RoomsTitle,
    RoomsSubtitle,
    ExploreButton,
    AmenitiesLabel,
    AmenitiesTitle,
    AmenitiesSubtitle,
    WhyLabel,
    WhyTitle,
    WhySubtitle,
    ChatCta,
    ChatTitle,
    ChatGreeting,
    ChatDemoNote,
    StickyBook,
    FooterNewsletter,
    FooterSubscribe,
    ContactHeading,
    SocialHeading,
    FooterAddress,
    FooterInstagram,
    FooterFacebook,
    EmailPlaceholder,
    FooterCredits,
    BookingModalTitle,
    CheckIn,
    CheckOut,
    GuestsLabel,
    GuestsDecrease,
    GuestsIncrease,
    PickRoomButton,
    ModalClose,
    NotFound,
    PageTitle,
}

impl CopyKey {
    pub const ALL: &'static [CopyKey] = &[
        CopyKey::NavBook,
        CopyKey::NavRooms,
        CopyKey::NavSpa,
        CopyKey::NavRestaurant,
        CopyKey::NavContacts,
        CopyKey::MenuToggle,
        CopyKey::MenuClose,
        CopyKey::MenuLabel,
        CopyKey::HeroTitle,
        CopyKey::HeroSubtitle,
        CopyKey::HeroTag,
        CopyKey::SearchDates,
        CopyKey::SearchGuests,
        CopyKey::SearchButton,
        CopyKey::SearchAiText,
        CopyKey::SearchSuccessMessage,
        CopyKey::CalendarLabel,
        CopyKey::DatePlaceholder,
        CopyKey::AboutLabel,
        CopyKey::AboutTitle,
        CopyKey::AboutBody,
        CopyKey::AboutImageAlt,
        CopyKey::RoomsLabel,
        CopyKey::RoomsTitle,
        CopyKey::RoomsSubtitle,
        CopyKey::ExploreButton,
        CopyKey::AmenitiesLabel,
        CopyKey::AmenitiesTitle,
        CopyKey::AmenitiesSubtitle,
        CopyKey::WhyLabel,
        CopyKey::WhyTitle,
        CopyKey::WhySubtitle,
        CopyKey::ChatCta,
        CopyKey::ChatTitle,
        CopyKey::ChatGreeting,
        CopyKey::ChatDemoNote,
        CopyKey::StickyBook,
        CopyKey::FooterNewsletter,
        CopyKey::FooterSubscribe,
        CopyKey::ContactHeading,
        CopyKey::SocialHeading,
        CopyKey::FooterAddress,
        CopyKey::FooterInstagram,
        CopyKey::FooterFacebook,
        CopyKey::EmailPlaceholder,
        CopyKey::FooterCredits,
        CopyKey::BookingModalTitle,
        CopyKey::CheckIn,
        CopyKey::CheckOut,
        CopyKey::GuestsLabel,
        CopyKey::GuestsDecrease,
        CopyKey::GuestsIncrease,
        CopyKey::PickRoomButton,
        CopyKey::ModalClose,
        CopyKey::NotFound,
        CopyKey::PageTitle,
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub title: String,
    pub price: String,
    pub details: String,
    pub image: String,
    pub image_mobile: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_mobile: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhyItem {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct LocaleContent {
    pub copy: HashMap<CopyKey, String>,
    pub rooms: Vec<Room>,
    pub amenities: Vec<Amenity>,
    pub why: Vec<WhyItem>,
}

const CONTENT_JSON: &str = include_str!("../data/content.json");

pub static CONTENT: Lazy<HashMap<Locale, LocaleContent>> =
    Lazy::new(|| serde_json::from_str(CONTENT_JSON).expect("parse content.json"));

pub fn content(locale: Locale) -> Option<&'static LocaleContent> {
    CONTENT.get(&locale)
}

/// Localized string, empty when the table has no entry.
pub fn t(locale: Locale, key: CopyKey) -> &'static str {
    content(locale)
        .and_then(|c| c.copy.get(&key))
        .map(String::as_str)
        .unwrap_or_default()
}

pub fn rooms(locale: Locale) -> Vec<Room> {
    content(locale).map(|c| c.rooms.clone()).unwrap_or_default()
}

pub fn amenities(locale: Locale) -> Vec<Amenity> {
    content(locale).map(|c| c.amenities.clone()).unwrap_or_default()
}

pub fn why_items(locale: Locale) -> Vec<WhyItem> {
    content(locale).map(|c| c.why.clone()).unwrap_or_default()
}

/// Active display language, shared through context. Not persisted.
#[derive(Debug, Clone, Copy)]
pub struct LocaleStore {
    locale: RwSignal<Locale>,
}

impl LocaleStore {
    pub fn new(initial: Locale) -> Self {
        Self {
            locale: RwSignal::new(initial),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set(&self, locale: Locale) {
        if self.locale.get_untracked() != locale {
            self.locale.set(locale);
        }
    }

    /// Tracked lookup, call it inside a reactive closure.
    pub fn t(&self, key: CopyKey) -> &'static str {
        t(self.locale.get(), key)
    }
}

pub fn provide_locale_store() -> LocaleStore {
    let store = LocaleStore::new(Locale::default());
    provide_context(store);
    store
}

pub fn use_locale() -> LocaleStore {
    expect_context::<LocaleStore>()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn keys(locale: Locale) -> HashSet<CopyKey> {
        content(locale)
            .map(|c| c.copy.keys().copied().collect())
            .unwrap_or_default()
    }

    #[test]
    fn both_locales_have_the_same_keys() {
        assert_eq!(keys(Locale::Ua), keys(Locale::En));
    }

    #[test]
    fn every_key_is_translated() {
        for locale in Locale::ALL {
            for key in CopyKey::ALL {
                assert!(!t(locale, *key).is_empty(), "{locale:?} is missing {key:?}");
            }
        }
        assert_eq!(keys(Locale::Ua).len(), CopyKey::ALL.len());
    }

    #[test]
    fn lists_line_up_across_locales() {
        let room_ids = |l| rooms(l).into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(room_ids(Locale::Ua), room_ids(Locale::En));
        assert_eq!(amenities(Locale::Ua).len(), amenities(Locale::En).len());
        assert_eq!(why_items(Locale::Ua).len(), why_items(Locale::En).len());
    }

    #[test]
    fn lookups_follow_locale() {
        assert_eq!(t(Locale::Ua, CopyKey::SearchButton), "Знайти");
        assert_eq!(t(Locale::En, CopyKey::SearchButton), "Find");
        assert_eq!(Locale::Ua.html_lang(), "uk");
        assert_eq!(Locale::default(), Locale::Ua);
    }
}
