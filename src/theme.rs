//! Dark/light theme toggle and persistence.
//!
//! The preference is stored as `"dark"` or `"light"` under a single key in
//! `localStorage` and applied as a class on `<body>`. Only an exact `"dark"`
//! turns dark mode on at load; anything else leaves the default light theme.
//! Storage and the display target sit behind small traits so the toggle and
//! load rules can be exercised without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use web_sys::{HtmlElement, Storage, Window};

use crate::consts::DARK_THEME_CLASS;
use crate::dom;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. No trimming, no case folding.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Key-value persistence for the preference.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Where the display mode is applied.
pub trait ThemeTarget {
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
}

pub struct ThemePreference<S, T> {
    store: S,
    target: T,
    key: String,
}

impl<S: ThemeStore, T: ThemeTarget> ThemePreference<S, T> {
    pub fn new(store: S, target: T, key: impl Into<String>) -> Self {
        Self { store, target, key: key.into() }
    }

    /// Flip the display mode and persist the result.
    pub fn toggle(&self) -> Theme {
        let next = Theme::from_dark(!self.target.is_dark());
        self.target.set_dark(next.is_dark());
        self.store.set(&self.key, next.as_str());
        next
    }

    /// Apply the stored preference, if it asks for dark mode.
    pub fn load(&self) -> Theme {
        let theme = Theme::from_stored(self.store.get(&self.key).as_deref());
        if theme.is_dark() {
            self.target.set_dark(true);
        }
        theme
    }

    /// The mode currently shown.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.target.is_dark())
    }
}

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                Self(None)
            }
        }
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.0.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("failed to read {key}: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.0.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("failed to persist {key}: {err:?}");
        }
    }
}

/// The dark-theme class on `<body>`.
pub struct BodyClass(HtmlElement);

impl BodyClass {
    #[must_use]
    pub fn new(body: HtmlElement) -> Self {
        Self(body)
    }
}

impl ThemeTarget for BodyClass {
    fn is_dark(&self) -> bool {
        self.0.class_list().contains(DARK_THEME_CLASS)
    }

    fn set_dark(&self, dark: bool) {
        dom::set_class(&self.0, DARK_THEME_CLASS, dark);
    }
}

/// Preference bound to the live page.
pub type PageThemePreference = ThemePreference<LocalStore, BodyClass>;

/// Build the page preference from the global window.
///
/// # Errors
///
/// Fails when there is no window, document, or body.
pub fn page_preference(window: &Window, key: &str) -> Result<PageThemePreference, Error> {
    let document = dom::document(window)?;
    let body = document.body().ok_or(Error::NoBody)?;
    Ok(ThemePreference::new(LocalStore::new(window), BodyClass::new(body), key))
}
