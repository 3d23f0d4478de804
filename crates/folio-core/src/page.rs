#![forbid(unsafe_code)]

//! Page identifiers.
//!
//! The portfolio has a fixed set of pages. Route strings coming from the
//! host (data attributes, anchors, user input) are parsed strictly; anything
//! outside the set is an [`FolioError::UnknownRoute`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Identifies which page is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PageId {
    /// Landing page with the intro and call to action.
    #[default]
    Home,
    /// Biography, skills and certifications.
    About,
    /// Work history timeline.
    Experience,
    /// Personal project cards.
    Projects,
}

impl PageId {
    /// All pages in navigation order.
    pub const ALL: [PageId; 4] = [
        PageId::Home,
        PageId::About,
        PageId::Experience,
        PageId::Projects,
    ];

    /// Route identifier, also used as the section id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
        }
    }

    /// Label shown in the navigation.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
        }
    }

    /// In-document anchor (`#id`) targeting this page's section.
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// 0-based position in [`PageId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Experience => 2,
            Self::Projects => 3,
        }
    }
}

impl core::fmt::Display for PageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PageId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| FolioError::UnknownRoute(s.to_string()))
    }
}

impl TryFrom<String> for PageId {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageId> for &'static str {
    fn from(page: PageId) -> Self {
        page.id()
    }
}
