#![forbid(unsafe_code)]

//! Navigation chrome: desktop sidebar or mobile bar with drawer.

use folio_core::view_state::DRAWER_KEY;
use folio_core::{LayoutMode, PageId};
use serde::Serialize;

use crate::ViewModel;
use crate::content::{PROFILE, Profile, SOCIAL_LINKS, SocialLink};
use crate::templates::{Templates, ViewResult};

/// Class carried by every page link; the highlighter keys on it.
pub const NAV_LINK_CLASS: &str = "nav-link";
/// Id of the drawer toggle, present only in the mobile layout.
pub const MENU_BUTTON_ID: &str = "menu-button";
/// Id of the element receiving the open marker.
pub const DRAWER_ID: &str = DRAWER_KEY;

const NAV_LIST_ID: &str = "nav-links";

#[derive(Debug, Serialize)]
struct LinkContext {
    id: &'static str,
    title: &'static str,
    href: String,
    current: bool,
}

#[derive(Debug, Serialize)]
struct NavContext {
    mobile: bool,
    menu_open: bool,
    drawer_id: &'static str,
    menu_button_id: &'static str,
    list_id: &'static str,
    links: Vec<LinkContext>,
    profile: &'static Profile,
    socials: &'static [SocialLink],
}

impl NavContext {
    fn new(vm: &ViewModel) -> Self {
        Self {
            mobile: vm.layout == LayoutMode::Mobile,
            menu_open: vm.menu_open,
            drawer_id: DRAWER_ID,
            menu_button_id: MENU_BUTTON_ID,
            list_id: NAV_LIST_ID,
            links: PageId::ALL
                .into_iter()
                .map(|page| LinkContext {
                    id: page.id(),
                    title: page.title(),
                    href: page.anchor(),
                    current: page == vm.current,
                })
                .collect(),
            profile: &PROFILE,
            socials: SOCIAL_LINKS,
        }
    }
}

/// `href` of every page link, in navigation order.
#[must_use]
pub fn nav_hrefs() -> Vec<String> {
    PageId::ALL.into_iter().map(PageId::anchor).collect()
}

/// Render the navigation for the current layout.
///
/// # Errors
///
/// Propagates template rendering failures.
pub fn render_nav(templates: &Templates, vm: &ViewModel) -> ViewResult<String> {
    templates.render("nav", &NavContext::new(vm))
}
