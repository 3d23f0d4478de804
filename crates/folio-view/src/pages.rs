#![forbid(unsafe_code)]

//! Page bodies.
//!
//! Each page is one `content-section` whose id is the page's route id, so
//! nav anchors and scroll highlighting line up with it. Project cards are
//! separate reveal targets.

use folio_core::PageId;
use serde::Serialize;

use crate::ViewModel;
use crate::content::{
    CERTIFICATIONS, EXPERIENCE, Experience, PROFILE, PROJECTS, Profile, SKILLS, SkillCategory,
};
use crate::templates::{Templates, ViewResult};

/// Class on each page section; reveal and highlight target.
pub const CONTENT_SECTION_CLASS: &str = "content-section";
/// Class on each project card; reveal target.
pub const PROJECT_CARD_CLASS: &str = "project-card";

#[derive(Debug, Serialize)]
struct CardContext {
    key: String,
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    delay_ms: u64,
}

#[derive(Debug, Serialize)]
struct PageContext {
    id: &'static str,
    mobile: bool,
    cta_route: &'static str,
    profile: &'static Profile,
    skills: &'static [SkillCategory],
    certifications: &'static [&'static str],
    experience: &'static [Experience],
    cards: Vec<CardContext>,
}

/// Element id of the project card at `index`.
#[must_use]
pub fn card_key(index: usize) -> String {
    format!("project-{index}")
}

fn cards(vm: &ViewModel) -> Vec<CardContext> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| CardContext {
            key: card_key(i),
            title: project.title,
            description: project.description,
            tags: project.tags,
            delay_ms: vm
                .card_delays
                .get(i)
                .map_or(0, |delay| u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)),
        })
        .collect()
}

/// Ids of the reveal targets inside `page`, section first.
#[must_use]
pub fn page_targets(page: PageId) -> Vec<String> {
    let mut keys = vec![page.id().to_string()];
    if page == PageId::Projects {
        keys.extend((0..PROJECTS.len()).map(card_key));
    }
    keys
}

/// Render the body of `page`.
///
/// # Errors
///
/// Propagates template rendering failures.
pub fn render_page(templates: &Templates, page: PageId, vm: &ViewModel) -> ViewResult<String> {
    let context = PageContext {
        id: page.id(),
        mobile: vm.layout.is_mobile(),
        cta_route: PageId::Projects.id(),
        profile: &PROFILE,
        skills: SKILLS,
        certifications: CERTIFICATIONS,
        experience: EXPERIENCE,
        cards: if page == PageId::Projects {
            cards(vm)
        } else {
            Vec::new()
        },
    };
    templates.render(page.id(), &context)
}
