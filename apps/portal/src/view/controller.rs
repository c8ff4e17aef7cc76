//! Section navigation.
//!
//! Activation hides every section container, shows the requested one, moves
//! the single nav highlight, and runs the section's populate hook if it has
//! one. Hooks clear and rebuild their container, so repeated activation never
//! accumulates state.

use tracing::{debug, warn};

use crate::jobs::listing::{JobListing, EXPLORER_LIMIT};
use crate::jobs::search::count_label;
use crate::view::markup;
use crate::view::page::{ids, Page, CONTENT_SECTION_CLASS, NAV_ITEM_CLASS};
use crate::view::section::Section;

const NAV_ACTIVE: &[&str] = &["bg-gray-100", "text-gray-900"];
const NAV_INACTIVE: &[&str] = &["text-gray-600", "hover:bg-gray-50", "hover:text-gray-900"];

pub type PopulateFn = fn(&mut Page, &[JobListing]);

/// How one section maps onto the page.
#[derive(Clone, Copy)]
pub struct ViewDescriptor {
    pub section: Section,
    pub container: &'static str,
    pub nav: &'static str,
    pub populate: Option<PopulateFn>,
}

impl ViewDescriptor {
    fn new(section: Section, populate: Option<PopulateFn>) -> Self {
        Self {
            section,
            container: section.container_id(),
            nav: section.nav_id(),
            populate,
        }
    }
}

pub struct SectionController {
    descriptors: Vec<ViewDescriptor>,
    active: Option<Section>,
}

impl Default for SectionController {
    fn default() -> Self {
        Self {
            descriptors: vec![
                ViewDescriptor::new(Section::Dashboard, None),
                ViewDescriptor::new(Section::SearchJobs, Some(load_recent_jobs)),
                ViewDescriptor::new(Section::JobExplorer, Some(load_job_explorer)),
                ViewDescriptor::new(Section::Profile, None),
            ],
            active: None,
        }
    }
}

impl SectionController {
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn descriptor(&self, section: Section) -> Option<&ViewDescriptor> {
        self.descriptors.iter().find(|d| d.section == section)
    }

    /// Activates the section named `id`. Unknown ids leave the page untouched
    /// and return `None`.
    pub fn activate(&mut self, id: &str, page: &mut Page, jobs: &[JobListing]) -> Option<Section> {
        match id.parse::<Section>() {
            Ok(section) => {
                self.activate_section(section, page, jobs);
                Some(section)
            }
            Err(e) => {
                warn!("ignoring section activation: {e}");
                None
            }
        }
    }

    pub fn activate_section(&mut self, section: Section, page: &mut Page, jobs: &[JobListing]) {
        let Some(descriptor) = self.descriptor(section).copied() else {
            warn!(%section, "no view descriptor registered");
            return;
        };

        page.edit_by_class(CONTENT_SECTION_CLASS, |el| el.hidden = true);
        if page.set_hidden(descriptor.container, false) {
            debug!(container = descriptor.container, "showing section");
        }

        page.edit_by_class(NAV_ITEM_CLASS, |el| {
            el.remove_classes(NAV_ACTIVE);
            el.add_classes(NAV_INACTIVE);
        });
        page.edit(descriptor.nav, |el| {
            el.add_classes(NAV_ACTIVE);
            el.remove_classes(NAV_INACTIVE);
        });

        self.active = Some(section);

        if let Some(populate) = descriptor.populate {
            populate(page, jobs);
        }
    }
}

/// Whether a nav element carries the active highlight.
pub fn is_highlighted(page: &Page, nav_id: &str) -> bool {
    page.get(nav_id)
        .map(|el| NAV_ACTIVE.iter().all(|c| el.has_class(c)))
        .unwrap_or(false)
}

/// Renders `jobs` into the search results container and updates the count.
pub fn render_job_results(page: &mut Page, jobs: &[&JobListing]) {
    if !page.contains(ids::JOB_SEARCH_RESULTS) {
        warn!(element = ids::JOB_SEARCH_RESULTS, "page element not found; skipping");
        return;
    }
    page.set_text(ids::JOB_COUNT, &count_label(jobs.len()));
    page.replace_children(
        ids::JOB_SEARCH_RESULTS,
        jobs.iter().map(|job| markup::job_search_card(job)),
    );
}

fn load_recent_jobs(page: &mut Page, jobs: &[JobListing]) {
    let all: Vec<&JobListing> = jobs.iter().collect();
    render_job_results(page, &all);
}

fn load_job_explorer(page: &mut Page, jobs: &[JobListing]) {
    page.replace_children(
        ids::JOB_EXPLORER_LIST,
        jobs.iter().take(EXPLORER_LIMIT).map(markup::job_explorer_card),
    );
}
