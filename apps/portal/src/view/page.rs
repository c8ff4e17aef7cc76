//! In-memory page model.
//!
//! The page the portal drives is described as a flat map of element ids to
//! element state. Every mutation goes through [`Page::edit`], which logs and
//! skips ids that are not present instead of failing.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::warn;

/// Element ids shared with the page markup.
pub mod ids {
    pub const BODY: &str = "body";
    pub const THEME_TOGGLE: &str = "theme-toggle";

    pub const RESUME_UPLOAD: &str = "resumeUpload";
    pub const UPLOADED_RESUME: &str = "uploadedResume";
    pub const RESUME_FILE_NAME: &str = "resumeFileName";
    pub const ANALYSIS_SECTION: &str = "resumeAnalysisSection";
    pub const SKILLS_MATCHED: &str = "skillsMatched";
    pub const JOB_MATCHES: &str = "jobMatches";
    pub const OVERALL_MATCH: &str = "overallMatch";
    pub const SKILL_CHART: &str = "skillAnalysisChart";
    pub const SKILLS_LEGEND: &str = "skillsLegend";
    pub const TOP_JOB_MATCHES: &str = "topJobMatches";
    pub const SKILL_GAPS: &str = "skillGaps";

    pub const EMPTY_PROFILE: &str = "emptyProfile";
    pub const POPULATED_PROFILE: &str = "populatedProfile";
    pub const PROFILE_NAME: &str = "profileName";
    pub const PROFILE_EMAIL: &str = "profileEmail";
    pub const PROFILE_PHONE: &str = "profilePhone";
    pub const PROFILE_LOCATION: &str = "profileLocation";
    pub const SKILLS_LIST: &str = "skillsList";
    pub const EXPERIENCE_LIST: &str = "experienceList";
    pub const EDUCATION_LIST: &str = "educationList";

    pub const SEARCH_TITLE: &str = "searchTitle";
    pub const SEARCH_SKILLS: &str = "searchSkills";
    pub const SEARCH_KEYWORDS: &str = "searchKeywords";
    pub const JOB_SEARCH_RESULTS: &str = "jobSearchResults";
    pub const JOB_COUNT: &str = "jobCount";
    pub const JOB_EXPLORER_LIST: &str = "jobExplorerList";
    pub const JOB_MODAL: &str = "jobModal";
    pub const JOB_MODAL_CONTENT: &str = "jobModalContent";
}

/// Marker class shared by every section container.
pub const CONTENT_SECTION_CLASS: &str = "content-section";
/// Marker class shared by every sidebar navigation item.
pub const NAV_ITEM_CLASS: &str = "nav-item";

/// Elements whose contents depend on a processed resume.
pub const RESUME_DEPENDENT: &[&str] = &[
    ids::RESUME_UPLOAD,
    ids::UPLOADED_RESUME,
    ids::RESUME_FILE_NAME,
    ids::ANALYSIS_SECTION,
    ids::SKILLS_MATCHED,
    ids::JOB_MATCHES,
    ids::OVERALL_MATCH,
    ids::SKILL_CHART,
    ids::SKILLS_LEGEND,
    ids::TOP_JOB_MATCHES,
    ids::SKILL_GAPS,
    ids::EMPTY_PROFILE,
    ids::POPULATED_PROFILE,
    ids::PROFILE_NAME,
    ids::PROFILE_EMAIL,
    ids::PROFILE_PHONE,
    ids::PROFILE_LOCATION,
    ids::SKILLS_LIST,
    ids::EXPERIENCE_LIST,
    ids::EDUCATION_LIST,
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub hidden: bool,
    pub classes: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Child markup, in render order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Element {
    pub fn with_classes(classes: &[&str]) -> Self {
        let mut el = Element::default();
        el.add_classes(classes);
        el
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_classes(&mut self, classes: &[&str]) {
        for class in classes {
            self.classes.insert((*class).to_string());
        }
    }

    pub fn remove_classes(&mut self, classes: &[&str]) {
        for class in classes {
            self.classes.remove(*class);
        }
    }

    /// Equivalent of assigning `innerHTML = ''`.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Page {
    elements: BTreeMap<String, Element>,
}

impl Page {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The applicant portal skeleton in its initial state: every section
    /// hidden, every nav item inactive, resume views showing their empty state.
    pub fn applicant_portal() -> Self {
        let mut page = Page::empty();

        page.insert(ids::BODY, Element::with_classes(&["bg-gray-50"]));
        page.insert(
            ids::THEME_TOGGLE,
            Element {
                checked: Some(false),
                ..Element::default()
            },
        );

        for section in crate::view::section::Section::ALL {
            page.insert(
                section.container_id(),
                Element::with_classes(&[CONTENT_SECTION_CLASS, "bg-white"]).hidden(),
            );
            page.insert(
                section.nav_id(),
                Element::with_classes(&[
                    NAV_ITEM_CLASS,
                    "text-gray-600",
                    "hover:bg-gray-50",
                    "hover:text-gray-900",
                ]),
            );
        }

        page.insert(ids::RESUME_UPLOAD, Element::default());
        page.insert(ids::UPLOADED_RESUME, Element::default().hidden());
        page.insert(ids::RESUME_FILE_NAME, Element::default().with_text(""));
        page.insert(ids::ANALYSIS_SECTION, Element::default().hidden());
        page.insert(ids::SKILLS_MATCHED, Element::default().with_text("-"));
        page.insert(ids::JOB_MATCHES, Element::default().with_text("-"));
        page.insert(ids::OVERALL_MATCH, Element::default().with_text("-"));
        page.insert(ids::SKILL_CHART, Element::default());
        page.insert(ids::SKILLS_LEGEND, Element::default());
        page.insert(ids::TOP_JOB_MATCHES, Element::default());
        page.insert(ids::SKILL_GAPS, Element::default());

        page.insert(ids::EMPTY_PROFILE, Element::default());
        page.insert(ids::POPULATED_PROFILE, Element::default().hidden());
        for id in [
            ids::PROFILE_NAME,
            ids::PROFILE_EMAIL,
            ids::PROFILE_PHONE,
            ids::PROFILE_LOCATION,
        ] {
            page.insert(id, Element::default().with_text(""));
        }
        for id in [ids::SKILLS_LIST, ids::EXPERIENCE_LIST, ids::EDUCATION_LIST] {
            page.insert(id, Element::default());
        }

        for id in [ids::SEARCH_TITLE, ids::SEARCH_SKILLS, ids::SEARCH_KEYWORDS] {
            page.insert(
                id,
                Element {
                    value: Some(String::new()),
                    ..Element::default()
                },
            );
        }
        page.insert(ids::JOB_SEARCH_RESULTS, Element::default());
        page.insert(ids::JOB_COUNT, Element::default().with_text(""));
        page.insert(ids::JOB_EXPLORER_LIST, Element::default());
        page.insert(ids::JOB_MODAL, Element::default().hidden());
        page.insert(ids::JOB_MODAL_CONTENT, Element::default());

        page
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Applies `f` to the element with `id`. Returns `false` (after logging)
    /// when the element is missing.
    pub fn edit<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        match self.elements.get_mut(id) {
            Some(el) => {
                f(el);
                true
            }
            None => {
                warn!(element = id, "page element not found; skipping");
                false
            }
        }
    }

    /// Applies `f` to every element carrying `class`.
    pub fn edit_by_class<F>(&mut self, class: &str, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        self.elements
            .values_mut()
            .filter(|el| el.has_class(class))
            .for_each(|el| f(el));
    }

    pub fn ids_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.elements
            .iter()
            .filter(move |(_, el)| el.has_class(class))
            .map(|(id, _)| id.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.edit(id, |el| el.text = Some(text.to_string()))
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        self.edit(id, |el| el.hidden = hidden)
    }

    /// Clears the children of `id` and appends `children` in order.
    pub fn replace_children<I>(&mut self, id: &str, children: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        self.edit(id, |el| {
            el.clear_children();
            el.children.extend(children);
        })
    }

    /// Restores each of `ids` to its state in `template`.
    pub fn restore_from(&mut self, template: &Page, ids: &[&str]) {
        for id in ids {
            match (self.elements.get_mut(*id), template.get(id)) {
                (Some(current), Some(initial)) => *current = initial.clone(),
                (None, _) => warn!(element = *id, "page element not found; skipping"),
                (Some(_), None) => warn!(element = *id, "no initial state for element"),
            }
        }
    }
}
