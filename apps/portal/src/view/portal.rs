use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::jobs::listing::{job_database, JobListing};
use crate::jobs::search::{search, SearchQuery};
use crate::preferences::theme::{apply_theme, set_theme, ThemePreference};
use crate::preferences::PreferenceStore;
use crate::resume::analysis::{legend_entries, SKILL_GAPS, SUMMARY, TOP_MATCHES};
use crate::resume::chart::{ChartSlot, SkillChart};
use crate::resume::record::ResumeRecord;
use crate::resume::upload::{
    Completion, FileMeta, FileValidationError, UploadMachine, UploadRules, UploadState,
    UploadTicket,
};
use crate::view::controller::{render_job_results, SectionController};
use crate::view::markup;
use crate::view::page::{ids, Page, RESUME_DEPENDENT};
use crate::view::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn classes(self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-500 text-white",
            NotificationKind::Error => "bg-red-500 text-white",
            NotificationKind::Warning => "bg-yellow-500 text-black",
            NotificationKind::Info => "bg-blue-500 text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub classes: &'static str,
}

/// Everything the page needs to render itself.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub active_section: Option<Section>,
    pub theme: ThemePreference,
    pub upload: UploadState,
    pub chart: Option<SkillChart>,
    pub elements: Page,
}

/// The applicant portal's view state: one page, one active section, at most
/// one resume and one chart.
pub struct PortalView {
    page: Page,
    template: Page,
    controller: SectionController,
    upload: UploadMachine,
    chart: ChartSlot,
    jobs: Vec<JobListing>,
    theme: ThemePreference,
    notifications: Vec<Notification>,
}

impl Default for PortalView {
    fn default() -> Self {
        Self::new(Page::applicant_portal())
    }
}

impl PortalView {
    /// Builds the view over `page` and shows the dashboard.
    pub fn new(page: Page) -> Self {
        let mut view = Self {
            template: page.clone(),
            page,
            controller: SectionController::default(),
            upload: UploadMachine::default(),
            chart: ChartSlot::default(),
            jobs: job_database(),
            theme: ThemePreference::Light,
            notifications: Vec::new(),
        };
        view.controller
            .activate_section(Section::Dashboard, &mut view.page, &view.jobs);
        view
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn active_section(&self) -> Option<Section> {
        self.controller.active()
    }

    pub fn upload_state(&self) -> &UploadState {
        self.upload.state()
    }

    pub fn chart(&self) -> Option<&SkillChart> {
        self.chart.current()
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            active_section: self.controller.active(),
            theme: self.theme,
            upload: self.upload.state().clone(),
            chart: self.chart.current().cloned(),
            elements: self.page.clone(),
        }
    }

    pub fn activate_section(&mut self, id: &str) -> Option<Section> {
        self.controller.activate(id, &mut self.page, &self.jobs)
    }

    pub fn apply_theme(&mut self, mode: ThemePreference) {
        apply_theme(&mut self.page, mode);
        self.theme = mode;
    }

    /// Applies `mode` and persists it.
    pub async fn set_theme(
        &mut self,
        store: &dyn PreferenceStore,
        mode: ThemePreference,
    ) -> Result<(), AppError> {
        set_theme(store, &mut self.page, mode).await?;
        self.theme = mode;
        Ok(())
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            classes: kind.classes(),
        });
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ── Job search ─────────────────────────────────────────────────────────

    /// Filters the static table, writes the query into the search inputs and
    /// renders the results. Returns the matching jobs.
    pub fn search_jobs(&mut self, query: &SearchQuery) -> Vec<JobListing> {
        self.page.edit(ids::SEARCH_TITLE, |el| el.value = Some(query.title.clone()));
        self.page.edit(ids::SEARCH_SKILLS, |el| el.value = Some(query.skills.clone()));
        self.page
            .edit(ids::SEARCH_KEYWORDS, |el| el.value = Some(query.keywords.clone()));

        let results = search(&self.jobs, query);
        debug!(count = results.len(), "job search");
        render_job_results(&mut self.page, &results);
        results.into_iter().cloned().collect()
    }

    pub fn clear_job_search(&mut self) -> Vec<JobListing> {
        self.search_jobs(&SearchQuery::default())
    }

    pub fn open_job_details(&mut self, title: &str, company: &str, match_label: &str) -> bool {
        if !self.page.contains(ids::JOB_MODAL) || !self.page.contains(ids::JOB_MODAL_CONTENT) {
            warn!("job modal not present on page; skipping");
            return false;
        }
        self.page
            .replace_children(ids::JOB_MODAL_CONTENT, [markup::job_modal(title, company, match_label)]);
        self.page.set_hidden(ids::JOB_MODAL, false)
    }

    pub fn close_job_modal(&mut self) {
        self.page.set_hidden(ids::JOB_MODAL, true);
    }

    // ── Resume upload ──────────────────────────────────────────────────────

    /// Validates `file` and enters `Uploading`, showing the uploaded-file panel.
    pub fn begin_upload(
        &mut self,
        file: &FileMeta,
        rules: &UploadRules,
    ) -> Result<UploadTicket, FileValidationError> {
        let superseding = self.upload.is_uploading();
        let ticket = self.upload.begin(file, rules).map_err(|e| {
            warn!(file = %file.name, "resume rejected: {e}");
            e
        })?;
        if superseding {
            info!(file = %file.name, "new upload supersedes the one in flight");
        }

        self.page.set_hidden(ids::UPLOADED_RESUME, false);
        self.page.set_text(ids::RESUME_FILE_NAME, &file.name);
        self.page.set_hidden(ids::RESUME_UPLOAD, true);
        Ok(ticket)
    }

    /// Applies the processed record if `ticket` is still current.
    pub fn finish_upload(&mut self, ticket: UploadTicket, record: ResumeRecord) -> Completion {
        let completion = self.upload.complete(ticket, record);
        match completion {
            Completion::Applied => {
                info!("resume processed");
                self.populate_analysis();
                self.populate_profile();
                self.notify("Resume analyzed successfully", NotificationKind::Success);
            }
            Completion::Stale => debug!(?ticket, "discarding stale upload result"),
        }
        completion
    }

    /// Abandons the in-flight upload after a provider failure.
    pub fn fail_upload(&mut self, ticket: UploadTicket, reason: &str) -> Completion {
        let completion = self.upload.fail(ticket);
        if completion == Completion::Applied {
            warn!("resume processing failed: {reason}");
            self.reset_resume_views();
            self.notify(format!("Resume processing failed: {reason}"), NotificationKind::Error);
        }
        completion
    }

    /// Drops the resume, restores every dependent view to its empty state
    /// and releases the chart.
    pub fn remove_resume(&mut self) -> Option<ResumeRecord> {
        let removed = self.upload.remove();
        self.reset_resume_views();
        if removed.is_some() {
            self.notify("Resume removed", NotificationKind::Info);
        }
        removed
    }

    fn reset_resume_views(&mut self) {
        self.page.restore_from(&self.template, RESUME_DEPENDENT);
        self.chart.release();
    }

    fn populate_analysis(&mut self) {
        self.page.set_hidden(ids::ANALYSIS_SECTION, false);
        self.page.set_text(ids::SKILLS_MATCHED, SUMMARY.skills_matched);
        self.page.set_text(ids::JOB_MATCHES, SUMMARY.job_matches);
        self.page.set_text(ids::OVERALL_MATCH, SUMMARY.overall_match);

        if self.page.contains(ids::SKILL_CHART) {
            self.chart.create();
        } else {
            warn!(element = ids::SKILL_CHART, "chart canvas not found; skipping");
        }

        self.page.replace_children(
            ids::SKILLS_LEGEND,
            legend_entries()
                .into_iter()
                .map(|(skill, level)| markup::skill_legend_item(skill, level)),
        );
        self.page
            .replace_children(ids::TOP_JOB_MATCHES, TOP_MATCHES.iter().map(markup::top_match_card));
        self.page
            .replace_children(ids::SKILL_GAPS, SKILL_GAPS.iter().map(markup::skill_gap_card));
    }

    fn populate_profile(&mut self) {
        let Some(record) = self.upload.record() else {
            return;
        };

        let skills: Vec<String> = record.skills.iter().map(|s| markup::skill_tag(s)).collect();
        let experience: Vec<String> = record.experience.iter().map(markup::experience_item).collect();
        let education: Vec<String> = record.education.iter().map(markup::education_item).collect();
        let fields = [
            (ids::PROFILE_NAME, record.name.clone()),
            (ids::PROFILE_EMAIL, record.email.clone()),
            (ids::PROFILE_PHONE, record.phone.clone()),
            (ids::PROFILE_LOCATION, record.location.clone()),
        ];

        self.page.set_hidden(ids::EMPTY_PROFILE, true);
        self.page.set_hidden(ids::POPULATED_PROFILE, false);
        for (id, value) in &fields {
            self.page.set_text(id, value);
        }
        self.page.replace_children(ids::SKILLS_LIST, skills);
        self.page.replace_children(ids::EXPERIENCE_LIST, experience);
        self.page.replace_children(ids::EDUCATION_LIST, education);
    }
}
