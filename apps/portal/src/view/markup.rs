//! HTML fragments rendered into page containers.
//!
//! Interpolated values always go through [`escape`].

use crate::jobs::listing::JobListing;
use crate::resume::analysis::{SkillGap, TopMatch};
use crate::resume::record::{EducationEntry, ExperienceEntry};

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Card in the job search results list. Shows the first three skills.
pub fn job_search_card(job: &JobListing) -> String {
    let skills: String = job
        .skills
        .iter()
        .take(3)
        .map(|skill| {
            format!(
                r#"<span class="bg-gray-100 text-gray-600 text-xs px-2 py-1 rounded">{}</span>"#,
                escape(skill)
            )
        })
        .collect();

    format!(
        r#"<div class="border border-gray-200 rounded-lg p-4 hover:shadow-md transition-shadow cursor-pointer"><div class="flex justify-between items-start mb-2"><h4 class="font-medium text-gray-900">{title}</h4><span class="{badge} text-xs px-2 py-1 rounded-full">{score}%</span></div><p class="text-sm text-gray-600 mb-2">{company} • {location}</p><p class="text-sm text-gray-700 mb-3">{description}</p><div class="flex justify-between items-center"><div class="flex flex-wrap gap-1">{skills}</div><div class="flex items-center space-x-2"><span class="text-sm font-medium text-gray-900">${salary}</span><button data-job-title="{title}" data-job-company="{company}" data-job-match="{score}" class="job-details text-primary text-sm hover:underline">View Details</button></div></div></div>"#,
        title = escape(&job.title),
        badge = job.badge().classes(),
        score = job.match_score,
        company = escape(&job.company),
        location = escape(&job.location),
        description = escape(&job.description),
        skills = skills,
        salary = escape(&job.salary),
    )
}

/// Compact row in the job explorer list.
pub fn job_explorer_card(job: &JobListing) -> String {
    format!(
        r#"<div class="border border-gray-200 rounded-lg p-3 hover:shadow-md transition-shadow cursor-pointer"><div class="flex justify-between items-center"><div><h4 class="font-medium text-gray-900">{title}</h4><p class="text-sm text-gray-600">{company} • {location}</p></div><span class="{badge} text-xs px-2 py-1 rounded-full">{score}%</span></div></div>"#,
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        badge = job.badge().classes(),
        score = job.match_score,
    )
}

pub fn skill_legend_item(skill: &str, level: u8) -> String {
    format!(
        r#"<div class="flex items-center justify-between"><span class="text-sm text-gray-700">{skill}</span><div class="flex items-center space-x-2"><div class="w-12 h-2 bg-gray-200 rounded-full"><div class="h-2 bg-blue-500 rounded-full" style="width: {width}%"></div></div><span class="text-xs text-gray-500">{level}/10</span></div></div>"#,
        skill = escape(skill),
        width = u32::from(level) * 10,
        level = level,
    )
}

pub fn top_match_card(job: &TopMatch) -> String {
    format!(
        r#"<div class="border border-gray-200 rounded-lg p-4 hover:border-blue-300 transition-colors"><div class="flex items-start justify-between"><div class="flex-1"><h4 class="font-medium text-gray-900 hover:text-blue-600 cursor-pointer">{title}</h4><p class="text-sm text-gray-600">{company}</p><div class="mt-2 flex items-center space-x-4 text-xs text-gray-500"><span><i class="fas fa-map-marker-alt mr-1"></i>{location}</span><span><i class="fas fa-dollar-sign mr-1"></i>{salary}</span><span><i class="fas fa-briefcase mr-1"></i>{job_type}</span></div></div><div class="ml-4 text-right"><div class="flex items-center space-x-2"><span class="text-sm font-medium text-green-600">{pct}% match</span><div class="w-12 h-2 bg-gray-200 rounded-full"><div class="h-2 bg-green-500 rounded-full" style="width: {pct}%"></div></div></div></div></div></div>"#,
        title = escape(job.title),
        company = escape(job.company),
        location = escape(job.location),
        salary = escape(job.salary),
        job_type = escape(job.job_type),
        pct = job.match_pct,
    )
}

pub fn skill_gap_card(gap: &SkillGap) -> String {
    let colour = gap.urgency.colour();
    let resources: String = gap
        .resources
        .iter()
        .map(|resource| {
            format!(
                r#"<div class="text-xs text-blue-600 hover:text-blue-800 cursor-pointer">• {}</div>"#,
                escape(resource)
            )
        })
        .collect();

    format!(
        r#"<div class="border border-gray-200 rounded-lg p-4 bg-{colour}-50"><div class="flex items-start justify-between mb-2"><h4 class="font-medium text-gray-900">{skill}</h4><span class="text-xs px-2 py-1 bg-{colour}-100 text-{colour}-800 rounded-full">{importance} Priority</span></div><p class="text-sm text-gray-600 mb-3">{reason}</p><div class="space-y-1"><p class="text-xs font-medium text-gray-700">Recommended Resources:</p>{resources}</div></div>"#,
        colour = colour,
        skill = escape(gap.skill),
        importance = gap.urgency.label(),
        reason = escape(gap.reason),
        resources = resources,
    )
}

pub fn skill_tag(skill: &str) -> String {
    format!(
        r#"<span class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm">{}</span>"#,
        escape(skill)
    )
}

pub fn experience_item(exp: &ExperienceEntry) -> String {
    format!(
        r#"<div class="border-l-4 border-blue-500 pl-4"><h4 class="font-medium text-gray-900">{}</h4><p class="text-sm text-gray-600">{} • {}</p><p class="text-sm text-gray-700 mt-1">{}</p></div>"#,
        escape(&exp.title),
        escape(&exp.company),
        escape(&exp.duration),
        escape(&exp.description),
    )
}

pub fn education_item(edu: &EducationEntry) -> String {
    format!(
        r#"<div class="flex justify-between items-center p-3 border border-gray-200 rounded-lg"><div><h4 class="font-medium text-gray-900">{}</h4><p class="text-sm text-gray-600">{}</p></div><div class="text-right"><p class="text-sm font-medium text-gray-900">{}</p><p class="text-xs text-gray-500">GPA: {}</p></div></div>"#,
        escape(&edu.degree),
        escape(&edu.school),
        escape(&edu.year),
        escape(&edu.gpa),
    )
}

/// Body of the job details modal.
pub fn job_modal(title: &str, company: &str, match_label: &str) -> String {
    format!(
        r#"<div class="space-y-4"><div><h3 class="text-xl font-bold text-gray-900">{title}</h3><p class="text-gray-600">{company}</p><span class="inline-block mt-2 px-3 py-1 bg-green-100 text-green-800 rounded-full text-sm font-medium">{match_label} Match</span></div><div><h4 class="font-semibold text-gray-900 mb-2">Job Description</h4><p class="text-gray-700">We are looking for an experienced developer to join our team and work on cutting-edge projects. This role offers excellent growth opportunities and the chance to work with modern technologies.</p></div><div><h4 class="font-semibold text-gray-900 mb-2">Required Skills</h4><div class="flex flex-wrap gap-2"><span class="bg-blue-100 text-blue-800 px-2 py-1 rounded text-sm">JavaScript</span><span class="bg-blue-100 text-blue-800 px-2 py-1 rounded text-sm">React</span><span class="bg-blue-100 text-blue-800 px-2 py-1 rounded text-sm">Node.js</span><span class="bg-red-100 text-red-800 px-2 py-1 rounded text-sm">Docker (Missing)</span></div></div><div><h4 class="font-semibold text-gray-900 mb-2">Salary Range</h4><p class="text-gray-700">$80,000 - $120,000 per year</p></div><div class="flex justify-end space-x-3 pt-4"><button class="close-job-modal px-4 py-2 text-gray-600 border border-gray-300 rounded-lg hover:bg-gray-50">Close</button><button class="px-4 py-2 bg-primary text-white rounded-lg hover:bg-blue-700">Apply Now</button></div></div>"#,
        title = escape(title),
        company = escape(company),
        match_label = escape(match_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::listing::job_database;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_search_card_shows_three_skills_and_badge() {
        let job = &job_database()[0];
        let card = job_search_card(job);
        assert!(card.contains("bg-green-100 text-green-800"));
        assert!(!card.contains(">CSS<"));
        assert!(card.contains(">TypeScript<"));
        assert!(card.contains("$120k-150k"));
    }

    #[test]
    fn test_modal_escapes_input() {
        let html = job_modal("<script>", "Acme", "90%");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("90% Match"));
    }

    #[test]
    fn test_legend_item_width_scales_level() {
        assert!(skill_legend_item("Rust", 7).contains("width: 70%"));
    }
}
