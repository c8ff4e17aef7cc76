use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub gpa: String,
}

/// Parsed-resume representation used to populate the profile and analysis views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ResumeRecord {
    /// The canned record every simulated upload resolves to.
    pub fn synthetic() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            skills: ["JavaScript", "React", "HTML/CSS", "Python", "Git", "SQL"]
                .into_iter()
                .map(String::from)
                .collect(),
            experience: vec![
                ExperienceEntry {
                    title: "Frontend Developer".to_string(),
                    company: "Tech Company Inc.".to_string(),
                    duration: "2020 - Present".to_string(),
                    description: "Developed responsive web applications using React and JavaScript."
                        .to_string(),
                },
                ExperienceEntry {
                    title: "Junior Developer".to_string(),
                    company: "StartupXYZ".to_string(),
                    duration: "2018 - 2020".to_string(),
                    description:
                        "Worked on various web development projects using HTML, CSS, and JavaScript."
                            .to_string(),
                },
            ],
            education: vec![EducationEntry {
                degree: "Bachelor of Computer Science".to_string(),
                school: "University of Technology".to_string(),
                year: "2018".to_string(),
                gpa: "3.8/4.0".to_string(),
            }],
        }
    }
}
