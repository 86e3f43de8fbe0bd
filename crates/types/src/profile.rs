//! The exportable profile aggregate.
//!
//! A `Profile` is the fully resolved snapshot of one user's data for a single
//! export run. It is produced by the data-loading side of the application and
//! is only ever read by the export engine. Collections keep the order the
//! loader supplied; nothing here sorts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub identity: Identity,
    pub summary: ProfileSummary,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub research: Vec<Research>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// The display name, treating blank strings as absent.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// The contact email, treating blank strings as absent.
    pub fn contact_email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSummary {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub social_links: Vec<SocialLink>,
}

impl ProfileSummary {
    /// True when there is a biography to show. The headline belongs to the
    /// document header, not the About section.
    pub fn has_bio(&self) -> bool {
        non_blank(self.bio.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub currently_working: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub key_features: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Research {
    pub title: String,
    pub publication_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub field: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub field_of_study: Option<String>,
    pub school: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub currently_studying: bool,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub issue_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Nominally 0-100. Values outside that range are tolerated here and
    /// clamped when the skill is selected for rendering.
    pub proficiency: f32,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_profile() {
        let json = r#"{
            "identity": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "summary": { "headline": "Analyst", "socialLinks": [{ "label": "Web", "url": "https://ada.dev" }] },
            "experiences": [{
                "title": "Engineer", "company": "Engines Ltd",
                "startDate": "1842-01-01", "currentlyWorking": true,
                "skills": ["maths"]
            }],
            "education": [{ "degree": "BSc", "school": "Home", "fieldOfStudy": "Maths" }],
            "skills": [{ "name": "Rust", "proficiency": 90 }]
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.identity.display_name(), Some("Ada Lovelace"));
        assert_eq!(profile.summary.social_links[0].url, "https://ada.dev");
        assert!(profile.experiences[0].currently_working);
        assert_eq!(
            profile.experiences[0].start_date,
            NaiveDate::from_ymd_opt(1842, 1, 1)
        );
        assert_eq!(profile.education[0].field_of_study.as_deref(), Some("Maths"));
        assert!(profile.projects.is_empty());
        assert_eq!(profile.skills[0].proficiency, 90.0);
    }

    #[test]
    fn blank_identity_fields_are_absent() {
        let identity = Identity {
            name: Some("   ".into()),
            email: None,
        };
        assert_eq!(identity.display_name(), None);
        assert_eq!(identity.contact_email(), None);
    }

    #[test]
    fn summary_bio_detection() {
        let mut summary = ProfileSummary::default();
        assert!(!summary.has_bio());
        summary.location = Some("London".into());
        summary.headline = Some("Analyst".into());
        assert!(!summary.has_bio());
        summary.bio = Some("  ".into());
        assert!(!summary.has_bio());
        summary.bio = Some("Hello".into());
        assert!(summary.has_bio());
    }
}
