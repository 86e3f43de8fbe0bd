//! Chooses which parts of a profile appear in the document, and how many
//! items of each collection survive.

use crate::config::TruncationPolicy;
use folio_types::{
    Certification, Education, Experience, Profile, ProfileSummary, Project, Research,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Experience,
    Projects,
    Research,
    Skills,
    Education,
    Certifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Primary,
    Secondary,
}

impl SectionKind {
    pub fn column(self) -> Column {
        match self {
            SectionKind::Summary
            | SectionKind::Experience
            | SectionKind::Projects
            | SectionKind::Research => Column::Primary,
            SectionKind::Skills | SectionKind::Education | SectionKind::Certifications => {
                Column::Secondary
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Summary => "About",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Research => "Research",
            SectionKind::Skills => "Skills",
            SectionKind::Education => "Education",
            SectionKind::Certifications => "Certifications",
        }
    }
}

/// A skill ready for rendering: proficiency is always within `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSkill<'a> {
    pub name: &'a str,
    pub proficiency: f32,
}

impl SelectedSkill<'_> {
    /// Proficiency as a fraction of the full bar.
    pub fn ratio(&self) -> f32 {
        self.proficiency / 100.0
    }
}

/// One bounded block of content, borrowing its items from the profile.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Summary(&'a ProfileSummary),
    Experience(&'a [Experience]),
    Projects(&'a [Project]),
    Research(&'a [Research]),
    Skills(Vec<SelectedSkill<'a>>),
    Education(&'a [Education]),
    Certifications(&'a [Certification]),
}

impl Section<'_> {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Summary(_) => SectionKind::Summary,
            Section::Experience(_) => SectionKind::Experience,
            Section::Projects(_) => SectionKind::Projects,
            Section::Research(_) => SectionKind::Research,
            Section::Skills(_) => SectionKind::Skills,
            Section::Education(_) => SectionKind::Education,
            Section::Certifications(_) => SectionKind::Certifications,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Section::Summary(_) => 1,
            Section::Experience(items) => items.len(),
            Section::Projects(items) => items.len(),
            Section::Research(items) => items.len(),
            Section::Skills(items) => items.len(),
            Section::Education(items) => items.len(),
            Section::Certifications(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clamps a proficiency into `[0, 100]`; non-finite input becomes `0`.
pub fn clamp_proficiency(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Applies `policy` to `profile` and returns the sections to render, in
/// document order: the primary column first, then the secondary column.
/// Sections that end up empty are left out entirely.
pub fn select<'a>(profile: &'a Profile, policy: &TruncationPolicy) -> Vec<Section<'a>> {
    let mut sections = Vec::with_capacity(7);

    if profile.summary.has_bio() {
        sections.push(Section::Summary(&profile.summary));
    }

    let skills: Vec<SelectedSkill<'a>> = TruncationPolicy::prefix(&profile.skills, policy.skills)
        .iter()
        .map(|s| SelectedSkill {
            name: s.name.as_str(),
            proficiency: clamp_proficiency(s.proficiency),
        })
        .collect();

    let candidates = [
        Section::Experience(TruncationPolicy::prefix(&profile.experiences, policy.experience)),
        Section::Projects(TruncationPolicy::prefix(&profile.projects, policy.projects)),
        Section::Research(TruncationPolicy::prefix(&profile.research, policy.research)),
        Section::Skills(skills),
        Section::Education(TruncationPolicy::prefix(&profile.education, policy.education)),
        Section::Certifications(TruncationPolicy::prefix(
            &profile.certifications,
            policy.certifications,
        )),
    ];
    sections.extend(candidates.into_iter().filter(|s| !s.is_empty()));

    log::debug!(
        "Selected sections: {:?}",
        sections
            .iter()
            .map(|s| (s.kind(), s.len()))
            .collect::<Vec<_>>()
    );
    sections
}

/// `select` with the default truncation policy.
pub fn select_default(profile: &Profile) -> Vec<Section<'_>> {
    select(profile, &TruncationPolicy::default())
}
