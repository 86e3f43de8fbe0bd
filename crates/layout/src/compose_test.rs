#![cfg(test)]

use crate::{
    ApproximateMetrics, Compositor, Header, LayoutConfig, LayoutError, NodeKind, Rect,
    SurfaceDescriptor, TruncationPolicy, compose_profile, select_default,
};
use folio_types::{Experience, Identity, Profile, Project, Skill, SocialLink};

fn base_profile() -> Profile {
    let mut profile = Profile {
        identity: Identity::new("Ada Lovelace", "ada@example.com"),
        ..Default::default()
    };
    profile.summary.headline = Some("Analytical engine programmer".into());
    profile.summary.location = Some("London".into());
    profile.summary.social_links = vec![SocialLink {
        label: "GitHub".into(),
        url: "https://github.com/ada".into(),
    }];
    profile
}

fn experience(title: &str) -> Experience {
    Experience {
        title: title.into(),
        company: "Engines Ltd".into(),
        location: Some("London".into()),
        skills: vec!["Mathematics".into(), "Punch cards".into()],
        ..Default::default()
    }
}

fn compose(profile: &Profile) -> Result<SurfaceDescriptor, LayoutError> {
    compose_profile(
        profile,
        &TruncationPolicy::default(),
        LayoutConfig::default(),
        &ApproximateMetrics,
    )
}

fn bar_fills(surface: &SurfaceDescriptor) -> Vec<Rect> {
    surface
        .nodes
        .iter()
        .filter(|n| matches!(&n.kind, NodeKind::Fill(f) if f.corner_radius > 0.0))
        .map(|n| n.rect)
        .collect()
}

#[test]
fn missing_name_is_rejected() {
    let mut profile = base_profile();
    profile.identity.name = None;
    assert_eq!(compose(&profile), Err(LayoutError::MissingRequiredField("name")));
}

#[test]
fn blank_email_is_rejected() {
    let mut profile = base_profile();
    profile.identity.email = Some("  ".into());
    assert_eq!(compose(&profile), Err(LayoutError::MissingRequiredField("email")));
}

#[test]
fn control_character_names_are_missing() {
    let mut profile = base_profile();
    profile.identity.name = Some("\u{0}\u{7}".into());
    assert_eq!(compose(&profile), Err(LayoutError::MissingRequiredField("name")));

    let mut profile = base_profile();
    profile.identity.email = Some("\u{1b}".into());
    assert_eq!(compose(&profile), Err(LayoutError::MissingRequiredField("email")));
}

#[test]
fn headline_without_bio_is_drawn_once() {
    let mut profile = base_profile();
    profile.summary.headline = Some("UniqueHeadline".into());
    let surface = compose(&profile).unwrap();

    let painted = surface
        .text_runs()
        .filter(|(_, run)| run.text.contains("UniqueHeadline"))
        .count();
    assert_eq!(painted, 1);
    assert!(!surface.contains_text("About"));
}

#[test]
fn bio_goes_under_about() {
    let mut profile = base_profile();
    profile.summary.bio = Some("Wrote the first published algorithm.".into());
    let surface = compose(&profile).unwrap();
    assert!(surface.contains_text("About"));
    assert!(surface.contains_text("Analytical engine programmer"));
}

#[test]
fn invalid_config_is_rejected_before_layout() {
    let profile = base_profile();
    let config = LayoutConfig {
        secondary_column_weight: -1.0,
        ..Default::default()
    };
    let result = compose_profile(&profile, &TruncationPolicy::default(), config, &ApproximateMetrics);
    assert!(matches!(result, Err(LayoutError::InvalidConfig(_))));
}

#[test]
fn surface_has_fixed_width_and_contains_all_nodes() {
    let mut profile = base_profile();
    profile.experiences = (0..5).map(|i| experience(&format!("Role {}", i))).collect();
    profile.skills = vec![Skill { name: "Rust".into(), proficiency: 80.0 }];

    let surface = compose(&profile).unwrap();
    assert_eq!(surface.width, 800.0);
    let bounds = Rect::new(0.0, 0.0, surface.width, surface.natural_height);
    for node in &surface.nodes {
        assert!(bounds.contains_rect(&node.rect), "node out of bounds: {:?}", node);
    }
    assert!(surface.contains_text("Ada Lovelace"));
    assert!(surface.contains_text("ada@example.com"));
    assert!(surface.contains_text("GitHub: https://github.com/ada"));
}

#[test]
fn only_first_three_experiences_are_rendered() {
    let mut profile = base_profile();
    profile.experiences = (0..5).map(|i| experience(&format!("Role {}", i))).collect();

    let surface = compose(&profile).unwrap();
    assert!(surface.contains_text("Role 2"));
    assert!(!surface.contains_text("Role 3"));
    assert!(!surface.contains_text("Role 4"));
}

#[test]
fn empty_sections_have_no_header() {
    let mut profile = base_profile();
    profile.projects = vec![Project {
        title: "Difference engine".into(),
        key_features: vec!["Tables".into()],
        technologies: vec!["Brass".into()],
        ..Default::default()
    }];

    let surface = compose(&profile).unwrap();
    assert!(surface.contains_text("Projects"));
    assert!(surface.contains_text("Technologies: Brass"));
    assert!(!surface.contains_text("Experience"));
    assert!(!surface.contains_text("Certifications"));
}

#[test]
fn height_grows_with_content() {
    let short = base_profile();
    let mut long = base_profile();
    long.experiences = (0..3).map(|i| experience(&format!("Role {}", i))).collect();
    long.summary.bio = Some("A long biography. ".repeat(40));

    let short_surface = compose(&short).unwrap();
    let long_surface = compose(&long).unwrap();
    assert!(long_surface.natural_height > short_surface.natural_height);
    assert_eq!(long_surface.width, short_surface.width);
}

#[test]
fn columns_sit_side_by_side() {
    let mut profile = base_profile();
    profile.experiences = vec![experience("Analyst")];
    profile.skills = vec![Skill { name: "Algebra".into(), proficiency: 50.0 }];

    let surface = compose(&profile).unwrap();
    let x_of = |needle: &str| {
        surface
            .text_runs()
            .find(|(_, run)| run.text == needle)
            .map(|(rect, _)| rect.x)
            .unwrap()
    };
    let y_of = |needle: &str| {
        surface
            .text_runs()
            .find(|(_, run)| run.text == needle)
            .map(|(rect, _)| rect.y)
            .unwrap()
    };
    // Both section titles start on the same row, in different columns.
    assert!(x_of("Skills") > x_of("Experience"));
    assert_eq!(y_of("Skills"), y_of("Experience"));
    // 3:2 split of the content width
    assert!(x_of("Skills") > surface.width * 0.55);
}

#[test]
fn proficiency_bar_is_clamped() {
    let mut profile = base_profile();
    profile.skills = vec![Skill { name: "Overachiever".into(), proficiency: 150.0 }];
    let surface = compose(&profile).unwrap();
    let bars = bar_fills(&surface);
    assert_eq!(bars.len(), 2, "track and fill expected");
    assert!((bars[0].width - bars[1].width).abs() < 1e-3);

    profile.skills = vec![Skill { name: "Negative".into(), proficiency: -10.0 }];
    let surface = compose(&profile).unwrap();
    assert_eq!(bar_fills(&surface).len(), 1, "only the empty track expected");
    assert!(surface.contains_text("0%"));
}

#[test]
fn half_proficiency_fills_half_the_track() {
    let mut profile = base_profile();
    profile.skills = vec![Skill { name: "Half".into(), proficiency: 50.0 }];
    let bars = bar_fills(&compose(&profile).unwrap());
    assert!((bars[1].width - bars[0].width / 2.0).abs() < 1e-3);
}

#[test]
fn free_text_is_normalized() {
    let mut profile = base_profile();
    profile.summary.bio = Some("Line\u{0} one\t\twith  gaps".into());
    let surface = compose(&profile).unwrap();
    assert!(surface.contains_text("Line one with gaps"));
}

#[test]
fn font_scale_enlarges_the_document() {
    let mut profile = base_profile();
    profile.experiences = vec![experience("Analyst")];
    let sections = select_default(&profile);

    let normal = Compositor::new(LayoutConfig::default(), &ApproximateMetrics)
        .compose(Header::from_profile(&profile), &sections)
        .unwrap();
    let scaled = Compositor::new(
        LayoutConfig {
            font_scale: 1.5,
            ..Default::default()
        },
        &ApproximateMetrics,
    )
    .compose(Header::from_profile(&profile), &sections)
    .unwrap();

    assert!(scaled.natural_height > normal.natural_height);
}

#[test]
fn composition_is_deterministic() {
    let mut profile = base_profile();
    profile.experiences = vec![experience("Analyst")];
    assert_eq!(compose(&profile).unwrap(), compose(&profile).unwrap());
}
