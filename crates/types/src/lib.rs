pub mod color;
pub mod geometry;
pub mod profile;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use profile::{
    Certification, Education, Experience, Identity, Profile, ProfileSummary, Project, Research,
    Skill, SocialLink,
};
