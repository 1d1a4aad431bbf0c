mod content;
pub mod domain;

pub use domain::{
    AudienceTrack, Contact, Education, Hero, Identity, Link, Metric, Profile, Project,
    Publication, Role, SiteMetadata, SkillsByTrack, TrackParseError,
};
