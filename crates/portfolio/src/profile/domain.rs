use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Audience a visitor picks on the page; selects which skill list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceTrack {
    #[serde(alias = "phd")]
    Research,
    #[serde(alias = "eng")]
    Engineering,
}

impl AudienceTrack {
    pub const DEFAULT: Self = Self::Research;

    pub const fn ordered() -> [Self; 2] {
        [Self::Research, Self::Engineering]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Engineering => "engineering",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Research => "PhD",
            Self::Engineering => "Engineering",
        }
    }
}

impl Default for AudienceTrack {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AudienceTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudienceTrack {
    type Err = TrackParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "research" | "phd" => Ok(Self::Research),
            "engineering" | "eng" => Ok(Self::Engineering),
            _ => Err(TrackParseError {
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown audience track '{value}' (expected 'research' or 'engineering')")]
pub struct TrackParseError {
    pub value: String,
}

/// Skill labels per track. One field per variant keeps the lookup total.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillsByTrack {
    pub research: &'static [&'static str],
    pub engineering: &'static [&'static str],
}

impl SkillsByTrack {
    pub const fn get(&self, track: AudienceTrack) -> &'static [&'static str] {
        match track {
            AudienceTrack::Research => self.research,
            AudienceTrack::Engineering => self.engineering,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
    /// Leaves the site; rendered to open in a new browsing context.
    pub external: bool,
}

impl Link {
    pub const fn internal(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            external: false,
        }
    }

    pub const fn external(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            external: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<Link>,
    pub links: &'static [Link],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'static [Metric]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub live: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub date: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Role {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Identity {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub subline: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub email: Link,
    pub socials: &'static [Link],
    /// Channels offered next to "Email me" in the contact panel.
    pub reach_out: &'static [Link],
    pub cv: Link,
    pub pitch: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// The whole page's content. Built once as a `static`; never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub site: SiteMetadata,
    pub identity: Identity,
    pub hero: Hero,
    pub skills: SkillsByTrack,
    pub projects: &'static [Project],
    pub roles: &'static [Role],
    pub publications: &'static [Publication],
    pub education: &'static [Education],
    pub about: &'static str,
    pub contact: Contact,
}

impl Profile {
    pub fn current() -> &'static Profile {
        &super::content::CURRENT
    }

    pub const fn skills_for(&self, track: AudienceTrack) -> &'static [&'static str] {
        self.skills.get(track)
    }

    pub const fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub const fn roles(&self) -> &'static [Role] {
        self.roles
    }

    pub const fn publications(&self) -> &'static [Publication] {
        self.publications
    }

    pub const fn education(&self) -> &'static [Education] {
        self.education
    }

    /// Titles double as display keys.
    pub fn project(&self, title: &str) -> Option<&'static Project> {
        self.projects.iter().find(|project| project.title == title)
    }
}
