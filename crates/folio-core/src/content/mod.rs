//! Portfolio content
//!
//! Typed records for every portfolio section and the immutable store that
//! holds them. The store is built once at startup and shared behind an `Arc`.

mod loader;

pub use loader::ContentError;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// About section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub venue: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub description: String,
    /// ISO `YYYY-MM`
    pub start: String,
    /// `None` while the role is current
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: String,
    pub title: String,
    pub event: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// Consultancy offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// Raw content as it appears in a content file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentData {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub talks: Vec<Talk>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Whether a timeline entry is a job or a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineKind {
    Work,
    Education,
}

/// One row of the merged work/education timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry<'a> {
    pub kind: TimelineKind,
    pub id: &'a str,
    pub title: &'a str,
    pub organisation: &'a str,
    pub start: &'a str,
    pub end: Option<&'a str>,
}

/// Immutable, validated portfolio content
#[derive(Debug, Clone)]
pub struct ContentStore {
    data: ContentData,
}

/// Content compiled into the binary
const BUILTIN_CONTENT: &str = include_str!("builtin.json");

impl ContentStore {
    /// Validate and wrap raw content
    pub fn new(data: ContentData) -> Result<Self, ContentError> {
        loader::validate(&data)?;
        Ok(Self { data })
    }

    /// Content shipped with the binary
    pub fn builtin() -> Result<Self, ContentError> {
        let data = loader::parse_json(BUILTIN_CONTENT, Path::new("<builtin>"))?;
        Self::new(data)
    }

    /// Load content from a JSON or TOML file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let data = loader::read_file(path)?;
        let store = Self::new(data)?;
        tracing::info!(
            path = %path.display(),
            items = store.searchable_len(),
            "Loaded content file"
        );
        Ok(store)
    }

    /// Load from `path` when given, otherwise fall back to the builtin content
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.data.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn publications(&self) -> &[Publication] {
        &self.data.publications
    }

    pub fn experience(&self) -> &[Experience] {
        &self.data.experience
    }

    pub fn talks(&self) -> &[Talk] {
        &self.data.talks
    }

    pub fn blog(&self) -> &[BlogPost] {
        &self.data.blog
    }

    pub fn education(&self) -> &[Education] {
        &self.data.education
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.data.skills
    }

    pub fn services(&self) -> &[Service] {
        &self.data.services
    }

    /// Number of records the search engine scans
    pub fn searchable_len(&self) -> usize {
        self.data.projects.len()
            + self.data.publications.len()
            + self.data.experience.len()
            + self.data.talks.len()
            + self.data.blog.len()
    }

    /// Experience and education merged, newest start first
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        let work = self.data.experience.iter().map(|e| TimelineEntry {
            kind: TimelineKind::Work,
            id: &e.id,
            title: &e.position,
            organisation: &e.company,
            start: &e.start,
            end: e.end.as_deref(),
        });
        let study = self.data.education.iter().map(|e| TimelineEntry {
            kind: TimelineKind::Education,
            id: &e.id,
            title: &e.degree,
            organisation: &e.institution,
            start: &e.start,
            end: e.end.as_deref(),
        });

        let mut entries: Vec<_> = work.chain(study).collect();
        // ISO dates sort lexicographically; stable sort keeps declaration order on ties
        entries.sort_by(|a, b| b.start.cmp(a.start));
        entries
    }
}
