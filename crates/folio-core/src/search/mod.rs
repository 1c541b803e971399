//! Global content search
//!
//! Case-insensitive substring matching over the searchable collections of a
//! [`ContentStore`]. Results keep collection scan order (projects,
//! publications, experience, talks, blog) and array order within a
//! collection, and are capped at [`MAX_RESULTS`].

mod fields;

pub use fields::DESCRIPTION_WIDTH;

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::content::ContentStore;
use fields::SCAN_ORDER;

/// Upper bound on the combined result list
pub const MAX_RESULTS: usize = 10;

/// Kind of record a search result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Project,
    Publication,
    Experience,
    Talk,
    Blog,
}

impl ContentType {
    /// Short label rendered as the result badge
    pub fn badge(self) -> &'static str {
        match self {
            ContentType::Project => "project",
            ContentType::Publication => "paper",
            ContentType::Experience => "work",
            ContentType::Talk => "talk",
            ContentType::Blog => "blog",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Project => "project",
            ContentType::Publication => "publication",
            ContentType::Experience => "experience",
            ContentType::Talk => "talk",
            ContentType::Blog => "blog",
        };
        f.write_str(name)
    }
}

/// Uniform projection of any searchable record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchableItem {
    /// Unique within its source collection only
    pub id: String,
    pub title: String,
    /// Truncated to [`DESCRIPTION_WIDTH`] display columns
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub url: String,
}

/// Query engine over an immutable content store
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: Arc<ContentStore>,
}

impl SearchEngine {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Search every collection, returning at most [`MAX_RESULTS`] items
    pub fn search(&self, query: &str) -> Vec<SearchableItem> {
        self.search_with_limit(query, MAX_RESULTS)
    }

    /// Same as [`search`](Self::search) with a smaller cap; `limit` is clamped to [`MAX_RESULTS`]
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<SearchableItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let limit = limit.min(MAX_RESULTS);
        let needle = query.to_lowercase();
        let mut results = Vec::with_capacity(limit);

        for source in SCAN_ORDER.iter() {
            if results.len() >= limit {
                break;
            }
            let before = results.len();
            source.scan(&self.store, &needle, limit, &mut results);
            tracing::trace!(kind = %source.kind(), matched = results.len() - before, "Scanned collection");
        }

        tracing::debug!(query = %query, hits = results.len(), "Search evaluated");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, ContentData, Experience, Project, Publication, Talk};

    fn project(id: &str, title: &str, description: &str, tech: &[&str]) -> Project {
        Project {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            technologies: tech.iter().map(|t| t.to_string()).collect(),
            link: None,
        }
    }

    fn publication(id: &str, title: &str, abstract_text: &str) -> Publication {
        Publication {
            id: id.into(),
            title: title.into(),
            abstract_text: abstract_text.into(),
            keywords: Vec::new(),
            venue: "Venue".into(),
            year: 2024,
        }
    }

    fn engine(data: ContentData) -> SearchEngine {
        SearchEngine::new(Arc::new(ContentStore::new(data).unwrap()))
    }

    fn sample() -> SearchEngine {
        engine(ContentData {
            projects: vec![
                project("site", "Portfolio Site", "Personal site", &["React", "Tailwind"]),
                project("cli", "Folio CLI", "Terminal client", &["Rust"]),
            ],
            publications: vec![Publication {
                keywords: vec!["Stream Processing".into()],
                ..publication("paper", "Late Data", "Watermarks for sensors")
            }],
            experience: vec![Experience {
                id: "acme".into(),
                company: "Acme Corp".into(),
                position: "Staff Engineer".into(),
                description: "Owned the ingestion platform".into(),
                start: "2020-01".into(),
                end: None,
            }],
            talks: vec![Talk {
                id: "conf".into(),
                title: "Backpressure".into(),
                event: "RustConf".into(),
                description: "Queues and limits".into(),
                date: "2023-09-01".into(),
            }],
            blog: vec![BlogPost {
                slug: "debounce".into(),
                title: "Debouncing".into(),
                excerpt: "The last keystroke wins".into(),
                tags: vec!["UX".into()],
                published: "2024-03-02".into(),
            }],
            ..Default::default()
        })
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let engine = sample();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert!(engine.search("\t\n").is_empty());
    }

    #[test]
    fn test_technology_tag_match_is_case_insensitive() {
        let results = sample().search("react");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "site");
        assert_eq!(results[0].kind, ContentType::Project);
        assert_eq!(results[0].url, "/projects#site");
    }

    #[test]
    fn test_no_matches() {
        assert!(sample().search("zzzzz").is_empty());
    }

    #[test]
    fn test_fields_per_type() {
        let engine = sample();
        // publication keyword
        assert_eq!(engine.search("stream proc")[0].kind, ContentType::Publication);
        // experience company
        let work = engine.search("ACME");
        assert_eq!(work[0].kind, ContentType::Experience);
        assert_eq!(work[0].title, "Staff Engineer at Acme Corp");
        assert_eq!(work[0].url, "/experience#acme");
        // talk event
        assert_eq!(engine.search("rustconf")[0].url, "/talks#conf");
        // blog tag
        let blog = engine.search("ux");
        assert_eq!(blog[0].kind, ContentType::Blog);
        assert_eq!(blog[0].url, "/blog/debounce");
    }

    #[test]
    fn test_untested_fields_do_not_match() {
        // Venue and dates are displayed but not searched
        assert!(sample().search("venue").is_empty());
        assert!(sample().search("2023-09").is_empty());
    }

    #[test]
    fn test_scan_order_across_collections() {
        // "rust" hits the project tag, the talk event, in that order
        let kinds: Vec<_> = sample().search("rust").iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ContentType::Project, ContentType::Talk]);
    }

    #[test]
    fn test_cap_starves_later_collections() {
        let projects = (0..15)
            .map(|i| project(&format!("p{i}"), &format!("Data project {i}"), "", &[]))
            .collect();
        let publications = (0..3)
            .map(|i| publication(&format!("pub{i}"), "Data paper", "data"))
            .collect();
        let engine = engine(ContentData {
            projects,
            publications,
            ..Default::default()
        });

        let results = engine.search("data");
        assert_eq!(results.len(), MAX_RESULTS);
        assert!(results.iter().all(|r| r.kind == ContentType::Project));
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, (0..10).map(|i| format!("p{i}")).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_result_matches_query() {
        let engine = SearchEngine::new(Arc::new(ContentStore::builtin().unwrap()));
        for query in ["data", "RUST", "stream", "a", "e", "lisbon", "ci"] {
            let needle = query.to_lowercase();
            let results = engine.search(query);
            assert!(results.len() <= MAX_RESULTS, "too many results for {query}");
            for item in &results {
                let store = engine.store();
                let matched = match item.kind {
                    ContentType::Project => store.projects().iter().any(|p| {
                        p.id == item.id
                            && (p.title.to_lowercase().contains(&needle)
                                || p.description.to_lowercase().contains(&needle)
                                || p.technologies.iter().any(|t| t.to_lowercase().contains(&needle)))
                    }),
                    ContentType::Publication => store.publications().iter().any(|p| {
                        p.id == item.id
                            && (p.title.to_lowercase().contains(&needle)
                                || p.abstract_text.to_lowercase().contains(&needle)
                                || p.keywords.iter().any(|k| k.to_lowercase().contains(&needle)))
                    }),
                    ContentType::Experience => store.experience().iter().any(|e| {
                        e.id == item.id
                            && (e.company.to_lowercase().contains(&needle)
                                || e.position.to_lowercase().contains(&needle)
                                || e.description.to_lowercase().contains(&needle))
                    }),
                    ContentType::Talk => store.talks().iter().any(|t| {
                        t.id == item.id
                            && (t.title.to_lowercase().contains(&needle)
                                || t.event.to_lowercase().contains(&needle)
                                || t.description.to_lowercase().contains(&needle))
                    }),
                    ContentType::Blog => store.blog().iter().any(|b| {
                        b.slug == item.id
                            && (b.title.to_lowercase().contains(&needle)
                                || b.excerpt.to_lowercase().contains(&needle)
                                || b.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
                    }),
                };
                assert!(matched, "{query} returned non-matching {item:?}");
            }
        }
    }

    #[test]
    fn test_search_is_idempotent() {
        let engine = sample();
        assert_eq!(engine.search("e"), engine.search("e"));
    }

    #[test]
    fn test_long_abstract_is_truncated() {
        let long = "word ".repeat(100);
        let engine = engine(ContentData {
            publications: vec![publication("long", "Long", &long)],
            ..Default::default()
        });
        let item = &engine.search("long")[0];
        assert!(item.description.ends_with("..."));
        assert!(item.description.chars().count() <= DESCRIPTION_WIDTH);
    }

    #[test]
    fn test_limit_is_clamped() {
        let engine = sample();
        assert_eq!(engine.search_with_limit("e", 1).len(), 1);
        assert!(engine.search_with_limit("e", 0).is_empty());
        assert!(engine.search_with_limit("e", 500).len() <= MAX_RESULTS);
    }

    #[test]
    fn test_serializes_type_field() {
        let json = serde_json::to_value(&sample().search("react")[0]).unwrap();
        assert_eq!(json["type"], "project");
        assert_eq!(json["url"], "/projects#site");
    }
}
