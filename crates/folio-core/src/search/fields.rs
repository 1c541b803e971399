//! Searchable field table
//!
//! Each content type is described once: where its records live, which fields
//! the query is tested against, and how a record projects into a
//! [`SearchableItem`]. Adding a content type means adding one table entry.

use super::{ContentType, SearchableItem};
use crate::content::{BlogPost, ContentStore, Experience, Project, Publication, Talk};
use crate::route::Route;
use crate::text::truncate_ellipsis;

/// Display columns kept from long descriptions (abstracts, excerpts)
pub const DESCRIPTION_WIDTH: usize = 150;

/// A field value the query is tested against
pub enum Field<'a> {
    Text(&'a str),
    /// Matches when any tag matches
    Tags(&'a [String]),
}

impl Field<'_> {
    /// `needle` must already be lower-cased
    pub fn matches(&self, needle: &str) -> bool {
        match self {
            Field::Text(text) => contains_folded(text, needle),
            Field::Tags(tags) => tags.iter().any(|tag| contains_folded(tag, needle)),
        }
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

type Extractor<T> = for<'a> fn(&'a T) -> Field<'a>;

/// Table entry for one content type
pub struct Collection<T: 'static> {
    kind: ContentType,
    records: for<'a> fn(&'a ContentStore) -> &'a [T],
    fields: &'static [Extractor<T>],
    project: fn(&T) -> SearchableItem,
}

/// Type-erased view over a [`Collection`], so the table can hold every type
pub trait Scan: Sync {
    fn kind(&self) -> ContentType;

    /// Append matches to `out` until it holds `limit` items
    fn scan(&self, store: &ContentStore, needle: &str, limit: usize, out: &mut Vec<SearchableItem>);
}

impl<T: 'static> Scan for Collection<T> {
    fn kind(&self) -> ContentType {
        self.kind
    }

    fn scan(&self, store: &ContentStore, needle: &str, limit: usize, out: &mut Vec<SearchableItem>) {
        for record in (self.records)(store) {
            if out.len() >= limit {
                return;
            }
            if self.fields.iter().any(|field| field(record).matches(needle)) {
                out.push((self.project)(record));
            }
        }
    }
}

static PROJECTS: Collection<Project> = Collection {
    kind: ContentType::Project,
    records: ContentStore::projects,
    fields: &[
        |p| Field::Text(&p.title),
        |p| Field::Text(&p.description),
        |p| Field::Tags(&p.technologies),
    ],
    project: |p| SearchableItem::new(ContentType::Project, &p.id, &p.title, &p.description),
};

static PUBLICATIONS: Collection<Publication> = Collection {
    kind: ContentType::Publication,
    records: ContentStore::publications,
    fields: &[
        |p| Field::Text(&p.title),
        |p| Field::Text(&p.abstract_text),
        |p| Field::Tags(&p.keywords),
    ],
    project: |p| SearchableItem::new(ContentType::Publication, &p.id, &p.title, &p.abstract_text),
};

static EXPERIENCE: Collection<Experience> = Collection {
    kind: ContentType::Experience,
    records: ContentStore::experience,
    fields: &[
        |e| Field::Text(&e.company),
        |e| Field::Text(&e.position),
        |e| Field::Text(&e.description),
    ],
    project: |e| {
        let title = format!("{} at {}", e.position, e.company);
        SearchableItem::new(ContentType::Experience, &e.id, &title, &e.description)
    },
};

static TALKS: Collection<Talk> = Collection {
    kind: ContentType::Talk,
    records: ContentStore::talks,
    fields: &[
        |t| Field::Text(&t.title),
        |t| Field::Text(&t.event),
        |t| Field::Text(&t.description),
    ],
    project: |t| SearchableItem::new(ContentType::Talk, &t.id, &t.title, &t.description),
};

static BLOG: Collection<BlogPost> = Collection {
    kind: ContentType::Blog,
    records: ContentStore::blog,
    fields: &[
        |b| Field::Text(&b.title),
        |b| Field::Text(&b.excerpt),
        |b| Field::Tags(&b.tags),
    ],
    project: |b| SearchableItem::new(ContentType::Blog, &b.slug, &b.title, &b.excerpt),
};

/// Collections in scan order; earlier entries win when the result cap is hit
pub static SCAN_ORDER: [&dyn Scan; 5] = [&PROJECTS, &PUBLICATIONS, &EXPERIENCE, &TALKS, &BLOG];

impl SearchableItem {
    fn new(kind: ContentType, id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: truncate_ellipsis(description, DESCRIPTION_WIDTH).into_owned(),
            kind,
            url: Route::for_content(kind, id).url(),
        }
    }
}
