use std::fmt;

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

use crate::error::PageError;

const SALON_PATH_PREFIX: &str = "salon";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }

        Some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub injected_slug: Option<String>,
    pub path: String,
}

impl PageContext {
    pub fn new(injected_slug: Option<String>, location: &str) -> Self {
        let path = match Url::parse(location) {
            Ok(url) => url.path().to_string(),
            Err(_) => strip_query_and_fragment(location).to_string(),
        };

        Self {
            injected_slug,
            path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugSource {
    Injected,
    SalonPath,
}

impl SlugSource {
    pub fn lookup(self, context: &PageContext) -> Option<Slug> {
        match self {
            SlugSource::Injected => context.injected_slug.clone().and_then(Slug::new),
            SlugSource::SalonPath => slug_from_path(&context.path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlugResolver {
    sources: Vec<SlugSource>,
}

impl SlugResolver {
    pub fn new(sources: Vec<SlugSource>) -> Self {
        Self { sources }
    }

    pub fn resolve(&self, context: &PageContext) -> Result<Slug, PageError> {
        self.sources
            .iter()
            .find_map(|source| source.lookup(context))
            .ok_or(PageError::SlugMissing)
    }
}

impl Default for SlugResolver {
    fn default() -> Self {
        Self::new(vec![SlugSource::Injected, SlugSource::SalonPath])
    }
}

pub fn resolve(context: &PageContext) -> Result<Slug, PageError> {
    SlugResolver::default().resolve(context)
}

fn slug_from_path(path: &str) -> Option<Slug> {
    let segments = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();

    match segments.as_slice() {
        [prefix, slug] if *prefix == SALON_PATH_PREFIX => Slug::new(decode_segment(slug)),
        _ => None,
    }
}

// Request urls encode the slug again, so it is kept decoded here.
fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

fn strip_query_and_fragment(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}
