use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::film::repository::FilmRepository;
use crate::domain::film::value_objects::{FilmSlug, FilmTitle};

/// Domain service producing collision-free slugs for films.
///
/// Two films with the same title get `title`, `title-1`, `title-2`, ... so a slug always
/// resolves to a single film.
pub struct FilmSlugService {
    films: Arc<dyn FilmRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl FilmSlugService {
    pub fn new(films: Arc<dyn FilmRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { films, generator }
    }

    pub async fn generate_unique_slug(&self, title: &FilmTitle) -> DomainResult<FilmSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("film-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = FilmSlug::new(candidate.clone())?;
            if self.films.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
