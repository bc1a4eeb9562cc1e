use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::dto::GenreRelationDto,
    domain::{
        film::{FilmId, FilmRepository},
        relation::{GenreRelationDetail, RelationRepository},
        review::ReviewRepository,
    },
};

/// Read side of the catalog: film listings and the assembled film page.
pub struct FilmQueryService {
    pub(super) films: Arc<dyn FilmRepository>,
    pub(super) relations: Arc<dyn RelationRepository>,
    pub(super) reviews: Arc<dyn ReviewRepository>,
}

impl FilmQueryService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        relations: Arc<dyn RelationRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            films,
            relations,
            reviews,
        }
    }
}

pub(super) fn group_genres(
    details: Vec<GenreRelationDetail>,
) -> HashMap<FilmId, Vec<GenreRelationDto>> {
    let mut grouped: HashMap<FilmId, Vec<GenreRelationDto>> = HashMap::new();
    for detail in details {
        grouped
            .entry(detail.relation.film_id)
            .or_default()
            .push(detail.into());
    }
    grouped
}
