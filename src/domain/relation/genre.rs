use std::collections::HashSet;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::film::FilmId;
use crate::domain::genre::{Genre, GenreId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenreRelationId(pub i64);

impl From<GenreRelationId> for i64 {
    fn from(value: GenreRelationId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRelation {
    pub id: GenreRelationId,
    pub film_id: FilmId,
    pub genre_id: GenreId,
}

#[derive(Debug, Clone)]
pub struct GenreRelationDetail {
    pub relation: GenreRelation,
    pub genre: Genre,
}

/// Target genre set of a film. Duplicates collapse; first-seen order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSelection(Vec<GenreId>);

impl GenreSelection {
    pub fn new(ids: impl IntoIterator<Item = GenreId>) -> Self {
        let mut seen = HashSet::new();
        Self(ids.into_iter().filter(|id| seen.insert(*id)).collect())
    }

    pub fn as_slice(&self) -> &[GenreId] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fails with `NotFound` naming the first requested genre missing from `existing`.
    pub fn ensure_all_exist(&self, existing: &[GenreId]) -> DomainResult<()> {
        let existing: HashSet<_> = existing.iter().copied().collect();
        match self.0.iter().find(|id| !existing.contains(id)) {
            Some(missing) => Err(DomainError::NotFound(format!(
                "genre {missing} not found"
            ))),
            None => Ok(()),
        }
    }
}
