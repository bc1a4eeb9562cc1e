use std::collections::{HashMap, HashSet};

use crate::domain::casting::{Casting, CastingId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::film::FilmId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastingRelationId(pub i64);

impl CastingRelationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "casting relation id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CastingRelationId> for i64 {
    fn from(value: CastingRelationId) -> Self {
        value.0
    }
}

/// The part a cast member plays in a film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastingRole(String);

impl CastingRole {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("casting role cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CastingRole> for String {
    fn from(value: CastingRole) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastingRelation {
    pub id: CastingRelationId,
    pub film_id: FilmId,
    pub casting_id: CastingId,
    pub role: CastingRole,
}

#[derive(Debug, Clone)]
pub struct CastingRelationDetail {
    pub relation: CastingRelation,
    pub casting: Casting,
}

/// One entry of a film's target cast.
///
/// `photo` overwrites the photo of the shared cast member, not anything film-specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastingAssignment {
    pub casting_id: CastingId,
    pub role: CastingRole,
    pub photo: Option<String>,
}

/// Target cast of a film; a cast member appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastingLineup(Vec<CastingAssignment>);

impl CastingLineup {
    pub fn new(assignments: Vec<CastingAssignment>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = assignments.iter().find(|a| !seen.insert(a.casting_id)) {
            return Err(DomainError::Validation(format!(
                "casting {} is listed more than once",
                dup.casting_id
            )));
        }
        Ok(Self(assignments))
    }

    pub fn assignments(&self) -> &[CastingAssignment] {
        &self.0
    }

    pub fn casting_ids(&self) -> Vec<CastingId> {
        self.0.iter().map(|a| a.casting_id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Photo overrides carried by the lineup, applied to the shared cast members.
    pub fn photo_overrides(&self) -> Vec<(CastingId, String)> {
        self.0
            .iter()
            .filter_map(|a| {
                a.photo
                    .as_ref()
                    .map(|url| url.trim())
                    .filter(|url| !url.is_empty())
                    .map(|url| (a.casting_id, url.to_string()))
            })
            .collect()
    }
}

/// Steps that turn a film's current cast into a target lineup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastingPlan {
    pub create: Vec<CastingAssignment>,
    pub update_roles: Vec<(CastingRelationId, CastingRole)>,
    pub delete: Vec<CastingRelationId>,
}

impl CastingPlan {
    /// Three-way diff keyed by cast member: new members are created, kept members whose
    /// role changed are updated in place (relation id preserved), dropped members are
    /// deleted.
    pub fn diff(original: &[CastingRelation], target: &CastingLineup) -> Self {
        let current: HashMap<CastingId, &CastingRelation> =
            original.iter().map(|rel| (rel.casting_id, rel)).collect();
        let wanted: HashSet<CastingId> = target.casting_ids().into_iter().collect();

        let mut plan = Self::default();
        for assignment in target.assignments() {
            match current.get(&assignment.casting_id) {
                None => plan.create.push(assignment.clone()),
                Some(existing) if existing.role != assignment.role => {
                    plan.update_roles.push((existing.id, assignment.role.clone()));
                }
                Some(_) => {}
            }
        }
        plan.delete = original
            .iter()
            .filter(|rel| !wanted.contains(&rel.casting_id))
            .map(|rel| rel.id)
            .collect();
        plan
    }

    pub fn is_noop(&self) -> bool {
        self.create.is_empty() && self.update_roles.is_empty() && self.delete.is_empty()
    }
}
