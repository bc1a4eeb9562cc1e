use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CastingId(pub i64);

impl CastingId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("casting id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CastingId> for i64 {
    fn from(value: CastingId) -> Self {
        value.0
    }
}

impl fmt::Display for CastingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("cast member name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// A cast member. Shared across films; it has no owner.
#[derive(Debug, Clone)]
pub struct Casting {
    pub id: CastingId,
    pub real_name: PersonName,
    pub stage_name: PersonName,
    pub photo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCasting {
    pub real_name: PersonName,
    pub stage_name: PersonName,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CastingChanges {
    pub real_name: Option<PersonName>,
    pub stage_name: Option<PersonName>,
    pub photo: Option<Option<String>>,
}

impl Casting {
    pub fn apply(&mut self, changes: CastingChanges) {
        if let Some(real_name) = changes.real_name {
            self.real_name = real_name;
        }
        if let Some(stage_name) = changes.stage_name {
            self.stage_name = stage_name;
        }
        if let Some(photo) = changes.photo {
            self.photo = photo.filter(|url| !url.trim().is_empty());
        }
    }
}
