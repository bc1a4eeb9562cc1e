use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilmId(pub i64);

impl FilmId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("film id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<FilmId> for i64 {
    fn from(value: FilmId) -> Self {
        value.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmTitle(String);

impl FilmTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FilmTitle> for String {
    fn from(value: FilmTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmSlug(String);

impl FilmSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FilmSlug> for String {
    fn from(value: FilmSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmDescription(String);

impl FilmDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("description cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FilmDescription> for String {
    fn from(value: FilmDescription) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Movie,
    Series,
    Anime,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "MOVIE",
            Category::Series => "SERIES",
            Category::Anime => "ANIME",
        }
    }

    pub fn requires_episodes(&self) -> bool {
        !matches!(self, Category::Movie)
    }

    /// Applies the category/episode rule: episodic categories need a positive count,
    /// movies never store one.
    pub fn normalize_episode(&self, episode: Option<i32>) -> DomainResult<Option<i32>> {
        if !self.requires_episodes() {
            return Ok(None);
        }
        match episode {
            Some(count) if count > 0 => Ok(Some(count)),
            _ => Err(DomainError::Validation(format!(
                "episode count must be a positive integer for category {self}"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MOVIE" => Ok(Category::Movie),
            "SERIES" => Ok(Category::Series),
            "ANIME" => Ok(Category::Anime),
            other => Err(DomainError::Validation(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}

pub(crate) fn validate_duration(duration: Option<i32>) -> DomainResult<Option<i32>> {
    match duration {
        Some(minutes) if minutes <= 0 => Err(DomainError::Validation(
            "duration must be a positive number of minutes".into(),
        )),
        other => Ok(other),
    }
}

pub(crate) fn validate_release_year(year: Option<i32>) -> DomainResult<Option<i32>> {
    match year {
        Some(y) if !(1878..=2100).contains(&y) => Err(DomainError::Validation(format!(
            "release year {y} is out of range"
        ))),
        other => Ok(other),
    }
}
