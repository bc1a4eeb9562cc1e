// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resources guarded by the authorization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Films,
    Genres,
    Castings,
    Comments,
    Ratings,
    Users,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Films => "films",
            Resource::Genres => "genres",
            Resource::Castings => "castings",
            Resource::Comments => "comments",
            Resource::Ratings => "ratings",
            Resource::Users => "users",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Films => "film",
            Resource::Genres => "genre",
            Resource::Castings => "casting",
            Resource::Comments => "comment",
            Resource::Ratings => "rating",
            Resource::Users => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    UpdateOwn,
    UpdateAny,
    DeleteOwn,
    DeleteAny,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::UpdateOwn => "update:own",
            Action::UpdateAny => "update:any",
            Action::DeleteOwn => "delete:own",
            Action::DeleteAny => "delete:any",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: Resource,
    pub action: Action,
}

impl Capability {
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    pub fn matches(&self, resource: Resource, action: Action) -> bool {
        self.resource == resource && self.action == action
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Author,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Author => "AUTHOR",
            Role::User => "USER",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Action::{Create, DeleteAny, DeleteOwn, Read, UpdateAny, UpdateOwn};
        use Capability as Cap;
        use Resource::{Castings, Comments, Films, Genres, Ratings, Users};

        let reviewer = [
            Cap::new(Comments, Create),
            Cap::new(Comments, UpdateOwn),
            Cap::new(Comments, DeleteOwn),
            Cap::new(Ratings, Create),
            Cap::new(Ratings, UpdateOwn),
            Cap::new(Ratings, DeleteOwn),
        ];

        match self {
            Role::Admin => {
                let mut caps = HashSet::from(reviewer);
                caps.extend([
                    Cap::new(Films, Create),
                    Cap::new(Films, UpdateAny),
                    Cap::new(Films, DeleteAny),
                    Cap::new(Genres, Create),
                    Cap::new(Genres, UpdateAny),
                    Cap::new(Genres, DeleteAny),
                    Cap::new(Castings, Create),
                    Cap::new(Castings, UpdateAny),
                    Cap::new(Castings, DeleteAny),
                    Cap::new(Comments, UpdateAny),
                    Cap::new(Comments, DeleteAny),
                    Cap::new(Ratings, UpdateAny),
                    Cap::new(Ratings, DeleteAny),
                    Cap::new(Users, Read),
                    Cap::new(Users, UpdateAny),
                    Cap::new(Users, DeleteAny),
                ]);
                caps
            }
            Role::Author => {
                let mut caps = HashSet::from(reviewer);
                caps.extend([
                    Cap::new(Films, Create),
                    Cap::new(Films, UpdateOwn),
                    Cap::new(Films, DeleteOwn),
                    Cap::new(Genres, Create),
                    Cap::new(Genres, UpdateAny),
                    Cap::new(Castings, Create),
                    Cap::new(Castings, UpdateAny),
                ]);
                caps
            }
            Role::User => HashSet::from(reviewer),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "AUTHOR" => Ok(Role::Author),
            "USER" => Ok(Role::User),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if value.chars().count() > 100 {
            return Err(DomainError::Validation(
                "name must be at most 100 characters long".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address, normalised to lowercase so uniqueness is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        let valid = value
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid || value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid email address"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}
