//! Authorization policy shared by every use case.
//!
//! Roles map to capability sets (`Role::default_capabilities`); the checks below are the
//! only place where ownership and capabilities are combined.

use std::collections::HashSet;

use crate::domain::user::value_objects::{Action, Capability, Resource, UserId};

/// Mutation kinds that come in an "own" and an "any" flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Update,
    Delete,
}

impl Mutation {
    fn own(self) -> Action {
        match self {
            Mutation::Update => Action::UpdateOwn,
            Mutation::Delete => Action::DeleteOwn,
        }
    }

    fn any(self) -> Action {
        match self {
            Mutation::Update => Action::UpdateAny,
            Mutation::Delete => Action::DeleteAny,
        }
    }
}

pub fn has_capability(
    capabilities: &HashSet<Capability>,
    resource: Resource,
    action: Action,
) -> bool {
    capabilities
        .iter()
        .any(|cap| cap.matches(resource, action))
}

/// Satisfied when the actor may mutate a resource instance owned by `owner_id`.
pub struct CanMutateSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    resource: Resource,
    mutation: Mutation,
    owner_id: Option<UserId>,
    user_id: UserId,
}

impl<'a> CanMutateSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        resource: Resource,
        mutation: Mutation,
        owner_id: Option<UserId>,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            resource,
            mutation,
            owner_id,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, self.resource, self.mutation.any())
            || (has_capability(self.capabilities, self.resource, self.mutation.own())
                && self.owner_id == Some(self.user_id))
    }
}
