use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        policy::{CanMutateSpec, Mutation},
        user::{Action, Capability, Resource, UserId},
    },
};

pub(crate) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: Resource,
    action: Action,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {}",
            Capability::new(resource, action)
        )))
    }
}

/// Owner-or-privileged check for an existing resource instance.
pub(crate) fn ensure_can_mutate(
    actor: &AuthenticatedUser,
    resource: Resource,
    mutation: Mutation,
    owner_id: Option<UserId>,
) -> ApplicationResult<()> {
    let spec = CanMutateSpec::new(&actor.capabilities, resource, mutation, owner_id, actor.id);
    if spec.is_satisfied() {
        Ok(())
    } else {
        let verb = match mutation {
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        };
        Err(ApplicationError::forbidden(format!(
            "insufficient privileges to {verb} this {}",
            resource.singular()
        )))
    }
}
