//! Authorization types and policies.

use skillbridge_common_core::Role;
use std::collections::{HashMap, HashSet};

/// Actions that can be performed on resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Create a new resource.
    Create,
    /// Read user-scoped resources.
    Read,
}

/// Resource types in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// A catalogue course.
    Course,
    /// A learner's course membership.
    Enrollment,
    /// A job posting.
    Job,
    /// A learner's job application.
    Application,
}

/// Permission definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission {
    /// The permitted action.
    pub action: Action,
    /// The resource it applies to.
    pub resource: Resource,
}

impl Permission {
    /// Pair an action with a resource.
    pub fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }
}

/// A role's permission set.
#[derive(Debug, Clone)]
pub struct RolePolicy {
    /// The role this policy applies to.
    pub role: Role,
    /// Permissions granted to the role.
    pub permissions: HashSet<Permission>,
}

impl RolePolicy {
    /// Start an empty policy for a role.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            permissions: HashSet::new(),
        }
    }

    /// Grant a single permission.
    pub fn with_permission(mut self, action: Action, resource: Resource) -> Self {
        self.permissions.insert(Permission::new(action, resource));
        self
    }

    /// Grant read on every resource.
    pub fn with_read_access(mut self) -> Self {
        for resource in [
            Resource::Course,
            Resource::Enrollment,
            Resource::Job,
            Resource::Application,
        ] {
            self.permissions.insert(Permission::new(Action::Read, resource));
        }
        self
    }

    /// Does this policy grant the permission?
    pub fn has_permission(&self, action: Action, resource: Resource) -> bool {
        self.permissions.contains(&Permission::new(action, resource))
    }
}

/// The static role → permission table.
///
/// Consulted synchronously before every mutating action; a pure lookup with
/// no IO and no side effects.
#[derive(Debug)]
pub struct PolicyRegistry {
    policies: HashMap<Role, RolePolicy>,
}

impl PolicyRegistry {
    /// Build the registry with the three marketplace roles.
    pub fn new() -> Self {
        let mut registry = Self {
            policies: HashMap::new(),
        };

        registry.register(Self::learner_policy());
        registry.register(Self::mentor_policy());
        registry.register(Self::client_policy());

        registry
    }

    fn learner_policy() -> RolePolicy {
        RolePolicy::new(Role::Learner)
            .with_permission(Action::Create, Resource::Enrollment)
            .with_permission(Action::Create, Resource::Application)
            .with_read_access()
    }

    fn mentor_policy() -> RolePolicy {
        RolePolicy::new(Role::Mentor)
            .with_permission(Action::Create, Resource::Course)
            .with_read_access()
    }

    fn client_policy() -> RolePolicy {
        RolePolicy::new(Role::Client)
            .with_permission(Action::Create, Resource::Job)
            .with_read_access()
    }

    /// Register (or replace) a role policy.
    pub fn register(&mut self, policy: RolePolicy) {
        self.policies.insert(policy.role, policy);
    }

    /// Look up a role's policy.
    pub fn get(&self, role: Role) -> Option<&RolePolicy> {
        self.policies.get(&role)
    }

    /// Check whether a role may perform an action on a resource.
    pub fn check(&self, role: Role, action: Action, resource: Resource) -> bool {
        self.policies
            .get(&role)
            .map(|policy| policy.has_permission(action, resource))
            .unwrap_or(false)
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentor_creates_courses_only() {
        let registry = PolicyRegistry::new();
        assert!(registry.check(Role::Mentor, Action::Create, Resource::Course));
        assert!(!registry.check(Role::Mentor, Action::Create, Resource::Job));
        assert!(!registry.check(Role::Mentor, Action::Create, Resource::Enrollment));
        assert!(!registry.check(Role::Mentor, Action::Create, Resource::Application));
    }

    #[test]
    fn test_learner_enrolls_and_applies_only() {
        let registry = PolicyRegistry::new();
        assert!(registry.check(Role::Learner, Action::Create, Resource::Enrollment));
        assert!(registry.check(Role::Learner, Action::Create, Resource::Application));
        assert!(!registry.check(Role::Learner, Action::Create, Resource::Course));
        assert!(!registry.check(Role::Learner, Action::Create, Resource::Job));
    }

    #[test]
    fn test_client_posts_jobs_only() {
        let registry = PolicyRegistry::new();
        assert!(registry.check(Role::Client, Action::Create, Resource::Job));
        assert!(!registry.check(Role::Client, Action::Create, Resource::Course));
        assert!(!registry.check(Role::Client, Action::Create, Resource::Enrollment));
    }

    #[test]
    fn test_every_role_reads_its_listings() {
        let registry = PolicyRegistry::new();
        for role in Role::ALL {
            assert!(registry.check(role, Action::Read, Resource::Enrollment));
            assert!(registry.check(role, Action::Read, Resource::Application));
        }
    }
}
