//! Permission Definitions
//!
//! Role-tier permission system.
//!
//! ## 设计原则
//! - 基础操作（菜单、订单、桌台、预订）无需特殊角色
//! - 受保护视图声明所需角色列表，空列表表示开放访问
//! - 授权决策在路由层组合，返回显式的 Allow / Deny

use shared::models::Role;

/// Roles allowed to manage inventory and customers
pub const ADVANCED_ROLES: &[Role] = &[Role::Advanced, Role::Admin];

/// Roles allowed to manage the team and settings
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];

/// Authorization decision for a guarded route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Denied, with the reason reported to the caller
    Deny(String),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Check whether a role satisfies a view's required roles
///
/// An empty `required` list means open access.
pub fn has_permission(role: Role, required: &[Role]) -> bool {
    required.is_empty() || required.contains(&role)
}

/// Authorize a role against a required-role list
///
/// Deny carries the role list the caller would need.
pub fn authorize(role: Role, required: &[Role]) -> AccessDecision {
    if has_permission(role, required) {
        AccessDecision::Allow
    } else {
        let needed: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
        AccessDecision::Deny(format!(
            "Role {} is not permitted, requires one of [{}]",
            role.as_str(),
            needed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_is_open_access() {
        for role in [Role::Basic, Role::Advanced, Role::Admin] {
            assert!(has_permission(role, &[]));
        }
    }

    #[test]
    fn test_membership_grants_access() {
        assert!(has_permission(Role::Admin, ADMIN_ROLES));
        assert!(has_permission(Role::Advanced, ADVANCED_ROLES));
        assert!(has_permission(Role::Admin, ADVANCED_ROLES));
    }

    #[test]
    fn test_non_membership_denies_access() {
        assert!(!has_permission(Role::Basic, ADVANCED_ROLES));
        assert!(!has_permission(Role::Advanced, ADMIN_ROLES));
    }

    #[test]
    fn test_deny_carries_reason() {
        match authorize(Role::Basic, ADMIN_ROLES) {
            AccessDecision::Deny(reason) => {
                assert!(reason.contains("BASIC"));
                assert!(reason.contains("ADMIN"));
            }
            AccessDecision::Allow => panic!("expected deny"),
        }
    }

    #[test]
    fn test_allow_for_member() {
        assert!(authorize(Role::Admin, ADMIN_ROLES).is_allowed());
        assert_eq!(authorize(Role::Basic, &[]), AccessDecision::Allow);
    }
}
