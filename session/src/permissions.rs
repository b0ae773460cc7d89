//! Role to permission lookup used to hide dashboard entries.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    DocumentsView,
    DocumentsUpload,
    DocumentsDownload,
    ReconciliationManage,
    ReportsView,
    AccountManage,
    UsersManage,
}

impl Permission {
    pub const ALL: [Self; 7] = [
        Self::DocumentsView,
        Self::DocumentsUpload,
        Self::DocumentsDownload,
        Self::ReconciliationManage,
        Self::ReportsView,
        Self::AccountManage,
        Self::UsersManage,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::DocumentsView => "documents:view",
            Self::DocumentsUpload => "documents:upload",
            Self::DocumentsDownload => "documents:download",
            Self::ReconciliationManage => "reconciliation:manage",
            Self::ReportsView => "reports:view",
            Self::AccountManage => "account:manage",
            Self::UsersManage => "users:manage",
        }
    }
}

const ADMIN: &[Permission] = &[
    Permission::DocumentsView,
    Permission::DocumentsUpload,
    Permission::DocumentsDownload,
    Permission::ReconciliationManage,
    Permission::ReportsView,
    Permission::UsersManage,
];

const ACCOUNTANT: &[Permission] = &[
    Permission::DocumentsView,
    Permission::DocumentsUpload,
    Permission::DocumentsDownload,
    Permission::ReconciliationManage,
    Permission::ReportsView,
];

const MEMBER: &[Permission] = &[Permission::DocumentsView, Permission::DocumentsUpload, Permission::DocumentsDownload];

const VIEWER: &[Permission] = &[Permission::DocumentsView, Permission::ReportsView];

/// Permissions granted to `role`. Unknown roles get none.
#[must_use]
pub fn permissions_for(role: &str) -> &'static [Permission] {
    match role.trim().to_ascii_lowercase().as_str() {
        "owner" => &Permission::ALL,
        "admin" => ADMIN,
        "accountant" => ACCOUNTANT,
        "member" => MEMBER,
        "viewer" => VIEWER,
        _ => &[],
    }
}

#[must_use]
pub fn has_permission(role: &str, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}
