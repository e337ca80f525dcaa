//! User roles and the role-creation eligibility graph.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a role name outside the known set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct UnknownRoleError(pub String);

/// Account roles known to the platform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    SubAdmin,
    WhiteLabelAdmin,
    WhiteLabelSubAdmin,
    ClientSuperUser,
    ClientUser,
}

impl UserRole {
    /// Label shown wherever the role is displayed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::SubAdmin => "Sub Admin",
            UserRole::WhiteLabelAdmin => "White Label Admin",
            UserRole::WhiteLabelSubAdmin => "White Label Sub Admin",
            UserRole::ClientSuperUser => "Client Super User",
            UserRole::ClientUser => "Client User",
        }
    }

    /// Roles this role may create accounts for.
    #[must_use]
    pub const fn creatable_roles(self) -> &'static [UserRole] {
        match self {
            UserRole::SuperAdmin => &[
                UserRole::WhiteLabelAdmin,
                UserRole::WhiteLabelSubAdmin,
                UserRole::ClientSuperUser,
                UserRole::ClientUser,
                UserRole::SubAdmin,
            ],
            UserRole::SubAdmin => &[
                UserRole::WhiteLabelAdmin,
                UserRole::WhiteLabelSubAdmin,
                UserRole::ClientSuperUser,
                UserRole::ClientUser,
            ],
            UserRole::WhiteLabelAdmin => {
                &[UserRole::ClientSuperUser, UserRole::WhiteLabelSubAdmin]
            }
            UserRole::WhiteLabelSubAdmin => &[UserRole::ClientSuperUser],
            UserRole::ClientSuperUser => &[UserRole::ClientUser],
            UserRole::ClientUser => &[],
        }
    }

    /// Whether this role may create an account with the given role.
    #[must_use]
    pub fn can_create(self, role: UserRole) -> bool {
        self.creatable_roles().contains(&role)
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for UserRole {
    type Error = UnknownRoleError;

    /// Parses a wire role name. The role set is closed, so an unknown name
    /// is an error rather than an absorbing variant.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            "SUB_ADMIN" => Ok(UserRole::SubAdmin),
            "WHITE_LABEL_ADMIN" => Ok(UserRole::WhiteLabelAdmin),
            "WHITE_LABEL_SUB_ADMIN" => Ok(UserRole::WhiteLabelSubAdmin),
            "CLIENT_SUPER_USER" => Ok(UserRole::ClientSuperUser),
            "CLIENT_USER" => Ok(UserRole::ClientUser),
            _ => Err(UnknownRoleError(s.to_string())),
        }
    }
}
