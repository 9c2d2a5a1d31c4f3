//! Well-known role name constants.
//!
//! These must match the CHECK constraint in
//! `20260301000001_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PARTNER: &str = "partner";
pub const ROLE_LAWYER: &str = "lawyer";
pub const ROLE_CLIENT: &str = "client";

/// Every role the users table accepts.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_PARTNER, ROLE_LAWYER, ROLE_CLIENT];

/// Staff roles operate on firm data; the client role is restricted to its
/// own rows.
pub fn is_staff(role: &str) -> bool {
    matches!(role, ROLE_ADMIN | ROLE_PARTNER | ROLE_LAWYER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_set_excludes_clients() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_PARTNER));
        assert!(is_staff(ROLE_LAWYER));
        assert!(!is_staff(ROLE_CLIENT));
        assert!(!is_staff("paralegal"));
    }
}
