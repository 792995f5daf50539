//! Admin role lookup from environment variables.
//!
//! Authentication belongs to Discord; this module only decides which user IDs
//! carry the admin flag. IDs come from `ADMIN_USER_IDS`, comma separated.

use std::collections::HashSet;

/// Set of Discord user IDs with the admin role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRoster {
    ids: HashSet<String>,
}

impl AdminRoster {
    /// Builds a roster from a comma separated list of user IDs.
    ///
    /// Blank entries and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { ids }
    }

    /// Loads the roster from `ADMIN_USER_IDS`; an unset variable means no admins.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("ADMIN_USER_IDS")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// Whether `user_id` has the admin role.
    #[must_use]
    pub fn is_admin(&self, user_id: &str) -> bool {
        self.ids.contains(user_id)
    }

    /// Number of configured admins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no admin is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_ids() {
        let roster = AdminRoster::parse(" 111, 222 ,,333 ");
        assert_eq!(roster.len(), 3);
        assert!(roster.is_admin("111"));
        assert!(roster.is_admin("222"));
        assert!(roster.is_admin("333"));
        assert!(!roster.is_admin("444"));
    }

    #[test]
    fn test_empty_roster_has_no_admins() {
        let roster = AdminRoster::parse("");
        assert!(roster.is_empty());
        assert!(!roster.is_admin(""));
    }
}
