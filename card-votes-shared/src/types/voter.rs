use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Represents the trust role of a voting user.
///
/// The role only influences vote weighting: an admin's vote counts five
/// times as much as a regular member's.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoterRole {
    /// Trusted administrator, vote weight 5.
    Admin,
    /// Regular member, vote weight 1.
    User,
}

impl VoterRole {
    /// Returns the role multiplier applied to this voter's ballots.
    pub fn weight(&self) -> f64 {
        match self {
            VoterRole::Admin => 5.0,
            VoterRole::User => 1.0,
        }
    }
}

/// Represents the locally stored projection of an external identity.
///
/// Voters are created lazily on first contact; the engine consumes the role
/// and never owns authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Voter {
    pub id: UserId,
    pub name: Option<String>,
    pub role: VoterRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_weight_is_five_times_user_weight() {
        assert_eq!(VoterRole::Admin.weight(), 5.0 * VoterRole::User.weight());
    }
}
