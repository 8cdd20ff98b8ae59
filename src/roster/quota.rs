use std::collections::BTreeMap;

use crate::models::player::Role;

/// Number of players in a complete roster. Independent of the quotas, which
/// add up to more than this.
pub const ROSTER_SIZE: usize = 11;

/// Maximum number of players per role in one roster
pub const ROLE_QUOTA: [(Role, usize); 6] = [
    (Role::Batsman, 5),
    (Role::Bowler, 5),
    (Role::Wicketkeeper, 1),
    (Role::Captain, 1),
    (Role::ViceCaptain, 1),
    (Role::Allrounder, 2),
];

pub fn quota_for(role: Role) -> usize {
    ROLE_QUOTA
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, limit)| *limit)
        .unwrap_or(0)
}

/// Remaining capacity of an empty roster
pub fn full_capacity() -> BTreeMap<Role, usize> {
    ROLE_QUOTA.iter().copied().collect()
}
