use std::future::Future;

use crate::domain::user::{User, UserId};

/// Member id as it arrives in a creation request
pub type MemberId = u64;

/// Resolves member ids into users, best-effort
///
/// Ids are looked up one at a time, in order. A lookup that finds nothing or
/// fails is skipped; the rest of the list is still resolved. Duplicate ids are
/// looked up and kept once per occurrence. Ids outside the store's id range
/// count as misses and are never looked up.
pub async fn resolve_members<F, Fut, E>(ids: &[MemberId], mut lookup: F) -> Vec<User>
where
    F: FnMut(UserId) -> Fut,
    Fut: Future<Output = Result<Option<User>, E>>,
{
    let mut resolved = Vec::with_capacity(ids.len());

    for &id in ids {
        let Ok(id) = UserId::try_from(id) else {
            continue;
        };

        // Misses and lookup errors are dropped
        if let Ok(Some(user)) = lookup(id).await {
            resolved.push(user);
        }
    }

    resolved
}
