//! Allow-list of users permitted to navigate a pagination session.

use twilight_model::id::{Id, marker::UserMarker};

/// Insertion-ordered, deduplicated set of user IDs.
#[derive(Clone, Debug, Default)]
pub struct AllowList {
    users: Vec<Id<UserMarker>>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test by user identity.
    pub fn contains(&self, user_id: Id<UserMarker>) -> bool {
        self.users.contains(&user_id)
    }

    /// Add a user, skipping identities already present.
    ///
    /// Returns whether the user was newly inserted.
    pub fn add(&mut self, user_id: Id<UserMarker>) -> bool {
        if self.contains(user_id) {
            return false;
        }
        self.users.push(user_id);
        true
    }

    /// Add every user in the collection, skipping identities already present.
    pub fn add_all(&mut self, user_ids: impl IntoIterator<Item = Id<UserMarker>>) {
        for user_id in user_ids {
            self.add(user_id);
        }
    }

    /// Remove all entries matching the given identity. No-op if absent.
    pub fn remove(&mut self, user_id: Id<UserMarker>) {
        self.users.retain(|existing| *existing != user_id);
    }

    /// Remove every user in the collection.
    pub fn remove_all(&mut self, user_ids: impl IntoIterator<Item = Id<UserMarker>>) {
        for user_id in user_ids {
            self.remove(user_id);
        }
    }

    /// Snapshot of the current allow-list, in insertion order.
    pub fn snapshot(&self) -> Vec<Id<UserMarker>> {
        self.users.clone()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> Id<UserMarker> {
        Id::new(id)
    }

    #[test]
    fn add_is_idempotent() {
        let mut list = AllowList::new();
        assert!(list.add(user(1)));
        assert!(!list.add(user(1)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_all_deduplicates_against_existing_entries() {
        let mut list = AllowList::new();
        list.add(user(1));
        list.add_all([user(1), user(2), user(2), user(3)]);
        assert_eq!(list.snapshot(), vec![user(1), user(2), user(3)]);
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut list = AllowList::new();
        list.add(user(1));
        list.remove(user(9));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_all_clears_matching_identities() {
        let mut list = AllowList::new();
        list.add_all([user(1), user(2), user(3)]);
        list.remove_all([user(1), user(3)]);
        assert_eq!(list.snapshot(), vec![user(2)]);
        assert!(!list.contains(user(1)));
    }
}
