//! Admin Dashboard Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Consultancy, Course, User};

/// Records mirrored from the admin listings
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub consultancies: Vec<Consultancy>,
    pub users: Vec<User>,
    pub courses: Vec<Course>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

/// Records keyed by backend id
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for Consultancy {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for User {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for Course {
    fn key(&self) -> u32 {
        self.id
    }
}

/// Replace the record with the same id, or append it.
pub fn upsert<T: Keyed>(records: &mut Vec<T>, record: T) {
    match records.iter_mut().find(|r| r.key() == record.key()) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

pub fn remove<T: Keyed>(records: &mut Vec<T>, id: u32) {
    records.retain(|r| r.key() != id);
}

/// Unverified consultancies, in listing order
pub fn pending_verification(consultancies: &[Consultancy]) -> Vec<Consultancy> {
    consultancies.iter().filter(|c| !c.is_verified).cloned().collect()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_upsert_consultancy(store: &AdminStore, consultancy: Consultancy) {
    upsert(&mut *store.consultancies().write(), consultancy);
}

pub fn store_remove_consultancy(store: &AdminStore, id: u32) {
    remove(&mut *store.consultancies().write(), id);
}

/// The verify endpoint only acknowledges, so flip the flag locally.
pub fn store_mark_verified(store: &AdminStore, id: u32) {
    if let Some(c) = store.consultancies().write().iter_mut().find(|c| c.id == id) {
        c.is_verified = true;
    }
}

pub fn store_upsert_user(store: &AdminStore, user: User) {
    upsert(&mut *store.users().write(), user);
}

pub fn store_remove_user(store: &AdminStore, id: u32) {
    remove(&mut *store.users().write(), id);
}

pub fn store_upsert_course(store: &AdminStore, course: Course) {
    upsert(&mut *store.courses().write(), course);
}

pub fn store_remove_course(store: &AdminStore, id: u32) {
    remove(&mut *store.courses().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_consultancy(id: u32, name: &str, verified: bool) -> Consultancy {
        Consultancy { id, name: name.to_string(), is_verified: verified, ..Default::default() }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut records = vec![make_consultancy(1, "A", false), make_consultancy(2, "B", false)];
        upsert(&mut records, make_consultancy(1, "A2", true));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A2");
        assert!(records[0].is_verified);
        assert_eq!(records[1].name, "B");
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut records = vec![make_consultancy(1, "A", false)];
        upsert(&mut records, make_consultancy(5, "E", false));
        assert_eq!(records.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 5]);
    }

    #[test]
    fn test_remove() {
        let mut users = vec![
            User { id: 1, username: "a".into(), ..Default::default() },
            User { id: 2, username: "b".into(), ..Default::default() },
        ];
        remove(&mut users, 1);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 2);
        remove(&mut users, 42);
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_store_helpers_write_through_fields() {
        let store: AdminStore = Store::new(AdminState::default());

        store_upsert_consultancy(&store, make_consultancy(1, "A", false));
        store_upsert_consultancy(&store, make_consultancy(2, "B", false));
        store_upsert_consultancy(&store, make_consultancy(1, "A2", false));
        store_mark_verified(&store, 2);
        store_upsert_user(&store, User { id: 7, username: "u".into(), ..Default::default() });
        store_upsert_course(&store, Course { id: 9, name: "MBA".into(), ..Default::default() });

        let names = store.consultancies().with_untracked(|c| c.iter().map(|c| c.name.clone()).collect::<Vec<_>>());
        assert_eq!(names, vec!["A2", "B"]);
        assert!(store.consultancies().with_untracked(|c| c[1].is_verified));

        store_remove_consultancy(&store, 1);
        store_remove_user(&store, 7);
        store_remove_course(&store, 9);
        assert_eq!(store.consultancies().with_untracked(|c| c.len()), 1);
        assert!(store.users().with_untracked(Vec::is_empty));
        assert!(store.courses().with_untracked(Vec::is_empty));
    }

    #[test]
    fn test_pending_verification() {
        let all = vec![
            make_consultancy(1, "A", true),
            make_consultancy(2, "B", false),
            make_consultancy(3, "C", false),
        ];
        let pending = pending_verification(&all);
        assert_eq!(pending.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3]);
    }
}
