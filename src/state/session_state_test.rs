use super::*;
use crate::models::Role;
use crate::services::storage::MemoryStorage;

fn identity(id: &str, role: Role) -> Identity {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "firstName": "Asha",
        "lastName": "Iyer",
        "email": "asha@example.com",
        "role": role.as_str(),
    }))
    .unwrap()
}

// =============================================================
// Invariant: is_authenticated == user.is_some()
// =============================================================

#[test]
fn fresh_session_is_signed_out() {
    let session = SessionState::new(MemoryStorage::new());
    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
    assert!(!session.is_hydrated());
}

#[test]
fn invariant_holds_over_arbitrary_transition_sequences() {
    let session = SessionState::new(MemoryStorage::new());

    let steps: [&dyn Fn(&SessionState); 6] = [
        &|s| s.set_user(identity("u1", Role::Patient)),
        &|s| s.clear_user(),
        &|s| s.clear_user(),
        &|s| s.set_user(identity("u2", Role::Doctor)),
        &|s| s.set_user(identity("u3", Role::Admin)),
        &|s| s.clear_user(),
    ];

    for step in steps {
        step(&session);
        assert_eq!(session.is_authenticated(), session.user().is_some());
    }
}

#[test]
fn set_user_replaces_wholesale() {
    let session = SessionState::new(MemoryStorage::new());
    session.set_user(identity("u1", Role::Patient));
    session.set_user(identity("u2", Role::Doctor));

    let user = session.user().unwrap();
    assert_eq!(user.id, "u2");
    assert_eq!(user.role, Role::Doctor);
}

// =============================================================
// Persistence: every mutation writes through the port
// =============================================================

#[test]
fn set_user_persists_immediately() {
    let storage = MemoryStorage::new();
    let session = SessionState::new(storage.clone());
    session.set_user(identity("u1", Role::Patient));

    let blob = storage.get(SESSION_STORAGE_KEY).unwrap().unwrap();
    let persisted: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(persisted["isAuthenticated"], true);
    assert_eq!(persisted["user"]["_id"], "u1");
}

#[test]
fn clear_user_removes_the_persisted_blob() {
    let storage = MemoryStorage::new();
    let session = SessionState::new(storage.clone());
    session.set_user(identity("u1", Role::Patient));
    session.clear_user();

    assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn rehydration_reproduces_the_authenticated_state() {
    let storage = MemoryStorage::new();

    // First "tab": log in, state persists
    let first = SessionState::new(storage.clone());
    first.hydrate();
    first.set_user(identity("u1", Role::Patient));

    // Second "tab": rehydrate from the same storage, no fresh login
    let second = SessionState::new(storage);
    second.hydrate();

    assert!(second.is_hydrated());
    assert!(second.is_authenticated());
    assert_eq!(second.user(), first.user());
}

#[test]
fn rehydrating_a_raw_blob_reproduces_equivalent_state() {
    let storage = MemoryStorage::new();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"user":{"_id":"u9","firstName":"Dev","lastName":"Rao","email":"dev@example.com","role":"doctor"},"isAuthenticated":true}"#,
        )
        .unwrap();

    let session = SessionState::new(storage);
    session.hydrate();

    assert!(session.is_authenticated());
    let user = session.user().unwrap();
    assert_eq!(user.id, "u9");
    assert_eq!(user.role, Role::Doctor);
}

#[test]
fn corrupt_blob_hydrates_to_signed_out() {
    let storage = MemoryStorage::new();
    storage.set(SESSION_STORAGE_KEY, "{not json").unwrap();

    let session = SessionState::new(storage);
    session.hydrate();

    assert!(session.is_hydrated());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn authenticated_flag_is_derived_from_user_presence() {
    // A blob that claims authentication without a user must not produce an
    // authenticated-but-empty session.
    let storage = MemoryStorage::new();
    storage
        .set(SESSION_STORAGE_KEY, r#"{"user":null,"isAuthenticated":true}"#)
        .unwrap();

    let session = SessionState::new(storage);
    session.hydrate();

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}
