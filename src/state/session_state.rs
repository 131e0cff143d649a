// ============================================================================
// SESSION STATE - Single source of truth for "who is logged in"
// ============================================================================
// Two transitions: set_user / clear_user. After either one,
// is_authenticated == user.is_some() and the state has been written through
// the storage port, so a reload rehydrates to the same session.
// ============================================================================

#[cfg(test)]
#[path = "session_state_test.rs"]
mod session_state_test;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Identity;
use crate::services::storage::{load_json, save_json, StorageBackend};
use crate::utils::SESSION_STORAGE_KEY;

/// On-disk shape of the persisted session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct PersistedSession {
    user: Option<Identity>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

#[derive(Clone)]
pub struct SessionState {
    user: Rc<RefCell<Option<Identity>>>,
    is_authenticated: Rc<RefCell<bool>>,
    hydrated: Rc<RefCell<bool>>,
    storage: Rc<dyn StorageBackend>,
}

impl SessionState {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            is_authenticated: Rc::new(RefCell::new(false)),
            hydrated: Rc::new(RefCell::new(false)),
            storage,
        }
    }

    /// Replace the identity and mark the session authenticated.
    /// The identity's shape is the caller's responsibility.
    pub fn set_user(&self, identity: Identity) {
        *self.user.borrow_mut() = Some(identity);
        *self.is_authenticated.borrow_mut() = true;
        self.persist();
    }

    /// Drop the identity and mark the session unauthenticated.
    pub fn clear_user(&self) {
        *self.user.borrow_mut() = None;
        *self.is_authenticated.borrow_mut() = false;
        if let Err(err) = self.storage.remove(SESSION_STORAGE_KEY) {
            log::error!("❌ Error clearing persisted session: {}", err);
        }
    }

    /// Restore the persisted session, if any. Must run before the first
    /// guarded render; until it has, the guard reports the session as
    /// unknown rather than unauthenticated.
    pub fn hydrate(&self) {
        if let Some(persisted) = load_json::<PersistedSession>(&*self.storage, SESSION_STORAGE_KEY)
        {
            // The authenticated flag is always derived from user presence,
            // even if a hand-edited blob disagrees.
            let authenticated = persisted.user.is_some();
            *self.user.borrow_mut() = persisted.user;
            *self.is_authenticated.borrow_mut() = authenticated;
            if authenticated {
                log::info!("💾 Session restored from storage");
            }
        }
        *self.hydrated.borrow_mut() = true;
    }

    pub fn user(&self) -> Option<Identity> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        *self.is_authenticated.borrow()
    }

    pub fn is_hydrated(&self) -> bool {
        *self.hydrated.borrow()
    }

    fn persist(&self) {
        let snapshot = PersistedSession {
            user: self.user.borrow().clone(),
            is_authenticated: *self.is_authenticated.borrow(),
        };
        if let Err(err) = save_json(&*self.storage, SESSION_STORAGE_KEY, &snapshot) {
            log::error!("❌ Error persisting session: {}", err);
        }
    }
}
