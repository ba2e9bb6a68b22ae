use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::models::AuthSession;
use wasm_bindgen::prelude::*;
use yewdux::Dispatch;

use crate::api::JobDashClient;
use crate::models::session::{SessionState, StoredSession, USER_STORAGE_KEY};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Handle for mutating the session. Owned by the application root and handed
/// to consumers through a context; every operation replaces the state in a
/// single dispatch and mirrors it to local storage in the same step.
#[derive(Clone)]
pub struct SessionStore {
    dispatch: Dispatch<SessionState>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.dispatch.get() == other.dispatch.get()
    }
}

impl SessionStore {
    /// Wrap a dispatch and restore any persisted session before the first
    /// consumer renders.
    pub fn new(dispatch: Dispatch<SessionState>) -> Self {
        let store = Self { dispatch };
        store.load_from_storage();
        store
    }

    /// Current session snapshot.
    pub fn state(&self) -> std::rc::Rc<SessionState> {
        self.dispatch.get()
    }

    /// Replace the session with one extracted from the identity token and
    /// persist the snapshot under [`USER_STORAGE_KEY`].
    pub fn update_user_data(&self, session: &AuthSession) {
        let state = SessionState::from_claims(&session.tokens.id_token.payload);
        if let Err(err) = LocalStorage::set(USER_STORAGE_KEY, StoredSession::from(&state)) {
            log(&format!("failed to persist session: {err}"));
        }
        self.dispatch.set(state);
    }

    /// Reset to the signed-out snapshot and drop the persisted entry.
    pub fn clear_user_data(&self) {
        LocalStorage::delete(USER_STORAGE_KEY);
        self.dispatch.set(SessionState::default());
    }

    /// Restore a persisted session if one exists. Corrupted entries are
    /// purged and reported as a miss, never an error.
    pub fn load_from_storage(&self) -> bool {
        match LocalStorage::get::<StoredSession>(USER_STORAGE_KEY) {
            Ok(stored) => {
                self.dispatch.set(stored.into());
                true
            }
            Err(StorageError::KeyNotFound(_)) => false,
            Err(err) => {
                log(&format!("purging corrupted session entry: {err}"));
                LocalStorage::delete(USER_STORAGE_KEY);
                false
            }
        }
    }

    /// Sign out with the identity collaborator, then clear the local
    /// session. A collaborator failure resets `loading` and propagates so
    /// the caller can surface it.
    pub async fn logout(&self, client: &JobDashClient) -> Result<(), reqwest::Error> {
        self.dispatch.reduce_mut(|state| state.loading = true);
        match client.logout().await {
            Ok(()) => {
                self.clear_user_data();
                Ok(())
            }
            Err(err) => {
                self.dispatch.reduce_mut(|state| state.loading = false);
                Err(err)
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::{IdToken, TokenBundle, TokenClaims};
    use wasm_bindgen_test::*;
    use yewdux::{Context, Dispatch};

    wasm_bindgen_test_configure!(run_in_browser);

    fn auth_session(sub: &str) -> AuthSession {
        AuthSession {
            tokens: TokenBundle {
                id_token: IdToken {
                    payload: TokenClaims {
                        sub: Some(sub.to_string()),
                        groups: vec!["ADMIN".to_string()],
                        job_category_ids: Some("[\"a\"]".to_string()),
                        email: Some("jane@example.com".to_string()),
                        given_name: Some("Jane".to_string()),
                        family_name: Some("Doe".to_string()),
                    },
                },
            },
        }
    }

    fn fresh_store() -> SessionStore {
        LocalStorage::delete(USER_STORAGE_KEY);
        let cx = Context::new();
        SessionStore::new(Dispatch::new(&cx))
    }

    #[wasm_bindgen_test]
    fn update_persists_and_survives_reload() {
        let store = fresh_store();
        store.update_user_data(&auth_session("u1"));
        assert!(store.state().is_authenticated());

        // A second store over a fresh context simulates a page reload.
        let reloaded = SessionStore::new(Dispatch::new(&Context::new()));
        assert_eq!(reloaded.state().user_id.as_deref(), Some("u1"));
        assert_eq!(reloaded.state().category_ids, vec!["a".to_string()]);
    }

    #[wasm_bindgen_test]
    fn clear_resets_state_and_removes_key() {
        let store = fresh_store();
        store.update_user_data(&auth_session("u1"));

        store.clear_user_data();
        assert!(!store.state().is_authenticated());
        assert_eq!(
            LocalStorage::raw().get_item(USER_STORAGE_KEY).unwrap(),
            None
        );
    }

    #[wasm_bindgen_test]
    fn corrupted_entry_is_purged() {
        let store = fresh_store();
        LocalStorage::raw()
            .set_item(USER_STORAGE_KEY, "{{{")
            .unwrap();

        assert!(!store.load_from_storage());
        assert!(!store.state().is_authenticated());
        assert_eq!(
            LocalStorage::raw().get_item(USER_STORAGE_KEY).unwrap(),
            None
        );
    }

    #[wasm_bindgen_test]
    fn missing_entry_reports_a_miss() {
        let store = fresh_store();
        assert!(!store.load_from_storage());
    }

    #[wasm_bindgen_test]
    async fn failed_logout_resets_loading_and_keeps_session() {
        let store = fresh_store();
        store.update_user_data(&auth_session("u1"));

        // Nothing listens on this port; the collaborator call must fail.
        let client = JobDashClient::new("http://127.0.0.1:9");
        assert!(store.logout(&client).await.is_err());
        assert!(!store.state().loading);
        assert!(store.state().is_authenticated());
    }
}
