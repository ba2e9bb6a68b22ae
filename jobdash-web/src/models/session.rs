use serde::{Deserialize, Serialize};
use shared::models::TokenClaims;
use yewdux::Store;

/// Durable-storage key holding the serialized session snapshot.
pub const USER_STORAGE_KEY: &str = "user_data";

/// Role label assigned when the identity token carries no group claim.
pub const DEFAULT_USER_TYPE: &str = "USER";

/// Profile fields mirrored from the identity token for display purposes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

/// Client-side session snapshot: who is signed in, their role and category
/// entitlements. The state is only ever replaced wholesale, so consumers
/// never observe a partially updated session.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub user_type: Option<String>,
    pub category_ids: Vec<String>,
    pub personal_data: Option<PersonalData>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Build a session from decoded identity-token claims. Missing or
    /// malformed claims degrade to their defaults instead of failing.
    pub fn from_claims(claims: &TokenClaims) -> Self {
        let user_type = claims
            .groups
            .first()
            .filter(|group| !group.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_USER_TYPE.to_string());

        let category_ids = claims
            .job_category_ids
            .as_deref()
            .map(|raw| serde_json::from_str::<Vec<String>>(raw).unwrap_or_default())
            .unwrap_or_default();

        let personal_data = claims.email.as_ref().map(|email| PersonalData {
            email: email.clone(),
            firstname: claims.given_name.clone().unwrap_or_default(),
            lastname: claims.family_name.clone().unwrap_or_default(),
        });

        Self {
            user_id: claims.sub.clone(),
            user_type: Some(user_type),
            category_ids,
            personal_data,
            loading: false,
            error: None,
        }
    }

    /// A user is authenticated exactly when a subject id is present.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Whether the signed-in user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.user_type
            .as_deref()
            .is_some_and(|user_type| user_type.eq_ignore_ascii_case("admin"))
    }

    /// Display name, empty when no profile data is present.
    pub fn full_name(&self) -> String {
        self.personal_data
            .as_ref()
            .map(|data| format!("{} {}", data.firstname, data.lastname))
            .unwrap_or_default()
    }

    /// Uppercase initials for the avatar badge, at most two characters.
    pub fn initials(&self) -> String {
        self.full_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The subset of [`SessionState`] that survives a reload, using the same
/// wire names as the in-browser storage entry. `error` is deliberately not
/// persisted so a restored session never resurrects a stale error banner.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub user_id: Option<String>,
    pub user_type: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub personal_data: Option<PersonalData>,
    #[serde(default)]
    pub loading: bool,
}

impl From<&SessionState> for StoredSession {
    fn from(state: &SessionState) -> Self {
        Self {
            user_id: state.user_id.clone(),
            user_type: state.user_type.clone(),
            category_ids: state.category_ids.clone(),
            personal_data: state.personal_data.clone(),
            loading: state.loading,
        }
    }
}

impl From<StoredSession> for SessionState {
    fn from(stored: StoredSession) -> Self {
        Self {
            user_id: stored.user_id,
            user_type: stored.user_type,
            category_ids: stored.category_ids,
            personal_data: stored.personal_data,
            loading: stored.loading,
            error: None,
        }
    }
}
