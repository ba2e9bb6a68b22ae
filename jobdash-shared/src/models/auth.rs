use serde::{Deserialize, Serialize};

/// Credentials submitted to the identity collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// The decoded session returned by the identity collaborator after a
/// successful sign-in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Token bundle issued for this session.
    pub tokens: TokenBundle,
}

/// Tokens carried by an [`AuthSession`]. Only the identity token is decoded
/// client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBundle {
    /// The signed identity token.
    #[serde(rename = "idToken")]
    pub id_token: IdToken,
}

/// A decoded identity token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdToken {
    /// The decoded claim set.
    pub payload: TokenClaims,
}

/// Claims decoded from the identity token. Every claim is optional on the
/// wire; consumers substitute defaults for whatever is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Unique subject identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Role groups, most significant first.
    #[serde(rename = "cognito:groups", default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// JSON-encoded array of entitled category ids, e.g. `["a","b"]`.
    #[serde(
        rename = "custom:job_category_ids",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub job_category_ids: Option<String>,

    /// The user's email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The user's given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// The user's family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_session_payload_deserializes() {
        let raw = r#"{
            "tokens": {
                "idToken": {
                    "payload": {
                        "sub": "u-123",
                        "cognito:groups": ["ADMIN"],
                        "custom:job_category_ids": "[\"cat-1\",\"cat-2\"]",
                        "email": "jane@example.com",
                        "given_name": "Jane",
                        "family_name": "Doe"
                    }
                }
            }
        }"#;

        let session: AuthSession = serde_json::from_str(raw).unwrap();
        let claims = &session.tokens.id_token.payload;
        assert_eq!(claims.sub.as_deref(), Some("u-123"));
        assert_eq!(claims.groups, vec!["ADMIN".to_string()]);
        assert_eq!(
            claims.job_category_ids.as_deref(),
            Some("[\"cat-1\",\"cat-2\"]")
        );
        assert_eq!(claims.email.as_deref(), Some("jane@example.com"));
        assert_eq!(claims.given_name.as_deref(), Some("Jane"));
        assert_eq!(claims.family_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn sparse_payload_falls_back_to_defaults() {
        let raw = r#"{"tokens": {"idToken": {"payload": {}}}}"#;

        let session: AuthSession = serde_json::from_str(raw).unwrap();
        let claims = &session.tokens.id_token.payload;
        assert_eq!(claims.sub, None);
        assert!(claims.groups.is_empty());
        assert_eq!(claims.job_category_ids, None);
        assert_eq!(claims.email, None);
    }

    #[test]
    fn sign_in_request_serializes() {
        let request = SignInRequest {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn absent_claims_are_not_serialized() {
        let claims = TokenClaims {
            sub: Some("u-1".to_string()),
            ..TokenClaims::default()
        };

        let value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["sub"]);
    }
}
