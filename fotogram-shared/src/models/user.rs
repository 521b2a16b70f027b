use serde::{Deserialize, Serialize};

/// The user object returned by the server on a successful login.
///
/// The server keys records by a string document id and uses camel/Pascal
/// casing on the wire; unknown fields (follower lists and the like) are
/// dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Server-side document id.
    #[serde(rename = "_id")]
    pub id: String,

    /// The user's full display name.
    pub name: String,

    /// The user's unique handle.
    #[serde(rename = "userName")]
    pub user_name: String,

    /// The user's email address.
    pub email: String,

    /// Profile photo URL, when one is set.
    #[serde(rename = "Photo", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
