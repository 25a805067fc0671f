//! Identity - the stored record of the authenticated principal.

use crate::{CoreError, Result as CoreErrorResult, Role};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated principal.
///
/// Fields are private so that the GUEST role can never be stored: both
/// construction and deserialization reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdentityRecord")]
pub struct Identity {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    matric_no: String,
    email: String,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

/// Unchecked shape of a persisted identity.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityRecord {
    id: String,
    #[serde(default)]
    name: Option<String>,
    matric_no: String,
    email: String,
    role: Role,
    #[serde(default)]
    avatar: Option<String>,
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = CoreError;

    fn try_from(record: IdentityRecord) -> CoreErrorResult<Self> {
        let identity = Identity::new(record.id, record.matric_no, record.email, record.role)?;
        Ok(Self {
            name: record.name,
            avatar: record.avatar,
            ..identity
        })
    }
}

impl Identity {
    /// Build an identity with an explicit identifier.
    #[track_caller]
    pub fn new(
        id: impl Into<String>,
        matric_no: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> CoreErrorResult<Self> {
        if role.is_guest() {
            return Err(CoreError::guest_identity());
        }

        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::validation("identity id cannot be empty"));
        }

        Ok(Self {
            id,
            name: None,
            matric_no: matric_no.into(),
            email: email.into(),
            role,
            avatar: None,
        })
    }

    /// Build an identity with a freshly generated identifier.
    #[track_caller]
    pub fn generate(
        matric_no: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> CoreErrorResult<Self> {
        Self::new(Uuid::new_v4().to_string(), matric_no, email, role)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn matric_no(&self) -> &str {
        &self.matric_no
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}
