use serde::{Deserialize, Serialize};

use crate::api::id::{AudienceId, ProjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audience {
    pub id: AudienceId,
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Serialized boolean expression, e.g. `["and", {"audience_id": 7}]`.
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAudience {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

impl NewAudience {
    pub fn new(name: impl Into<String>) -> Self {
        NewAudience {
            name: name.into(),
            description: None,
            conditions: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AudienceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}
