use serde::{Deserialize, Serialize};

use crate::api::id::{AccountId, ProjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub account_id: AccountId,
    pub name: String,
    #[serde(default)]
    pub platform: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub web_snippet: Option<WebSnippet>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
}

/// Metadata of the JavaScript snippet of a web project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSnippet {
    pub code_revision: Option<u64>,
    pub js_file_size: Option<u64>,
    pub project_javascript: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    pub account_id: AccountId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, account_id: impl Into<AccountId>) -> Self {
        NewProject {
            name: name.into(),
            account_id: account_id.into(),
            platform: None,
            status: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}
