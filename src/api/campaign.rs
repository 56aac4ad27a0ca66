use serde::{Deserialize, Serialize};

use crate::api::id::{CampaignId, ProjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: CampaignStatus,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub changes: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub experiments: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub metrics: Option<Vec<serde_json::Value>>,
    /// Share of traffic excluded from the campaign, in basis points.
    #[serde(default)]
    pub holdback: Option<u32>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Paused,
    Archived,
    NotStarted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub share_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCampaign {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiments: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holdback: Option<u32>,
}

impl NewCampaign {
    pub fn new(name: impl Into<String>) -> Self {
        NewCampaign {
            name: name.into(),
            description: None,
            status: None,
            kind: None,
            changes: None,
            experiments: None,
            metrics: None,
            holdback: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiments: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holdback: Option<u32>,
}

impl CampaignUpdate {
    pub fn status(status: CampaignStatus) -> Self {
        CampaignUpdate {
            status: Some(status),
            ..Default::default()
        }
    }
}
