use serde::{Deserialize, Serialize};

use crate::api::id::{ExperimentId, ProjectId, VariationId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: ExperimentId,
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ExperimentStatus,
    #[serde(rename = "type")]
    pub kind: ExperimentType,
    #[serde(default)]
    pub variations: Option<Vec<Variation>>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentStatus {
    NotStarted,
    Running,
    Paused,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperimentType {
    #[serde(rename = "a/b")]
    AB,
    #[serde(rename = "multivariate")]
    Multivariate,
    #[serde(rename = "multi-armed_bandit")]
    MultiArmedBandit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: VariationId,
    #[serde(default)]
    pub experiment_id: Option<ExperimentId>,
    pub name: String,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub is_baseline: Option<bool>,
    #[serde(default)]
    pub actions: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewExperiment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExperimentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExperimentStatus>,
}

impl NewExperiment {
    pub fn new(name: impl Into<String>) -> Self {
        NewExperiment {
            name: name.into(),
            description: None,
            kind: None,
            status: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperimentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExperimentStatus>,
}

impl ExperimentUpdate {
    pub fn status(status: ExperimentStatus) -> Self {
        ExperimentUpdate {
            status: Some(status),
            ..Default::default()
        }
    }
}
