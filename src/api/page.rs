use serde::{Deserialize, Serialize};

use crate::api::id::{PageId, ProjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub edit_url: Option<String>,
    #[serde(default)]
    pub page_type: Option<PageType>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub conditions: Option<serde_json::Value>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    SingleUrl,
    UrlSet,
    Global,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub edit_url: String,
    pub page_type: PageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub conditions: serde_json::Value,
}

impl NewPage {
    pub fn new(name: impl Into<String>, edit_url: impl Into<String>, page_type: PageType) -> Self {
        NewPage {
            name: name.into(),
            description: None,
            edit_url: edit_url.into(),
            page_type,
            category: None,
            conditions: serde_json::Value::Null,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Create request body: the page fields plus the numeric owning project.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePage<'a> {
    #[serde(flatten)]
    pub page: &'a NewPage,
    pub project_id: u64,
}

#[cfg(test)]
mod tests {
    use super::{Page, PageType};

    #[test]
    fn parse_page() {
        let response = r#"
        {
            "id": 4000,
            "project_id": 1000,
            "name": "Home",
            "edit_url": "https://example.com",
            "page_type": "url_set",
            "conditions": "[\"and\", [\"or\", {\"type\": \"url\", \"value\": \"/home\"}]]",
            "archived": false
        }
        "#;
        let parsed = serde_json::from_str::<Page>(response).unwrap();
        assert_eq!(parsed.id.as_ref(), "4000");
        assert_eq!(parsed.page_type, Some(PageType::UrlSet));
        assert_eq!(parsed.archived, Some(false));
        assert!(parsed.conditions.unwrap().is_string());
    }
}
