use crate::{
    api::{
        campaign::{Campaign, CampaignStatus, CampaignUpdate, NewCampaign, ShareLink},
        error::Result,
        id::{CampaignId, ProjectId},
        request::Request,
    },
    resource::{required, ProjectFilter, Resource, ResourceClient},
};

impl Resource for Campaign {
    type Id = CampaignId;
    type Update = CampaignUpdate;

    const ID_LABEL: &'static str = "Campaign ID";
    const COLLECTION: &'static str = "/campaigns";
}

impl ResourceClient<Campaign> {
    /// Lists the campaigns of `project` that are not archived.
    pub fn list(&self, project: &ProjectId) -> Result<Vec<Campaign>> {
        let project = required("Project ID", project.as_ref())?;
        let request =
            Request::get(Campaign::COLLECTION).query(&ProjectFilter::unarchived(project))?;
        self.fetch_list(request)
    }

    pub fn create(&self, project: &ProjectId, data: &NewCampaign) -> Result<Campaign> {
        let project = required("Project ID", project.as_ref())?;
        required("Campaign name", &data.name)?;
        self.fetch(Request::post(format!("/projects/{}/campaigns", project)).body(data)?)
    }

    pub fn start(&self, id: &CampaignId) -> Result<Campaign> {
        self.update(id, &CampaignUpdate::status(CampaignStatus::Active))
    }

    pub fn pause(&self, id: &CampaignId) -> Result<Campaign> {
        self.update(id, &CampaignUpdate::status(CampaignStatus::Paused))
    }

    pub fn archive(&self, id: &CampaignId) -> Result<Campaign> {
        self.update(id, &CampaignUpdate::status(CampaignStatus::Archived))
    }

    /// The results report, as returned by the API.
    pub fn results(&self, id: &CampaignId) -> Result<serde_json::Value> {
        let endpoint = format!("{}/results", self.item_endpoint(id)?);
        self.fetch(Request::get(endpoint))
    }

    pub fn share_link(&self, id: &CampaignId) -> Result<ShareLink> {
        let endpoint = format!("{}/share_link", self.item_endpoint(id)?);
        self.fetch(Request::get(endpoint))
    }

    /// The results report as CSV text.
    pub fn results_csv(&self, id: &CampaignId) -> Result<String> {
        let endpoint = format!("{}/results.csv", self.item_endpoint(id)?);
        Ok(self.execute(Request::get(endpoint))?.into_text())
    }
}
