use crate::{
    api::{
        audience::{Audience, AudienceUpdate, NewAudience},
        error::Result,
        id::{AudienceId, ProjectId},
        request::Request,
    },
    resource::{required, ProjectFilter, Resource, ResourceClient},
};

impl Resource for Audience {
    type Id = AudienceId;
    type Update = AudienceUpdate;

    const ID_LABEL: &'static str = "Audience ID";
    const COLLECTION: &'static str = "/audiences";
}

impl ResourceClient<Audience> {
    /// Lists the audiences of `project` that are not archived.
    pub fn list(&self, project: &ProjectId) -> Result<Vec<Audience>> {
        let project = required("Project ID", project.as_ref())?;
        let request =
            Request::get(Audience::COLLECTION).query(&ProjectFilter::unarchived(project))?;
        self.fetch_list(request)
    }

    pub fn create(&self, project: &ProjectId, data: &NewAudience) -> Result<Audience> {
        let project = required("Project ID", project.as_ref())?;
        required("Audience name", &data.name)?;
        self.fetch(Request::post(format!("/projects/{}/audiences", project)).body(data)?)
    }
}
