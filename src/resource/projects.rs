use crate::{
    api::{
        error::Result,
        id::ProjectId,
        project::{NewProject, Project, ProjectStatus, ProjectUpdate},
        request::Request,
    },
    resource::{required, Resource, ResourceClient},
};

impl Resource for Project {
    type Id = ProjectId;
    type Update = ProjectUpdate;

    const ID_LABEL: &'static str = "Project ID";
    const COLLECTION: &'static str = "/projects";
}

impl ResourceClient<Project> {
    pub fn list(&self) -> Result<Vec<Project>> {
        self.fetch_list(Request::get(Project::COLLECTION))
    }

    /// Requires `name` and `account_id`.
    pub fn create(&self, data: &NewProject) -> Result<Project> {
        required("Project name", &data.name)?;
        required("Account ID", data.account_id.as_ref())?;
        self.fetch(Request::post(Project::COLLECTION).body(data)?)
    }

    pub fn archive(&self, id: &ProjectId) -> Result<Project> {
        let update = ProjectUpdate {
            status: Some(ProjectStatus::Archived),
            ..Default::default()
        };
        self.update(id, &update)
    }
}
