use crate::{
    api::{
        error::Result,
        id::{PageId, ProjectId},
        page::{CreatePage, NewPage, Page, PageUpdate},
        request::Request,
    },
    resource::{numeric, required, ProjectFilter, Resource, ResourceClient},
};

// The pages endpoints only accept numeric ids, in paths and bodies alike.
impl Resource for Page {
    type Id = PageId;
    type Update = PageUpdate;

    const ID_LABEL: &'static str = "Page ID";
    const COLLECTION: &'static str = "/pages";
    const NUMERIC_IDS: bool = true;
}

impl ResourceClient<Page> {
    /// Lists the pages of `project` that are not archived.
    pub fn list(&self, project: &ProjectId) -> Result<Vec<Page>> {
        let project = required("Project ID", project.as_ref())?;
        let request = Request::get(Page::COLLECTION).query(&ProjectFilter::unarchived(project))?;
        self.fetch_list(request)
    }

    /// Creates a page in `project`, which must be a numeric id.
    pub fn create(&self, project: &ProjectId, data: &NewPage) -> Result<Page> {
        let project = required("Project ID", project.as_ref())?;
        required("Page name", &data.name)?;
        let body = CreatePage {
            page: data,
            project_id: numeric("Project ID", project)?,
        };
        self.fetch(Request::post(Page::COLLECTION).body(&body)?)
    }

    pub fn archive(&self, id: &PageId) -> Result<Page> {
        let update = PageUpdate {
            archived: Some(true),
            ..Default::default()
        };
        self.update(id, &update)
    }
}
