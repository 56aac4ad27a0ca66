use crate::{
    api::{
        error::Result,
        experiment::{Experiment, ExperimentStatus, ExperimentUpdate, NewExperiment},
        id::{ExperimentId, ProjectId},
        request::Request,
    },
    resource::{required, Resource, ResourceClient},
};

impl Resource for Experiment {
    type Id = ExperimentId;
    type Update = ExperimentUpdate;

    const ID_LABEL: &'static str = "Experiment ID";
    const COLLECTION: &'static str = "/experiments";
}

impl ResourceClient<Experiment> {
    pub fn list(&self, project: &ProjectId) -> Result<Vec<Experiment>> {
        let project = required("Project ID", project.as_ref())?;
        self.fetch_list(Request::get(format!("/projects/{}/experiments", project)))
    }

    pub fn create(&self, project: &ProjectId, data: &NewExperiment) -> Result<Experiment> {
        let project = required("Project ID", project.as_ref())?;
        required("Experiment name", &data.name)?;
        self.fetch(Request::post(format!("/projects/{}/experiments", project)).body(data)?)
    }

    pub fn start(&self, id: &ExperimentId) -> Result<Experiment> {
        self.update(id, &ExperimentUpdate::status(ExperimentStatus::Running))
    }

    pub fn pause(&self, id: &ExperimentId) -> Result<Experiment> {
        self.update(id, &ExperimentUpdate::status(ExperimentStatus::Paused))
    }

    pub fn archive(&self, id: &ExperimentId) -> Result<Experiment> {
        self.update(id, &ExperimentUpdate::status(ExperimentStatus::Archived))
    }
}
