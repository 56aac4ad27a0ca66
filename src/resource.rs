//! Typed access to the API collections.
//!
//! [`ResourceClient`] implements the operations every collection shares
//! (`get`, `update`, `delete`); each submodule adds the collection specific
//! ones (`list`, `create`, status shortcuts) as an inherent impl on its
//! `ResourceClient<Entity>`.

mod audiences;
mod campaigns;
mod experiments;
mod pages;
mod projects;

use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::api::{
    audience::Audience,
    campaign::Campaign,
    error::{ArgumentError, Result},
    experiment::Experiment,
    page::Page,
    project::Project,
    request::{Executor, Payload, Request},
    ListResponse,
};

pub type Projects = ResourceClient<Project>;
pub type Experiments = ResourceClient<Experiment>;
pub type Audiences = ResourceClient<Audience>;
pub type Pages = ResourceClient<Page>;
pub type Campaigns = ResourceClient<Campaign>;

/// An entity living in a collection of the API.
pub trait Resource: DeserializeOwned {
    type Id: AsRef<str>;
    /// Partial update body, sent with `PATCH`.
    type Update: Serialize;

    /// Names the id in validation errors, e.g. `"Experiment ID"`.
    const ID_LABEL: &'static str;
    /// Collection path, e.g. `"/experiments"`.
    const COLLECTION: &'static str;
    /// Whether ids go into paths as numbers rather than opaque text.
    const NUMERIC_IDS: bool = false;
}

/// The `project_id` filter of the list endpoints that hide archived items.
#[derive(Debug, Serialize)]
pub(crate) struct ProjectFilter<'a> {
    pub project_id: &'a str,
    pub archived: bool,
}

impl<'a> ProjectFilter<'a> {
    pub(crate) fn unarchived(project_id: &'a str) -> Self {
        ProjectFilter {
            project_id,
            archived: false,
        }
    }
}

pub(crate) fn required<'a>(label: &'static str, value: &'a str) -> Result<&'a str, ArgumentError> {
    if value.is_empty() {
        Err(ArgumentError::Required(label))
    } else {
        Ok(value)
    }
}

pub(crate) fn numeric(label: &'static str, value: &str) -> Result<u64, ArgumentError> {
    value.trim().parse().map_err(|_| ArgumentError::NotNumeric {
        field: label,
        value: value.to_owned(),
    })
}

/// The operations shared by all collections of entity `R`.
pub struct ResourceClient<R> {
    executor: Arc<dyn Executor>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        ResourceClient {
            executor: Arc::clone(&self.executor),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub(crate) fn new(executor: Arc<dyn Executor>) -> Self {
        ResourceClient {
            executor,
            resource: PhantomData,
        }
    }

    pub(crate) fn item_endpoint(&self, id: &R::Id) -> Result<String> {
        let id = required(R::ID_LABEL, id.as_ref())?;
        if R::NUMERIC_IDS {
            Ok(format!("{}/{}", R::COLLECTION, numeric(R::ID_LABEL, id)?))
        } else {
            Ok(format!("{}/{}", R::COLLECTION, id))
        }
    }

    pub(crate) fn execute(&self, request: Request<'_>) -> Result<Payload> {
        self.executor.execute(request)
    }

    pub(crate) fn fetch<T: DeserializeOwned>(&self, request: Request<'_>) -> Result<T> {
        let endpoint = request.endpoint.clone().into_owned();
        self.execute(request)?.decode(&endpoint)
    }

    pub(crate) fn fetch_list(&self, request: Request<'_>) -> Result<Vec<R>> {
        let list: ListResponse<R> = self.fetch(request)?;
        Ok(list.into_items())
    }

    pub fn get(&self, id: &R::Id) -> Result<R> {
        let endpoint = self.item_endpoint(id)?;
        self.fetch(Request::get(endpoint))
    }

    /// Sends only the fields set in `data`.
    ///
    /// The API answers with the updated entity. A `204 No Content` reply has
    /// no entity to return and fails with [`Error::Decode`](crate::Error::Decode).
    pub fn update(&self, id: &R::Id, data: &R::Update) -> Result<R> {
        let endpoint = self.item_endpoint(id)?;
        self.fetch(Request::patch(endpoint).body(data)?)
    }

    pub fn delete(&self, id: &R::Id) -> Result<()> {
        let endpoint = self.item_endpoint(id)?;
        self.execute(Request::delete(endpoint))?;
        Ok(())
    }
}
