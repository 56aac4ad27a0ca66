use crate::{
    api::{
        error::Result,
        request::{Executor, Payload, Request},
    },
    backend::rest::Server,
    config::Config,
    resource::{Audiences, Campaigns, Experiments, Pages, Projects, ResourceClient},
};
use std::{fmt, sync::Arc};

/// An Optimizely client.
///
/// This is the heart of this library.
/// It owns one [`Executor`] and hands out one facade per collection,
/// e.g. [`Client::experiments`]. All methods take `&self`; a client can be
/// shared between threads.
pub struct Client {
    executor: Arc<dyn Executor>,
    projects: Projects,
    experiments: Experiments,
    audiences: Audiences,
    pages: Pages,
    campaigns: Campaigns,
}

impl Client {
    /// Create a `Client` for the Optimizely REST API.
    ///
    /// Fails if the token in `config` is empty or malformed.
    pub fn new(config: Config) -> Result<Self> {
        let server = Server::new(&config)?;
        Ok(Client::with_executor(Arc::new(server)))
    }

    /// Create a `Client` sending its requests through `executor`.
    pub fn with_executor(executor: Arc<dyn Executor>) -> Self {
        Client {
            projects: ResourceClient::new(Arc::clone(&executor)),
            experiments: ResourceClient::new(Arc::clone(&executor)),
            audiences: ResourceClient::new(Arc::clone(&executor)),
            pages: ResourceClient::new(Arc::clone(&executor)),
            campaigns: ResourceClient::new(Arc::clone(&executor)),
            executor,
        }
    }

    pub fn projects(&self) -> &Projects {
        &self.projects
    }

    pub fn experiments(&self) -> &Experiments {
        &self.experiments
    }

    pub fn audiences(&self) -> &Audiences {
        &self.audiences
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    pub fn campaigns(&self) -> &Campaigns {
        &self.campaigns
    }

    /// Send a request to an endpoint that has no typed facade.
    pub fn request(&self, request: Request<'_>) -> Result<Payload> {
        self.executor.execute(request)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
