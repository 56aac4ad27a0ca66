//! A client library for the Optimizely Web Experimentation REST API.
//!
//! ```no_run
//! use optimizely::{Client, Config, ProjectId};
//!
//! fn main() -> optimizely::Result<()> {
//!     let client = Client::new(Config::new("2:your-personal-access-token"))?;
//!     for project in client.projects().list()? {
//!         println!("{} {}", project.id, project.name);
//!     }
//!     let audiences = client.audiences().list(&ProjectId::from("1000"))?;
//!     println!("{} audiences", audiences.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backend;
pub mod client;
pub mod config;
pub mod resource;

pub use api::audience::{Audience, AudienceUpdate, NewAudience};
pub use api::campaign::{Campaign, CampaignStatus, CampaignUpdate, NewCampaign, ShareLink};
pub use api::error::{ApiError, ArgumentError, ConfigError, Error, ErrorDetails, Result};
pub use api::experiment::{
    Experiment, ExperimentStatus, ExperimentType, ExperimentUpdate, NewExperiment, Variation,
};
pub use api::id::{AccountId, AudienceId, CampaignId, ExperimentId, PageId, ProjectId, VariationId};
pub use api::page::{NewPage, Page, PageType, PageUpdate};
pub use api::project::{NewProject, Project, ProjectStatus, ProjectUpdate, WebSnippet};
pub use api::request::{Executor, Method, Payload, Request};
pub use client::Client;
pub use config::Config;
pub use resource::{Audiences, Campaigns, Experiments, Pages, Projects, Resource, ResourceClient};
