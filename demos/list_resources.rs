use anyhow::{Context, Result};
use optimizely::{ApiError, Client, Config, Error, ProjectId};
use tracing_subscriber::EnvFilter;

struct Args {
    project: Option<String>,
    timeout_ms: Option<u64>,
}

impl Args {
    pub fn from_env() -> Result<Self> {
        let mut args = pico_args::Arguments::from_env();
        Ok(Args {
            project: args.opt_value_from_str(["-p", "--project"])?,
            timeout_ms: args.opt_value_from_str(["-t", "--timeout-ms"])?,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::from_env()?;
    let token = std::env::var("OPTIMIZELY_TOKEN").context("OPTIMIZELY_TOKEN is not set")?;
    let mut config = Config::new(token);
    config.timeout_ms = args.timeout_ms;
    let client = Client::new(config)?;

    let projects = match client.projects().list() {
        Ok(projects) => projects,
        Err(Error::Api(ApiError::Authentication { message, .. })) => {
            println!("The token was rejected: {}", message);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    for project in &projects {
        println!("project {} {} ({:?})", project.id, project.name, project.status);
    }

    let project = match args.project {
        Some(project) => ProjectId::from(project),
        None => match projects.first() {
            Some(project) => project.id.clone(),
            None => {
                println!("No projects found.");
                return Ok(());
            }
        },
    };

    for experiment in client.experiments().list(&project)? {
        println!("experiment {} {} ({:?})", experiment.id, experiment.name, experiment.status);
    }
    for audience in client.audiences().list(&project)? {
        println!("audience {} {}", audience.id, audience.name);
    }
    for page in client.pages().list(&project)? {
        println!("page {} {} {}", page.id, page.name, page.edit_url.as_deref().unwrap_or("-"));
    }
    for campaign in client.campaigns().list(&project)? {
        println!("campaign {} {} ({:?})", campaign.id, campaign.name, campaign.status);
    }

    Ok(())
}
