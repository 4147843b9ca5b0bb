pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::AppConfig;
use crate::modules::about::AboutStore;
use crate::modules::blog::BlogStore;
use crate::modules::hero::HeroStore;
use crate::modules::preferences::PreferencesStore;
use crate::modules::project::application::views::technology_view;
use crate::modules::project::{ProjectStore, ProjectsState};
use crate::modules::resume::ResumeStore;
use crate::modules::skill::SkillStore;
use crate::modules::testimonial::TestimonialStore;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::persistence::{seed_defaults, FileStorage, KeyValueStorage, Seed, StorageError};
use crate::shared::remote::{RemoteDataService, RestTableClient, UnconfiguredRemote};
use crate::shared::view::DerivedView;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tokio::sync::Mutex;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectStore>,
    pub skills: Arc<SkillStore>,
    pub blog: Arc<BlogStore>,
    pub preferences: Arc<PreferencesStore>,
    pub hero: Arc<HeroStore>,
    pub about: Arc<AboutStore>,
    pub resume: Arc<ResumeStore>,
    pub testimonials: Arc<TestimonialStore>,
    pub technologies: Arc<Mutex<DerivedView<ProjectsState, Vec<String>>>>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub remote: Arc<dyn RemoteDataService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn KeyValueStorage>, remote: Arc<dyn RemoteDataService>) -> Self {
        let projects = Arc::new(ProjectStore::load(Arc::clone(&storage)));
        let technologies = Arc::new(Mutex::new(technology_view(&projects)));

        Self {
            skills: Arc::new(SkillStore::load(Arc::clone(&storage))),
            blog: Arc::new(BlogStore::load(Arc::clone(&storage))),
            preferences: Arc::new(PreferencesStore::load(Arc::clone(&storage))),
            hero: Arc::new(HeroStore::new(Arc::clone(&remote))),
            about: Arc::new(AboutStore::new(Arc::clone(&remote))),
            resume: Arc::new(ResumeStore::new(Arc::clone(&remote))),
            testimonials: Arc::new(TestimonialStore::new(Arc::clone(&remote))),
            projects,
            technologies,
            storage,
            remote,
        }
    }

    /// Loads every remote-backed store. Failures leave that store on its
    /// defaults with the error recorded in its state.
    pub async fn hydrate(&self) {
        let (hero, about, resume, testimonials) = tokio::join!(
            self.hero.fetch(),
            self.about.fetch(),
            self.resume.fetch(),
            self.testimonials.fetch(),
        );

        let failures = [hero.is_err(), about.is_err(), resume.is_err(), testimonials.is_err()]
            .iter()
            .filter(|failed| **failed)
            .count();
        if failures > 0 {
            warn!("{failures} remote store(s) are serving defaults");
        }
    }
}

fn default_seeds() -> Result<Vec<Seed>, StorageError> {
    Ok(vec![
        ProjectStore::seed()?,
        SkillStore::seed()?,
        BlogStore::seed()?,
        PreferencesStore::seed()?,
    ])
}

fn remote_from_config(config: &AppConfig) -> anyhow::Result<Arc<dyn RemoteDataService>> {
    match &config.remote {
        Some(remote) => {
            info!("Remote data service: {}", remote.url);
            let client = RestTableClient::new(&remote.url, &remote.api_key, remote.timeout)?;
            Ok(Arc::new(client))
        }
        None => {
            warn!("REMOTE_URL not set; profile content will use defaults");
            Ok(Arc::new(UnconfiguredRemote))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    info!("Environment: {}", config.environment);

    let storage = FileStorage::open(config.data_dir.clone())?;
    info!("Data directory: {}", storage.dir().display());
    seed_defaults(&storage, &default_seeds()?)?;
    let storage: Arc<dyn KeyValueStorage> = Arc::new(storage);

    let remote = remote_from_config(&config)?;
    let state = AppState::new(storage, remote);
    state.hydrate().await;

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Persisted content
    cfg.configure(crate::modules::project::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::skill::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::blog::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::preferences::adapter::incoming::web::routes::configure);
    // Remote-backed content
    cfg.configure(crate::modules::hero::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::about::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::resume::adapter::incoming::web::routes::configure);
    cfg.configure(crate::modules::testimonial::adapter::incoming::web::routes::configure);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
