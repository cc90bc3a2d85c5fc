//! Sample data seeding command.
//!
//! Populates the store with generated services and versions for
//! development and testing. Skips seeding when data already exists.

use clap::Args;
use rand::Rng;

use catalog_core::error::AppError;
use catalog_database::repositories::service::ServiceRepository;
use catalog_database::repositories::version::VersionRepository;
use catalog_entity::service::{CreateService, CreateServiceVersion};

const ADJECTIVES: &[&str] = &[
    "Contoso", "Notifications", "Billing", "Identity", "Inventory", "Shipping", "Analytics",
    "Payments", "Search", "Reporting",
];

const DOMAINS: &[&str] = &[
    "API", "Gateway", "Service", "Hub", "Platform", "Registry", "Broker", "Engine", "Portal",
    "Connector", "Pipeline", "Directory",
];

const AUTHORS: &[&str] = &["J. Smith", "A. Suzuki", "M. Garcia", "L. Chen", "P. Novak"];

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of services to create
    #[arg(long, default_value = "50")]
    pub services: u32,

    /// Maximum number of versions per service (each gets at least 1)
    #[arg(long, default_value = "20")]
    pub max_versions: u32,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    catalog_database::migration::run_migrations(&pool).await?;

    let service_repo = ServiceRepository::new(pool.clone());
    let version_repo = VersionRepository::new(pool);

    if version_repo.count().await? > 0 {
        println!("Store already contains data, skipping seed.");
        return Ok(());
    }

    let max_versions = args.max_versions.max(1);
    let mut rng = rand::rng();
    let mut total_versions = 0u32;

    for i in 0..args.services {
        let adjective = ADJECTIVES[(i as usize) % ADJECTIVES.len()];
        let domain = DOMAINS[(i as usize / ADJECTIVES.len()) % DOMAINS.len()];
        let name = format!("{adjective} {domain} {i}");
        let slug = name.to_lowercase().replace(' ', "-");
        let url = format!("https://{slug}.example.com/api");

        let author = if rng.random_bool(0.7) {
            Some(AUTHORS[rng.random_range(0..AUTHORS.len())].to_string())
        } else {
            None
        };

        let service = service_repo
            .insert(&CreateService {
                name: name.clone(),
                description: format!("The {name} service"),
                url: url.clone(),
                organization: None,
                author: author.clone(),
            })
            .await?;

        let version_count = rng.random_range(1..=max_versions);
        for major in 1..=version_count {
            let version = format!(
                "{major}.{}.{}",
                rng.random_range(0..10),
                rng.random_range(0..10)
            );
            version_repo
                .insert(&CreateServiceVersion {
                    service_id: service.id,
                    version: version.clone(),
                    description: format!("Release {version} of {name}"),
                    url: format!("{url}/{version}/"),
                    author: author.clone(),
                })
                .await?;
            total_versions += 1;
        }
    }

    println!(
        "Seeded {} services with {} versions.",
        args.services, total_versions
    );

    Ok(())
}
