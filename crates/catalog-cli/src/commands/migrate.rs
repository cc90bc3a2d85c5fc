//! Database migration command.

use catalog_core::error::AppError;

/// Execute the migrate command
pub async fn execute(env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    println!("Running database migrations...");
    catalog_database::migration::run_migrations(&pool).await?;
    println!("All migrations applied successfully.");

    Ok(())
}
