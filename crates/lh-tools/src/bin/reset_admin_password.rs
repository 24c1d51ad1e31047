//! Reset the admin user's password directly in the database

use anyhow::{Context, Result};
use clap::Parser;
use lh_auth::{reset_admin_password, validate_new_password, Pbkdf2Sha256, ResetOutcome, SqlUserStore};
use lh_i18n::TranslationService;
use lh_tools::{password_too_short, render_not_found, render_reset, ResetArgs};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = ResetArgs::parse();

    let config = args.common.load_config()?;
    args.common.init_logging(&config)?;

    // Checked before any database work.
    if let Err(err) = validate_new_password(&args.new_password, config.password.min_length) {
        error!("{}", err);
        let i18n = TranslationService::from_dir(&config.i18n.locales_dir);
        eprintln!(
            "{}",
            password_too_short(&i18n, &args.common.lang, config.password.min_length)
        );
        return Ok(ExitCode::FAILURE);
    }

    println!("Resetting admin password...");

    let store = SqlUserStore::connect(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to connect to the database")?;
    let hasher = Pbkdf2Sha256::new(config.password.iterations);
    let lookup = args.admin_lookup(&config);

    let outcome = reset_admin_password(&store, &hasher, &lookup, &args.new_password).await;
    store.pool().close().await;

    match outcome.context("Failed to reset the admin password")? {
        ResetOutcome::Updated(user) => {
            info!("Admin password reset for user {}", user.id);
            print!("{}", render_reset(&user, &args.new_password));
            Ok(ExitCode::SUCCESS)
        }
        ResetOutcome::NotFound => {
            eprint!("{}", render_not_found(&lookup));
            Ok(ExitCode::FAILURE)
        }
    }
}
