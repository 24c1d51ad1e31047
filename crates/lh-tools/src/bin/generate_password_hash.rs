//! Print a PBKDF2-SHA256 hash for a password and the SQL that stores it

use anyhow::Result;
use clap::Parser;
use lh_auth::{PasswordHasher, Pbkdf2Sha256};
use lh_tools::{render_generated, GenerateArgs};
use tracing::info;

fn main() -> Result<()> {
    let args = GenerateArgs::parse();

    let config = args.common.load_config()?;
    args.common.init_logging(&config)?;

    let hasher = Pbkdf2Sha256::new(config.password.iterations);
    let hash = hasher.hash_password(&args.password);
    info!("Generated password hash ({} iterations)", hasher.iterations());

    print!("{}", render_generated(&args.password, &hash, &config.admin.email));
    Ok(())
}
