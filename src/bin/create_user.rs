//! One-shot CLI: create an account in the user pool, make its password
//! permanent, and place it in a group.
//!
//! Usage:
//!   create_user cliente.nuevo 'P@ssword123!' cliente.nuevo@email.com clientes
//!
//! Quote the password if it contains shell metacharacters.

use clap::Parser;
use std::process;
use tracing::Level;

use meddisupply_backend::provisioning::{self, cognito::CognitoProvider, ProvisionError};

#[derive(Parser)]
#[command(
    name = "create_user",
    about = "Create a user in the identity provider and assign it to a group"
)]
struct Args {
    /// Username for the new account
    username: String,

    /// Password (set permanent immediately, no reset challenge)
    password: String,

    /// Email address (marked verified)
    email: String,

    /// Group the account joins (must already exist in the pool)
    group: String,

    /// Cognito user pool id
    #[arg(long, env = "COGNITO_USER_POOL_ID")]
    user_pool_id: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let provider = CognitoProvider::from_env(args.user_pool_id, None).await;

    match provisioning::create_user_with_group(
        &provider,
        &args.username,
        &args.password,
        &args.email,
        &args.group,
    )
    .await
    {
        Ok(()) => {
            println!(
                "User '{}' is ready and in group '{}'.",
                args.username, args.group
            );
        }
        Err(err) => {
            match &err {
                ProvisionError::UserExists(_)
                | ProvisionError::GroupNotFound(_)
                | ProvisionError::PasswordPolicy => eprintln!("Error: {err}"),
                _ => eprintln!("Unexpected error: {err}"),
            }
            process::exit(1);
        }
    }
}
