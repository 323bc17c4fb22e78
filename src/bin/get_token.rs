//! One-shot CLI: authenticate an existing user and print a ready-to-run curl
//! command embedding the access token, for manual API testing.

use clap::Parser;
use std::process;
use tracing::Level;

use meddisupply_backend::provisioning::{self, cognito::CognitoProvider};

#[derive(Parser)]
#[command(
    name = "get_token",
    about = "Fetch an access token for an existing user and print a curl snippet"
)]
struct Args {
    /// Username of the existing account
    username: String,

    /// The account's password
    password: String,

    /// Cognito user pool id
    #[arg(long, env = "COGNITO_USER_POOL_ID")]
    user_pool_id: String,

    /// App client id used for the auth call
    #[arg(long, env = "COGNITO_CLIENT_ID")]
    client_id: String,

    /// Endpoint the printed curl command targets
    #[arg(long, default_value = "https://api.example.com/prod/reports/sales-report")]
    url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .compact()
        .init();

    let provider = CognitoProvider::from_env(args.user_pool_id, Some(args.client_id)).await;

    match provisioning::curl_snippet(&provider, &args.username, &args.password, &args.url).await {
        Ok(snippet) => println!("{snippet}"),
        Err(err) => {
            eprintln!("Error obtaining token for '{}': {err}", args.username);
            eprintln!("# Could not generate the curl command for '{}'.", args.username);
            process::exit(1);
        }
    }
}
