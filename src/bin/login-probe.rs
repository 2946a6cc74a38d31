//! CLI probe for the backend login endpoint.
//!
//! Runs the same login flow as the web form from a terminal, which makes it
//! easy to smoke-test a backend deployment without a browser.
//!
//! # Usage
//!
//! ```bash
//! # Print the endpoint a page path resolves to
//! cargo run --bin login-probe -- endpoint --page-path /dev/oauth/authorize
//!
//! # Log in interactively (prompts for email and password)
//! cargo run --bin login-probe -- login --stage dev --client-id abc \
//!     --redirect-uri https://app.example.com/cb --response-type "id_token token" \
//!     --scope "openid profile"
//! ```
//!
//! # Environment Variables
//!
//! - `BACKEND_URL` (required unless `--backend-url` is given)
//! - `LOGIN_PATH` (optional, default `/oauth/login`)
//!
//! # Exit Status
//!
//! `0` when the backend returned a redirect URI, `1` when it rejected the login.

use login_gateway::application::{CapturedNavigation, LoginController, SubmitOutcome};
use login_gateway::domain::endpoint::{self, DEFAULT_LOGIN_PATH, Stage};
use login_gateway::domain::error_response::ErrorKind;
use login_gateway::domain::login::OAuthParams;
use login_gateway::infrastructure::backend::HttpLoginBackend;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for probing the backend login endpoint.
#[derive(Parser)]
#[command(name = "login-probe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    target: Target,

    #[command(subcommand)]
    command: Commands,
}

/// Where the backend lives.
#[derive(Args)]
struct Target {
    /// Backend origin
    #[arg(long, env = "BACKEND_URL", global = true)]
    backend_url: Option<String>,

    /// Backend login path
    #[arg(long, env = "LOGIN_PATH", default_value = DEFAULT_LOGIN_PATH, global = true)]
    login_path: String,

    /// Stage prefix (prod, dev, test); overrides the page path marker
    #[arg(long, global = true)]
    stage: Option<Stage>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the backend URL a page path resolves to
    Endpoint {
        /// Page path the user would have loaded
        #[arg(long, default_value = "/oauth/authorize")]
        page_path: String,
    },

    /// Perform one login against the backend
    Login {
        #[command(flatten)]
        params: ParamArgs,

        /// Email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

/// OAuth parameters forwarded verbatim.
#[derive(Args)]
struct ParamArgs {
    #[arg(long)]
    client_id: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    nonce: Option<String>,
    #[arg(long)]
    redirect_uri: Option<String>,
    #[arg(long)]
    response_type: Option<String>,
    /// Space-separated scopes, e.g. "openid profile"
    #[arg(long)]
    scope: Option<String>,
}

impl From<ParamArgs> for OAuthParams {
    fn from(args: ParamArgs) -> Self {
        Self {
            client_id: args.client_id,
            state: args.state,
            nonce: args.nonce,
            redirect_uri: args.redirect_uri,
            response_type: args.response_type,
            scope: args.scope,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let backend_url = cli
        .target
        .backend_url
        .clone()
        .context("BACKEND_URL must be set (or pass --backend-url)")?;

    match cli.command {
        Commands::Endpoint { page_path } => {
            let stage = Stage::resolve(cli.target.stage, &page_path);
            let url = endpoint::login_endpoint(&backend_url, stage, &cli.target.login_path)
                .context("Failed to build backend URL")?;
            println!("{}", url);
        }
        Commands::Login {
            params,
            email,
            timeout,
        } => {
            let url = endpoint::login_endpoint(
                &backend_url,
                cli.target.stage,
                &cli.target.login_path,
            )
            .context("Failed to build backend URL")?;

            let succeeded = login(url, params.into(), email, timeout).await?;
            if !succeeded {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Prompts for missing credentials and runs one submission.
///
/// Returns whether the backend accepted the login.
async fn login(
    url: url::Url,
    params: OAuthParams,
    email: Option<String>,
    timeout: Option<u64>,
) -> Result<bool> {
    println!("{}", "🔑 Backend login".bright_blue().bold());
    println!("  Endpoint: {}", url.as_str().cyan());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let backend = HttpLoginBackend::new(timeout.map(Duration::from_secs))
        .context("Failed to create HTTP client")?;
    let controller = LoginController::new(
        Arc::new(backend),
        Arc::new(CapturedNavigation::new()),
        url,
        params,
    );
    controller.change("email", &email);
    controller.change("password", &password);

    println!();
    match controller.submit().await {
        SubmitOutcome::Navigated(target) => {
            println!("{}", "✅ Login accepted".green().bold());
            println!("  Redirect: {}", target.bright_yellow());
            Ok(true)
        }
        SubmitOutcome::Failed(error) => {
            let label = match error.kind {
                ErrorKind::Validation => "Validation error",
                ErrorKind::Server => "Server error",
                ErrorKind::Transport => "Transport error",
            };
            println!("{}", format!("❌ {}", label).red().bold());
            println!("  {}", error);
            Ok(false)
        }
        SubmitOutcome::Ignored | SubmitOutcome::Stale => {
            anyhow::bail!("submission did not run")
        }
    }
}
