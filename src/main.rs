mod app;
mod config;

use config::Config;
use eyre::WrapErr;
use setlist_init::init;
use setlist_prompt::Prompt;
use setlist_spotify_api::auth::token::acquire_token_from;
use setlist_spotify_api::client::SpotifyClient;
use setlist_spotify_api::credentials::Credentials;
use tracing::debug;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let config = Config::from_env()?;
    let credentials = Credentials::from_env()?;
    debug!("{:?}", config);

    let grant = app::resolve_grant(&config, &credentials).await?;
    let token = acquire_token_from(&config.accounts_base, &credentials, &grant)
        .await
        .wrap_err("Failed to acquire access token")?;
    info!("Authenticated via {} grant", grant.name());

    let client = SpotifyClient::with_base_url(token, &config.api_base);
    let mut prompt = Prompt::stdio().with_attempts(config.selection_attempts);

    let outcome = app::run(&client, &config, &mut prompt).await?;
    println!("{}", outcome);

    Ok(())
}
