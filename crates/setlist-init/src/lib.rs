/// Install error reporting, load `.env` and start the tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for the interactive prompts.
pub fn init() -> eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env is fine, the variables may come from the shell.
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
