use pdf2docx_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    pdf2docx_api::telemetry::init_telemetry();

    // Initialize the application (storage areas, state, routes)
    let (_state, router) = pdf2docx_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    pdf2docx_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
