use printq_core::Config;

// mimalloc keeps allocator behavior predictable on musl-based container images.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    printq_api::telemetry::init_tracing(config.is_production());

    let (_state, router) = printq_api::setup::initialize_app(config.clone()).await?;

    printq_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
