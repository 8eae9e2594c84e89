mod config;
mod logging;

const STARTUP_MESSAGE: &str = "Bot iniciado. Monitorando eventos do canal...";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::new();

    let _guard = logging::init(&config.log_dir)?;
    tracing::info!("Logging setup complete");

    let forwarder = tgrelay_forward::Forwarder::new(&tgrelay_forward::Config {
        post_url: config.post_url,
        auth_token: config.auth_token,
    });

    let service = tgrelay_monitor::MonitorService::new(
        tgrelay_monitor::Config {
            api_id: config.api_id,
            api_hash: config.api_hash,
            session_file: config.session_file,
            bot_token: config.bot_token,
            channel_id: config.channel_id,
            admin_group_id: config.admin_group_id,
        },
        forwarder,
    )?;

    service.authorize().await?;

    service.alert(STARTUP_MESSAGE).await;
    tracing::info!("{}", STARTUP_MESSAGE);

    service.run().await?;

    Ok(())
}
