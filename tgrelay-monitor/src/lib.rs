mod config;
mod error;
mod update;

use std::mem::MaybeUninit;
use std::sync::Arc;

pub use config::Config;
pub use error::*;
use tgrelay_forward::Forwarder;
use tokio::sync::mpsc::UnboundedReceiver;

#[cfg(test)]
mod tests;

pub struct MonitorService {
    client: grammers_client::Client,
    config: Config,
    // need to store to keep session alive
    handle: grammers_mtsender::SenderPoolHandle,
    updates: MaybeUninit<UnboundedReceiver<grammers_session::updates::UpdatesLike>>,
    forwarder: Forwarder,
}

impl MonitorService {
    pub fn new(config: Config, forwarder: Forwarder) -> MonitorResult<Self> {
        let session = Arc::new(grammers_session::storages::SqliteSession::open(
            &config.session_file,
        )?);
        let sender_pool = grammers_mtsender::SenderPool::new(Arc::clone(&session), config.api_id);
        let client = grammers_client::client::Client::new(&sender_pool);

        let grammers_mtsender::SenderPool {
            runner,
            updates,
            handle,
        } = sender_pool;

        tokio::spawn(runner.run());

        Ok(MonitorService {
            client,
            handle,
            updates: MaybeUninit::new(updates),
            config,
            forwarder,
        })
    }

    pub async fn authorize(&self) -> MonitorResult<()> {
        tracing::info!("Checking authorization status...");

        if self.client.is_authorized().await? {
            self.log_credentials().await?;
            return Ok(());
        }

        tracing::info!("Not authorized, signing in with the bot token...");

        self.client
            .bot_sign_in(&self.config.bot_token, &self.config.api_hash)
            .await?;

        self.log_credentials().await?;

        Ok(())
    }

    async fn log_credentials(&self) -> MonitorResult<()> {
        let me = self.client.get_me().await?;
        tracing::info!(
            "Logged in as: {} (ID: {})",
            me.username().unwrap_or("N/A"),
            me.bare_id()
        );
        Ok(())
    }

    /// Block on the update stream until the transport fails. Per-event
    /// handler errors are logged and processing continues; a transport
    /// error is fatal and is reported to the admin group before being
    /// returned.
    pub async fn run(mut self) -> MonitorResult<()> {
        let mut updates = self.client.stream_updates(
            unsafe { self.updates.assume_init_read() },
            grammers_client::UpdatesConfiguration {
                catch_up: false,
                ..Default::default()
            },
        );

        tracing::info!("Start listening for updates...");

        let error = loop {
            match updates.next().await {
                Ok(update) => {
                    if let Err(e) = self.handle_update(update).await {
                        tracing::error!("Error handling update: {}", e);
                    }
                }
                Err(e) => break e,
            }
        };

        tracing::error!("Bot stopped due to error: {}", error);
        self.alert(&format!("Bot stopped due to error: {error}"))
            .await;

        tracing::info!("Saving session file...");
        updates.sync_update_state();

        self.handle.quit();

        Err(error.into())
    }

    /// Best-effort alert to the admin group. A failure of the alert itself
    /// is logged, never propagated.
    pub async fn alert(&self, text: &str) {
        if let Err(error) = self.send_to_admin(text).await {
            tracing::error!("Failed to send alert message: {}", error);
        }
    }

    async fn send_to_admin(&self, text: &str) -> MonitorResult<()> {
        let group = peer_from_bot_api_id(self.config.admin_group_id);
        self.client.send_message(group, text).await?;
        Ok(())
    }
}

/// Map a Bot API style chat id onto a typed peer: ids below `-100…` are
/// channel-kind (supergroups and broadcast channels), other negative ids
/// are basic groups, and positive ids are users. A bare positive channel
/// id passes through unchanged as far as `bare_id()` is concerned.
pub(crate) fn peer_from_bot_api_id(id: i64) -> grammers_session::types::PeerId {
    const CHANNEL_MARKER: i64 = -1_000_000_000_000;

    if id <= CHANNEL_MARKER {
        grammers_session::types::PeerId::channel(CHANNEL_MARKER - id)
    } else if id < 0 {
        grammers_session::types::PeerId::group(-id)
    } else {
        grammers_session::types::PeerId::user(id)
    }
}
