use chrono::Utc;
use grammers_tl_types as tl;
use tgrelay_common::event::{MemberEvent, MembershipFlags, MembershipStatus};
use tgrelay_common::time::{format_local, resolve_event_time};

use crate::{MonitorResult, MonitorService, peer_from_bot_api_id};

/// User fields carried into the outbound record, whichever way the user
/// was resolved.
pub(crate) struct UserProfile {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_bot: bool,
}

impl From<&tl::types::User> for UserProfile {
    fn from(user: &tl::types::User) -> Self {
        UserProfile {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            is_bot: user.bot,
        }
    }
}

/// Membership changes described by a service-message action: each affected
/// user id with the transport's four action flags.
///
/// Adding yourself (or coming in through an invite link or a join request)
/// is a join; being added by someone else is an add. Symmetrically, leaving
/// on your own is a leave and being removed by someone else is a kick.
pub(crate) fn membership_changes(
    action: &tl::enums::MessageAction,
    sender_id: Option<i64>,
) -> Vec<(i64, MembershipFlags)> {
    match action {
        tl::enums::MessageAction::ChatAddUser(add) => add
            .users
            .iter()
            .map(|&user_id| {
                let joined = sender_id == Some(user_id);
                (
                    user_id,
                    MembershipFlags {
                        user_joined: joined,
                        user_added: !joined,
                        ..MembershipFlags::default()
                    },
                )
            })
            .collect(),

        tl::enums::MessageAction::ChatJoinedByLink(_)
        | tl::enums::MessageAction::ChatJoinedByRequest => sender_id
            .map(|user_id| {
                (
                    user_id,
                    MembershipFlags {
                        user_joined: true,
                        ..MembershipFlags::default()
                    },
                )
            })
            .into_iter()
            .collect(),

        tl::enums::MessageAction::ChatDeleteUser(del) => {
            let kicked = sender_id.is_some() && sender_id != Some(del.user_id);
            vec![(
                del.user_id,
                MembershipFlags {
                    user_left: !kicked,
                    user_kicked: kicked,
                    ..MembershipFlags::default()
                },
            )]
        }

        _ => Vec::new(),
    }
}

/// Changes for one action message after the channel filter: actions in any
/// chat other than the monitored one produce nothing.
pub(crate) fn channel_changes(
    chat_id: i64,
    monitored_id: i64,
    action: &tl::enums::MessageAction,
    sender_id: Option<i64>,
) -> Vec<(i64, MembershipFlags)> {
    if chat_id != monitored_id {
        return Vec::new();
    }

    membership_changes(action, sender_id)
}

/// Whether the message sender's profile belongs to the affected user, so
/// the sender can stand in for it without an API lookup.
pub(crate) fn sender_covers(sender_id: Option<i64>, user_id: i64) -> bool {
    sender_id == Some(user_id)
}

impl MonitorService {
    pub(crate) async fn handle_update(&self, update: grammers_client::Update) -> MonitorResult<()> {
        let grammers_client::Update::NewMessage(message) = update else {
            return Ok(());
        };

        let Some(action) = message.action() else {
            return Ok(());
        };

        let peer_id = message.peer_ref().id;
        let monitored_id = peer_from_bot_api_id(self.config.channel_id).bare_id();

        let sender = message.sender();
        let sender_id = sender.as_ref().map(|peer| peer.id().bare_id());

        let changes = channel_changes(peer_id.bare_id(), monitored_id, action, sender_id);
        if changes.is_empty() {
            if peer_id.bare_id() == monitored_id {
                // Not a membership change (pin, photo change, ...)
                tracing::debug!(?peer_id, "ignoring non-membership chat action");
            }
            return Ok(());
        }

        let Some(channel) = message.peer().ok() else {
            tracing::warn!("Channel is unavailable, skipping event");
            return Ok(());
        };

        for (user_id, flags) in changes {
            let Some(status) = MembershipStatus::classify(flags) else {
                continue;
            };

            let profile = if sender_covers(sender_id, user_id) {
                match &sender {
                    Some(grammers_client::types::Peer::User(user)) => Some(UserProfile {
                        id: user.bare_id(),
                        username: user.username().map(str::to_string),
                        first_name: user.first_name().map(str::to_string),
                        last_name: user.last_name().map(str::to_string),
                        phone: user.phone().map(str::to_string),
                        is_bot: user.is_bot(),
                    }),
                    _ => None,
                }
            } else {
                self.lookup_user(message.id(), user_id).await
            };

            let Some(user) = profile else {
                tracing::warn!(user_id, "User is unavailable, skipping event");
                continue;
            };

            let event_time = resolve_event_time(Some(message.date()), None, Utc::now());
            let timestamp = format_local(event_time);
            tracing::info!(%timestamp, "resolved event timestamp");

            let record = MemberEvent {
                id: user.id,
                username: user.username,
                first_name: user.first_name,
                last_name: user.last_name,
                phone: user.phone,
                is_bot: user.is_bot,
                timestamp,
                channel_name: channel.name().to_string(),
                status,
            };

            tracing::info!(?record, "forwarding membership event");

            match self.forwarder.forward(&record).await {
                Ok(status) => tracing::info!("Data posted successfully: {}", status),
                Err(error) => {
                    tracing::error!("Failed to post data: {}", error);
                    self.alert(&format!("Failed to post data: {error}")).await;
                }
            }
        }

        Ok(())
    }

    /// Resolve a user referenced by an action message through the API.
    /// The message-scoped input user works for adds and kicks where the
    /// affected user is not the sender and no access hash is cached.
    async fn lookup_user(&self, msg_id: i32, user_id: i64) -> Option<UserProfile> {
        let peer = tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
            channel_id: peer_from_bot_api_id(self.config.channel_id).bare_id(),
            access_hash: 0,
        });

        let request = tl::functions::users::GetUsers {
            id: vec![tl::enums::InputUser::FromMessage(
                tl::types::InputUserFromMessage {
                    peer,
                    msg_id,
                    user_id,
                },
            )],
        };

        match self.client.invoke(&request).await {
            Ok(users) => users.into_iter().find_map(|user| match user {
                tl::enums::User::User(user) if user.id == user_id => {
                    Some(UserProfile::from(&user))
                }
                _ => None,
            }),
            Err(error) => {
                tracing::debug!(%error, user_id, "user lookup failed");
                None
            }
        }
    }
}
