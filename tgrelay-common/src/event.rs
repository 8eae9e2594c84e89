use serde::Serialize;

/// Direction of a membership change, as reported downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Joined,
    Left,
}

/// The four action flags the transport exposes for a chat-action event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipFlags {
    pub user_joined: bool,
    pub user_added: bool,
    pub user_left: bool,
    pub user_kicked: bool,
}

impl MembershipStatus {
    /// Joins and invite-adds count as "joined", leaves and kicks as "left".
    /// An event with none of the flags set is not a membership change and
    /// yields `None`.
    pub fn classify(flags: MembershipFlags) -> Option<MembershipStatus> {
        if flags.user_joined || flags.user_added {
            Some(MembershipStatus::Joined)
        } else if flags.user_left || flags.user_kicked {
            Some(MembershipStatus::Left)
        } else {
            None
        }
    }
}

/// Flat record posted to the external endpoint for each qualifying event.
///
/// Field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberEvent {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_bot: bool,
    pub timestamp: String,
    pub channel_name: String,
    pub status: MembershipStatus,
}
