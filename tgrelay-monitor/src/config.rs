use std::path::PathBuf;

pub struct Config {
    pub api_id: i32,
    pub api_hash: String,
    pub session_file: PathBuf,
    pub bot_token: String,
    pub channel_id: i64,
    pub admin_group_id: i64,
}
