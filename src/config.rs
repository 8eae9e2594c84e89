use std::path::PathBuf;

#[derive(serde::Deserialize)]
pub(crate) struct Config {
    pub api_id: i32,
    pub api_hash: String,
    pub channel_id: i64,
    pub admin_group_id: i64,
    pub post_url: String,
    pub auth_token: String,
    pub bot_token: String,

    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_session_file() -> PathBuf {
    PathBuf::from("tgrelay.session")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let env_config = config::Environment::default().try_parsing(true);

        let mut conf_builder = config::Config::builder().add_source(env_config);

        if std::path::Path::new("Settings.toml").exists() {
            conf_builder = conf_builder.add_source(config::File::with_name("./Settings.toml"));
        }

        conf_builder
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap_or_else(|e| panic!("Error parsing config: {e}"))
    }
}
