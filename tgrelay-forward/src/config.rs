pub struct Config {
    pub post_url: String,
    pub auth_token: String,
}
