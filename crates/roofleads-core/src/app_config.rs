#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub openai_api_key: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub search_radius_meters: u32,
    pub openai_model: String,
    pub maps_base_url: String,
    pub openai_base_url: String,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("openai_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("search_radius_meters", &self.search_radius_meters)
            .field("openai_model", &self.openai_model)
            .field("maps_base_url", &self.maps_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
