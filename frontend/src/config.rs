use web_sys::window;

const DEV_API_URL: &str = "http://127.0.0.1:8080";

pub fn get_api_base_url() -> String {
    // Set at build time when the API lives on another origin
    if let Some(url) = option_env!("LUCKY_DRAW_API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
            // Served by the backend itself
            return format!("{}//{}", protocol, host);
        }
    }

    DEV_API_URL.to_string()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

/// Prefills the admin console when the build is made for a single event.
pub fn default_admin_secret() -> String {
    option_env!("LUCKY_DRAW_ADMIN_SECRET").unwrap_or_default().to_string()
}
