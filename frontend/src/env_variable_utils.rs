use lazy_static::lazy_static;
use web_sys::window;

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

// Runtime configuration is injected by the hosting page as a global
// `ENV_CONFIG` object, so the same wasm bundle works across deployments.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::warn!("Environment variable '{}' is undefined", key);
        return None;
    }

    value.as_string()
}

pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL").unwrap_or_else(|| "http://localhost:8000".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Video Downloader".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
