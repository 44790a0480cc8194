use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "console_access_token";
const REFRESH_TOKEN_KEY: &str = "console_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn save(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn save_access_token(token: &str) {
    save(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    load(ACCESS_TOKEN_KEY)
}

pub fn save_refresh_token(token: &str) {
    save(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    load(REFRESH_TOKEN_KEY)
}

/// Clear both tokens, ending the persisted session.
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
