use app_core::{decode_links, encode_links, QuickLink, LINKS_STORAGE_KEY};
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted link list. Absent storage, a missing key, or
/// malformed JSON all fall back to the placeholder set.
pub fn load_links() -> Vec<QuickLink> {
    let stored = local_storage().and_then(|s| s.get_item(LINKS_STORAGE_KEY).ok().flatten());
    decode_links(stored.as_deref())
}

/// Persist the link list; failures are logged, never surfaced to the loop.
pub fn save_links(links: &[QuickLink]) {
    let json = match encode_links(links) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("{e}");
            return;
        }
    };
    match local_storage() {
        Some(s) => {
            if s.set_item(LINKS_STORAGE_KEY, &json).is_err() {
                log::warn!("failed to persist quick links");
            }
        }
        None => log::warn!("localStorage unavailable; quick links not persisted"),
    }
}
