//! Chat Relay Helpers

use uuid::Uuid;

/// Returns the supplied thread id, or a fresh simple-form UUID when it is
/// absent or blank. A non-blank id is returned byte for byte.
pub fn get_or_create_thread_id(thread_id: Option<&str>) -> String {
    match thread_id {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => Uuid::new_v4().simple().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_supplied_id() {
        assert_eq!(get_or_create_thread_id(Some(" abc ")), " abc ");
    }

    #[test]
    fn mints_for_missing_or_blank() {
        let minted = get_or_create_thread_id(None);
        assert_eq!(minted.len(), 32);
        assert!(minted.chars().all(|c| c.is_ascii_hexdigit()));

        let blank = get_or_create_thread_id(Some("  "));
        assert_eq!(blank.len(), 32);
        assert_ne!(minted, blank);
    }
}
