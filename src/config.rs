/// Where every "Open app" control sends the visitor. The marketing site has
/// no further contract with the app beyond this full-page navigation.
pub const APP_URL: &str = "https://app.swiftshaadi.com";

/// Contact inbox rendered in the footer as a mailto link.
pub const CONTACT_EMAIL: &str = "contact@swiftshaadi.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_app_targets_the_production_app() {
        assert_eq!(APP_URL, "https://app.swiftshaadi.com");
    }

    #[test]
    fn contact_link_uses_the_swiftshaadi_inbox() {
        assert_eq!(CONTACT_EMAIL, "contact@swiftshaadi.com");
    }
}
