//! Runtime feature checks.
//!
//! A collaborator is used only when its `use_*` flag is set in the
//! configuration AND its endpoint is configured. Anything else falls back to
//! local behaviour.

use little_lemon_config::AppConfig;

/// `true` when the flag is set and the section/value it needs is present.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check whether slots should be looked up remotely.
pub fn is_remote_availability_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(
        config.use_remote_availability,
        config
            .booking
            .as_ref()
            .and_then(|booking| booking.availability_url.as_ref()),
    )
}

/// Check whether reservations should be submitted remotely.
pub fn is_remote_submission_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(
        config.use_remote_submission,
        config
            .booking
            .as_ref()
            .and_then(|booking| booking.submit_url.as_ref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use little_lemon_config::BookingConfig;

    #[test]
    fn test_flag_without_url_is_disabled() {
        let mut config = AppConfig::local("127.0.0.1", 8080);
        config.use_remote_availability = true;
        config.use_remote_submission = true;
        assert!(!is_remote_availability_enabled(&config));
        assert!(!is_remote_submission_enabled(&config));
    }

    #[test]
    fn test_url_without_flag_is_disabled() {
        let mut config = AppConfig::local("127.0.0.1", 8080);
        config.booking = Some(BookingConfig {
            availability_url: Some("http://slots.local/slots".into()),
            submit_url: Some("http://slots.local/submit".into()),
            ..Default::default()
        });
        assert!(!is_remote_availability_enabled(&config));

        config.use_remote_availability = true;
        assert!(is_remote_availability_enabled(&config));
        assert!(!is_remote_submission_enabled(&config));
    }
}
