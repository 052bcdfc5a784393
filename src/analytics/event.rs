//! Event vocabulary and payload builders for the analytics trail.
//!
//! Two events and one identify call cover the whole flow. The signup
//! payload carries the email even though the identify call is keyed by
//! the same address; downstream joins rely on having it in both places.

use super::Properties;
use crate::core::{SignupDraft, Source};

/// Emitted when any call-to-action opens the waitlist modal.
pub const OPEN_WAITLIST_MODAL: &str = "open_waitlist_modal";

/// Emitted when the signup form is submitted with all fields present.
pub const WAITLIST_SIGNUP: &str = "waitlist_signup";

/// Trait value marking identities acquired through the landing page.
pub const LANDING_PAGE: &str = "landing_page";

/// Payload for [`OPEN_WAITLIST_MODAL`]: which control opened the modal.
pub fn open_properties(source: Source) -> Properties {
    let mut properties = Properties::new();
    properties.insert("source".to_string(), source.as_str().to_string());
    properties
}

/// Payload for [`WAITLIST_SIGNUP`]: the full submitted draft.
pub fn signup_properties(draft: &SignupDraft) -> Properties {
    let mut properties = Properties::new();
    properties.insert("email".to_string(), draft.email.clone());
    properties.insert("role".to_string(), draft.role.as_str().to_string());
    properties.insert("teamSize".to_string(), draft.team_size.as_str().to_string());
    properties
}

/// Traits attached to the identify call keyed by the submitted email.
pub fn identify_traits(draft: &SignupDraft) -> Properties {
    let mut traits = Properties::new();
    traits.insert("role".to_string(), draft.role.as_str().to_string());
    traits.insert("teamSize".to_string(), draft.team_size.as_str().to_string());
    traits.insert("source".to_string(), LANDING_PAGE.to_string());
    traits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Role, TeamSize};

    fn draft() -> SignupDraft {
        SignupDraft {
            email: "sarah@techflow.io".to_string(),
            role: Role::EngManager,
            team_size: TeamSize::ElevenToFifty,
        }
    }

    #[test]
    fn open_payload_carries_the_source_tag() {
        let properties = open_properties(Source::PricingEnterprise);

        assert_eq!(properties.len(), 1);
        assert_eq!(
            properties.get("source").map(String::as_str),
            Some("pricing_enterprise")
        );
    }

    #[test]
    fn signup_payload_carries_the_full_draft() {
        let properties = signup_properties(&draft());

        assert_eq!(properties.len(), 3);
        assert_eq!(
            properties.get("email").map(String::as_str),
            Some("sarah@techflow.io")
        );
        assert_eq!(
            properties.get("role").map(String::as_str),
            Some("eng_manager")
        );
        assert_eq!(
            properties.get("teamSize").map(String::as_str),
            Some("11-50")
        );
    }

    #[test]
    fn identify_traits_mark_the_landing_page() {
        let traits = identify_traits(&draft());

        assert_eq!(traits.len(), 3);
        assert_eq!(
            traits.get("source").map(String::as_str),
            Some("landing_page")
        );
        assert_eq!(traits.get("role").map(String::as_str), Some("eng_manager"));
        assert_eq!(traits.get("teamSize").map(String::as_str), Some("11-50"));
        assert!(!traits.contains_key("email"));
    }
}
