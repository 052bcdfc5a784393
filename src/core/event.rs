//! Input events the interaction core reacts to.
//!
//! Every UI trigger on the page maps to one [`Event`]. Opens always carry a
//! [`Source`] tag naming which control the visitor used, so the analytics
//! trail can distinguish the call-to-action placements.

use super::draft::FormValues;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which control opened the waitlist modal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Source {
    /// "Sign In" link in the navbar.
    #[serde(rename = "nav_signin")]
    NavSignIn,
    /// "Get Started" button in the navbar.
    #[serde(rename = "nav_get_started")]
    NavGetStarted,
    /// Primary call-to-action in the hero section.
    #[serde(rename = "hero_cta")]
    HeroCta,
    /// Starter pricing tier button.
    #[serde(rename = "pricing_starter")]
    PricingStarter,
    /// Pro pricing tier button.
    #[serde(rename = "pricing_pro")]
    PricingPro,
    /// Enterprise pricing tier button.
    #[serde(rename = "pricing_enterprise")]
    PricingEnterprise,
}

impl Source {
    /// Every defined source tag, in page order.
    pub const ALL: [Source; 6] = [
        Source::NavSignIn,
        Source::NavGetStarted,
        Source::HeroCta,
        Source::PricingStarter,
        Source::PricingPro,
        Source::PricingEnterprise,
    ];

    /// The tag transmitted to the analytics collector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NavSignIn => "nav_signin",
            Self::NavGetStarted => "nav_get_started",
            Self::HeroCta => "hero_cta",
            Self::PricingStarter => "pricing_starter",
            Self::PricingPro => "pricing_pro",
            Self::PricingEnterprise => "pricing_enterprise",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the visitor dismissed the modal.
///
/// Both paths behave identically; the distinction only feeds logging.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CloseReason {
    /// The close button in the modal corner.
    Button,
    /// A click on the backdrop overlay.
    Backdrop,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Backdrop => "backdrop",
        }
    }
}

/// A discrete trigger fed into the transition function.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    /// A call-to-action opened the modal.
    Open { source: Source },
    /// The visitor dismissed the modal.
    Close { reason: CloseReason },
    /// The signup form was submitted.
    Submit { form: FormValues },
    /// The auto-dismiss timer elapsed after a successful signup.
    AutoCloseElapsed,
}

impl Event {
    /// Short trigger name for logging and history records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Close { .. } => "close",
            Self::Submit { .. } => "submit",
            Self::AutoCloseElapsed => "auto_close",
        }
    }
}
