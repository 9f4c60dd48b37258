//! Core content tables and framework-free logic for the thumbly site

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod counter;
pub mod otp;
pub mod routes;
pub mod validation;

pub use content::{
    FEATURES, Feature, LegalDoc, NAV_LINKS, NavLink, PRICING_PLANS, PricingPlan, STATS, Stat,
};
pub use counter::CountUp;
pub use otp::{OtpFlow, Step};
pub use routes::{AppRoute, shows_chrome};
pub use validation::FormError;
