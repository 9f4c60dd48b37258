//! Fixed delays standing in for network requests that are not implemented
//!
//! None of the forms talk to a backend. They wait for one of these delays,
//! log what they would have sent, and update local state.

/// Simulated login request
pub const LOGIN_DELAY_MS: u32 = 1_500;
/// Simulated account creation
pub const SIGNUP_DELAY_MS: u32 = 1_500;
/// Simulated "send code" email
pub const SEND_CODE_DELAY_MS: u32 = 1_500;
/// Simulated code check
pub const VERIFY_CODE_DELAY_MS: u32 = 1_500;
/// Simulated "resend code" email
pub const RESEND_CODE_DELAY_MS: u32 = 1_000;
/// Simulated contact form submission
pub const CONTACT_DELAY_MS: u32 = 1_000;

/// Wait `ms` milliseconds in the browser. Resolves immediately on the server.
pub async fn simulate_latency(ms: u32) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(feature = "hydrate"))]
    let _ = ms;
}

/// Run `then` after a simulated request of `ms` milliseconds
pub fn after_latency(ms: u32, then: impl FnOnce() + 'static) {
    leptos::task::spawn_local(async move {
        simulate_latency(ms).await;
        then();
    });
}
