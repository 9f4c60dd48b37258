use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without .svg)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const LOGO: &str = "logo";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const LOADER: &str = "loader";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const USER: &str = "user";
    pub const STAR: &str = "star";
    pub const SEND: &str = "send";
    pub const GOOGLE: &str = "google";
    pub const GITHUB: &str = "github";
}
