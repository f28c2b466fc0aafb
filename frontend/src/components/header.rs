use shared::copy::{APP_NAME, APP_TAGLINE};
use yew::prelude::*;

/// Liveness of the classification service, shown as a header badge only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceHealth {
    Checking,
    Online { model_loaded: bool },
    Offline,
}

/// Renders the application header
pub fn render_header(health: &ServiceHealth) -> Html {
    let (class, text) = match health {
        ServiceHealth::Checking => ("status-checking", "Checking service..."),
        ServiceHealth::Online { model_loaded: true } => ("status-online", "Service online"),
        ServiceHealth::Online { model_loaded: false } => ("status-degraded", "Service online, model not loaded"),
        ServiceHealth::Offline => ("status-offline", "Service unreachable"),
    };

    html! {
        <header class="app-header">
            <div class="header-content">
                <div class="logo">
                    <div class="logo-icon">{"D"}</div>
                    <span>{ APP_NAME }</span>
                </div>
                <nav>
                    <span class="subtitle">{ APP_TAGLINE }</span>
                    <span class={classes!("service-status", class)}>{ text }</span>
                </nav>
            </div>
        </header>
    }
}
