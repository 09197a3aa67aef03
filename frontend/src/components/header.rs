use yew::prelude::*;

/// Renders the application header with the model service status badge
pub fn render_header(backend_online: Option<bool>) -> Html {
    let (badge_class, badge_text) = match backend_online {
        Some(true) => ("status-badge online", "Model service online"),
        Some(false) => ("status-badge offline", "Model service unreachable"),
        None => ("status-badge checking", "Checking model service..."),
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-fire"></i> {" Flamescope"}</h1>
            <p class="subtitle">
                {"If you suspect there might be a fire nearby, upload a photo that clearly shows the site."}
            </p>
            <span class={badge_class}>{ badge_text }</span>
        </header>
    }
}
