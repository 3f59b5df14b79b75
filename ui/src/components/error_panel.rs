use yew::prelude::*;

const FALLBACK_MESSAGE: &str = "Failed to fetch data.";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
}

/// Shown in place of results when a request fails.
#[function_component]
pub fn ErrorPanel(props: &Props) -> Html {
    let message = if props.message.trim().is_empty() {
        FALLBACK_MESSAGE
    } else {
        props.message.as_str()
    };

    html! {
        <div class="bg-red-900/20 border border-red-800 rounded-lg p-6 text-center">
            <p class="text-red-400">{format!("Error: {message}")}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(message: &'static str) -> String {
        ServerRenderer::<ErrorPanel>::with_props(move || Props {
            message: message.into(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn shows_message() {
        let html = render("Could not find user by login name: nobody").await;
        assert!(html.contains("Error: Could not find user by login name: nobody"));
    }

    #[tokio::test]
    async fn blank_message_falls_back() {
        assert!(render(" ").await.contains("Error: Failed to fetch data."));
    }
}
