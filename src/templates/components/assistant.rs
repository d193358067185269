use crate::assistant::{ChatMessage, Role};
use maud::{html, Markup};

pub fn assistant_panel(transcript: &[ChatMessage]) -> Markup {
    html! {
        section class="card" id="assistant-panel" {
            h2 { "Ask about these properties" }

            ol class="transcript" {
                @for message in transcript {
                    @let who = match message.role {
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    };
                    li class=(format!("message {who}")) {
                        span class="sent-at" { (message.sent_at.format("%H:%M")) }
                        p { (message.content) }
                    }
                }
            }

            form
                action="/assistant"
                method="get"
                hx-get="/assistant"
                hx-target="#assistant-panel"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
            {
                label class="sr-only" for="q" { "Question" }
                input type="text" id="q" name="q" placeholder="Which one has more space for the price?" required;
                button type="submit" class="primary" { "Ask" }
            }
        }
    }
}
