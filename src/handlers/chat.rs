use actix_web::{web, HttpResponse, Result};

use crate::models::ChatRequest;
use crate::AppState;

/// POST /api/chat. All search failures are folded into the reply payload,
/// so this handler always answers 200 for well-formed JSON.
pub async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let reply = state.chat_service.handle(&req.message).await;
    Ok(HttpResponse::Ok().json(reply))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use std::sync::Arc;

    use crate::config::Config;
    use crate::models::ChatReply;
    use crate::routes::api;
    use crate::services::{ChatService, RuleTable, SearchClient};
    use crate::AppState;

    /// State with placeholder credentials: any search attempt fails with
    /// the configuration error before touching the network.
    fn unconfigured_state() -> AppState {
        let config = Config::default();
        let backend = Arc::new(SearchClient::new(config.search.clone()));
        AppState {
            chat_service: ChatService::new(RuleTable::default(), backend, config.search.max_results),
            config,
            start_time: std::time::Instant::now(),
        }
    }

    async fn post_chat(message: &str) -> ChatReply {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unconfigured_state()))
                .service(api::config()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({ "message": message }))
            .to_request();
        test::call_and_read_body_json(&app, req).await
    }

    #[actix_web::test]
    async fn empty_message_prompts_for_input() {
        let reply = post_chat("").await;
        assert_eq!(reply.reply, "Please send a message.");
        assert!(reply.meta.is_none());
    }

    #[actix_web::test]
    async fn rule_phrase_answers_without_search() {
        let reply = post_chat("help").await;
        assert_eq!(
            reply.reply,
            RuleTable::default().lookup("help").unwrap()
        );
        assert!(reply.meta.is_none());
    }

    #[actix_web::test]
    async fn forced_search_surfaces_configuration_error() {
        let reply = post_chat("search: rust web framework").await;
        assert_eq!(
            reply.reply,
            "Google API not configured. Set GOOGLE_API_KEY and GOOGLE_CX."
        );
        assert!(reply.meta.is_some());
    }

    #[actix_web::test]
    async fn implicit_search_failure_stays_generic() {
        let reply = post_chat("something nobody configured a rule for").await;
        assert_eq!(
            reply.reply,
            "Sorry, I couldn't fetch search results right now. Try again later."
        );
        assert!(reply.meta.is_none());
    }
}
