//! Legacy `/chat` endpoint tests

#[cfg(test)]
mod tests {
    use crate::common::{ChatRequestFactory, ScriptedBackend, TestApp};
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test;
    use serde_json::{Value, json};
    use switchyard::server::HttpServer;

    #[actix_web::test]
    async fn test_raw_text_body() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["Hel", "lo", "", "!"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(ChatRequestFactory::simple("hi"))
            .to_request();
        let resp = test::call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");
        assert_eq!(test::read_body(resp).await, "Hello!");
    }

    /// The model field is ignored; routing is always round robin
    #[actix_web::test]
    async fn test_model_is_ignored() {
        let app = TestApp::three_backends();
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/chat")
                .set_json(ChatRequestFactory::with_model("xiaomi/mimo-v2-flash:free"))
                .to_request();
            test::call_service(&service, req).await;
        }

        assert_eq!(app.calls(), vec![1, 1, 0]);
        assert_eq!(app.backend(0).seen_models(), vec![None]);
        assert_eq!(app.state.router.cursor(), 2);
    }

    #[actix_web::test]
    async fn test_invalid_body() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["x"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({"prompt": "hi"}))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(app.backend(0).calls(), 0);
    }

    #[actix_web::test]
    async fn test_backend_refusal() {
        let app = TestApp::new(vec![ScriptedBackend::new("groq").refusing()]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(ChatRequestFactory::simple("hi"))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_get_falls_through_to_not_found() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["x"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::get().uri("/chat").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(test::read_body(resp).await, "Not found");
        assert_eq!(app.backend(0).calls(), 0);
    }
}
