//! `/v1/chat/completions` integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::{sse_chunks, streamed_content};
    use crate::common::{ChatRequestFactory, ScriptedBackend, TestApp};
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
    use actix_web::test;
    use serde_json::{Value, json};
    use switchyard::server::HttpServer;

    /// Streaming response follows the canonical chunk sequence
    #[actix_web::test]
    async fn test_streaming_chunk_sequence() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["Hello", " world"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::with_model("moonshotai/kimi-k2"))
            .to_request();
        let resp = test::call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");
        assert_eq!(resp.headers().get(CACHE_CONTROL).unwrap(), "no-cache");
        assert_eq!(resp.headers().get("connection").unwrap(), "keep-alive");

        let chunks = sse_chunks(&test::read_body(resp).await);
        assert_eq!(chunks.len(), 3);

        let id = chunks[0]["id"].as_str().unwrap();
        assert!(id.starts_with("chatcmpl-"));
        for chunk in &chunks {
            assert_eq!(chunk["id"], id);
            assert_eq!(chunk["created"], chunks[0]["created"]);
            assert_eq!(chunk["system_fingerprint"], chunks[0]["system_fingerprint"]);
            assert_eq!(chunk["object"], "chat.completion.chunk");
            assert_eq!(chunk["model"], "moonshotai/kimi-k2");
            assert_eq!(chunk["choices"][0]["index"], 0);
            assert!(chunk["choices"][0]["logprobs"].is_null());
        }

        assert_eq!(
            chunks[0]["choices"][0]["delta"],
            json!({"role": "assistant", "content": "Hello"})
        );
        assert!(chunks[0]["choices"][0]["finish_reason"].is_null());
        assert_eq!(chunks[1]["choices"][0]["delta"], json!({"content": " world"}));
        assert_eq!(chunks[2]["choices"][0]["delta"], json!({}));
        assert_eq!(chunks[2]["choices"][0]["finish_reason"], "stop");
        assert!(chunks[2].get("usage").is_none());
    }

    #[actix_web::test]
    async fn test_usage_on_final_chunk_when_requested() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["Hello", " world"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::with_usage())
            .to_request();
        let chunks = sse_chunks(&test::call_and_read_body(&service, req).await);

        let last = chunks.last().unwrap();
        assert_eq!(
            last["usage"],
            json!({"prompt_tokens": 0, "completion_tokens": 11, "total_tokens": 11})
        );
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.get("usage").is_none());
        }
    }

    #[actix_web::test]
    async fn test_empty_increments_are_forwarded() {
        let app = TestApp::new(vec![ScriptedBackend::replying("cerebras", &["", "a", "", "b"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::simple("hi"))
            .to_request();
        let chunks = sse_chunks(&test::call_and_read_body(&service, req).await);

        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0]["choices"][0]["delta"]["role"], "assistant");
        assert_eq!(chunks[0]["choices"][0]["delta"]["content"], "");
        assert_eq!(streamed_content(&chunks), "ab");
    }

    #[actix_web::test]
    async fn test_non_streaming_completion() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["Hello", " world"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::non_streaming(None))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()
                .get(CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );

        let body: Value = test::read_body_json(resp).await;
        assert!(body["id"].as_str().unwrap().starts_with("chatcmpl-"));
        assert_eq!(body["object"], "chat.completion");
        assert_eq!(body["model"], "unknown");
        assert_eq!(
            body["choices"],
            json!([{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello world"},
                "finish_reason": "stop",
                "logprobs": null
            }])
        );
        assert_eq!(body["usage"]["completion_tokens"], 11);
        assert_eq!(body["usage"]["total_tokens"], 11);
    }

    #[actix_web::test]
    async fn test_messages_forwarded_in_order() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["ok"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::conversation())
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let contents: Vec<String> = app
            .backend(0)
            .seen_messages()
            .into_iter()
            .map(|message| message.content)
            .collect();
        assert_eq!(
            contents,
            vec!["You are terse.", "Name a colour.", "Blue.", "Another."]
        );
    }

    #[actix_web::test]
    async fn test_messages_as_string_is_rejected() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["ok"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(json!({"messages": "hello"}))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"error": {
                "message": "messages is required and must be an array",
                "type": "invalid_request_error"
            }})
        );
        assert_eq!(app.backend(0).calls(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_rejected() {
        let app = TestApp::new(vec![ScriptedBackend::replying("groq", &["ok"])]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{\"messages\": [")
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Invalid JSON in request body");
        assert_eq!(app.backend(0).calls(), 0);
    }

    #[actix_web::test]
    async fn test_backend_refusal_is_internal_error() {
        let app = TestApp::new(vec![ScriptedBackend::new("groq").refusing()]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::simple("hi"))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["type"], "internal_error");
        assert_eq!(body["error"]["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_mid_stream_failure_aborts_body() {
        let backend = ScriptedBackend::replying("groq", &["partial"]).then_fail("connection reset");
        let app = TestApp::new(vec![backend]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::simple("hi"))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(actix_web::body::to_bytes(resp.into_body()).await.is_err());
    }

    #[actix_web::test]
    async fn test_mid_stream_failure_without_streaming() {
        let backend = ScriptedBackend::replying("groq", &["partial"]).then_fail("connection reset");
        let app = TestApp::new(vec![backend]);
        let service = test::init_service(HttpServer::create_app(app.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/v1/chat/completions")
            .set_json(ChatRequestFactory::non_streaming(None))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Internal server error");
    }
}
