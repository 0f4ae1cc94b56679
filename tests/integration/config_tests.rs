//! Configuration loading and startup wiring tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use switchyard::config::{BackendConfig, LogFormat, RouteConfig};
    use switchyard::core::providers::create_backends;
    use switchyard::server::ServerBuilder;
    use switchyard::{BackendKind, Config, GatewayError, Router};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_config_file() {
        let file = write_config(
            r#"
server:
  host: "127.0.0.1"
  port: 8088
  max_body_size: 65536
  cors:
    enabled: true
    allowed_origins: ["https://chat.example.com"]

logging:
  level: "switchyard=debug"
  format: json

backends:
  - name: groq
    kind: groq
    api_key: "gsk-test"
  - name: cerebras
    kind: cerebras
    api_key: "csk-test"
    timeout: 15
  - name: openrouter
    kind: openrouter
    api_key: "sk-or-test"
    default_model: "meta-llama/llama-3.3-70b-instruct:free"
    headers:
      HTTP-Referer: "https://chat.example.com"
      X-Title: "Example Chat"

routes:
  - prefix: moonshotai
    backend: groq
  - prefix: meta-llama
    backend: openrouter
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().address(), "127.0.0.1:8088");
        assert_eq!(config.server().max_body_size, 65536);
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.backends()[1].timeout, 15);
        assert_eq!(config.backends()[2].headers.len(), 2);
        assert_eq!(config.routes()[1], RouteConfig::new("meta-llama", "openrouter"));

        let backends = create_backends(config.backends()).unwrap();
        let names: Vec<&str> = backends.iter().map(|backend| backend.name()).collect();
        assert_eq!(names, vec!["groq", "cerebras", "openrouter"]);
        assert_eq!(
            backends[2].models().to_vec(),
            vec!["meta-llama/llama-3.3-70b-instruct:free".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_server_settings_rejected() {
        let file = write_config("server:\n  port: 0\n");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GatewayError::Config(_))));

        let file = write_config("server:\n  max_body_size: 0\n");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[tokio::test]
    async fn test_unknown_backend_kind_rejected() {
        let file = write_config("backends:\n  - name: openai\n    kind: openai\n");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GatewayError::Yaml(_))));
    }

    #[test]
    fn test_disabled_backends_are_not_created() {
        let configs = vec![
            BackendConfig {
                api_key: Some("gsk-test".to_string()),
                enabled: false,
                ..BackendConfig::new("groq", BackendKind::Groq)
            },
            BackendConfig {
                api_key: Some("csk-test".to_string()),
                ..BackendConfig::new("cerebras", BackendKind::Cerebras)
            },
        ];

        let backends = create_backends(&configs).unwrap();
        assert_eq!(backends.len(), 1);
        assert_eq!(backends[0].name(), "cerebras");
        assert_eq!(backends[0].display_name(), "Cerebras");
    }

    #[test]
    fn test_invalid_extra_header_is_config_error() {
        let mut config = BackendConfig {
            api_key: Some("sk-or-test".to_string()),
            ..BackendConfig::new("openrouter", BackendKind::OpenRouter)
        };
        config
            .headers
            .insert("bad header".to_string(), "x".to_string());

        let result = create_backends(&[config]);
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_router_requires_a_backend() {
        let result = Router::new(Vec::new(), &[]);
        assert!(matches!(result, Err(GatewayError::NoProvidersAvailable(_))));
    }

    #[test]
    fn test_builder_requires_config() {
        let result = ServerBuilder::new().build();
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_builder_wires_configured_backends() {
        let mut config = Config::default();
        for backend in &mut config.gateway.backends {
            backend.api_key = Some(format!("{}-test-key", backend.name));
        }

        let server = ServerBuilder::new().with_config(config).build().unwrap();
        assert_eq!(server.state().router.backends().len(), 3);
        assert_eq!(server.state().router.routes().len(), 3);
        assert_eq!(server.state().catalog.len(), 3);
        assert_eq!(server.config().port, 3000);
    }
}
