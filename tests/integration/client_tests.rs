//! Validation client over HTTP

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{REGISTERED, UNREGISTERED};
    use crate::common::{RecordingDiagnostics, VatServer, fast_config};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use vies_rs::Config;
    use vies_rs::core::backoff::BackoffPolicy;
    use vies_rs::core::client::{
        FailureClass, OutcomeKind, ReqwestTransport, ValidationClient, ValidationStatus,
    };
    use vies_rs::core::rate_limiter::RateLimiter;
    use wiremock::ResponseTemplate;

    fn client(config: &Config) -> (ValidationClient, Arc<RecordingDiagnostics>) {
        let transport = ReqwestTransport::new(&config.request, &config.proxy).unwrap();
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let client = ValidationClient::new(
            Arc::new(transport),
            Arc::new(RateLimiter::new(config.batch.rate_limit)),
            BackoffPolicy::new(&config.backoff),
            config.request.max_attempts,
        )
        .with_diagnostics(diagnostics.clone());
        (client, diagnostics)
    }

    #[tokio::test]
    async fn test_registered_company() {
        let server = VatServer::start().await;
        server.answer(REGISTERED.1, true).await;

        let (client, diagnostics) = client(&fast_config(&server.uri()));
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.status, ValidationStatus::Valid);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(server.request_count().await, 1);
        assert!(diagnostics.markers().is_empty());
    }

    #[tokio::test]
    async fn test_unregistered_company() {
        let server = VatServer::start().await;
        server.answer(UNREGISTERED.1, false).await;

        let (client, _) = client(&fast_config(&server.uri()));
        let outcome = client.validate(UNREGISTERED.0).await;

        assert_eq!(outcome.status, ValidationStatus::Invalid);
        assert_eq!(outcome.kind, OutcomeKind::Answered);
    }

    #[tokio::test]
    async fn test_recovers_from_transient_errors() {
        let server = VatServer::start().await;
        server
            .fail(REGISTERED.1, 500, json!({"error": "SERVICE_UNAVAILABLE"}), 1)
            .await;
        server
            .fail(
                REGISTERED.1,
                200,
                json!({"actionSucceed": false, "userError": "MS_MAX_CONCURRENT_REQ"}),
                1,
            )
            .await;
        server.answer(REGISTERED.1, true).await;

        let (client, diagnostics) = client(&fast_config(&server.uri()));
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.status, ValidationStatus::Valid);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(diagnostics.markers(), "..");
    }

    #[tokio::test]
    async fn test_exhausts_the_retry_budget() {
        let server = VatServer::start().await;
        server
            .expect(
                REGISTERED.1,
                ResponseTemplate::new(200).set_body_json(json!({"userError": "MS_UNAVAILABLE"})),
                3,
            )
            .await;

        let (client, diagnostics) = client(&fast_config(&server.uri()));
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.status, ValidationStatus::Undetermined);
        assert_eq!(outcome.kind, OutcomeKind::Exhausted);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(diagnostics.markers(), "..");
        assert_eq!(*diagnostics.exhausted.lock(), vec![REGISTERED.0.to_string()]);
    }

    #[tokio::test]
    async fn test_html_error_page_is_retried_silently() {
        let server = VatServer::start().await;
        server
            .expect(
                REGISTERED.1,
                ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
                2,
            )
            .await;

        let mut config = fast_config(&server.uri());
        config.request.max_attempts = 2;
        let (client, diagnostics) = client(&config);
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.kind, OutcomeKind::Exhausted);
        assert_eq!(*diagnostics.retries.lock(), vec![FailureClass::Unexpected]);
        assert!(diagnostics.markers().is_empty());
    }

    #[tokio::test]
    async fn test_proxy_authentication_failure() {
        let server = VatServer::start().await;
        server
            .expect(REGISTERED.1, ResponseTemplate::new(407), 2)
            .await;

        let mut config = fast_config(&server.uri());
        config.request.max_attempts = 2;
        let (client, diagnostics) = client(&config);
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.status, ValidationStatus::Undetermined);
        assert_eq!(diagnostics.markers(), "P");
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_error() {
        // Bind then drop a listener to get a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let (client, diagnostics) = client(&fast_config(&format!("http://127.0.0.1:{}", port)));
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.kind, OutcomeKind::Exhausted);
        assert_eq!(diagnostics.markers(), "RR");
    }

    #[tokio::test]
    async fn test_request_timeout_is_a_transport_error() {
        let server = VatServer::start().await;
        server
            .expect(
                REGISTERED.1,
                ResponseTemplate::new(200)
                    .set_body_json(json!({"isValid": true}))
                    .set_delay(Duration::from_secs(3)),
                1,
            )
            .await;

        let mut config = fast_config(&server.uri());
        config.request.timeout = 1;
        config.request.max_attempts = 1;
        let (client, diagnostics) = client(&config);
        let outcome = client.validate(REGISTERED.0).await;

        assert_eq!(outcome.status, ValidationStatus::Undetermined);
        assert_eq!(outcome.kind, OutcomeKind::Exhausted);
        // No retry follows the only attempt
        assert!(diagnostics.retries.lock().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_siren_sends_nothing() {
        let server = VatServer::start().await;

        let (client, _) = client(&fast_config(&server.uri()));
        let outcome = client.validate("38012986").await;

        assert_eq!(outcome.kind, OutcomeKind::InvalidFormat);
        assert_eq!(server.request_count().await, 0);
    }
}
