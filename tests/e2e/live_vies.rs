//! Live lookups

#[cfg(test)]
mod tests {
    use crate::common::fixtures::REGISTERED;
    use crate::skip_without_env;
    use std::sync::Arc;
    use vies_rs::Config;
    use vies_rs::config::ConfigOverrides;
    use vies_rs::core::batch::BatchOrchestrator;
    use vies_rs::core::client::{NoopDiagnostics, OutcomeKind, ReqwestTransport, ValidationOutcome};

    fn live_config() -> Config {
        Config::default()
            .with_overrides(ConfigOverrides {
                workers: Some(2),
                rate_limit: Some(30),
                max_attempts: Some(10),
                proxy_host: std::env::var("PROXY_HOST").ok(),
                proxy_user: std::env::var("PROXY_USER").ok(),
                proxy_password: std::env::var("PROXY_PWD").ok(),
                ..Default::default()
            })
            .unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_lookup() {
        skip_without_env!("VIES_E2E");

        let config = live_config();
        let transport = Arc::new(ReqwestTransport::new(&config.request, &config.proxy).unwrap());
        let batch = BatchOrchestrator::from_config(&config, transport, Arc::new(NoopDiagnostics));

        let mut outcomes: Vec<ValidationOutcome> = Vec::new();
        let report = batch
            .run(vec![REGISTERED.0.to_string(), "12345".to_string()], &mut outcomes)
            .await
            .unwrap();

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.malformed, 1);

        let live = outcomes
            .iter()
            .find(|o| o.identifier == REGISTERED.0)
            .unwrap();
        // VIES may be down; an exhausted budget is still a well-formed outcome
        assert!(matches!(
            live.kind,
            OutcomeKind::Answered | OutcomeKind::Exhausted
        ));
    }
}
