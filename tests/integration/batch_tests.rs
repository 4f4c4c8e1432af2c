//! Batch runs from an input file to a CSV result file

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::fixtures::{REGISTERED, UNREGISTERED};
    use crate::common::{RecordingDiagnostics, VatServer, fast_config, write_input};
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tempfile::tempdir;
    use vies_rs::core::batch::BatchOrchestrator;
    use vies_rs::core::client::{ReqwestTransport, ValidationOutcome};
    use vies_rs::utils::io::{CSV_HEADER, CsvSink, read_identifiers};

    #[tokio::test]
    async fn test_file_to_csv() {
        let server = VatServer::start().await;
        server.answer(REGISTERED.1, true).await;
        server.answer(UNREGISTERED.1, false).await;
        server
            .fail("FR96552100554", 503, json!({"error": "MS_UNAVAILABLE"}), 10)
            .await;

        let input = write_input(&[
            "# companies to check",
            REGISTERED.0,
            "",
            &format!("  {}  ", UNREGISTERED.0),
            "552100554",
            "12345",
        ]);
        let dir = tempdir().unwrap();
        let output = dir.path().join("result.csv");

        let config = fast_config(&server.uri());
        let identifiers = assert_ok!(read_identifiers(input.path()).await);
        assert_eq!(identifiers.len(), 4);

        let transport = Arc::new(ReqwestTransport::new(&config.request, &config.proxy).unwrap());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let batch = BatchOrchestrator::from_config(&config, transport, diagnostics.clone());

        let mut sink = CsvSink::create(&output, false).unwrap();
        let report = assert_ok!(batch.run(identifiers, &mut sink).await);

        let summary = report.summary;
        assert_eq!(summary.total, 4);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.undetermined, 2);
        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.exhausted, 1);
        assert_eq!(*diagnostics.exhausted.lock(), vec!["552100554".to_string()]);

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));

        let rows: HashSet<&str> = lines.collect();
        let expected: HashSet<&str> = [
            "380129866;True",
            "443061841;False",
            "552100554;None",
            "12345;None",
        ]
        .into_iter()
        .collect();
        assert_eq!(rows, expected);
    }

    #[tokio::test]
    async fn test_rate_limit_spaces_requests() {
        let server = VatServer::start().await;
        server.answer(REGISTERED.1, true).await;

        let mut config = fast_config(&server.uri());
        config.batch.workers = 3;
        // One request every 100ms
        config.batch.rate_limit = 600;

        let transport = Arc::new(ReqwestTransport::new(&config.request, &config.proxy).unwrap());
        let batch =
            BatchOrchestrator::from_config(&config, transport, Arc::new(RecordingDiagnostics::default()));

        let identifiers = vec![REGISTERED.0.to_string(); 4];
        let mut outcomes: Vec<ValidationOutcome> = Vec::new();
        let report = assert_ok!(batch.run(identifiers, &mut outcomes).await);

        assert_eq!(outcomes.len(), 4);
        assert_eq!(report.summary.valid, 4);
        // Slots at 0, 100, 200 and 300ms
        assert!(
            report.summary.total_duration.as_millis() >= 290,
            "{:?}",
            report.summary.total_duration
        );
    }
}
