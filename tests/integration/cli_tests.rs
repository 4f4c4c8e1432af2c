//! The `vies` binary on temporary files

#[cfg(test)]
mod tests {
    use crate::common::fixtures::REGISTERED;
    use crate::common::{VatServer, write_input};
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::tempdir;

    fn vies(args: &[&str], log: &Path) -> Output {
        Command::new(env!("CARGO_BIN_EXE_vies"))
            .args(args)
            .arg("--log")
            .arg(log)
            .env_remove("RUST_LOG")
            .env_remove("PROXY_HOST")
            .env_remove("PROXY_USER")
            .env_remove("PROXY_PWD")
            .output()
            .expect("run vies")
    }

    #[test]
    fn test_dry_run_prints_vat_numbers() {
        let dir = tempdir().unwrap();
        let input = write_input(&["# header", "380129866", "", "12345"]);
        let output = vies(
            &[input.path().to_str().unwrap(), "--dry-run"],
            &dir.path().join("run.log"),
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("FR89380129866"));
        assert!(stdout.contains("Total: 2 SIRENs (1 well-formed, 1 malformed)"));
        assert!(!stdout.contains("header"));
    }

    #[test]
    fn test_version_shows_build_metadata() {
        let output = Command::new(env!("CARGO_BIN_EXE_vies"))
            .arg("--version")
            .output()
            .expect("run vies");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(vies_rs::LONG_VERSION), "{}", stdout);
    }

    #[test]
    fn test_missing_input_exits_non_zero() {
        let dir = tempdir().unwrap();
        let output = vies(
            &[dir.path().join("missing.txt").to_str().unwrap()],
            &dir.path().join("run.log"),
        );

        assert!(!output.status.success());
        let log = std::fs::read_to_string(dir.path().join("run.log")).unwrap();
        assert!(log.contains("missing.txt"));
    }

    #[test]
    fn test_invalid_flag_value_exits_non_zero() {
        let dir = tempdir().unwrap();
        let input = write_input(&["380129866"]);
        let output = vies(
            &[input.path().to_str().unwrap(), "-w", "0", "-q"],
            &dir.path().join("run.log"),
        );

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Worker count"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_full_run_writes_results_and_log() {
        let server = VatServer::start().await;
        server.answer(REGISTERED.1, true).await;

        let dir = tempdir().unwrap();
        let input = write_input(&[REGISTERED.0]);
        let result = dir.path().join("result.csv");
        let log = dir.path().join("run.log");
        let config = dir.path().join("vies.yaml");
        std::fs::write(
            &config,
            format!(
                "request:\n  api_base: {}\n  max_attempts: 2\nbatch:\n  rate_limit: 0\n",
                server.uri()
            ),
        )
        .unwrap();

        let args = [
            input.path().to_str().unwrap().to_string(),
            "-o".to_string(),
            result.to_str().unwrap().to_string(),
            "--config".to_string(),
            config.to_str().unwrap().to_string(),
            "--no-proxy".to_string(),
        ];
        let log_path = log.clone();
        let output = tokio::task::spawn_blocking(move || {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            vies(&args, &log_path)
        })
        .await
        .unwrap();

        assert!(output.status.success(), "{:?}", output);
        assert_eq!(
            std::fs::read_to_string(&result).unwrap(),
            "siren;has_vat\n380129866;True\n"
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Summary: 1 valid, 0 invalid, 0 undetermined"));

        let log = std::fs::read_to_string(&log).unwrap();
        assert!(log.contains("Processing file"));
        assert!(log.contains("Finished 1 SIRENs"));
        assert!(!log.contains("\u{1b}["), "log file must not contain ANSI codes");
    }
}
