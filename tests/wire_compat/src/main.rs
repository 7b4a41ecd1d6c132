fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire contract tests.");
}

/// Wire contract tests: raw JSON bodies, exactly as the generated
/// browser snippet produces them, against a live server. Guards the
/// HTTP protocol against accidental drift in either half.
#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use browserlog_capture::{CaptureConfig, ConsoleArg, Forwarder};
    use browserlog_protocol::constants::{INGEST_PATH, ingest_url};
    use browserlog_server::{LogServer, ServerConfig};

    struct LiveServer {
        server: LogServer,
        port: u16,
        log_file: PathBuf,
        _dir: tempfile::TempDir,
    }

    async fn start_server() -> LiveServer {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("dev.log");
        let server = LogServer::new(ServerConfig {
            port: 0,
            log_file: log_file.clone(),
        });
        server.start().await.unwrap();
        let port = server.port().await;
        LiveServer {
            server,
            port,
            log_file,
            _dir: dir,
        }
    }

    /// Posts a raw body string with a JSON content type.
    async fn post_raw(port: u16, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(ingest_url(port))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn browser_shaped_batch_is_accepted() {
        let live = start_server().await;

        // Field names and shapes exactly as the snippet serializes them.
        let body = r#"{"logs":[{
            "level":"error",
            "message":"Error: boom [extra#1]",
            "timestamp":"2026-08-23T10:15:30.123Z",
            "url":"http://localhost:5173/app",
            "userAgent":"Mozilla/5.0 (X11; Linux x86_64)",
            "stacks":["at boot (main.js:10:5)\nat run (main.js:2:1)"],
            "extra":[{"key":"value","nested":{"data":123}}]
        }]}"#;

        let resp = post_raw(live.port, body).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), r#"{"success":true}"#);

        let content = std::fs::read_to_string(&live.log_file).unwrap();
        assert!(content.contains("[ERROR] Error: boom [extra#1] (http://localhost:5173/app)"));
        assert!(content.contains("at boot (main.js:10:5)"));
        assert!(content.contains("at run (main.js:2:1)"));
        assert!(content.contains("Extra data:"));
        assert!(content.contains("\"key\": \"value\""));

        live.server.stop().await;
    }

    #[tokio::test]
    async fn minimal_record_is_accepted() {
        let live = start_server().await;

        let body = r#"{"logs":[{"level":"log","message":"hi","timestamp":"2026-08-23T10:15:30Z"}]}"#;
        let resp = post_raw(live.port, body).await;
        assert_eq!(resp.status(), 200);

        let content = std::fs::read_to_string(&live.log_file).unwrap();
        assert!(content.contains("[LOG] hi"));
        assert!(!content.contains('('), "no origin suffix without a url");

        live.server.stop().await;
    }

    #[tokio::test]
    async fn arbitrary_level_string_renders_permissively() {
        // The server trusts `level`; an unknown string still formats.
        let live = start_server().await;

        let body =
            r#"{"logs":[{"level":"custom","message":"odd","timestamp":"2026-08-23T10:15:30Z"}]}"#;
        let resp = post_raw(live.port, body).await;
        assert_eq!(resp.status(), 200);

        let content = std::fs::read_to_string(&live.log_file).unwrap();
        assert!(content.contains("[CUSTOM] odd"));

        live.server.stop().await;
    }

    #[tokio::test]
    async fn error_bodies_are_stable() {
        let live = start_server().await;
        let client = reqwest::Client::new();

        let resp = post_raw(live.port, "not json").await;
        assert_eq!(resp.status(), 400);
        assert_eq!(resp.text().await.unwrap(), r#"{"error":"Invalid JSON"}"#);

        let resp = client
            .get(format!("http://127.0.0.1:{}{INGEST_PATH}", live.port))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.text().await.unwrap(), r#"{"error":"Not found"}"#);

        live.server.stop().await;
    }

    #[tokio::test]
    async fn cors_trio_on_every_response() {
        let live = start_server().await;
        let client = reqwest::Client::new();

        let ok = post_raw(
            live.port,
            r#"{"logs":[{"level":"log","message":"x","timestamp":"2026-08-23T10:15:30Z"}]}"#,
        )
        .await;
        let bad = post_raw(live.port, "garbage").await;
        let missing = client
            .get(format!("http://127.0.0.1:{}/nope", live.port))
            .send()
            .await
            .unwrap();
        let preflight = client
            .request(
                reqwest::Method::OPTIONS,
                format!("http://127.0.0.1:{}{INGEST_PATH}", live.port),
            )
            .send()
            .await
            .unwrap();

        for resp in [ok, bad, missing, preflight] {
            assert_eq!(resp.headers()["access-control-allow-origin"], "*");
            assert_eq!(
                resp.headers()["access-control-allow-methods"],
                "POST, OPTIONS"
            );
            assert_eq!(
                resp.headers()["access-control-allow-headers"],
                "Content-Type"
            );
        }

        live.server.stop().await;
    }

    #[tokio::test]
    async fn native_agent_end_to_end() {
        let live = start_server().await;

        let forwarder = Forwarder::new(CaptureConfig {
            port: live.port,
            url: "http://localhost:5173/app".into(),
            ..CaptureConfig::default()
        });

        forwarder
            .log(
                "warn",
                &[
                    ConsoleArg::text("retrying"),
                    ConsoleArg::structured(&serde_json::json!({"attempt": 2})),
                ],
            )
            .await;
        forwarder.close().await;

        // The final flush dispatches fire-and-forget; give it a moment.
        tokio::time::sleep(Duration::from_millis(300)).await;

        let content = std::fs::read_to_string(&live.log_file).unwrap();
        assert!(content.contains("[WARN] retrying [extra#1] (http://localhost:5173/app)"));
        assert!(content.contains("\"attempt\": 2"));

        live.server.stop().await;
    }
}
