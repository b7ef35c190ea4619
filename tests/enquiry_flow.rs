//! Integration tests for the enquiry submission flow.
//!
//! Each test spins up the Axum server on a random port and exercises the
//! real HTTP contract, with a stub mail transport in place of SMTP.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpListener;
use tokio::time::timeout;

use vinfra_leads::assets::asset_routes;
use vinfra_leads::error::MailError;
use vinfra_leads::notify::{AppState, Mailer, OutboundMail, SmtpMailer, enquiry_routes};
use vinfra_leads::theme::ThemeName;
use vinfra_leads::wizard::{SubmitClient, Wizard, WizardStep};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

const ADMIN_INBOX: &str = "info@vinfraengineers.com";

/// Stub transport: records accepted sends, optionally rejecting a given
/// attempt (0-based) to simulate transport failures.
struct StubMailer {
    inner: Mutex<StubInner>,
    fail_on_attempt: Option<usize>,
}

#[derive(Default)]
struct StubInner {
    attempts: usize,
    sent: Vec<OutboundMail>,
}

impl StubMailer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(StubInner::default()),
            fail_on_attempt: None,
        })
    }

    fn failing_on(attempt: usize) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(StubInner::default()),
            fail_on_attempt: Some(attempt),
        })
    }

    fn sent(&self) -> Vec<OutboundMail> {
        self.inner.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
        let mut inner = self.inner.lock().unwrap();
        let attempt = inner.attempts;
        inner.attempts += 1;
        if self.fail_on_attempt == Some(attempt) {
            return Err(MailError::Send("transport rejected the message".into()));
        }
        inner.sent.push(mail.clone());
        Ok(())
    }
}

/// Start the dispatcher on a random port with the given mailer.
async fn start_server(mailer: Arc<dyn Mailer>) -> u16 {
    let state = AppState {
        mailer,
        admin_inbox: ADMIN_INBOX.to_string(),
        palette: ThemeName::NavyGold.palette(),
    };
    let app = enquiry_routes(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

fn submit_client(port: u16) -> SubmitClient {
    SubmitClient::new(format!("http://127.0.0.1:{port}/api/send-mail"))
}

/// Drive a wizard through all four steps with a complete record.
fn completed_wizard() -> Wizard {
    let mut wizard = Wizard::new();
    wizard.lead_mut().service_type = "diaphragm".into();
    wizard.lead_mut().property_type = "commercial".into();
    assert!(wizard.advance());

    wizard.toggle_scope("Diaphragm Wall");
    wizard.lead_mut().timeline = "asap".into();
    assert!(wizard.advance());

    wizard.lead_mut().first_name = "Rajesh".into();
    wizard.lead_mut().email = "rajesh@example.com".into();
    wizard.lead_mut().phone = "+919999999999".into();
    assert!(wizard.advance());

    assert_eq!(wizard.step(), WizardStep::AdditionalInfo);
    wizard
}

// ── Happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn wizard_submission_sends_both_documents() {
    timeout(TEST_TIMEOUT, async {
        let mailer = StubMailer::new();
        let port = start_server(Arc::clone(&mailer) as Arc<dyn Mailer>).await;

        let mut wizard = completed_wizard();
        let confirmation = wizard.submit(&submit_client(port)).await.unwrap().clone();

        assert!(confirmation.reference.starts_with("#VI-"));
        assert_eq!(confirmation.email, "rajesh@example.com");

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);

        // Operator notification first, to the fixed operational inbox.
        assert_eq!(sent[0].to, ADMIN_INBOX);
        assert!(sent[0].subject.starts_with("New Enquiry: Diaphragm Wall"));
        assert!(sent[0].html.contains(&confirmation.reference));

        // Submitter confirmation second.
        assert_eq!(sent[1].to, "rajesh@example.com");
        assert!(sent[1].subject.contains(&confirmation.reference));
        assert!(sent[1].html.contains("Thank you, Rajesh!"));
        assert!(sent[1].html.contains(&confirmation.reference));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn direct_post_echoes_reference_in_both_documents() {
    timeout(TEST_TIMEOUT, async {
        let mailer = StubMailer::new();
        let port = start_server(Arc::clone(&mailer) as Arc<dyn Mailer>).await;

        let body = serde_json::json!({
            "serviceType": "diaphragm",
            "propertyType": "commercial",
            "projectScope": ["Diaphragm Wall"],
            "timeline": "asap",
            "firstName": "Rajesh",
            "email": "rajesh@example.com",
            "phone": "+919999999999",
            "referenceNumber": "#VI-000421"
        });

        let res = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/send-mail"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert!(res.status().is_success());

        let json: serde_json::Value = res.json().await.unwrap();
        assert_eq!(json["success"], true);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].html.contains("#VI-000421"));
        assert!(sent[1].html.contains("#VI-000421"));
    })
    .await
    .expect("test timed out");
}

// ── Failure paths ───────────────────────────────────────────────────

#[tokio::test]
async fn second_send_failure_fails_the_whole_submission() {
    timeout(TEST_TIMEOUT, async {
        // Admin mail goes through, confirmation is rejected.
        let mailer = StubMailer::failing_on(1);
        let port = start_server(Arc::clone(&mailer) as Arc<dyn Mailer>).await;

        let mut wizard = completed_wizard();
        let err = wizard.submit(&submit_client(port)).await.unwrap_err();
        assert!(err.to_string().contains("transport rejected"));

        // Partial delivery: the operator notification did go out.
        assert_eq!(mailer.sent().len(), 1);

        // Form state intact, back at the final step, error retained.
        assert_eq!(wizard.step(), WizardStep::AdditionalInfo);
        assert_eq!(wizard.lead().first_name, "Rajesh");
        assert!(wizard.submit_error().unwrap().contains("transport rejected"));
        assert!(wizard.confirmation().is_none());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn first_send_failure_sends_nothing() {
    timeout(TEST_TIMEOUT, async {
        let mailer = StubMailer::failing_on(0);
        let port = start_server(Arc::clone(&mailer) as Arc<dyn Mailer>).await;

        let mut wizard = completed_wizard();
        assert!(wizard.submit(&submit_client(port)).await.is_err());
        assert!(mailer.sent().is_empty());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn missing_smtp_config_yields_failure_response_not_crash() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(Arc::new(SmtpMailer::new(None))).await;

        let res = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/send-mail"))
            .json(&serde_json::json!({ "firstName": "Rajesh" }))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 500);
        let json: serde_json::Value = res.json().await.unwrap();
        assert_eq!(json["success"], false);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("not configured")
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn retry_after_failure_uses_a_fresh_reference() {
    timeout(TEST_TIMEOUT, async {
        let mailer = StubMailer::failing_on(1);
        let port = start_server(Arc::clone(&mailer) as Arc<dyn Mailer>).await;
        let client = submit_client(port);

        let mut wizard = completed_wizard();
        assert!(wizard.submit(&client).await.is_err());
        let first_ref = wizard.lead().reference_number.clone();

        // The stub only rejects attempt 1, so the retry succeeds.
        tokio::time::sleep(Duration::from_millis(5)).await;
        let confirmation = wizard.submit(&client).await.unwrap().clone();
        assert_ne!(confirmation.reference, first_ref);
        assert!(wizard.submit_error().is_none());
    })
    .await
    .expect("test timed out");
}

// ── Ancillary endpoints ─────────────────────────────────────────────

#[tokio::test]
async fn health_endpoint_reports_ok() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(StubMailer::new()).await;
        let json: serde_json::Value = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(json["status"], "ok");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn client_logos_endpoint_lists_sorted_paths() {
    timeout(TEST_TIMEOUT, async {
        let dir = tempfile::tempdir().unwrap();
        for name in ["image-client3.png", "image-client1.jpeg", "skip-me.png"] {
            tokio::fs::write(dir.path().join(name), b"x").await.unwrap();
        }

        let app = asset_routes(dir.path().to_path_buf());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let json: serde_json::Value =
            reqwest::get(format!("http://127.0.0.1:{port}/api/client-logos"))
                .await
                .unwrap()
                .json()
                .await
                .unwrap();

        assert_eq!(
            json["logos"],
            serde_json::json!(["/clients/image-client1.jpeg", "/clients/image-client3.png"])
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn client_logos_missing_directory_returns_empty_list() {
    timeout(TEST_TIMEOUT, async {
        let app = asset_routes(PathBuf::from("/nonexistent/clients"));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let json: serde_json::Value =
            reqwest::get(format!("http://127.0.0.1:{port}/api/client-logos"))
                .await
                .unwrap()
                .json()
                .await
                .unwrap();

        assert!(json["logos"].as_array().unwrap().is_empty());
    })
    .await
    .expect("test timed out");
}
