use crate::verification::{
    ClientConfig, Field, HttpTransport, Navigator, SubmissionState, SubmitBlocked,
    TerminalNavigator, VerificationForm, VerificationTransport,
};
use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::info;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub api_url: Url,
    /// Origin the post-verification `/login` redirect is resolved against.
    pub web_url: Url,
    pub email: String,
    pub otp: SecretString,
    pub timeout: Duration,
    pub wait: bool,
}

/// Execute the verify action.
/// # Errors
/// Returns an error if the form is invalid, the HTTP client cannot be built, or verification fails.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        api_url = %args.api_url,
        web_url = %args.web_url,
        timeout = ?args.timeout,
        "starting email verification"
    );

    let mut config = ClientConfig::new(args.api_url.clone());
    config.timeout = args.timeout;
    let transport = HttpTransport::new(&config).context("Failed to build HTTP client")?;
    let navigator = TerminalNavigator::new(args.web_url);

    let mut form = VerificationForm::new(transport, navigator);
    form.set_email(args.email);
    form.set_otp(args.otp.expose_secret());

    drive(&mut form, args.wait).await
}

/// Submits the form, prints the outcome notification, and dismisses it either
/// after its life elapses or right away.
async fn drive<T, N>(form: &mut VerificationForm<T, N>, wait: bool) -> Result<()>
where
    T: VerificationTransport,
    N: Navigator,
{
    match form.submit().await.map(|_| ()) {
        Ok(()) => {}
        Err(SubmitBlocked::Invalid(_)) => {
            for field in Field::ALL {
                if let Some(err) = form.visible_error(field) {
                    eprintln!("{}: {err}", field.name());
                }
            }
            bail!("verification form is invalid");
        }
        Err(SubmitBlocked::InFlight) => bail!("a verification is already in progress"),
    }

    let succeeded = matches!(form.state(), SubmissionState::Succeeded { .. });

    if let Some(notification) = form.notification() {
        println!("{}", notification.detail);
        let life = notification.life;
        if wait {
            sleep(life).await;
            form.tick(Instant::now());
        }
    }
    form.dismiss_notification();

    if succeeded {
        Ok(())
    } else {
        bail!("email verification failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::{client::VERIFY_EMAIL_PATH, RecordingNavigator};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn form_for(
        server: &MockServer,
        email: &str,
        otp: &str,
    ) -> Result<VerificationForm<HttpTransport, RecordingNavigator>> {
        let config = ClientConfig::new(Url::parse(&server.uri())?);
        let mut form =
            VerificationForm::new(HttpTransport::new(&config)?, RecordingNavigator::default());
        form.set_email(email);
        form.set_otp(otp);
        Ok(form)
    }

    #[tokio::test]
    async fn drive_redirects_after_success() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(VERIFY_EMAIL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Code sent"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut form = form_for(&server, "user@example.com", "123456")?;
        drive(&mut form, false).await?;

        assert_eq!(form.navigator().visited, vec!["/login"]);
        assert_eq!(form.state(), &SubmissionState::Idle);
        Ok(())
    }

    #[tokio::test]
    async fn drive_reports_failure_without_redirect() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(VERIFY_EMAIL_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "Invalid code"
            })))
            .mount(&server)
            .await;

        let mut form = form_for(&server, "user@example.com", "123456")?;
        assert!(drive(&mut form, false).await.is_err());
        assert!(form.navigator().visited.is_empty());
        assert!(!form.is_submit_disabled());
        Ok(())
    }

    #[tokio::test]
    async fn drive_rejects_invalid_form_without_request() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut form = form_for(&server, "user@example.com", "12a456")?;
        assert!(drive(&mut form, false).await.is_err());
        assert_eq!(form.state(), &SubmissionState::Idle);
        Ok(())
    }
}
