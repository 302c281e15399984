//! Thin boundary to the identity provider (a GoTrue-style HTTP API). The
//! dashboard only ever sees the three operations below and the issued
//! access token; everything else about signup, confirmation emails and
//! session issuance is the provider's business.

use gloo_net::http::Request;
use serde::Deserialize;

const AUTH_BASE_URL: &str = match option_env!("XPENSE_AUTH_URL") {
    Some(url) => url,
    None => "http://localhost:54321/auth/v1",
};

const AUTH_API_KEY: &str = match option_env!("XPENSE_AUTH_KEY") {
    Some(key) => key,
    None => "",
};

/// A failed auth call, with the unconfirmed-email case singled out so the
/// login screen can offer to resend the confirmation mail.
#[derive(Clone, PartialEq, Debug)]
pub struct AuthFailure {
    pub message: String,
    pub unconfirmed_email: bool,
}

fn classify(message: String) -> AuthFailure {
    let unconfirmed_email = message == "Email not confirmed";
    AuthFailure {
        message,
        unconfirmed_email,
    }
}

fn network_failure(err: gloo_net::Error) -> AuthFailure {
    AuthFailure {
        message: err.to_string(),
        unconfirmed_email: false,
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

// The provider is not consistent about which field carries the message.
#[derive(Deserialize, Default)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

fn error_message(body: ErrorBody, status: u16) -> String {
    body.error_description
        .or(body.msg)
        .or(body.error)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

async fn failure_from(resp: gloo_net::http::Response) -> AuthFailure {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.unwrap_or_default();
    classify(error_message(body, status))
}

/// Logs in with email/password and yields the issued access token.
pub async fn sign_in(email: &str, password: &str) -> Result<String, AuthFailure> {
    let url = format!("{AUTH_BASE_URL}/token?grant_type=password");
    let resp = Request::post(&url)
        .header("apikey", AUTH_API_KEY)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .map_err(network_failure)?
        .send()
        .await
        .map_err(network_failure)?;
    if !resp.ok() {
        return Err(failure_from(resp).await);
    }
    let token: TokenResponse = resp.json().await.map_err(network_failure)?;
    Ok(token.access_token)
}

/// Registers a new account. No session is issued; the provider sends a
/// confirmation email instead.
pub async fn sign_up(email: &str, password: &str) -> Result<(), AuthFailure> {
    let url = format!("{AUTH_BASE_URL}/signup");
    let resp = Request::post(&url)
        .header("apikey", AUTH_API_KEY)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .map_err(network_failure)?
        .send()
        .await
        .map_err(network_failure)?;
    if !resp.ok() {
        return Err(failure_from(resp).await);
    }
    Ok(())
}

/// Asks the provider to send a fresh confirmation email via its one-time
/// password flow.
pub async fn resend_confirmation(email: &str) -> Result<(), AuthFailure> {
    let url = format!("{AUTH_BASE_URL}/otp");
    let resp = Request::post(&url)
        .header("apikey", AUTH_API_KEY)
        .json(&serde_json::json!({ "email": email }))
        .map_err(network_failure)?
        .send()
        .await
        .map_err(network_failure)?;
    if !resp.ok() {
        return Err(failure_from(resp).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_unconfirmed_message_enables_resend() {
        let failure = classify("Email not confirmed".to_string());
        assert!(failure.unconfirmed_email);
        assert_eq!(failure.message, "Email not confirmed");
    }

    #[test]
    fn other_messages_do_not_enable_resend() {
        for message in ["Invalid login credentials", "email not confirmed", ""] {
            assert!(!classify(message.to_string()).unconfirmed_email);
        }
    }

    #[test]
    fn error_message_prefers_error_description() {
        let body = ErrorBody {
            error_description: Some("Invalid login credentials".to_string()),
            msg: Some("ignored".to_string()),
            error: Some("ignored".to_string()),
        };
        assert_eq!(error_message(body, 400), "Invalid login credentials");
    }

    #[test]
    fn error_message_falls_back_to_msg_then_error_then_status() {
        let body = ErrorBody {
            error_description: None,
            msg: Some("Email not confirmed".to_string()),
            error: None,
        };
        assert_eq!(error_message(body, 400), "Email not confirmed");

        let body = ErrorBody {
            error_description: None,
            msg: None,
            error: Some("invalid_grant".to_string()),
        };
        assert_eq!(error_message(body, 400), "invalid_grant");

        assert_eq!(
            error_message(ErrorBody::default(), 500),
            "Request failed with status 500"
        );
    }
}
