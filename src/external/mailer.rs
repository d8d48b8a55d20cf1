use crate::config::MailerConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// 凭证邮件请求体。字段名必须与邮件服务接口保持一致（camelCase）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCredentialsRequest {
    pub to_email: String,
    pub to_name: String,
    pub gym_name: String,
    pub email: String,
    pub password: String,
    pub tenant_id: String,
    pub gym_code: String,
}

#[derive(Debug, Deserialize)]
pub struct SendCredentialsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct MailerService {
    client: Client,
    config: MailerConfig,
}

impl MailerService {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn send_credentials(&self, request: &SendCredentialsRequest) -> AppResult<()> {
        let mut builder = self.client.post(&self.config.endpoint).json(request);

        if !self.config.api_key.is_empty() {
            builder = builder.bearer_auth(&self.config.api_key);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::NotificationError(format!("Credentials email request failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!(
                "Credentials email failed to send: {}, status: {status}, error: {error_text}",
                request.to_email
            );
            return Err(AppError::NotificationError(format!(
                "Email sending failed: {error_text}"
            )));
        }

        let body: SendCredentialsResponse = response.json().await.map_err(|e| {
            AppError::NotificationError(format!("Invalid email service response: {e}"))
        })?;

        if !body.success {
            return Err(AppError::NotificationError(
                "Email sending failed".to_string(),
            ));
        }

        log::info!("Credentials email sent successfully: {}", request.to_email);
        Ok(())
    }
}
