//! Cognito-backed [`IdentityProvider`], using the admin API (server-side
//! credentials, no SRP).

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::error::ProvideErrorMetadata;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType, MessageActionType};
use aws_sdk_cognitoidentityprovider::Client;
use tracing::debug;

use super::{IdentityProvider, ProvisionError};

pub struct CognitoProvider {
    client: Client,
    user_pool_id: String,
    /// App client id; only needed for [`IdentityProvider::authenticate`].
    client_id: Option<String>,
}

impl CognitoProvider {
    /// Build a client from the ambient AWS credential chain (env vars,
    /// profile, instance role).
    pub async fn from_env(user_pool_id: String, client_id: Option<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
            user_pool_id,
            client_id,
        }
    }

    fn client_id(&self) -> Result<&str, ProvisionError> {
        self.client_id.as_deref().ok_or_else(|| {
            ProvisionError::Provider("an app client id is required to authenticate".to_string())
        })
    }
}

fn provider_error(err: &dyn ProvideErrorMetadata) -> ProvisionError {
    ProvisionError::Provider(
        err.message()
            .unwrap_or("the identity provider returned an unspecified error")
            .to_string(),
    )
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn create_user(
        &self,
        username: &str,
        temporary_password: &str,
        email: &str,
    ) -> Result<(), ProvisionError> {
        let email_attr = AttributeType::builder()
            .name("email")
            .value(email)
            .build()
            .map_err(|e| ProvisionError::Provider(e.to_string()))?;
        let verified_attr = AttributeType::builder()
            .name("email_verified")
            .value("true")
            .build()
            .map_err(|e| ProvisionError::Provider(e.to_string()))?;

        debug!(%username, pool = %self.user_pool_id, "admin_create_user");
        self.client
            .admin_create_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .temporary_password(temporary_password)
            .user_attributes(email_attr)
            .user_attributes(verified_attr)
            .message_action(MessageActionType::Suppress)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_username_exists_exception() {
                    ProvisionError::UserExists(username.to_string())
                } else if service_err.is_invalid_password_exception() {
                    ProvisionError::PasswordPolicy
                } else {
                    provider_error(&service_err)
                }
            })?;

        Ok(())
    }

    async fn set_permanent_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), ProvisionError> {
        debug!(%username, "admin_set_user_password");
        self.client
            .admin_set_user_password()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .password(password)
            .permanent(true)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_invalid_password_exception() {
                    ProvisionError::PasswordPolicy
                } else {
                    provider_error(&service_err)
                }
            })?;

        Ok(())
    }

    async fn add_user_to_group(&self, username: &str, group: &str) -> Result<(), ProvisionError> {
        debug!(%username, %group, "admin_add_user_to_group");
        self.client
            .admin_add_user_to_group()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .group_name(group)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_resource_not_found_exception() {
                    ProvisionError::GroupNotFound(group.to_string())
                } else {
                    provider_error(&service_err)
                }
            })?;

        Ok(())
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, ProvisionError> {
        let client_id = self.client_id()?.to_string();

        debug!(%username, "admin_initiate_auth");
        let response = self
            .client
            .admin_initiate_auth()
            .user_pool_id(&self.user_pool_id)
            .client_id(client_id)
            .auth_flow(AuthFlowType::AdminNoSrpAuth)
            .auth_parameters("USERNAME", username)
            .auth_parameters("PASSWORD", password)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                ProvisionError::AuthFailed {
                    username: username.to_string(),
                    reason: service_err
                        .message()
                        .unwrap_or("authentication was rejected")
                        .to_string(),
                }
            })?;

        response
            .authentication_result()
            .and_then(|result| result.access_token())
            .map(str::to_string)
            .ok_or_else(|| ProvisionError::AuthFailed {
                username: username.to_string(),
                reason: "no access token in the authentication result (challenge pending?)"
                    .to_string(),
            })
    }
}
