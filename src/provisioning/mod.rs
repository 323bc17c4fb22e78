//! Account provisioning against the identity provider.
//!
//! The provider sits behind [`IdentityProvider`] so the workflows can run
//! against a mock in tests and the concrete backend (Cognito) can be swapped
//! without touching the CLI logic.

pub mod cognito;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("user '{0}' already exists")]
    UserExists(String),

    #[error("group '{0}' does not exist; create it in the identity provider first")]
    GroupNotFound(String),

    #[error("password does not meet the user pool's security requirements")]
    PasswordPolicy,

    #[error("authentication failed for '{username}': {reason}")]
    AuthFailed { username: String, reason: String },

    #[error("identity provider error: {0}")]
    Provider(String),
}

/// The four capabilities the provisioning CLIs need from an identity provider.
#[async_trait]
pub trait IdentityProvider {
    /// Create an account with a temporary password and a pre-verified email.
    /// No welcome message is sent.
    async fn create_user(
        &self,
        username: &str,
        temporary_password: &str,
        email: &str,
    ) -> Result<(), ProvisionError>;

    /// Promote the password to permanent so no reset challenge is pending.
    async fn set_permanent_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), ProvisionError>;

    async fn add_user_to_group(&self, username: &str, group: &str) -> Result<(), ProvisionError>;

    /// Authenticate and return an access token.
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<String, ProvisionError>;
}

/// Create an account, make its password permanent, and place it in a group.
/// Each step is attempted once; the first failure aborts the rest.
pub async fn create_user_with_group(
    provider: &dyn IdentityProvider,
    username: &str,
    password: &str,
    email: &str,
    group: &str,
) -> Result<(), ProvisionError> {
    info!(%username, "Creating user");
    provider.create_user(username, password, email).await?;

    info!(%username, "Setting permanent password");
    provider.set_permanent_password(username, password).await?;

    info!(%username, %group, "Adding user to group");
    provider.add_user_to_group(username, group).await?;

    Ok(())
}

/// Authenticate and render a ready-to-run curl command with the bearer token,
/// for manual testing against the deployed API.
pub async fn curl_snippet(
    provider: &dyn IdentityProvider,
    username: &str,
    password: &str,
    url: &str,
) -> Result<String, ProvisionError> {
    let token = provider.authenticate(username, password).await?;

    Ok(format!(
        "# curl command for user: {username}\n\
         curl -H \"Authorization: Bearer {token}\" \\\n\
         \x20    -H \"X-Test-IP: 190.14.255.110\" \\\n\
         \x20    -H \"Content-Type: application/json\" \\\n\
         \x20    -X POST \\\n\
         \x20    -d '{{\"vendor_id\":\"v1\",\"period\":\"trimestral\",\"start_date\":\"2025-01-01\",\"end_date\":\"2025-03-31\"}}' \\\n\
         \x20    {url}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory provider that tracks usernames and records every mutating
    /// call, so tests can assert what ran and in what order.
    #[derive(Default)]
    struct MockProvider {
        users: Mutex<HashSet<String>>,
        known_groups: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn with_groups(groups: &[&str]) -> Self {
            Self {
                known_groups: groups.iter().map(|g| g.to_string()).collect(),
                ..Default::default()
            }
        }

        fn log(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IdentityProvider for MockProvider {
        async fn create_user(
            &self,
            username: &str,
            _temporary_password: &str,
            _email: &str,
        ) -> Result<(), ProvisionError> {
            self.log(format!("create_user:{username}"));
            let mut users = self.users.lock().unwrap();
            if !users.insert(username.to_string()) {
                return Err(ProvisionError::UserExists(username.to_string()));
            }
            Ok(())
        }

        async fn set_permanent_password(
            &self,
            username: &str,
            _password: &str,
        ) -> Result<(), ProvisionError> {
            self.log(format!("set_password:{username}"));
            Ok(())
        }

        async fn add_user_to_group(
            &self,
            username: &str,
            group: &str,
        ) -> Result<(), ProvisionError> {
            self.log(format!("add_to_group:{username}:{group}"));
            if !self.known_groups.iter().any(|g| g == group) {
                return Err(ProvisionError::GroupNotFound(group.to_string()));
            }
            Ok(())
        }

        async fn authenticate(
            &self,
            username: &str,
            _password: &str,
        ) -> Result<String, ProvisionError> {
            if self.users.lock().unwrap().contains(username) {
                Ok(format!("token-for-{username}"))
            } else {
                Err(ProvisionError::AuthFailed {
                    username: username.to_string(),
                    reason: "unknown user".to_string(),
                })
            }
        }
    }

    #[tokio::test]
    async fn create_user_with_group_runs_all_three_steps() {
        let provider = MockProvider::with_groups(&["clientes"]);
        create_user_with_group(&provider, "cliente.pedro", "P@ss123!", "p@x.com", "clientes")
            .await
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![
                "create_user:cliente.pedro",
                "set_password:cliente.pedro",
                "add_to_group:cliente.pedro:clientes",
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_username_aborts_before_any_further_mutation() {
        let provider = MockProvider::with_groups(&["clientes"]);
        create_user_with_group(&provider, "cliente.pedro", "P@ss123!", "p@x.com", "clientes")
            .await
            .unwrap();

        let err =
            create_user_with_group(&provider, "cliente.pedro", "P@ss123!", "p@x.com", "clientes")
                .await
                .unwrap_err();
        assert!(matches!(err, ProvisionError::UserExists(u) if u == "cliente.pedro"));

        // Second run must stop at the failed create: exactly one extra call.
        assert_eq!(provider.calls().len(), 4);
        assert_eq!(provider.calls()[3], "create_user:cliente.pedro");
    }

    #[tokio::test]
    async fn unknown_group_is_classified() {
        let provider = MockProvider::with_groups(&[]);
        let err = create_user_with_group(&provider, "u", "P@ss123!", "u@x.com", "ghosts")
            .await
            .unwrap_err();
        assert!(matches!(err, ProvisionError::GroupNotFound(g) if g == "ghosts"));
    }

    #[tokio::test]
    async fn curl_snippet_embeds_the_token_and_url() {
        let provider = MockProvider::with_groups(&["clientes"]);
        provider
            .create_user("cliente.pedro", "P@ss123!", "p@x.com")
            .await
            .unwrap();

        let snippet = curl_snippet(
            &provider,
            "cliente.pedro",
            "P@ss123!",
            "https://api.example.com/reports/sales-report",
        )
        .await
        .unwrap();

        assert!(snippet.contains("Bearer token-for-cliente.pedro"));
        assert!(snippet.contains("https://api.example.com/reports/sales-report"));
        assert!(snippet.starts_with("# curl command for user: cliente.pedro"));
    }

    #[tokio::test]
    async fn curl_snippet_surfaces_auth_failure() {
        let provider = MockProvider::default();
        let err = curl_snippet(&provider, "nobody", "pw", "https://x").await.unwrap_err();
        assert!(matches!(err, ProvisionError::AuthFailed { .. }));
    }
}
