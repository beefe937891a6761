//! Identity provider seam

use crate::credentials::{AuthMethod, Credentials, Identity, OAuthProvider};
use crate::error::AuthError;
use async_trait::async_trait;

/// Backend that turns submitted credentials into an identity
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<Identity, AuthError>;

    async fn oauth(&self, provider: OAuthProvider) -> Result<Identity, AuthError>;
}

/// Accepts every submission
#[derive(Debug, Clone, Copy, Default)]
pub struct MockIdentityProvider;

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        tracing::info!("Mock email sign-in for {}", credentials.email);
        Ok(Identity {
            method: AuthMethod::EmailSignIn,
            email: Some(credentials.email.trim().to_string()),
            display_name: None,
        })
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        tracing::info!("Mock account creation for {}", credentials.email);
        Ok(Identity {
            method: AuthMethod::EmailSignUp,
            email: Some(credentials.email.trim().to_string()),
            display_name: credentials.name.clone(),
        })
    }

    async fn oauth(&self, provider: OAuthProvider) -> Result<Identity, AuthError> {
        tracing::info!("Mock OAuth login with {}", provider.name());
        Ok(Identity {
            method: AuthMethod::OAuth(provider),
            email: None,
            display_name: None,
        })
    }
}
