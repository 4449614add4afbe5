use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crate::{
    config::Config,
    error::AuthError,
    management::store::{CODE_VERIFIER_KEY, KeyValueStore, TOKEN_KEY},
    spotify, utils, warning,
};

/// Length of the generated PKCE code verifier.
pub const CODE_VERIFIER_LENGTH: usize = 64;

/// Where the login currently stands, as far as the store can tell.
///
/// `ExchangingCode` is held in memory only, for as long as
/// [`AuthSession::complete_login`] is waiting on the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    PendingRedirect,
    ExchangingCode,
    Authenticated,
}

/// Result of handing an authorization code to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The code was exchanged and the token stored.
    Authenticated,
    /// A token was already stored; the code was ignored.
    AlreadyAuthenticated,
}

/// Owns the PKCE login flow and the persisted credentials.
#[derive(Clone)]
pub struct AuthSession {
    config: Arc<Config>,
    store: Arc<dyn KeyValueStore>,
    exchanging: Arc<AtomicBool>,
    exchange_failed: Arc<AtomicBool>,
}

/// Clears the in-flight flag on every exit path of an exchange.
struct ExchangeGuard<'a>(&'a AtomicBool);

impl Drop for ExchangeGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AuthSession {
    pub fn new(config: Config, store: impl KeyValueStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            exchanging: Arc::new(AtomicBool::new(false)),
            exchange_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_shared_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            exchanging: Arc::new(AtomicBool::new(false)),
            exchange_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a login and returns the URL the user has to visit.
    ///
    /// A fresh verifier replaces any pending one, so only the most recent
    /// login can be completed.
    pub async fn begin_login(&self) -> Result<String, AuthError> {
        let code_verifier = utils::generate_code_verifier(CODE_VERIFIER_LENGTH);
        let code_challenge = utils::generate_code_challenge(&code_verifier);

        self.store.set(CODE_VERIFIER_KEY, &code_verifier).await?;
        self.exchange_failed.store(false, Ordering::SeqCst);

        Ok(spotify::auth::authorize_url(&self.config, &code_challenge))
    }

    /// Exchanges the authorization code that came back from the redirect.
    ///
    /// Does nothing when a token is stored already, which makes a replayed
    /// callback harmless. On success the token is stored and the verifier
    /// is cleared; on failure nothing is stored, the verifier stays and
    /// [`AuthSession::wait_for_token`] stops waiting.
    pub async fn complete_login(&self, code: &str) -> Result<LoginOutcome, AuthError> {
        if self.store.get(TOKEN_KEY).await?.is_some() {
            return Ok(LoginOutcome::AlreadyAuthenticated);
        }

        let verifier = self
            .store
            .get(CODE_VERIFIER_KEY)
            .await?
            .ok_or(AuthError::MissingVerifier)?;

        self.exchanging.store(true, Ordering::SeqCst);
        let _guard = ExchangeGuard(&self.exchanging);

        let result = self.exchange_and_store(code, &verifier).await;
        self.exchange_failed.store(result.is_err(), Ordering::SeqCst);
        result.map(|_| LoginOutcome::Authenticated)
    }

    async fn exchange_and_store(&self, code: &str, verifier: &str) -> Result<(), AuthError> {
        let token = spotify::auth::exchange_code(&self.config, code, verifier).await?;

        self.store.set(TOKEN_KEY, &token).await?;
        self.store.remove(CODE_VERIFIER_KEY).await?;
        Ok(())
    }

    /// Polls the store once a second until a token shows up.
    ///
    /// Gives up with `None` after `max_wait`, or as soon as the last code
    /// exchange of this login has failed.
    pub async fn wait_for_token(&self, max_wait: Duration) -> Option<String> {
        let start = Instant::now();

        while start.elapsed() < max_wait {
            if let Some(token) = self.current_token().await {
                return Some(token);
            }
            if self.exchange_failed.load(Ordering::SeqCst) {
                return None;
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        None
    }

    /// Returns the stored access token, if any.
    ///
    /// A store that cannot be read is logged and treated as holding no token.
    pub async fn current_token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY).await {
            Ok(token) => token,
            Err(e) => {
                warning!("Cannot read stored token. Err: {}", e);
                None
            }
        }
    }

    /// Derives the session state from what is persisted and any exchange in flight.
    pub async fn state(&self) -> AuthState {
        if self.exchanging.load(Ordering::SeqCst) {
            return AuthState::ExchangingCode;
        }
        if self.current_token().await.is_some() {
            return AuthState::Authenticated;
        }

        match self.store.get(CODE_VERIFIER_KEY).await {
            Ok(Some(_)) => AuthState::PendingRedirect,
            _ => AuthState::Unauthenticated,
        }
    }
}
