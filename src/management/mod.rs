mod session;
mod store;

pub use session::AuthSession;
pub use session::AuthState;
pub use session::CODE_VERIFIER_LENGTH;
pub use session::LoginOutcome;
pub use store::CODE_VERIFIER_KEY;
pub use store::FileStore;
pub use store::KeyValueStore;
pub use store::MemoryStore;
pub use store::TOKEN_KEY;
