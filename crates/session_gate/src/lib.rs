mod cookie;
mod guard;
mod login;
mod password;
mod session;
mod store;

pub use cookie::cookie_value;
pub use guard::{decide, GuardDecision, GuardKind, GuardState};
pub use login::{classify_login_response, settle_login, LoginOutcome, LoginResult};
pub use password::{PasswordError, PasswordPolicy, DEFAULT_MIN_PASSWORD_LENGTH};
pub use session::{PendingReset, PendingResetStore, Session, SessionStore};
pub use store::{
    KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, RESET_CURRENT_PASSWORD_KEY, RESET_USERNAME_KEY,
    USERNAME_KEY, USER_ID_KEY,
};
