//! Route-guard decisions.
//!
//! A guard instance starts in [`GuardState::Unknown`], performs exactly one
//! session read, and settles into `Authorized` or `Unauthorized`. The check is
//! not re-evaluated if the session changes in another tab during the
//! component's lifetime; staleness is only picked up on the next navigation.

use crate::session::Session;

/// Which side of the session boundary a screen belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Requires an authenticated session; anonymous visitors are sent to the
    /// login screen.
    Protected,
    /// Anonymous-only screens (login, reset interstitials); authenticated
    /// visitors are sent to the landing route.
    Public,
}

/// Per-instance guard lifecycle. While `Unknown`, only a neutral placeholder
/// may render: never the children, never a redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unknown,
    Authorized,
    Unauthorized,
}

/// Result of the one-shot check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect,
}

/// Decides whether a screen of the given kind may render for this session.
///
/// Absence of a token is a normal branch, not an error. A malformed stored
/// token is indistinguishable from a valid one here; the first authenticated
/// request surfaces it as a 401.
pub fn decide(kind: GuardKind, session: &Session) -> GuardDecision {
    match (kind, session.is_authenticated()) {
        (GuardKind::Protected, true) | (GuardKind::Public, false) => GuardDecision::Render,
        _ => GuardDecision::Redirect,
    }
}

#[cfg(test)]
mod tests {
    use super::{decide, GuardDecision, GuardKind};
    use crate::session::Session;

    fn authenticated() -> Session {
        Session {
            token: Some("abc123".to_string()),
            username: Some("alice".to_string()),
            user_id: None,
        }
    }

    #[test]
    fn protected_renders_only_with_token() {
        assert_eq!(
            decide(GuardKind::Protected, &authenticated()),
            GuardDecision::Render
        );
        assert_eq!(
            decide(GuardKind::Protected, &Session::default()),
            GuardDecision::Redirect
        );
    }

    #[test]
    fn public_is_the_exact_complement_of_protected() {
        for session in [authenticated(), Session::default()] {
            let protected = decide(GuardKind::Protected, &session);
            let public = decide(GuardKind::Public, &session);
            assert_ne!(protected, public, "guards must disagree for {session:?}");
        }
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let session = Session {
            token: Some(String::new()),
            ..Session::default()
        };
        assert_eq!(
            decide(GuardKind::Protected, &session),
            GuardDecision::Redirect
        );
        assert_eq!(decide(GuardKind::Public, &session), GuardDecision::Render);
    }
}
