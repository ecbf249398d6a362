//! End-to-end settlement of login and reset flows over in-memory stores.

use session_gate::{
    classify_login_response, decide, settle_login, GuardDecision, GuardKind, LoginOutcome,
    MemoryStore, PendingReset, PendingResetStore, Session, SessionStore,
};

fn stores() -> (SessionStore<MemoryStore>, PendingResetStore<MemoryStore>) {
    (
        SessionStore::new(MemoryStore::new()),
        PendingResetStore::new(MemoryStore::new()),
    )
}

#[test]
fn successful_login_persists_session_and_clears_stash() {
    let (sessions, resets) = stores();
    // Stale stash from an abandoned interstitial must not survive a login.
    resets.stash("alice", "old-temp-pw");

    let result = classify_login_response(200, r#"{"token":"abc123"}"#);
    let outcome = settle_login(result, "alice", "correctpw", &sessions, &resets);

    assert_eq!(outcome, LoginOutcome::Authenticated);
    let session = sessions.get();
    assert_eq!(session.token.as_deref(), Some("abc123"));
    assert_eq!(session.username.as_deref(), Some("alice"));
    assert_eq!(resets.get(), None);
}

#[test]
fn echoed_username_wins_over_submitted_identifier() {
    let (sessions, resets) = stores();

    let body = r#"{"token":"abc123","user":{"id":42,"username":"alice"}}"#;
    let result = classify_login_response(200, body);
    settle_login(result, "alice@example.com", "correctpw", &sessions, &resets);

    let session = sessions.get();
    assert_eq!(session.username.as_deref(), Some("alice"));
    assert_eq!(session.user_id.as_deref(), Some("42"));
}

#[test]
fn reset_required_stashes_credentials_without_touching_session() {
    let (sessions, resets) = stores();

    let body = r#"{"error":"You must change your password before logging in.","must_reset_password":true,"redirect_url":"/set-password"}"#;
    let result = classify_login_response(403, body);
    let outcome = settle_login(result, "bob", "expired-pw", &sessions, &resets);

    match outcome {
        LoginOutcome::ResetRequired { redirect_url, .. } => {
            assert_eq!(redirect_url.as_deref(), Some("/set-password"));
        }
        other => panic!("expected reset-required outcome, got {other:?}"),
    }
    assert_eq!(sessions.get(), Session::default());
    assert_eq!(
        resets.get(),
        Some(PendingReset {
            username: "bob".to_string(),
            current_password: "expired-pw".to_string(),
        })
    );
}

#[test]
fn reset_required_preserves_an_existing_session() {
    let (sessions, resets) = stores();
    sessions.set("previous-token", "carol", None);

    let body = r#"{"error":"rotate","must_reset_password":true}"#;
    let result = classify_login_response(403, body);
    settle_login(result, "bob", "expired-pw", &sessions, &resets);

    // Session keeps its previous value; only the stash changes.
    assert_eq!(sessions.get().token.as_deref(), Some("previous-token"));
    assert_eq!(sessions.get().username.as_deref(), Some("carol"));
}

#[test]
fn rejected_login_leaves_both_stores_untouched() {
    let (sessions, resets) = stores();

    let result = classify_login_response(400, r#"{"error":"Invalid username or password."}"#);
    let outcome = settle_login(result, "mallory", "guess", &sessions, &resets);

    assert_eq!(
        outcome,
        LoginOutcome::Rejected {
            message: "Invalid username or password.".to_string(),
        }
    );
    assert_eq!(sessions.get(), Session::default());
    assert_eq!(resets.get(), None);
}

#[test]
fn completed_reset_clears_stash_and_never_creates_a_session() {
    let (sessions, resets) = stores();
    resets.stash("bob", "expired-pw");

    // The interstitial clears the stash on success; the user is sent back to
    // the login screen rather than silently authenticated.
    resets.clear();

    assert_eq!(resets.get(), None);
    assert_eq!(sessions.get(), Session::default());
    assert_eq!(
        decide(GuardKind::Protected, &sessions.get()),
        GuardDecision::Redirect
    );
}

#[test]
fn guards_flip_exactly_at_the_session_boundary() {
    let (sessions, resets) = stores();

    assert_eq!(
        decide(GuardKind::Public, &sessions.get()),
        GuardDecision::Render
    );

    let result = classify_login_response(200, r#"{"token":"abc123"}"#);
    settle_login(result, "alice", "correctpw", &sessions, &resets);
    assert_eq!(
        decide(GuardKind::Protected, &sessions.get()),
        GuardDecision::Render
    );
    assert_eq!(
        decide(GuardKind::Public, &sessions.get()),
        GuardDecision::Redirect
    );

    sessions.clear();
    assert_eq!(
        decide(GuardKind::Protected, &sessions.get()),
        GuardDecision::Redirect
    );
}
