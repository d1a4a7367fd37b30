//! Cross-user isolation and corrupt-blob behavior of the namespaced
//! store, plus the session context that gates access to it.

use visualiza_console::ConsoleError;
use visualiza_console::models::premium::PremiumClientProcedure;
use visualiza_console::models::session::{CurrentUser, keys};
use visualiza_console::services::premium::PremiumClientArea;
use visualiza_console::services::productivity::{NewClient, ProductivityTracker};
use visualiza_console::storage::StorageBackend;
use visualiza_core::{StorageKey, UserId};

use visualiza_integration_tests::TestContext;

use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn test_two_users_never_see_each_other() {
    let ctx = TestContext::new();
    let alice = UserId::new("alice-id");
    let bruna = UserId::new("bruna-id");

    let mut alice_tracker = ProductivityTracker::load(ctx.store.clone(), alice.clone());
    alice_tracker
        .add_client(
            NewClient {
                name: "Cliente da Alice".to_owned(),
                ..NewClient::default()
            },
            today(),
        )
        .unwrap();

    let bruna_tracker = ProductivityTracker::load(ctx.store.clone(), bruna.clone());
    assert!(bruna_tracker.clients().is_empty());
    assert!(bruna_tracker.badges().iter().all(|badge| !badge.unlocked));

    let mut bruna_area = PremiumClientArea::load(ctx.store.clone(), bruna);
    bruna_area.unlock().unwrap();
    let alice_area = PremiumClientArea::load(ctx.store.clone(), alice);
    assert!(!alice_area.is_unlocked());
}

#[test]
fn test_corrupt_blob_reads_as_absent() {
    let ctx = TestContext::new();
    let user = UserId::new("u1");

    ctx.backend
        .set(
            &StorageKey::PremiumClientProcedures.physical(&user),
            "{not json",
        )
        .unwrap();

    let loaded: Option<Vec<PremiumClientProcedure>> =
        ctx.store.load(StorageKey::PremiumClientProcedures, &user);
    assert!(loaded.is_none());

    // Services over the same blob start from scratch rather than failing.
    let area = PremiumClientArea::load(ctx.store.clone(), user);
    assert!(area.procedures().is_empty());
}

#[test]
fn test_session_gates_identity() {
    let ctx = TestContext::new();
    assert!(ctx.session.current_user().is_none());
    assert!(matches!(
        ctx.session.require_user(),
        Err(ConsoleError::NotAuthenticated)
    ));

    let user = CurrentUser {
        id: UserId::new("u1"),
        email: "marina@visualiza.app.br".parse().unwrap(),
        name: "Marina".to_owned(),
    };
    ctx.session.set_current_user(&user).unwrap();

    let current = ctx.session.require_user().unwrap();
    assert_eq!(current.id, user.id);

    // Another tab over the same storage shares the session.
    let reopened = ctx.reopen();
    assert_eq!(reopened.session.current_user().unwrap().id, user.id);

    ctx.session.clear_current_user();
    assert!(ctx.session.current_user().is_none());
}

#[test]
fn test_corrupt_session_blob_is_treated_as_signed_out() {
    let ctx = TestContext::new();
    ctx.backend.set(keys::CURRENT_USER, "][").unwrap();
    assert!(ctx.session.current_user().is_none());
}
