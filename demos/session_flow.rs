#![allow(
    clippy::print_stdout,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::str_to_string
)]

//! Session Lifecycle Walkthrough
//!
//! A complete example showing the session token flow against mock
//! collaborators: register an account, log in, inspect the session,
//! run the route guards, decorate an outgoing request, and handle a
//! 401 from the server.
//!
//! Run with: `cargo run --example session_flow --features mocks`

use http::StatusCode;

use vestibule::actions::{LoginAction, RegisterAction};
use vestibule::guards::{check_all, AccessGuard, ProfileCompleteGuard};
use vestibule::interceptors::{attach_authorization, UnauthorizedInterceptor};
use vestibule::store::{InMemoryStorage, TokenStore};
use vestibule::{
    AccountRequest, Credentials, MockAccountClient, MockProfileClient, RecordingNavigator,
    SessionState, UserProfile,
};

#[tokio::main]
async fn main() {
    let accounts = MockAccountClient::new();
    let profiles = MockProfileClient::new();
    let store = TokenStore::new(InMemoryStorage::new());
    let session = SessionState::new(store.clone());
    let navigator = RecordingNavigator::new();

    // Register an account
    let register = RegisterAction::new(accounts.clone());
    let account = register
        .execute(&AccountRequest::new("ada@example.com", "securepassword123"))
        .await
        .unwrap();
    println!("registered account #{} for {}", account.id, account.email);

    // Seed a complete profile for the new account
    profiles.profiles.lock().unwrap().push(UserProfile {
        id: Some(account.id),
        email: account.email.clone(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        birth_date: chrono::NaiveDate::from_ymd_opt(1815, 12, 10),
    });

    // Log in; the token lands in the store before execute returns
    let login = LoginAction::new(accounts, profiles.clone(), store.clone());
    let (_, profile) = login
        .execute_with_profile(&Credentials::new("ada@example.com", "securepassword123"))
        .await
        .unwrap();
    println!(
        "logged in as {:?}, profile complete: {}",
        session.subject_email(),
        profile.map(|p| p.is_complete()).unwrap_or(false)
    );
    println!("session snapshot: {:?}", session.snapshot());

    // Route guards: both allow for a live session with a complete profile
    let access = AccessGuard::new(session.clone(), navigator.clone());
    let complete = ProfileCompleteGuard::new(session.clone(), profiles, navigator.clone());
    let decision = check_all(&[&access, &complete]).await;
    println!("guard chain: {decision:?}");

    // Outgoing requests get the bearer header while the session is live
    let mut headers = http::HeaderMap::new();
    attach_authorization(&mut headers, &session);
    println!(
        "authorization header attached: {}",
        headers.contains_key(http::header::AUTHORIZATION)
    );

    // The server revokes the session: a 401 forces a local logout
    let interceptor = UnauthorizedInterceptor::new(store, navigator.clone());
    interceptor.handle_status(StatusCode::UNAUTHORIZED);
    println!(
        "after 401: authenticated={}, redirected to {:?}",
        session.is_authenticated(),
        navigator.last()
    );
}
