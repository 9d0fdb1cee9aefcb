use crate::account::{AccountClient, AccountRequest, AccountResponse};
use crate::SessionError;

/// Creates a new account.
///
/// Registration does not log the account in; the caller runs
/// [`LoginAction`](super::LoginAction) afterwards if it wants a session.
pub struct RegisterAction<A: AccountClient> {
    accounts: A,
}

impl<A: AccountClient> RegisterAction<A> {
    pub fn new(accounts: A) -> Self {
        RegisterAction { accounts }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "register", skip_all, err)
    )]
    pub async fn execute(
        &self,
        request: &AccountRequest,
    ) -> Result<AccountResponse, SessionError> {
        let account = self.accounts.create_account(request).await?;

        log::info!(
            target: "vestibule_session",
            "msg=\"account created\", email=\"{}\"",
            account.email
        );

        Ok(account)
    }
}
