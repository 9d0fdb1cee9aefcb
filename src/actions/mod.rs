//! Account actions.
//!
//! Each action is a small struct owning the collaborators it needs, with
//! a single `execute` entry point. Actions are where the account API and
//! the token store meet: login stores the token it receives, logout
//! clears it.
//!
//! | Action | Description |
//! |--------|-------------|
//! | [`LoginAction`] | log in, store the token, optionally fetch the profile |
//! | [`LogoutAction`] | clear the session |
//! | [`RegisterAction`] | create an account |

mod login;
mod logout;
mod register;

pub use login::LoginAction;
pub use logout::LogoutAction;
pub use register::RegisterAction;
