//! Admin session gate.
//!
//! A boolean marker in the `adminAuth` slot, set when the candidate password
//! equals the configured secret. This is a UX gate that hides the admin
//! screens; it is not a trust boundary. Anything with access to the store can
//! set the marker directly, the secret is compared in plain text, and there is
//! no lockout, rate limit or expiry.

use tracing::{info, warn};

use crate::{Error, Result, slot, store::SlotStore};

/// The value stored in `adminAuth` while a session is open.
pub const AUTH_MARKER: &str = "true";

pub struct SessionGate<'d, S: ?Sized> {
  store:  &'d S,
  secret: &'d str,
}

impl<'d, S: SlotStore + ?Sized> SessionGate<'d, S> {
  pub fn new(store: &'d S, secret: &'d str) -> Self { Self { store, secret } }

  /// `true` iff the flag slot holds exactly [`AUTH_MARKER`].
  pub fn is_authenticated(&self) -> Result<bool> {
    let flag = self.store.get(slot::ADMIN_AUTH).map_err(Error::store)?;
    Ok(flag.as_deref() == Some(AUTH_MARKER))
  }

  /// Open a session if `candidate` matches. A rejected attempt leaves any
  /// existing session untouched.
  pub fn login(&self, candidate: &str) -> Result<bool> {
    if candidate != self.secret {
      warn!("admin login rejected");
      return Ok(false);
    }
    self
      .store
      .set(slot::ADMIN_AUTH, AUTH_MARKER)
      .map_err(Error::store)?;
    info!("admin session opened");
    Ok(true)
  }

  pub fn logout(&self) -> Result<()> {
    self.store.remove(slot::ADMIN_AUTH).map_err(Error::store)?;
    info!("admin session closed");
    Ok(())
  }
}
