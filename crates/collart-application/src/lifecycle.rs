//! View lifecycle scopes.
//!
//! A [`ViewScope`] is owned by a view model and lives exactly as long as the
//! screen it backs. Closing or dropping it cancels every call still running
//! inside it; those calls resolve to [`CollartError::Cancelled`] and the view
//! model leaves its published state untouched.

use collart_core::error::{CollartError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope that is closed together with `self` but can also be closed alone.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Handle for tasks spawned outside the view model.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Runs `operation` until it completes or the scope closes.
    pub async fn run<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(CollartError::Cancelled),
            result = operation => result,
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
