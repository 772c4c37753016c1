use std::fmt;
use std::ops::Deref;

use yew::prelude::*;

use crate::types::{AlertAction, Alerts, UserContext};

/// State handle for the [`use_user_context`] hook.
pub struct UseUserContextHandle {
    inner: UseStateHandle<UserContext>,
}

impl UseUserContextHandle {
    pub fn logout_locally(&self) {
        self.inner.set(UserContext::Anonymous);
    }
}

impl Deref for UseUserContextHandle {
    type Target = UserContext;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Clone for UseUserContextHandle {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl PartialEq for UseUserContextHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl fmt::Debug for UseUserContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseUserContextHandle")
            .field("value", &format!("{:?}", *self.inner))
            .finish()
    }
}

/// This hook is used to read the session context.
#[hook]
pub fn use_user_context() -> UseUserContextHandle {
    let inner = use_context::<UseStateHandle<UserContext>>().unwrap();

    UseUserContextHandle { inner }
}

/// State handle for the [`use_alerts`] hook.
pub struct UseAlertsHandle {
    inner: UseReducerHandle<Alerts>,
}

impl UseAlertsHandle {
    pub fn dispatch(&self, action: AlertAction) {
        self.inner.dispatch(action);
    }

    pub fn begin_fade(&self, id: usize) {
        self.inner.dispatch(AlertAction::BeginFade(id));
    }

    pub fn remove(&self, id: usize) {
        self.inner.dispatch(AlertAction::Remove(id));
    }
}

impl Deref for UseAlertsHandle {
    type Target = Alerts;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Clone for UseAlertsHandle {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl PartialEq for UseAlertsHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl fmt::Debug for UseAlertsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseAlertsHandle")
            .field("value", &format!("{:?}", *self.inner))
            .finish()
    }
}

/// This hook is used to show and dismiss notification banners.
#[hook]
pub fn use_alerts() -> UseAlertsHandle {
    let inner = use_context::<UseReducerHandle<Alerts>>().unwrap();

    UseAlertsHandle { inner }
}
