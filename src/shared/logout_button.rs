use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::errors::Error;
use crate::hooks::{use_alerts, use_user_context};
use crate::services::{sign_out, WebSession};
use crate::types::{AlertAction, Severity, DEFAULT_ALERT_DURATION_MS};

const LOGOUT_FAILED: &str = "Unable to sign out.";

/// The one banner a failed sign-out raises.
fn failure_alert(error: Error) -> AlertAction {
    log::error!("logout failed: {:?}", error);
    AlertAction::Show {
        message: LOGOUT_FAILED.into(),
        severity: Severity::Danger,
        duration: DEFAULT_ALERT_DURATION_MS,
    }
}

#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let user_ctx = use_user_context();
    let alerts = use_alerts();

    let logout = move |_| {
        let user_ctx = user_ctx.clone();
        let alerts = alerts.clone();
        spawn_local(async move {
            match sign_out(&WebSession).await {
                Ok(_) => user_ctx.logout_locally(),
                Err(error) => alerts.dispatch(failure_alert(error)),
            }
        });
    };

    html! {
        <button type="button" class="btn btn-outline-primary" onclick={logout}>{ "Sign out" }</button>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::prelude::Reducible;

    use super::*;
    use crate::types::Alerts;

    #[test]
    fn a_failed_logout_raises_exactly_one_danger_banner() {
        let alerts = Rc::new(Alerts::default()).reduce(failure_alert(Error::RequestError));
        assert_eq!(alerts.entries.len(), 1);
        assert_eq!(alerts.entries[0].severity, Severity::Danger);
        assert_eq!(alerts.entries[0].markup, LOGOUT_FAILED);
        assert_eq!(alerts.entries[0].duration, DEFAULT_ALERT_DURATION_MS);
    }
}
