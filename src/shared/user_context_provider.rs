//! User context provider.

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::services::load_session;
use crate::types::UserContext;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Establishes the session context once, at mount. Session changes after
/// load are only observed on the next page load.
#[function_component(UserContextProvider)]
pub fn user_context_provider(props: &Props) -> Html {
    let user_ctx = use_state(UserContext::default);

    {
        let user_ctx = user_ctx.clone();
        use_mount(move || match load_session() {
            Some(user) => {
                log::info!("user-context: restored session for {}", user.id);
                user_ctx.set(UserContext::User(user));
            }
            None => {
                log::info!("user-context: anonymous");
            }
        });
    }

    html! {
        <ContextProvider<UseStateHandle<UserContext>> context={user_ctx}>
            { for props.children.iter() }
        </ContextProvider<UseStateHandle<UserContext>>>
    }
}
