use yew::prelude::*;

use crate::hooks::use_user_context;
use crate::shared::LogoutButton;
use crate::types::UserContext;

/// Render selection for the auth region. Two states, decided from the
/// session context at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    pub authenticated: bool,
    pub show_create_product: bool,
}

impl NavView {
    pub fn of(context: &UserContext) -> Self {
        let authenticated = context.is_authenticated();
        Self {
            authenticated,
            show_create_product: authenticated,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Whether this page carries the create-product control at all.
    #[prop_or_default]
    pub create_product: bool,
}

#[function_component(AuthNav)]
pub fn auth_nav(props: &Props) -> Html {
    let user_ctx = use_user_context();
    let view = NavView::of(&user_ctx);

    let create_product = props.create_product.then(|| {
        let style = if view.show_create_product {
            "display: block"
        } else {
            "display: none"
        };
        html! {
            <a href="/products/new" class="nav-link" id="nav-create-product" style={style}>
                { "New product" }
            </a>
        }
    });

    let auth = if view.authenticated {
        html! { <LogoutButton /> }
    } else {
        html! {
            <>
                <a href="/login" class="btn btn-outline-primary me-2">{ "Sign in" }</a>
                <a href="/register" class="btn btn-primary">{ "Register" }</a>
            </>
        }
    };

    html! {
        <>
            { for create_product }
            <div id="auth-nav">{ auth }</div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserInfo;

    #[test]
    fn active_sessions_get_logout_and_create_product() {
        let view = NavView::of(&UserContext::User(UserInfo {
            id: "7".into(),
            role: "seller".into(),
        }));
        assert!(view.authenticated);
        assert!(view.show_create_product);
    }

    #[test]
    fn anonymous_sessions_get_login_links_only() {
        let view = NavView::of(&UserContext::Anonymous);
        assert!(!view.authenticated);
        assert!(!view.show_create_product);
    }
}
