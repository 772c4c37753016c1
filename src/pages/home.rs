use yew::prelude::*;

use crate::shared::{AlertsContainer, AuthNav};

#[function_component(Home)]
pub fn home_page() -> Html {
    html! {
        <>
            <header>
                <nav class="navbar navbar-expand-lg">
                    <a class="navbar-brand" href="/">{ "Storefront" }</a>
                    <AuthNav create_product={true} />
                </nav>
            </header>
            <AlertsContainer />
            // Page body arrives server-rendered.
            <main id="content" class="container"></main>
        </>
    }
}
