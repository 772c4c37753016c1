use yew::prelude::*;

use crate::pages::Home;
use crate::shared::{AlertsProvider, UserContextProvider};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <UserContextProvider>
            <AlertsProvider>
                <div id="app">
                    <Home />
                </div>
            </AlertsProvider>
        </UserContextProvider>
    }
}
