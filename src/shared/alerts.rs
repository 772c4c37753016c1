use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_alerts;
use crate::types::{Alert, Alerts, ALERT_FADE_MS};

#[derive(Properties, Clone, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

#[function_component(AlertsProvider)]
pub fn alerts_provider(props: &ProviderProps) -> Html {
    let alerts = use_reducer(Alerts::default);

    html! {
        <ContextProvider<UseReducerHandle<Alerts>> context={alerts}>
            { for props.children.iter() }
        </ContextProvider<UseReducerHandle<Alerts>>>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EntryProps {
    pub alert: Alert,
    pub on_fade: Callback<usize>,
    pub on_remove: Callback<usize>,
}

#[function_component(AlertEntry)]
pub fn alert_entry(props: &EntryProps) -> Html {
    // Two deferred steps per banner: hide after `duration`, then drop from
    // the page once the fade transition has run. Neither is cancellable;
    // manual dismissal removes the entry and the late callbacks find an
    // unknown id and no-op.
    {
        let on_fade = props.on_fade.clone();
        use_effect_with_deps(
            move |(id, duration): &(usize, u32)| {
                let id = *id;
                let timeout = Timeout::new(*duration, move || on_fade.emit(id));
                timeout.forget();
            },
            (props.alert.id, props.alert.duration),
        );
    }

    {
        let on_remove = props.on_remove.clone();
        use_effect_with_deps(
            move |(id, fading): &(usize, bool)| {
                if *fading {
                    let id = *id;
                    let timeout = Timeout::new(ALERT_FADE_MS, move || on_remove.emit(id));
                    timeout.forget();
                }
            },
            (props.alert.id, props.alert.fading),
        );
    }

    let classes = classes!(
        "alert",
        props.alert.severity.css_class(),
        "alert-dismissible",
        "fade",
        (!props.alert.fading).then_some("show"),
    );

    let dismiss = {
        let on_remove = props.on_remove.clone();
        let id = props.alert.id;
        Callback::from(move |_| on_remove.emit(id))
    };

    // Escaped when the alert was created, so raw insertion cannot introduce
    // markup.
    let message = Html::from_html_unchecked(AttrValue::from(props.alert.markup.clone()));

    html! {
        <div class={classes} role="alert">
            { message }
            <button type="button" class="btn-close" aria-label="Close" onclick={dismiss}></button>
        </div>
    }
}

#[function_component(AlertsContainer)]
pub fn alerts_container() -> Html {
    let alerts = use_alerts();

    let on_fade = {
        let alerts = alerts.clone();
        Callback::from(move |id| alerts.begin_fade(id))
    };

    let on_remove = {
        let alerts = alerts.clone();
        Callback::from(move |id| alerts.remove(id))
    };

    html! {
        <div id="alert-container">
            { for alerts.entries.iter().map(|alert| html! {
                <AlertEntry key={alert.id} alert={alert.clone()}
                    on_fade={on_fade.clone()} on_remove={on_remove.clone()} />
            }) }
        </div>
    }
}
