use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    fn event_name(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Online => "Back online",
            Self::Offline => "You are offline",
        }
    }

    fn banner_style(self) -> &'static str {
        match self {
            Self::Online => {
                "position: fixed; top: 80px; right: 20px; padding: 8px 16px; background: #22c55e; \
                 color: white; border-radius: 8px; font-size: 14px; z-index: 9999; transition: all 0.3s ease;"
            }
            Self::Offline => {
                "position: fixed; top: 80px; right: 20px; padding: 8px 16px; background: #ef4444; \
                 color: white; border-radius: 8px; font-size: 14px; z-index: 9999; transition: all 0.3s ease;"
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConnectionStatusProps {
    pub lifetime_ms: u32,
}

/// Transient banner for `online`/`offline` transitions. A newer status replaces the
/// banner on screen and restarts its dismissal timer.
#[function_component(ConnectionStatus)]
pub fn connection_status(props: &ConnectionStatusProps) -> Html {
    let status = use_state(|| None::<Connectivity>);
    let dismiss = use_mut_ref(|| None::<Timeout>);

    {
        let status = status.clone();
        let dismiss = dismiss.clone();
        let lifetime_ms = props.lifetime_ms;
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|window| {
                [Connectivity::Online, Connectivity::Offline].map(|connectivity| {
                    let status = status.clone();
                    let dismiss = dismiss.clone();
                    EventListener::new(&window, connectivity.event_name(), move |_| {
                        log::info!("connection status: {}", connectivity.event_name());
                        status.set(Some(connectivity));
                        let status = status.clone();
                        *dismiss.borrow_mut() =
                            Some(Timeout::new(lifetime_ms, move || status.set(None)));
                    })
                })
            });
            move || drop(listeners)
        });
    }

    match *status {
        Some(connectivity) => html! {
            <div
                class={classes!("connection-status", connectivity.event_name())}
                style={connectivity.banner_style()}
                role="status"
            >
                {connectivity.label()}
            </div>
        },
        None => html! {},
    }
}
