//! Dashboard page — the fetch cycle and the render step.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tankview_domain::connection::ConnectionState;
use tankview_domain::reading::TankReading;

use crate::components::{
    ConnectionIndicator, LevelChart, Loading, StatCard, StatusBadge, TankGauge,
};
use crate::{api, config, session};

/// Run one complete fetch cycle: flip the indicator to fetching, disable
/// the manual refresh, issue the GET, then render or alert. The refresh
/// control is re-enabled on every exit path.
fn run_fetch_cycle(
    set_connection: WriteSignal<ConnectionState>,
    set_reading: WriteSignal<Option<TankReading>>,
    set_busy: WriteSignal<bool>,
) {
    set_busy.set(true);
    set_connection.set(ConnectionState::Fetching);

    spawn_local(async move {
        match api::fetch_tank_status().await {
            Ok(reading) => {
                set_connection.set(ConnectionState::Connected);
                set_reading.set(Some(reading));
            }
            Err(err) => {
                // The previously rendered reading stays on screen.
                set_connection.set(ConnectionState::Offline);
                logging::error!("failed to fetch tank status: {err}");
                alert(&format!(
                    "Failed to fetch tank data. {}\n\nError: {err}",
                    api::TROUBLESHOOTING_HINTS
                ));
            }
        }
        set_busy.set(false);
    });
}

/// Raise a blocking browser alert.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Dashboard page.
///
/// Fetches once on mount, then on a fixed interval and on the manual
/// refresh button. The timer is not debounced against an in-flight fetch:
/// overlapping cycles each run to completion and the last to finish wins.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (connection, set_connection) = signal(ConnectionState::Idle);
    let (reading, set_reading) = signal(None::<TankReading>);
    let (busy, set_busy) = signal(false);

    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if session::is_logged_in() {
                logging::log!(
                    "tank dashboard initialized; auto-refresh every {}s",
                    config::REFRESH_INTERVAL_MS / 1000
                );
                run_fetch_cycle(set_connection, set_reading, set_busy);
            } else {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    // Recurring refresh timer. Stops ticking once the page is torn down.
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = Rc::clone(&alive);
        move || alive.set(false)
    });
    spawn_local(async move {
        loop {
            TimeoutFuture::new(config::REFRESH_INTERVAL_MS).await;
            if !alive.get() {
                break;
            }
            if session::is_logged_in() {
                run_fetch_cycle(set_connection, set_reading, set_busy);
            }
        }
    });

    let sign_out = move |_| {
        session::clear_login();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Water Tank Dashboard"</h1>
                <ConnectionIndicator state=connection/>
                <button
                    class="btn btn-primary"
                    prop:disabled=busy
                    on:click=move |_| run_fetch_cycle(set_connection, set_reading, set_busy)
                >
                    "Refresh"
                </button>
                <button class="btn btn-secondary" on:click=sign_out>"Sign out"</button>
            </header>

            {move || {
                reading.get().map_or_else(
                    || view! { <Loading/> }.into_any(),
                    |r| {
                        let history = r.history_chronological();
                        view! {
                            <div class="tank-panel">
                                <TankGauge percent=r.level_text()/>
                                <StatusBadge status=r.status.clone()/>
                                <div class="stats">
                                    <StatCard label="Distance" value=r.distance_text()/>
                                    <StatCard label="Device" value=r.device.clone()/>
                                    <StatCard label="Last Updated" value=r.timestamp_text()/>
                                </div>
                                {(!history.is_empty())
                                    .then(|| view! { <LevelChart points=history.clone()/> })}
                            </div>
                        }
                        .into_any()
                    },
                )
            }}
        </div>
    }
}
