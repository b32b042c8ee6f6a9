use std::time::Duration;

use platform_host::next_launch_timestamp_ms;
use system_shell_contract::LaunchTarget;

use super::*;
use crate::apps::{self, AppManifest};

const TRAY_ICONS: [(&str, &str); 5] = [
    ("bell", "Notifications"),
    ("battery", "Battery"),
    ("volume", "Volume"),
    ("bluetooth", "Bluetooth"),
    ("wifi", "Wi-Fi"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    fn time_label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Day-first numeric date with a two-digit year.
    fn date_label(self) -> String {
        format!("{:02}/{:02}/{:02}", self.day, self.month, self.year % 100)
    }
}

fn launch_from_taskbar(runtime: DesktopRuntimeContext, manifest: &AppManifest) {
    let target = LaunchTarget::App {
        app_id: manifest.app_id.as_str().to_string(),
    };
    match apps::launch_action(target, next_launch_timestamp_ms()) {
        Ok(action) => runtime.dispatch_action(action),
        Err(err) => logging::warn!("taskbar launch failed: {err}"),
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let quick_launch = apps::quick_launch_apps()
        .into_iter()
        .map(|manifest| {
            let activity_class = move || {
                let activity = runtime
                    .state
                    .with(|state| state.app_activity(&manifest.app_id));
                format!("taskbar-app {}", activity.css_class())
            };
            view! {
                <button
                    type="button"
                    class=activity_class
                    data-app-id=manifest.app_id.as_str()
                    title=manifest.display_name.as_str()
                    aria-label=format!("Open {}", manifest.display_name)
                    on:click=move |_| launch_from_taskbar(runtime, manifest)
                >
                    <span class="taskbar-app-icon" aria-hidden="true"></span>
                    <span class="taskbar-app-indicator" aria-hidden="true"></span>
                </button>
            }
        })
        .collect_view();

    let tray = TRAY_ICONS
        .into_iter()
        .map(|(icon, label)| {
            view! {
                <span
                    class=format!("taskbar-tray-icon tray-{icon}")
                    role="img"
                    aria-label=label
                    title=label
                ></span>
            }
        })
        .collect_view();

    view! {
        <footer class="taskbar" data-desktop-block-select="true" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-menus">
                <button type="button" class="taskbar-menu">"Applications"</button>
                <button type="button" class="taskbar-menu">"Places"</button>
            </div>
            <nav class="taskbar-quick-launch" aria-label="Quick launch">
                {quick_launch}
            </nav>
            <div class="taskbar-tray">
                {tray}
                <time class="taskbar-clock">
                    <span class="taskbar-clock-time">
                        {move || clock_now.get().time_label()}
                    </span>
                    <span class="taskbar-clock-date">
                        {move || clock_now.get().date_label()}
                    </span>
                </time>
            </div>
        </footer>
    }
}
