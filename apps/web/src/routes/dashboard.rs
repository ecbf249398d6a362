//! Dashboard with the journey analytics widgets. The widgets render the mock
//! feeds from the stats feature until the reporting API lands.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::stats::data::{DEPARTMENT_COUNTS, FUNNEL_STAGES, STAT_TILES};
use crate::features::stats::types::{DepartmentCount, FunnelStage, StatTile};
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="space-y-8">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Dashboard"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Journey activity across the organization."
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4">
                    {STAT_TILES.into_iter().map(stat_tile).collect_view()}
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <DepartmentWidget />
                    <FunnelWidget />
                </div>
            </div>
        </AppShell>
    }
}

fn stat_tile(tile: StatTile) -> impl IntoView {
    view! {
        <div class=format!("{} p-5", Theme::CARD)>
            <p class="text-sm text-gray-500 dark:text-gray-400">{tile.label}</p>
            <p class="mt-1 text-3xl font-semibold text-gray-900 dark:text-white">
                {tile.value}
            </p>
            <p class="mt-1 text-xs text-gray-400 dark:text-gray-500">{tile.hint}</p>
        </div>
    }
}

/// Horizontal bars of active journeys per department.
#[component]
fn DepartmentWidget() -> impl IntoView {
    let max = DEPARTMENT_COUNTS
        .iter()
        .map(|entry| entry.active_journeys)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <div class=format!("{} p-5", Theme::CARD)>
            <h2 class="text-sm font-semibold text-gray-900 dark:text-white mb-4">
                "Active journeys by department"
            </h2>
            <div class="space-y-3">
                {DEPARTMENT_COUNTS
                    .into_iter()
                    .map(|entry| department_bar(entry, max))
                    .collect_view()}
            </div>
        </div>
    }
}

fn department_bar(entry: DepartmentCount, max: u32) -> impl IntoView {
    let percent = entry.active_journeys * 100 / max;

    view! {
        <div>
            <div class="flex justify-between text-xs mb-1">
                <span class="text-gray-600 dark:text-gray-300">{entry.department}</span>
                <span class="text-gray-400 dark:text-gray-500">
                    {entry.active_journeys.to_string()}
                </span>
            </div>
            <div class="h-2 rounded-full bg-gray-100 dark:bg-gray-700 overflow-hidden">
                <div
                    class="h-full rounded-full bg-blue-600"
                    style=format!("width: {percent}%")
                ></div>
            </div>
        </div>
    }
}

/// Journey funnel from invitation to completion.
#[component]
fn FunnelWidget() -> impl IntoView {
    let max = FUNNEL_STAGES
        .iter()
        .map(|stage| stage.count)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <div class=format!("{} p-5", Theme::CARD)>
            <h2 class="text-sm font-semibold text-gray-900 dark:text-white mb-4">
                "Journey funnel"
            </h2>
            <div class="space-y-3">
                {FUNNEL_STAGES
                    .into_iter()
                    .map(|stage| funnel_row(stage, max))
                    .collect_view()}
            </div>
        </div>
    }
}

fn funnel_row(stage: FunnelStage, max: u32) -> impl IntoView {
    let percent = stage.count * 100 / max;

    view! {
        <div class="flex items-center gap-3">
            <span class="w-36 text-xs text-gray-600 dark:text-gray-300">{stage.label}</span>
            <div class="flex-1 h-5 rounded bg-gray-100 dark:bg-gray-700 overflow-hidden">
                <div
                    class="h-full rounded bg-blue-600/80 flex items-center"
                    style=format!("width: {percent}%")
                >
                    <span class="px-2 text-[10px] text-white">{stage.count.to_string()}</span>
                </div>
            </div>
        </div>
    }
}
