use shared::models::{AdminStatistics, DailyStat, WorkerMetrics};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

use crate::api::JobDashClient;
use crate::components::claims_chart::ClaimsChart;
use crate::components::loading::Loading;
use crate::components::toast::{Toast, use_toast};
use crate::models::session::SessionState;

/// Rows shown in the per-day claims table.
const RECENT_STAT_ROWS: usize = 10;

fn recent_stats(stats: &[DailyStat]) -> &[DailyStat] {
    &stats[stats.len().saturating_sub(RECENT_STAT_ROWS)..]
}

/// Share of the busiest day, as a 0-100 width percentage for the row meter.
fn claim_percentage(stats: &[DailyStat], claimed: u32) -> f64 {
    let max = stats.iter().map(|stat| stat.claimed).max().unwrap_or(0);
    if max == 0 {
        0.0
    } else {
        f64::from(claimed) / f64::from(max) * 100.0
    }
}

fn activity_badge_class(activity_type: &str) -> &'static str {
    match activity_type.to_ascii_lowercase().as_str() {
        "approved" | "posted" => "badge badge-success",
        "rejected" => "badge badge-error",
        "submitted" => "badge badge-info",
        "claimed" => "badge badge-warning",
        _ => "badge badge-ghost",
    }
}

fn stat_date_label(stat: &DailyStat) -> String {
    stat.label().unwrap_or_else(|_| stat.date.clone())
}

fn admin_statistics_view(statistics: &AdminStatistics) -> Html {
    html! {
        <div class="space-y-6">
            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Total jobs"}</div>
                    <div class="stat-value text-primary">{statistics.total_jobs}</div>
                    <div class="stat-desc">{format!("{} posted in {}", statistics.total_posted_jobs, statistics.summary.stats_period)}</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-warning">
                        <Icon icon_id={IconId::HeroiconsOutlineLockClosed} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Claimed"}</div>
                    <div class="stat-value text-warning">{statistics.total_claimed_jobs}</div>
                    <div class="stat-desc">{format!("{} expired unclaimed", statistics.total_expired_jobs)}</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-info">
                        <Icon icon_id={IconId::HeroiconsOutlineDocument} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Submitted"}</div>
                    <div class="stat-value text-info">{statistics.total_submitted_jobs}</div>
                    <div class="stat-desc">{format!("{} rejected", statistics.total_rejected_jobs)}</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Approved"}</div>
                    <div class="stat-value text-success">{statistics.total_approved_jobs}</div>
                    <div class="stat-desc">{statistics.summary.stats_period.clone()}</div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Daily claims"}</h2>
                    {
                        if statistics.stats.is_empty() {
                            html! { <p>{"No claim activity yet."}</p> }
                        } else {
                            html! { <ClaimsChart stats={statistics.stats.clone()} /> }
                        }
                    }
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Busiest days"}</h2>
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>{"Day"}</th>
                                    <th>{"Claims"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for recent_stats(&statistics.stats).iter().map(|stat| {
                                    let width = claim_percentage(&statistics.stats, stat.claimed);
                                    html! {
                                        <tr>
                                            <td>{stat_date_label(stat)}</td>
                                            <td>{stat.claimed}</td>
                                            <td class="w-1/2">
                                                <div class="bg-base-300 rounded h-2">
                                                    <div
                                                        class="bg-primary rounded h-2"
                                                        style={format!("width: {width}%")}
                                                    />
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Recent activity"}</h2>
                        <p class="text-sm text-base-content/70">
                            {format!(
                                "{} activities in the {}",
                                statistics.summary.total_activities_found,
                                statistics.summary.recent_period,
                            )}
                        </p>
                        <ul class="space-y-2">
                            { for statistics.recent.iter().map(|activity| html! {
                                <li class="flex items-center justify-between gap-2">
                                    <span class={activity_badge_class(&activity.activity_type)}>
                                        {activity.activity_type.clone()}
                                    </span>
                                    <span class="flex-grow">{activity.description.clone()}</span>
                                    <span class="text-xs text-base-content/70">
                                        {activity.timestamp_label()}
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn worker_metrics_view(metrics: &WorkerMetrics) -> Html {
    let total_applied: u32 = metrics.trend.iter().map(|point| point.applied).sum();

    html! {
        <div class="space-y-6">
            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineDocument} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Applications"}</div>
                    <div class="stat-value text-primary">{total_applied}</div>
                    <div class="stat-desc">{"over the recent period"}</div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Recent applications"}</h2>
                    <ul class="space-y-1">
                        { for metrics.trend.iter().rev().map(|point| html! {
                            <li class="flex justify-between">
                                <span>{point.date.clone()}</span>
                                <span class="font-semibold">{point.applied}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_selector(|state: &SessionState| state.clone());
    let toast = use_toast();
    let statistics = use_state(|| None::<AdminStatistics>);
    let metrics = use_state(|| None::<WorkerMetrics>);
    let loading = use_state(|| false);

    let is_admin = session.is_admin();

    let load_statistics = {
        let statistics = statistics.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        Callback::from(move |()| {
            let statistics = statistics.clone();
            let loading = loading.clone();
            let toast = toast.clone();
            loading.set(true);
            spawn_local(async move {
                let client = JobDashClient::shared();
                match client.get_admin_statistics().await {
                    Ok(data) => statistics.set(Some(data)),
                    Err(_) => {
                        toast.emit(Toast::error("Failed to load statistics. Please try again."));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        // Admins get the statistics panel, workers their application trend.
        let load_statistics = load_statistics.clone();
        let metrics = metrics.clone();
        let toast = toast.clone();
        use_effect_with(is_admin, move |is_admin| {
            if *is_admin {
                load_statistics.emit(());
            } else {
                spawn_local(async move {
                    let client = JobDashClient::shared();
                    match client.get_worker_metrics().await {
                        Ok(data) => metrics.set(Some(data)),
                        Err(_) => {
                            toast.emit(Toast::error("Failed to load metrics. Please try again."));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_refresh = {
        let load_statistics = load_statistics.clone();
        Callback::from(move |_: MouseEvent| load_statistics.emit(()))
    };

    let greeting = {
        let full_name = session.full_name();
        if full_name.is_empty() {
            "Dashboard".to_string()
        } else {
            format!("Welcome back, {full_name}")
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{greeting}</h1>
                if is_admin {
                    <button class="btn btn-outline btn-sm" onclick={on_refresh} disabled={*loading}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-4 h-4" />
                        {"Refresh"}
                    </button>
                }
            </div>

            {
                if is_admin {
                    match &*statistics {
                        Some(statistics) => admin_statistics_view(statistics),
                        None if *loading => html! { <Loading /> },
                        None => html! {},
                    }
                } else {
                    match &*metrics {
                        Some(metrics) => worker_metrics_view(metrics),
                        None => html! { <Loading /> },
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(date: &str, claimed: u32) -> DailyStat {
        DailyStat {
            date: date.to_string(),
            claimed,
        }
    }

    #[test]
    fn claim_percentage_scales_against_the_busiest_day() {
        let stats = vec![stat("25-08-25", 2), stat("25-08-26", 8)];
        assert_eq!(claim_percentage(&stats, 8), 100.0);
        assert_eq!(claim_percentage(&stats, 2), 25.0);
    }

    #[test]
    fn claim_percentage_is_zero_for_an_idle_window() {
        let stats = vec![stat("25-08-25", 0)];
        assert_eq!(claim_percentage(&stats, 0), 0.0);
        assert_eq!(claim_percentage(&[], 5), 0.0);
    }

    #[test]
    fn recent_stats_keeps_the_newest_rows() {
        let stats: Vec<DailyStat> = (0..15)
            .map(|day| stat(&format!("25-08-{:02}", day + 1), day))
            .collect();
        let recent = recent_stats(&stats);
        assert_eq!(recent.len(), RECENT_STAT_ROWS);
        assert_eq!(recent[0].claimed, 5);
        assert_eq!(recent.last().unwrap().claimed, 14);
    }

    #[test]
    fn activity_badges_map_known_types() {
        assert_eq!(activity_badge_class("APPROVED"), "badge badge-success");
        assert_eq!(activity_badge_class("rejected"), "badge badge-error");
        assert_eq!(activity_badge_class("submitted"), "badge badge-info");
        assert_eq!(activity_badge_class("claimed"), "badge badge-warning");
        assert_eq!(activity_badge_class("archived"), "badge badge-ghost");
    }

    #[test]
    fn stat_date_label_falls_back_to_the_raw_token() {
        assert_eq!(stat_date_label(&stat("25-08-27", 1)), "Aug 27");
        assert_eq!(stat_date_label(&stat("???", 1)), "???");
    }
}
