//! List view handlers: loads, refreshes, and Engine actions
//!
//! Every Engine call goes out as a [`Task`] and comes back as a data or
//! completion message, so these handlers never block.

use std::time::{Duration, Instant};

use dockhand_client::{
    format::format_bytes, ContainerDetails, ContainerStats, ContainerSummary, ImageSummary,
    NetworkSummary, PruneReport, SystemInfo, VersionInfo, VolumeSummary,
};
use dockhand_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, StatusMessage, View};

use super::{Task, UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// Navigation & Refresh
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_switch_view(state: &mut AppState, view: View) -> UpdateResult {
    state.view = view;
    state.details = None;
    handle_refresh(state)
}

/// Reload the data behind the current view
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let task = match state.view {
        View::Dashboard => Task::LoadSystem,
        View::Containers => Task::ListContainers {
            all: state.all_containers,
        },
        View::Images => Task::ListImages,
        View::Volumes => Task::ListVolumes,
        View::Networks => Task::ListNetworks,
    };
    UpdateResult::action(UpdateAction::SpawnTask(task))
}

pub fn handle_toggle_all_containers(state: &mut AppState) -> UpdateResult {
    state.all_containers = !state.all_containers;
    let label = if state.all_containers {
        "Showing all containers"
    } else {
        "Showing running containers"
    };
    state.set_status(StatusMessage::info(label));
    UpdateResult::message(Message::Refresh)
}

/// Periodic tick: expire transient status text and sample stats for the
/// selected running container at the configured interval.
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let now = Instant::now();
    state.expire_status(now);

    if state.view != View::Containers || state.logs.is_some() {
        return UpdateResult::none();
    }

    let interval = Duration::from_millis(state.settings.stats_interval_ms);
    let due = state
        .last_stats_sample
        .map_or(true, |last| now.duration_since(last) >= interval);
    if !due {
        return UpdateResult::none();
    }

    let Some(id) = state
        .selected_container()
        .filter(|c| c.is_running())
        .map(|c| c.id.clone())
    else {
        return UpdateResult::none();
    };

    state.last_stats_sample = Some(now);
    UpdateResult::action(UpdateAction::SpawnTask(Task::SampleStats { id }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Data Arrival
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_containers_loaded(
    state: &mut AppState,
    containers: Vec<ContainerSummary>,
) -> UpdateResult {
    state.containers = containers;
    state.connection_error = None;
    state
        .stats
        .retain(|id, _| state.containers.iter().any(|c| c.id == *id));
    state.clamp_cursors();
    UpdateResult::none()
}

pub fn handle_images_loaded(state: &mut AppState, images: Vec<ImageSummary>) -> UpdateResult {
    state.images = images;
    state.connection_error = None;
    state.clamp_cursors();
    UpdateResult::none()
}

pub fn handle_volumes_loaded(state: &mut AppState, volumes: Vec<VolumeSummary>) -> UpdateResult {
    state.volumes = volumes;
    state.connection_error = None;
    state.clamp_cursors();
    UpdateResult::none()
}

pub fn handle_networks_loaded(state: &mut AppState, networks: Vec<NetworkSummary>) -> UpdateResult {
    state.networks = networks;
    state.connection_error = None;
    state.clamp_cursors();
    UpdateResult::none()
}

pub fn handle_system_loaded(
    state: &mut AppState,
    info: SystemInfo,
    version: VersionInfo,
) -> UpdateResult {
    state.system = Some(info);
    state.version = Some(version);
    state.connection_error = None;
    UpdateResult::none()
}

pub fn handle_view_load_failed(
    state: &mut AppState,
    view: View,
    error: String,
    unreachable: bool,
) -> UpdateResult {
    warn!("Loading {} failed: {}", view.title(), error);
    if unreachable {
        state.connection_error = Some(error);
    } else {
        state.set_status(StatusMessage::error(format!(
            "Loading {} failed: {}",
            view.title().to_lowercase(),
            error
        )));
    }
    UpdateResult::none()
}

pub fn handle_stats_sampled(
    state: &mut AppState,
    container_id: String,
    stats: ContainerStats,
) -> UpdateResult {
    state.stats.insert(container_id, stats);
    UpdateResult::none()
}

pub fn handle_container_inspected(state: &mut AppState, details: ContainerDetails) -> UpdateResult {
    state.details = Some(details);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine Actions
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_start_container(state: &mut AppState, id: String, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Starting {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::StartContainer { id, name }))
}

pub fn handle_stop_container(state: &mut AppState, id: String, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Stopping {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::StopContainer { id, name }))
}

pub fn handle_restart_container(state: &mut AppState, id: String, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Restarting {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::RestartContainer { id, name }))
}

pub fn handle_remove_container(state: &mut AppState, id: String, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Removing {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::RemoveContainer { id, name }))
}

pub fn handle_inspect_container(_state: &mut AppState, id: String) -> UpdateResult {
    UpdateResult::action(UpdateAction::SpawnTask(Task::InspectContainer { id }))
}

pub fn handle_remove_image(state: &mut AppState, id: String, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Removing {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::RemoveImage { id, name }))
}

pub fn handle_remove_volume(state: &mut AppState, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Removing {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::RemoveVolume { name }))
}

pub fn handle_remove_network(state: &mut AppState, id: String, name: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("Removing {name}...")));
    UpdateResult::action(UpdateAction::SpawnTask(Task::RemoveNetwork { id, name }))
}

/// Prune whatever the current view lists
pub fn handle_prune_view(state: &mut AppState) -> UpdateResult {
    let (task, what) = match state.view {
        View::Containers => (Task::PruneContainers, "containers"),
        View::Images => (Task::PruneImages, "images"),
        View::Volumes => (Task::PruneVolumes, "volumes"),
        View::Networks => (Task::PruneNetworks, "networks"),
        View::Dashboard => return UpdateResult::none(),
    };
    state.set_status(StatusMessage::info(format!("Pruning unused {what}...")));
    UpdateResult::action(UpdateAction::SpawnTask(task))
}

// ─────────────────────────────────────────────────────────────────────────────
// Completions
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_action_completed(state: &mut AppState, verb: String, target: String) -> UpdateResult {
    state.set_status(StatusMessage::info(format!("{verb} {target}")));
    UpdateResult::message(Message::Refresh)
}

pub fn handle_action_failed(state: &mut AppState, action: String, error: String) -> UpdateResult {
    warn!("{} failed: {}", action, error);
    state.set_status(StatusMessage::error(format!("{action} failed: {error}")));
    UpdateResult::none()
}

pub fn handle_prune_completed(
    state: &mut AppState,
    what: String,
    report: PruneReport,
) -> UpdateResult {
    state.set_status(StatusMessage::info(format!(
        "Pruned {} {} ({} reclaimed)",
        report.deleted_count(),
        what,
        format_bytes(report.space_reclaimed)
    )));
    UpdateResult::message(Message::Refresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn state_on(view: View) -> AppState {
        let mut state = AppState::new(Settings::default());
        state.view = view;
        state
    }

    fn running_container(id: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            names: vec![format!("/{id}")],
            state: "running".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_refresh_spawns_the_view_task() {
        let mut state = state_on(View::Containers);
        state.all_containers = true;

        let result = handle_refresh(&mut state);
        match result.action {
            Some(UpdateAction::SpawnTask(Task::ListContainers { all })) => assert!(all),
            other => panic!("unexpected action: {other:?}"),
        }

        state.view = View::Dashboard;
        let result = handle_refresh(&mut state);
        assert!(matches!(
            result.action,
            Some(UpdateAction::SpawnTask(Task::LoadSystem))
        ));
    }

    #[test]
    fn test_switch_view_closes_details_and_reloads() {
        let mut state = state_on(View::Containers);
        state.details = Some(ContainerDetails::default());

        let result = handle_switch_view(&mut state, View::Images);

        assert_eq!(state.view, View::Images);
        assert!(state.details.is_none());
        assert!(matches!(
            result.action,
            Some(UpdateAction::SpawnTask(Task::ListImages))
        ));
    }

    #[test]
    fn test_containers_loaded_clears_connection_banner() {
        let mut state = state_on(View::Containers);
        state.connection_error = Some("no socket".to_string());

        handle_containers_loaded(&mut state, vec![running_container("abc")]);

        assert!(state.connection_error.is_none());
        assert_eq!(state.containers.len(), 1);
    }

    #[test]
    fn test_containers_loaded_drops_stats_of_gone_containers() {
        let mut state = state_on(View::Containers);
        state
            .stats
            .insert("gone".to_string(), ContainerStats::default());
        state
            .stats
            .insert("kept".to_string(), ContainerStats::default());

        handle_containers_loaded(&mut state, vec![running_container("kept")]);

        assert!(!state.stats.contains_key("gone"));
        assert!(state.stats.contains_key("kept"));
    }

    #[test]
    fn test_load_failure_sets_banner_only_when_unreachable() {
        let mut state = state_on(View::Containers);

        handle_view_load_failed(
            &mut state,
            View::Containers,
            "connection refused".to_string(),
            true,
        );
        assert_eq!(state.connection_error.as_deref(), Some("connection refused"));

        let mut state = state_on(View::Images);
        handle_view_load_failed(&mut state, View::Images, "409 conflict".to_string(), false);
        assert!(state.connection_error.is_none());
        assert!(state.status.as_ref().is_some_and(|s| s.error));
    }

    #[test]
    fn test_tick_samples_stats_for_selected_running_container() {
        let mut state = state_on(View::Containers);
        state.containers = vec![running_container("abc123")];

        let result = handle_tick(&mut state);
        match result.action {
            Some(UpdateAction::SpawnTask(Task::SampleStats { id })) => assert_eq!(id, "abc123"),
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(state.last_stats_sample.is_some());

        // Next tick inside the interval stays quiet
        let result = handle_tick(&mut state);
        assert!(result.action.is_none());
    }

    #[test]
    fn test_tick_skips_stopped_containers_and_other_views() {
        let mut state = state_on(View::Containers);
        state.containers = vec![ContainerSummary {
            id: "abc".to_string(),
            state: "exited".to_string(),
            ..Default::default()
        }];
        assert!(handle_tick(&mut state).action.is_none());

        let mut state = state_on(View::Images);
        assert!(handle_tick(&mut state).action.is_none());
    }

    #[test]
    fn test_prune_view_maps_to_current_view() {
        let mut state = state_on(View::Volumes);
        let result = handle_prune_view(&mut state);
        assert!(matches!(
            result.action,
            Some(UpdateAction::SpawnTask(Task::PruneVolumes))
        ));

        let mut state = state_on(View::Dashboard);
        assert!(handle_prune_view(&mut state).action.is_none());
    }

    #[test]
    fn test_action_completed_sets_status_and_refreshes() {
        let mut state = state_on(View::Containers);
        let result =
            handle_action_completed(&mut state, "Started".to_string(), "web".to_string());

        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("Started web"));
        assert!(matches!(result.message, Some(Message::Refresh)));
    }

    #[test]
    fn test_prune_completed_reports_count_and_size() {
        let mut state = state_on(View::Images);
        let report = PruneReport {
            images_deleted: Some(vec![Default::default(), Default::default()]),
            space_reclaimed: 1_500,
            ..Default::default()
        };

        handle_prune_completed(&mut state, "images".to_string(), report);

        let text = state.status.as_ref().map(|s| s.text.as_str()).unwrap();
        assert!(text.contains("2 images"), "status was: {text}");
        assert!(text.contains("1.5 kB"), "status was: {text}");
    }
}
