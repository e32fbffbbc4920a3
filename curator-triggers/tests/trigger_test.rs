use curator_core::config::{CuratorConfig, ReposConfig, RetentionConfig};
use curator_core::model::{ItemInfo, ItemKind, RepoPath};
use curator_testkit::{days_ago, MemoryRepositoryService};
use curator_triggers::{on_before_delete, on_item_created, run_batch, RepoOutcome};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn make_config() -> CuratorConfig {
    CuratorConfig {
        repos: ReposConfig {
            release: vec!["libs-release".to_string()],
            snapshot: vec!["libs-snapshot".to_string()],
            archive: "libs-archive".to_string(),
        },
        retention: RetentionConfig {
            keep_latest: 1,
            keep_days: 90,
            select_projects: vec!["*".to_string()],
        },
    }
}

fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn batch_classifies_repositories_by_configured_role() {
    init_tracing();
    let service = MemoryRepositoryService::new();
    // Snapshot repo with an over-window leaf group: Delete applies.
    service.add_folder("libs-snapshot", "app", days_ago(60));
    service.add_artifact("libs-snapshot", "app/v0.1", days_ago(30));
    service.add_artifact("libs-snapshot", "app/v0.2", days_ago(20));
    service.add_artifact("libs-snapshot", "app/v0.3", days_ago(10));
    let config = make_config();

    let outcomes = run_batch(
        &keys(&["libs-release", "libs-snapshot", "unknown-repo"]),
        &config,
        &service,
    );

    assert_eq!(outcomes.len(), 3);
    match &outcomes[0] {
        RepoOutcome::Processed { repo, action, .. } => {
            assert_eq!(repo, "libs-release");
            assert_eq!(action.to_string(), "archive");
        }
        other => panic!("expected Processed, got {other:?}"),
    }
    match &outcomes[1] {
        RepoOutcome::Processed { repo, action, report } => {
            assert_eq!(repo, "libs-snapshot");
            assert_eq!(action.to_string(), "delete");
            // 3 versions, keep_latest=1 -> one deleted.
            assert_eq!(report.deleted, 1);
        }
        other => panic!("expected Processed, got {other:?}"),
    }
    match &outcomes[2] {
        RepoOutcome::Skipped { repo, .. } => assert_eq!(repo, "unknown-repo"),
        other => panic!("expected Skipped, got {other:?}"),
    }
    assert!(!service.contains("libs-snapshot", "app/v0.1"));
    assert!(service.contains("libs-snapshot", "app/v0.3"));
}

#[test]
fn batch_misconfiguration_is_reported_not_panicked() {
    let service = MemoryRepositoryService::new();
    let mut config = make_config();
    config.repos.archive = String::new();

    let outcomes = run_batch(&keys(&["libs-release"]), &config, &service);
    match &outcomes[0] {
        RepoOutcome::Failed { repo, message } => {
            assert_eq!(repo, "libs-release");
            assert!(message.contains("archive"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn batch_outcomes_serialize_for_the_command_surface() {
    let service = MemoryRepositoryService::new();
    let config = make_config();

    let outcomes = run_batch(&keys(&["unknown-repo"]), &config, &service);
    let json = serde_json::to_value(&outcomes).unwrap();
    assert_eq!(json[0]["outcome"], "skipped");
    assert_eq!(json[0]["repo"], "unknown-repo");
}

#[test]
fn release_creation_couples_snapshot_then_archives_parent() {
    init_tracing();
    let service = MemoryRepositoryService::new();
    // Parent group with old versions carrying stale children.
    service.add_folder("libs-release", "app", days_ago(900));
    service.add_artifact("libs-release", "app/1.7", days_ago(800));
    service.add_artifact("libs-release", "app/1.7/app-1.7.jar", days_ago(800));
    service.add_artifact("libs-release", "app/1.8", days_ago(500));
    service.add_artifact("libs-release", "app/1.9", days_ago(200));
    service.add_artifact("libs-release", "app/2.0", days_ago(0));
    // Matching snapshot for the new release.
    service.add_folder("libs-snapshot", "app/2.0-SNAPSHOT", days_ago(5));
    let config = make_config();

    // The host's notification flags the new version directory as a folder;
    // the service view above classifies version entries as artifacts.
    let created = ItemInfo::new(
        RepoPath::new("libs-release", "app/2.0"),
        ItemKind::Folder,
        days_ago(0),
    );
    let report = on_item_created(&created, &config, &service)
        .unwrap()
        .expect("release creation should trigger processing");

    // Snapshot coupling ran first.
    assert!(!service.contains("libs-snapshot", "app/2.0-SNAPSHOT"));
    // Parent walk with Archive: 4 versions, keep_latest=1 -> 2 candidates;
    // only 1.7 has a child older than the cutoff.
    assert_eq!(report.archived, 1);
    assert_eq!(report.age_gate_skipped, 1);
    assert!(service.contains("libs-archive", "app/1.7"));
    assert!(!service.contains("libs-release", "app/1.7"));
    assert!(service.contains("libs-release", "app/1.8"));
}

#[test]
fn creation_outside_release_repositories_is_ignored() {
    let service = MemoryRepositoryService::new();
    service.add_folder("libs-snapshot", "app/2.0-SNAPSHOT", days_ago(5));
    let config = make_config();

    let created = ItemInfo::new(
        RepoPath::new("some-other-repo", "app/2.0"),
        ItemKind::Folder,
        days_ago(0),
    );
    let report = on_item_created(&created, &config, &service).unwrap();
    assert!(report.is_none());
    assert!(service.contains("libs-snapshot", "app/2.0-SNAPSHOT"));
}

#[test]
fn non_folder_creation_is_ignored() {
    let service = MemoryRepositoryService::new();
    let config = make_config();

    let created = ItemInfo::new(
        RepoPath::new("libs-release", "app/2.0.pom"),
        ItemKind::Artifact,
        days_ago(0),
    );
    assert!(on_item_created(&created, &config, &service)
        .unwrap()
        .is_none());
}

#[test]
fn unselected_project_creation_is_ignored() {
    let service = MemoryRepositoryService::new();
    let mut config = make_config();
    config.retention.select_projects = vec!["other-team".to_string()];

    let created = ItemInfo::new(
        RepoPath::new("libs-release", "app/2.0"),
        ItemKind::Folder,
        days_ago(0),
    );
    assert!(on_item_created(&created, &config, &service)
        .unwrap()
        .is_none());
}

#[test]
fn before_delete_hook_is_a_no_op() {
    let item = ItemInfo::new(
        RepoPath::new("libs-release", "app/1.0"),
        ItemKind::Artifact,
        days_ago(0),
    );
    // Logging only; must not panic or mutate anything.
    on_before_delete(&item);
}
