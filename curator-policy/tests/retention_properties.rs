use curator_core::config::{CuratorConfig, ReposConfig, RetentionConfig};
use curator_core::model::{RepoPath, RetentionAction};
use curator_policy::filter::is_selected;
use curator_policy::RetentionEngine;
use curator_testkit::{days_ago, MemoryRepositoryService};
use proptest::prelude::*;

fn make_config(keep_latest: u32) -> CuratorConfig {
    CuratorConfig {
        repos: ReposConfig {
            release: vec!["libs-release".to_string()],
            snapshot: vec![],
            archive: "libs-archive".to_string(),
        },
        retention: RetentionConfig {
            keep_latest,
            keep_days: 90,
            select_projects: vec!["*".to_string()],
        },
    }
}

/// `n` versions under app, oldest first: v000 .. v{n-1}.
fn make_flat_tree(service: &MemoryRepositoryService, n: usize) {
    service.add_folder("libs-release", "app", days_ago(1000));
    for i in 0..n {
        let age = (n - i) as i64;
        service.add_artifact("libs-release", &format!("app/v{i:03}"), days_ago(age));
    }
}

proptest! {
    // Retention invariant: exactly max(0, n - (k+1)) removed, newest k+1 kept.
    #[test]
    fn delete_keeps_exactly_the_newest_window(n in 0usize..24, k in 0u32..6) {
        let service = MemoryRepositoryService::new();
        make_flat_tree(&service, n);
        let config = make_config(k);

        let report = RetentionEngine::new(&service, &config)
            .process(&RepoPath::root("libs-release"), RetentionAction::Delete)
            .unwrap();

        let window = k as usize + 1;
        let expected_removed = n.saturating_sub(window);
        prop_assert_eq!(report.deleted, expected_removed);

        // The survivors are precisely the newest `min(n, window)` versions.
        for i in 0..n {
            let rel = format!("app/v{i:03}");
            let should_survive = i >= expected_removed;
            prop_assert_eq!(
                service.contains("libs-release", &rel),
                should_survive,
                "unexpected state for {}", rel
            );
        }
    }

    // Dry-run plans the same candidate count a real run acts on, without
    // touching the tree.
    #[test]
    fn dry_run_matches_real_run(n in 0usize..24, k in 0u32..6) {
        let service = MemoryRepositoryService::new();
        make_flat_tree(&service, n);
        let config = make_config(k);
        let before = service.item_count();

        let planned = RetentionEngine::new(&service, &config)
            .dry_run()
            .process(&RepoPath::root("libs-release"), RetentionAction::Delete)
            .unwrap();
        prop_assert_eq!(service.item_count(), before);

        let real = RetentionEngine::new(&service, &config)
            .process(&RepoPath::root("libs-release"), RetentionAction::Delete)
            .unwrap();
        prop_assert_eq!(planned.planned, real.deleted);
    }

    // Wildcard selects every path, selected or not, empty or not.
    #[test]
    fn wildcard_selects_any_path(path in "[a-z0-9/._-]{0,40}") {
        prop_assert!(is_selected(&path, &["*".to_string()]));
    }

    // Without a wildcard, selection agrees with plain substring search.
    #[test]
    fn selection_agrees_with_substring_search(
        path in "[a-z]{1,20}",
        needle in "[a-z]{1,5}",
    ) {
        let projects = vec![needle.clone()];
        prop_assert_eq!(is_selected(&path, &projects), path.contains(&needle));
    }
}
