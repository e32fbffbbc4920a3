//! Project selection by path substring.

use curator_core::constants::WILDCARD_TOKEN;

/// Whether `rel_path` belongs to the configured set of selected projects.
///
/// A leading wildcard entry selects everything. Otherwise the path is
/// selected iff it contains any configured substring, evaluated in list
/// order with first match winning. An empty list selects nothing.
pub fn is_selected(rel_path: &str, select_projects: &[String]) -> bool {
    match select_projects.first() {
        None => false,
        Some(first) if first == WILDCARD_TOKEN => true,
        Some(_) => {
            for project in select_projects {
                if rel_path.contains(project.as_str()) {
                    tracing::trace!(path = rel_path, project = %project, "project selected");
                    return true;
                }
            }
            false
        }
    }
}
