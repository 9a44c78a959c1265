use crate::services::ListSnapshot;

/// Minimal console stand-in for the host framework's list rendering:
/// one row per contact, a spinner line while loading, an empty-state hint,
/// and a pagination footer.
pub fn render(snapshot: &ListSnapshot) -> String {
    if snapshot.loading && snapshot.contacts.is_empty() {
        return "Loading contacts...".to_string();
    }

    if snapshot.contacts.is_empty() {
        return "No contacts to display. Pull to refresh or retry.".to_string();
    }

    let mut lines: Vec<String> = snapshot
        .contacts
        .iter()
        .map(|c| format!("{:<24} {}", c.name, c.phone))
        .collect();

    if snapshot.loading_more {
        lines.push("Loading more...".to_string());
    } else if !snapshot.has_more_data {
        lines.push("-- end of list --".to_string());
    }

    lines.join("\n")
}
