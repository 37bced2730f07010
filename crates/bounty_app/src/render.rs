use std::fmt::Write;

use bounty_core::{BoardView, DerivedStatus};

/// Renders a board view as a plain-text table followed by a summary line.
pub fn render(view: &BoardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8}  {:<9} {:>10}  {}", "ID", "STATUS", "PRICE", "TITLE");
    for row in &view.rows {
        let id = match &row.key.workspace {
            Some(workspace) => format!("{workspace}/{}", row.key.id),
            None => row.key.id.to_string(),
        };
        let _ = write!(
            out,
            "{:>8}  {:<9} {:>10}  {}",
            id,
            row.status.label(),
            row.price,
            row.title
        );
        if let Some(owner) = &row.owner {
            let _ = write!(out, " (by {owner})");
        }
        if !row.languages.is_empty() {
            let _ = write!(out, " [{}]", row.languages.join(", "));
        }
        out.push('\n');
    }

    let counts: Vec<String> = DerivedStatus::ALL
        .iter()
        .filter_map(|status| {
            view.status_counts
                .get(status)
                .map(|count| format!("{}={count}", status.label()))
        })
        .collect();
    let _ = writeln!(
        out,
        "{} bounties, page {}{} {}",
        view.total,
        view.page,
        if view.exhausted { " (end)" } else { "" },
        counts.join(" ")
    );
    if view.can_load_more {
        out.push_str("more pages available (--pages)\n");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "error: {error}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounty_core::{BountyRow, RecordKey};

    #[test]
    fn renders_rows_and_summary() {
        let view = BoardView {
            rows: vec![BountyRow {
                key: RecordKey {
                    workspace: None,
                    id: 12,
                },
                title: "Fix login".into(),
                price: 5000,
                status: DerivedStatus::Review,
                languages: vec!["Rust".into()],
                owner: Some("alice".into()),
            }],
            total: 1,
            page: 1,
            exhausted: true,
            status_counts: [(DerivedStatus::Review, 1)].into_iter().collect(),
            ..BoardView::default()
        };

        let text = render(&view);
        assert!(text.contains("review"));
        assert!(text.contains("Fix login (by alice) [Rust]"));
        assert!(text.contains("1 bounties, page 1 (end) review=1"));
        assert!(!text.contains("more pages"));
    }

    #[test]
    fn planner_rows_show_composite_key_and_error() {
        let view = BoardView {
            rows: vec![BountyRow {
                key: RecordKey {
                    workspace: Some("ws".into()),
                    id: 3,
                },
                title: "Card".into(),
                price: 0,
                status: DerivedStatus::Todo,
                languages: Vec::new(),
                owner: None,
            }],
            error: Some("network error: refused".into()),
            ..BoardView::default()
        };

        let text = render(&view);
        assert!(text.contains("ws/3"));
        assert!(text.ends_with("error: network error: refused\n"));
    }
}
