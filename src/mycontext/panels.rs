//! Explorer and detail panels rendered as styled terminal text
//!
//! These are the renderables the exporter records to HTML. Styling happens
//! through ANSI escapes (comfy-table cell colors, owo-colors spans) so the
//! recording console can translate it to CSS classes.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::store::ContextHome;

/// Render the context hierarchy of a home: all contexts grouped by
/// project, with the active context highlighted.
pub fn explorer_panel(home: &ContextHome) -> Result<String> {
    let contexts = home.all_contexts()?;
    let projects = home.all_projects()?;
    let active_name = home.active_context_name()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120)
        // Cell colors must survive piped stdout; the recorder depends on
        // the ANSI escapes being present
        .enforce_styling();
    table.set_header(vec![
        Cell::new("Project").fg(Color::Cyan),
        Cell::new("Context").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Started").fg(Color::Cyan),
        Cell::new("Notes").fg(Color::Cyan),
    ]);

    for project in &projects {
        for context in contexts.iter().filter(|c| c.project() == project) {
            let is_active = active_name.as_deref() == Some(context.name.as_str());
            let note_count = home.notes(&context.name)?.len();

            let status_cell = if is_active {
                Cell::new("● active").fg(Color::Green).bg(Color::DarkBlue)
            } else if context.is_archived {
                Cell::new("archived").fg(Color::DarkGrey)
            } else {
                Cell::new("stopped").fg(Color::DarkGrey)
            };

            let name = context
                .name
                .split_once(':')
                .map(|(_, rest)| rest.trim().to_string())
                .unwrap_or_else(|| context.name.clone());

            table.add_row(vec![
                Cell::new(project),
                if is_active {
                    Cell::new(&name).fg(Color::White).bg(Color::DarkBlue)
                } else {
                    Cell::new(&name)
                },
                status_cell,
                Cell::new(context.start_time.format("%Y-%m-%d %H:%M").to_string()),
                Cell::new(note_count.to_string()),
            ]);
        }
    }

    let mut panel = String::new();
    panel.push_str(&format!("{}\n", "Context Explorer".bold().cyan()));
    panel.push_str(&format!("{}\n", table));
    panel.push_str(&format!(
        "{}\n",
        format!(
            "{} contexts · {} projects · active: {}",
            contexts.len(),
            projects.len(),
            active_name.as_deref().unwrap_or("none")
        )
        .dimmed()
    ));
    Ok(panel)
}

/// Render the detail view of the active context: metadata, notes, files.
///
/// Returns `None` when the home has no active context.
pub fn detail_panel(home: &ContextHome) -> Result<Option<String>> {
    let Some(active) = home.active_context()? else {
        return Ok(None);
    };

    let notes = home.notes(&active.name)?;
    let files = home.files(&active.name)?;

    let mut panel = String::new();
    panel.push_str(&format!("{}\n", "Context Detail".bold().cyan()));
    panel.push_str(&format!(
        "{} {}\n",
        "Context:".bold(),
        active.name.as_str().green()
    ));
    panel.push_str(&format!("{} {}\n", "Project:".bold(), active.project()));
    let span = match active.end_time {
        Some(end) => format!(
            "started {}, ended {}",
            active.start_time.format("%Y-%m-%d %H:%M:%S"),
            end.format("%Y-%m-%d %H:%M:%S")
        ),
        None => format!("started {}", active.start_time.format("%Y-%m-%d %H:%M:%S")),
    };
    panel.push_str(&format!(
        "{} {} ({})\n",
        "Status:".bold(),
        if active.is_active() {
            "Active".green().to_string()
        } else {
            "Stopped".dimmed().to_string()
        },
        span,
    ));

    panel.push_str(&format!("\n{}\n", "Notes:".bold()));
    if notes.is_empty() {
        panel.push_str(&format!("  {}\n", "(none)".dimmed()));
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(120)
            .enforce_styling();
        table.set_header(vec![
            Cell::new("Time").fg(Color::Cyan),
            Cell::new("Note").fg(Color::Cyan),
        ]);
        for note in &notes {
            table.add_row(vec![
                Cell::new(note.timestamp.format("%H:%M:%S").to_string()).fg(Color::DarkGrey),
                Cell::new(&note.text),
            ]);
        }
        panel.push_str(&format!("{}\n", table));
    }

    panel.push_str(&format!("\n{}\n", "Files:".bold()));
    if files.is_empty() {
        panel.push_str(&format!("  {}\n", "(none)".dimmed()));
    } else {
        for file in &files {
            panel.push_str(&format!(
                "  {} {}\n",
                format!("[{}]", file.timestamp.format("%H:%M:%S")).dimmed(),
                file.path.as_str().yellow()
            ));
        }
    }

    Ok(Some(panel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seed_home(home: &std::path::Path) {
        let dir = home.join("payment-service:_retry");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("meta.json"),
            r#"{"name":"payment-service: retry","start_time":"2025-01-15T10:00:00Z","status":"active"}"#,
        )
        .unwrap();
        fs::write(
            dir.join("notes.log"),
            "2025-01-15T10:05:00Z|DECISION: exponential backoff\n",
        )
        .unwrap();
        fs::write(dir.join("files.log"), "2025-01-15T10:06:00Z|internal/retry.go\n").unwrap();
        fs::write(
            home.join("state.json"),
            r#"{"active_context":"payment-service: retry"}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_explorer_panel_lists_contexts() {
        let tmp = tempfile::tempdir().unwrap();
        seed_home(tmp.path());
        let panel = explorer_panel(&ContextHome::new(tmp.path())).unwrap();
        assert!(panel.contains("retry"));
        assert!(panel.contains("payment-service"));
        assert!(panel.contains("1 contexts"));
    }

    #[test]
    fn test_detail_panel_shows_notes_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        seed_home(tmp.path());
        let panel = detail_panel(&ContextHome::new(tmp.path())).unwrap().unwrap();
        assert!(panel.contains("payment-service: retry"));
        assert!(panel.contains("DECISION: exponential backoff"));
        assert!(panel.contains("internal/retry.go"));
    }

    #[test]
    fn test_explorer_table_styled_without_tty() {
        // Cell colors must not depend on stdout being a terminal - the
        // test harness itself runs piped, which is the failing condition
        let tmp = tempfile::tempdir().unwrap();
        seed_home(tmp.path());
        let panel = explorer_panel(&ContextHome::new(tmp.path())).unwrap();

        let header = panel.lines().find(|l| l.contains("Project")).unwrap();
        assert!(
            header.contains('\u{1b}'),
            "header cells lost their ANSI styling: {header:?}"
        );
        let active = panel.lines().find(|l| l.contains("● active")).unwrap();
        assert!(
            active.contains('\u{1b}'),
            "active row lost its highlight: {active:?}"
        );
    }

    #[test]
    fn test_detail_notes_table_styled_without_tty() {
        let tmp = tempfile::tempdir().unwrap();
        seed_home(tmp.path());
        let panel = detail_panel(&ContextHome::new(tmp.path())).unwrap().unwrap();

        let header = panel
            .lines()
            .find(|l| l.contains("Time") && l.contains("Note"))
            .unwrap();
        assert!(header.contains('\u{1b}'));
    }

    #[test]
    fn test_detail_panel_none_without_active() {
        let tmp = tempfile::tempdir().unwrap();
        let panel = detail_panel(&ContextHome::new(tmp.path())).unwrap();
        assert!(panel.is_none());
    }
}
