//! Export command - Record explorer/detail panels as dark-mode HTML

use anyhow::{Context, Result};
use chrono::Local;
use owo_colors::OwoColorize;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::config;
use crate::mycontext::panels;
use crate::mycontext::store::ContextHome;
use crate::recorder::Recorder;

/// One tutorial's worth of context homes
pub struct Tutorial {
    /// Zero-padded tutorial number ("01".."08")
    pub number: &'static str,
    /// Display name
    pub name: &'static str,
    /// (context-home directory name, human description) pairs
    pub homes: &'static [(&'static str, &'static str)],
}

/// Static descriptor of every tutorial and its context homes
pub const TUTORIALS: &[Tutorial] = &[
    Tutorial {
        number: "01",
        name: "Backend Developer Solo",
        homes: &[("tutorial-01-backend-solo", "Alice - Payment Retry Logic")],
    },
    Tutorial {
        number: "02",
        name: "Frontend Developer Solo",
        homes: &[("tutorial-02-frontend-solo", "Bob - Checkout UI")],
    },
    Tutorial {
        number: "03",
        name: "QA Engineer Solo",
        homes: &[("tutorial-03-qa-solo", "Carol - Payment Testing")],
    },
    Tutorial {
        number: "04",
        name: "Multi-Project Consultant",
        homes: &[("tutorial-04-multi-project", "Alice - 3 Client Projects")],
    },
    Tutorial {
        number: "05",
        name: "Scrum Master Sprint Management",
        homes: &[("tutorial-05-scrum-master", "Dave - Sprint 5")],
    },
    Tutorial {
        number: "06",
        name: "Team Handoff",
        homes: &[
            ("tutorial-06-team-alice", "Alice - Backend API"),
            ("tutorial-06-team-bob", "Bob - Frontend Integration"),
        ],
    },
    Tutorial {
        number: "07",
        name: "Signal Coordination",
        homes: &[
            ("tutorial-07-release-alice", "Alice - Backend Release"),
            ("tutorial-07-release-bob", "Bob - Frontend Release"),
            ("tutorial-07-release-carol", "Carol - QA Testing"),
            ("tutorial-07-release-eve", "Eve - Product Coordination"),
        ],
    },
    Tutorial {
        number: "08",
        name: "Agent Workflows",
        homes: &[
            ("tutorial-08-human-alice", "Alice - OAuth Feature"),
            ("tutorial-08-agent-claude", "Claude Agent - Code Assistance"),
            ("tutorial-08-agent-cicd", "CI/CD Agent - Build & Test"),
            ("tutorial-08-agent-qa", "QA Bot - E2E Testing"),
        ],
    },
];

/// Metadata block rendered above the recorded panel
struct ExportMetadata {
    timestamp: String,
    total_contexts: usize,
    total_projects: usize,
    active_context: String,
}

/// Pull the style definitions out of recorded HTML, dropping the light
/// `body { ... }` rule so it cannot undo the dark theme.
pub fn extract_rich_styles(html: &str) -> String {
    let style_re = Regex::new(r"(?s)<style>(.*?)</style>").expect("static regex");
    let Some(captures) = style_re.captures(html) else {
        return String::new();
    };
    let body_re = Regex::new(r"body\s*\{[^}]*\}").expect("static regex");
    body_re.replace_all(&captures[1], "").into_owned()
}

/// Pull the recorded `<pre>` block out of recorded HTML, stripped of its
/// inline attributes.
pub fn extract_html_body(html: &str) -> String {
    let pre_re = Regex::new(r"(?s)<pre[^>]*>(.*?)</pre>").expect("static regex");
    match pre_re.captures(html) {
        Some(captures) => format!("<pre>{}</pre>", &captures[1]),
        None => "<pre>Export data not found</pre>".to_string(),
    }
}

/// Wrap extracted styles and body in the fixed dark-mode page
fn create_dark_mode_html(
    title: &str,
    rich_styles: &str,
    body_content: &str,
    context_home_name: &str,
    metadata: &ExportMetadata,
) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
/* Dark mode styling */
body {{
    background-color: #1a1a1a;
    color: #e0e0e0;
    font-family: 'Menlo', 'DejaVu Sans Mono', 'Courier New', monospace;
    margin: 0;
    padding: 20px;
    line-height: 1.4;
}}

pre {{
    background-color: #0d0d0d;
    color: #e0e0e0;
    padding: 20px;
    border-left: 2px solid #444;
    border-radius: 4px 0 0 4px;
    overflow-x: auto;
    font-size: 13px;
}}

code {{
    font-family: inherit;
    color: inherit;
}}

/* Preserve the color styles from the recording */
{rich_styles}

/* Make sure text is readable */
.r1, .r2, .r3, .r4, .r5, .r6, .r7, .r8, .r9, .r10, .r11, .r12,
.r13, .r14, .r15, .r16, .r17, .r18, .r19, .r20 {{
    font-weight: normal;
}}

/* Dim text should still be readable on dark background */
[style*="color: #7f7f7f"],
[style*="color: #808080"] {{
    color: #888888 !important;
}}

/* Ensure active items show properly */
[style*="background-color: #000080"] {{
    background-color: #1a3a5c !important;
}}

/* Links and interactive elements */
a {{
    color: #66d9ef;
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

/* Tutorial metadata */
.metadata {{
    background-color: #0d0d0d;
    padding: 15px;
    margin-bottom: 20px;
    border-left: 3px solid #66d9ef;
    border-radius: 4px;
}}

.metadata h3 {{
    margin-top: 0;
    color: #66d9ef;
}}

.metadata p {{
    margin: 5px 0;
    color: #e0e0e0;
}}
</style>
</head>
<body>
<div class="metadata">
<h3>{title}</h3>
<p><strong>Context Home:</strong> {context_home_name}</p>
<p><strong>Exported:</strong> {timestamp}</p>
<p><strong>Total Contexts:</strong> {total_contexts}</p>
<p><strong>Projects:</strong> {total_projects}</p>
<p><strong>Active Context:</strong> {active_context}</p>
</div>
{body_content}
</body>
</html>"##,
        title = title,
        rich_styles = rich_styles,
        context_home_name = context_home_name,
        timestamp = metadata.timestamp,
        total_contexts = metadata.total_contexts,
        total_projects = metadata.total_projects,
        active_context = metadata.active_context,
        body_content = body_content,
    )
}

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Export the explorer panel of a context home. Returns the number of
/// contexts included.
pub fn export_explorer_panel(home: &ContextHome, out_file: &Path) -> Result<usize> {
    let contexts = home.all_contexts()?;
    let active = home.active_context_name()?;
    let projects = home.all_projects()?;

    let home_name = home
        .dir()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut console = Recorder::new();
    console.print(&format!("\n{}", "CONTEXT HIERARCHY PANEL".bold().cyan()));
    console.print(&format!("{}", format!("Exported: {}", now_stamp()).dimmed()));
    console.print(&format!("{}", format!("Context Home: {}", home_name).dimmed()));
    console.print(&format!(
        "{}\n",
        format!(
            "Total Contexts: {} | Projects: {} | Active: {}",
            contexts.len(),
            projects.len(),
            active.as_deref().unwrap_or("none")
        )
        .dimmed()
    ));
    console.print(&panels::explorer_panel(home)?);

    let html = console.export_html();
    let metadata = ExportMetadata {
        timestamp: now_stamp(),
        total_contexts: contexts.len(),
        total_projects: projects.len(),
        active_context: active.unwrap_or_else(|| "none".to_string()),
    };
    let dark = create_dark_mode_html(
        &format!("Explorer Panel - {}", home_name),
        &extract_rich_styles(&html),
        &extract_html_body(&html),
        &home_name,
        &metadata,
    );

    fs::write(out_file, dark).with_context(|| format!("Failed to write: {}", out_file.display()))?;
    Ok(contexts.len())
}

/// Export the detail panel of a home's active context. Returns 1 when a
/// panel was written, 0 when no context is active (a benign skip).
pub fn export_detail_panel(home: &ContextHome, out_file: &Path) -> Result<usize> {
    let home_name = home
        .dir()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(active) = home.active_context()? else {
        println!(
            "    {} No active context in {}, skipping detail export",
            "Warning:".yellow(),
            home_name
        );
        return Ok(0);
    };
    let Some(panel) = panels::detail_panel(home)? else {
        return Ok(0);
    };

    let mut console = Recorder::new();
    console.print(&format!("\n{}", "CONTEXT DETAIL PANEL".bold().cyan()));
    console.print(&format!("{}", format!("Exported: {}", now_stamp()).dimmed()));
    console.print(&format!("{}\n", format!("Context: {}", active.name).dimmed()));
    console.print(&panel);

    let html = console.export_html();
    let metadata = ExportMetadata {
        timestamp: now_stamp(),
        total_contexts: 1,
        total_projects: 0,
        active_context: active.name.clone(),
    };
    let dark = create_dark_mode_html(
        &format!("Detail Panel - {}", active.name),
        &extract_rich_styles(&html),
        &extract_html_body(&html),
        &home_name,
        &metadata,
    );

    fs::write(out_file, dark).with_context(|| format!("Failed to write: {}", out_file.display()))?;
    Ok(1)
}

/// Export panels for every tutorial's context homes
pub fn execute(base: &Path) -> Result<()> {
    let homes_dir = config::context_homes_dir(base);

    println!("{}", "=".repeat(70));
    println!("MY-CONTEXT TUTORIAL PANEL EXPORT");
    println!("{}", "=".repeat(70));
    println!("Context homes: {}", homes_dir.display());

    let mut total_exported = 0;

    for tutorial in TUTORIALS {
        println!("\nTutorial {}: {}", tutorial.number, tutorial.name);

        let tutorial_dir = config::tutorial_dir(base, tutorial.number);
        fs::create_dir_all(&tutorial_dir)
            .with_context(|| format!("Failed to create: {}", tutorial_dir.display()))?;

        for (home_name, description) in tutorial.homes {
            let home = ContextHome::new(homes_dir.join(home_name));

            if !home.exists() {
                println!("  {} Context home not found: {}", "Missing:".red(), home_name);
                continue;
            }

            println!("  Exporting: {}", description);

            let explorer_name = format!("{}_explorer.html", home_name);
            let explorer_file = tutorial_dir.join(&explorer_name);
            match export_explorer_panel(&home, &explorer_file) {
                Ok(count) => {
                    println!(
                        "    {} Explorer: {} contexts -> {}",
                        "OK".green(),
                        count,
                        explorer_name
                    );
                    total_exported += 1;
                }
                Err(e) => println!("    {} Explorer export failed: {:#}", "Error:".red(), e),
            }

            let detail_name = format!("{}_detail.html", home_name);
            let detail_file = tutorial_dir.join(&detail_name);
            match export_detail_panel(&home, &detail_file) {
                Ok(count) if count > 0 => {
                    println!(
                        "    {} Detail: {} context -> {}",
                        "OK".green(),
                        count,
                        detail_name
                    );
                    total_exported += 1;
                }
                Ok(_) => {}
                Err(e) => println!("    {} Detail export failed: {:#}", "Error:".red(), e),
            }
        }
    }

    println!();
    println!("{}", "=".repeat(70));
    println!(
        "{} PANEL EXPORT COMPLETE: {} files generated",
        "Done:".green(),
        total_exported
    );
    println!("{}", "=".repeat(70));
    println!();
    println!("Next step: run the build command to create tutorial pages");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAKE_RECORDING: &str = "<!DOCTYPE html>\n<html>\n<head>\n<style>\n\
        .r1 {color: #008080; text-decoration-color: #008080}\n\
        body {\n    color: #000000;\n    background-color: #ffffff;\n}\n\
        </style>\n</head>\n<body>\n\
        <pre style=\"font-family:monospace\"><code><span class=\"r1\">TITLE</span>\nrow</code></pre>\n\
        </body>\n</html>\n";

    #[test]
    fn test_extract_rich_styles_drops_body_rule() {
        let styles = extract_rich_styles(FAKE_RECORDING);
        assert!(styles.contains(".r1 {color: #008080"));
        assert!(!styles.contains("background-color: #ffffff"));
        assert!(!styles.contains("body"));
    }

    #[test]
    fn test_extract_rich_styles_missing_block() {
        assert_eq!(extract_rich_styles("<html><body>no styles</body></html>"), "");
    }

    #[test]
    fn test_extract_html_body() {
        let body = extract_html_body(FAKE_RECORDING);
        assert!(body.starts_with("<pre>"));
        assert!(body.ends_with("</pre>"));
        assert!(body.contains("<span class=\"r1\">TITLE</span>"));
        // Inline attributes of the source <pre> are dropped
        assert!(!body.contains("font-family"));
    }

    #[test]
    fn test_extract_html_body_fallback() {
        assert_eq!(
            extract_html_body("<html><body>nothing</body></html>"),
            "<pre>Export data not found</pre>"
        );
    }

    #[test]
    fn test_dark_mode_wrapper_contains_metadata() {
        let metadata = ExportMetadata {
            timestamp: "2025-01-15 14:00:00".to_string(),
            total_contexts: 3,
            total_projects: 2,
            active_context: "payment-service: retry".to_string(),
        };
        let html = create_dark_mode_html(
            "Explorer Panel - tutorial-01-backend-solo",
            ".r1 {color: #008080}",
            "<pre>panel</pre>",
            "tutorial-01-backend-solo",
            &metadata,
        );
        assert!(html.contains("<title>Explorer Panel - tutorial-01-backend-solo</title>"));
        assert!(html.contains("<strong>Context Home:</strong> tutorial-01-backend-solo"));
        assert!(html.contains("<strong>Total Contexts:</strong> 3"));
        assert!(html.contains("<strong>Active Context:</strong> payment-service: retry"));
        assert!(html.contains("background-color: #1a1a1a"));
        assert!(html.contains(".r1 {color: #008080}"));
        assert!(html.contains("<pre>panel</pre>"));
    }

    #[test]
    fn test_tutorial_descriptor_shape() {
        assert_eq!(TUTORIALS.len(), 8);
        assert_eq!(TUTORIALS[6].homes.len(), 4);
        assert!(TUTORIALS
            .iter()
            .all(|t| !t.homes.is_empty() && t.number.len() == 2));
    }
}
