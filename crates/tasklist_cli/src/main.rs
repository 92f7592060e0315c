//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tasklist_core` linkage without a UI runtime.
//! - Render one seeded list pattern as plain text rows.
//!
//! Logs go to `TASKLIST_LOG_DIR` at `TASKLIST_LOG_LEVEL`.
//!
//! Usage: `tasklist_cli [demo]` where `demo` is one of
//! `basic|overview|deletable|movable|swipe-actions|multi-select|pinned`.

use std::process::ExitCode;
use tasklist_core::{init_logging, DemoList, ListCapability, LogConfig, RowAction, TaskList};

fn main() -> ExitCode {
    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());
    if let Err(err) = LogConfig::from_env().and_then(|config| init_logging(&config)) {
        eprintln!("logging disabled: {err}");
    }

    let demo = match std::env::args().nth(1) {
        Some(name) => match name.parse::<DemoList>() {
            Ok(demo) => demo,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => DemoList::default(),
    };

    let mut list = demo.build();
    // Pin the last row so pinned-first patterns show the partition.
    if let Some(last) = list.ids().last().copied() {
        if demo.supports(ListCapability::Pin) {
            if let Err(err) = list.apply(last, RowAction::TogglePinned) {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    print!("{}", render(demo, &list));
    ExitCode::SUCCESS
}

fn render(demo: DemoList, list: &TaskList) -> String {
    let mut out = format!("{} ({demo})\n", demo.title());
    for task in list.display_order() {
        let check = if task.is_completed { "[x]" } else { "[ ]" };
        let pin = if task.is_pinned { " (pinned)" } else { "" };
        out.push_str(&format!("{check} {}{pin}\n", task.title));
    }
    out
}
