// src/cli/browse.rs
use std::io::{self, BufRead, Write};

use crate::application::services::action_bar::ActionBarState;
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::domain::filters::{SORT_CYCLE, VIEW_CYCLE};

const HELP: &str = "commands: s=search target  /<text>=keyword  o=sort  v=visibility  m=view mode  b=batch  x <id>=select  q=quit";

/// Interactive loop over the action-bar toggles.
///
/// Prints after every input the filter intent a bookmark list view would
/// consume. Purely local: no network calls happen here.
pub fn browse(settings: &Settings) -> CliResult<()> {
    let mut state = ActionBarState::new(
        settings.browse.sort_by,
        settings.browse.visibility,
        settings.browse.view_mode,
    );

    println!("{}", HELP);
    print_state(&state);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "s" => state.toggle_search_mode(),
            "o" => state.cycle_sort(SORT_CYCLE),
            "v" => state.cycle_visibility(),
            "m" => state.cycle_view_mode(VIEW_CYCLE),
            "b" => state.toggle_batch_mode(),
            "" => {}
            other => {
                if let Some(keyword) = other.strip_prefix('/') {
                    state.set_search_keyword(keyword.trim());
                } else if let Some(id) = other.strip_prefix("x ") {
                    state.toggle_selected(id.trim());
                } else {
                    println!("Unknown command: {} ({})", other, HELP);
                }
            }
        }
        print_state(&state);
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn print_state(state: &ActionBarState) {
    let mut selected: Vec<&str> = state.selected_ids.iter().map(String::as_str).collect();
    selected.sort_unstable();

    println!(
        "search={}:{:?} sort={} visibility={} view={} batch={} selected=[{}]",
        state.search_mode,
        state.search_keyword,
        state.sort_by,
        state.visibility,
        state.view_mode,
        state.batch_mode,
        selected.join(", "),
    );
}
