// src/cli/trash_commands.rs
use crossterm::style::Stylize;
use tracing::instrument;

use crate::application::services::trash_workflow::{TrashPhase, TrashWorkflow};
use crate::cli::display;
use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;
use crate::util::helper::confirm;

#[instrument(skip(container))]
pub async fn list(container: &ServiceContainer, is_json: bool) -> CliResult<()> {
    let mut workflow = container.trash_workflow();
    workflow.load().await;

    match workflow.state().phase() {
        TrashPhase::Error => Err(load_error(&workflow)),
        TrashPhase::Empty | TrashPhase::NonEmpty if is_json => {
            let json = serde_json::to_string_pretty(&workflow.state().bookmarks)
                .map_err(|e| CliError::Other(format!("Failed to serialize bookmarks: {}", e)))?;
            println!("{}", json);
            Ok(())
        }
        TrashPhase::Empty => {
            println!("The trash is empty.");
            Ok(())
        }
        TrashPhase::NonEmpty => {
            display::write_trash_listing(&workflow.state().bookmarks)?;
            Ok(())
        }
        TrashPhase::Loading => Ok(()),
    }
}

#[instrument(skip(container))]
pub async fn restore(container: &ServiceContainer, id: &str, assume_yes: bool) -> CliResult<()> {
    let mut workflow = container.trash_workflow();
    workflow.load().await;
    if workflow.state().phase() == TrashPhase::Error {
        return Err(load_error(&workflow));
    }

    let title = find_title(&workflow, id)?;
    workflow.restore(id, &title);
    resolve_confirmation(&mut workflow, assume_yes).await
}

#[instrument(skip(container))]
pub async fn permanent_delete(
    container: &ServiceContainer,
    id: &str,
    assume_yes: bool,
) -> CliResult<()> {
    let mut workflow = container.trash_workflow();
    workflow.load().await;
    if workflow.state().phase() == TrashPhase::Error {
        return Err(load_error(&workflow));
    }

    let title = find_title(&workflow, id)?;
    workflow.permanently_delete(id, &title);
    resolve_confirmation(&mut workflow, assume_yes).await
}

#[instrument(skip(container))]
pub async fn empty(container: &ServiceContainer, assume_yes: bool) -> CliResult<()> {
    let mut workflow = container.trash_workflow();
    workflow.load().await;
    if workflow.state().phase() == TrashPhase::Error {
        return Err(load_error(&workflow));
    }
    if workflow.state().phase() == TrashPhase::Empty {
        println!("The trash is already empty.");
        return Ok(());
    }

    workflow.empty_all();
    resolve_confirmation(&mut workflow, assume_yes).await
}

fn load_error(workflow: &TrashWorkflow) -> CliError {
    let message = workflow
        .state()
        .error
        .as_deref()
        .unwrap_or("Failed to load the bookmark trash");
    CliError::CommandFailed(format!("{} (run the command again to retry)", message))
}

fn find_title(workflow: &TrashWorkflow, id: &str) -> CliResult<String> {
    workflow
        .state()
        .bookmarks
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.title.clone())
        .ok_or_else(|| CliError::InvalidInput(format!("No trashed bookmark with ID {}", id)))
}

/// Answers the workflow's pending confirmation through the terminal.
///
/// Declining cancels the request, which issues no remote call and leaves both
/// the local list and the server untouched.
async fn resolve_confirmation(workflow: &mut TrashWorkflow, assume_yes: bool) -> CliResult<()> {
    let Some(request) = workflow.pending_confirmation() else {
        return Ok(());
    };

    let prompt = if request.danger {
        format!("{}", format!("{}: {}", request.title, request.message).red())
    } else {
        format!("{}: {}", request.title, request.message)
    };

    if assume_yes || confirm(&prompt) {
        workflow.confirm().await;
    } else {
        workflow.cancel_confirmation();
        println!("Cancelled.");
    }
    Ok(())
}
