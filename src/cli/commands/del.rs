use crate::cli::commands::{ask_confirmation, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::EntryEditor;
use crate::core::report::ReportRenderer;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, employee: Option<&str>) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let (mut repo, mut session) = open_session(cfg, employee)?;

        // a stale or foreign id is reported by the repository, not guessed here
        let prompt = match session.entries().iter().find(|e| e.id == *id) {
            Some(e) => format!(
                "Delete entry #{} ({})? This action is irreversible.",
                id,
                ReportRenderer::entry_line(e)
            ),
            None => format!("Delete entry #{}? This action is irreversible.", id),
        };

        if !*yes && cfg.confirm_delete && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        EntryEditor::new(&mut repo, &mut session).delete(*id)?;
        success(format!("Entry #{} has been deleted.", id));
    }

    Ok(())
}
