use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::EntryEditor;
use crate::core::report::ReportRenderer;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a custom entry.
pub fn handle(cmd: &Commands, cfg: &Config, employee: Option<&str>) -> AppResult<()> {
    if let Commands::Add {
        date,
        time_in,
        time_out,
    } = cmd
    {
        let (mut repo, mut session) = open_session(cfg, employee)?;

        let entry = EntryEditor::new(&mut repo, &mut session).add_custom(
            date,
            time_in.as_deref().unwrap_or(""),
            time_out.as_deref(),
        )?;

        success(format!(
            "Added entry #{}: {}",
            entry.id,
            ReportRenderer::entry_line(&entry)
        ));
    }

    Ok(())
}
