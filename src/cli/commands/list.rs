use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{LineKind, ReportRenderer};
use crate::core::weeks::Report;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::format_long_date;
use crate::utils::mins2readable;
use crate::utils::range::DateRange;
use ansi_term::Style;

pub fn handle(cmd: &Commands, cfg: &Config, employee: Option<&str>) -> AppResult<()> {
    if let Commands::List { range, ids, totals } = cmd {
        let range = DateRange::parse_optional(range.as_deref())?;
        let (_repo, session) = open_session(cfg, employee)?;

        let report = session.report_in(range.as_ref());
        if report.is_empty() {
            info(format!("No entries for {}.", session.employee().label()));
            return Ok(());
        }

        for line in ReportRenderer::render_lines(&report, &session.employee().label()) {
            match line.kind {
                LineKind::Header => header(&line.text),
                LineKind::Week => println!("\n{}", Style::new().bold().paint(line.text.as_str())),
                LineKind::Entry => {
                    let source = line
                        .entry_id
                        .and_then(|id| session.entries().iter().find(|e| e.id == id))
                        .map(|e| e.source);

                    match (line.entry_id, *ids) {
                        (Some(id), true) => {
                            let mark = if source.is_some_and(|s| s.is_custom()) { "*" } else { " " };
                            println!("{:>5}{} {}", format!("#{}", id), mark, line.text);
                        }
                        _ => println!("{}", line.text),
                    }
                }
            }
        }

        if *ids {
            println!("\n(* = custom entry)");
        }

        if *totals {
            print_totals(&report);
        }
    }

    Ok(())
}

fn print_totals(report: &Report) {
    println!();
    header("Totals");
    for bucket in &report.buckets {
        let open = bucket.open_entries();
        let note = if open > 0 {
            format!(" ({} open)", open)
        } else {
            String::new()
        };
        println!(
            "{} – {}: {}{}",
            format_long_date(bucket.week_start),
            format_long_date(bucket.week_end()),
            mins2readable(bucket.worked_minutes(), false),
            note
        );
    }
    println!("All weeks: {}", mins2readable(report.total_worked_minutes(), false));
}
