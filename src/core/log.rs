use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Colour for an operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Cyan,
        "add" => Colour::Blue,
        "del" | "employee_del" => Colour::Red,
        "employee_add" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    let s = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if s.chars().count() > MAX_OP_WIDTH {
        let mut cut: String = s.chars().take(MAX_OP_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        s
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = rows.iter().map(op_target).collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, label) in rows.iter().zip(labels) {
            // pad first so the escape codes don't count towards the width
            let padded = pad_right(&label, op_w);
            let (op, rest) = padded.split_at(row.operation.len().min(padded.len()));
            let colour = color_for_operation(&row.operation);

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                colour.paint(op),
                rest,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
