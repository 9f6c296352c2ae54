use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "set" => Colour::Green,
        "clear" => Colour::Red,
        "pages" => Colour::Yellow,
        "generate" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogRow {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| Self::op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let color = color_for_operation(&entry.operation);

            let mut visible = Self::op_target(entry);
            if visible.chars().count() > OP_TARGET_MAX {
                visible = visible.chars().take(OP_TARGET_MAX - 3).collect();
                visible.push_str("...");
            }

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, entry.date, colored, padding, entry.message
            );
        }

        Ok(())
    }

    fn op_target(entry: &LogRow) -> String {
        if entry.target.is_empty() {
            entry.operation.clone()
        } else {
            format!("{} ({})", entry.operation, entry.target)
        }
    }
}
