//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line for a screen.
///
/// Pretty mode: "Budget · title"
/// Plain mode: "budget title"
pub fn header(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        let name = styled("Budget", styles::bold(), ctx.color);
        format!("{} \u{00B7} {}", name, title)
    } else {
        format!("budget {}", title.to_lowercase())
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() && ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(40))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a table.
///
/// Pretty mode: comfy-table with borders
/// Plain mode: header line then tab-separated rows
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_MARKDOWN);
        }

        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(ctx.width.min(u16::MAX as usize) as u16);

        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        for (i, col) in columns.iter().enumerate() {
            if col.align_right {
                if let Some(column) = table.column_mut(i) {
                    column.set_cell_alignment(CellAlignment::Right);
                }
            }
        }

        table.to_string()
    } else {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            columns
                .iter()
                .map(|c| c.header)
                .collect::<Vec<_>>()
                .join("\t"),
        );
        for row in rows {
            lines.push(row.join("\t"));
        }
        lines.join("\n")
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext::plain()
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "Transactions");
        assert!(h.contains("Budget"));
        assert!(h.contains("Transactions"));
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "Transactions"), "budget transactions");
    }

    #[test]
    fn test_kv_plain() {
        assert_eq!(kv(&plain_ctx(), "Total Income", "100.00"), "total_income=100.00");
    }

    #[test]
    fn test_kv_pretty() {
        assert_eq!(kv(&pretty_ctx(), "Rows", "2"), "Rows: 2");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(&plain_ctx(), "Saved", &[("Path", "/tmp/a.csv"), ("Rows", "2")]);
        assert_eq!(out, "status=ok\npath=/tmp/a.csv\nrows=2");
    }

    #[test]
    fn test_table_plain_has_header() {
        let columns = [Column::new("ID"), Column::right("Amount")];
        let rows = vec![vec!["0".to_string(), "100.00".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "ID\tAmount\n0\t100.00");
    }

    #[test]
    fn test_table_pretty_contains_cells() {
        let columns = [Column::new("ID"), Column::right("Amount")];
        let rows = vec![vec!["0".to_string(), "100.00".to_string()]];
        let out = table(&pretty_ctx(), &columns, &rows);
        assert!(out.contains("Amount"));
        assert!(out.contains("100.00"));
    }

    #[test]
    fn test_error_message_plain_with_hint() {
        let out = error_message(&plain_ctx(), "Invalid amount", Some("Enter a number"));
        assert_eq!(out, "error=Invalid amount\nhint=Enter a number");
    }

    #[test]
    fn test_error_message_pretty() {
        let out = error_message(&pretty_ctx(), "Invalid choice", None);
        assert!(out.contains("Invalid choice"));
        assert!(out.starts_with("[\u{2717}]"));
    }
}
