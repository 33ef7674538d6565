//! Quote summary formatting
//!
//! Formats a selection as a line-item summary with a total, for the CLI
//! `quote` command.

use crate::models::Selection;

use super::catalog::format_price;

/// Format a selection as a quote summary
pub fn format_summary(selection: &Selection) -> String {
    if selection.is_empty() {
        return "No items selected.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} items selected\n\n", selection.item_count()));

    let name_width = selection
        .iter()
        .map(|e| e.service.name.len() + format!(" x {}", e.quantity).len())
        .max()
        .unwrap_or(4);

    for entry in selection.iter() {
        let label = format!("{} x {}", entry.service.name, entry.quantity);
        output.push_str(&format!(
            "{:<width$}  {:>10}\n",
            label,
            format_price(entry.line_total()),
            width = name_width
        ));
    }

    output.push_str(&format!(
        "{:-<width$}  {:->10}\n",
        "",
        "",
        width = name_width
    ));
    output.push_str(&format!(
        "{:<width$}  {:>10}\n",
        "Total",
        format_price(selection.total()),
        width = name_width
    ));

    output
}
