//! Output formatting shared by the subcommands
//!
//! Tables go to stdout with computed widths; json and csv reuse the same
//! series data.

/// Format a dollar amount like the dashboard metric cards ($1,234.56)
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    format!("${}.{:02}", group_thousands(cents / 100), (cents % 100).abs())
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Print one aggregate as a two-column table with a totals line
pub fn print_series(title: &str, key_header: &str, rows: &[(String, f64)]) {
    println!("{}", title);

    if rows.is_empty() {
        println!("(no data)");
        return;
    }

    let key_width = rows
        .iter()
        .map(|(k, _)| k.len())
        .max()
        .unwrap_or(0)
        .max(key_header.len())
        .max(5); // at least as wide as the "Total" label

    println!("{:<width$}  {:>12}", key_header, "Sales", width = key_width);
    println!("{}", "-".repeat(key_width + 14));

    for (key, sales) in rows {
        println!(
            "{:<width$}  {:>12}",
            key,
            format_money(*sales),
            width = key_width
        );
    }

    let total: f64 = rows.iter().map(|(_, sales)| sales).sum();
    println!("{}", "-".repeat(key_width + 14));
    println!(
        "{:<width$}  {:>12}",
        "Total",
        format_money(total),
        width = key_width
    );
}

/// Print one aggregate as csv
pub fn print_series_csv(key_header: &str, rows: &[(String, f64)]) {
    println!("{},sales", key_header);
    for (key, sales) in rows {
        println!("{},{}", key, sales);
    }
}
