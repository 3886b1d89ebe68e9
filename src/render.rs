// src/render.rs
// Server-side HTML: listing page (sort control, rows, pager) and wallet detail page

use crate::models::{ButtonKind, PageButton, SortDirection, WalletRecord};
use crate::table::WalletTable;

const STYLES: &str = r#"
        body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2937; }
        h1 { font-size: 1.25rem; margin-bottom: 1rem; }
        table { border-collapse: collapse; width: 100%; max-width: 56rem; }
        th, td { border-bottom: 1px solid #e5e7eb; padding: 0.5rem; text-align: left; }
        td.profit { font-variant-numeric: tabular-nums; text-align: right; }
        td.loss { color: #b91c1c; }
        .row-link { background: none; border: none; color: #2563eb; cursor: pointer; font-family: monospace; padding: 0; }
        .pager { display: flex; gap: 0.25rem; margin-top: 1rem; align-items: center; }
        .pager button { min-width: 2.5rem; padding: 0.25rem 0.5rem; }
        .pager button.current { background: #2563eb; color: #fff; border-color: #2563eb; }
        .pager .ellipsis { padding: 0 0.25rem; }
        .empty { color: #6b7280; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html(title),
        styles = STYLES,
        body = body
    )
}

pub fn render_listing(table: &WalletTable) -> String {
    let sort_label = match table.next_sort() {
        SortDirection::Descending => "Sort by Net Profit (high to low)",
        SortDirection::Ascending => "Sort by Net Profit (low to high)",
    };

    let rows = table.visible_rows();
    let rows_html = if rows.is_empty() {
        r#"<tr><td colspan="2" class="empty">No wallets to display</td></tr>"#.to_string()
    } else {
        rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        r#"<h1>Valuable Wallets</h1>
<form method="post" action="/sort"><button type="submit">{sort_label}</button></form>
<table>
<thead><tr><th>Wallet Address</th><th>Net Profit</th></tr></thead>
<tbody>
{rows_html}
</tbody>
</table>
{pager}"#,
        sort_label = sort_label,
        rows_html = rows_html,
        pager = render_pager(&table.buttons()),
    );

    layout("Valuable Wallets", &body)
}

fn render_row(record: &WalletRecord) -> String {
    let class = if record.net_profit.is_sign_negative() {
        "profit loss"
    } else {
        "profit"
    };
    let addr = escape_html(&record.wallet_address);
    format!(
        r#"<tr><td><form method="post" action="/select"><input type="hidden" name="walletAddress" value="{addr}"><button class="row-link" type="submit">{addr}</button></form></td><td class="{class}">{profit}</td></tr>"#,
        addr = addr,
        class = class,
        profit = record.net_profit,
    )
}

fn render_pager(buttons: &[PageButton]) -> String {
    let inner: Vec<String> = buttons.iter().map(render_button).collect();
    format!(
        "<form class=\"pager\" method=\"post\" action=\"/page\">\n{}\n</form>",
        inner.join("\n")
    )
}

fn render_button(button: &PageButton) -> String {
    let (label, value) = match (button.kind, button.target) {
        (ButtonKind::Ellipsis, _) | (_, None) => {
            return r#"<span class="ellipsis">...</span>"#.to_string()
        }
        (ButtonKind::First, _) => ("First".to_string(), "first".to_string()),
        (ButtonKind::Previous, _) => ("Previous".to_string(), "previous".to_string()),
        (ButtonKind::Next, _) => ("Next".to_string(), "next".to_string()),
        (ButtonKind::Last, _) => ("Last".to_string(), "last".to_string()),
        (ButtonKind::Page, Some(n)) => (n.to_string(), n.to_string()),
    };

    if button.current {
        return format!(r#"<button type="button" class="current" aria-current="page">{label}</button>"#);
    }

    let disabled = if button.enabled { "" } else { " disabled" };
    format!(r#"<button type="submit" name="page" value="{value}"{disabled}>{label}</button>"#)
}

pub fn render_wallet_details(wallet_address: &str) -> String {
    let body = format!(
        r#"<h1>Wallet Details</h1>
<p>Wallet Address: {}</p>
<p><a href="/">Back to wallets</a></p>"#,
        escape_html(wallet_address)
    );
    layout("Wallet Details", &body)
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
