//! Walks a small crypto price table through search, sort, paging and
//! selection, printing each view. Logs go to `table_demo.log`.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tabula::prelude::*;

fn print_view(title: &str, table: &TableEngine<Record>) {
    let view = table.view();
    let model = PaginationModel::new(table.current_page(), view.total_pages);
    let bar: Vec<String> = model.items().iter().map(ToString::to_string).collect();

    println!("== {title}");
    let headers: Vec<&str> = view.visible_columns.iter().map(|c| c.header.as_str()).collect();
    println!("   {}", headers.join(" | "));
    for row in &view.rows {
        let id = row.id.clone().unwrap_or_default();
        let mark = if table.is_selected(&id) { "[x]" } else { "[ ]" };
        let cells: Vec<String> = view
            .visible_columns
            .iter()
            .map(|c| row.cell(&c.id).to_text().unwrap_or_else(|| "-".to_string()))
            .collect();
        println!("{mark} {}", cells.join(" | "));
    }
    let summary = table.selection_summary();
    println!(
        "   pages: {}  selected: {} (all: {}, partial: {})\n",
        bar.join(" "),
        summary.count,
        summary.all_selected,
        summary.indeterminate
    );
}

fn main() {
    if let Ok(log_file) = File::create("table_demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let rows: Vec<Record> = vec![
        ("btc", "Bitcoin", 64000.0, 1.2),
        ("eth", "Ethereum", 3100.5, -0.8),
        ("sol", "Solana", 145.2, 4.1),
        ("ada", "Cardano", 0.45, -2.3),
        ("dot", "Polkadot", 6.9, 0.4),
        ("avax", "Avalanche", 28.0, 1.9),
        ("link", "Chainlink", 14.3, -1.1),
    ]
    .into_iter()
    .map(|(id, name, price, change)| {
        Record::with_id(id)
            .set("name", name)
            .set("price", price)
            .set("change", change)
    })
    .collect();

    let mut table = TableEngine::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("price", "Price").sortable(),
        Column::new("change", "24h %").sortable(),
    ])
    .with_rows(rows)
    .with_page_size(3);

    print_view("initial", &table);

    table.toggle_sort("price");
    table.toggle_sort("price");
    print_view("price, descending", &table);

    table.change_page(3);
    print_view("page 3", &table);

    table.set_search("an");
    table.change_page(1);
    table.select_all_visible(true);
    print_view("search \"an\", visible rows selected", &table);
}
