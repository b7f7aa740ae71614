use colored::Colorize;
use geodex_sync::SyncStats;
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Prints the per-operation counts of a reconciliation pass.
pub fn print_stats(stats: &SyncStats) {
    let mut builder = Builder::default();
    builder.push_record(["Operation", "Count"]);
    builder.push_record(["created", &stats.created.to_string()]);
    builder.push_record(["updated", &stats.updated.to_string()]);
    builder.push_record(["deleted", &stats.deleted.to_string()]);
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
    println!("Total: {}", stats.total());
}
