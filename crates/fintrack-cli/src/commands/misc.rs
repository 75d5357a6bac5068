use clap::CommandFactory;
use clap_complete::generate;

use fintrack_core::CategorySet;

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs};
use crate::ui::{header, print, table, Column, UiContext};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "fintrack", &mut std::io::stdout());
    Ok(())
}

pub fn handle_categories(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false)?;
    print_categories(&ui, ctx.categories(), ctx.quiet())
}

/// Print the configured category labels, one per line.
pub fn print_categories(
    ui: &UiContext,
    categories: &CategorySet,
    quiet: bool,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(categories)?);
        return Ok(());
    }
    if ui.mode.is_pretty() {
        if !quiet {
            print(ui, &header(ui, "categories", Some(&categories.len().to_string())));
        }
        let columns = [Column::numeric("#"), Column::new("Category")];
        let rows: Vec<Vec<String>> = categories
            .iter()
            .enumerate()
            .map(|(i, label)| vec![(i + 1).to_string(), label.to_string()])
            .collect();
        print(ui, &table(ui, &columns, &rows));
        return Ok(());
    }
    for label in categories.iter() {
        println!("{}", label);
    }
    Ok(())
}
