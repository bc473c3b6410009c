use anyhow::Result;
use comfy_table::Table;

use sanctions_cli::pipeline::run_pipeline;
use sanctions_cli::summary::apply_table_style;
use sanctions_cli::types::RunResult;
use sanctions_model::CanonicalColumn;
use sanctions_transform::NormalizeConfig;

use crate::cli::RunArgs;

pub fn run_batch(args: &RunArgs) -> Result<RunResult> {
    let output = if args.dry_run {
        None
    } else {
        args.output.as_deref()
    };
    run_pipeline(&args.input, output, &NormalizeConfig::default())
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column"]);
    apply_table_style(&mut table);
    for (idx, column) in CanonicalColumn::ALL.iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), column.label().to_string()]);
    }
    println!("{table}");
    Ok(())
}
