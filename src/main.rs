use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use tabulate::{
    Align, BorderLine, DEFAULT_STYLE, RenderConfig, StyleRegistry, TerminalWidth,
    normalize::from_delimited, tabulate,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes independent on/off flags"
)]
#[command(version, about = "Render delimited text as an aligned table")]
struct Cli {
    /// Table style
    #[arg(short, long, default_value = DEFAULT_STYLE)]
    style: String,
    /// List the available styles and exit
    #[arg(long = "list-styles")]
    list_styles: bool,
    /// Cell separator in the input
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,
    /// Treat the first line as data rather than column labels
    #[arg(long = "no-header")]
    no_header: bool,
    /// Cell alignment: left, right or center
    #[arg(short, long, default_value = "right")]
    align: Align,
    /// Text shown in empty cells
    #[arg(short, long, default_value = "")]
    empty: String,
    /// Border line to omit: top, below-header or bottom
    #[arg(long = "hide")]
    hide: Vec<BorderLine>,
    /// Wrap cells wider than --max-cell onto extra rows
    #[arg(long = "wrap", conflicts_with = "autosize")]
    wrap: bool,
    /// Widest cell before wrapping
    #[arg(long = "max-cell", default_value_t = 30)]
    max_cell: usize,
    /// Fit the table to the terminal width
    #[arg(long = "autosize")]
    autosize: bool,
    /// Width to fit instead of the terminal's
    #[arg(long = "width", requires = "autosize")]
    width: Option<usize>,
    /// Log layout decisions to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Files to render; standard input when omitted
    files: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<RenderConfig> {
        let mut config = RenderConfig::default()
            .with_align(self.align)
            .with_empty(self.empty.as_str());
        config.hidden.extend(self.hide.iter().copied());
        if self.autosize {
            config = match self.width {
                Some(width) => config.with_autosize(width),
                None => config.autosize(&TerminalWidth)?,
            };
        } else if self.wrap {
            config = config.with_wrap(self.max_cell);
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TABULATE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));
    // keep any subscriber installed earlier
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn render_text(
    text: &str,
    cli: &Cli,
    registry: &StyleRegistry,
    config: &RenderConfig,
) -> anyhow::Result<String> {
    let table = from_delimited(text, cli.delimiter, !cli.no_header).into_table()?;
    Ok(tabulate(table, registry, Some(cli.style.as_str()), config)?)
}

/// Entry point for the `tabulate` command-line tool.
///
/// Reads delimiter-separated rows from each file, or from standard input
/// when no files are given, and prints one table per input. Every input is
/// rendered before anything is printed, so a failure produces no partial
/// output.
///
/// # Examples
///
/// ```sh
/// # Render a tab-separated file with the default grid style
/// tabulate data.tsv
///
/// # Fit a CSV file to the terminal with box-drawing borders
/// tabulate --autosize -d , -s border data.csv
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let registry = StyleRegistry::default();

    if cli.list_styles {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    // Resolve the style before reading input so a typo fails fast.
    registry.resolve(Some(cli.style.as_str()))?;
    let config = cli.config()?;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", render_text(&input, &cli, &registry, &config)?);
        return Ok(());
    }

    let tables = cli
        .files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            render_text(&text, &cli, &registry, &config)
                .with_context(|| format!("failed to render {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;
    print!("{}", tables.join("\n"));
    Ok(())
}
