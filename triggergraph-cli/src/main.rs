//! triggergraph binary: load a graph document, play a host session, print what ran.

use std::path::PathBuf;

use clap::Parser;
use triggergraph_cli::{host_runtime, run_with_config, Error, RunConfig, RunOptions, Signal};

#[derive(Parser, Debug)]
#[command(name = "triggergraph")]
#[command(about = "Run a trigger graph: enable → start → signals → disable")]
struct Args {
    /// Graph document (JSON node and edge lists)
    #[arg(value_name = "GRAPH")]
    graph: PathBuf,

    /// Signal fired after start, in order: event:TAG, event:TAG@INVOKER,
    /// trigger-enter:OBJ, trigger-exit:OBJ, collision-enter:OBJ, collision-exit:OBJ
    #[arg(short, long = "signal", value_name = "SIGNAL")]
    signals: Vec<Signal>,

    /// Owner object; lifecycle signals carry it as invoker
    #[arg(long, value_name = "NAME")]
    owner: Option<String>,

    /// Stop propagation this many nodes below a trigger
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Log dispatch and node execution at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,triggergraph=debug,triggergraph_cli=debug"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let mut config = RunConfig::from_env(&args.graph)?;
    config.apply_options(&RunOptions {
        owner: args.owner,
        max_depth: args.max_depth,
        verbose: args.verbose,
    });
    init_tracing(config.verbose);

    let runtime = host_runtime()?;
    let summary = match runtime.block_on(run_with_config(&config, &args.signals)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", summary);
    if !summary.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
