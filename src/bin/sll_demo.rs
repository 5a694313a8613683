use anyhow::{Context, Result};
use raii_collections::cli::Cli;
use raii_collections::{demo, SinglyLinkedList};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let original: SinglyLinkedList<i64> = cli.values.iter().copied().collect();
    let copy = original.clone();
    info!(len = original.len(), "built list and its copy");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::write_parallel(&original, &copy, &mut out).context("Failed to print list comparison")?;

    if cli.no_pause {
        out.flush().context("Failed to flush stdout")?;
    } else {
        demo::wait_for_acknowledgment(&mut io::stdin().lock(), &mut out)
            .context("Failed to wait for acknowledgment")?;
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
