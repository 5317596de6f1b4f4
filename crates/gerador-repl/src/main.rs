//! gerador REPL entry point.
//!
//! Launch the terminal:
//! ```bash
//! cargo run -p gerador-repl
//! ```

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var); stdout belongs to the terminal
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    gerador_repl::run()
}
