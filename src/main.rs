use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(err) = depgraph_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
