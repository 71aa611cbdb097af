// EsoxSolutions.ResourcePool
// Acquires one resource from the process-wide pool and prints it.

use esox_resourcepool::global;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match global::get_connection() {
        Some(resource) => println!("{}", resource),
        None => println!("null"),
    }
}
