use console::style;
use oraforge_cli::OraforgeCli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match OraforgeCli::parse_and_run() {
        Ok(sql) => println!("{sql}"),
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            std::process::exit(1);
        }
    }
}
