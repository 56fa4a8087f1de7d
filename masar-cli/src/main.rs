//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = masar_cli::run() {
        eprintln!("masar: {err}");
        std::process::exit(1);
    }
}
