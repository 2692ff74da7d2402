use log::debug;
use std::io;
use write_to_global_var::{run, symbols};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    for symbol in symbols::list() {
        debug!("{:?} {} at {:#x}", symbol.kind, symbol.name, symbol.address);
    }

    let stdout = io::stdout();
    run(&mut stdout.lock())
}
