use clap::Parser;
use linetrack::app::LinetrackCliArguments;

fn main() {
    env_logger::init();
    let args = LinetrackCliArguments::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running linetrack: {e}");
            std::process::exit(1);
        }
    }
}
