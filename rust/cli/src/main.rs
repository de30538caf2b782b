use std::io;

fn main() {
    handlog_cli::logging::init_logging();
    let code = handlog_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
