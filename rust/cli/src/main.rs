use std::io;

fn main() {
    handsort_cli::logging::init_logging();
    let code = handsort_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
