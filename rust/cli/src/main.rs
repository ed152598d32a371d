use std::io;

fn main() {
    if let Err(e) = cardroom_ai::logging::init_logging() {
        eprintln!("logging disabled: {e}");
    }

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = cardroom_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
