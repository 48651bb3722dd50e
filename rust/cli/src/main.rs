fn main() {
    racing_suits_cli::logging::init_logging();
    let code = racing_suits_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
