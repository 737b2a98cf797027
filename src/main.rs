use svnhooks::logging::init_logging;

fn main() {
    init_logging();
    let code = svnhooks::execute(std::env::args_os(), &mut std::io::stderr());
    std::process::exit(code);
}
