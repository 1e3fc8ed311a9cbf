use std::{env::args_os, process::exit};

fn main() {
    env_logger::try_init().unwrap_or_default();

    let code = install_launcher::run(args_os().skip(1));

    exit(code);
}
