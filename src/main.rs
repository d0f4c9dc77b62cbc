use clap::{App, Arg};
use lc3::{Config, RawModeGuard};
use std::process;

fn main() {
    let matches = App::new("LC-3 VM")
        .about("A software emulator for the LC-3 instruction set")
        .arg(
            Arg::with_name("IMAGE")
                .help("One or more program images to load, in order.")
                .multiple(true)
                .index(1),
        )
        .get_matches();

    let image_paths: Vec<String> = matches
        .values_of("IMAGE")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_default();

    let config = Config::with(&image_paths).unwrap_or_else(|usage| {
        eprintln!("{}", usage);
        process::exit(2);
    });

    let _raw_mode = RawModeGuard::install().unwrap_or_else(|err| {
        eprintln!("failed to configure terminal: {}", err);
        process::exit(1);
    });

    if let Err(err) = lc3::run(config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
