//! citywalk: command-line front end.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use citywalk::present::{
    self, initial_map, initial_report, print_map, result_headline, result_report,
};
use citywalk::{Config, loader};
use citywalk_paths::PathRange;

fn usage() {
    eprintln!("USAGE: citywalk <DATA-FILE> [CONFIG.toml]");
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args_os().skip(1).map(PathBuf::from);
    let Some(data_path) = args.next() else {
        usage();
        return Ok(ExitCode::from(2));
    };
    let config = Config::load(args.next().as_deref())?;

    let data = loader::load(&data_path)?;
    log::info!(
        "{}: {}x{} map, man at {}",
        data_path.display(),
        data.map.size(),
        data.map.size(),
        data.start
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Initial map (man marked X):")?;
    print_map(&mut out, &initial_map(&data), config.color)?;
    present::write_report(&config.initial_report, &initial_report(&data))?;

    let mut pr = PathRange::new(data.map.bounds());
    let search = pr.find_store(&data.map, data.start, config.max_quarters);

    writeln!(out)?;
    writeln!(out, "{}", result_headline(&search, config.max_quarters))?;
    if let (Some(map), true) = (&search.map, search.found) {
        print_map(&mut out, map, config.color)?;
    }
    present::write_report(
        &config.results_report,
        &result_report(&search, config.max_quarters),
    )?;

    Ok(ExitCode::SUCCESS)
}
