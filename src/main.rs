//! `caretsync`: replay an edit script against an editable surface.
//!
//! Usage: `caretsync <script.toml>`. Set `RUST_LOG=trace` to watch intents,
//! commits and caret restorations.

mod script;

use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn run(path: &str) -> Result<(), script::ReplayError> {
    let source = std::fs::read_to_string(path)?;
    let script = script::Script::from_toml_str(&source)?;
    log::debug!(target: "caretsync", "loaded {} steps from {path}", script.steps.len());
    for report in script::replay(&script)? {
        println!("{report}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: caretsync <script.toml>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(target: "caretsync", "{err}");
            eprintln!("caretsync: {err}");
            ExitCode::FAILURE
        }
    }
}
