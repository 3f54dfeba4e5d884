use clap::{Arg, ArgAction, Command};
use color_eyre::Result;
use std::io;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod domain;
mod ports;

use adapters::{config::EnvConfigStore, console::ConsolePresenter};
use application::{AppError, UserService};
use ports::{resolve_config_or_default, AppConfig};

fn cli() -> Command {
    Command::new("user-lifecycle")
        .version("0.1.0")
        .about("Walk a user through its registration lifecycle")
        .long_about("Walk a user through its registration lifecycle.\n\nWithout a subcommand the demo scenario runs: activate before registering, then register and activate.")
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the final user as JSON (can also be set via USER_LIFECYCLE_JSON)")
                .global(true)
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Tracing filter for stderr logs (can also be set via USER_LIFECYCLE_LOG)")
                .global(true)
        )
        .subcommand(
            Command::new("demo")
                .about("Run the demo scenario")
        )
        .subcommand(
            Command::new("run")
                .about("Apply steps to a fresh user in order")
                .arg(
                    Arg::new("steps")
                        .value_name("STEP")
                        .help("register or activate")
                        .required(true)
                        .num_args(1..)
                )
        )
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_level);
    let fell_back = filter.is_err();

    tracing_subscriber::fmt()
        .with_env_filter(filter.unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if fell_back {
        tracing::warn!(level = %config.log_level, "invalid log filter, using warn");
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let matches = cli().get_matches();

    let config_store = EnvConfigStore::new();
    let (config, config_error) = resolve_config_or_default(
        &config_store,
        matches.get_one::<String>("log-level").map(String::as_str),
        matches.get_flag("json"),
    );

    init_tracing(&config);

    if let Some(err) = config_error {
        let err = AppError::from(err);
        tracing::warn!(error = %err, "ignoring environment configuration, using defaults");
    }

    let mut service = UserService::default();
    tracing::debug!(user_id = %service.user().id, "user created");

    let stdout = io::stdout();
    let mut presenter = ConsolePresenter::new(stdout.lock());

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let steps: Vec<String> = run_matches
                .get_many::<String>("steps")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            presenter.run_steps(&mut service, steps.as_slice())?;
        }
        // `demo` and no subcommand behave the same
        _ => presenter.run_demo(&mut service)?,
    }

    let state = service.user().state();
    tracing::info!(%state, terminal = state.is_terminal(), "scenario finished");

    if config.json_output {
        presenter.print_json(service.user())?;
    }

    Ok(())
}
