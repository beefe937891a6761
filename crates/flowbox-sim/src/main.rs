use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use flowbox_onboarding::UserRole;
use flowbox_sim::{run_simulator, run_walkthrough, SimulatorConfig, VERSION};
use flowbox_workspace::{Dashboard, FlowboxConfig};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("flowbox-sim")
        .version(VERSION)
        .about("Flowbox onboarding and workspace simulator")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("info")
                .help("Log filter used when RUST_LOG is unset"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("simulate")
                .about("Run the seeded flow and board simulator")
                .arg(
                    Arg::new("operations")
                        .long("ops")
                        .default_value("10000")
                        .value_parser(value_parser!(u64))
                        .help("Number of operations to simulate"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed; defaults to the configured seed or 42"),
                )
                .arg(
                    Arg::new("stop-on-violation")
                        .long("stop-on-violation")
                        .action(ArgAction::SetTrue)
                        .help("Stop simulation on first violation"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("walkthrough")
                .about("Sign up, pick a role and open its workspace")
                .arg(
                    Arg::new("role")
                        .long("role")
                        .default_value("solo-creator")
                        .value_parser(value_parser!(UserRole))
                        .help("solo-creator, student, small-team or learning-pod"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Search the sample board catalog")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .default_value("")
                        .help("Case-insensitive title or description filter"),
                )
                .arg(
                    Arg::new("starred")
                        .long("starred")
                        .action(ArgAction::SetTrue)
                        .help("Only starred boards"),
                ),
        )
        .subcommand(Command::new("config").about("Print the effective configuration as TOML"))
}

fn init_tracing(matches: &ArgMatches) {
    let default_level = matches
        .get_one::<String>("log-level")
        .map_or("info", String::as_str)
        .to_string();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if matches.get_flag("log-json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<FlowboxConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => FlowboxConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(FlowboxConfig::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(&matches);
    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("simulate", args)) => {
            let operations = args.get_one::<u64>("operations").copied().unwrap_or(10_000);
            let seed = args
                .get_one::<u64>("seed")
                .copied()
                .or(config.rng_seed)
                .unwrap_or(42);

            let report = run_simulator(SimulatorConfig {
                seed,
                total_operations: operations,
                stop_on_first_violation: args.get_flag("stop-on-violation"),
                ..SimulatorConfig::default()
            })?;

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.generate_text());
            }

            std::process::exit(if report.passed() { 0 } else { 1 });
        }
        Some(("walkthrough", args)) => {
            let role = args
                .get_one::<UserRole>("role")
                .copied()
                .unwrap_or(UserRole::SoloCreator);
            let report = run_walkthrough(role, &config).await?;

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let route = report
                    .visits
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!("Role: {}", role.title());
                println!("Route: {route}");
                if let Some(code) = &report.invite_code {
                    println!("Invite code: {code}");
                }
                println!();
                print!("{}", report.workspace.generate_text());
            }
        }
        Some(("dashboard", args)) => {
            let dashboard = Dashboard::sample();
            let query = args.get_one::<String>("query").map_or("", String::as_str);
            let starred_only = args.get_flag("starred");
            for board in dashboard
                .search(query)
                .filter(|board| !starred_only || board.starred)
            {
                println!(
                    "{} {:<36} {:>3}%  due {}  [{}]",
                    if board.starred { '*' } else { ' ' },
                    board.title,
                    board.progress,
                    board.due,
                    board.tags.join(", ")
                );
            }
        }
        Some(("config", _)) => {
            print!("{}", config.to_toml_string()?);
        }
        _ => {
            cli().print_help()?;
        }
    }

    Ok(())
}
