/* 3rd party libraries */
use clap::Arg;
use crossbeam_channel as cbc;
use log::error;
use std::io::BufRead;
use std::io::Write;
use std::thread::Builder;

/* Custom libraries */
use cli::Command;
use dispatch::ControlSystem;

/* Modules */
mod cli;
mod config;
mod dispatch;
mod shared;

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::init();

    let matches = clap::Command::new("elevator-sim")
        .about("Discrete-step elevator fleet simulator")
        .arg(
            Arg::new("elevators")
                .short('n')
                .long("elevators")
                .takes_value(true)
                .help("Number of elevators in the fleet (overrides the configuration file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .takes_value(false)
                .help("Print status snapshots as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));

    let n_elevators = match matches.value_of("elevators") {
        Some(raw) => unwrap_or_exit!(raw.parse::<usize>()),
        None => config.simulation.n_elevators,
    };
    if n_elevators == 0 {
        error!("the fleet needs at least one elevator (-n)");
        std::process::exit(1);
    }
    let json_status = matches.is_present("json");
    let building = config.building;

    let mut ecs = ControlSystem::with_building(n_elevators, building);

    // Start the command reader thread. It parses stdin lines into typed
    // commands; the control system itself stays on this thread, so steps
    // are never invoked concurrently.
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let command_reader_thread = Builder::new().name("command_reader".into());
    command_reader_thread.spawn(move || {
        let mut lines = std::io::stdin().lock().lines();
        loop {
            print!("$ ");
            let _ = std::io::stdout().flush();

            match lines.next() {
                Some(Ok(line)) => match cli::parse_command(&line, &building) {
                    Ok(command) => {
                        if command_tx.send(command).is_err() || command == Command::Exit {
                            break;
                        }
                    }
                    Err(e) => println!("invalid cmd: {}", e),
                },
                Some(Err(e)) => {
                    error!("failed to read from stdin: {}", e);
                    let _ = command_tx.send(Command::Exit);
                    break;
                }
                None => {
                    let _ = command_tx.send(Command::Exit);
                    break;
                }
            }
        }
    })?;

    // Main loop
    for command in command_rx.iter() {
        match command {
            Command::Status => {
                for status in ecs.status() {
                    if json_status {
                        println!("{}", unwrap_or_exit!(serde_json::to_string(&status)));
                    } else {
                        println!("{}", status);
                    }
                }
            }
            Command::Pickup { floor, direction } => {
                if let Err(e) = ecs.pickup(floor, direction) {
                    error!("{}", e);
                }
            }
            Command::Step => ecs.step(),
            Command::Exit => break,
        }
    }

    Ok(())
}
