use std::{io::stdin, path::PathBuf, sync::Arc};

use clap::Parser;
use summoner_lookup::{
    config::ApiConfig,
    logging::{self, DEFAULT_LOG_FILE},
    service::gameapi::riot_api_client::RiotApiClient,
    ui::{self, repl, LookupRunner},
};

/// Look up a League of Legends summoner and their ranked standings
#[derive(Parser, Debug)]
#[command(name = "summoner-lookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the result for this summoner name and exit instead of opening the UI
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Regional API host, e.g. euw1.api.riotgames.com
    #[arg(long = "host")]
    host: Option<String>,

    /// Timeout for a single API request in seconds
    #[arg(long = "timeout-secs")]
    timeout_secs: Option<u64>,

    /// File that receives the log output
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(error) = logging::init(&args.log_file) {
        eprintln!("Logging disabled: {}", error);
    }

    let config = match ApiConfig::from_env(args.host, args.timeout_secs) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error occured while reading configuration:\n{}\n", error);
            std::process::exit(2);
        }
    };

    let client = match RiotApiClient::new(&config) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("Error occured while initializing:\n{}\n", error);
            std::process::exit(1);
        }
    };

    if let Some(name) = args.name {
        println!("{}", ui::run_once(&client, &name));
        return;
    }

    match repl::run(LookupRunner::new(Arc::new(client))) {
        Ok(_) => return,
        Err(error) => println!("Error occured while running REPL:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}
