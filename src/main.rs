//! glancectl - Glances server manager CLI

use clap::{Parser, Subcommand};
use glancectl::{address, GlancesServer, JsonPrefs, Paths, ServerRegistry};

#[derive(Parser)]
#[command(name = "glancectl")]
#[command(about = "Glances server manager - track named Glances monitoring endpoints")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a server, replacing any existing server with the same name
    Add {
        /// Unique name for the server
        nickname: String,

        /// Host or URL of the Glances agent (http:// optional)
        url: String,

        /// Agent port (default: 61209)
        #[arg(long, default_value = "")]
        port: String,
    },

    /// Remove a server by name
    Remove {
        /// Name of the server to remove
        nickname: String,
    },

    /// Remove every configured server
    RemoveAll,

    /// List configured servers
    List {
        /// Print server names only
        #[arg(long)]
        names: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one server by name
    Show {
        /// Server name
        nickname: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved paths (for debugging)
    Paths,
}

fn main() {
    let cli = Cli::parse();
    let paths = Paths::resolve();
    let debug = cli.debug;

    match cli.command {
        Commands::Paths => {
            println!("Servers file: {}", paths.servers_path().display());
            println!("Exists:       {}", paths.servers_path().exists());
        }
        Commands::Add {
            nickname,
            url,
            port,
        } => {
            let address = match address::validate_input(&nickname, &url, &port) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            if debug {
                eprintln!("[debug] Canonical address: {}", address);
            }

            let (mut registry, mut store) = load(&paths, debug);
            registry.add_or_replace(&nickname, &address);
            save(&registry, &mut store, debug);
            println!("Added {} ({})", nickname, address);
        }
        Commands::Remove { nickname } => {
            let (mut registry, mut store) = load(&paths, debug);
            if registry.remove(&nickname) {
                save(&registry, &mut store, debug);
                println!("Removed {}", nickname);
            } else {
                println!("No server named {}", nickname);
            }
        }
        Commands::RemoveAll => {
            let (mut registry, mut store) = load(&paths, debug);
            registry.remove_all();
            save(&registry, &mut store, debug);
            println!("Removed all servers.");
        }
        Commands::List { names, json } => {
            let (registry, _store) = load(&paths, debug);

            if json {
                let output = if names {
                    serde_json::to_string_pretty(&registry.nicknames()).unwrap()
                } else {
                    serde_json::to_string_pretty(registry.servers()).unwrap()
                };
                println!("{output}");
            } else if names {
                for name in registry.nicknames() {
                    println!("{}", name);
                }
            } else {
                if registry.is_empty() {
                    println!("No servers configured.");
                    return;
                }
                print_server_table(registry.servers());
            }
        }
        Commands::Show { nickname, json } => {
            let (registry, _store) = load(&paths, debug);

            match registry.get(&nickname) {
                Some(server) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(server).unwrap());
                    } else {
                        print_server_table(std::slice::from_ref(server));
                    }
                }
                None => {
                    eprintln!("Server not found: {}", nickname);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Open the preference store and load the registry from it.
fn load(paths: &Paths, debug: bool) -> (ServerRegistry, JsonPrefs) {
    let store = match JsonPrefs::open(paths.servers_path()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut registry = ServerRegistry::new();
    let count = registry.load_from(&store);
    if debug {
        eprintln!(
            "[debug] Loaded {} servers from {}",
            count,
            paths.servers_path().display()
        );
    }

    (registry, store)
}

/// Flush the registry back to the preference store.
fn save(registry: &ServerRegistry, store: &mut JsonPrefs, debug: bool) {
    match registry.save_to(store) {
        Ok(count) => {
            if debug {
                eprintln!("[debug] Saved {} servers", count);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_server_table(servers: &[GlancesServer]) {
    const INDENT: &str = "        ";

    for s in servers {
        println!("{}", s.nickname);
        println!("{}Address: {}", INDENT, s.address);
        println!();
    }
}
