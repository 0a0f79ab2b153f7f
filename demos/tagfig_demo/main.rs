//! # tagfig demo application
//!
//! A small program that resolves its configuration with tagfig and prints it.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example tagfig_demo
//! cargo run --example tagfig_demo -- --help=yes
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature               | How to exercise it                                                        |
//! |-----------------------|---------------------------------------------------------------------------|
//! | Defaults              | `cargo run --example tagfig_demo`                                         |
//! | CLI flags             | `cargo run --example tagfig_demo -- --name=demo --server.port 9000`       |
//! | JSON config file      | `cargo run --example tagfig_demo -- --config ./demo.json`                 |
//! | Config path from env  | `CONFIG=./demo.json cargo run --example tagfig_demo`                      |
//! | Env var override      | `TAGFIG_DEMO_NAME=from-env cargo run --example tagfig_demo`               |
//! | Custom env prefix     | `DEMO_NAME=x cargo run --example tagfig_demo -- --env_prefix DEMO_`       |
//! | Help listing          | `cargo run --example tagfig_demo -- --help yes`                           |
//! | Descriptor dump       | `cargo run --example tagfig_demo -- --schema=y`                           |
//! | Field sources         | `cargo run --example tagfig_demo -- --verbose=yes`                        |
//! | Trace logging         | `RUST_LOG=tagfig=trace cargo run --example tagfig_demo`                   |

mod config;

use std::process::ExitCode;

use tagfig::{Descriptor, Parser};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

const RESET: &str = "\x1b[0m";

fn ansi_color_code(name: &str) -> &str {
    match name {
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        _ => RESET,
    }
}

fn usage(parser: &Parser<'_>) -> String {
    format!("Usage: tagfig-demo [OPTIONS]\n\nOptions:\n{}", parser.help("  "))
}

/// One line per field: key, the sources it may come from, and its default.
fn source_table<'a>(descriptors: impl IntoIterator<Item = &'a Descriptor>) -> Vec<String> {
    descriptors
        .into_iter()
        .map(|d| {
            let sources = d.modes.effective().to_string();
            match &d.default {
                Some(default) => format!("{}: {sources} (default {default:?})", d.key),
                None => format!("{}: {sources}", d.key),
            }
        })
        .collect()
}

fn echo(config: &DemoConfig) {
    let color = ansi_color_code(&config.display.color);
    let entries = [
        ("name", config.name.clone()),
        ("verbose", config.verbose.to_string()),
        ("config", config.config_file.clone()),
        ("env_prefix", config.env_prefix.clone()),
        ("server.host", config.server.host.clone()),
        ("server.port", config.server.port.to_string()),
        (
            "server.max_connections",
            config.server.max_connections.to_string(),
        ),
        ("display.color", config.display.color.clone()),
        ("display.format", config.display.format.clone()),
    ];

    if config.display.format == "plain" {
        for (key, value) in &entries {
            println!("{key}={value}");
        }
    } else {
        let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in &entries {
            println!("{color}{key:<width$}{RESET}  {value}");
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = DemoConfig::default();
    let mut parser = match Parser::new(&mut config) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Invalid configuration schema:\n{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = parser.parse("config", "env_prefix") {
        eprintln!("Failed to load config:\n{e}\n\n{}", usage(&parser));
        return ExitCode::from(2);
    }

    let help = usage(&parser);
    let schema = match serde_json::to_string_pretty(&parser.descriptors().collect::<Vec<_>>()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize descriptors: {e}");
            return ExitCode::FAILURE;
        }
    };
    let sources = source_table(parser.descriptors());
    drop(parser);

    if config.help {
        print!("{help}");
    } else if config.schema {
        println!("{schema}");
    } else {
        echo(&config);
        if config.verbose {
            println!();
            for line in sources {
                println!("{line}");
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_table_lists_modes_and_defaults() {
        let mut config = DemoConfig::default();
        let parser = Parser::new(&mut config).unwrap();
        let lines = source_table(parser.descriptors());

        assert!(lines.contains(&"env_prefix: cli (default \"TAGFIG_DEMO_\")".to_string()));
        assert!(lines.contains(&"display.color: cli, cfg (default \"yellow\")".to_string()));
        assert!(lines.contains(&"server.max_connections: cfg (default \"100\")".to_string()));
        assert!(lines.contains(&"config: cli, env".to_string()));
    }
}
