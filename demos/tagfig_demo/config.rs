//! Configuration structs for the tagfig demo application.
//!
//! With the default prefix `TAGFIG_DEMO_`, environment variables map to keys
//! by uppercasing `prefix + key`:
//!
//! | Env var                          | Key              |
//! |----------------------------------|------------------|
//! | `TAGFIG_DEMO_NAME`               | `name`           |
//! | `TAGFIG_DEMO_SERVER.PORT`        | `server.port`    |
//! | `TAGFIG_DEMO_DISPLAY.COLOR`      | `display.color`  |
//!
//! Most shells cannot export names containing `.`, so nested keys are usually
//! set from the command line or the JSON file instead.

use tagfig::Record;

#[derive(Record, Debug, Default)]
pub struct DemoConfig {
    #[config("name:help;mode:cli;default:no;desc:Show this help")]
    pub help: bool,

    #[config("name:schema;mode:cli;default:no;desc:Print the field descriptors as JSON")]
    pub schema: bool,

    #[config("name:config;mode:cli,env;desc:Path to a JSON config file")]
    pub config_file: String,

    #[config("name:env_prefix;mode:cli;default:TAGFIG_DEMO_;desc:Environment variable prefix")]
    pub env_prefix: String,

    #[config("name:name;default:tagfig-demo;desc:Name shown in the banner")]
    pub name: String,

    #[config("name:verbose;default:no;desc:Also list the sources and default of every field")]
    pub verbose: bool,

    #[config("name:server")]
    pub server: ServerConfig,

    #[config("name:display;mode:cli,cfg")]
    pub display: DisplayConfig,
}

#[derive(Record, Debug, Default)]
pub struct ServerConfig {
    #[config("name:host;default:127.0.0.1;desc:Bind address")]
    pub host: String,

    #[config("name:port;default:8080;desc:Listen port")]
    pub port: u16,

    #[config("name:max_connections;mode:cfg;default:100;desc:Connection limit")]
    pub max_connections: u32,
}

#[derive(Record, Debug, Default)]
pub struct DisplayConfig {
    #[config("name:color;default:yellow;desc:Banner color")]
    pub color: String,

    #[config("name:format;default:table;desc:Output format (table or plain)")]
    pub format: String,
}
