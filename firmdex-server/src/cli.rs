use clap::{Arg, Command, ValueHint};

/// CLI arguments for firmdex-server
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        let matches = Command::new("firmdex-server")
            .version(firmdex::VERSION)
            .about("HTTP API server for the Firmdex company registry")
            .long_about(
                r#"Firmdex Server exposes the company registry over a REST API:
company registration gated on name/website relevance, and company search
with free-text relevance ranking.

The server can be configured through command line arguments or environment
variables. Command line arguments take precedence over environment variables.

Examples:
  firmdex-server --port 8080
  firmdex-server --cors-origin http://localhost:5173 --log-level debug"#,
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .help("Port to listen on")
                    .long_help(
                        "Port number for the HTTP server to listen on.
Environment variable: FIRMDEX_PORT",
                    )
                    .value_hint(ValueHint::Other)
                    .value_parser(clap::value_parser!(u16)),
            )
            .arg(
                Arg::new("cors_origin")
                    .long("cors-origin")
                    .value_name("ORIGIN")
                    .help("Browser origin allowed to call the API")
                    .long_help(
                        "Origin the CORS layer will allow, typically the local UI dev server.
Environment variable: FIRMDEX_CORS_ORIGIN",
                    )
                    .value_hint(ValueHint::Url),
            )
            .arg(
                Arg::new("log_level")
                    .long("log-level")
                    .value_name("FILTER")
                    .help("Tracing filter (e.g. info, firmdex=debug)")
                    .value_hint(ValueHint::Other),
            )
            .get_matches();

        Self {
            port: matches.get_one::<u16>("port").copied(),
            cors_origin: matches.get_one::<String>("cors_origin").cloned(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }
}
