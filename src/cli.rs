use clap::{Parser, Subcommand};

use crate::config::TEAMS_ROUTE;

#[derive(Parser, Debug)]
#[command(author, version, about = "teams console list view")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Serve the teams page data over HTTP
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Load one page of teams and print it
    List {
        /// Page URL or query, e.g. "?page=2&search=acme"
        #[arg(short, long, default_value = "/")]
        url: String,
        /// Route identifier used to look up the page size
        #[arg(short, long, default_value = TEAMS_ROUTE)]
        route: String,
        /// Print the raw page payload as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults_to_teams_route() {
        let cli = Cli::try_parse_from(["teams_console", "list", "--url", "?page=3"]).unwrap();

        assert_eq!(
            cli.command,
            Command::List {
                url: "?page=3".to_string(),
                route: TEAMS_ROUTE.to_string(),
                json: false,
            }
        );
    }

    #[test]
    fn serve_port_is_optional() {
        let cli = Cli::try_parse_from(["teams_console", "serve"]).unwrap();

        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }
}
