use crate::prelude::*;
use clap::Parser;
use streams_core::names::NameOperations;

mod endpoints;
mod error;
mod names;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Functional idioms (map, filter, reduce, ...) over a fixed list of names"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Override the sample name list (repeat the flag or separate with commas)
    #[clap(
        long = "name",
        env = "STREAMS_NAMES",
        global = true,
        value_delimiter = ','
    )]
    names: Vec<String>,

    /// Whether to display additional information.
    #[clap(long, env = "STREAMS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Name operations over the configured list, or the sample list when none is set
    pub fn name_operations(&self) -> NameOperations {
        if self.names.is_empty() {
            NameOperations::default()
        } else {
            NameOperations::new(self.names.iter().cloned())
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the name operations over HTTP
    Serve(crate::server::App),

    /// Run a name operation locally and print the result
    Names(crate::names::App),

    /// List the HTTP endpoints and their parameters
    Endpoints(crate::endpoints::EndpointsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Names(sub_app) => crate::names::run(sub_app, app.global),
        SubCommands::Endpoints(options) => crate::endpoints::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        App::command().debug_assert();
    }

    #[test]
    fn test_global_names_default_to_sample_list() {
        let app = App::parse_from(["streams", "endpoints"]);
        assert_eq!(app.global.name_operations(), NameOperations::default());
    }

    #[test]
    fn test_global_names_override() {
        let app = App::parse_from(["streams", "--name", "Ana,Bea", "--name", "Carla", "endpoints"]);
        assert_eq!(
            app.global.name_operations().names(),
            &["Ana".to_string(), "Bea".to_string(), "Carla".to_string()]
        );
    }
}
