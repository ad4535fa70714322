use crate::prelude::{println, *};
use colored::Colorize;
use streams_core::catalog::{self, CatalogOutput, Endpoint};

#[derive(Debug, clap::Args)]
pub struct EndpointsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: EndpointsOptions, global: crate::Global) -> Result<()> {
    let output = catalog::catalog();

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "{} {}",
        output.info.title.bold().bright_cyan(),
        f!("v{}", output.info.version).dimmed()
    );
    println!("{}\n", output.info.description);

    let mut table = new_table();
    table.add_row(prettytable::row!["Method", "Path", "Params", "Summary"]);
    for endpoint in &output.endpoints {
        table.add_row(prettytable::row![
            endpoint.method,
            endpoint.path,
            format_params(endpoint),
            endpoint.summary
        ]);
    }
    table.printstd();

    if global.verbose {
        print_details(&output);
    }

    Ok(())
}

/// Render an endpoint's parameters as `name=default` pairs
fn format_params(endpoint: &Endpoint) -> String {
    endpoint
        .params
        .iter()
        .map(|param| match param.default {
            Some(default) => f!("{}={default}", param.name),
            None => f!("{} ({})", param.name, param.param_type),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_details(output: &CatalogOutput) {
    for endpoint in &output.endpoints {
        println!(
            "\n{} {}",
            endpoint.method.to_string().bright_green(),
            endpoint.path.bold()
        );
        println!("  {}", endpoint.description);
        println!("  {} {}", "example:".dimmed(), endpoint.example_response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streams_core::catalog::{find, Method};

    #[test]
    fn test_format_params_with_defaults() {
        let filter = find(Method::Get, "/streams/filter").unwrap();
        assert_eq!(format_params(filter), "letter=A");
    }

    #[test]
    fn test_format_params_body() {
        let binary = find(Method::Post, "/streams/binary").unwrap();
        assert_eq!(format_params(binary), "numbers (array<integer>)");
    }

    #[test]
    fn test_format_params_none() {
        let map = find(Method::Get, "/streams/map").unwrap();
        assert_eq!(format_params(map), "");
    }
}
