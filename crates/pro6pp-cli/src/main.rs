//! pro6pp - command line access to the Pro6pp postal code API
//!
//! Prints the raw response body of each endpoint to stdout. Logs go to
//! stderr so the output can be piped straight into `jq` and friends.

mod config;
mod error;

use clap::{Args, Parser, Subcommand};
use pro6pp_api::{
    haversine_distance, DistanceAlgorithm, Pro6ppClient, RequestParameters, ResponseFormat,
};
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "pro6pp", version, about = "Query the Pro6pp postal code API")]
struct Cli {
    /// API key, overrides PRO6PP_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Response format (json, xml, csv), overrides PRO6PP_FORMAT
    #[arg(long, global = true)]
    format: Option<ResponseFormat>,

    /// Ask the API for pretty printed output, `--pretty=false` overrides PRO6PP_PRETTY
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pretty: Option<bool>,

    /// API base URL, overrides PRO6PP_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Api(ApiCommand),
    /// Haversine distance between two coordinates, computed locally
    #[command(allow_negative_numbers = true)]
    CoordinateDistance {
        lat1: f64,
        lng1: f64,
        lat2: f64,
        lng2: f64,
        /// Report miles instead of kilometres
        #[arg(long)]
        miles: bool,
    },
}

/// Commands answered by the Pro6pp service
#[derive(Debug, Subcommand)]
enum ApiCommand {
    /// Address from a postal code and optional house number
    Autocomplete {
        /// 4-digit area code or 6-character postal code
        postal: String,
        number: Option<u32>,
        extension: Option<String>,
    },
    /// Address nearest to a coordinate
    #[command(allow_negative_numbers = true)]
    Reverse { lat: f64, lng: f64 },
    /// Sort area codes by distance to an origin
    #[command(allow_negative_numbers = true)]
    Locator {
        /// Area codes to sort, comma separated
        #[arg(value_delimiter = ',', required = true)]
        targets: Vec<String>,
        #[command(flatten)]
        origin: LocatorOrigin,
    },
    /// Area codes within a radius
    Range {
        nl_fourpp: String,
        /// Radius in metres
        #[arg(long)]
        range: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// City name autocomplete
    Suggest {
        city: String,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Distance between two area codes, computed by the service
    Distance {
        from: String,
        to: String,
        /// road (supported accounts only) or straight
        #[arg(long)]
        algorithm: Option<DistanceAlgorithm>,
    },
}

#[derive(Debug, Args)]
struct LocatorOrigin {
    #[arg(long)]
    nl_fourpp: Option<String>,
    #[arg(long)]
    nl_sixpp: Option<String>,
    #[arg(long, requires = "lng")]
    lat: Option<f64>,
    #[arg(long, requires = "lat")]
    lng: Option<f64>,
}

impl LocatorOrigin {
    fn to_params(&self) -> RequestParameters {
        let mut params = RequestParameters::new();
        if let Some(ref code) = self.nl_fourpp {
            params.insert("nl_fourpp", code.as_str());
        }
        if let Some(ref code) = self.nl_sixpp {
            params.insert("nl_sixpp", code.as_str());
        }
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            params.insert("lat", lat);
            params.insert("lng", lng);
        }
        params
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("pro6pp=info".parse()?)
        .add_directive("pro6pp_api=info".parse()?);

    // JSON lines for Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<String> {
    let command = match cli.command {
        Command::Api(ref command) => command,
        // Local calculation needs neither a key nor a client
        Command::CoordinateDistance {
            lat1,
            lng1,
            lat2,
            lng2,
            miles,
        } => return Ok(haversine_distance(lat1, lng1, lat2, lng2, miles).to_string()),
    };

    let mut config = Config::from_env()?;
    apply_overrides(&mut config, &cli);
    let client = Pro6ppClient::with_config(config.client_config()?)?;

    debug!(format = %config.format, "Pro6pp client ready");

    execute(&client, command).await
}

async fn execute(client: &Pro6ppClient, command: &ApiCommand) -> Result<String> {
    let body = match command {
        ApiCommand::Autocomplete {
            postal,
            number,
            extension,
        } => {
            client
                .autocomplete(postal, *number, extension.as_deref())
                .await?
        }
        ApiCommand::Reverse { lat, lng } => client.reverse(*lat, *lng).await?,
        ApiCommand::Locator { targets, origin } => {
            client.locator(targets, origin.to_params()).await?
        }
        ApiCommand::Range {
            nl_fourpp,
            range,
            per_page,
            page,
        } => client.range(nl_fourpp, *range, *per_page, *page).await?,
        ApiCommand::Suggest { city, per_page } => client.suggest(city, *per_page).await?,
        ApiCommand::Distance {
            from,
            to,
            algorithm,
        } => client.distance(from, to, *algorithm).await?,
    };

    Ok(body)
}

/// Command line flags win over environment variables
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref key) = cli.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(pretty) = cli.pretty {
        config.pretty = pretty;
    }
    if let Some(ref url) = cli.base_url {
        config.base_url = Some(url.clone());
    }
}
