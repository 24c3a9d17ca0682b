use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use event_search::client::{DEFAULT_ENDPOINT_URL, DEFAULT_TIMEOUT};
use event_search::{EndpointConfig, RawSearchParams};
use event_search_web::DEFAULT_BIND;
use std::time::Duration;

#[derive(Parser)]
#[command(about, version, name = "event-search")]
/// Spatial, temporal and keyword search over news events in a GeoSPARQL store
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the event search HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = DEFAULT_BIND, value_hint = ValueHint::Hostname)]
        bind: String,
        #[command(flatten)]
        endpoint: EndpointArgs,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
    /// Run a single search and write the events as JSON to stdout
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        endpoint: EndpointArgs,
        /// Only print the SPARQL query, without sending it
        #[arg(long)]
        print_query: bool,
    },
}

#[derive(ClapArgs)]
pub struct EndpointArgs {
    /// URL of the SPARQL endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT_URL, value_hint = ValueHint::Url)]
    pub endpoint: String,
    /// Timeout of a request to the SPARQL endpoint, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl From<EndpointArgs> for EndpointConfig {
    fn from(args: EndpointArgs) -> Self {
        Self {
            url: args.endpoint,
            timeout: Duration::from_secs(args.timeout),
        }
    }
}

#[derive(ClapArgs)]
pub struct FilterArgs {
    /// WKT geometry the event areas must intersect
    ///
    /// Without an extent no other filter is applied either.
    #[arg(long)]
    pub extent: Option<String>,
    /// Comma-separated keywords matched against event titles
    #[arg(long)]
    pub keys: Option<String>,
    /// Only events before this date (YYYY-MM-DD)
    #[arg(long)]
    pub event_date: Option<String>,
    /// Only events after this date (YYYY-MM-DD)
    #[arg(long)]
    pub reference_date: Option<String>,
}

impl From<FilterArgs> for RawSearchParams {
    fn from(args: FilterArgs) -> Self {
        Self {
            extent: args.extent,
            keys: args.keys,
            event_date: args.event_date,
            reference_date: args.reference_date,
        }
    }
}
