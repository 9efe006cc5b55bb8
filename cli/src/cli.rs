use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use psm_client::{QueryMethod, DEFAULT_ENDPOINT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "psm", arg_required_else_help = true)]
/// Browse the Swiss plant protection product registry (Pflanzenschutzmittelverzeichnis)
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// URL of the SPARQL endpoint
    #[arg(long, global = true, env = "PSM_ENDPOINT", default_value = DEFAULT_ENDPOINT, value_hint = ValueHint::Url)]
    pub endpoint: String,
    /// How queries are sent to the endpoint
    #[arg(long, global = true, value_enum, default_value_t = Method::Post)]
    pub method: Method,
    /// Language of the labels, e.g. "de", "fr" or "it"
    #[arg(long, global = true, env = "PSM_LANGUAGE", default_value = "de")]
    pub language: String,
    /// Locale used to sort labels
    ///
    /// By default the label language is used.
    #[arg(long, global = true, env = "PSM_LOCALE")]
    pub locale: Option<String>,
    /// Country code of products that are listed without a country suffix
    #[arg(long, global = true, default_value = "CH")]
    pub home_country: String,
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// File to write to
    ///
    /// If no file is given, stdout is written.
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// Log the queries sent to the endpoint
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a single product
    Product {
        /// Federal admission number of the product, e.g. "W-7300"
        id: String,
    },
    /// List all products of a product type
    ProductType {
        /// Name of the product type, e.g. "Herbicide"
        slug: String,
    },
    /// List all substances that are part of a product
    Substances,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Post,
    Get,
}

impl From<Method> for QueryMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Post => QueryMethod::Post,
            Method::Get => QueryMethod::Get,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
