use crate::cli::{Args, Command, OutputFormat};
use anyhow::Context;
use clap::Parser;
use psm_client::{ClientConfig, HttpSparqlClient};
use psm_registry::{ProductProfile, ProductTypeOverview, Registry, RegistryConfig, SubstanceRow};
use serde::Serialize;
use std::fs::File;
use std::io::{self, stdout, BufWriter, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

const VERBOSE_FILTER: &str = "warn,psm_client=debug,psm_registry=debug,psm=debug";

/// A loaded view, ready to be written.
#[derive(Serialize)]
#[serde(untagged)]
enum View {
    Product(Box<ProductProfile>),
    ProductType(ProductTypeOverview),
    Substances(Vec<SubstanceRow>),
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let client = HttpSparqlClient::try_new(&ClientConfig {
        endpoint: args.endpoint.clone(),
        method: args.method.into(),
        ..ClientConfig::default()
    })
    .context("Cannot create the SPARQL client")?;
    let registry = Registry::try_new(
        client,
        RegistryConfig {
            collation_locale: args.locale.unwrap_or_else(|| args.language.clone()),
            language: args.language,
            home_country: Some(args.home_country),
        },
    )?;
    debug!(endpoint = %args.endpoint, config = ?registry.config(), "Registry ready");

    let view = match args.command {
        Command::Product { id } => View::Product(Box::new(
            registry
                .product_profile(&id)
                .await
                .with_context(|| format!("Cannot load the product {id}"))?,
        )),
        Command::ProductType { slug } => View::ProductType(
            registry
                .product_type(&slug)
                .await
                .with_context(|| format!("Cannot load the product type {slug}"))?,
        ),
        Command::Substances => View::Substances(
            registry
                .substance_table()
                .await
                .context("Cannot load the substances")?,
        ),
    };

    match args.output {
        Some(file) => close_file_writer(write_view(
            &view,
            args.format,
            BufWriter::new(
                File::create(&file)
                    .with_context(|| format!("Cannot create {}", file.display()))?,
            ),
        )?)?,
        None => write_view(&view, args.format, stdout().lock())?.flush()?,
    }
    Ok(())
}

/// Logs go to stderr, stdout only carries the rendered view.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn write_view<W: Write>(view: &View, format: OutputFormat, mut writer: W) -> anyhow::Result<W> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, view)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => match view {
            View::Product(profile) => render::product_profile(&mut writer, profile)?,
            View::ProductType(overview) => render::product_type(&mut writer, overview)?,
            View::Substances(substances) => render::substances(&mut writer, substances)?,
        },
    }
    Ok(writer)
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use axum::http::header::CONTENT_TYPE;
    use axum::routing::post;
    use axum::Router;
    use predicates::prelude::*;
    use psm_client::SPARQL_RESULTS_JSON_MEDIA_TYPE;
    use tokio::runtime::Runtime;

    macro_rules! fixture {
        ($name:literal) => {
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../lib/registry/tests/data/",
                $name
            ))
        };
    }

    const EMPTY: &str = r#"{ "head": { "vars": [] }, "results": { "bindings": [] } }"#;

    /// Picks the fixture answering a registry query. Only the product W-7300 is known.
    fn answer(query: &str) -> &'static str {
        let about_product = query.contains("/plant-protection/W-7300>");
        if query.contains("?idName") {
            fixture!("company.json")
        } else if query.contains("GROUP_CONCAT") {
            fixture!("substances.json")
        } else if query.contains("?typeName") {
            fixture!("product_type.json")
        } else if !about_product {
            EMPTY
        } else if query.contains("?sameProductName") {
            fixture!("product.json")
        } else if query.contains("?statement") {
            fixture!("hazards.json")
        } else if query.contains("?portion") {
            fixture!("components.json")
        } else if query.contains("?ind ") {
            fixture!("indications.json")
        } else {
            EMPTY
        }
    }

    /// Starts a fake SPARQL endpoint. It runs as long as the returned runtime is alive.
    fn spawn_endpoint() -> Result<(Runtime, String)> {
        let runtime = Runtime::new()?;
        let listener = runtime.block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))?;
        let address = listener.local_addr()?;
        let app = Router::new().route(
            "/query",
            post(|body: String| async move {
                ([(CONTENT_TYPE, SPARQL_RESULTS_JSON_MEDIA_TYPE)], answer(&body))
            }),
        );
        runtime.spawn(async move { axum::serve(listener, app).await });
        Ok((runtime, format!("http://{address}/query")))
    }

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("psm");
        command.arg("--");
        command
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("plant protection product registry"));
    }

    #[test]
    fn cli_product_requires_id() {
        cli_command()
            .arg("product")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("<ID>"));
    }

    #[test]
    fn cli_rejects_invalid_id() {
        cli_command()
            .arg("product")
            .arg("W 7300")
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("not a valid registry identifier"));
    }

    #[test]
    fn cli_product_profile() -> Result<()> {
        let (_runtime, endpoint) = spawn_endpoint()?;
        cli_command()
            .arg("product")
            .arg("W-7300")
            .arg("--endpoint")
            .arg(&endpoint)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Elatus Era (W-7300)\n"))
            .stdout(predicate::str::contains("Zeta Pro (DE) [W-7300-1]"))
            .stdout(predicate::str::contains("Rosentalstrasse 67, 4058 Basel"))
            .stdout(predicate::str::contains("R-Satz").count(1))
            .stdout(predicate::str::contains("24.60 % / 250.0 g/L"))
            .stdout(predicate::str::contains("0.5\u{2013}1 l/ha"))
            .stdout(predicate::str::contains("Wartefrist: 6 Wochen."));
        Ok(())
    }

    #[test]
    fn cli_product_profile_as_json_file() -> Result<()> {
        let (_runtime, endpoint) = spawn_endpoint()?;
        let output_file = NamedTempFile::new("profile.json")?;
        cli_command()
            .arg("product")
            .arg("W-7300")
            .arg("--endpoint")
            .arg(&endpoint)
            .arg("--format")
            .arg("json")
            .arg("--output")
            .arg(output_file.path())
            .assert()
            .success()
            .stdout("");
        output_file.assert(predicate::str::contains(r#""federal_no": "W-7300""#));
        output_file.assert(predicate::str::contains(r#""label": "Zeta Pro (DE)""#));
        Ok(())
    }

    #[test]
    fn cli_unknown_product() -> Result<()> {
        let (_runtime, endpoint) = spawn_endpoint()?;
        cli_command()
            .arg("product")
            .arg("W-0000")
            .arg("--endpoint")
            .arg(&endpoint)
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("No data found for id=W-0000"));
        Ok(())
    }

    #[test]
    fn cli_product_type() -> Result<()> {
        let (_runtime, endpoint) = spawn_endpoint()?;
        cli_command()
            .arg("product-type")
            .arg("Fungicide")
            .arg("--endpoint")
            .arg(&endpoint)
            .arg("--method")
            .arg("post")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Fungizid\n"))
            .stdout(predicate::str::contains("Omya (Schweiz) AG"));
        Ok(())
    }

    #[test]
    fn cli_substances() -> Result<()> {
        let (_runtime, endpoint) = spawn_endpoint()?;
        cli_command()
            .arg("substances")
            .env("PSM_ENDPOINT", &endpoint)
            .assert()
            .success()
            .stdout(predicate::str::contains("Glyphosat"))
            .stdout(predicate::str::contains("31.46"));
        Ok(())
    }

    #[test]
    fn cli_unreachable_endpoint() -> Result<()> {
        let runtime = Runtime::new()?;
        let listener = runtime.block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))?;
        let address = listener.local_addr()?;
        drop(listener);
        cli_command()
            .arg("substances")
            .arg("--endpoint")
            .arg(format!("http://{address}/query"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot load the substances"));
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
