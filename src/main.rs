use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use crud_gateway::common::common::setup_logging;
use crud_gateway::config::structs::configuration::Configuration;
use crud_gateway::database::errors::DatabaseError;
use crud_gateway::database::structs::row::Row;
use crud_gateway::database::structs::sql_fragment::SqlFragment;
use crud_gateway::gateway::structs::backend_factory::BackendFactory;
use crud_gateway::gateway::structs::crud_gateway::CrudGateway;
use crud_gateway::structs::{Cli, Command};

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Unable to load {}: {}", args.config, error);
            exit(101)
        }
    };
    if let Err(error) = config.apply_env_overrides() {
        eprintln!("{}", error);
        exit(101)
    }
    if let Some(backend) = args.backend.clone() {
        config.backend = backend;
    }
    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(101)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let Some(command) = args.command else {
        info!("[BOOT] No command given, configuration is valid");
        return Ok(());
    };

    let result = Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let factory = BackendFactory::default();
            let mut gateway = factory.create_gateway(&config.backend, &config.database).await?;
            let outcome = run_command(&mut gateway, command).await;
            let closed = gateway.close().await;
            outcome.and(closed)
        });

    if let Err(error) = result {
        error!("[BOOT] {}", error);
        exit(1)
    }
    Ok(())
}

async fn run_command(gateway: &mut CrudGateway, command: Command) -> Result<(), DatabaseError>
{
    match command {
        Command::Create { table, pairs } => gateway.create(&table, &pairs).await,
        Command::Read { table, condition } => {
            let condition = condition.map(SqlFragment::raw);
            let rows = gateway.read(&table, condition.as_ref()).await?;
            println!("{}", rows_to_json(&rows));
            Ok(())
        }
        Command::Update { table, set_clause, condition } => {
            gateway.update(&table, &SqlFragment::raw(set_clause), &SqlFragment::raw(condition)).await
        }
        Command::Delete { table, condition } => {
            gateway.delete(&table, &SqlFragment::raw(condition)).await
        }
    }
}

fn rows_to_json(rows: &[Row]) -> serde_json::Value
{
    rows.iter()
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = row.columns
                .iter()
                .zip(row.values.iter())
                .map(|(column, value)| (column.clone(), serde_json::to_value(value).unwrap_or(serde_json::Value::Null)))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect()
}
