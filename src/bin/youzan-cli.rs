use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use youzan_client::config::loader::file_to_config;
use youzan_client::observability::metrics::get_metrics;
use youzan_client::utils::logging::{self, LogLevel};
use youzan_client::{OrderQuery, Youzan};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "youzan.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Print the metrics exposition after the call
    #[arg(long)]
    metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a current access token
    Token,
    /// Orders created in a window (defaults to yesterday)
    Orders {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// One order by trade id
    Order { tid: String },
    /// Store customers
    Users {
        #[arg(long)]
        created_at_start: Option<i64>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 50)]
        page_size: u32,
    },
    /// Coupon activities that have not ended
    Coupons,
    /// Codes of one coupon activity
    CouponCodes {
        activity_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 200)]
        page_size: u32,
    },
    /// Salesman accounts
    Salesmen {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
    },
    /// Customer tags
    Tags {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 50)]
        page_size: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let client_config = file_to_config(Path::new(&args.config)).await?;
    logging::run(&client_config, args.log_level);

    // -------------------------------
    // 2. Build client
    // -------------------------------

    let youzan = Youzan::from_config(&client_config)?;
    info!("client ready for store {}", youzan.token_cache().credentials().store_id());

    // -------------------------------
    // 3. Run command
    // -------------------------------

    let output = match args.command {
        Command::Token => serde_json::Value::String(youzan.get_access_token().await?),
        Command::Orders { start, end, status: None, page: None } => {
            youzan.get_orders(start.as_deref(), end.as_deref()).await?
        }
        Command::Orders { start, end, status, page } => {
            youzan
                .search_orders(OrderQuery {
                    start_created: start,
                    end_created: end,
                    status,
                    page_no: page,
                    page_size: None,
                })
                .await?
        }
        Command::Order { tid } => youzan.get_order(&tid).await?,
        Command::Users { created_at_start, page, page_size } => {
            youzan.get_users(created_at_start, page, page_size).await?
        }
        Command::Coupons => youzan.get_coupon_activities().await?,
        Command::CouponCodes { activity_id, page, page_size } => {
            youzan.get_coupon_codes(&activity_id, page, page_size).await?
        }
        Command::Salesmen { page, page_size } => youzan.get_salesmen(page, page_size).await?,
        Command::Tags { page, page_size } => youzan.get_tags(page, page_size).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if args.metrics {
        print!("{}", get_metrics().await.render());
    }

    Ok(())
}
