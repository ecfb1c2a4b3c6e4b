use clap::Parser;
use korea_investment_overseas::types::config::Config;
use korea_investment_overseas::types::order::OrderRequest;
use korea_investment_overseas::types::{
    CustomerType, Direction, ExchangeCode, Market, OrderDivision, Price, Quantity,
};
use korea_investment_overseas::OverseasOrderApi;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "place_order", about = "Place one overseas stock order")]
struct Opt {
    #[arg(long)]
    config: PathBuf,
    /// us, jp, sh, hk, sz, vn
    #[arg(long)]
    market: Market,
    /// NASD, NYSE, AMEX, SEHK, SZAA, SHAA, TKSE
    #[arg(long)]
    exchange: ExchangeCode,
    /// buy or sell
    #[arg(long)]
    side: Direction,
    /// ORD_DVSN code (00, 31, 32, 33, 34)
    #[arg(long, default_value = "00")]
    division: String,
    #[arg(long)]
    symbol: String,
    #[arg(long)]
    qty: String,
    #[arg(long)]
    price: String,
    /// Print the request instead of sending it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    TomlDeserializeError(#[from] toml::de::Error),
    #[error(transparent)]
    ApiError(#[from] korea_investment_overseas::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    LoggingInit(#[from] tracing_subscriber::util::TryInitError),
}

fn get_config(path: &PathBuf) -> Result<Config, Error> {
    let mut buf = String::new();
    let mut fd = std::fs::File::open(path)?;
    let _len = fd.read_to_string(&mut buf)?;
    Ok(toml::from_str(&buf)?)
}

fn mask(s: &str) -> String {
    let visible: String = s.chars().take(4).collect();
    format!("{}***", visible)
}

async fn run(opt: Opt) -> Result<(), Error> {
    let config = get_config(&opt.config)?;
    let account = config.account()?;
    let division = OrderDivision::parse(opt.side, &opt.division)?;
    let request = OrderRequest::new(
        *config.environment(),
        opt.market,
        opt.exchange,
        account.clone(),
        &opt.symbol,
        Quantity::try_from(opt.qty.as_str())?,
        Price::try_from(opt.price.as_str())?,
        division,
    )?;
    let custtype = config.customer_type().or(Some(CustomerType::Personal));

    if opt.dry_run {
        let token = config.token_as_option().unwrap_or_default();
        let header = request.header(
            &mask(&token),
            &mask(config.app_key()),
            &mask(config.app_secret()),
            custtype,
            String::new(),
        );
        println!("{}", serde_json::to_string_pretty(&header)?);
        println!("{}", serde_json::to_string_pretty(&request.body())?);
        return Ok(());
    }

    let mut api = OverseasOrderApi::new(
        *config.environment(),
        config.app_key(),
        config.app_secret(),
        account,
        config.token_as_option(),
    )
    .await?;
    api.order.set_custtype(custtype);
    let confirmation = api.order.order(&request).await?;
    println!(
        "order accepted: odno={} ord_tmd={} gt_uid={}",
        confirmation.output().odno(),
        confirmation.output().ord_tmd(),
        confirmation.header().gt_uid()
    );
    Ok(())
}

/// fmt 구독자 등록. log 레코드도 tracing-log 브리지로 함께 넘어옴
fn init_tracing() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish()
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(Opt::parse()).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
