//! History command implementation

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use super::{synthetic_source, OutputFormat};
use crate::config::Config;
use crate::history::HistoryGenerator;
use crate::source::{HistoryLoader, HistoryRequest};
use crate::view::{render_history, Layout};

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Current product price, used as the walk's starting price
    #[arg(long)]
    pub price: Decimal,

    /// Trailing window in days (defaults to history.window_days)
    #[arg(long)]
    pub days: Option<u32>,

    /// Seed for a reproducible history
    #[arg(long)]
    pub seed: Option<u64>,

    /// Last day of the history (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Viewport width in pixels used to pick the layout
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Product identifier shown in the report
    #[arg(long, default_value = "product")]
    pub product: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl HistoryArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let generator = HistoryGenerator::new(config.history.clone());
        let loader = HistoryLoader::new(synthetic_source(generator, self.seed, self.today));

        tracing::info!(
            product = %self.product,
            price = %self.price,
            window_days = ?self.days,
            "Loading price history"
        );

        let request = HistoryRequest {
            product_id: self.product.clone(),
            base_price: self.price,
            window_days: self.days,
        };
        let view = loader
            .load(request)
            .await?
            .ok_or_else(|| anyhow::anyhow!("History request for {} was superseded", self.product))?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            OutputFormat::Table => {
                let layout = Layout::for_width(self.width, &config.layout);
                print!("{}", render_history(&view, &layout));
            }
        }

        Ok(())
    }
}
