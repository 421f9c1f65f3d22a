use serde_json::Value;

use crate::client::Params;
use crate::error::Result;
use crate::facade::Youzan;
use crate::helpers::time::default_created_range;

const TRADES_SOLD: (&str, &str) = ("youzan.trades.sold.get", "4.0.1");
const TRADE_GET: (&str, &str) = ("youzan.trade.get", "4.0.0");

/// Filters for [`Youzan::search_orders`]; unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub start_created: Option<String>,
    pub end_created: Option<String>,
    pub status: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

impl OrderQuery {
    fn into_params(self) -> Params {
        Params::new()
            .with_opt("start_created", self.start_created)
            .with_opt("end_created", self.end_created)
            .with_opt("status", self.status)
            .with_opt("page_no", self.page_no)
            .with_opt("page_size", self.page_size)
    }
}

impl Youzan {
    /// Orders created between `start_at` and `end_at`
    /// (`YYYY-MM-DD HH:MM:SS`). A missing bound defaults to the start of
    /// yesterday and the start of today respectively.
    pub async fn get_orders(&self, start_at: Option<&str>, end_at: Option<&str>) -> Result<Value> {
        let (default_start, default_end) = default_created_range();
        let params = Params::new()
            .with("start_created", start_at.filter(|s| !s.is_empty()).unwrap_or(default_start.as_str()))
            .with("end_created", end_at.filter(|s| !s.is_empty()).unwrap_or(default_end.as_str()));
        self.call(TRADES_SOLD.0, TRADES_SOLD.1, params).await
    }

    pub async fn search_orders(&self, query: OrderQuery) -> Result<Value> {
        self.call(TRADES_SOLD.0, TRADES_SOLD.1, query.into_params()).await
    }

    pub async fn get_order(&self, tid: &str) -> Result<Value> {
        let params = Params::new().with("tid", tid);
        self.call(TRADE_GET.0, TRADE_GET.1, params).await
    }
}
