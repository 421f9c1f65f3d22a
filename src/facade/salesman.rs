use serde_json::Value;

use crate::client::Params;
use crate::error::Result;
use crate::facade::Youzan;

const ACCOUNTS_GET: (&str, &str) = ("youzan.salesman.accounts.get", "3.0.0");
const ACCOUNT_GET: (&str, &str) = ("youzan.salesman.account.get", "3.0.0");
const ACCOUNT_ADD: (&str, &str) = ("youzan.salesman.account.add", "3.0.1");
const TRADES_GET: (&str, &str) = ("youzan.salesman.trades.get", "3.0.0");

impl Youzan {
    pub async fn get_salesmen(&self, page: u32, page_size: u32) -> Result<Value> {
        let params = Params::new().with("page_no", page).with("page_size", page_size);
        self.call(ACCOUNTS_GET.0, ACCOUNTS_GET.1, params).await
    }

    /// Look a salesman up by mobile number or by Youzan open id.
    pub async fn get_salesman(&self, mobile: Option<&str>, yz_open_id: Option<&str>) -> Result<Value> {
        let params = Params::new()
            .with_opt("mobile", mobile)
            .with_opt("yz_open_id", yz_open_id);
        self.call(ACCOUNT_GET.0, ACCOUNT_GET.1, params).await
    }

    /// Register a salesman, optionally under the salesman owning `from_mobile`.
    pub async fn add_salesman(&self, mobile: &str, from_mobile: Option<&str>) -> Result<Value> {
        let params = Params::new()
            .with("mobile", mobile)
            .with_opt("from_mobile", from_mobile);
        self.call(ACCOUNT_ADD.0, ACCOUNT_ADD.1, params).await
    }

    pub async fn get_salesman_trades(
        &self,
        mobile: &str,
        start_created: Option<&str>,
        end_created: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Value> {
        let params = Params::new()
            .with("mobile", mobile)
            .with("page_no", page)
            .with("page_size", page_size)
            .with_opt("start_created", start_created)
            .with_opt("end_created", end_created);
        self.call(TRADES_GET.0, TRADES_GET.1, params).await
    }
}
