use serde_json::Value;

use crate::client::Params;
use crate::error::Result;
use crate::facade::Youzan;

const UNFINISHED_ACTIVITIES: (&str, &str) = ("youzan.ump.coupons.unfinished.search", "3.0.0");
const CODE_STOCK: (&str, &str) = ("youzan.ump.codestock.query", "3.0.0");
const COUPON_TAKE: (&str, &str) = ("youzan.ump.coupon.take", "3.0.0");
const VOUCHER_QUERY: (&str, &str) = ("youzan.ump.voucher.query", "3.0.0");

impl Youzan {
    /// Coupon activities that have not ended yet
    pub async fn get_coupon_activities(&self) -> Result<Value> {
        let params = Params::new().with("fields", "");
        self.call(UNFINISHED_ACTIVITIES.0, UNFINISHED_ACTIVITIES.1, params).await
    }

    /// Coupons and codes issued under an activity. The configured app source
    /// is sent along.
    pub async fn get_coupon_codes(&self, activity_id: &str, page: u32, page_size: u32) -> Result<Value> {
        let params = Params::new()
            .with("app_source", self.app_source.as_str())
            .with("activity_id", activity_id)
            .with("page_num", page)
            .with("page_size", page_size);
        self.call(CODE_STOCK.0, CODE_STOCK.1, params).await
    }

    pub async fn take_coupon(&self, coupon_group_id: u64, yz_open_id: &str) -> Result<Value> {
        let params = Params::new()
            .with("coupon_group_id", coupon_group_id)
            .with("yz_open_id", yz_open_id);
        self.call(COUPON_TAKE.0, COUPON_TAKE.1, params).await
    }

    pub async fn get_user_coupons(
        &self,
        yz_open_id: &str,
        status: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Value> {
        let params = Params::new()
            .with("yz_open_id", yz_open_id)
            .with("page_no", page)
            .with("page_size", page_size)
            .with_opt("status", status);
        self.call(VOUCHER_QUERY.0, VOUCHER_QUERY.1, params).await
    }
}
