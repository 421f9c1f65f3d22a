use serde_json::Value;

use crate::client::Params;
use crate::error::Result;
use crate::facade::Youzan;

const CUSTOMER_SEARCH: (&str, &str) = ("youzan.scrm.customer.search", "3.1.2");
const CUSTOMER_DETAIL: (&str, &str) = ("youzan.scrm.customer.detail.get", "1.0.1");
const USER_OPENID: (&str, &str) = ("youzan.user.openid.get", "1.0.0");
const WEIXIN_OPENID: (&str, &str) = ("youzan.user.weixin.openid.get", "3.0.0");
const USER_INFO: (&str, &str) = ("youzan.users.info.query", "1.0.0");

impl Youzan {
    /// Store customers, optionally only those created at or after
    /// `created_at_start` (epoch seconds).
    pub async fn get_users(&self, created_at_start: Option<i64>, page: u32, page_size: u32) -> Result<Value> {
        let params = Params::new()
            .with("page", page)
            .with("page_size", page_size)
            .with_opt("created_at_start", created_at_start);
        self.call(CUSTOMER_SEARCH.0, CUSTOMER_SEARCH.1, params).await
    }

    pub async fn get_customer_detail(&self, yz_open_id: &str) -> Result<Value> {
        let params = Params::new().with("yz_open_id", yz_open_id);
        self.call(CUSTOMER_DETAIL.0, CUSTOMER_DETAIL.1, params).await
    }

    /// Youzan open id of a platform user id
    pub async fn get_user_openid(&self, user_id: u64) -> Result<Value> {
        let params = Params::new().with("user_id", user_id);
        self.call(USER_OPENID.0, USER_OPENID.1, params).await
    }

    /// WeChat openid and unionid behind a Youzan open id
    pub async fn get_weixin_openid(&self, yz_open_id: &str) -> Result<Value> {
        let params = Params::new().with("yz_open_id", yz_open_id);
        self.call(WEIXIN_OPENID.0, WEIXIN_OPENID.1, params).await
    }

    /// Basic profile of a Youzan open id, via `youzan.users.info.query`.
    ///
    /// Earlier releases sent this through `youzan.user.weixin.openid.get`,
    /// the same call as [`Youzan::get_weixin_openid`]; callers relying on
    /// that payload should use `get_weixin_openid` instead.
    pub async fn get_user_info(&self, yz_open_id: &str) -> Result<Value> {
        let params = Params::new().with("yz_open_id", yz_open_id);
        self.call(USER_INFO.0, USER_INFO.1, params).await
    }
}
