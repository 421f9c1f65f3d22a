use serde_json::Value;

use crate::client::Params;
use crate::error::Result;
use crate::facade::Youzan;

const TAG_LIST: (&str, &str) = ("youzan.scrm.tag.list", "4.0.0");
const TAG_CREATE: (&str, &str) = ("youzan.scrm.tag.create", "4.0.0");
const TAG_RELATION_ADD: (&str, &str) = ("youzan.scrm.tag.relation.add", "4.0.0");
const TAG_RELATION_DELETE: (&str, &str) = ("youzan.scrm.tag.relation.delete", "4.0.0");

const ACCOUNT_TYPE: &str = "YouZanAccount";

impl Youzan {
    pub async fn get_tags(&self, page: u32, page_size: u32) -> Result<Value> {
        let params = Params::new().with("page_no", page).with("page_size", page_size);
        self.call(TAG_LIST.0, TAG_LIST.1, params).await
    }

    pub async fn create_tag(&self, name: &str) -> Result<Value> {
        let params = Params::new().with("name", name);
        self.call(TAG_CREATE.0, TAG_CREATE.1, params).await
    }

    /// Attach tags to the customer identified by `account_id`.
    ///
    /// The account id is always the caller's; it is never replaced by a
    /// fixed account.
    pub async fn set_customer_tags(&self, account_id: &str, tag_ids: &[u64]) -> Result<Value> {
        self.call(TAG_RELATION_ADD.0, TAG_RELATION_ADD.1, tag_relation(account_id, tag_ids))
            .await
    }

    pub async fn remove_customer_tags(&self, account_id: &str, tag_ids: &[u64]) -> Result<Value> {
        self.call(TAG_RELATION_DELETE.0, TAG_RELATION_DELETE.1, tag_relation(account_id, tag_ids))
            .await
    }
}

fn tag_relation(account_id: &str, tag_ids: &[u64]) -> Params {
    Params::new()
        .with("account_type", ACCOUNT_TYPE)
        .with("account_id", account_id)
        .with("tags", tag_ids.to_vec())
}
