#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use crate::client::ApiRequest;
    use crate::facade::OrderQuery;
    use crate::tests::common::youzan_with_doubles;

    fn assert_request(request: &ApiRequest, method: &str, version: &str, params: Value) {
        assert_eq!(request.method, method);
        assert_eq!(request.version, version);
        assert_eq!(serde_json::to_value(&request.params).unwrap(), params);
    }

    #[tokio::test]
    async fn get_users_omits_unset_created_at_start() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_users(None, 1, 50).await.unwrap();

        let request = client.last_request();
        assert!(!request.params.contains_key("created_at_start"));
        assert_request(&request, "youzan.scrm.customer.search", "3.1.2", json!({"page": 1, "page_size": 50}));
    }

    #[tokio::test]
    async fn get_users_includes_created_at_start_when_given() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_users(Some(1714521600), 2, 10).await.unwrap();

        assert_request(
            &client.last_request(),
            "youzan.scrm.customer.search",
            "3.1.2",
            json!({"page": 2, "page_size": 10, "created_at_start": 1714521600}),
        );
    }

    #[tokio::test]
    async fn customer_lookups() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_user_openid(42).await.unwrap();
        assert_request(&client.last_request(), "youzan.user.openid.get", "1.0.0", json!({"user_id": 42}));

        youzan.get_weixin_openid("yz-1").await.unwrap();
        assert_request(&client.last_request(), "youzan.user.weixin.openid.get", "3.0.0", json!({"yz_open_id": "yz-1"}));

        youzan.get_user_info("yz-1").await.unwrap();
        assert_request(&client.last_request(), "youzan.users.info.query", "1.0.0", json!({"yz_open_id": "yz-1"}));

        youzan.get_customer_detail("yz-1").await.unwrap();
        assert_request(&client.last_request(), "youzan.scrm.customer.detail.get", "1.0.1", json!({"yz_open_id": "yz-1"}));
    }

    #[tokio::test]
    async fn coupon_operations() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_coupon_activities().await.unwrap();
        assert_request(&client.last_request(), "youzan.ump.coupons.unfinished.search", "3.0.0", json!({"fields": ""}));

        youzan.get_coupon_codes("act-9", 1, 200).await.unwrap();
        assert_request(
            &client.last_request(),
            "youzan.ump.codestock.query",
            "3.0.0",
            json!({"app_source": "COMMUNITY", "activity_id": "act-9", "page_num": 1, "page_size": 200}),
        );

        youzan.take_coupon(7, "yz-1").await.unwrap();
        assert_request(&client.last_request(), "youzan.ump.coupon.take", "3.0.0", json!({"coupon_group_id": 7, "yz_open_id": "yz-1"}));

        youzan.get_user_coupons("yz-1", None, 1, 20).await.unwrap();
        assert_request(
            &client.last_request(),
            "youzan.ump.voucher.query",
            "3.0.0",
            json!({"yz_open_id": "yz-1", "page_no": 1, "page_size": 20}),
        );

        youzan.get_user_coupons("yz-1", Some("VALID"), 1, 20).await.unwrap();
        assert_eq!(client.last_request().params.get("status"), Some(&json!("VALID")));
    }

    #[tokio::test]
    async fn coupon_codes_send_configured_app_source() {
        let (youzan, _, client) = youzan_with_doubles();
        let youzan = youzan.with_app_source("MINI_PROGRAM");

        youzan.get_coupon_codes("act-9", 3, 100).await.unwrap();

        assert_eq!(client.last_request().params.get("app_source"), Some(&json!("MINI_PROGRAM")));
    }

    #[tokio::test]
    async fn order_operations() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_order("E2024").await.unwrap();
        assert_request(&client.last_request(), "youzan.trade.get", "4.0.0", json!({"tid": "E2024"}));

        youzan
            .search_orders(OrderQuery {
                status: Some("TRADE_SUCCESS".to_owned()),
                page_no: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_request(
            &client.last_request(),
            "youzan.trades.sold.get",
            "4.0.1",
            json!({"status": "TRADE_SUCCESS", "page_no": 2}),
        );
    }

    #[tokio::test]
    async fn salesman_operations() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_salesmen(1, 20).await.unwrap();
        assert_request(&client.last_request(), "youzan.salesman.accounts.get", "3.0.0", json!({"page_no": 1, "page_size": 20}));

        youzan.get_salesman(Some("13800000000"), None).await.unwrap();
        assert_request(&client.last_request(), "youzan.salesman.account.get", "3.0.0", json!({"mobile": "13800000000"}));

        youzan.add_salesman("13800000000", Some("13900000000")).await.unwrap();
        assert_request(
            &client.last_request(),
            "youzan.salesman.account.add",
            "3.0.1",
            json!({"mobile": "13800000000", "from_mobile": "13900000000"}),
        );

        youzan
            .get_salesman_trades("13800000000", Some("2024-05-01 00:00:00"), None, 1, 20)
            .await
            .unwrap();
        assert_request(
            &client.last_request(),
            "youzan.salesman.trades.get",
            "3.0.0",
            json!({"mobile": "13800000000", "page_no": 1, "page_size": 20, "start_created": "2024-05-01 00:00:00"}),
        );
    }

    #[tokio::test]
    async fn tag_operations() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.get_tags(1, 50).await.unwrap();
        assert_request(&client.last_request(), "youzan.scrm.tag.list", "4.0.0", json!({"page_no": 1, "page_size": 50}));

        youzan.create_tag("vip").await.unwrap();
        assert_request(&client.last_request(), "youzan.scrm.tag.create", "4.0.0", json!({"name": "vip"}));

        youzan.remove_customer_tags("yz-1", &[3]).await.unwrap();
        assert_request(
            &client.last_request(),
            "youzan.scrm.tag.relation.delete",
            "4.0.0",
            json!({"account_type": "YouZanAccount", "account_id": "yz-1", "tags": [3]}),
        );
    }

    #[tokio::test]
    async fn set_customer_tags_uses_callers_account_id() {
        let (youzan, _, client) = youzan_with_doubles();

        youzan.set_customer_tags("yz-caller", &[1, 2]).await.unwrap();

        assert_request(
            &client.last_request(),
            "youzan.scrm.tag.relation.add",
            "4.0.0",
            json!({"account_type": "YouZanAccount", "account_id": "yz-caller", "tags": [1, 2]}),
        );
    }

    #[tokio::test]
    async fn calls_reuse_one_token_and_return_response_verbatim() {
        let (youzan, service, client) = youzan_with_doubles();

        let first = youzan.get_coupon_activities().await.unwrap();
        youzan.get_tags(1, 50).await.unwrap();

        assert_eq!(first, json!({"success": true, "data": {}}));
        assert_eq!(service.calls(), 1);
        assert!(client.calls().iter().all(|(token, _)| token == "tok123"));
    }
}
