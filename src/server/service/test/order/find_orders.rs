use super::*;

/// Tests searching orders by member name and status through the service.
///
/// Expected: each criterion narrows the result; both together are conjunctive
#[tokio::test]
async fn filters_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kim = factory::member::MemberFactory::new(db)
        .name("kim")
        .build()
        .await?;
    let lee = factory::member::MemberFactory::new(db)
        .name("lee")
        .build()
        .await?;
    let item = factory::item::create_book(db).await?;

    let service = OrderService::new(db);
    let kim_order = service
        .order(PlaceOrderParam {
            member_id: kim.id,
            item_id: item.id,
            count: 1,
        })
        .await?;
    let lee_order = service
        .order(PlaceOrderParam {
            member_id: lee.id,
            item_id: item.id,
            count: 1,
        })
        .await?;
    service.cancel_order(lee_order).await?;

    let all = service.find_orders(&OrderSearch::default()).await?;
    let ids: Vec<i32> = all.iter().map(|l| l.order.id).collect();
    assert_eq!(ids, vec![lee_order, kim_order]);

    let by_name = service
        .find_orders(&OrderSearch {
            member_name: Some("ki".to_string()),
            order_status: None,
        })
        .await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].order.id, kim_order);

    let cancelled = service
        .find_orders(&OrderSearch {
            member_name: None,
            order_status: Some(OrderStatus::Cancel),
        })
        .await?;
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].order.id, lee_order);

    let none = service
        .find_orders(&OrderSearch {
            member_name: Some("kim".to_string()),
            order_status: Some(OrderStatus::Cancel),
        })
        .await?;
    assert!(none.is_empty());

    Ok(())
}
