use super::*;

/// Tests loading an order with its delivery and order items.
///
/// Expected: Ok(Some(order)) matching the stored rows
#[tokio::test]
async fn loads_order_graph() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let item = factory::item::create_book(db).await?;
    let (order, delivery, order_item) = factory::order::OrderFactory::new(db, member.id, item.id)
        .count(3)
        .delivery_status(DeliveryStatus::Comp)
        .build_with_children()
        .await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_by_id(order.id).await?.unwrap();

    assert_eq!(found.id, order.id);
    assert_eq!(found.delivery.id, delivery.id);
    assert_eq!(found.delivery.status, DeliveryStatus::Comp);
    assert_eq!(found.order_items.len(), 1);
    assert_eq!(found.order_items[0].id, order_item.id);
    assert_eq!(found.total_price(), 30000);

    Ok(())
}

/// Tests loading an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
