use super::*;

/// Tests the order then cancel scenario.
///
/// Orders 2 of 10, cancels, and checks the stock is fully restored.
///
/// Expected: status CANCEL and stock back to 10
#[tokio::test]
async fn cancel_restores_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, item) = member_and_book(db, 10).await?;

    let service = OrderService::new(db);
    let order_id = service
        .order(PlaceOrderParam {
            member_id: member.id,
            item_id: item.id,
            count: 2,
        })
        .await?;
    assert_eq!(stock_of(db, item.id).await?, 8);

    service.cancel_order(order_id).await?;

    let order = service.find_one(order_id).await?.unwrap();
    assert_eq!(order.status, OrderStatus::Cancel);
    assert_eq!(stock_of(db, item.id).await?, 10);

    Ok(())
}

/// Tests cancelling the same order twice.
///
/// Expected: Err(AlreadyCancelled) and stock not restored a second time
#[tokio::test]
async fn rejects_second_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, item) = member_and_book(db, 10).await?;

    let service = OrderService::new(db);
    let order_id = service
        .order(PlaceOrderParam {
            member_id: member.id,
            item_id: item.id,
            count: 3,
        })
        .await?;
    service.cancel_order(order_id).await?;

    let result = service.cancel_order(order_id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AlreadyCancelled(id))) if id == order_id
    ));
    assert_eq!(stock_of(db, item.id).await?, 10);

    Ok(())
}

/// Tests cancelling an order whose delivery is complete.
///
/// Expected: Err(AlreadyShipped), status still ORDER, stock untouched
#[tokio::test]
async fn rejects_cancel_after_delivery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, item) = member_and_book(db, 8).await?;

    let order = factory::order::OrderFactory::new(db, member.id, item.id)
        .count(2)
        .delivery_status(DeliveryStatus::Comp)
        .build()
        .await?;

    let service = OrderService::new(db);
    let result = service.cancel_order(order.id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AlreadyShipped(_)))
    ));
    assert_eq!(
        service.find_one(order.id).await?.unwrap().status,
        OrderStatus::Order
    );
    assert_eq!(stock_of(db, item.id).await?, 8);

    Ok(())
}

/// Tests cancelling an order that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db).cancel_order(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests cancelling after the item's stock was raised to the largest storable value.
///
/// Orders 5 of 10, restocks the item to `i32::MAX`, then cancels.
///
/// Expected: Err(StockOverflow), status still ORDER, stock left at `i32::MAX`
#[tokio::test]
async fn rejects_cancel_that_would_overflow_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, item) = member_and_book(db, 10).await?;

    let service = OrderService::new(db);
    let order_id = service
        .order(PlaceOrderParam {
            member_id: member.id,
            item_id: item.id,
            count: 5,
        })
        .await?;

    let item_service = ItemService::new(db);
    let stored = item_service.find_one(item.id).await?.unwrap();
    item_service
        .update_item(UpdateItemParam {
            id: stored.id,
            name: stored.name,
            price: stored.price,
            stock_quantity: i32::MAX,
            kind: stored.kind,
        })
        .await?;

    let result = service.cancel_order(order_id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::StockOverflow { returned: 5, .. }))
    ));
    assert_eq!(
        service.find_one(order_id).await?.unwrap().status,
        OrderStatus::Order
    );
    assert_eq!(stock_of(db, item.id).await?, i32::MAX);

    Ok(())
}
