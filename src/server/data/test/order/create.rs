use super::*;

/// Tests persisting a new order with its delivery and order item.
///
/// Expected: Ok with one row in each table and the address copied to the delivery
#[tokio::test]
async fn creates_order_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = Member::from_entity(
        factory::member::MemberFactory::new(db)
            .address("Seoul", "Teheran-ro", "06234")
            .build()
            .await?,
    );
    let mut item = Item::from_entity(factory::item::create_book(db).await?);
    let price = item.price;
    let order_item = NewOrderItem::create(&mut item, price, 2).unwrap();
    let new_order = NewOrder::create(
        &member,
        NewDelivery::ready(member.address.clone()),
        vec![order_item],
    );

    let repo = OrderRepository::new(db);
    let order = repo.create(new_order).await?;

    assert_eq!(order.member_id, member.id);
    assert_eq!(order.status, OrderStatus::Order);
    assert_eq!(order.delivery.status, DeliveryStatus::Ready);
    assert_eq!(
        order.delivery.address,
        Some(Address::new("Seoul", "Teheran-ro", "06234"))
    );
    assert_eq!(order.order_items.len(), 1);
    assert_eq!(order.order_items[0].count, 2);
    assert_eq!(order.total_price(), 20000);

    assert_eq!(entity::prelude::Order::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Delivery::find().count(db).await?, 1);
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 1);

    Ok(())
}
