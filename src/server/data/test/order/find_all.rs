use super::*;

/// Creates two members with one order each; the second member has no address.
async fn seed_orders(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let kim = factory::member::MemberFactory::new(db)
        .name("kim")
        .address("Seoul", "Teheran-ro", "06234")
        .build()
        .await?;
    let lee = factory::member::MemberFactory::new(db)
        .name("lee")
        .without_address()
        .build()
        .await?;
    let item = factory::item::create_book(db).await?;

    factory::order::create_order(db, kim.id, item.id).await?;
    factory::order::OrderFactory::new(db, lee.id, item.id)
        .status(OrderStatus::Cancel)
        .build()
        .await?;

    Ok(())
}

/// Tests loading every order graph one order at a time.
///
/// Expected: Ok with member, delivery and items attached to each order
#[tokio::test]
async fn loads_graphs_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_orders(db).await?;

    let repo = OrderRepository::new(db);
    let graphs = repo.find_all_graphs().await?;

    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].member.name, "kim");
    assert_eq!(graphs[0].order.order_items.len(), 1);
    assert_eq!(graphs[0].total_price, 10000);
    assert_eq!(graphs[1].member.name, "lee");
    assert_eq!(graphs[1].order.status, OrderStatus::Cancel);

    Ok(())
}

/// Tests that per-row and batched loading produce the same summaries.
///
/// Expected: Ok with identical summaries in order id order
#[tokio::test]
async fn per_row_and_batched_summaries_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_orders(db).await?;

    let repo = OrderRepository::new(db);
    let per_row = repo.find_all_simple_per_row().await?;
    let batched = repo.find_all_simple_batched().await?;

    assert_eq!(per_row, batched);
    assert_eq!(per_row.len(), 2);
    assert_eq!(per_row[0].member_name, "kim");
    assert_eq!(
        per_row[0].address,
        Some(Address::new("Seoul", "Teheran-ro", "06234"))
    );
    assert_eq!(per_row[1].member_name, "lee");
    assert!(per_row[1].address.is_none());

    Ok(())
}

/// Tests the summaries on an empty database.
///
/// Expected: Ok(vec![]) from both loaders
#[tokio::test]
async fn returns_empty_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert!(repo.find_all_simple_per_row().await?.is_empty());
    assert!(repo.find_all_simple_batched().await?.is_empty());
    assert!(repo.find_all_graphs().await?.is_empty());

    Ok(())
}
