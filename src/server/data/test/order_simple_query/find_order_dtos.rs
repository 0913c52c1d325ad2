use super::*;

/// Tests projecting summaries with the joined query.
///
/// Expected: Ok with one summary per order carrying member name and delivery address
#[tokio::test]
async fn projects_order_summaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

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
    let first = factory::order::create_order(db, kim.id, item.id).await?;
    let second = factory::order::OrderFactory::new(db, lee.id, item.id)
        .status(OrderStatus::Cancel)
        .build()
        .await?;

    let repo = OrderSimpleQueryRepository::new(db);
    let dtos = repo.find_order_dtos().await?;

    assert_eq!(dtos.len(), 2);
    assert_eq!(dtos[0].order_id, first.id);
    assert_eq!(dtos[0].name, "kim");
    assert_eq!(dtos[0].order_status, OrderStatusDto::Order);
    assert_eq!(
        dtos[0].address,
        Some(AddressDto {
            city: "Seoul".to_string(),
            street: "Teheran-ro".to_string(),
            zipcode: "06234".to_string(),
        })
    );
    assert_eq!(dtos[1].order_id, second.id);
    assert_eq!(dtos[1].order_status, OrderStatusDto::Cancel);
    assert!(dtos[1].address.is_none());

    Ok(())
}

/// Tests that the projection agrees with summaries built from loaded rows.
///
/// Expected: Ok with field-for-field equal summaries
#[tokio::test]
async fn matches_batched_summaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_dependencies(db).await?;
    factory::helpers::create_order_with_dependencies(db).await?;

    let projected = OrderSimpleQueryRepository::new(db).find_order_dtos().await?;
    let loaded: Vec<_> = OrderRepository::new(db)
        .find_all_simple_batched()
        .await?
        .into_iter()
        .map(|summary| summary.into_query_dto())
        .collect();

    assert_eq!(projected, loaded);

    Ok(())
}
