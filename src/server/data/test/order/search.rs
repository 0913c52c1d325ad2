use super::*;

/// Tests searching without criteria.
///
/// Expected: Ok with every order, newest first, with member and item names
#[tokio::test]
async fn returns_all_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("kim")
        .build()
        .await?;
    let item = factory::item::ItemFactory::new(db)
        .name("JPA")
        .build()
        .await?;
    let older = factory::order::create_order(db, member.id, item.id).await?;
    let newer = factory::order::OrderFactory::new(db, member.id, item.id)
        .count(2)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let listings = repo.search(&OrderSearch::default()).await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.order.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(listings[0].member_name, "kim");
    assert_eq!(listings[0].lines.len(), 1);
    assert_eq!(listings[0].lines[0].item_name, "JPA");
    assert_eq!(listings[0].lines[0].count, 2);

    Ok(())
}

/// Tests filtering by a substring of the member's name.
///
/// Expected: Ok with only orders of members whose name contains the text
#[tokio::test]
async fn filters_by_member_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kim = factory::member::MemberFactory::new(db)
        .name("kimyoung")
        .build()
        .await?;
    let lee = factory::member::MemberFactory::new(db)
        .name("lee")
        .build()
        .await?;
    let item = factory::item::create_book(db).await?;
    let kim_order = factory::order::create_order(db, kim.id, item.id).await?;
    factory::order::create_order(db, lee.id, item.id).await?;

    let repo = OrderRepository::new(db);
    let listings = repo
        .search(&OrderSearch {
            member_name: Some("young".to_string()),
            order_status: None,
        })
        .await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].order.id, kim_order.id);
    assert_eq!(listings[0].member_name, "kimyoung");

    Ok(())
}

/// Tests filtering by status combined with member name.
///
/// Expected: Ok with only orders matching both criteria
#[tokio::test]
async fn filters_by_status_and_name() -> Result<(), DbErr> {
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
    factory::order::create_order(db, kim.id, item.id).await?;
    let cancelled = factory::order::OrderFactory::new(db, kim.id, item.id)
        .status(OrderStatus::Cancel)
        .order_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, lee.id, item.id)
        .status(OrderStatus::Cancel)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let listings = repo
        .search(&OrderSearch {
            member_name: Some("kim".to_string()),
            order_status: Some(OrderStatus::Cancel),
        })
        .await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].order.id, cancelled.id);
    assert_eq!(listings[0].order.status, OrderStatus::Cancel);

    Ok(())
}

/// Tests a search nothing matches.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let listings = repo
        .search(&OrderSearch {
            member_name: None,
            order_status: Some(OrderStatus::Cancel),
        })
        .await?;

    assert!(listings.is_empty());

    Ok(())
}

/// Tests that the member name filter ignores ASCII case.
///
/// Expected: Ok with the order of "Kim" when searching for "kim"
#[tokio::test]
async fn member_name_filter_ignores_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kim = factory::member::MemberFactory::new(db)
        .name("Kim")
        .build()
        .await?;
    let item = factory::item::create_book(db).await?;
    let order = factory::order::create_order(db, kim.id, item.id).await?;

    let repo = OrderRepository::new(db);
    let listings = repo
        .search(&OrderSearch {
            member_name: Some("kim".to_string()),
            order_status: None,
        })
        .await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.order.id).collect();
    assert_eq!(ids, vec![order.id]);

    Ok(())
}
