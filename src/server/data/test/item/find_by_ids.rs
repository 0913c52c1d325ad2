use super::*;

/// Tests fetching several items at once.
///
/// Expected: Ok with only the requested items, unknown ids skipped
#[tokio::test]
async fn returns_requested_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::item::create_book(db).await?;
    factory::item::create_book(db).await?;
    let third = factory::item::create_book(db).await?;

    let repo = ItemRepository::new(db);
    let items = repo.find_by_ids(vec![third.id, first.id, 999]).await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests fetching with no ids.
///
/// Expected: Ok(vec![]) without querying
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::item::create_book(db).await?;

    let repo = ItemRepository::new(db);
    let items = repo.find_by_ids(Vec::new()).await?;

    assert!(items.is_empty());

    Ok(())
}
