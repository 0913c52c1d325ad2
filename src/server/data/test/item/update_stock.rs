use super::*;

/// Tests writing a stock change made in memory.
///
/// Expected: Ok with only the stock column changed
#[tokio::test]
async fn writes_adjusted_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::item::ItemFactory::new(db)
        .name("JPA")
        .stock_quantity(10)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let mut item = repo.find_by_id(book.id).await?.unwrap();
    item.remove_stock(3).unwrap();
    repo.update_stock(&item).await?;

    let stored = repo.find_by_id(book.id).await?.unwrap();
    assert_eq!(stored.stock_quantity, 7);
    assert_eq!(stored.name, "JPA");

    Ok(())
}
