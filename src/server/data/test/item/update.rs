use super::*;

/// Tests replacing a book's attributes.
///
/// Expected: Ok(Some(item)) with every field replaced
#[tokio::test]
async fn updates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::item::create_book(db).await?;

    let repo = ItemRepository::new(db);
    let updated = repo
        .update(UpdateItemParam {
            id: book.id,
            name: "JPA 2nd".to_string(),
            price: 12000,
            stock_quantity: 4,
            kind: ItemKind::Book {
                author: "lee".to_string(),
                isbn: "5678".to_string(),
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "JPA 2nd");
    assert_eq!(updated.price, 12000);
    assert_eq!(updated.stock_quantity, 4);
    assert_eq!(
        updated.kind,
        ItemKind::Book {
            author: "lee".to_string(),
            isbn: "5678".to_string(),
        }
    );

    Ok(())
}

/// Tests updating an item that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let result = repo
        .update(UpdateItemParam {
            id: 999,
            name: "Ghost".to_string(),
            price: 1,
            stock_quantity: 1,
            kind: ItemKind::Book {
                author: String::new(),
                isbn: String::new(),
            },
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
