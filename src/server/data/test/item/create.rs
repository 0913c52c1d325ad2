use super::*;

/// Tests creating a book.
///
/// Expected: Ok with the book attributes stored and the `B` discriminator
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParam {
            name: "JPA".to_string(),
            price: 10000,
            stock_quantity: 10,
            kind: ItemKind::Book {
                author: "kim".to_string(),
                isbn: "1234".to_string(),
            },
        })
        .await?;

    assert_eq!(item.name, "JPA");
    assert_eq!(item.price, 10000);
    assert_eq!(item.stock_quantity, 10);

    let stored = entity::prelude::Item::find_by_id(item.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.dtype, entity::sea_orm_active_enums::ItemType::Book);
    assert_eq!(stored.author.as_deref(), Some("kim"));
    assert_eq!(stored.isbn.as_deref(), Some("1234"));
    assert!(stored.artist.is_none());

    Ok(())
}

/// Tests creating a movie.
///
/// Expected: Ok with the movie kind read back
#[tokio::test]
async fn creates_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParam {
            name: "Film".to_string(),
            price: 5000,
            stock_quantity: 3,
            kind: ItemKind::Movie {
                director: "bong".to_string(),
                actor: "song".to_string(),
            },
        })
        .await?;

    let found = repo.find_by_id(item.id).await?.unwrap();

    assert_eq!(
        found.kind,
        ItemKind::Movie {
            director: "bong".to_string(),
            actor: "song".to_string(),
        }
    );

    Ok(())
}
