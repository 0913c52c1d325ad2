use super::*;

/// Tests creating a member with an address.
///
/// Verifies that the address is split into its columns and read back whole.
///
/// Expected: Ok with member retrievable by id
#[tokio::test]
async fn creates_member_with_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParam {
            name: "kim".to_string(),
            address: Some(Address::new("Seoul", "Teheran-ro", "06234")),
        })
        .await?;

    let found = repo.find_by_id(member.id).await?;

    assert_eq!(found, Some(member.clone()));
    assert_eq!(member.name, "kim");
    assert_eq!(
        member.address,
        Some(Address::new("Seoul", "Teheran-ro", "06234"))
    );

    Ok(())
}

/// Tests creating a member without an address.
///
/// Expected: Ok with all address columns null
#[tokio::test]
async fn creates_member_without_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParam {
            name: "lee".to_string(),
            address: None,
        })
        .await?;

    assert!(member.address.is_none());

    Ok(())
}

/// Tests that the unique index rejects a second member with the same name.
///
/// Expected: Err(DbErr) reported as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .name("kim")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .create(CreateMemberParam {
            name: "kim".to_string(),
            address: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
