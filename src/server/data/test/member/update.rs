use super::*;

/// Tests renaming a member.
///
/// Verifies the name changes and the address is kept.
///
/// Expected: Ok(Some(member)) with the new name
#[tokio::test]
async fn renames_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("kim")
        .address("Seoul", "Teheran-ro", "06234")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update(UpdateMemberParam {
            id: member.id,
            name: "park".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "park");
    assert_eq!(
        updated.address,
        Some(Address::new("Seoul", "Teheran-ro", "06234"))
    );

    let stored = repo.find_by_id(member.id).await?.unwrap();
    assert_eq!(stored.name, "park");

    Ok(())
}

/// Tests renaming a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo
        .update(UpdateMemberParam {
            id: 999,
            name: "park".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
