use super::*;

/// Tests finding a member by exact name.
///
/// Expected: Ok with the single matching member
#[tokio::test]
async fn finds_member_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kim = factory::member::MemberFactory::new(db)
        .name("kim")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .name("kimchi")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let members = repo.find_by_name("kim").await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, kim.id);

    Ok(())
}

/// Tests finding a name nobody has.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let members = repo.find_by_name("nobody").await?;

    assert!(members.is_empty());

    Ok(())
}
