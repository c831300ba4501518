use super::*;

/// Tests removing a player from an academy's owned-set.
///
/// Expected: Ok(1) and the owned-set is empty
#[tokio::test]
async fn removes_player_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (academy, player) = factory::helpers::create_player_with_academy(db).await?;

    let repo = AcademyPlayerRepository::new(db);
    let removed = repo.remove(academy.id, player.id).await?;

    assert_eq!(removed, 1);
    assert!(repo.player_ids_by_academy(academy.id).await?.is_empty());

    Ok(())
}

/// Tests that removal is scoped to the given academy.
///
/// Expected: Ok(0) and the real owner's owned-set is unchanged
#[tokio::test]
async fn ignores_other_academy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, player) = factory::helpers::create_player_with_academy(db).await?;
    let other = factory::create_academy(db).await?;

    let repo = AcademyPlayerRepository::new(db);
    let removed = repo.remove(other.id, player.id).await?;

    assert_eq!(removed, 0);
    assert_eq!(repo.player_ids_by_academy(owner.id).await?, vec![player.id]);

    Ok(())
}
