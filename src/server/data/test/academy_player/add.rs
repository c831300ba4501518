use super::*;

/// Tests adding a player to an academy's owned-set.
///
/// Expected: Ok with the player ID listed for the academy
#[tokio::test]
async fn adds_player_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_academy(db).await?;
    let second = factory::create_academy(db).await?;
    // Factory players are owned by `first`; use one as a bare row for `second`.
    let player = factory::create_player(db, first.id).await?;

    let repo = AcademyPlayerRepository::new(db);
    repo.add(second.id, player.id).await?;

    assert_eq!(repo.player_ids_by_academy(second.id).await?, vec![player.id]);

    Ok(())
}

/// Tests that the owned-set holds each player at most once.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (academy, player) = factory::helpers::create_player_with_academy(db).await?;

    let result = AcademyPlayerRepository::new(db)
        .add(academy.id, player.id)
        .await;

    assert!(result.is_err());

    Ok(())
}
