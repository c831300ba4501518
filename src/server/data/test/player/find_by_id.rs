use super::*;

/// Tests getting a player by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (academy, player) = factory::helpers::create_player_with_academy(db).await?;

    let found = PlayerRepository::new(db)
        .find_by_id(player.id)
        .await?
        .unwrap();

    assert_eq!(found.id, player.id);
    assert_eq!(found.academy_id, academy.id);
    assert_eq!(found.title, player.title);
    assert_eq!(found.image, player.image);

    Ok(())
}

/// Tests getting a nonexistent player.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlayerRepository::new(db).find_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}
