use super::*;

/// Tests deleting a player row.
///
/// Expected: Ok(1) and the player is gone
#[tokio::test]
async fn deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_academy, player) = factory::helpers::create_player_with_academy(db).await?;

    let deleted = PlayerRepository::new(db).delete(player.id).await?;

    assert_eq!(deleted, 1);
    let check = entity::prelude::Player::find_by_id(player.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a nonexistent player.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_nonexistent_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PlayerRepository::new(db).delete(999999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
