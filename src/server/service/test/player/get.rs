use super::*;

/// Tests getting a player by ID.
///
/// Expected: Ok with the stored player
#[tokio::test]
async fn gets_player_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (academy, player) = factory::helpers::create_player_with_academy(db).await?;

    let found = PlayerService::new(db).get_by_id(player.id).await?;

    assert_eq!(found.id, player.id);
    assert_eq!(found.academy_id, academy.id);

    Ok(())
}

/// Tests getting a player that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn get_by_id_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerService::new(db).get_by_id(999999).await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::NotFound(999999)))
    ));

    Ok(())
}

/// Tests listing the players of an academy.
///
/// Expected: Ok with the academy's players only
#[tokio::test]
async fn gets_players_by_academy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (academy, first) = factory::helpers::create_player_with_academy(db).await?;
    let second = factory::create_player(db, academy.id).await?;
    let _other = factory::helpers::create_player_with_academy(db).await?;

    let players = PlayerService::new(db).get_by_academy(academy.id).await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing players for an academy without players or an unknown academy.
///
/// Expected: Err(NotFound) in both cases
#[tokio::test]
async fn get_by_academy_not_found_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let academy = factory::create_academy(db).await?;
    let service = PlayerService::new(db);

    assert!(matches!(
        service.get_by_academy(academy.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_by_academy(999999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
