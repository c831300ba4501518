use super::*;

/// Tests finding an academy together with its owned-set.
///
/// Expected: Ok(Some) with both player IDs in the owned-set
#[tokio::test]
async fn returns_academy_with_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let academy = factory::create_academy(db).await?;
    let first = factory::create_player(db, academy.id).await?;
    let second = factory::create_player(db, academy.id).await?;

    let repo = AcademyRepository::new(db);
    let found = repo.find_by_id(academy.id).await?.unwrap();

    assert_eq!(found.id, academy.id);
    assert_eq!(found.players, vec![first.id, second.id]);

    Ok(())
}

/// Tests that the owned-set only contains the academy's own players.
///
/// Expected: Ok(Some) with only the first academy's player
#[tokio::test]
async fn excludes_other_academies_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (academy, player) = factory::helpers::create_player_with_academy(db).await?;
    let _other = factory::helpers::create_player_with_academy(db).await?;

    let found = AcademyRepository::new(db)
        .find_by_id(academy.id)
        .await?
        .unwrap();

    assert_eq!(found.players, vec![player.id]);

    Ok(())
}

/// Tests finding a nonexistent academy.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_academy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = AcademyRepository::new(db).find_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the existence check.
///
/// Expected: true for a stored academy, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let academy = factory::create_academy(db).await?;

    let repo = AcademyRepository::new(db);
    assert!(repo.exists(academy.id).await?);
    assert!(!repo.exists(999999).await?);

    Ok(())
}
