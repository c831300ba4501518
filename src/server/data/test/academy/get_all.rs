use super::*;

/// Tests listing all academies with their owned-sets.
///
/// Expected: Ok with academies in ID order, each with only its own players
#[tokio::test]
async fn lists_academies_with_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, player) = factory::helpers::create_player_with_academy(db).await?;
    let second = factory::create_academy(db).await?;

    let academies = AcademyRepository::new(db).get_all().await?;

    assert_eq!(academies.len(), 2);
    assert_eq!(academies[0].id, first.id);
    assert_eq!(academies[0].players, vec![player.id]);
    assert_eq!(academies[1].id, second.id);
    assert!(academies[1].players.is_empty());

    Ok(())
}

/// Tests listing when no academy exists.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let academies = AcademyRepository::new(db).get_all().await?;

    assert!(academies.is_empty());

    Ok(())
}
