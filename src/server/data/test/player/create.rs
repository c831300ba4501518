use super::*;

/// Tests inserting a player row.
///
/// Verifies that the repository stores every field including coordinates and
/// the owner reference. The repository does not touch the owned-set.
///
/// Expected: Ok with player created and no owned-set row
#[tokio::test]
async fn creates_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let academy = factory::create_academy(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(
            academy.id,
            CreatePlayerParam {
                title: "Striker".to_string(),
                description: "Fast and clinical".to_string(),
                address: "1 Stadium Road".to_string(),
                location: Coordinates {
                    lat: 45.188529,
                    lng: 5.724524,
                },
                image: "images/striker.png".to_string(),
            },
        )
        .await?;

    assert_eq!(player.academy_id, academy.id);
    assert_eq!(player.title, "Striker");
    assert_eq!(player.location.lat, 45.188529);
    assert_eq!(player.location.lng, 5.724524);

    let memberships = entity::prelude::AcademyPlayer::find().all(db).await?;
    assert!(memberships.is_empty());

    Ok(())
}

/// Tests that a player cannot reference a missing academy.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_academy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerRepository::new(db)
        .create(
            999999,
            CreatePlayerParam {
                title: "Orphan".to_string(),
                description: "No academy".to_string(),
                address: "Nowhere".to_string(),
                location: Coordinates { lat: 0.0, lng: 0.0 },
                image: "images/orphan.png".to_string(),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
