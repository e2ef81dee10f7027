use super::*;

/// Tests finding an existing booking.
///
/// Expected: Ok(Some) with matching booking
#[tokio::test]
async fn finds_existing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, room) = create_booking_dependencies(db).await?;
    let created = factory::create_booking(db, user.id, Some(room.id)).await?;

    let booking = BookingRepository::new(db)
        .find_by_id(created.id)
        .await
        .unwrap()
        .expect("booking should exist");

    assert_eq!(booking.id, created.id);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.status, BookingStatus::Active);

    Ok(())
}

/// Tests finding a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = BookingRepository::new(db).find_by_id(42).await.unwrap();

    assert!(booking.is_none());

    Ok(())
}

/// Tests that deleting the room keeps the booking and clears its room.
///
/// Expected: Ok(Some) with room_id None
#[tokio::test]
async fn keeps_booking_when_room_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, room) = create_booking_dependencies(db).await?;
    let created = factory::create_booking(db, user.id, Some(room.id)).await?;

    entity::prelude::Room::delete_by_id(room.id).exec(db).await?;

    let booking = BookingRepository::new(db)
        .find_by_id(created.id)
        .await
        .unwrap()
        .expect("booking should survive room deletion");

    assert!(booking.room_id.is_none());

    Ok(())
}
