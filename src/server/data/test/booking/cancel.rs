use super::*;

/// Tests cancelling an active booking.
///
/// Expected: Ok(true) and status cancelled
#[tokio::test]
async fn cancels_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, room) = create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, user.id, Some(room.id)).await?;

    let cancelled = BookingRepository::new(db).cancel(booking.id, Utc::now()).await?;

    assert!(cancelled);
    assert_eq!(stored_status(db, booking.id).await?, "cancelled");

    Ok(())
}

/// Tests that a completed booking cannot be cancelled.
///
/// Expected: Ok(false) and status still completed
#[tokio::test]
async fn leaves_completed_booking_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, _room) = create_booking_dependencies(db).await?;
    let booking = BookingFactory::new(db, user.id)
        .status("completed")
        .build()
        .await?;

    let cancelled = BookingRepository::new(db).cancel(booking.id, Utc::now()).await?;

    assert!(!cancelled);
    assert_eq!(stored_status(db, booking.id).await?, "completed");

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cancelled = BookingRepository::new(db).cancel(123, Utc::now()).await?;

    assert!(!cancelled);

    Ok(())
}

/// Tests that a booking which has ended cannot be cancelled, even before a sweep.
///
/// Expected: Ok(false) and status still active
#[tokio::test]
async fn leaves_ended_booking_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, _room) = create_booking_dependencies(db).await?;
    let ended_at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    let booking = BookingFactory::new(db, user.id)
        .ended_at(ended_at)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let at_end = repo.cancel(booking.id, ended_at).await?;
    let after_end = repo.cancel(booking.id, ended_at + Duration::seconds(1)).await?;

    assert!(!at_end);
    assert!(!after_end);
    assert_eq!(stored_status(db, booking.id).await?, "active");

    Ok(())
}
