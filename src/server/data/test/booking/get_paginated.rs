use super::*;

/// Tests that bookings are returned ordered by start time with the total count.
///
/// Expected: Ok with first page ordered by started_at and total of all bookings
#[tokio::test]
async fn returns_page_ordered_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, _room) = create_booking_dependencies(db).await?;
    let now = Utc::now();
    let later = BookingFactory::new(db, user.id)
        .started_at(now + Duration::hours(5))
        .ended_at(now + Duration::hours(6))
        .build()
        .await?;
    let sooner = BookingFactory::new(db, user.id)
        .started_at(now + Duration::hours(1))
        .ended_at(now + Duration::hours(2))
        .build()
        .await?;
    BookingFactory::new(db, user.id)
        .started_at(now + Duration::hours(9))
        .ended_at(now + Duration::hours(10))
        .build()
        .await?;

    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(&BookingFilter::default(), 0, 2)
        .await
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, sooner.id);
    assert_eq!(bookings[1].id, later.id);

    Ok(())
}

/// Tests filtering by owner and status.
///
/// Expected: Ok with only the owner's cancelled booking
#[tokio::test]
async fn filters_by_user_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, user, _room) = create_booking_dependencies(db).await?;
    let other_user = factory::create_user(db, organization.id).await?;

    factory::create_booking(db, user.id, None).await?;
    let cancelled = BookingFactory::new(db, user.id)
        .status("cancelled")
        .build()
        .await?;
    BookingFactory::new(db, other_user.id)
        .status("cancelled")
        .build()
        .await?;

    let filter = BookingFilter {
        user_id: Some(user.id),
        status: Some(BookingStatus::Cancelled),
        ..Default::default()
    };
    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, cancelled.id);

    Ok(())
}

/// Tests filtering by room.
///
/// Expected: Ok with only bookings of that room
#[tokio::test]
async fn filters_by_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, user, room) = create_booking_dependencies(db).await?;
    let other_room = factory::create_room(db, organization.id).await?;

    let in_room = factory::create_booking(db, user.id, Some(room.id)).await?;
    factory::create_booking(db, user.id, Some(other_room.id)).await?;
    factory::create_booking(db, user.id, None).await?;

    let filter = BookingFilter {
        room_id: Some(room.id),
        ..Default::default()
    };
    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(bookings[0].id, in_room.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with empty page and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, _room) = create_booking_dependencies(db).await?;
    factory::create_booking(db, user.id, None).await?;

    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(&BookingFilter::default(), 3, 10)
        .await
        .unwrap();

    assert!(bookings.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
