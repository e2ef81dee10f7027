use super::*;

/// Tests creating a valid booking in a room of the owner's organization.
///
/// Expected: Ok with active booking owned by the user
#[tokio::test]
async fn creates_booking_in_own_organization_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, room) = create_booking_dependencies(db).await?;

    let booking = BookingService::new(db)
        .create(&user, params(Some(room.id), 2))
        .await
        .unwrap();

    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.room_id, Some(room.id));
    assert_eq!(booking.status, BookingStatus::Active);

    Ok(())
}

/// Tests rejecting a booking without participants.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_zero_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, room) = create_booking_dependencies(db).await?;

    let result = BookingService::new(db)
        .create(&user, params(Some(room.id), 0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting a booking that ends before it starts.
///
/// Expected: Err(AppError::BadRequest) for both inverted and empty intervals
#[tokio::test]
async fn rejects_interval_not_moving_forward() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, _room) = create_booking_dependencies(db).await?;
    let service = BookingService::new(db);

    let inverted = CreateBookingParams {
        room_id: None,
        started_at: slot_start(),
        ended_at: slot_start() - Duration::minutes(1),
        participants: 1,
    };
    let empty = CreateBookingParams {
        room_id: None,
        started_at: slot_start(),
        ended_at: slot_start(),
        participants: 1,
    };

    assert!(matches!(
        service.create(&user, inverted).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(&user, empty).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests rejecting a room of a different organization.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_room_of_other_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organization, user, _room) = create_booking_dependencies(db).await?;
    let other_organization = factory::create_organization(db).await?;
    let foreign_room = factory::create_room(db, other_organization.id).await?;

    let result = BookingService::new(db)
        .create(&user, params(Some(foreign_room.id), 1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests rejecting more participants than the room holds.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_participants_over_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, user, _room) = create_booking_dependencies(db).await?;
    let small_room = RoomFactory::new(db, organization.id)
        .capacity(2)
        .build()
        .await?;

    let result = BookingService::new(db)
        .create(&user, params(Some(small_room.id), 3))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting a slot overlapping another active booking of the room.
///
/// Expected: Err(AppError::BadRequest) while active, Ok once the other is cancelled
#[tokio::test]
async fn rejects_overlap_until_other_booking_cancelled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, user, room) = create_booking_dependencies(db).await?;
    let colleague = factory::create_user(db, organization.id).await?;
    let existing = BookingFactory::new(db, colleague.id)
        .room_id(Some(room.id))
        .started_at(slot_start() + Duration::minutes(30))
        .ended_at(slot_start() + Duration::minutes(90))
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service.create(&user, params(Some(room.id), 1)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service.cancel(&colleague, existing.id).await.unwrap();

    let booking = service
        .create(&user, params(Some(room.id), 1))
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Active);

    Ok(())
}

/// Tests many simultaneous requests for the same room and slot.
///
/// Eight tasks on a multi-threaded runtime create the same booking through a pool of
/// eight connections to a file-backed database.
///
/// Expected: exactly one Ok, the rest Err(AppError::BadRequest), one booking stored
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_take_slot_once() -> Result<(), DbErr> {
    const REQUESTS: usize = 8;

    let test = TestBuilder::new()
        .with_booking_tables()
        .with_file_database(REQUESTS as u32)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organization, owner, room) = create_booking_dependencies(db).await?;
    let mut users = vec![owner];
    for _ in 1..REQUESTS {
        users.push(factory::create_user(db, organization.id).await?);
    }

    let handles: Vec<_> = users
        .into_iter()
        .map(|user| {
            let db = db.clone();
            let room_id = room.id;
            tokio::spawn(async move {
                BookingService::new(&db)
                    .create(&user, params(Some(room_id), 1))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::BadRequest(_)) => rejected += 1,
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(rejected, REQUESTS - 1);
    let stored = entity::prelude::Booking::find()
        .filter(entity::booking::Column::RoomId.eq(room.id))
        .count(db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}
