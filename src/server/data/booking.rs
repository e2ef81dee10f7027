//! Booking data repository for database operations
//!
//! Provides the `BookingRepository`, the booking store. Every write that depends on
//! other rows is a single conditional statement:
//! - status transitions are `UPDATE ... WHERE status = 'active' AND <condition>`, so a
//!   booking in a terminal state is never rewritten and two concurrent writers can never
//!   both claim the same row
//! - inserts into a room are `INSERT ... SELECT ... WHERE NOT EXISTS (<overlap>)`, so
//!   two concurrent requests can never both take the same slot

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::booking::{Booking, BookingFilter, BookingStatus, CreateBookingParams},
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active booking unless its room is already taken
    ///
    /// The overlap check and the insert are one `INSERT ... SELECT ... WHERE NOT EXISTS`
    /// statement, so of several concurrent requests for the same room and slot at most
    /// one is stored. A booking without a room never conflicts. Performs no other
    /// validation; callers check the interval, participants, and room beforehand.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user owning the booking
    /// - `param` - Room, interval, and participant count
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The created booking
    /// - `Ok(None)` - Another active booking of the room overlaps `[started_at, ended_at)`
    /// - `Err(AppError::DbErr)` - Database error during insert, e.g. unknown user or room
    pub async fn create(
        &self,
        user_id: i32,
        param: CreateBookingParams,
    ) -> Result<Option<Booking>, AppError> {
        let mut row = Query::select()
            .exprs([
                Expr::val(param.room_id),
                Expr::val(user_id),
                Expr::val(param.started_at),
                Expr::val(param.ended_at),
                Expr::val(BookingStatus::Active.as_str()),
                Expr::val(param.participants),
                Expr::val(Utc::now()),
            ])
            .to_owned();

        if let Some(room_id) = param.room_id {
            let overlapping = Query::select()
                .expr(Expr::val(1))
                .from(entity::prelude::Booking)
                .cond_where(overlapping_active(room_id, param.started_at, param.ended_at))
                .to_owned();

            row.cond_where(Condition::all().not().add(Expr::exists(overlapping)));
        }

        let insert = Query::insert()
            .into_table(entity::prelude::Booking)
            .columns([
                entity::booking::Column::RoomId,
                entity::booking::Column::UserId,
                entity::booking::Column::StartedAt,
                entity::booking::Column::EndedAt,
                entity::booking::Column::Status,
                entity::booking::Column::Participants,
                entity::booking::Column::CreatedAt,
            ])
            .select_from(row)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        let result = self.db.execute(&insert).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let id = result.last_insert_id() as i32;
        let booking = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Inserted booking {} not found", id)))?;

        Ok(Some(booking))
    }

    /// Finds a booking by ID
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The booking if found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Gets paginated bookings matching the filter, ordered by start time
    ///
    /// # Arguments
    /// - `filter` - Optional owner, room, and status restrictions
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((bookings, total))` - Bookings of the requested page and total matching count
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn get_paginated(
        &self,
        filter: &BookingFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64), AppError> {
        let mut query = entity::prelude::Booking::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::booking::Column::UserId.eq(user_id));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::booking::Column::RoomId.eq(room_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::booking::Column::StartedAt)
            .order_by_asc(entity::booking::Column::Id)
            .paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookings, total))
    }

    /// Completes every active booking whose interval ended at or before `now`
    ///
    /// Selection and write happen in one conditional UPDATE, so concurrent callers
    /// split the qualifying rows between them and each row is counted once.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookings moved from active to completed
    /// - `Err(DbErr)` - Database error during the update
    pub async fn complete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        self.transition(
            Condition::all().add(entity::booking::Column::EndedAt.lte(now)),
            BookingStatus::Completed,
        )
        .await
    }

    /// Cancels a booking if it is still active and has not ended as of `now`
    ///
    /// A booking that has ended belongs to the lifecycle sweep and is never cancelled,
    /// even before the sweep has completed it.
    ///
    /// # Returns
    /// - `Ok(true)` - The booking moved from active to cancelled
    /// - `Ok(false)` - No active, unended booking with that ID; nothing was written
    /// - `Err(DbErr)` - Database error during the update
    pub async fn cancel(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let affected = self
            .transition(
                Condition::all()
                    .add(entity::booking::Column::Id.eq(id))
                    .add(entity::booking::Column::EndedAt.gt(now)),
                BookingStatus::Cancelled,
            )
            .await?;

        Ok(affected > 0)
    }

    /// Moves all active bookings matching `condition` to `to` in a single statement.
    async fn transition(&self, condition: Condition, to: BookingStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::Status, Expr::value(to.as_str()))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(condition)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Active bookings of `room_id` overlapping the half-open interval `[started_at, ended_at)`.
fn overlapping_active(
    room_id: i32,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
) -> Condition {
    Condition::all()
        .add(entity::booking::Column::RoomId.eq(room_id))
        .add(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
        .add(entity::booking::Column::StartedAt.lt(ended_at))
        .add(entity::booking::Column::EndedAt.gt(started_at))
}
