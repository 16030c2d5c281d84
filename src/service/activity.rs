//! Message counting for the activity leaderboard.
//!
//! Every counted message bumps an in-memory bucket keyed by guild and user. When a
//! bucket reaches `COOLDOWN_MESSAGES` it is emptied and one point is written to
//! `msg_counts`. The buckets are owned by a single task, the `ActivityTracker`, and
//! callers talk to it over a channel, so no lock guards the map and a flush always
//! completes before the next message is applied.
//!
//! Buckets live only in memory; partial progress is lost on restart.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use tokio::sync::{mpsc, oneshot};

use crate::{
    data::message_count::MessageCountRepository,
    error::{internal::InternalError, AppError},
};

/// Number of counted messages that make up one leaderboard point.
pub const COOLDOWN_MESSAGES: u32 = 4;

/// Capacity of the tracker's inbox before `record` waits.
const TRACKER_QUEUE_SIZE: usize = 256;

/// Fixed-window message counter per guild and user.
///
/// Not time based: a bucket only empties when it reaches the threshold.
#[derive(Debug)]
pub struct MessageBuckets {
    threshold: u32,
    buckets: HashMap<(u64, u64), u32>,
}

impl Default for MessageBuckets {
    fn default() -> Self {
        Self::new(COOLDOWN_MESSAGES)
    }
}

impl MessageBuckets {
    /// Creates an empty set of buckets that flush every `threshold` messages.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            buckets: HashMap::new(),
        }
    }

    /// Counts one message.
    ///
    /// # Returns
    /// - `true` - The bucket reached the threshold and was reset; one point is due
    /// - `false` - The message was only added to the bucket
    pub fn record(&mut self, guild_id: u64, user_id: u64) -> bool {
        let key = (guild_id, user_id);
        let count = self.buckets.entry(key).or_insert(0);
        *count += 1;

        if *count >= self.threshold {
            self.buckets.remove(&key);
            return true;
        }

        false
    }
}

/// Request sent from a message handler to the tracker task.
struct RecordMessage {
    guild_id: u64,
    user_id: u64,
    reply: oneshot::Sender<Result<bool, AppError>>,
}

/// Handle to the task that owns the message buckets.
///
/// Cheap to clone; every clone talks to the same task.
#[derive(Clone)]
pub struct ActivityTracker {
    sender: mpsc::Sender<RecordMessage>,
}

impl ActivityTracker {
    /// Spawns the tracker task on the current tokio runtime.
    ///
    /// The task runs until every handle has been dropped.
    ///
    /// # Arguments
    /// - `db` - Connection used to persist points
    ///
    /// # Returns
    /// - `ActivityTracker` - Handle for recording messages
    pub fn spawn(db: DatabaseConnection) -> Self {
        let (sender, receiver) = mpsc::channel(TRACKER_QUEUE_SIZE);

        tokio::spawn(run_tracker(db, MessageBuckets::default(), receiver));

        Self { sender }
    }

    /// Records one message from a user in a permitted channel.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message was sent in
    /// - `user_id` - Author of the message
    ///
    /// # Returns
    /// - `Ok(true)` - This message completed a bucket and one point was stored
    /// - `Ok(false)` - The message was counted without awarding a point
    /// - `Err(AppError::DbErr)` - Storing the point failed; the bucket was still reset
    /// - `Err(AppError::InternalErr(ActivityTrackerStopped))` - The tracker task is gone
    pub async fn record(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let (reply, response) = oneshot::channel();

        self.sender
            .send(RecordMessage {
                guild_id,
                user_id,
                reply,
            })
            .await
            .map_err(|_| InternalError::ActivityTrackerStopped)?;

        response
            .await
            .map_err(|_| InternalError::ActivityTrackerStopped)?
    }
}

async fn run_tracker(
    db: DatabaseConnection,
    mut buckets: MessageBuckets,
    mut receiver: mpsc::Receiver<RecordMessage>,
) {
    tracing::debug!("Activity tracker started");

    while let Some(message) = receiver.recv().await {
        let result = if buckets.record(message.guild_id, message.user_id) {
            MessageCountRepository::new(&db)
                .add_points(message.guild_id, message.user_id, 1)
                .await
                .map(|_| true)
        } else {
            Ok(false)
        };

        // The caller may have stopped waiting
        let _ = message.reply.send(result);
    }

    tracing::debug!("Activity tracker stopped");
}
