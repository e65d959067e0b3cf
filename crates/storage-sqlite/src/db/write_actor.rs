use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use etf_tracker_core::errors::{DatabaseError, Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

type BoxedValue = Box<dyn Any + Send + 'static>;

// Job executed on the writer's connection. The return value is type-erased so
// one channel can carry jobs of any result type.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<BoxedValue> + Send + 'static>;

type Envelope = (Job, oneshot::Sender<Result<BoxedValue>>);

const WRITER_QUEUE_DEPTH: usize = 256;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Runs `job` on the writer's dedicated connection inside an immediate
    /// transaction. An `Err` from the job rolls the whole transaction back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as BoxedValue)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_stopped())?;

        let boxed = ret_rx.await.map_err(|_| writer_stopped())??;
        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer returned a value of an unexpected type".to_string(),
            ))
        })
    }
}

fn writer_stopped() -> Error {
    Error::Database(DatabaseError::Internal(
        "Database writer is no longer running".to_string(),
    ))
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database.
///
/// The writer's connection is taken from the pool before the task starts, so
/// an exhausted or misconfigured pool is reported here rather than on the
/// first write. The task stops once every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let mut conn = pool.get().map_err(StorageError::from)?;
    let (tx, mut rx) = mpsc::channel::<Envelope>(WRITER_QUEUE_DEPTH);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<BoxedValue> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // Receiver may have gone away (caller cancelled); nothing to do then.
            let _ = reply_tx.send(result);
        }
        log::debug!("Database writer stopped");
    });

    Ok(WriteHandle { tx })
}
