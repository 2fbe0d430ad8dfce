//! Board view controller: one API call per user action, then a local merge
//!
//! Mutations are applied to the [`BoardStore`] only after the server
//! confirmed them. A single pending flag rejects a second mutation while the
//! first is still waiting for its response, so a double submit cannot create
//! the same task twice.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use taskman_core::{BoardStore, NewTask, TaskChanges};
use tracing::{debug, warn};

use crate::auth::{AuthContext, Session, TokenStore};
use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};

pub struct BoardController {
    api: ApiClient,
    auth: AuthContext,
    store: Mutex<BoardStore>,
    pending: AtomicBool,
}

/// Held while a mutation is outstanding; clears the pending flag on drop
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BoardController {
    pub fn new(api: ApiClient, auth: AuthContext) -> Self {
        Self::with_store(api, auth, BoardStore::new())
    }

    /// Start a board view for `session`. Fails with `NotAuthenticated`, before
    /// any request is made, when the session holds no token.
    pub fn open<S: TokenStore>(api: ApiClient, session: &Session<S>) -> ClientResult<Self> {
        let auth = session.guard()?;
        Ok(Self::new(api, auth))
    }

    pub fn with_store(api: ApiClient, auth: AuthContext, store: BoardStore) -> Self {
        Self {
            api,
            auth,
            store: Mutex::new(store),
            pending: AtomicBool::new(false),
        }
    }

    /// Locked view of the local store
    pub fn store(&self) -> MutexGuard<'_, BoardStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Fetch all boards into the store.
    ///
    /// On failure the store is left empty, matching the board view's empty
    /// state, and the error is returned for display.
    pub async fn load(&self) -> ClientResult<usize> {
        match self.api.list_boards(&self.auth).await {
            Ok(boards) => {
                let count = boards.len();
                self.store().replace_all(boards);
                Ok(count)
            }
            Err(e) => {
                warn!("Error fetching boards: {}", e);
                self.store().clear();
                Err(e)
            }
        }
    }

    pub async fn create_task(&self, task: NewTask) -> ClientResult<u64> {
        let _in_flight = self.begin()?;
        let id = self.api.create_task(&self.auth, &task).await?;

        let merged = self.store().create_task(
            id,
            task.title,
            task.description,
            task.status,
            task.board_id,
        );
        if !merged {
            debug!("Task {} created on board {} which is not loaded", id, task.board_id);
        }
        Ok(id)
    }

    pub async fn update_task(&self, task_id: u64, changes: TaskChanges) -> ClientResult<()> {
        let _in_flight = self.begin()?;
        self.api.update_task(&self.auth, task_id, &changes).await?;

        self.store()
            .update_task(task_id, changes.title, changes.description, changes.status);
        Ok(())
    }

    pub async fn delete_task(&self, task_id: u64) -> ClientResult<()> {
        let _in_flight = self.begin()?;
        self.api.delete_task(&self.auth, task_id).await?;

        self.store().delete_task(task_id);
        Ok(())
    }

    pub async fn create_board(&self, title: &str) -> ClientResult<u64> {
        let _in_flight = self.begin()?;
        let id = self.api.create_board(&self.auth, title).await?;

        self.store().create_board(id, title);
        Ok(id)
    }

    pub async fn rename_board(&self, board_id: u64, title: &str) -> ClientResult<()> {
        let _in_flight = self.begin()?;
        self.api.update_board(&self.auth, board_id, title).await?;

        self.store().rename_board(board_id, title);
        Ok(())
    }

    pub async fn delete_board(&self, board_id: u64) -> ClientResult<()> {
        let _in_flight = self.begin()?;
        self.api.delete_board(&self.auth, board_id).await?;

        self.store().delete_board(board_id);
        Ok(())
    }

    fn begin(&self) -> ClientResult<InFlight<'_>> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClientError::Busy)?;
        Ok(InFlight(&self.pending))
    }
}
