//! ResultLoader - one-shot background read behind a result view.
//!
//! Each `load` issues exactly one store read and publishes its outcome on a
//! watch channel. When every receiver is gone before the read finishes, the
//! outcome is dropped instead of being delivered.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::foundation::RecordId;
use crate::domain::survey::ResultState;

use super::get_survey_result::{GetSurveyResultHandler, GetSurveyResultQuery};

/// What happened to a finished read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Discarded,
}

/// Starts result reads and tracks their state.
#[derive(Clone)]
pub struct ResultLoader {
    handler: Arc<GetSurveyResultHandler>,
}

impl ResultLoader {
    pub fn new(handler: Arc<GetSurveyResultHandler>) -> Self {
        Self { handler }
    }

    /// Spawns the read. The receiver starts at `Pending`.
    pub fn load(&self, record_id: RecordId) -> (watch::Receiver<ResultState>, JoinHandle<Delivery>) {
        let (tx, rx) = watch::channel(ResultState::Pending);
        let handler = self.handler.clone();

        let task = tokio::spawn(async move {
            let outcome = handler
                .handle(GetSurveyResultQuery {
                    record_id: record_id.clone(),
                })
                .await;

            if tx.is_closed() {
                tracing::debug!(record_id = %record_id, "Result view gone, discarding load");
                return Delivery::Discarded;
            }

            let next = ResultState::Pending.resolve(outcome);
            match tx.send(next) {
                Ok(()) => Delivery::Delivered,
                Err(_) => {
                    tracing::debug!(record_id = %record_id, "Result view gone, discarding load");
                    Delivery::Discarded
                }
            }
        });

        (rx, task)
    }

    /// Loads and waits until the state is terminal.
    pub async fn load_to_completion(&self, record_id: RecordId) -> ResultState {
        let (mut rx, _task) = self.load(record_id);
        let state = match rx.wait_for(ResultState::is_terminal).await {
            Ok(state) => state.clone(),
            // Sender dropped without a terminal state, i.e. the read task panicked.
            Err(_) => ResultState::FetchFailed("Result load was interrupted".to_string()),
        };
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::survey::Document;
    use crate::ports::DocumentStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct GatedStore {
        release: Arc<Notify>,
        reads: AtomicUsize,
        document: Option<Document>,
        fail: bool,
    }

    impl GatedStore {
        fn new(document: Option<Document>) -> Self {
            Self {
                release: Arc::new(Notify::new()),
                reads: AtomicUsize::new(0),
                document,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(None)
            }
        }
    }

    #[async_trait]
    impl DocumentStore for GatedStore {
        async fn create(&self, _collection: &str, _fields: Document) -> Result<RecordId, DomainError> {
            unreachable!("loader never creates")
        }

        async fn get(&self, _collection: &str, _id: &RecordId) -> Result<Option<Document>, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            if self.fail {
                return Err(DomainError::new(ErrorCode::ExternalServiceError, "unavailable"));
            }
            Ok(self.document.clone())
        }
    }

    fn loader(store: Arc<GatedStore>) -> ResultLoader {
        ResultLoader::new(Arc::new(GetSurveyResultHandler::new(store, "surveyData")))
    }

    fn id() -> RecordId {
        RecordId::new("abc").unwrap()
    }

    fn document() -> Document {
        let mut doc = Document::new();
        doc.insert("question1".into(), 9.into());
        doc.insert("question2".into(), 6.into());
        doc
    }

    #[tokio::test]
    async fn starts_pending_then_loads() {
        let store = Arc::new(GatedStore::new(Some(document())));
        let (mut rx, task) = loader(store.clone()).load(id());

        assert_eq!(*rx.borrow(), ResultState::Pending);

        store.release.notify_one();
        let state = rx.wait_for(ResultState::is_terminal).await.unwrap().clone();

        match state {
            ResultState::Loaded(result) => assert_eq!(result.interpretation.total_score(), 15),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(task.await.unwrap(), Delivery::Delivered);
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn present_record_loads_to_completion() {
        let store = Arc::new(GatedStore::new(Some(document())));
        store.release.notify_one();

        let state = loader(store.clone()).load_to_completion(id()).await;

        assert!(matches!(state, ResultState::Loaded(ref r) if r.interpretation.total_score() == 15));
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn absent_record_becomes_not_found() {
        let store = Arc::new(GatedStore::new(None));
        store.release.notify_one();

        let state = loader(store).load_to_completion(id()).await;

        assert_eq!(state, ResultState::NotFound);
    }

    #[tokio::test]
    async fn store_failure_becomes_fetch_failed() {
        let store = Arc::new(GatedStore::failing());
        store.release.notify_one();

        let state = loader(store).load_to_completion(id()).await;

        assert!(matches!(state, ResultState::FetchFailed(msg) if msg.contains("unavailable")));
    }

    #[tokio::test]
    async fn dropped_view_discards_late_result() {
        let store = Arc::new(GatedStore::new(Some(document())));
        let (rx, task) = loader(store.clone()).load(id());

        drop(rx);
        store.release.notify_one();

        assert_eq!(task.await.unwrap(), Delivery::Discarded);
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }
}
