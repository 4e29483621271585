//! Background dataset loading
//!
//! The dataset read is the one blocking step in the app. It runs on its own
//! thread and reports back over a channel, so the UI keeps drawing while the
//! file is parsed and only ever sees a fully built dataset.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::{self, JoinHandle};

use crate::data::Dataset;
use crate::error::{Result, ViewerError};

/// Outcome of a finished load
pub type LoadResult = Result<Arc<Dataset>>;

/// One-shot loader for the startup dataset
pub struct DatasetLoader {
    rx: Receiver<LoadResult>,
    handle: Option<JoinHandle<()>>,
    finished: bool,
}

impl DatasetLoader {
    /// Start loading `path` on a worker thread.
    ///
    /// `on_done` runs on the worker after the result is sent, used to wake
    /// the UI.
    pub fn spawn<F>(path: impl Into<PathBuf>, on_done: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let path = path.into();
        let (tx, rx) = channel::<LoadResult>();

        tracing::info!(path = %path.display(), "loading dataset");

        let handle = thread::spawn(move || {
            let result = Self::load(&path);
            if tx.send(result).is_ok() {
                on_done();
            }
        });

        Self {
            rx,
            handle: Some(handle),
            finished: false,
        }
    }

    fn load(path: &Path) -> LoadResult {
        profiling::scope!("DatasetLoader::load");
        let dataset = Dataset::load(path)?;
        tracing::info!(
            records = dataset.len(),
            plants = dataset.facets().plants.len(),
            years = dataset.facets().years.len(),
            "dataset loaded"
        );
        Ok(Arc::new(dataset))
    }

    /// Poll for the result (non-blocking).
    ///
    /// Yields the result exactly once; afterwards always `None`.
    pub fn poll(&mut self) -> Option<LoadResult> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => Some(self.finish(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.finish(Err(ViewerError::LoaderDisconnected))),
        }
    }

    fn finish(&mut self, result: LoadResult) -> LoadResult {
        self.finished = true;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};
    use tempfile::Builder;

    /// Poll until the worker reports, the way the UI does once per frame
    fn poll_until_done(loader: &mut DatasetLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader timed out");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_loader_reads_file() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "植物編號,植物名稱,日期,節氣,葉子分數,花的分數,果實分數").unwrap();
        writeln!(file, "P1,樟樹,2023-03-05,驚蟄,3,0,1").unwrap();
        writeln!(file, "P1,樟樹,2023-03-20,春分,4,1,1").unwrap();
        file.flush().unwrap();

        let woke = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&woke);
        let mut loader = DatasetLoader::spawn(file.path(), move || flag.store(true, Ordering::SeqCst));

        let dataset = poll_until_done(&mut loader).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(woke.load(Ordering::SeqCst));
        assert!(loader.poll().is_none(), "result is delivered once");
    }

    #[test]
    fn test_loader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = DatasetLoader::spawn(dir.path().join("大肚山植調.csv"), || {});
        let err = poll_until_done(&mut loader).unwrap_err();
        assert!(matches!(err, ViewerError::FileIo(_)));
    }

    #[test]
    fn test_loader_reports_empty_file() {
        let file = Builder::new().suffix(".csv").tempfile().unwrap();
        let mut loader = DatasetLoader::spawn(file.path(), || {});
        let err = poll_until_done(&mut loader).unwrap_err();
        assert!(matches!(err, ViewerError::EmptyDataset));
    }
}
