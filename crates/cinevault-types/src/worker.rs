//! Worker pool. Handles synchronous CPU-bound tasks (image decoding and
//! resizing) with 2 priority levels and configurable worker threads.

use flume::{Receiver, Sender};
use futures::channel::oneshot;
use std::{sync::Arc, thread};

use crate::prelude::*;

#[derive(Clone, Copy, Debug)]
pub enum Priority {
	/// Interactive work (a client is waiting for the result)
	High,
	/// Batch work (library rescans, variant backfills)
	Low,
}

#[derive(Debug)]
pub struct WorkerPool {
	high: Sender<Box<dyn FnOnce() + Send>>,
	low: Sender<Box<dyn FnOnce() + Send>>,
}

impl WorkerPool {
	pub fn new(n_high: usize, n_shared: usize) -> Self {
		let (high, rx_high) = flume::unbounded();
		let (low, rx_low) = flume::unbounded();

		let rx_high = Arc::new(rx_high);
		let rx_low = Arc::new(rx_low);

		// Workers dedicated to High only
		for _ in 0..n_high {
			let rx_high = Arc::clone(&rx_high);
			thread::spawn(move || worker_loop(&[rx_high]));
		}

		// Workers for High + Low
		for _ in 0..n_shared {
			let rx_high = Arc::clone(&rx_high);
			let rx_low = Arc::clone(&rx_low);
			thread::spawn(move || worker_loop(&[rx_high, rx_low]));
		}

		Self { high, low }
	}

	/// Submit a closure → returns a Future for the result
	pub fn spawn<F, T>(
		&self,
		priority: Priority,
		f: F,
	) -> impl std::future::Future<Output = CvResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (res_tx, res_rx) = oneshot::channel();

		let job = Box::new(move || {
			let result = f();
			let _ignore = res_tx.send(result);
		});

		let queue = match priority {
			Priority::High => &self.high,
			Priority::Low => &self.low,
		};
		if queue.send(job).is_err() {
			error!("Failed to send job to {:?} priority worker queue", priority);
		}

		async move {
			res_rx.await.map_err(|_| {
				error!("Worker dropped result channel (task may have panicked)");
				Error::Unknown
			})
		}
	}

	pub fn run<F, T>(&self, f: F) -> impl std::future::Future<Output = CvResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.spawn(Priority::Low, f)
	}

	pub fn run_immed<F, T>(&self, f: F) -> impl std::future::Future<Output = CvResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.spawn(Priority::High, f)
	}

	/// Like `run_immed`, but flattens `CvResult<CvResult<T>>` into `CvResult<T>`.
	/// Use when the closure itself returns `CvResult<T>`.
	pub fn try_run_immed<F, T>(&self, f: F) -> impl std::future::Future<Output = CvResult<T>>
	where
		F: FnOnce() -> CvResult<T> + Send + 'static,
		T: Send + 'static,
	{
		let fut = self.run_immed(f);
		async move { fut.await? }
	}
}

type JobQueue = Arc<Receiver<Box<dyn FnOnce() + Send>>>;

fn worker_loop(queues: &[JobQueue]) {
	loop {
		// Try higher-priority queues first (non-blocking)
		let mut job = None;
		for rx in queues {
			if let Ok(j) = rx.try_recv() {
				job = Some(j);
				break;
			}
		}

		if let Some(job) = job {
			if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
				error!("Worker thread caught panic: {:?}", e);
			}
			continue;
		}

		// Wait for next job
		let mut selector = flume::Selector::new();
		for rx in queues {
			selector = selector.recv(rx, |res| res);
		}

		let job: Result<Box<dyn FnOnce() + Send>, flume::RecvError> = selector.wait();
		if let Ok(job) = job {
			if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
				error!("Worker thread caught panic: {:?}", e);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_run_returns_result() {
		let pool = WorkerPool::new(1, 1);
		let res = pool.run(|| 2 + 2).await;
		assert_eq!(res.ok(), Some(4));
	}

	#[tokio::test]
	async fn test_run_immed_uses_dedicated_queue() {
		let pool = WorkerPool::new(1, 0);
		let res = pool.run_immed(|| "done").await;
		assert_eq!(res.ok(), Some("done"));
	}

	#[tokio::test]
	async fn test_try_run_immed_flattens() {
		let pool = WorkerPool::new(1, 1);
		let res: CvResult<u32> = pool.try_run_immed(|| Err(Error::NotFound)).await;
		assert!(matches!(res, Err(Error::NotFound)));
	}
}

// vim: ts=4
