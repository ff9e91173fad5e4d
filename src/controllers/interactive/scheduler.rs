use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::controllers::interactive::frame::FrameData;
use crate::controllers::interactive::ports::FrameSink;
use crate::core::kernel::cancellation::Cancelled;
use crate::core::kernel::compute_grid_cancelable;
use crate::core::kernel::request::RenderRequest;
use crate::render::palette::Palette;
use crate::render::rasterize::rasterize;

/// Everything the worker needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderJob {
    pub request: RenderRequest,
    pub palette: Palette,
}

struct SharedState {
    generation: AtomicU64,
    last_completed: AtomicU64,
    latest_job: Mutex<Option<(u64, RenderJob)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

/// Runs kernel recomputes on a dedicated worker thread with a latest-wins
/// policy: submitting a job bumps a generation counter, the in-flight
/// render observes the bump through its cancellation token and aborts, and
/// only the newest generation's frame reaches the sink. This keeps the
/// host's event thread free during bursts of pointer moves.
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed: AtomicU64::new(0),
            latest_job: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || Self::worker_loop(&worker_shared));

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `job`, replacing any not-yet-started one. Returns the job's
    /// generation.
    pub fn submit(&self, job: RenderJob) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_job.lock().unwrap();
            *guard = Some((generation, job));
        }

        self.shared.wake.notify_one();
        generation
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.last_completed.load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, job) = {
                let mut guard = shared.latest_job.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let grid = match compute_grid_cancelable(&job.request, &cancel) {
                Ok(grid) => grid,
                Err(Cancelled) => continue,
            };
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            let buffer = rasterize(&grid, job.palette, job.request.max_iterations());

            shared.sink.present(FrameData {
                generation: job_generation,
                buffer,
                render_duration,
            });
            shared
                .last_completed
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
