//! Race harness - releases several threads at once against the same call

use std::sync::Barrier;
use std::thread;

/// Race configuration
#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Threads released together
    pub threads: usize,
    /// Rounds each thread runs after release
    pub rounds: usize,
}

impl Default for RaceConfig {
    fn default() -> Self {
        RaceConfig {
            threads: 8,
            rounds: 1,
        }
    }
}

impl RaceConfig {
    /// Many threads, repeated calls
    pub fn heavy() -> Self {
        RaceConfig {
            threads: 32,
            rounds: 64,
        }
    }
}

/// Call `f` from `threads` threads released by one barrier.
///
/// Returns every result, `threads * rounds` in total. A panicking thread
/// propagates its panic to the caller.
pub fn race<T, F>(config: &RaceConfig, f: F) -> Vec<T>
where
    T: Send,
    F: Fn() -> T + Sync,
{
    let threads = config.threads.max(1);
    let barrier = Barrier::new(threads);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    (0..config.rounds).map(|_| f()).collect::<Vec<T>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(results) => results,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
