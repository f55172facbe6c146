//! Repeated, optionally concurrent execution of a command handler.
//!
//! Each handler instance gets a thread id, which is what the
//! `threaduser_` account form is scoped by.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::debug;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How many handler instances to run and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressOptions {
    pub threads: u32,
    pub times: u32,
    pub delay: Duration,
    pub serial: bool,
}

impl Default for StressOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            times: 1,
            delay: Duration::ZERO,
            serial: false,
        }
    }
}

fn run_thread<F>(options: &StressOptions, thread_id: u32, handler: &F) -> Result<()>
where
    F: Fn(u32) -> Result<()>,
{
    for round in 0..options.times {
        debug!("thread {} round {}", thread_id, round);
        handler(thread_id).wrap_err_with(|| format!("thread {} failed", thread_id))?;
        if round + 1 < options.times && !options.delay.is_zero() {
            thread::sleep(options.delay);
        }
    }
    Ok(())
}

/// Run `handler` once per thread id in `0..threads`, `times` times each.
///
/// Returns the error of the lowest failing thread id once every thread has
/// finished.
pub fn run_stress<F>(options: &StressOptions, handler: F) -> Result<()>
where
    F: Fn(u32) -> Result<()> + Sync,
{
    if options.serial {
        for thread_id in 0..options.threads {
            run_thread(options, thread_id, &handler)?;
        }
        return Ok(());
    }

    // one worker per handler thread; handlers block in sleeps
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads.max(1) as usize)
        .build()
        .wrap_err("Failed to build stress thread pool")?;

    let (tx, rx) = mpsc::channel();
    pool.scope(|scope| {
        for thread_id in 0..options.threads {
            let tx = tx.clone();
            let handler = &handler;
            scope.spawn(move |_| {
                let _ = tx.send((thread_id, run_thread(options, thread_id, handler)));
            });
        }
    });
    drop(tx);

    let mut failures: Vec<_> = rx
        .into_iter()
        .filter_map(|(thread_id, result)| result.err().map(|e| (thread_id, e)))
        .collect();
    failures.sort_by_key(|(thread_id, _)| *thread_id);

    match failures.into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::eyre::eyre;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Instant;

    #[test]
    fn test_every_thread_runs_every_round() {
        let seen = Mutex::new(Vec::new());
        let options = StressOptions {
            threads: 3,
            times: 2,
            ..StressOptions::default()
        };

        run_stress(&options, |thread_id| {
            seen.lock().unwrap().push(thread_id);
            Ok(())
        })
        .unwrap();

        let mut seen = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_serial_order() {
        let seen = Mutex::new(Vec::new());
        let options = StressOptions {
            threads: 3,
            serial: true,
            ..StressOptions::default()
        };

        run_stress(&options, |thread_id| {
            seen.lock().unwrap().push(thread_id);
            Ok(())
        })
        .unwrap();

        assert_eq!(seen.into_inner().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_first_failure_is_reported() {
        let options = StressOptions {
            threads: 4,
            ..StressOptions::default()
        };

        let err = run_stress(&options, |thread_id| {
            if thread_id >= 2 {
                Err(eyre!("boom {}", thread_id))
            } else {
                Ok(())
            }
        })
        .unwrap_err();

        assert!(format!("{:?}", err).contains("boom 2"));
    }

    #[test]
    fn test_default_runs_thread_zero_once() {
        let calls = Mutex::new(Vec::new());
        run_stress(&StressOptions::default(), |thread_id| {
            calls.lock().unwrap().push(thread_id);
            Ok(())
        })
        .unwrap();
        assert_eq!(calls.into_inner().unwrap(), vec![0]);
    }

    #[test]
    fn test_threads_run_concurrently() {
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let options = StressOptions {
            threads: 4,
            ..StressOptions::default()
        };

        run_stress(&options, |_| {
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(100));
            active.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

        assert_eq!(peak.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_no_delay_after_last_round() {
        let options = StressOptions {
            threads: 1,
            times: 2,
            delay: Duration::from_millis(300),
            serial: true,
        };

        let start = Instant::now();
        run_stress(&options, |_| Ok(())).unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(600), "took {:?}", elapsed);
    }
}
