mod message;
mod worker;

use std::{sync::mpsc, thread};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info, trace};

use crate::{builder::PictureBuilder, picture::Picture, Error, Result};
use message::W2M;
use worker::Worker;

/// Pictures queued per worker before workers block
const QUEUE_PER_WORKER: usize = 4;

/// Threads building pictures in parallel.
///
/// Pictures arrive without ids; the receiving side numbers them, so ids stay
/// unique and gap-free however the workers interleave.
pub struct Pool {
    rx: mpsc::Receiver<W2M>,
    handles: Vec<thread::JoinHandle<()>>,
}
impl Pool {
    /// Start `num_threads` workers. With a seed, worker `i` draws from `seed + i`.
    pub fn spawn(num_threads: usize, builder: PictureBuilder, seed: Option<u64>) -> Self {
        assert!(num_threads > 0, "Pool needs at least one thread");
        let (tx, rx) = mpsc::sync_channel(num_threads * QUEUE_PER_WORKER);
        let mut handles = Vec::with_capacity(num_threads);

        for index in 0..num_threads {
            let rng = match seed {
                Some(s) => StdRng::seed_from_u64(s.wrapping_add(index as u64)),
                None => StdRng::from_entropy(),
            };
            let mut worker = Worker::new(index, tx.clone(), builder, rng);
            handles.push(thread::spawn(move || worker.run_thread()));
        }
        info!("Started {} picture workers", num_threads);

        Self { rx, handles }
    }

    /// Wait for the next finished picture and the attempts discarded for it
    pub fn recv(&self) -> Result<(Picture, usize)> {
        match self.rx.recv() {
            Ok(W2M::Built {
                worker,
                picture,
                failures,
            }) => {
                trace!("Received picture from worker {}", worker);
                Ok((picture, failures))
            }
            Err(_) => Err(Error::Disconnected),
        }
    }

    /// Hang up on the workers and wait for them to finish their current picture
    pub fn shutdown(self) {
        drop(self.rx);
        for handle in self.handles {
            if handle.join().is_err() {
                error!("A picture worker panicked");
            }
        }
    }
}
