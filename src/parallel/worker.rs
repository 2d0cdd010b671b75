use std::sync::mpsc;

use rand::rngs::StdRng;
use tracing::debug;

use super::message::W2M;
use crate::builder::PictureBuilder;

/// Builds pictures from its own random stream until the manager hangs up
pub(crate) struct Worker {
    index: usize,
    tx: mpsc::SyncSender<W2M>,
    builder: PictureBuilder,
    rng: StdRng,
}
impl Worker {
    pub fn new(
        index: usize,
        tx: mpsc::SyncSender<W2M>,
        builder: PictureBuilder,
        rng: StdRng,
    ) -> Self {
        Self {
            index,
            tx,
            builder,
            rng,
        }
    }
    pub fn run_thread(&mut self) {
        let mut sent = 0usize;
        loop {
            let (picture, failures) = self.builder.build(&mut self.rng);
            let message = W2M::Built {
                worker: self.index,
                picture,
                failures,
            };
            if self.tx.send(message).is_err() {
                debug!("Worker {} stopping after {} pictures", self.index, sent);
                return;
            }
            sent += 1;
        }
    }
}
