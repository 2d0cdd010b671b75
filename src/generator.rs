use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::{
    builder::PictureBuilder,
    config::{Config, GeneratorParams, Id, RunSettings},
    output::{ChunkSink, Summary},
    parallel::Pool,
    picture::{IdCounters, Picture},
    Result,
};

/// Main app: builds pictures, numbers them, and hands them to a sink in folds
pub struct Generator<S: ChunkSink> {
    params: GeneratorParams,
    run: RunSettings,
    builder: PictureBuilder,
    rng: StdRng,
    ids: IdCounters,
    fold: usize,
    batch: Vec<Picture>,
    discarded: usize,
    sink: S,
}
impl<S: ChunkSink> Generator<S> {
    pub fn new(config: Config, sink: S) -> Result<Self> {
        config.validate()?;
        let rng = match config.run.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            params: config.generator,
            run: config.run,
            builder: PictureBuilder::new(&config.generator, config.run.max_tries),
            rng,
            ids: IdCounters::default(),
            fold: 0,
            batch: Vec::new(),
            discarded: 0,
            sink,
        })
    }
    /// Continue from the counters and fold of an earlier run
    pub fn resume(mut self, ids: IdCounters, fold: usize) -> Self {
        self.ids = ids;
        self.fold = fold;
        self
    }

    // Getters
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }
    pub fn ids(&self) -> IdCounters {
        self.ids
    }
    pub fn fold(&self) -> usize {
        self.fold
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Generate pictures until the next picture id reaches `target`, then
    /// flush whatever is left in the batch.
    pub fn generate(&mut self, target: Id) -> Result<()> {
        info!(
            "To generate {} pictures.",
            target.saturating_sub(self.ids.picture)
        );

        if self.run.threads > 1 {
            self.generate_parallel(target)?;
        } else {
            while self.ids.picture < target {
                let (picture, failures) = self.builder.build(&mut self.rng);
                self.accept(picture, failures)?;
            }
        }

        if !self.batch.is_empty() {
            self.flush()?;
        }
        info!(
            "Generated {} pictures, {} attempts discarded.",
            self.ids.picture, self.discarded
        );
        Ok(())
    }

    fn generate_parallel(&mut self, target: Id) -> Result<()> {
        if self.ids.picture >= target {
            return Ok(());
        }
        let seed = self.run.seed.map(|_| self.rng.gen::<u64>());
        let pool = Pool::spawn(self.run.threads, self.builder, seed);
        let result = self.drain(&pool, target);
        pool.shutdown();
        result
    }

    fn drain(&mut self, pool: &Pool, target: Id) -> Result<()> {
        while self.ids.picture < target {
            let (picture, failures) = pool.recv()?;
            self.accept(picture, failures)?;
        }
        Ok(())
    }

    fn accept(&mut self, mut picture: Picture, failures: usize) -> Result<()> {
        picture.assign_ids(&mut self.ids);
        self.discarded += failures;
        self.batch.push(picture);

        if self.batch.len() >= self.run.chunk_size {
            self.flush()?;
        }
        if self.ids.picture % self.run.print_every == 0 {
            info!("Generated {} pictures.", self.ids.picture);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let summary = Summary {
            params: self.params,
            ids: self.ids,
        };
        self.sink.write_chunk(self.fold, &self.batch, &summary)?;
        self.fold += 1;
        self.batch.clear();
        Ok(())
    }
}
