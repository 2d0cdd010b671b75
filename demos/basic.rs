use bongard::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Prints each fold instead of writing files
struct Printer;
impl ChunkSink for Printer {
    fn write_chunk(
        &mut self,
        fold: usize,
        pictures: &[Picture],
        summary: &Summary,
    ) -> bongard::Result<()> {
        println!("fold {}: {}", fold, summary);
        for picture in pictures {
            let shapes: Vec<String> = picture.shapes().iter().map(|s| s.to_string()).collect();
            println!(
                "  picture {:?}: {} | inside {:?} | east {:?} | north {:?}",
                picture.id(),
                shapes.join(", "),
                picture.inside(),
                picture.east(),
                picture.north()
            );
        }
        Ok(())
    }
}

fn main() -> bongard::Result<()> {
    let params = GeneratorParams::new(3, 5, 4, 60, 1);

    // One picture by hand
    let builder = PictureBuilder::new(&params, 1_000_000);
    let mut rng = StdRng::seed_from_u64(2014);
    let (picture, failures) = builder.build(&mut rng);
    println!(
        "Built a picture of {} shapes after {} failed attempts",
        picture.len(),
        failures
    );

    // A small seeded run in folds of four
    let config = Config {
        generator: params,
        run: RunSettings {
            chunk_size: 4,
            seed: Some(2014),
            ..RunSettings::default()
        },
    };
    let mut generator = Generator::new(config, Printer)?;
    generator.generate(10)?;
    Ok(())
}
