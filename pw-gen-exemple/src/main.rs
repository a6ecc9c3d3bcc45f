use std::env;
use std::fs;

use log::info;
use pw_gen_core::{
    generate_batch, GeneratorConfig, GeneratorError, MemorableConfig, MemorablePasswordGenerator,
    PasswordGenerator, PinGenerator, RandomPasswordConfig, RandomPasswordGenerator, RngSource, WordFile,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Verbosity is controlled with RUST_LOG (ex. RUST_LOG=debug)
    env_logger::init();

    // A JSON config can be given as first argument, ex. ./data/memorable.json
    // Ten passwords are then generated in parallel from it
    if let Some(path) = env::args().nth(1) {
        let config = GeneratorConfig::from_json(&fs::read_to_string(&path)?)?;
        info!("Loaded generator config from {}", path);
        for password in generate_batch(&config, 10, None)? {
            println!("{}", password);
        }
        return Ok(());
    }

    // 6 digits PIN
    let mut pin = PinGenerator::new(6, RngSource::from_os_rng());
    println!("PIN: {}", pin.generate());

    // 16 characters from letters, digits and symbols
    let mut random = RandomPasswordGenerator::new(
        RandomPasswordConfig { length: 16, include_numbers: true, include_symbols: true },
        RngSource::from_os_rng(),
    );
    println!("Random: {}", random.generate());

    // Memorable password, words loaded from the "data" directory.
    // Each word is randomly upper-cased or lower-cased
    let config = MemorableConfig { word_count: 5, separator: "-".to_owned(), capitalize: true, ..Default::default() };
    let mut memorable =
        MemorablePasswordGenerator::with_word_list(config, &WordFile::new("./data/words.txt"), RngSource::from_os_rng())?;
    println!("Memorable: {}", memorable.generate());

    // Same generator with a custom vocabulary, seeded to always print the same password
    let config = MemorableConfig {
        word_count: 3,
        vocabulary: Some(vec!["alpha".to_owned(), "beta".to_owned()]),
        ..Default::default()
    };
    let mut seeded = MemorablePasswordGenerator::new(config, RngSource::seeded(42))?;
    println!("Seeded memorable: {}", seeded.generate());

    // An empty vocabulary is rejected at construction
    match MemorablePasswordGenerator::new(
        MemorableConfig { vocabulary: Some(Vec::new()), ..Default::default() },
        RngSource::from_os_rng(),
    ) {
        Ok(_) => println!("Should not happen"),
        Err(GeneratorError::EmptyVocabulary) => println!("Empty vocabulary is invalid"),
        Err(e) => println!("Unexpected error: {}", e),
    }

    // Negative lengths are rejected when reading a config
    let config = GeneratorConfig::from_json(r#"{ "kind": "pin", "length": -4 }"#)?;
    match config.build(RngSource::from_os_rng()) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // Generators can be mixed behind the common trait
    let mut generators: Vec<Box<dyn PasswordGenerator>> = vec![Box::new(pin), Box::new(random), Box::new(memorable)];
    for i in 0..3 {
        for generator in generators.iter_mut() {
            println!("Generated password {}: {}", i + 1, generator.generate());
        }
    }

    Ok(())
}
