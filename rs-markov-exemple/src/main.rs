use rs_markov_core::error::MarkovError;
use rs_markov_core::io;
use rs_markov_core::model::generator::Generator;
use rs_markov_core::model::input::{GenerateInput, ModelConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A small corpus; real callers would feed in whole books
    // (see rs_markov_core::io::read_corpus for file-backed corpora).
    let corpus = [
        "The quick brown fox jumped over the lazy dog.",
        "The lazy dog slept in the warm afternoon sun.",
        "The quick brown fox ran across the open field.",
        "A small bird watched the fox from the old fence.",
        "The old fence leaned over the edge of the field.",
        "A warm wind moved across the field and the fence.",
    ];

    // Configuration is fixed at model-creation time
    // 'prefix_size' is the number of trailing words used as Markov state
    // 'max_tries' bounds the retry loop of generate_sentence
    let mut config = ModelConfig::default();
    config.set_prefix_size(2)?;
    config.set_max_tries(200)?;

    // Setters validate their input; zero is rejected
    match config.set_prefix_size(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A prefix size of 0 is invalid, must be > 0"),
    }

    let mut generator = Generator::new(config);

    // Building is additive and chainable; later batches extend the model
    generator.build_model(&corpus[..3]).build_model(&corpus[3..]);

    // Unconstrained generation
    for i in 0..5 {
        println!("Generated sentence {}: {}", i + 1, generator.generate_sentence(&GenerateInput::default())?);
    }

    // Bounded length: the bound is a word count, not a character count
    let input = GenerateInput { max_length: Some(8), validator: None };
    match generator.generate_sentence(&input) {
        Ok(sentence) => println!("Short sentence: {}", sentence),
        Err(MarkovError::ExceededMaxTries { tries }) => {
            println!("No sentence of 8 words or fewer within {} attempts", tries)
        }
        Err(error) => return Err(error.into()),
    }

    // Custom validator: only accept sentences that end cleanly
    let ends_with_period = |candidate: &str| candidate.ends_with('.');
    let input = GenerateInput { max_length: None, validator: Some(&ends_with_period) };
    println!("Validated sentence: {}", generator.generate_sentence(&input)?);

    // A validator that rejects everything exhausts the retry bound
    let reject_all = |_: &str| false;
    let input = GenerateInput { max_length: None, validator: Some(&reject_all) };
    match generator.generate_sentence(&input) {
        Ok(_) => println!("Should not happen"),
        Err(MarkovError::ExceededMaxTries { tries }) => {
            println!("Rejecting validator failed after {} attempts, as expected", tries)
        }
        Err(error) => return Err(error.into()),
    }

    // Serialize, persist, reload: the text blob round-trips losslessly
    let text = generator.to_text()?;
    let path = std::env::temp_dir().join("rs-markov-model.json");
    io::save_text(&path, &text)?;

    let mut reloaded = Generator::default();
    reloaded.load_from_text(&io::load_text(&path)?)?;
    println!("Reloaded sentence: {}", reloaded.generate_sentence(&GenerateInput::default())?);

    Ok(())
}
