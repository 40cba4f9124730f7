// Boron/silver reference scenario
//
// Estimates the TOF distribution of the A=48 isotope from the boron and
// silver reference measurements and prints histograms of the draws.

use tofmc::{summarize, Model, ReferenceSource, Report, Settings};

fn main() -> Result<(), tofmc::Error> {
    env_logger::init();

    let boron = ReferenceSource::new("B", 10, 6.1, 0.5)?;
    let silver = ReferenceSource::new("Ag", 109, 12.2, 1.2)?;
    let settings = Settings {
        samples: 10_000,
        seed: None,
    };
    let model = Model::new(boron, silver, 48, settings)?;

    let bank = model.run()?;

    let boron_summary = summarize(bank.light())?;
    let result_summary = summarize(bank.interpolated())?;

    println!(
        "{}",
        Report::new("TOF distribution of B (time in ns)", bank.light(), boron_summary)
    );
    println!();
    println!(
        "{}",
        Report::new(
            "TOF distribution of A=48 (time in ns)",
            bank.interpolated(),
            result_summary
        )
    );

    Ok(())
}
