use clap::Parser;

/// Convert space-separated byte pairs into a list of hex literals.
#[derive(Parser, Debug)]
#[command(name = "strtohex", version, about, long_about = None)]
pub struct Args {
    /// The str to convert to hex: i.e.: "5a4c 5049"
    #[arg(value_name = "str")]
    pub input: String,
}
