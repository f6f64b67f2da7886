use crate::domain::model::{EN_FR, FR_EN};
use clap::Parser;

#[derive(Parser)]
#[command(name = "mt")]
#[command(about = "Translate text through the Watson translation service.")]
#[command(version)]
pub struct Cli {
    /// Language pair model, e.g. en-fr
    #[arg(short = 'm', long, default_value = EN_FR)]
    pub model: String,

    /// Translate French to English
    #[arg(long, conflicts_with_all = ["model", "en_fr"])]
    pub fr_en: bool,

    /// Translate English to French
    #[arg(long, conflicts_with = "model")]
    pub en_fr: bool,

    /// Parse the query as a JSON value
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate; prints the demo translations when omitted
    #[arg(num_args = 1..)]
    pub query: Vec<String>,
}

impl Cli {
    pub fn model_id(&self) -> &str {
        if self.fr_en {
            FR_EN
        } else if self.en_fr {
            EN_FR
        } else {
            &self.model
        }
    }
}
