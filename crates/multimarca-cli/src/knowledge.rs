use clap::Subcommand;
use multimarca_descgen::{BRAND_DATABASE, CATEGORY_TEMPLATES};

#[derive(Debug, Subcommand)]
pub enum KnowledgeCommands {
    /// List recognized brands with their model keywords.
    Brands {
        /// Print the raw table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List category templates.
    Categories {
        /// Print the raw table as JSON.
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: &KnowledgeCommands) -> anyhow::Result<()> {
    match command {
        KnowledgeCommands::Brands { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(BRAND_DATABASE)?);
            } else {
                for entry in BRAND_DATABASE {
                    println!("{}: {}", entry.key, entry.model_keywords.join(", "));
                }
                println!("{} marcas reconocidas", BRAND_DATABASE.len());
            }
        }
        KnowledgeCommands::Categories { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(CATEGORY_TEMPLATES)?);
            } else {
                for template in CATEGORY_TEMPLATES {
                    println!(
                        "{}: {} características genéricas",
                        template.category,
                        template.features.len()
                    );
                }
                println!("{} plantillas de categoría", CATEGORY_TEMPLATES.len());
            }
        }
    }
    Ok(())
}
